use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authorization property names understood by both the PEP compiler and the
/// ORM condition builder.
pub mod properties {
    /// Creator of a space.
    pub const OWNER_ID: &str = "owner_id";

    /// Primary key of the resource.
    pub const RESOURCE_ID: &str = "id";
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOp {
    /// `property IN (values)`
    In,
}

/// One condition on a named resource property. Column mapping happens in the
/// storage layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeFilter {
    property: String,
    op: FilterOp,
    values: Vec<Uuid>,
}

impl ScopeFilter {
    #[must_use]
    pub fn new(property: impl Into<String>, op: FilterOp, values: Vec<Uuid>) -> Self {
        Self {
            property: property.into(),
            op,
            values,
        }
    }

    #[inline]
    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }

    #[inline]
    #[must_use]
    pub fn op(&self) -> &FilterOp {
        &self.op
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &[Uuid] {
        &self.values
    }

    fn matches(&self, property: &str) -> bool {
        self.property == property && self.op == FilterOp::In
    }
}

/// Filters AND-ed together: one access path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeConstraint {
    filters: Vec<ScopeFilter>,
}

impl ScopeConstraint {
    #[must_use]
    pub fn new(filters: Vec<ScopeFilter>) -> Self {
        Self { filters }
    }

    #[inline]
    #[must_use]
    pub fn filters(&self) -> &[ScopeFilter] {
        &self.filters
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

/// Row-level visibility compiled from a PDP decision.
///
/// Constraints are OR-ed access paths. A scope is either unconstrained (no
/// row filter), constrained, or deny-all (no constraints at all); the default
/// is deny-all.
///
/// ```
/// use metaverse_security::access_scope::{AccessScope, properties};
/// use uuid::Uuid;
///
/// assert!(AccessScope::default().is_deny_all());
///
/// let owner = Uuid::now_v7();
/// let scope = AccessScope::for_owner(owner);
/// assert!(scope.contains_value(properties::OWNER_ID, owner));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessScope {
    constraints: Vec<ScopeConstraint>,
    unconstrained: bool,
}

impl Default for AccessScope {
    fn default() -> Self {
        Self::deny_all()
    }
}

impl AccessScope {
    #[must_use]
    pub fn from_constraints(constraints: Vec<ScopeConstraint>) -> Self {
        Self {
            constraints,
            unconstrained: false,
        }
    }

    #[must_use]
    pub fn single(constraint: ScopeConstraint) -> Self {
        Self::from_constraints(vec![constraint])
    }

    /// No row filter. Produced when the PDP allows without constraints.
    #[must_use]
    pub fn allow_all() -> Self {
        Self {
            constraints: Vec::new(),
            unconstrained: true,
        }
    }

    #[must_use]
    pub fn deny_all() -> Self {
        Self::from_constraints(Vec::new())
    }

    /// Rows whose owner is one of `owners`.
    #[must_use]
    pub fn for_owners(owners: Vec<Uuid>) -> Self {
        Self::single(ScopeConstraint::new(vec![ScopeFilter::new(
            properties::OWNER_ID,
            FilterOp::In,
            owners,
        )]))
    }

    #[must_use]
    pub fn for_owner(owner: Uuid) -> Self {
        Self::for_owners(vec![owner])
    }

    #[inline]
    #[must_use]
    pub fn constraints(&self) -> &[ScopeConstraint] {
        &self.constraints
    }

    #[inline]
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.unconstrained
    }

    #[must_use]
    pub fn is_deny_all(&self) -> bool {
        !self.unconstrained && self.constraints.is_empty()
    }

    fn filters(&self) -> impl Iterator<Item = &ScopeFilter> {
        self.constraints.iter().flat_map(ScopeConstraint::filters)
    }

    /// Every `IN` value given for `property`, across all access paths.
    #[must_use]
    pub fn all_values_for(&self, property: &str) -> Vec<Uuid> {
        self.filters()
            .filter(|f| f.matches(property))
            .flat_map(|f| f.values().iter().copied())
            .collect()
    }

    #[must_use]
    pub fn contains_value(&self, property: &str, id: Uuid) -> bool {
        self.filters()
            .any(|f| f.matches(property) && f.values().contains(&id))
    }

    #[must_use]
    pub fn has_property(&self, property: &str) -> bool {
        self.filters().any(|f| f.property() == property)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn default_denies_everything() {
        let scope = AccessScope::default();
        assert!(scope.is_deny_all());
        assert!(!scope.is_unconstrained());
    }

    #[test]
    fn allow_all_is_unconstrained() {
        let scope = AccessScope::allow_all();
        assert!(scope.is_unconstrained());
        assert!(!scope.is_deny_all());
        assert!(scope.constraints().is_empty());
    }

    #[test]
    fn owner_values_are_collected_across_paths() {
        let a = Uuid::now_v7();
        let b = Uuid::now_v7();
        let scope = AccessScope::from_constraints(vec![
            ScopeConstraint::new(vec![ScopeFilter::new(
                properties::OWNER_ID,
                FilterOp::In,
                vec![a],
            )]),
            ScopeConstraint::new(vec![ScopeFilter::new(
                properties::OWNER_ID,
                FilterOp::In,
                vec![b],
            )]),
        ]);

        assert_eq!(scope.all_values_for(properties::OWNER_ID), vec![a, b]);
        assert!(scope.contains_value(properties::OWNER_ID, b));
        assert!(!scope.has_property(properties::RESOURCE_ID));
    }

    #[test]
    fn empty_owner_list_is_not_deny_all() {
        // The path exists but matches nothing; SQL renders `IN ()` as false.
        let scope = AccessScope::for_owners(Vec::new());
        assert!(!scope.is_deny_all());
        assert!(scope.all_values_for(properties::OWNER_ID).is_empty());
    }
}
