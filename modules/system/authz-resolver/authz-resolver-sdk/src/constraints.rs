//! Row-level constraints returned by the PDP.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A conjunction of predicates. Constraints in a response are `ORed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    pub predicates: Vec<Predicate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Predicate {
    /// `property = value`
    Eq(EqPredicate),
    /// `property IN (values)`
    In(InPredicate),
}

impl Predicate {
    #[must_use]
    pub fn property(&self) -> &str {
        match self {
            Self::Eq(p) => &p.property,
            Self::In(p) => &p.property,
        }
    }

    #[must_use]
    pub fn eq(property: impl Into<String>, value: Uuid) -> Self {
        Self::Eq(EqPredicate {
            property: property.into(),
            value,
        })
    }

    #[must_use]
    pub fn in_values(property: impl Into<String>, values: Vec<Uuid>) -> Self {
        Self::In(InPredicate {
            property: property.into(),
            values,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EqPredicate {
    pub property: String,
    pub value: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InPredicate {
    pub property: String,
    pub values: Vec<Uuid>,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn predicate_is_tagged_by_op() {
        let id = Uuid::nil();
        let json = serde_json::to_value(Predicate::eq("owner_id", id)).unwrap();
        assert_eq!(json["op"], "eq");
        assert_eq!(json["property"], "owner_id");

        let back: Predicate = serde_json::from_value(json).unwrap();
        assert_eq!(back.property(), "owner_id");
    }
}
