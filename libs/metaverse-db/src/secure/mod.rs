//! Scope-aware query helpers.
//!
//! Entities opt in by implementing [`ScopableEntity`]; repositories then
//! filter with [`build_scope_condition`] so the PDP decision is enforced in
//! SQL rather than after the rows are loaded.

mod cond;

pub use cond::build_scope_condition;
pub use metaverse_security::AccessScope;

use metaverse_security::properties;
use sea_orm::EntityTrait;

/// Maps authorization properties onto entity columns.
pub trait ScopableEntity: EntityTrait {
    /// Column holding the owning user, if the entity is user-owned.
    fn owner_col() -> Option<Self::Column>;

    /// Primary key column.
    fn id_col() -> Self::Column;

    /// Resolve a property name to a column. Unknown properties return `None`,
    /// which makes the enclosing constraint fail closed.
    #[must_use]
    fn resolve_property(property: &str) -> Option<Self::Column> {
        match property {
            properties::OWNER_ID => Self::owner_col(),
            properties::RESOURCE_ID => Some(Self::id_col()),
            _ => None,
        }
    }
}
