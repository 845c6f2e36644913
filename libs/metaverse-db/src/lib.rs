//! Database plumbing shared by metaverse modules.
//!
//! - [`Db`] wraps a `SeaORM` connection pool and provides the unit of work
//!   ([`Db::with_transaction`]) used by repositories for multi-row writes.
//! - [`secure`] turns an [`AccessScope`](metaverse_security::AccessScope) into a
//!   `SeaORM` condition so repositories can apply PDP constraints in SQL.
//! - [`migration_runner`] applies a module's migrations.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod db;
mod error;
pub mod migration_runner;
pub mod secure;

pub use db::{ConnectOpts, Db, connect_db};
pub use error::DbError;

pub use sea_orm;
pub use sea_orm_migration;
