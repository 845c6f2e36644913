//! Applies a module's `SeaORM` migrations against a [`Db`].

use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::{Db, DbError};

/// Run every pending migration of `M`.
///
/// # Errors
///
/// Returns [`DbError::Sea`] if any migration fails; already applied
/// migrations are left in place.
pub async fn run_migrations<M: MigratorTrait>(db: &Db) -> Result<(), DbError> {
    let pending = M::get_pending_migrations(db.conn()).await?.len();
    M::up(db.conn(), None).await?;
    info!(applied = pending, "migrations applied");
    Ok(())
}
