use std::time::Duration;

use futures::future::BoxFuture;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DatabaseTransaction, TransactionTrait};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::DbError;

/// Connection pool options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConnectOpts {
    pub max_conns: Option<u32>,
    pub min_conns: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
    pub sqlx_logging: bool,
}

/// Shared database handle.
///
/// Cheap to clone: the underlying pool is reference counted by `SeaORM`.
#[derive(Clone, Debug)]
pub struct Db {
    conn: DatabaseConnection,
}

impl Db {
    #[must_use]
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Connection for single-statement reads and writes.
    #[inline]
    #[must_use]
    pub fn conn(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Run `f` as one unit of work.
    ///
    /// The transaction commits when `f` returns `Ok` and rolls back when it
    /// returns `Err`. A future dropped mid-flight drops the transaction, which
    /// rolls it back as well, so callers never observe a partial write.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `f`, or a [`DbError`] (converted into `E`)
    /// when the transaction cannot be opened or committed.
    pub async fn with_transaction<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: for<'c> FnOnce(&'c DatabaseTransaction) -> BoxFuture<'c, Result<T, E>> + Send,
        T: Send,
        E: From<DbError> + Send,
    {
        let txn = self.conn.begin().await.map_err(DbError::from)?;

        match f(&txn).await {
            Ok(value) => {
                txn.commit().await.map_err(DbError::from)?;
                debug!("transaction committed");
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    warn!(error = %rollback_err, "transaction rollback failed");
                } else {
                    debug!("transaction rolled back");
                }
                Err(err)
            }
        }
    }
}

/// Open a connection pool for `dsn`.
///
/// # Errors
///
/// Returns [`DbError::InvalidConfig`] for an empty DSN and [`DbError::Sea`]
/// when the pool cannot be created.
pub async fn connect_db(dsn: &str, opts: ConnectOpts) -> Result<Db, DbError> {
    if dsn.trim().is_empty() {
        return Err(DbError::InvalidConfig("database url is empty".to_owned()));
    }

    let mut options = ConnectOptions::new(dsn.to_owned());
    if let Some(max) = opts.max_conns {
        options.max_connections(max);
    }
    if let Some(min) = opts.min_conns {
        options.min_connections(min);
    }
    if let Some(secs) = opts.acquire_timeout_secs {
        options.acquire_timeout(Duration::from_secs(secs));
    }
    options.sqlx_logging(opts.sqlx_logging);

    let conn = Database::connect(options).await?;
    Ok(Db::new(conn))
}
