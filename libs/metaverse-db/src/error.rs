use sea_orm::DbErr;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sea(#[from] DbErr),

    #[error("invalid database configuration: {0}")]
    InvalidConfig(String),
}
