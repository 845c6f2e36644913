use uuid::Uuid;

/// Errors returned by [`SpacesClientV1`](crate::SpacesClientV1).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpacesError {
    #[error("validation failed on `{field}`: {message}")]
    Validation { field: String, message: String },

    #[error("{entity} not found")]
    NotFound { entity: String, id: Option<Uuid> },

    #[error("forbidden")]
    Forbidden,

    #[error("coordinates ({x}, {y}) outside {width}x{height}")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("internal error")]
    Internal,
}

impl SpacesError {
    #[must_use]
    pub fn not_found(entity: impl Into<String>, id: Option<Uuid>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id,
        }
    }
}
