use authz_resolver_sdk::pep::EnforcerError;
use metaverse_db::DbError;
use metaverse_db::sea_orm::DbErr;
use spaces_sdk::SpacesError;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("validation failed on `{field}`: {message}")]
    Validation { field: String, message: String },

    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: Option<Uuid> },

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

    #[error("storage error: {0}")]
    Storage(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn space_not_found(id: Uuid) -> Self {
        Self::NotFound {
            entity: "space",
            id: Some(id),
        }
    }

    #[must_use]
    pub fn map_not_found(id: Uuid) -> Self {
        Self::NotFound {
            entity: "map",
            id: Some(id),
        }
    }

    #[must_use]
    pub fn element_not_found(id: Uuid) -> Self {
        Self::NotFound {
            entity: "element",
            id: Some(id),
        }
    }
}

impl From<DbError> for DomainError {
    fn from(e: DbError) -> Self {
        Self::Storage(e.to_string())
    }
}

impl From<DbErr> for DomainError {
    fn from(e: DbErr) -> Self {
        Self::Storage(e.to_string())
    }
}

impl From<EnforcerError> for DomainError {
    fn from(e: EnforcerError) -> Self {
        if e.is_denied() {
            tracing::debug!(error = %e, "authorization denied");
            Self::Forbidden
        } else {
            Self::Internal(e.to_string())
        }
    }
}

impl From<DomainError> for SpacesError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation { field, message } => Self::Validation { field, message },
            DomainError::NotFound { entity, id } => Self::not_found(entity, id),
            DomainError::Forbidden => Self::Forbidden,
            DomainError::OutOfBounds {
                x,
                y,
                width,
                height,
            } => Self::OutOfBounds {
                x,
                y,
                width,
                height,
            },
            DomainError::Conflict(msg) => Self::Conflict(msg),
            DomainError::Storage(msg) | DomainError::Internal(msg) => {
                tracing::error!(error = %msg, "spaces operation failed");
                Self::Internal
            }
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use authz_resolver_sdk::AuthZResolverError;
    use authz_resolver_sdk::pep::ConstraintCompileError;

    #[test]
    fn denied_enforcer_error_is_forbidden() {
        let err: DomainError =
            EnforcerError::CompileFailed(ConstraintCompileError::Denied { reason: None }).into();
        assert!(matches!(err, DomainError::Forbidden));
    }

    #[test]
    fn pdp_failure_is_internal() {
        let err: DomainError =
            EnforcerError::EvaluationFailed(AuthZResolverError::Internal("x".to_owned())).into();
        assert!(matches!(err, DomainError::Internal(_)));
    }

    #[test]
    fn storage_details_do_not_leak_to_sdk() {
        let sdk: SpacesError = DomainError::Storage("UNIQUE constraint failed".to_owned()).into();
        assert_eq!(sdk, SpacesError::Internal);
    }
}
