/// Errors that can occur when authenticating a caller.
#[derive(Debug, thiserror::Error)]
pub enum AuthNResolverError {
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}
