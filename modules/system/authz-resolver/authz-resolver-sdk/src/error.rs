/// Errors raised by the PDP itself (not policy denials).
#[derive(Debug, thiserror::Error)]
pub enum AuthZResolverError {
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}
