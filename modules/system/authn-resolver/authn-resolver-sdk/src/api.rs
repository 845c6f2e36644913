use async_trait::async_trait;

use crate::error::AuthNResolverError;
use crate::models::AuthenticationResult;

/// Identity provider: turns a bearer token into a caller identity.
///
/// Implementations must not panic on malformed input; every token that does
/// not map to an identity yields [`AuthNResolverError::Unauthorized`].
#[async_trait]
pub trait AuthNResolverClient: Send + Sync {
    /// Authenticate a bearer token (without the `Bearer ` prefix).
    ///
    /// # Errors
    ///
    /// - `Unauthorized` if the token is empty, unknown or expired
    /// - `ServiceUnavailable` if the identity provider cannot be reached
    async fn authenticate(
        &self,
        bearer_token: &str,
    ) -> Result<AuthenticationResult, AuthNResolverError>;
}
