use metaverse_security::SecurityContext;

/// Result of a successful authentication.
#[derive(Debug, Clone)]
pub struct AuthenticationResult {
    pub security_context: SecurityContext,
}
