//! Principal resolution from request credentials.

use uuid::Uuid;

use crate::jwt::JwtDecoder;

/// Resolves the authenticated principal behind a call, if any.
///
/// Resolution never fails: a missing, malformed, or expired credential
/// simply yields no principal and the caller decides what that means.
pub trait AuthResolver: Send + Sync + std::fmt::Debug + 'static {
    /// Resolve a raw bearer token (without the `Bearer ` prefix).
    fn resolve(&self, bearer_token: Option<&str>) -> Option<Uuid>;
}

impl AuthResolver for JwtDecoder {
    fn resolve(&self, bearer_token: Option<&str>) -> Option<Uuid> {
        let token = bearer_token?;
        match self.decode_access_token(token) {
            Ok(claims) => Some(claims.user_id()),
            Err(e) => {
                tracing::debug!(error = %e, "Bearer token rejected");
                None
            }
        }
    }
}
