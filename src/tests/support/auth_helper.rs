use std::sync::Arc;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::TokenProvider;

pub const TEST_ADMIN_EMAIL: &str = "owner@example.com";

pub fn jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig::new(
        "test_secret_key_for_testing_purposes_only",
        3600,
    ))
}

/// What the `AdminUser` extractor looks up in app data.
pub fn token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(jwt_service())
}

/// `Authorization` header value for the test administrator.
pub fn admin_bearer() -> String {
    let token = jwt_service()
        .issue_admin_token(TEST_ADMIN_EMAIL)
        .expect("test token");
    format!("Bearer {}", token)
}
