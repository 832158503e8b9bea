use thiserror::Error;

use crate::auth::AuthError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("search backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("authentication failed: {0}")]
    Auth(#[from] AuthError),
}

impl AppError {
    /// The only text a user ever sees for a failure.
    pub fn notice(&self) -> &'static str {
        match self {
            AppError::Auth(_) => "Login failed",
            AppError::Upstream(_) => "Something went wrong",
        }
    }
}

#[test]
fn test_auth_errors_collapse_to_one_notice() {
    let rejected = AppError::from(AuthError::Rejected("INVALID_PASSWORD".into()));
    let missing = AppError::from(AuthError::NotConfigured);
    assert_eq!(rejected.notice(), "Login failed");
    assert_eq!(missing.notice(), rejected.notice());
}
