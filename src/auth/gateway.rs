use std::sync::Arc;

use crate::auth::api::ApiService;
use crate::auth::types::AuthResult;

/// Entry point the login screen uses to authenticate.
pub trait LoginRepository: Send + Sync + 'static {
    fn login_user(&self, email: &str, password: &str) -> AuthResult;
}

/// Forwards login requests to an [`ApiService`] unchanged.
#[derive(Clone)]
pub struct SessionGateway {
    api: Arc<dyn ApiService>,
}

impl SessionGateway {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self { api }
    }
}

impl LoginRepository for SessionGateway {
    fn login_user(&self, email: &str, password: &str) -> AuthResult {
        self.api.login(email, password)
    }
}
