use crate::auth::types::{AuthResult, ErrorKind};

/// Remote authentication endpoint.
pub trait ApiService: Send + Sync + 'static {
    fn login(&self, user_name: &str, password: &str) -> AuthResult;
}

/// Fixed-table stand-in for a real authentication server.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockApiService;

impl ApiService for MockApiService {
    fn login(&self, user_name: &str, password: &str) -> AuthResult {
        authenticate(user_name, password)
    }
}

/// Maps an identifier to its canned outcome. The secret is never inspected.
pub fn authenticate(identifier: &str, _secret: &str) -> AuthResult {
    match identifier {
        "user" => AuthResult::Success { user_id: 1 },
        "wrong" => AuthResult::Failure(ErrorKind::WrongCredentials),
        "internal" => AuthResult::Failure(ErrorKind::InternalServerError),
        _ => AuthResult::Failure(ErrorKind::Unknown),
    }
}
