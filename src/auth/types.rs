use thiserror::Error;

/// Email/password pair as entered on the login screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Failure kinds reported by the authentication service.
///
/// The display text is the wire name shown in the notification banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    #[error("WRONG_CREDENTIALS")]
    WrongCredentials,
    #[error("INTERNAL_SERVER_ERROR")]
    InternalServerError,
    #[error("UNKNOWN_ERROR")]
    Unknown,
}

/// Outcome of an authentication attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthResult {
    /// No attempt yet, or the last outcome was acknowledged.
    #[default]
    Empty,
    Success {
        user_id: i64,
    },
    Failure(ErrorKind),
}

impl AuthResult {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Text for the transient banner, if the result is resolved.
    pub fn banner_text(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::Success { user_id } => Some(format!("User {} logged in successfully!", user_id)),
            Self::Failure(kind) => Some(kind.to_string()),
        }
    }
}
