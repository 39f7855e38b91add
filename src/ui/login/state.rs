use crate::auth::{AuthResult, Credentials};
use crate::ui::mvi::UiState;

/// Contents of the login form as the view renders them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub email: String,
    pub password: String,
    /// Validation message; empty unless a rejection is waiting to be cleared.
    pub error_message: String,
}

impl UiState for FormState {}

impl FormState {
    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// Progress of the current login attempt.
///
/// `is_loading` and a resolved `result` never hold at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoginState {
    pub is_loading: bool,
    pub result: AuthResult,
}

impl UiState for LoginState {}

impl LoginState {
    pub fn pending() -> Self {
        Self {
            is_loading: true,
            result: AuthResult::Empty,
        }
    }

    pub fn resolved(result: AuthResult) -> Self {
        Self {
            is_loading: false,
            result,
        }
    }
}

/// A transient message that is shown and then cleared after a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageSlot {
    FormError,
    LoginFailure,
    LoginSuccess,
}

impl MessageSlot {
    pub fn index(self) -> usize {
        match self {
            MessageSlot::FormError => 0,
            MessageSlot::LoginFailure => 1,
            MessageSlot::LoginSuccess => 2,
        }
    }

    /// Slot that displays `result`, if it is resolved.
    pub fn for_result(result: &AuthResult) -> Option<Self> {
        match result {
            AuthResult::Empty => None,
            AuthResult::Success { .. } => Some(MessageSlot::LoginSuccess),
            AuthResult::Failure(_) => Some(MessageSlot::LoginFailure),
        }
    }
}

/// Everything the login reducer owns.
///
/// `form` and `login` are published to the view. The counters stay private to
/// the state machine: `form_error_seq` and `result_seq` increase every time a
/// message is raised in the corresponding slot, so a clear scheduled for an
/// older message can be told apart from the current one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginModel {
    pub form: FormState,
    pub login: LoginState,
    pub attempt: u64,
    pub form_error_seq: u64,
    pub result_seq: u64,
}

impl UiState for LoginModel {}

impl LoginModel {
    /// Sequence number of the message currently held in `slot`.
    pub fn seq(&self, slot: MessageSlot) -> u64 {
        match slot {
            MessageSlot::FormError => self.form_error_seq,
            MessageSlot::LoginFailure | MessageSlot::LoginSuccess => self.result_seq,
        }
    }

    /// Whether `slot` currently shows a message.
    pub fn is_showing(&self, slot: MessageSlot) -> bool {
        match slot {
            MessageSlot::FormError => self.form.has_error(),
            MessageSlot::LoginFailure => self.login.result.is_failure(),
            MessageSlot::LoginSuccess => self.login.result.is_success(),
        }
    }
}
