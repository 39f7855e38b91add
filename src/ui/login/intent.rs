use crate::auth::{AuthResult, Credentials};
use crate::ui::login::state::MessageSlot;
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the login screen.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginIntent {
    /// Email field edited. Carries the full new text.
    EmailChanged(String),

    /// Password field edited. Carries the full new text.
    PasswordChanged(String),

    /// User pressed the login button.
    SubmitLogin,

    /// The view has shown the validation message; clear it after the delay.
    AcknowledgeFormError,

    /// The view has shown the failure banner; clear it after the delay.
    AcknowledgeLoginError,

    /// The view has shown the success banner; clear it after the delay.
    AcknowledgeLoginSuccess,

    /// System: simulated network latency for `attempt` has elapsed.
    LatencyElapsed { attempt: u64 },

    /// System: the gateway answered for `attempt`.
    LoginResolved { attempt: u64, result: AuthResult },

    /// System: the clear delay for message `seq` in `slot` has elapsed.
    ClearDue { slot: MessageSlot, seq: u64 },
}

impl Intent for LoginIntent {}

impl LoginIntent {
    /// Short name for logging. Never includes field contents.
    pub fn name(&self) -> &'static str {
        match self {
            LoginIntent::EmailChanged(_) => "email_changed",
            LoginIntent::PasswordChanged(_) => "password_changed",
            LoginIntent::SubmitLogin => "submit_login",
            LoginIntent::AcknowledgeFormError => "ack_form_error",
            LoginIntent::AcknowledgeLoginError => "ack_login_error",
            LoginIntent::AcknowledgeLoginSuccess => "ack_login_success",
            LoginIntent::LatencyElapsed { .. } => "latency_elapsed",
            LoginIntent::LoginResolved { .. } => "login_resolved",
            LoginIntent::ClearDue { .. } => "clear_due",
        }
    }
}

/// Side effects requested by the login reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginEffect {
    /// Wait out the simulated latency, then send `LatencyElapsed`.
    SimulateLatency { attempt: u64 },

    /// Call the session gateway, then send `LoginResolved`.
    Authenticate {
        attempt: u64,
        credentials: Credentials,
    },

    /// A message was just put into `slot`. Any clear pending for an older
    /// message in the slot is obsolete.
    MessageRaised { slot: MessageSlot, seq: u64 },

    /// Send `ClearDue` once the clear delay after message `seq` has passed.
    ScheduleClear { slot: MessageSlot, seq: u64 },
}
