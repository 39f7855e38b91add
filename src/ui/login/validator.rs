use thiserror::Error;

use crate::ui::login::state::FormState;

/// Why the form cannot be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Error, the email cannot be empty!")]
    EmailEmpty,
    #[error("Error, the password cannot be empty!")]
    PasswordEmpty,
}

/// Checks that both fields have content. Email is checked first.
pub fn validate(form: &FormState) -> Result<(), ValidationError> {
    if form.email.trim_end().is_empty() {
        return Err(ValidationError::EmailEmpty);
    }
    if form.password.trim_end().is_empty() {
        return Err(ValidationError::PasswordEmpty);
    }
    Ok(())
}
