//! Login screen feature module.
//!
//! The reducer is pure; [`LoginViewModel`] owns the state, runs the effects
//! the reducer asks for and publishes [`FormState`] and [`LoginState`] to the
//! view.

mod intent;
mod reducer;
mod state;
mod validator;
mod view_model;

pub use intent::{LoginEffect, LoginIntent};
pub use reducer::LoginReducer;
pub use state::{FormState, LoginModel, LoginState, MessageSlot};
pub use validator::{validate, ValidationError};
pub use view_model::{LoginViewModel, ViewModelError};
