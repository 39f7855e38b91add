use crate::auth::AuthResult;
use crate::ui::login::intent::{LoginEffect, LoginIntent};
use crate::ui::login::state::{LoginModel, LoginState, MessageSlot};
use crate::ui::login::validator::validate;
use crate::ui::mvi::{Reducer, Transition};

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginModel;
    type Intent = LoginIntent;
    type Effect = LoginEffect;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Transition<Self::State, Self::Effect> {
        match intent {
            LoginIntent::EmailChanged(text) => {
                state.form.email = text.trim_end().to_string();
                Transition::to(state)
            }
            LoginIntent::PasswordChanged(text) => {
                state.form.password = text.trim_end().to_string();
                Transition::to(state)
            }
            LoginIntent::SubmitLogin => match validate(&state.form) {
                Err(rejection) => {
                    state.form.error_message = rejection.to_string();
                    state.form_error_seq += 1;
                    let seq = state.form_error_seq;
                    Transition::to(state).with_effect(LoginEffect::MessageRaised {
                        slot: MessageSlot::FormError,
                        seq,
                    })
                }
                Ok(()) => {
                    state.attempt += 1;
                    state.login = LoginState::pending();
                    let attempt = state.attempt;
                    Transition::to(state).with_effect(LoginEffect::SimulateLatency { attempt })
                }
            },
            LoginIntent::LatencyElapsed { attempt } => {
                // Credentials are read now, not at submit time: edits made
                // while waiting go into the request.
                let credentials = state.form.credentials();
                Transition::to(state).with_effect(LoginEffect::Authenticate {
                    attempt,
                    credentials,
                })
            }
            LoginIntent::LoginResolved { result, .. } => {
                state.login = LoginState::resolved(result);
                match MessageSlot::for_result(&result) {
                    Some(slot) => {
                        state.result_seq += 1;
                        let seq = state.result_seq;
                        Transition::to(state).with_effect(LoginEffect::MessageRaised { slot, seq })
                    }
                    None => Transition::to(state),
                }
            }
            LoginIntent::AcknowledgeFormError => schedule_clear(state, MessageSlot::FormError),
            LoginIntent::AcknowledgeLoginError => schedule_clear(state, MessageSlot::LoginFailure),
            LoginIntent::AcknowledgeLoginSuccess => {
                schedule_clear(state, MessageSlot::LoginSuccess)
            }
            LoginIntent::ClearDue { slot, seq } => {
                if seq == state.seq(slot) && state.is_showing(slot) {
                    match slot {
                        MessageSlot::FormError => state.form.error_message.clear(),
                        MessageSlot::LoginFailure | MessageSlot::LoginSuccess => {
                            state.login.result = AuthResult::Empty;
                        }
                    }
                }
                Transition::to(state)
            }
        }
    }
}

fn schedule_clear(state: LoginModel, slot: MessageSlot) -> Transition<LoginModel, LoginEffect> {
    if !state.is_showing(slot) {
        return Transition::to(state);
    }
    let seq = state.seq(slot);
    Transition::to(state).with_effect(LoginEffect::ScheduleClear { slot, seq })
}
