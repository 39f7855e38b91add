//! Screen-scoped owner of the login state.
//!
//! One actor task per screen processes intents from a single mailbox, so all
//! writes to [`FormState`] and [`LoginState`] are serialized. Timers and the
//! gateway call run as separate tasks tied to the screen's [`ScreenScope`]
//! and report back through the same mailbox.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::auth::LoginRepository;
use crate::config::TimingConfig;
use crate::scope::ScreenScope;
use crate::ui::login::intent::{LoginEffect, LoginIntent};
use crate::ui::login::reducer::LoginReducer;
use crate::ui::login::state::{FormState, LoginModel, LoginState, MessageSlot};
use crate::ui::mvi::{Reducer, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ViewModelError {
    #[error("login screen has been disposed")]
    Disposed,
}

pub struct LoginViewModel {
    sender: mpsc::UnboundedSender<LoginIntent>,
    form: watch::Receiver<FormState>,
    login: watch::Receiver<LoginState>,
    scope: ScreenScope,
    actor: Mutex<Option<JoinHandle<()>>>,
}

impl LoginViewModel {
    /// Open a new login screen. Must be called from within a tokio runtime.
    pub fn new(repository: Arc<dyn LoginRepository>, timing: TimingConfig) -> Self {
        let scope = ScreenScope::new();
        let (sender, mailbox) = mpsc::unbounded_channel();
        let (form_tx, form) = watch::channel(FormState::default());
        let (login_tx, login) = watch::channel(LoginState::default());

        let actor = LoginActor {
            model: LoginModel::default(),
            repository,
            latency: timing.latency(),
            message_clear: timing.message_clear(),
            mailbox,
            loopback: sender.downgrade(),
            form_tx,
            login_tx,
            scope: scope.clone(),
            pending_clears: Default::default(),
            raised_at: [None; 3],
        };
        let handle = tokio::spawn(actor.run());

        Self {
            sender,
            form,
            login,
            scope,
            actor: Mutex::new(Some(handle)),
        }
    }

    pub fn dispatch(&self, intent: LoginIntent) -> Result<(), ViewModelError> {
        if self.scope.is_disposed() {
            return Err(ViewModelError::Disposed);
        }
        self.sender
            .send(intent)
            .map_err(|_| ViewModelError::Disposed)
    }

    /// Stream of form state; the current value is always available.
    pub fn form_state(&self) -> watch::Receiver<FormState> {
        self.form.clone()
    }

    /// Stream of login-attempt state.
    pub fn login_state(&self) -> watch::Receiver<LoginState> {
        self.login.clone()
    }

    pub fn scope(&self) -> &ScreenScope {
        &self.scope
    }

    /// Cancel all pending work and wait for the actor to stop.
    pub async fn dispose(&self) {
        self.scope.dispose();
        let handle = self.actor.lock().take();
        if let Some(handle) = handle {
            if let Err(err) = handle.await {
                tracing::warn!(error = %err, "login actor ended abnormally");
            }
        }
    }
}

impl Drop for LoginViewModel {
    fn drop(&mut self) {
        self.scope.dispose();
    }
}

struct LoginActor {
    model: LoginModel,
    repository: Arc<dyn LoginRepository>,
    latency: Duration,
    message_clear: Duration,
    mailbox: mpsc::UnboundedReceiver<LoginIntent>,
    // Weak so that dropping every view-model handle closes the mailbox.
    loopback: mpsc::WeakUnboundedSender<LoginIntent>,
    form_tx: watch::Sender<FormState>,
    login_tx: watch::Sender<LoginState>,
    scope: ScreenScope,
    pending_clears: [Option<CancellationToken>; 3],
    raised_at: [Option<(u64, Instant)>; 3],
}

impl LoginActor {
    async fn run(mut self) {
        loop {
            let intent = tokio::select! {
                biased;
                _ = self.scope.disposed() => break,
                next = self.mailbox.recv() => match next {
                    Some(intent) => intent,
                    None => break,
                },
            };
            if self.scope.is_disposed() {
                break;
            }
            self.handle(intent);
        }
        tracing::debug!("login actor stopped");
    }

    fn handle(&mut self, intent: LoginIntent) {
        tracing::debug!(intent = intent.name(), "login intent");

        let model = std::mem::take(&mut self.model);
        let Transition { state, effects } = LoginReducer::reduce(model, intent);
        self.model = state;

        let mut raised = [false; 3];
        for effect in &effects {
            if let LoginEffect::MessageRaised { slot, .. } = effect {
                raised[slot.index()] = true;
            }
        }
        self.publish(raised);

        for effect in effects {
            self.run_effect(effect);
        }
    }

    /// Publish changed state. A freshly raised message is always published,
    /// even when its text equals the previous one, so the view shows it again.
    fn publish(&self, raised: [bool; 3]) {
        let force_form = raised[MessageSlot::FormError.index()];
        let form = &self.model.form;
        self.form_tx.send_if_modified(|current| {
            if !force_form && current == form {
                return false;
            }
            current.clone_from(form);
            true
        });

        let force_login = raised[MessageSlot::LoginFailure.index()]
            || raised[MessageSlot::LoginSuccess.index()];
        let login = self.model.login;
        self.login_tx.send_if_modified(|current| {
            if !force_login && *current == login {
                return false;
            }
            *current = login;
            true
        });
    }

    fn run_effect(&mut self, effect: LoginEffect) {
        match effect {
            LoginEffect::SimulateLatency { attempt } => {
                tracing::info!(attempt, "login attempt started");
                let deadline = Instant::now() + self.latency;
                self.send_at(deadline, LoginIntent::LatencyElapsed { attempt });
            }
            LoginEffect::Authenticate {
                attempt,
                credentials,
            } => {
                let Some(sender) = self.loopback.upgrade() else {
                    return;
                };
                let repository = Arc::clone(&self.repository);
                self.scope.spawn(async move {
                    let result = repository.login_user(&credentials.email, &credentials.password);
                    tracing::info!(attempt, ?result, "login attempt resolved");
                    if sender
                        .send(LoginIntent::LoginResolved { attempt, result })
                        .is_err()
                    {
                        tracing::trace!("login result dropped (screen gone)");
                    }
                });
            }
            LoginEffect::MessageRaised { slot, seq } => {
                self.cancel_pending_clear(slot);
                self.raised_at[slot.index()] = Some((seq, Instant::now()));
            }
            LoginEffect::ScheduleClear { slot, seq } => {
                self.cancel_pending_clear(slot);
                // The delay runs from when the message was raised, not from
                // when the view got around to acknowledging it.
                let deadline = match self.raised_at[slot.index()] {
                    Some((raised_seq, at)) if raised_seq == seq => at + self.message_clear,
                    _ => Instant::now() + self.message_clear,
                };
                let token = self.send_at(deadline, LoginIntent::ClearDue { slot, seq });
                self.pending_clears[slot.index()] = token;
            }
        }
    }

    fn cancel_pending_clear(&mut self, slot: MessageSlot) {
        if let Some(token) = self.pending_clears[slot.index()].take() {
            token.cancel();
        }
    }

    /// Deliver `intent` to this actor at `deadline`.
    fn send_at(&self, deadline: Instant, intent: LoginIntent) -> Option<CancellationToken> {
        let sender = self.loopback.upgrade()?;
        Some(self.scope.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if sender.send(intent).is_err() {
                tracing::trace!("timer intent dropped (screen gone)");
            }
        }))
    }
}
