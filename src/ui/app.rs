use std::time::{Duration, Instant};

use crate::auth::AuthResult;
use crate::ui::login::{FormState, LoginIntent, LoginState};

/// Which control receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Email,
    Password,
    Submit,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Email => Focus::Password,
            Focus::Password => Focus::Submit,
            Focus::Submit => Focus::Email,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Email => Focus::Submit,
            Focus::Password => Focus::Email,
            Focus::Submit => Focus::Password,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Error,
    Success,
}

/// Transient notification shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub text: String,
    pub kind: BannerKind,
    pub expires_at: Instant,
}

/// View-side state of the login screen.
///
/// Mirrors the last published [`FormState`] and [`LoginState`] and adds what
/// only the view cares about: focus, password visibility, the banner.
/// Field text is kept locally as typed so fast typing never races the
/// view-model round trip.
pub struct App {
    email_input: String,
    password_input: String,
    form: FormState,
    login: LoginState,
    focus: Focus,
    password_visible: bool,
    banner: Option<Banner>,
    banner_duration: Duration,
    spinner_tick: u8,
    should_quit: bool,
}

impl App {
    pub fn new(banner_duration: Duration) -> Self {
        Self {
            email_input: String::new(),
            password_input: String::new(),
            form: FormState::default(),
            login: LoginState::default(),
            focus: Focus::Email,
            password_visible: false,
            banner: None,
            banner_duration,
            spinner_tick: 0,
            should_quit: false,
        }
    }

    pub fn email_input(&self) -> &str {
        &self.email_input
    }

    pub fn password_input(&self) -> &str {
        &self.password_input
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn login(&self) -> &LoginState {
        &self.login
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn spinner_tick(&self) -> u8 {
        self.spinner_tick
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Submit is disabled while an attempt is in flight.
    pub fn can_submit(&self) -> bool {
        !self.login.is_loading
    }

    /// Append `ch` to the focused field and return the edit to dispatch.
    pub fn insert_char(&mut self, ch: char) -> Option<LoginIntent> {
        match self.focus {
            Focus::Email => {
                self.email_input.push(ch);
                Some(LoginIntent::EmailChanged(self.email_input.clone()))
            }
            Focus::Password => {
                self.password_input.push(ch);
                Some(LoginIntent::PasswordChanged(self.password_input.clone()))
            }
            Focus::Submit => None,
        }
    }

    /// Remove the last character of the focused field.
    pub fn delete_char(&mut self) -> Option<LoginIntent> {
        match self.focus {
            Focus::Email => {
                self.email_input.pop()?;
                Some(LoginIntent::EmailChanged(self.email_input.clone()))
            }
            Focus::Password => {
                self.password_input.pop()?;
                Some(LoginIntent::PasswordChanged(self.password_input.clone()))
            }
            Focus::Submit => None,
        }
    }

    /// New form state published. Returns the acknowledgement to dispatch if
    /// a validation message has to be shown.
    pub fn on_form_changed(&mut self, form: FormState) -> Option<LoginIntent> {
        let ack = if form.has_error() {
            self.show_banner(form.error_message.clone(), BannerKind::Error);
            Some(LoginIntent::AcknowledgeFormError)
        } else {
            None
        };
        self.form = form;
        ack
    }

    /// New login state published. Returns the acknowledgement to dispatch if
    /// a result has to be shown.
    pub fn on_login_changed(&mut self, login: LoginState) -> Option<LoginIntent> {
        self.login = login;
        let text = login.result.banner_text()?;
        match login.result {
            AuthResult::Success { .. } => {
                self.show_banner(text, BannerKind::Success);
                Some(LoginIntent::AcknowledgeLoginSuccess)
            }
            AuthResult::Failure(_) => {
                self.show_banner(text, BannerKind::Error);
                Some(LoginIntent::AcknowledgeLoginError)
            }
            AuthResult::Empty => None,
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.spinner_tick = self.spinner_tick.wrapping_add(1);
        if self
            .banner
            .as_ref()
            .is_some_and(|banner| now >= banner.expires_at)
        {
            self.banner = None;
        }
    }

    fn show_banner(&mut self, text: String, kind: BannerKind) {
        self.banner = Some(Banner {
            text,
            kind,
            expires_at: Instant::now() + self.banner_duration,
        });
    }
}
