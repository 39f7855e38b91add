use crate::auth::LoginRepository;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::login::{LoginIntent, LoginViewModel};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Instant;

/// Run the login screen until the user quits.
pub async fn run(config: &Config, repository: Arc<dyn LoginRepository>) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(config.ui.banner_duration());
    let view_model = LoginViewModel::new(repository, config.timing);
    let mut events = EventHandler::new(view_model.scope().clone());
    let mut form_rx = view_model.form_state();
    let mut login_rx = view_model.login_state();
    let mut ticker = tokio::time::interval(config.ui.tick_rate());

    tracing::info!("login screen opened");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        let follow_up: Option<LoginIntent> = tokio::select! {
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => match handle_key(&mut app, key) {
                    InputAction::Dispatch(intent) => Some(intent),
                    InputAction::None => None,
                },
                Some(AppEvent::Resize(cols, rows)) => {
                    tracing::trace!(cols, rows, "terminal resized");
                    None
                }
                None => break,
            },
            changed = form_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let form = form_rx.borrow_and_update().clone();
                app.on_form_changed(form)
            }
            changed = login_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let login = *login_rx.borrow_and_update();
                app.on_login_changed(login)
            }
            _ = ticker.tick() => {
                app.on_tick(Instant::now());
                None
            }
        };

        if let Some(intent) = follow_up {
            if let Err(err) = view_model.dispatch(intent) {
                tracing::warn!(error = %err, "intent dropped");
            }
        }
    }

    view_model.dispose().await;
    tracing::info!("login screen closed");
    drop(guard);
    Ok(())
}
