mod common;

use common::{timing, RecordingRepository, CLEAR_DELAY, LATENCY};
use elogin::auth::{AuthResult, Credentials, ErrorKind};
use elogin::ui::login::{LoginIntent, LoginState, LoginViewModel, ViewModelError};
use std::time::Duration;
use tokio::time::{sleep, Instant};

fn fill(vm: &LoginViewModel, email: &str, password: &str) {
    vm.dispatch(LoginIntent::EmailChanged(email.into())).unwrap();
    vm.dispatch(LoginIntent::PasswordChanged(password.into()))
        .unwrap();
}

#[tokio::test(start_paused = true)]
async fn valid_login_resolves_after_latency() {
    let repo = RecordingRepository::new();
    let vm = LoginViewModel::new(repo.clone(), timing());
    let mut login = vm.login_state();

    fill(&vm, "user", "password1!");
    vm.dispatch(LoginIntent::SubmitLogin).unwrap();
    let started = Instant::now();

    let pending = *login.wait_for(|s| s.is_loading).await.unwrap();
    assert_eq!(pending, LoginState::pending());
    assert!(started.elapsed() < LATENCY);

    let done = *login.wait_for(|s| !s.is_loading).await.unwrap();
    assert!(started.elapsed() >= LATENCY);
    assert_eq!(
        done,
        LoginState::resolved(AuthResult::Success { user_id: 1 })
    );
    assert_eq!(
        repo.calls(),
        vec![Credentials {
            email: "user".into(),
            password: "password1!".into(),
        }]
    );
}

#[tokio::test(start_paused = true)]
async fn result_matches_authenticator_table() {
    let cases = [
        ("user", AuthResult::Success { user_id: 1 }),
        ("wrong", AuthResult::Failure(ErrorKind::WrongCredentials)),
        ("internal", AuthResult::Failure(ErrorKind::InternalServerError)),
        ("someone@example.com", AuthResult::Failure(ErrorKind::Unknown)),
    ];

    for (email, expected) in cases {
        let vm = LoginViewModel::new(RecordingRepository::new(), timing());
        let mut login = vm.login_state();
        fill(&vm, email, "password1!");
        vm.dispatch(LoginIntent::SubmitLogin).unwrap();

        let done = *login.wait_for(|s| !s.result.is_empty()).await.unwrap();
        assert_eq!(done, LoginState::resolved(expected), "email {:?}", email);
    }
}

#[tokio::test(start_paused = true)]
async fn empty_email_is_rejected_without_calling_gateway() {
    let repo = RecordingRepository::new();
    let vm = LoginViewModel::new(repo.clone(), timing());
    let mut form = vm.form_state();
    let login = vm.login_state();

    fill(&vm, "", "x");
    vm.dispatch(LoginIntent::SubmitLogin).unwrap();

    let rejected = form.wait_for(|f| f.has_error()).await.unwrap().clone();
    assert_eq!(rejected.error_message, "Error, the email cannot be empty!");

    sleep(LATENCY * 3).await;
    assert_eq!(repo.call_count(), 0);
    assert_eq!(*login.borrow(), LoginState::default());
}

#[tokio::test(start_paused = true)]
async fn whitespace_password_is_rejected() {
    let repo = RecordingRepository::new();
    let vm = LoginViewModel::new(repo.clone(), timing());
    let mut form = vm.form_state();

    fill(&vm, "user", "  \t ");
    vm.dispatch(LoginIntent::SubmitLogin).unwrap();

    let rejected = form.wait_for(|f| f.has_error()).await.unwrap().clone();
    assert_eq!(
        rejected.error_message,
        "Error, the password cannot be empty!"
    );
    sleep(LATENCY * 2).await;
    assert_eq!(repo.call_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn form_error_clears_relative_to_when_it_was_raised() {
    let vm = LoginViewModel::new(RecordingRepository::new(), timing());
    let mut form = vm.form_state();

    vm.dispatch(LoginIntent::SubmitLogin).unwrap();
    form.wait_for(|f| f.has_error()).await.unwrap();
    let raised = Instant::now();

    sleep(Duration::from_millis(500)).await;
    vm.dispatch(LoginIntent::AcknowledgeFormError).unwrap();

    form.wait_for(|f| !f.has_error()).await.unwrap();
    let elapsed = raised.elapsed();
    assert!(elapsed >= CLEAR_DELAY, "cleared too early: {:?}", elapsed);
    assert!(
        elapsed < CLEAR_DELAY + Duration::from_millis(500),
        "clear delay ran from the acknowledgement: {:?}",
        elapsed
    );
}

#[tokio::test(start_paused = true)]
async fn older_clear_never_removes_newer_error() {
    let vm = LoginViewModel::new(RecordingRepository::new(), timing());
    let mut form = vm.form_state();

    vm.dispatch(LoginIntent::SubmitLogin).unwrap();
    form.wait_for(|f| f.has_error()).await.unwrap();
    let first_raised = Instant::now();
    vm.dispatch(LoginIntent::AcknowledgeFormError).unwrap();

    sleep(Duration::from_millis(500)).await;
    vm.dispatch(LoginIntent::EmailChanged("user".into())).unwrap();
    vm.dispatch(LoginIntent::SubmitLogin).unwrap();
    form.wait_for(|f| f.error_message.contains("password"))
        .await
        .unwrap();
    vm.dispatch(LoginIntent::AcknowledgeFormError).unwrap();

    sleep_until_after(first_raised, CLEAR_DELAY + Duration::from_millis(100)).await;
    assert_eq!(
        form.borrow().error_message,
        "Error, the password cannot be empty!"
    );

    form.wait_for(|f| !f.has_error()).await.unwrap();
    assert!(first_raised.elapsed() >= Duration::from_millis(500) + CLEAR_DELAY);
}

#[tokio::test(start_paused = true)]
async fn repeated_rejection_is_published_again() {
    let vm = LoginViewModel::new(RecordingRepository::new(), timing());
    let mut form = vm.form_state();

    vm.dispatch(LoginIntent::SubmitLogin).unwrap();
    form.wait_for(|f| f.has_error()).await.unwrap();

    vm.dispatch(LoginIntent::SubmitLogin).unwrap();
    let changed = tokio::time::timeout(Duration::from_millis(50), form.changed()).await;
    assert!(matches!(changed, Ok(Ok(()))));
    assert!(form.borrow_and_update().has_error());
}

#[tokio::test(start_paused = true)]
async fn acknowledging_login_error_clears_only_the_result() {
    let vm = LoginViewModel::new(RecordingRepository::new(), timing());
    let form = vm.form_state();
    let mut login = vm.login_state();

    fill(&vm, "wrong", "password1!");
    vm.dispatch(LoginIntent::SubmitLogin).unwrap();
    login.wait_for(|s| s.result.is_failure()).await.unwrap();
    let resolved_at = Instant::now();

    vm.dispatch(LoginIntent::AcknowledgeLoginError).unwrap();
    let cleared = *login.wait_for(|s| s.result.is_empty()).await.unwrap();

    assert!(resolved_at.elapsed() >= CLEAR_DELAY);
    assert_eq!(cleared, LoginState::default());
    assert_eq!(form.borrow().email, "wrong");
    assert_eq!(form.borrow().password, "password1!");
}

#[tokio::test(start_paused = true)]
async fn acknowledging_success_clears_success() {
    let vm = LoginViewModel::new(RecordingRepository::new(), timing());
    let mut login = vm.login_state();

    fill(&vm, "user", "password1!");
    vm.dispatch(LoginIntent::SubmitLogin).unwrap();
    login.wait_for(|s| s.result.is_success()).await.unwrap();

    // The wrong acknowledgement leaves the success in place.
    vm.dispatch(LoginIntent::AcknowledgeLoginError).unwrap();
    sleep(CLEAR_DELAY * 2).await;
    assert!(login.borrow().result.is_success());

    vm.dispatch(LoginIntent::AcknowledgeLoginSuccess).unwrap();
    login.wait_for(|s| s.result.is_empty()).await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn edits_during_pending_login_are_used() {
    let repo = RecordingRepository::new();
    let vm = LoginViewModel::new(repo.clone(), timing());
    let mut login = vm.login_state();

    fill(&vm, "user", "password1!");
    vm.dispatch(LoginIntent::SubmitLogin).unwrap();
    login.wait_for(|s| s.is_loading).await.unwrap();
    vm.dispatch(LoginIntent::EmailChanged("internal".into()))
        .unwrap();

    let done = *login.wait_for(|s| !s.is_loading).await.unwrap();
    assert_eq!(
        done.result,
        AuthResult::Failure(ErrorKind::InternalServerError)
    );
    assert_eq!(repo.calls()[0].email, "internal");
}

#[tokio::test(start_paused = true)]
async fn dispose_cancels_pending_login() {
    let repo = RecordingRepository::new();
    let vm = LoginViewModel::new(repo.clone(), timing());
    let mut login = vm.login_state();

    fill(&vm, "user", "password1!");
    vm.dispatch(LoginIntent::SubmitLogin).unwrap();
    login.wait_for(|s| s.is_loading).await.unwrap();

    vm.dispose().await;
    sleep(LATENCY * 3).await;

    assert_eq!(repo.call_count(), 0);
    assert_eq!(*login.borrow(), LoginState::pending());
    assert_eq!(
        vm.dispatch(LoginIntent::SubmitLogin),
        Err(ViewModelError::Disposed)
    );
}

#[tokio::test(start_paused = true)]
async fn dispose_cancels_pending_clear() {
    let vm = LoginViewModel::new(RecordingRepository::new(), timing());
    let mut form = vm.form_state();

    vm.dispatch(LoginIntent::SubmitLogin).unwrap();
    form.wait_for(|f| f.has_error()).await.unwrap();
    vm.dispatch(LoginIntent::AcknowledgeFormError).unwrap();
    tokio::task::yield_now().await;

    vm.dispose().await;
    sleep(CLEAR_DELAY * 3).await;

    assert!(form.borrow().has_error());
}

#[tokio::test(start_paused = true)]
async fn dropping_view_model_cancels_work() {
    let repo = RecordingRepository::new();
    let vm = LoginViewModel::new(repo.clone(), timing());
    let mut login = vm.login_state();

    fill(&vm, "user", "password1!");
    vm.dispatch(LoginIntent::SubmitLogin).unwrap();
    login.wait_for(|s| s.is_loading).await.unwrap();

    drop(vm);
    sleep(LATENCY * 3).await;

    assert_eq!(repo.call_count(), 0);
}

async fn sleep_until_after(start: Instant, offset: Duration) {
    tokio::time::sleep_until(start + offset).await;
}
