//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use elogin::auth::{authenticate, AuthResult, Credentials, LoginRepository};
use elogin::config::TimingConfig;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

pub const LATENCY: Duration = Duration::from_millis(900);
pub const CLEAR_DELAY: Duration = Duration::from_millis(900);

pub fn timing() -> TimingConfig {
    TimingConfig {
        latency_ms: LATENCY.as_millis() as u64,
        message_clear_ms: CLEAR_DELAY.as_millis() as u64,
    }
}

/// Gateway that answers from the mock table and records every call.
#[derive(Default)]
pub struct RecordingRepository {
    calls: Mutex<Vec<Credentials>>,
}

impl RecordingRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<Credentials> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl LoginRepository for RecordingRepository {
    fn login_user(&self, email: &str, password: &str) -> AuthResult {
        self.calls.lock().push(Credentials {
            email: email.to_string(),
            password: password.to_string(),
        });
        authenticate(email, password)
    }
}
