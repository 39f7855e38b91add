//! Authentication seam for the login screen.
//!
//! ```text
//! LoginViewModel ──→ LoginRepository ──→ ApiService
//!                    (SessionGateway)    (MockApiService)
//! ```
//!
//! There is no real transport: [`MockApiService`] answers from a fixed table
//! keyed on the identifier. [`SessionGateway`] is the place a real backend
//! would be wired in.

mod api;
mod gateway;
mod types;

pub use api::{authenticate, ApiService, MockApiService};
pub use gateway::{LoginRepository, SessionGateway};
pub use types::{AuthResult, Credentials, ErrorKind};
