//! Authentication system
//!
//! Handles field validation, password scoring and the sign-in / sign-up
//! flow against an external backend.

pub mod backend;
pub mod credentials;
pub mod flow;
pub mod results;
pub mod validator;

pub use backend::{AuthBackend, BackendError};
pub use credentials::InMemoryBackend;
pub use flow::AuthFlow;
pub use results::{AuthAction, PasswordStrength, User};
pub use validator::{is_valid_email, score_password};
