//! Application Layer
//!
//! Use cases and the service that wires them to shared dependencies.

pub mod config;
pub mod reset_password;
pub mod service;
pub mod sign_in;
pub mod sign_up;

// Re-exports
pub use config::{AuthConfig, ResetDisclosure};
pub use reset_password::{ResetPasswordInput, ResetPasswordOutput, ResetPasswordUseCase};
pub use service::CredentialService;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpUseCase};
