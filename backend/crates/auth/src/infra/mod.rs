//! Infrastructure Layer
//!
//! Credential store implementations.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryCredentialRepository;
pub use postgres::PgCredentialRepository;
