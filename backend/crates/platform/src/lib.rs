//! Platform Crate - Technical Infrastructure
//!
//! This crate provides the cryptographic building blocks of the credential core:
//! - Password hashing (Argon2id, configurable cost, zeroized plaintext)
//! - Signed, time-bounded session tokens (JWT / HS256)

pub mod password;
pub mod token;
