//! Shared Kernel - Domain-crossing minimal core
//!
//! Holds the vocabulary every backend crate agrees on:
//! - The unified error type and its HTTP classification
//! - Typed identifiers
//!
//! Only things that are hard to change and mean the same thing in every
//! crate belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
