//! Core contracts for elfproef.
//!
//! This crate defines the 9-digit BSN candidate type and the 11-test
//! checksum engine shared by the generator and the CLI. It performs no
//! I/O and holds no state.

pub mod error;
pub mod types;
pub mod validation;

pub use error::{Error, Result};
pub use types::{Bsn, BSN_LENGTH};
pub use validation::{check_digit, is_valid};
