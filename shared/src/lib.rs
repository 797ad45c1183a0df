//! Shared constants, errors and utilities for the auction suite.
//!
//! * `constants` - Seeds and protocol constants.
//! * `errors` - Error codes for both programs.
//! * `utils` - Math and token utilities.
pub mod constants;
pub mod errors;
pub mod utils;
