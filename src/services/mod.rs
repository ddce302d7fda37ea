//! Business logic and service layer modules.
//!
//! Token issuance/verification and mock weather generation.

pub mod token;
pub mod weather;

pub use token::*;
pub use weather::*;
