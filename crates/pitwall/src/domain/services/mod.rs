//! Domain Services
//!
//! Stateless rules that operate on domain types.

mod validation;

pub use validation::*;
