//! Pitwall API Routes
//!
//! - /teams - Team listing and creation
//! - /teams/:name - Team lookup, replacement and deletion by name

pub mod swagger;
pub mod teams;
