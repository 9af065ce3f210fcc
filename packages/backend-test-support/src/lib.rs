//! Backend test support utilities
//!
//! Shared by the backend's unit tests and its integration tests.

pub mod logging;
