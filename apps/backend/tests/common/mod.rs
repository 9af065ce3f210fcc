#![allow(dead_code)]

// tests/common/mod.rs

// Logging is auto-installed for every test binary that includes this module.
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}
