//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best practices.
//!
//! Structure:
//! - helpers: recording host, builder and gesture shorthands
//! - integration: multi-event scenarios driven through `handle_event`
//! - unit: single-subsystem tests
