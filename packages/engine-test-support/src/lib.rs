//! Engine test support utilities
//!
//! Shared by the engine's unit tests and integration tests: one logging
//! bootstrap so `TEST_LOG=debug` shows trick-by-trick engine events.

pub mod test_logging;
