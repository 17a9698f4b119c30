//! Integration test driver for `tests/integration/` submodules.
//!
//! Each `mod` below maps to a file that exercises the control loop
//! against mock adapters.  Time is synthetic; no test sleeps.

mod console_tests;
mod control_loop_tests;
mod mock_drive;
