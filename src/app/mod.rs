//! Application core: pure domain logic, zero I/O.
//!
//! This module contains the rules for the wheelchair control core:
//! intent validation, interlocked transitions, and power depletion.
//! Interaction with renderers and motors happens through **port traits**
//! defined in [`ports`], keeping this layer fully testable without real
//! peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
