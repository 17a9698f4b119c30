//! Wheelchair control supervisor library.
//!
//! Exposes the interlocked control core (power, link, speed, motion,
//! emergency stop, power depletion) and its adapters for the simulator
//! binary and for integration testing.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod intents;
pub mod interlock;
pub mod runtime;
pub mod scheduler;
pub mod state;
