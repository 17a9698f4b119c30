//! Wheelchair control simulator: host entry point.
//!
//! Reads operator intents from stdin and drives the control core in a
//! 1 Hz depletion loop, standing in for the radio bridge and the control
//! panel of the real device.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  stdin thread ──▶ IntentQueue ──▶ ControlLoop (main thread)  │
//! │                                     │                        │
//! │                                     ├─▶ LogEventSink          │
//! │                                     └─▶ DriveBridge<LogDrive> │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Console commands: `power on|off`, `connect`, `speed <n>`,
//! `move forward|backward|left|right`, `stop`, `estop`, `tick <secs>`,
//! `status`, `quit`.  An optional JSON config path may be passed as the
//! first argument.
#![deny(unused_must_use)]

use std::io::{BufRead, ErrorKind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::{info, warn};

use wheelchair::adapters::drive_bridge::{DriveBridge, LogDrive};
use wheelchair::adapters::log_sink::{LogEventSink, status_line};
use wheelchair::app::commands::Intent;
use wheelchair::app::service::ControlSupervisor;
use wheelchair::config::SupervisorConfig;
use wheelchair::intents::IntentQueue;
use wheelchair::runtime::ControlLoop;

static INTENTS: IntentQueue = IntentQueue::new();
static STATUS_REQUESTED: AtomicBool = AtomicBool::new(false);
static QUIT: AtomicBool = AtomicBool::new(false);

// ── Console ───────────────────────────────────────────────────

fn console_loop() {
    read_console(std::io::stdin().lock(), &INTENTS);
    QUIT.store(true, Ordering::Release);
}

/// Parse console lines until EOF or `quit`, pushing intents into `queue`.
/// Lines that are not valid UTF-8 are skipped.
fn read_console(input: impl BufRead, queue: &IntentQueue) {
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                warn!("Console: skipping unreadable line: {}", e);
                continue;
            }
            Err(e) => {
                warn!("Console: input closed: {}", e);
                break;
            }
        };
        let cmd = line.trim();
        match cmd.to_ascii_lowercase().as_str() {
            "" => {}
            "quit" | "exit" => break,
            "status" => STATUS_REQUESTED.store(true, Ordering::Release),
            _ => match cmd.parse::<Intent>() {
                Ok(intent) => {
                    queue.push(intent);
                }
                Err(e) => warn!("Console: '{}': {}", cmd, e),
            },
        }
    }
}

fn load_config() -> Result<SupervisorConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            let cfg = SupervisorConfig::from_json(&text)
                .with_context(|| format!("loading config {path}"))?;
            info!("Config loaded from {}", path);
            Ok(cfg)
        }
        None => Ok(SupervisorConfig::default()),
    }
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    info!("Wheelchair control simulator v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config()?;

    let mut supervisor = ControlSupervisor::new(&config);
    supervisor.subscribe(Box::new(LogEventSink::new()))?;
    supervisor.subscribe(Box::new(DriveBridge::new(LogDrive::new())))?;

    let mut control = ControlLoop::with_supervisor(supervisor, config.tick_interval_ms, &INTENTS);

    std::thread::Builder::new()
        .name("console".into())
        .spawn(console_loop)
        .context("spawning console thread")?;

    info!("System ready. Type 'status' for a snapshot, 'quit' to exit.");

    let poll = Duration::from_millis(u64::from(config.poll_interval_ms));
    let mut last = Instant::now();

    while !QUIT.load(Ordering::Acquire) {
        std::thread::sleep(poll);

        let now = Instant::now();
        let elapsed_ms = now.duration_since(last).as_millis().min(u128::from(u32::MAX)) as u32;
        last = now;

        control.step(elapsed_ms);

        if STATUS_REQUESTED.swap(false, Ordering::AcqRel) {
            info!("STATUS | {}", status_line(&control.state()));
        }
    }

    let sup = control.supervisor();
    info!(
        "Shutting down: {} applied, {} rejected",
        sup.applied_count(),
        sup.rejected_count()
    );
    Ok(())
}
