//! ControlLoop: queue → supervisor → clock → drive, on synthetic time.

use wheelchair::adapters::drive_bridge::DriveBridge;
use wheelchair::app::commands::Intent;
use wheelchair::app::service::ControlSupervisor;
use wheelchair::config::{DepletionPolicy, SupervisorConfig};
use wheelchair::intents::IntentQueue;
use wheelchair::runtime::ControlLoop;
use wheelchair::state::Direction;

use super::mock_drive::{DriveCall, MockDrive};

fn make_loop<'q>(config: &SupervisorConfig, queue: &'q IntentQueue) -> (ControlLoop<'q>, MockDrive) {
    let drive = MockDrive::new();
    let mut sup = ControlSupervisor::new(config);
    sup.subscribe(Box::new(DriveBridge::new(drive.clone()))).unwrap();
    (ControlLoop::with_supervisor(sup, config.tick_interval_ms, queue), drive)
}

fn run_secs(lp: &mut ControlLoop<'_>, secs: u32) {
    for _ in 0..(secs * 10) {
        lp.step(100);
    }
}

#[test]
fn depletion_runs_only_while_eligible() {
    let q = IntentQueue::new();
    let config = SupervisorConfig::default();
    let (mut lp, _) = make_loop(&config, &q);

    run_secs(&mut lp, 10);
    assert!((lp.state().power_level - 100.0).abs() < f32::EPSILON, "unpowered must not drain");

    q.push(Intent::SetPower(true));
    run_secs(&mut lp, 50);
    assert!((lp.state().power_level - 95.0).abs() < 1e-3);

    q.push(Intent::ToggleEmergencyStop);
    run_secs(&mut lp, 20);
    assert!((lp.state().power_level - 95.0).abs() < 1e-3, "e-stop must freeze the level");

    q.push(Intent::ToggleEmergencyStop);
    run_secs(&mut lp, 10);
    assert!((lp.state().power_level - 94.0).abs() < 1e-3);

    q.push(Intent::SetPower(false));
    run_secs(&mut lp, 50);
    assert!((lp.state().power_level - 94.0).abs() < 1e-3, "power-off must freeze the level");
}

#[test]
fn operator_session_drives_and_halts() {
    let q = IntentQueue::new();
    let config = SupervisorConfig::default();
    let (mut lp, drive) = make_loop(&config, &q);

    for intent in [
        Intent::SetPower(true),
        Intent::ToggleConnection,
        Intent::SetSpeed(30),
        Intent::BeginMove(Direction::Forward),
    ] {
        q.push(intent);
    }
    lp.step(100);
    assert!(drive.moving());

    q.push(Intent::BeginMove(Direction::Left));
    q.push(Intent::ToggleEmergencyStop);
    q.push(Intent::BeginMove(Direction::Right)); // rejected
    lp.step(100);

    assert_eq!(
        drive.calls(),
        vec![
            DriveCall::Drive { direction: Direction::Forward, speed: 30 },
            DriveCall::Drive { direction: Direction::Left, speed: 30 },
            DriveCall::Halt,
        ]
    );
    assert_eq!(lp.supervisor().rejected_count(), 1);
}

#[test]
fn power_off_policy_halts_the_drive_at_empty() {
    let q = IntentQueue::new();
    let config = SupervisorConfig {
        initial_power_level: 0.25,
        depletion_policy: DepletionPolicy::PowerOff,
        ..Default::default()
    };
    let (mut lp, drive) = make_loop(&config, &q);

    q.push(Intent::SetPower(true));
    q.push(Intent::ToggleConnection);
    q.push(Intent::BeginMove(Direction::Backward));
    run_secs(&mut lp, 5);

    let s = lp.state();
    assert!(!s.powered);
    assert!(s.power_level.abs() < f32::EPSILON);
    assert_eq!(drive.last_call(), Some(DriveCall::Halt));
    assert!(!lp.clock_armed());
}

#[test]
fn hold_policy_keeps_running_at_empty() {
    let q = IntentQueue::new();
    let config = SupervisorConfig {
        initial_power_level: 0.25,
        ..Default::default()
    };
    let (mut lp, drive) = make_loop(&config, &q);

    q.push(Intent::SetPower(true));
    q.push(Intent::ToggleConnection);
    q.push(Intent::BeginMove(Direction::Backward));
    run_secs(&mut lp, 5);

    let s = lp.state();
    assert!(s.powered);
    assert!(s.power_level.abs() < f32::EPSILON);
    assert!(drive.moving());
}

#[test]
fn producer_thread_feeds_the_loop() {
    static QUEUE: IntentQueue = IntentQueue::new();
    let config = SupervisorConfig::default();
    let (mut lp, _) = make_loop(&config, &QUEUE);

    std::thread::spawn(|| {
        QUEUE.push(Intent::SetPower(true));
        QUEUE.push(Intent::ToggleConnection);
        QUEUE.push(Intent::SetSpeed(75));
    })
    .join()
    .unwrap();

    assert_eq!(lp.step(0), 3);
    let s = lp.state();
    assert!(s.connected);
    assert_eq!(s.speed_setting, 75);
}
