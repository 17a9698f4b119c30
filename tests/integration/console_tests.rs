//! Console text → intents → supervisor, as the simulator wires it.

use wheelchair::app::commands::Intent;
use wheelchair::app::service::ControlSupervisor;
use wheelchair::error::ParseIntentError;
use wheelchair::state::Direction;

fn run_script(script: &str) -> (ControlSupervisor, Vec<ParseIntentError>) {
    let mut sup = ControlSupervisor::default();
    let mut errors = Vec::new();
    for line in script.lines().filter(|l| !l.trim().is_empty()) {
        match line.parse::<Intent>() {
            Ok(intent) => {
                sup.apply(intent);
            }
            Err(e) => errors.push(e),
        }
    }
    (sup, errors)
}

#[test]
fn scripted_session() {
    let (sup, errors) = run_script(
        "power on
         connect
         speed 150
         move right
         tick 10",
    );
    assert!(errors.is_empty());
    let s = sup.current_state();
    assert_eq!(s.speed_setting, 100);
    assert_eq!(s.active_movement, Some(Direction::Right));
    assert!((s.power_level - 99.0).abs() < 1e-3);
}

#[test]
fn bad_lines_are_reported_and_skipped() {
    let (sup, errors) = run_script(
        "power on
         warp 9
         move sideways
         connect",
    );
    assert_eq!(
        errors,
        vec![
            ParseIntentError::UnknownCommand,
            ParseIntentError::InvalidArgument("direction"),
        ]
    );
    assert!(sup.current_state().connected);
}

#[test]
fn estop_then_move_is_ignored() {
    let (sup, _) = run_script(
        "power on
         connect
         move forward
         estop
         move left",
    );
    let s = sup.current_state();
    assert!(s.emergency_stopped);
    assert_eq!(s.active_movement, None);
}

#[test]
fn disconnect_is_not_a_link_toggle() {
    let (sup, errors) = run_script(
        "power on
         disconnect",
    );
    assert_eq!(errors, vec![ParseIntentError::UnknownCommand]);
    assert!(!sup.current_state().connected);
}
