//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements   | Connects to                     |
//! |----------------|--------------|---------------------------------|
//! | `log_sink`     | EventSink    | `log` facade (console)          |
//! | `drive_bridge` | EventSink    | any `DrivePort`                 |
//! |                | DrivePort    | `LogDrive` (simulator)          |

pub mod drive_bridge;
pub mod log_sink;
