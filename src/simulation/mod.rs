//! Standalone toll plaza simulation
//!
//! Vehicles arrive, queue at toll booths, pay and leave. The set of open
//! booths grows and shrinks with demand. Everything is driven synchronously,
//! one tick at a time, by the caller.

mod config;
mod error;
mod highway;
mod queue;
mod queue_system;
mod stats;
mod traffic;
mod types;
mod vehicle;

pub use config::{HighwayConfig, TrafficConfig};
pub use error::{Result, SimError};
pub use highway::Highway;
pub use queue::TollQueue;
pub use queue_system::QueueSystem;
pub use stats::HighwayStats;
pub use traffic::{run_simulation, TrafficGenerator};
pub use types::{Tick, VehicleClass, TOLL_CAR, TOLL_TRUCK, TRUCK_SHARE};
pub use vehicle::Vehicle;
