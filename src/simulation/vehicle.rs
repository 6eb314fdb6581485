//! Vehicle model for the toll simulation

use super::error::{Result, SimError};
use super::types::Tick;

/// A vehicle waiting at, or being serviced by, a toll booth
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    arrival_tick: Tick,
    service_duration: Tick,
    time_left: Tick,
    toll_amount: f64,
}

impl Vehicle {
    /// Create a vehicle that arrived at `arrival_tick` and needs
    /// `service_duration` ticks at the head of a queue to pay `toll_amount`.
    pub fn new(arrival_tick: Tick, service_duration: Tick, toll_amount: f64) -> Result<Self> {
        if service_duration == 0 {
            return Err(SimError::InvalidVehicle(
                "service duration must be positive".to_string(),
            ));
        }
        if !toll_amount.is_finite() || toll_amount < 0.0 {
            return Err(SimError::InvalidVehicle(format!(
                "toll amount must be a non-negative number, got {toll_amount}"
            )));
        }

        Ok(Self {
            arrival_tick,
            service_duration,
            time_left: service_duration,
            toll_amount,
        })
    }

    pub fn arrival_tick(&self) -> Tick {
        self.arrival_tick
    }

    pub fn service_duration(&self) -> Tick {
        self.service_duration
    }

    pub fn time_left(&self) -> Tick {
        self.time_left
    }

    pub fn toll_amount(&self) -> f64 {
        self.toll_amount
    }

    /// Advance service by one tick.
    /// Returns true once the vehicle has finished paying.
    pub fn serve_one_tick(&mut self) -> bool {
        self.time_left = self.time_left.saturating_sub(1);
        self.is_served()
    }

    pub fn is_served(&self) -> bool {
        self.time_left == 0
    }
}
