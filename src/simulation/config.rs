//! Configuration for a highway toll plaza and its arrival generator

use super::error::{Result, SimError};

/// Fixed parameters of a highway, set once at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighwayConfig {
    /// Floor on the number of active queues
    pub min_activated_queues: usize,
    /// Queue length at which a queue counts as saturated
    pub max_vehicles_per_queue: usize,
    /// Cap on total queues ever created, `None` for unbounded growth
    pub max_queues: Option<usize>,
}

impl Default for HighwayConfig {
    fn default() -> Self {
        Self {
            min_activated_queues: 2,
            max_vehicles_per_queue: 5,
            max_queues: None,
        }
    }
}

impl HighwayConfig {
    pub fn new(min_activated_queues: usize, max_vehicles_per_queue: usize) -> Self {
        Self {
            min_activated_queues,
            max_vehicles_per_queue,
            max_queues: None,
        }
    }

    pub fn with_max_queues(mut self, max_queues: usize) -> Self {
        self.max_queues = Some(max_queues);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_activated_queues == 0 {
            return Err(SimError::InvalidConfig(
                "min_activated_queues must be at least 1".to_string(),
            ));
        }
        if self.max_vehicles_per_queue == 0 {
            return Err(SimError::InvalidConfig(
                "max_vehicles_per_queue must be at least 1".to_string(),
            ));
        }
        if let Some(max_queues) = self.max_queues {
            if max_queues < self.min_activated_queues {
                return Err(SimError::InvalidConfig(format!(
                    "max_queues ({}) is below min_activated_queues ({})",
                    max_queues, self.min_activated_queues
                )));
            }
        }
        Ok(())
    }
}

/// Parameters of the random arrival process
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficConfig {
    /// Upper bound on arrivals generated in a single tick
    pub max_arrivals_per_tick: usize,
    /// Probability that each arrival slot produces a vehicle
    pub arrival_probability: f64,
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            max_arrivals_per_tick: 3,
            arrival_probability: 0.5,
        }
    }
}

impl TrafficConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.arrival_probability) {
            return Err(SimError::InvalidConfig(format!(
                "arrival_probability must lie in [0, 1], got {}",
                self.arrival_probability
            )));
        }
        Ok(())
    }
}
