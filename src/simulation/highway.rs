//! Highway toll plaza that ties the queues together
//!
//! The highway admits arriving vehicles into the least occupied active queue,
//! services the head of every active queue once per tick, and grows or shrinks
//! the set of active queues with demand.

use std::fmt;

use log::{debug, warn};

use super::config::HighwayConfig;
use super::error::{Result, SimError};
use super::queue_system::QueueSystem;
use super::stats::HighwayStats;
use super::types::Tick;
use super::vehicle::Vehicle;

/// The toll plaza of a highway
#[derive(Debug, Clone)]
pub struct Highway {
    config: HighwayConfig,

    /// All queues ever opened, active or dormant
    queues: QueueSystem,

    /// Ticks advanced so far
    elapsed_time: Tick,

    /// Ticks departed vehicles spent in the system beyond their own service time
    total_wait_time: u64,

    vehicles_processed: usize,

    tolls_collected: f64,
}

impl Highway {
    /// Create a highway with `min_activated_queues` active, empty queues
    pub fn new(min_activated_queues: usize, max_vehicles_per_queue: usize) -> Result<Self> {
        Self::with_config(HighwayConfig::new(
            min_activated_queues,
            max_vehicles_per_queue,
        ))
    }

    pub fn with_config(config: HighwayConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            queues: QueueSystem::new(config.min_activated_queues),
            config,
            elapsed_time: 0,
            total_wait_time: 0,
            vehicles_processed: 0,
            tolls_collected: 0.0,
        })
    }

    /// Admit a vehicle and return the index of the queue it joined.
    ///
    /// The vehicle joins the least occupied active queue. When every active
    /// queue is saturated the lowest-indexed dormant queue is reactivated, and
    /// only if none exists is a new queue opened.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Result<usize> {
        let min_index = self.queues.index_of_min_active_queue()?;
        if self.queues.len_at(min_index)? < self.config.max_vehicles_per_queue {
            self.queues.enqueue(min_index, vehicle)?;
            debug!("Vehicle admitted to queue {}", min_index);
            return Ok(min_index);
        }

        let index = match self.queues.first_inactive_queue() {
            Some(index) => index,
            None => {
                if let Some(max_queues) = self.config.max_queues {
                    if self.queues.queue_count() >= max_queues {
                        return Err(SimError::CapacityExceeded { max_queues });
                    }
                }
                self.queues.create()
            }
        };
        self.queues.activate(index)?;
        self.queues.enqueue(index, vehicle)?;
        debug!("All active queues saturated, vehicle admitted to queue {}", index);
        Ok(index)
    }

    /// Advance every active queue by one tick and return the number of departures
    pub fn advance_service(&mut self) -> usize {
        self.elapsed_time += 1;

        let departures = self.queues.serve_active_heads();
        for (index, vehicle) in &departures {
            self.record_departure(*index, vehicle);
        }
        departures.len()
    }

    /// Deactivate one surplus empty queue, keeping a single empty queue as
    /// slack and never dropping below the configured floor.
    /// Returns the index of the deactivated queue, if any.
    pub fn adjust_active_queue_count(&mut self) -> Result<Option<usize>> {
        if self.queues.active_queue_count() <= self.config.min_activated_queues {
            return Ok(None);
        }
        match self.queues.surplus_empty_queue() {
            Some(index) => {
                self.queues.deactivate(index)?;
                Ok(Some(index))
            }
            None => Ok(None),
        }
    }

    /// One simulated time unit: service first, then elasticity.
    /// Returns the number of departures.
    pub fn tick(&mut self) -> Result<usize> {
        let departures = self.advance_service();
        self.adjust_active_queue_count()?;
        Ok(departures)
    }

    fn record_departure(&mut self, index: usize, vehicle: &Vehicle) {
        self.tolls_collected += vehicle.toll_amount();

        let charged = vehicle.service_duration() + vehicle.arrival_tick();
        let wait = (self.elapsed_time + 1).saturating_sub(charged);
        if charged > self.elapsed_time + 1 {
            warn!(
                "Vehicle arrived at tick {} after departure at tick {}; counting zero wait",
                vehicle.arrival_tick(),
                self.elapsed_time
            );
        }
        self.total_wait_time += wait;
        self.vehicles_processed += 1;

        debug!(
            "Vehicle left queue {} at tick {} paying {:.2} after waiting {}",
            index,
            self.elapsed_time,
            vehicle.toll_amount(),
            wait
        );
    }

    /// Vehicles in the system, including those currently paying
    pub fn total_vehicle_count(&self) -> usize {
        self.queues.total_vehicle_count()
    }

    pub fn active_queue_count(&self) -> usize {
        self.queues.active_queue_count()
    }

    pub fn queue_count(&self) -> usize {
        self.queues.queue_count()
    }

    pub fn average_vehicles_per_queue(&self) -> f64 {
        self.total_vehicle_count() as f64 / self.active_queue_count() as f64
    }

    /// Mean wait per processed vehicle, `NoDataYet` before the first departure
    pub fn average_waiting_time(&self) -> Result<f64> {
        if self.vehicles_processed == 0 {
            return Err(SimError::NoDataYet);
        }
        Ok(self.total_wait_time as f64 / self.vehicles_processed as f64)
    }

    pub fn total_tolls(&self) -> f64 {
        self.tolls_collected
    }

    /// Mean toll per processed vehicle, `NoDataYet` before the first departure
    pub fn average_tolls(&self) -> Result<f64> {
        if self.vehicles_processed == 0 {
            return Err(SimError::NoDataYet);
        }
        Ok(self.tolls_collected / self.vehicles_processed as f64)
    }

    pub fn elapsed_time(&self) -> Tick {
        self.elapsed_time
    }

    pub fn total_wait_time(&self) -> u64 {
        self.total_wait_time
    }

    pub fn vehicles_processed(&self) -> usize {
        self.vehicles_processed
    }

    pub fn min_activated_queues(&self) -> usize {
        self.config.min_activated_queues
    }

    pub fn max_vehicles_per_queue(&self) -> usize {
        self.config.max_vehicles_per_queue
    }

    pub fn config(&self) -> &HighwayConfig {
        &self.config
    }

    pub fn queues(&self) -> &QueueSystem {
        &self.queues
    }

    /// Snapshot of every read accessor
    pub fn stats(&self) -> HighwayStats {
        HighwayStats {
            elapsed_time: self.elapsed_time,
            total_vehicles: self.total_vehicle_count(),
            active_queues: self.active_queue_count(),
            total_queues: self.queue_count(),
            vehicles_processed: self.vehicles_processed,
            total_wait_time: self.total_wait_time,
            total_tolls: self.tolls_collected,
            average_vehicles_per_queue: self.average_vehicles_per_queue(),
            average_waiting_time: self.average_waiting_time().ok(),
            average_tolls: self.average_tolls().ok(),
        }
    }
}

impl fmt::Display for Highway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Minimum number of activated queues {}",
            self.config.min_activated_queues
        )?;
        writeln!(
            f,
            "Maximum number of vehicles per queue {}",
            self.config.max_vehicles_per_queue
        )?;
        write!(f, "{}", self.queues)?;
        writeln!(f, "Elapsed time {}", self.elapsed_time)?;
        writeln!(f, "Total waiting time {}", self.total_wait_time)?;
        writeln!(f, "Number of vehicles processed {}", self.vehicles_processed)?;
        writeln!(f, "Total tolls collected {:.2}", self.tolls_collected)
    }
}
