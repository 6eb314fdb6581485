//! Random vehicle arrivals and the tick loop that drives a highway

use log::debug;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::config::TrafficConfig;
use super::error::Result;
use super::highway::Highway;
use super::types::{Tick, VehicleClass, TRUCK_SHARE};
use super::vehicle::Vehicle;

/// Generates arriving vehicles tick by tick
pub struct TrafficGenerator {
    config: TrafficConfig,

    /// Optional seeded RNG for reproducible runs
    rng: Option<StdRng>,
}

impl TrafficGenerator {
    fn new_internal(config: TrafficConfig, rng: Option<StdRng>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    pub fn new(config: TrafficConfig) -> Result<Self> {
        Self::new_internal(config, None)
    }

    /// Create a generator with a seeded RNG for reproducible simulations
    pub fn new_with_seed(config: TrafficConfig, seed: u64) -> Result<Self> {
        Self::new_internal(config, Some(StdRng::seed_from_u64(seed)))
    }

    fn random_bool(&mut self, probability: f64) -> bool {
        match &mut self.rng {
            Some(rng) => rng.random_bool(probability),
            None => rand::rng().random_bool(probability),
        }
    }

    fn random_range(&mut self, range: std::ops::RangeInclusive<Tick>) -> Tick {
        match &mut self.rng {
            Some(rng) => rng.random_range(range),
            None => rand::rng().random_range(range),
        }
    }

    /// Vehicles arriving at `tick`
    pub fn arrivals(&mut self, tick: Tick) -> Result<Vec<Vehicle>> {
        let mut vehicles = Vec::new();
        for _ in 0..self.config.max_arrivals_per_tick {
            if !self.random_bool(self.config.arrival_probability) {
                continue;
            }
            let class = if self.random_bool(TRUCK_SHARE) {
                VehicleClass::Truck
            } else {
                VehicleClass::Car
            };
            let duration = self.random_range(class.service_range());
            vehicles.push(Vehicle::new(tick, duration, class.toll())?);
        }
        Ok(vehicles)
    }
}

/// Run `ticks` time units: admit the arrivals of each tick, then advance it.
///
/// `on_tick` observes the highway after every tick.
pub fn run_simulation<F>(
    highway: &mut Highway,
    generator: &mut TrafficGenerator,
    ticks: Tick,
    mut on_tick: F,
) -> Result<()>
where
    F: FnMut(&Highway),
{
    for _ in 0..ticks {
        let arrivals = generator.arrivals(highway.elapsed_time())?;
        let arrived = arrivals.len();
        for vehicle in arrivals {
            highway.add_vehicle(vehicle)?;
        }

        let departed = highway.tick()?;
        debug!(
            "Tick {}: {} arrived, {} departed, {} active queues",
            highway.elapsed_time(),
            arrived,
            departed,
            highway.active_queue_count()
        );
        on_tick(highway);
    }
    Ok(())
}
