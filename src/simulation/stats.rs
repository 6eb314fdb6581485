//! Snapshot of highway statistics

use std::fmt;

use log::info;

use super::types::Tick;

/// Point-in-time statistics of a highway
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HighwayStats {
    pub elapsed_time: Tick,
    pub total_vehicles: usize,
    pub active_queues: usize,
    pub total_queues: usize,
    pub vehicles_processed: usize,
    pub total_wait_time: u64,
    pub total_tolls: f64,
    pub average_vehicles_per_queue: f64,
    /// `None` until a vehicle has been processed
    pub average_waiting_time: Option<f64>,
    /// `None` until a vehicle has been processed
    pub average_tolls: Option<f64>,
}

impl HighwayStats {
    /// Log the final statistics of a run
    pub fn log_summary(&self) {
        info!("=== SIMULATION COMPLETE ===");
        info!("Elapsed time: {}", self.elapsed_time);
        info!("Vehicles processed: {}", self.vehicles_processed);
        info!("Vehicles waiting: {}", self.total_vehicles);
        info!(
            "Active queues: {}/{}",
            self.active_queues, self.total_queues
        );
        info!("Total tolls: {:.2}", self.total_tolls);
        info!("Average waiting time: {}", format_ratio(self.average_waiting_time));
        info!("Average toll: {}", format_ratio(self.average_tolls));
    }
}

fn format_ratio(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{:.2}", value),
        None => "n/a".to_string(),
    }
}

impl fmt::Display for HighwayStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Elapsed time: {}", self.elapsed_time)?;
        writeln!(f, "Vehicles waiting: {}", self.total_vehicles)?;
        writeln!(
            f,
            "Active queues: {}/{}",
            self.active_queues, self.total_queues
        )?;
        writeln!(
            f,
            "Average vehicles per queue: {:.2}",
            self.average_vehicles_per_queue
        )?;
        writeln!(f, "Vehicles processed: {}", self.vehicles_processed)?;
        writeln!(
            f,
            "Average waiting time: {}",
            format_ratio(self.average_waiting_time)
        )?;
        writeln!(f, "Total tolls: {:.2}", self.total_tolls)?;
        writeln!(f, "Average toll: {}", format_ratio(self.average_tolls))
    }
}
