//! Error kinds raised by the toll simulation

use thiserror::Error;

/// Caller-contract violations detected by the queue system and the highway.
///
/// A failing operation leaves the simulation unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("queue index {index} out of range (queue count {queue_count})")]
    InvalidIndex { index: usize, queue_count: usize },

    #[error("queue {index} is in the wrong state: {reason}")]
    InvalidQueueState { index: usize, reason: &'static str },

    #[error("queue {index} is empty")]
    EmptyQueueOperation { index: usize },

    #[error("no active queues")]
    NoActiveQueues,

    #[error("no vehicles processed yet")]
    NoDataYet,

    #[error("all {max_queues} queues are saturated, cannot open another")]
    CapacityExceeded { max_queues: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid vehicle: {0}")]
    InvalidVehicle(String),
}

pub type Result<T> = std::result::Result<T, SimError>;
