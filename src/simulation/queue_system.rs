//! Indexed collection of toll queues
//!
//! Queues are only ever appended, never removed. Every operation addresses its
//! queue by index directly.

use std::fmt;

use log::debug;

use super::error::{Result, SimError};
use super::queue::TollQueue;
use super::vehicle::Vehicle;

/// Append-only sequence of toll queues, each either active or dormant
#[derive(Debug, Clone, Default)]
pub struct QueueSystem {
    queues: Vec<TollQueue>,
}

impl QueueSystem {
    /// Create a system with `active_queues` empty, active queues
    pub fn new(active_queues: usize) -> Self {
        Self {
            queues: (0..active_queues).map(|_| TollQueue::new(true)).collect(),
        }
    }

    /// Append a new, empty, inactive queue and return its index
    pub fn create(&mut self) -> usize {
        self.queues.push(TollQueue::new(false));
        let index = self.queues.len() - 1;
        debug!("Created queue {}", index);
        index
    }

    pub fn activate(&mut self, index: usize) -> Result<()> {
        let queue = self.queue_mut(index)?;
        if queue.is_active() {
            return Err(SimError::InvalidQueueState {
                index,
                reason: "already active",
            });
        }
        queue.set_active(true);
        debug!("Activated queue {}", index);
        Ok(())
    }

    /// Deactivate an active, empty queue
    pub fn deactivate(&mut self, index: usize) -> Result<()> {
        let queue = self.queue_mut(index)?;
        if !queue.is_active() {
            return Err(SimError::InvalidQueueState {
                index,
                reason: "already inactive",
            });
        }
        if !queue.is_empty() {
            return Err(SimError::InvalidQueueState {
                index,
                reason: "still holds vehicles",
            });
        }
        queue.set_active(false);
        debug!("Deactivated queue {}", index);
        Ok(())
    }

    pub fn is_activated(&self, index: usize) -> Result<bool> {
        Ok(self.queue(index)?.is_active())
    }

    /// Index of the active queue holding the fewest vehicles.
    /// Ties go to the lowest index.
    pub fn index_of_min_active_queue(&self) -> Result<usize> {
        self.queues
            .iter()
            .enumerate()
            .filter(|(_, queue)| queue.is_active())
            .min_by_key(|(index, queue)| (queue.len(), *index))
            .map(|(index, _)| index)
            .ok_or(SimError::NoActiveQueues)
    }

    /// Index of the lowest-indexed inactive queue, if any
    pub fn first_inactive_queue(&self) -> Option<usize> {
        self.queues.iter().position(|queue| !queue.is_active())
    }

    pub fn enqueue(&mut self, index: usize, vehicle: Vehicle) -> Result<()> {
        self.queue_mut(index)?.push_back(vehicle);
        Ok(())
    }

    pub fn dequeue(&mut self, index: usize) -> Result<Vehicle> {
        self.queue_mut(index)?
            .pop_front()
            .ok_or(SimError::EmptyQueueOperation { index })
    }

    pub fn front(&self, index: usize) -> Result<&Vehicle> {
        self.queue(index)?
            .front()
            .ok_or(SimError::EmptyQueueOperation { index })
    }

    pub fn front_mut(&mut self, index: usize) -> Result<&mut Vehicle> {
        self.queue_mut(index)?
            .front_mut()
            .ok_or(SimError::EmptyQueueOperation { index })
    }

    /// Serve the head vehicle of every non-empty active queue for one tick.
    ///
    /// Vehicles that finish paying are removed and returned together with the
    /// index of the queue they left, in queue order. At most one vehicle leaves
    /// each queue.
    pub fn serve_active_heads(&mut self) -> Vec<(usize, Vehicle)> {
        let mut departures = Vec::new();
        for (index, queue) in self.queues.iter_mut().enumerate() {
            if !queue.is_active() {
                continue;
            }
            let served = match queue.front_mut() {
                Some(vehicle) => vehicle.serve_one_tick(),
                None => continue,
            };
            if served {
                if let Some(vehicle) = queue.pop_front() {
                    departures.push((index, vehicle));
                }
            }
        }
        departures
    }

    /// Lowest-indexed empty active queue, provided at least two active queues are empty
    pub fn surplus_empty_queue(&self) -> Option<usize> {
        let mut empties = self
            .queues
            .iter()
            .enumerate()
            .filter(|(_, queue)| queue.is_active() && queue.is_empty())
            .map(|(index, _)| index)
            .take(2);
        let lowest = empties.next()?;
        empties.next().map(|_| lowest)
    }

    pub fn is_empty_at(&self, index: usize) -> Result<bool> {
        Ok(self.queue(index)?.is_empty())
    }

    /// Number of vehicles held by queue `index`
    pub fn len_at(&self, index: usize) -> Result<usize> {
        Ok(self.queue(index)?.len())
    }

    /// Vehicles held across all queues, active or not
    pub fn total_vehicle_count(&self) -> usize {
        self.queues.iter().map(TollQueue::len).sum()
    }

    pub fn queue_count(&self) -> usize {
        self.queues.len()
    }

    pub fn active_queue_count(&self) -> usize {
        self.queues.iter().filter(|queue| queue.is_active()).count()
    }

    /// Read-only view of every queue, in index order
    pub fn iter(&self) -> impl Iterator<Item = &TollQueue> {
        self.queues.iter()
    }

    fn queue(&self, index: usize) -> Result<&TollQueue> {
        let queue_count = self.queues.len();
        self.queues
            .get(index)
            .ok_or(SimError::InvalidIndex { index, queue_count })
    }

    fn queue_mut(&mut self, index: usize) -> Result<&mut TollQueue> {
        let queue_count = self.queues.len();
        self.queues
            .get_mut(index)
            .ok_or(SimError::InvalidIndex { index, queue_count })
    }
}

impl fmt::Display for QueueSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, queue) in self.queues.iter().enumerate() {
            writeln!(
                f,
                "Queue {} [{}]: {} vehicle(s)",
                index,
                if queue.is_active() { "active" } else { "inactive" },
                queue.len()
            )?;
        }
        Ok(())
    }
}
