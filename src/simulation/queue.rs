//! A single toll booth queue

use std::collections::VecDeque;

use super::vehicle::Vehicle;

/// FIFO line of vehicles in front of one toll booth
#[derive(Debug, Clone, Default)]
pub struct TollQueue {
    vehicles: VecDeque<Vehicle>,
    active: bool,
}

impl TollQueue {
    /// Create an empty queue with the given activation state
    pub fn new(active: bool) -> Self {
        Self {
            vehicles: VecDeque::new(),
            active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Number of vehicles held, regardless of activation state
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn push_back(&mut self, vehicle: Vehicle) {
        self.vehicles.push_back(vehicle);
    }

    pub fn pop_front(&mut self) -> Option<Vehicle> {
        self.vehicles.pop_front()
    }

    pub fn front(&self) -> Option<&Vehicle> {
        self.vehicles.front()
    }

    pub fn front_mut(&mut self) -> Option<&mut Vehicle> {
        self.vehicles.front_mut()
    }
}
