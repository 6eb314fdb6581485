//! Core types for the toll simulation

/// A discrete simulated time unit
pub type Tick = u64;

/// Category of vehicle arriving at the toll plaza
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleClass {
    /// Regular passenger car
    Car,
    /// Heavy goods vehicle, pays more and takes longer at the booth
    Truck,
}

impl VehicleClass {
    /// Toll charged to this class
    pub fn toll(&self) -> f64 {
        match self {
            VehicleClass::Car => TOLL_CAR,
            VehicleClass::Truck => TOLL_TRUCK,
        }
    }

    /// Inclusive range of service ticks spent at the booth
    pub fn service_range(&self) -> std::ops::RangeInclusive<Tick> {
        match self {
            VehicleClass::Car => 1..=3,
            VehicleClass::Truck => 2..=6,
        }
    }
}

/// Toll paid by a car
pub const TOLL_CAR: f64 = 1.50;

/// Toll paid by a truck
pub const TOLL_TRUCK: f64 = 3.25;

/// Share of generated arrivals that are trucks
pub const TRUCK_SHARE: f64 = 0.2;
