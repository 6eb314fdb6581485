//! Highway behaviour tests
//!
//! Admission placement, per-tick service, elasticity and derived metrics

use assert_approx_eq::assert_approx_eq;
use toll_sim::simulation::{Highway, HighwayConfig, SimError, Vehicle};

fn vehicle(arrival: u64, duration: u64, toll: f64) -> Vehicle {
    Vehicle::new(arrival, duration, toll).unwrap()
}

fn queue_lengths(highway: &Highway) -> Vec<usize> {
    highway.queues().iter().map(|queue| queue.len()).collect()
}

#[test]
fn test_construction() {
    let highway = Highway::new(3, 4).unwrap();
    assert_eq!(highway.active_queue_count(), 3);
    assert_eq!(highway.queue_count(), 3);
    assert_eq!(highway.total_vehicle_count(), 0);
    assert_eq!(highway.elapsed_time(), 0);
    assert_eq!(highway.vehicles_processed(), 0);
    assert_eq!(highway.total_wait_time(), 0);
    assert_eq!(highway.total_tolls(), 0.0);
    assert_eq!(highway.min_activated_queues(), 3);
    assert_eq!(highway.max_vehicles_per_queue(), 4);
}

#[test]
fn test_invalid_configuration_rejected() {
    assert!(matches!(Highway::new(0, 1), Err(SimError::InvalidConfig(_))));
    assert!(matches!(Highway::new(1, 0), Err(SimError::InvalidConfig(_))));
    assert!(matches!(
        Highway::with_config(HighwayConfig::new(3, 1).with_max_queues(2)),
        Err(SimError::InvalidConfig(_))
    ));
}

#[test]
fn test_invalid_vehicle_rejected() {
    assert!(matches!(
        Vehicle::new(0, 0, 1.0),
        Err(SimError::InvalidVehicle(_))
    ));
    assert!(matches!(
        Vehicle::new(0, 1, -0.5),
        Err(SimError::InvalidVehicle(_))
    ));
    assert!(matches!(
        Vehicle::new(0, 1, f64::NAN),
        Err(SimError::InvalidVehicle(_))
    ));
}

#[test]
fn test_admission_placement() {
    let mut highway = Highway::new(2, 2).unwrap();

    assert_eq!(highway.add_vehicle(vehicle(0, 1, 1.0)).unwrap(), 0);
    assert_eq!(highway.add_vehicle(vehicle(0, 1, 1.0)).unwrap(), 1);
    assert_eq!(highway.add_vehicle(vehicle(0, 1, 1.0)).unwrap(), 0);
    assert_eq!(highway.add_vehicle(vehicle(0, 1, 1.0)).unwrap(), 1);
    assert_eq!(queue_lengths(&highway), vec![2, 2]);

    // Both active queues saturated and nothing dormant: open queue 2
    assert_eq!(highway.add_vehicle(vehicle(0, 1, 1.0)).unwrap(), 2);
    assert_eq!(highway.queue_count(), 3);
    assert_eq!(highway.active_queue_count(), 3);
    assert_eq!(queue_lengths(&highway), vec![2, 2, 1]);
    assert_eq!(highway.total_vehicle_count(), 5);
}

#[test]
fn test_admission_reuses_dormant_queue_first() {
    let mut highway = Highway::new(1, 1).unwrap();
    highway.add_vehicle(vehicle(0, 1, 1.0)).unwrap();
    highway.add_vehicle(vehicle(0, 1, 1.0)).unwrap();
    assert_eq!(highway.queue_count(), 2);

    // Both vehicles leave; the surplus empty queue 0 is deactivated
    highway.tick().unwrap();
    assert_eq!(highway.active_queue_count(), 1);
    assert!(!highway.queues().is_activated(0).unwrap());

    assert_eq!(highway.add_vehicle(vehicle(1, 1, 1.0)).unwrap(), 1);
    // Queue 1 is full, dormant queue 0 comes back instead of a new one
    assert_eq!(highway.add_vehicle(vehicle(1, 1, 1.0)).unwrap(), 0);
    assert_eq!(highway.queue_count(), 2);
    assert_eq!(highway.active_queue_count(), 2);
}

#[test]
fn test_capacity_guard() {
    let config = HighwayConfig::new(1, 1).with_max_queues(2);
    let mut highway = Highway::with_config(config).unwrap();
    highway.add_vehicle(vehicle(0, 5, 1.0)).unwrap();
    highway.add_vehicle(vehicle(0, 5, 1.0)).unwrap();

    assert_eq!(
        highway.add_vehicle(vehicle(0, 5, 1.0)),
        Err(SimError::CapacityExceeded { max_queues: 2 })
    );
    assert_eq!(highway.queue_count(), 2);
    assert_eq!(highway.total_vehicle_count(), 2);
}

#[test]
fn test_service_and_departure() {
    let mut highway = Highway::new(1, 5).unwrap();
    highway.add_vehicle(vehicle(0, 3, 1.50)).unwrap();

    assert_eq!(highway.advance_service(), 0);
    assert_eq!(highway.queues().front(0).unwrap().time_left(), 2);
    assert_eq!(highway.advance_service(), 0);
    assert_eq!(highway.queues().front(0).unwrap().time_left(), 1);
    assert_eq!(highway.advance_service(), 1);

    assert_eq!(highway.elapsed_time(), 3);
    assert_eq!(highway.vehicles_processed(), 1);
    assert_eq!(highway.total_wait_time(), 1);
    assert_approx_eq!(highway.total_tolls(), 1.50);
    assert_eq!(highway.total_vehicle_count(), 0);
}

#[test]
fn test_only_head_is_served() {
    let mut highway = Highway::new(1, 5).unwrap();
    highway.add_vehicle(vehicle(0, 1, 1.0)).unwrap();
    highway.add_vehicle(vehicle(0, 2, 2.0)).unwrap();

    // First vehicle leaves at tick 1, the second has not started yet
    assert_eq!(highway.advance_service(), 1);
    assert_eq!(highway.queues().front(0).unwrap().time_left(), 2);

    highway.advance_service();
    assert_eq!(highway.advance_service(), 1);
    assert_eq!(highway.elapsed_time(), 3);
    // Waits: 1 - 1 - 0 + 1 = 1 and 3 - 2 - 0 + 1 = 2
    assert_eq!(highway.total_wait_time(), 3);
    assert_approx_eq!(highway.average_waiting_time().unwrap(), 1.5);
    assert_approx_eq!(highway.average_tolls().unwrap(), 1.5);
}

#[test]
fn test_each_active_queue_serves_its_head() {
    let mut highway = Highway::new(1, 1).unwrap();
    highway.add_vehicle(vehicle(0, 1, 1.0)).unwrap();
    highway.add_vehicle(vehicle(0, 1, 1.0)).unwrap();
    assert_eq!(highway.advance_service(), 2);
}

#[test]
fn test_future_arrival_counts_zero_wait() {
    let mut highway = Highway::new(1, 1).unwrap();
    highway.add_vehicle(vehicle(10, 1, 1.0)).unwrap();
    highway.advance_service();
    assert_eq!(highway.vehicles_processed(), 1);
    assert_eq!(highway.total_wait_time(), 0);
}

#[test]
fn test_elasticity_down_to_floor() {
    let mut highway = Highway::new(1, 1).unwrap();
    highway.add_vehicle(vehicle(0, 1, 1.0)).unwrap();
    highway.add_vehicle(vehicle(0, 1, 1.0)).unwrap();
    highway.advance_service();
    assert_eq!(highway.active_queue_count(), 2);

    assert_eq!(highway.adjust_active_queue_count().unwrap(), Some(0));
    assert_eq!(highway.active_queue_count(), 1);
    assert!(highway.queues().is_activated(1).unwrap());

    assert_eq!(highway.adjust_active_queue_count().unwrap(), None);
    assert_eq!(highway.active_queue_count(), 1);
}

#[test]
fn test_elasticity_keeps_one_empty_queue_as_slack() {
    let mut highway = Highway::new(1, 1).unwrap();
    for _ in 0..3 {
        highway.add_vehicle(vehicle(0, 5, 1.0)).unwrap();
    }
    highway.add_vehicle(vehicle(0, 1, 1.0)).unwrap();
    assert_eq!(highway.active_queue_count(), 4);

    // Only queue 3 empties: a single empty queue is kept
    highway.tick().unwrap();
    assert_eq!(highway.active_queue_count(), 4);
}

#[test]
fn test_elasticity_one_deactivation_per_call() {
    let mut highway = Highway::new(1, 1).unwrap();
    for _ in 0..4 {
        highway.add_vehicle(vehicle(0, 1, 1.0)).unwrap();
    }
    highway.advance_service();
    assert_eq!(highway.active_queue_count(), 4);

    assert_eq!(highway.adjust_active_queue_count().unwrap(), Some(0));
    assert_eq!(highway.adjust_active_queue_count().unwrap(), Some(1));
    assert_eq!(highway.adjust_active_queue_count().unwrap(), Some(2));
    assert_eq!(highway.adjust_active_queue_count().unwrap(), None);
    assert_eq!(highway.active_queue_count(), 1);
}

#[test]
fn test_no_data_before_first_departure() {
    let highway = Highway::new(2, 3).unwrap();
    assert_eq!(highway.average_waiting_time(), Err(SimError::NoDataYet));
    assert_eq!(highway.average_tolls(), Err(SimError::NoDataYet));

    let stats = highway.stats();
    assert_eq!(stats.average_waiting_time, None);
    assert_eq!(stats.average_tolls, None);
    assert!(stats.to_string().contains("Average toll: n/a"));
}

#[test]
fn test_average_vehicles_per_queue() {
    let mut highway = Highway::new(2, 5).unwrap();
    assert_approx_eq!(highway.average_vehicles_per_queue(), 0.0);
    for _ in 0..3 {
        highway.add_vehicle(vehicle(0, 2, 1.0)).unwrap();
    }
    assert_approx_eq!(highway.average_vehicles_per_queue(), 1.5);
}

#[test]
fn test_report_layout() {
    let mut highway = Highway::new(1, 2).unwrap();
    highway.add_vehicle(vehicle(0, 3, 1.50)).unwrap();
    for _ in 0..3 {
        highway.tick().unwrap();
    }

    let expected = "Minimum number of activated queues 1\n\
                    Maximum number of vehicles per queue 2\n\
                    Queue 0 [active]: 0 vehicle(s)\n\
                    Elapsed time 3\n\
                    Total waiting time 1\n\
                    Number of vehicles processed 1\n\
                    Total tolls collected 1.50\n";
    assert_eq!(highway.to_string(), expected);
}
