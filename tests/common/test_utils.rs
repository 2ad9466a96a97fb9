//! Test utilities and helper functions

use crate::common::mock_bus::MockBus;
use crate::common::mock_component::{MockComponent, MockHandle};
use motion_bsp::{Lsm6dsox, MotionSensors};

/// Instances in the mock registry
pub const MOCK_INSTANCES: usize = 2;

/// Registry over the scriptable mock component
pub type MockSensors = MotionSensors<MockComponent, MOCK_INSTANCES>;

/// Registry over a mock component that also ships a magnetometer driver
pub type MockMagSensors = MotionSensors<MockComponent<true>, MOCK_INSTANCES>;

/// Create a mock registry with a component attached to instance 0
/// Returns (sensors, handle) where handle shares state with the component
pub fn create_mock_sensors() -> (MockSensors, MockHandle) {
    let handle = MockHandle::new();
    let mut sensors = MockSensors::new();
    sensors
        .attach_bus(0, handle.clone())
        .expect("instance 0 is in range");
    (sensors, handle)
}

/// Like [`create_mock_sensors`], for a component with a magnetometer driver
pub fn create_mock_mag_sensors() -> (MockMagSensors, MockHandle) {
    let handle = MockHandle::new();
    let mut sensors = MockMagSensors::new();
    sensors
        .attach_bus(0, handle.clone())
        .expect("instance 0 is in range");
    (sensors, handle)
}

/// Create an LSM6DSOX over a mock bus
/// Returns (component, bus) where bus is a clone that shares state with the component
pub fn create_mock_lsm6dsox() -> (Lsm6dsox<MockBus>, MockBus) {
    let bus = MockBus::new();
    let bus_clone = bus.clone();
    let mut imu = Lsm6dsox::new(bus);
    imu.register_bus_io().expect("Failed to register mock bus");
    (imu, bus_clone)
}

/// Assert that two floating point values are approximately equal
pub fn assert_float_eq(a: f32, b: f32, epsilon: f32) {
    let diff = (a - b).abs();
    assert!(
        diff < epsilon,
        "Values not equal within epsilon: {} vs {} (diff: {}, epsilon: {})",
        a,
        b,
        diff,
        epsilon
    );
}
