//! Unit tests for forwarding calls to the bound drivers

use crate::common::{assert_float_eq, create_mock_sensors, Call};
use motion_bsp::{
    status_code, Axes, AxesRaw, Error, Function, Functions, BSP_ERROR_COMPONENT_FAILURE,
    BSP_ERROR_NONE, BSP_ERROR_WRONG_PARAM,
};

fn init_both() -> (crate::common::test_utils::MockSensors, crate::common::MockHandle) {
    let (mut sensors, handle) = create_mock_sensors();
    sensors
        .init(0, Functions::GYRO | Functions::ACCELERO)
        .unwrap();
    handle.clear_calls();
    (sensors, handle)
}

#[test]
fn test_output_data_rate_round_trip() {
    let (mut sensors, handle) = init_both();

    sensors
        .set_output_data_rate(0, Function::Accelero, 104.0)
        .unwrap();
    let odr = sensors
        .get_output_data_rate(0, Function::Accelero)
        .unwrap();
    assert_float_eq(odr, 104.0, 1e-6);

    // Gyro slot untouched
    let gyro_odr = sensors.get_output_data_rate(0, Function::Gyro).unwrap();
    assert_float_eq(gyro_odr, 0.0, 1e-6);

    assert_eq!(
        handle.calls(),
        vec![
            Call::SetOutputDataRate(Function::Accelero, 104.0),
            Call::GetOutputDataRate(Function::Accelero),
            Call::GetOutputDataRate(Function::Gyro),
        ]
    );
}

#[test]
fn test_full_scale_round_trip() {
    let (mut sensors, _handle) = init_both();

    sensors.set_full_scale(0, Function::Gyro, 500).unwrap();
    assert_eq!(sensors.get_full_scale(0, Function::Gyro), Ok(500));
}

#[test]
fn test_axes_forwarded_to_matching_function() {
    let (mut sensors, handle) = init_both();
    handle.set_axes(Function::Accelero, Axes { x: 1, y: 2, z: 1000 });
    handle.set_axes(Function::Gyro, Axes { x: -70, y: 0, z: 70 });

    assert_eq!(
        sensors.get_axes(0, Function::Accelero),
        Ok(Axes { x: 1, y: 2, z: 1000 })
    );
    assert_eq!(
        sensors.get_axes(0, Function::Gyro),
        Ok(Axes { x: -70, y: 0, z: 70 })
    );
}

#[test]
fn test_raw_axes_and_sensitivity() {
    let (mut sensors, handle) = init_both();
    handle.set_axes_raw(Function::Gyro, AxesRaw { x: 10, y: -10, z: 0 });
    handle.set_sensitivity(Function::Gyro, 70.0);

    assert_eq!(
        sensors.get_axes_raw(0, Function::Gyro),
        Ok(AxesRaw { x: 10, y: -10, z: 0 })
    );
    let sensitivity = sensors.get_sensitivity(0, Function::Gyro).unwrap();
    assert_float_eq(sensitivity, 70.0, 1e-6);
}

#[test]
fn test_enable_disable_reach_the_right_driver() {
    let (mut sensors, handle) = init_both();

    sensors.disable(0, Function::Gyro).unwrap();
    sensors.enable(0, Function::Gyro).unwrap();
    sensors.disable(0, Function::Accelero).unwrap();

    assert_eq!(
        handle.calls(),
        vec![
            Call::Disable(Function::Gyro),
            Call::Enable(Function::Gyro),
            Call::Disable(Function::Accelero),
        ]
    );
}

#[test]
fn test_driver_failure_maps_to_component_failure() {
    let (mut sensors, handle) = init_both();
    handle.fail_function(Some(Function::Accelero));

    assert_eq!(
        sensors.get_axes(0, Function::Accelero),
        Err(Error::ComponentFailure)
    );
    assert_eq!(
        sensors.set_full_scale(0, Function::Accelero, 8),
        Err(Error::ComponentFailure)
    );
    // Other function unaffected
    assert!(sensors.get_axes(0, Function::Gyro).is_ok());
}

#[test]
fn test_deinit_invokes_driver_once() {
    let (mut sensors, handle) = init_both();

    assert!(sensors.deinit(0).is_ok());
    assert_eq!(handle.calls(), vec![Call::DeInit]);

    // Mask kept after de-init
    assert_eq!(sensors.functions(0), Functions::GYRO | Functions::ACCELERO);
}

#[test]
fn test_deinit_failure() {
    let (mut sensors, handle) = init_both();
    handle.fail_deinit(true);

    assert_eq!(sensors.deinit(0), Err(Error::ComponentFailure));
    assert_eq!(handle.count(&Call::DeInit), 1);
}

#[test]
fn test_identity_queries() {
    let (mut sensors, handle) = init_both();

    assert_eq!(sensors.read_id(0), Ok(crate::common::mock_component::MOCK_ID));
    let caps = sensors.get_capabilities(0).unwrap();
    assert!(caps.acc && caps.gyro && !caps.magneto);
    assert_eq!(caps.gyro_max_fs, 2000);

    handle.fail_read_id(true);
    handle.fail_get_capabilities(true);
    assert_eq!(sensors.read_id(0), Err(Error::UnknownComponent));
    assert_eq!(sensors.get_capabilities(0), Err(Error::UnknownComponent));
}

#[test]
fn test_status_codes() {
    let (mut sensors, handle) = init_both();

    assert_eq!(status_code(&sensors.enable(0, Function::Gyro)), BSP_ERROR_NONE);
    assert_eq!(
        status_code(&sensors.enable(0, Function::Magneto)),
        BSP_ERROR_WRONG_PARAM
    );

    handle.fail_function(Some(Function::Gyro));
    assert_eq!(
        status_code(&sensors.get_axes(0, Function::Gyro)),
        BSP_ERROR_COMPONENT_FAILURE
    );
}
