//! Unit tests for the bus implementations

use crate::common::MockI2c;
use device_driver::RegisterInterface;
use motion_bsp::config::BusConfig;
use motion_bsp::{BusIo, BusType, I2cBus, RegisterBus};

fn fixed_tick() -> u32 {
    1234
}

#[test]
fn test_default_and_alternative_addresses() {
    let default = I2cBus::default(MockI2c::new(0x6A));
    assert_eq!(default.address(), 0x6A);
    assert_eq!(default.bus_type(), BusType::I2c);

    let alternative = I2cBus::alternative(MockI2c::new(0x6B));
    assert_eq!(alternative.address(), 0x6B);

    let configured = I2cBus::from_config(MockI2c::new(0x6B), BusConfig::alternative());
    assert_eq!(configured.address(), 0x6B);
}

#[test]
fn test_read_registers_uses_write_read() {
    let i2c = MockI2c::new(0x6A);
    i2c.set_register(0x0F, 0x6C);
    i2c.set_register(0x10, 0x40);
    let mut bus = I2cBus::default(i2c.clone());

    let mut data = [0u8; 2];
    bus.read_registers(0x0F, &mut data).unwrap();
    assert_eq!(data, [0x6C, 0x40]);
    assert_eq!(i2c.writes(), vec![vec![0x0F]]);
}

#[test]
fn test_write_registers_prefixes_address() {
    let i2c = MockI2c::new(0x6A);
    let mut bus = I2cBus::default(i2c.clone());

    bus.write_registers(0x10, &[0x40, 0x4C]).unwrap();
    assert_eq!(i2c.writes(), vec![vec![0x10, 0x40, 0x4C]]);
    assert_eq!(i2c.get_register(0x10), 0x40);
    assert_eq!(i2c.get_register(0x11), 0x4C);
}

#[test]
fn test_wrong_address_is_not_acknowledged() {
    let mut bus = I2cBus::alternative(MockI2c::new(0x6A));
    let mut data = [0u8; 1];
    assert!(bus.read_registers(0x0F, &mut data).is_err());
}

#[test]
fn test_bus_error_propagates() {
    let i2c = MockI2c::new(0x6A);
    let mut bus = I2cBus::default(i2c.clone());
    i2c.fail_next();
    assert!(bus.write_registers(0x10, &[0x00]).is_err());
}

#[test]
fn test_tick() {
    let bus = I2cBus::default(MockI2c::new(0x6A));
    assert_eq!(bus.tick(), 0);

    let bus = bus.with_tick(fixed_tick);
    assert_eq!(bus.tick(), 1234);
}

#[test]
fn test_register_bus_forwards_to_bus_io() {
    let i2c = MockI2c::new(0x6A);
    i2c.set_register(0x0F, 0x6C);
    let mut interface = RegisterBus::new(I2cBus::default(i2c.clone()));

    let mut data = [0u8; 1];
    interface.read_register(0x0F, 8, &mut data).unwrap();
    assert_eq!(data, [0x6C]);

    interface.write_register(0x12, 8, &[0x44]).unwrap();
    assert_eq!(i2c.get_register(0x12), 0x44);

    let released = interface.release().release();
    assert_eq!(released.get_register(0x12), 0x44);
}
