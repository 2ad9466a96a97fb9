//! Board configuration
//!
//! Compile-time sizing of the dispatch tables and the default bus setup for
//! each motion instance on this board.

use crate::interface::BusType;

/// Number of motion instances on the board
pub const MOTION_INSTANCES_NBR: usize = 1;

/// Number of function slots per instance (gyro, accelerometer, magnetometer)
pub const MOTION_FUNCTIONS_NBR: usize = 3;

/// Instance index of the LSM6DSOX
#[cfg(feature = "lsm6dsox")]
pub const LSM6DSOX_0: usize = 0;

/// Bus settings for one motion instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusConfig {
    /// Bus flavour the component is wired to
    pub bus_type: BusType,
    /// 7-bit device address (I2C only)
    pub address: u8,
}

impl Default for BusConfig {
    /// I2C with SA0 low
    fn default() -> Self {
        Self {
            bus_type: BusType::I2c,
            address: crate::I2C_ADDRESS_SA0_LOW,
        }
    }
}

impl BusConfig {
    /// I2C with SA0 high
    #[must_use]
    pub const fn alternative() -> Self {
        Self {
            bus_type: BusType::I2c,
            address: crate::I2C_ADDRESS_SA0_HIGH,
        }
    }
}

#[cfg(feature = "lsm6dsox")]
mod board {
    use super::{BusConfig, LSM6DSOX_0, MOTION_INSTANCES_NBR};
    use crate::device::Lsm6dsox;
    use crate::interface::I2cBus;
    use crate::registry::MotionSensors;

    /// Motion sensors of this board: one LSM6DSOX on I2C
    pub type BoardMotionSensors<I2C> = MotionSensors<Lsm6dsox<I2cBus<I2C>>, MOTION_INSTANCES_NBR>;

    /// Build the board's motion sensors with the LSM6DSOX bus attached
    ///
    /// `tick` is the board millisecond tick, handed to the component as its
    /// time base. Nothing is touched on the bus until
    /// [`MotionSensors::init`] runs.
    ///
    /// # Example
    /// ```ignore
    /// let mut sensors = board_motion_sensors(i2c, board_tick_ms);
    /// sensors.init(LSM6DSOX_0, Functions::GYRO | Functions::ACCELERO)?;
    /// ```
    pub fn board_motion_sensors<I2C>(i2c: I2C, tick: fn() -> u32) -> BoardMotionSensors<I2C>
    where
        I2C: embedded_hal::i2c::I2c + 'static,
    {
        let bus = I2cBus::from_config(i2c, BusConfig::default()).with_tick(tick);
        let mut buses: [Option<I2cBus<I2C>>; MOTION_INSTANCES_NBR] =
            core::array::from_fn(|_| None);
        buses[LSM6DSOX_0] = Some(bus);
        MotionSensors::with_buses(buses)
    }
}

#[cfg(feature = "lsm6dsox")]
pub use board::{board_motion_sensors, BoardMotionSensors};
