#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod capabilities;
pub mod config;
pub mod driver;
pub mod function;
pub mod interface;
pub mod registry;
pub mod sensors;

mod probe;

// LSM6DSOX component (feature-gated)
#[cfg(feature = "lsm6dsox")]
pub mod device;
#[cfg(feature = "lsm6dsox")]
pub mod registers;

// Re-export main types
pub use capabilities::Capabilities;
pub use driver::{CommonDriver, Component, DriverError, FunctionDriver};
pub use function::{Function, Functions};
pub use interface::{BusIo, BusType, I2cBus, RegisterBus};
pub use registry::{MotionSensors, SensorContext};
pub use sensors::{Axes, AxesRaw, OutputDataRate};

#[cfg(feature = "lsm6dsox")]
pub use config::BoardMotionSensors;
#[cfg(feature = "lsm6dsox")]
pub use device::Lsm6dsox;

/// LSM6DSOX I2C address when SA0 pin is low (default: 0x6A)
///
/// Use [`I2cBus::default()`] for this configuration.
pub const I2C_ADDRESS_SA0_LOW: u8 = 0x6A;

/// LSM6DSOX I2C address when SA0 pin is high (alternative: 0x6B)
///
/// Use [`I2cBus::alternative()`] for this configuration.
pub const I2C_ADDRESS_SA0_HIGH: u8 = 0x6B;

/// Expected value of the LSM6DSOX `WHO_AM_I` register
pub const WHO_AM_I_VALUE: u8 = 0x6C;

/// Status code for a successful board-support call
pub const BSP_ERROR_NONE: i32 = 0;
/// Status code for [`Error::NoInit`]
pub const BSP_ERROR_NO_INIT: i32 = -1;
/// Status code for [`Error::WrongParam`]
pub const BSP_ERROR_WRONG_PARAM: i32 = -2;
/// Status code for [`Error::ComponentFailure`]
pub const BSP_ERROR_COMPONENT_FAILURE: i32 = -5;
/// Status code for [`Error::UnknownComponent`]
pub const BSP_ERROR_UNKNOWN_COMPONENT: i32 = -7;

/// Board-support errors returned by every [`MotionSensors`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Instance out of range, or function not enabled on the instance
    #[error("wrong parameter")]
    WrongParam,
    /// No driver has been bound for the requested instance or function
    #[error("component not initialized")]
    NoInit,
    /// Identity or capability query failed, or identity mismatched
    #[error("unknown component")]
    UnknownComponent,
    /// The bound driver reported an error
    #[error("component failure")]
    ComponentFailure,
}

impl Error {
    /// Integer status code used by the board-support convention
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::WrongParam => BSP_ERROR_WRONG_PARAM,
            Self::NoInit => BSP_ERROR_NO_INIT,
            Self::UnknownComponent => BSP_ERROR_UNKNOWN_COMPONENT,
            Self::ComponentFailure => BSP_ERROR_COMPONENT_FAILURE,
        }
    }
}

/// Result alias for board-support calls
pub type Result<T> = core::result::Result<T, Error>;

/// Collapse a board-support result into its integer status code
///
/// `Ok` maps to [`BSP_ERROR_NONE`].
pub fn status_code<T>(result: &Result<T>) -> i32 {
    match result {
        Ok(_) => BSP_ERROR_NONE,
        Err(e) => e.code(),
    }
}
