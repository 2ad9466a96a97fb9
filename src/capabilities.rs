//! Component capability record

use crate::function::{Function, Functions};

/// What a motion component can do
///
/// Reported by the component at probe time. The three function flags decide
/// which [`Functions`] an instance is allowed to serve.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Capabilities {
    /// Accelerometer present
    pub acc: bool,
    /// Gyroscope present
    pub gyro: bool,
    /// Magnetometer present
    pub magneto: bool,
    /// Low-power modes available
    pub low_power: bool,
    /// Highest gyroscope full scale (dps)
    pub gyro_max_fs: u32,
    /// Highest accelerometer full scale (g)
    pub acc_max_fs: u32,
    /// Highest magnetometer full scale (gauss)
    pub mag_max_fs: u32,
    /// Highest gyroscope output data rate (Hz)
    pub gyro_max_odr: f32,
    /// Highest accelerometer output data rate (Hz)
    pub acc_max_odr: f32,
    /// Highest magnetometer output data rate (Hz)
    pub mag_max_odr: f32,
}

impl Capabilities {
    /// Function mask derived from the presence flags
    #[must_use]
    pub fn functions(&self) -> Functions {
        let mut mask = Functions::empty();
        mask.set(Functions::GYRO, self.gyro);
        mask.set(Functions::ACCELERO, self.acc);
        mask.set(Functions::MAGNETO, self.magneto);
        mask
    }

    /// Whether the component provides `function`
    #[must_use]
    pub const fn supports(&self, function: Function) -> bool {
        match function {
            Function::Gyro => self.gyro,
            Function::Accelero => self.acc,
            Function::Magneto => self.magneto,
        }
    }
}
