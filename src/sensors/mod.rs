//! Sensor value types for motion components
//!
//! - Accelerometer full scales and sensitivities
//! - Gyroscope full scales and sensitivities
//! - Output data rates shared by both LSM6DSOX sensors
//!
//! Axis samples come in two flavours: [`AxesRaw`] holds the signed 16-bit
//! register counts, [`Axes`] holds values scaled to mg or mdps.

pub mod accelerometer;
pub mod gyroscope;

// Re-export main types
pub use accelerometer::AccelFullScale;
pub use gyroscope::GyroFullScale;

/// Three-axis sample in physical units (mg for accelerometer, mdps for gyroscope)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Axes {
    /// X axis
    pub x: i32,
    /// Y axis
    pub y: i32,
    /// Z axis
    pub z: i32,
}

/// Three-axis sample in raw sensor counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxesRaw {
    /// X axis
    pub x: i16,
    /// Y axis
    pub y: i16,
    /// Z axis
    pub z: i16,
}

impl AxesRaw {
    /// Decode a little-endian `X_L, X_H, Y_L, Y_H, Z_L, Z_H` block
    #[must_use]
    pub const fn from_le_bytes(buf: [u8; 6]) -> Self {
        Self {
            x: i16::from_le_bytes([buf[0], buf[1]]),
            y: i16::from_le_bytes([buf[2], buf[3]]),
            z: i16::from_le_bytes([buf[4], buf[5]]),
        }
    }

    /// Scale to physical units, rounding to nearest
    ///
    /// `sensitivity` is in output units per LSB (mg/LSB or mdps/LSB).
    #[must_use]
    pub fn scale(self, sensitivity: f32) -> Axes {
        let scale = |v: i16| libm::roundf(f32::from(v) * sensitivity) as i32;
        Axes {
            x: scale(self.x),
            y: scale(self.y),
            z: scale(self.z),
        }
    }
}

/// Output data rate of an LSM6DSOX sensor
///
/// Discriminants are the `ODR_XL` / `ODR_G` register codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputDataRate {
    /// Power down
    Off = 0,
    /// 12.5 Hz
    Hz12_5 = 1,
    /// 26 Hz
    Hz26 = 2,
    /// 52 Hz
    Hz52 = 3,
    /// 104 Hz
    Hz104 = 4,
    /// 208 Hz
    Hz208 = 5,
    /// 417 Hz
    Hz417 = 6,
    /// 833 Hz
    Hz833 = 7,
    /// 1667 Hz
    Hz1667 = 8,
    /// 3333 Hz
    Hz3333 = 9,
    /// 6667 Hz
    Hz6667 = 10,
}

impl OutputDataRate {
    /// Rate in Hz (0.0 when powered down)
    #[must_use]
    pub const fn hz(self) -> f32 {
        match self {
            Self::Off => 0.0,
            Self::Hz12_5 => 12.5,
            Self::Hz26 => 26.0,
            Self::Hz52 => 52.0,
            Self::Hz104 => 104.0,
            Self::Hz208 => 208.0,
            Self::Hz417 => 417.0,
            Self::Hz833 => 833.0,
            Self::Hz1667 => 1667.0,
            Self::Hz3333 => 3333.0,
            Self::Hz6667 => 6667.0,
        }
    }

    /// Smallest supported rate not below `hz`
    ///
    /// Requests above 6667 Hz saturate. Power down is never selected here.
    #[must_use]
    pub fn at_least(hz: f32) -> Self {
        if hz <= 12.5 {
            Self::Hz12_5
        } else if hz <= 26.0 {
            Self::Hz26
        } else if hz <= 52.0 {
            Self::Hz52
        } else if hz <= 104.0 {
            Self::Hz104
        } else if hz <= 208.0 {
            Self::Hz208
        } else if hz <= 417.0 {
            Self::Hz417
        } else if hz <= 833.0 {
            Self::Hz833
        } else if hz <= 1667.0 {
            Self::Hz1667
        } else if hz <= 3333.0 {
            Self::Hz3333
        } else {
            Self::Hz6667
        }
    }

    /// Register code
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode a register code; codes above 10 are reserved
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        Some(match bits {
            0 => Self::Off,
            1 => Self::Hz12_5,
            2 => Self::Hz26,
            3 => Self::Hz52,
            4 => Self::Hz104,
            5 => Self::Hz208,
            6 => Self::Hz417,
            7 => Self::Hz833,
            8 => Self::Hz1667,
            9 => Self::Hz3333,
            10 => Self::Hz6667,
            _ => return None,
        })
    }
}
