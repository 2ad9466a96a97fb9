//! Accelerometer full-scale settings
//!
//! LSM6DSOX `FS_XL` encoding is not monotonic: `00` is ±2g, `01` is ±16g,
//! `10` is ±4g and `11` is ±8g.

/// Accelerometer full-scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelFullScale {
    /// ±2g range (most sensitive, least range)
    G2 = 0,
    /// ±16g range (least sensitive, most range)
    G16 = 1,
    /// ±4g range
    G4 = 2,
    /// ±8g range
    G8 = 3,
}

impl AccelFullScale {
    /// Get the sensitivity in mg/LSB
    ///
    /// This is used to convert raw sensor values to physical units.
    #[must_use]
    pub const fn sensitivity(self) -> f32 {
        match self {
            Self::G2 => 0.061,
            Self::G4 => 0.122,
            Self::G8 => 0.244,
            Self::G16 => 0.488,
        }
    }

    /// Get the maximum value in g
    #[must_use]
    pub const fn max_value(self) -> i32 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
            Self::G16 => 16,
        }
    }

    /// Smallest range covering `g`; requests above 16g saturate
    #[must_use]
    pub const fn at_least(g: i32) -> Self {
        if g <= 2 {
            Self::G2
        } else if g <= 4 {
            Self::G4
        } else if g <= 8 {
            Self::G8
        } else {
            Self::G16
        }
    }

    /// `FS_XL` register code
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode an `FS_XL` register code (two bits)
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::G2,
            1 => Self::G16,
            2 => Self::G4,
            _ => Self::G8,
        }
    }
}
