//! Gyroscope full-scale settings

/// Gyroscope full-scale range
///
/// ±125 dps is selected by the separate `FS_125` bit; the others use `FS_G`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroFullScale {
    /// ±125 dps
    Dps125,
    /// ±250 dps
    Dps250,
    /// ±500 dps
    Dps500,
    /// ±1000 dps
    Dps1000,
    /// ±2000 dps
    Dps2000,
}

impl GyroFullScale {
    /// Get the sensitivity in mdps/LSB
    #[must_use]
    pub const fn sensitivity(self) -> f32 {
        match self {
            Self::Dps125 => 4.375,
            Self::Dps250 => 8.75,
            Self::Dps500 => 17.5,
            Self::Dps1000 => 35.0,
            Self::Dps2000 => 70.0,
        }
    }

    /// Get the maximum value in dps
    #[must_use]
    pub const fn max_value(self) -> i32 {
        match self {
            Self::Dps125 => 125,
            Self::Dps250 => 250,
            Self::Dps500 => 500,
            Self::Dps1000 => 1000,
            Self::Dps2000 => 2000,
        }
    }

    /// Smallest range covering `dps`; requests above 2000 dps saturate
    #[must_use]
    pub const fn at_least(dps: i32) -> Self {
        if dps <= 125 {
            Self::Dps125
        } else if dps <= 250 {
            Self::Dps250
        } else if dps <= 500 {
            Self::Dps500
        } else if dps <= 1000 {
            Self::Dps1000
        } else {
            Self::Dps2000
        }
    }

    /// `FS_G` code, or `None` for the `FS_125` range
    #[must_use]
    pub const fn fs_g_bits(self) -> Option<u8> {
        match self {
            Self::Dps125 => None,
            Self::Dps250 => Some(0),
            Self::Dps500 => Some(1),
            Self::Dps1000 => Some(2),
            Self::Dps2000 => Some(3),
        }
    }

    /// Decode `FS_125` and `FS_G`
    #[must_use]
    pub const fn from_bits(fs_125: bool, fs_g: u8) -> Self {
        if fs_125 {
            return Self::Dps125;
        }
        match fs_g & 0b11 {
            0 => Self::Dps250,
            1 => Self::Dps500,
            2 => Self::Dps1000,
            _ => Self::Dps2000,
        }
    }
}
