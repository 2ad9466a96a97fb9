//! Sensing functions and function masks
//!
//! A motion component exposes up to three functions. Callers request them at
//! init time as a [`Functions`] mask and address them individually with
//! [`Function`] afterwards.

use crate::config::MOTION_FUNCTIONS_NBR;

/// One sensing function of a motion component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Function {
    /// Gyroscope (angular rate)
    Gyro,
    /// Accelerometer (linear acceleration)
    Accelero,
    /// Magnetometer (magnetic field)
    Magneto,
}

impl Function {
    /// All functions in mask bit order
    pub const ALL: [Self; MOTION_FUNCTIONS_NBR] = [Self::Gyro, Self::Accelero, Self::Magneto];

    /// Index of this function's slot in a per-instance dispatch table
    #[must_use]
    pub const fn slot(self) -> usize {
        match self {
            Self::Gyro => 0,
            Self::Accelero => 1,
            Self::Magneto => 2,
        }
    }

    /// Single-bit mask for this function
    #[must_use]
    pub const fn bit(self) -> Functions {
        match self {
            Self::Gyro => Functions::GYRO,
            Self::Accelero => Functions::ACCELERO,
            Self::Magneto => Functions::MAGNETO,
        }
    }
}

bitflags::bitflags! {
    /// Set of sensing functions
    ///
    /// Bit values are the board-support wire values (gyro `0x01`,
    /// accelerometer `0x02`, magnetometer `0x04`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Functions: u32 {
        /// Gyroscope
        const GYRO = 0x01;
        /// Accelerometer
        const ACCELERO = 0x02;
        /// Magnetometer
        const MAGNETO = 0x04;
    }
}

impl Functions {
    /// Whether `function` is part of this set
    #[must_use]
    pub const fn has(self, function: Function) -> bool {
        self.contains(function.bit())
    }

    /// Iterate the contained functions in bit order
    pub fn functions(self) -> impl Iterator<Item = Function> {
        Function::ALL.into_iter().filter(move |f| self.has(*f))
    }
}

impl From<Function> for Functions {
    fn from(function: Function) -> Self {
        function.bit()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Functions {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Functions({=u32:#x})", self.bits());
    }
}
