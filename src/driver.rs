//! Component driver contract
//!
//! A motion component is reached through two descriptors: one
//! [`CommonDriver`] for identity and lifecycle, and one [`FunctionDriver`]
//! per sensing function it provides. Both are stateless; every call gets the
//! component object it acts on.

use crate::capabilities::Capabilities;
use crate::function::Function;
use crate::interface::BusIo;
use crate::sensors::{Axes, AxesRaw};

/// Errors reported by a component driver
///
/// The dispatch layer never forwards these; it maps them to board-support
/// error kinds and logs the detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError {
    /// Communication error with the device
    #[error("bus transfer failed")]
    Bus,
    /// Invalid `WHO_AM_I` register value (contains the actual value read)
    #[error("unexpected device id {0:#04x}")]
    InvalidDevice(u8),
    /// Register content or argument outside the supported range
    #[error("invalid argument")]
    InvalidArgument,
    /// Operation needs a prior component init
    #[error("component not initialized")]
    NotInitialized,
}

/// Result alias for driver calls
pub type DriverResult<T> = Result<T, DriverError>;

/// Identity and lifecycle operations of a component
pub trait CommonDriver<C> {
    /// Put the component in its default configuration
    ///
    /// # Errors
    /// Any driver error.
    fn init(&self, obj: &mut C) -> DriverResult<()>;

    /// Power the component down
    ///
    /// # Errors
    /// Any driver error.
    fn deinit(&self, obj: &mut C) -> DriverResult<()>;

    /// Read the identity register
    ///
    /// # Errors
    /// Any driver error.
    fn read_id(&self, obj: &mut C) -> DriverResult<u8>;

    /// Report the capability record
    ///
    /// # Errors
    /// Any driver error.
    fn get_capabilities(&self, obj: &mut C) -> DriverResult<Capabilities>;
}

/// Operations of one sensing function of a component
///
/// Units follow the function: mg and g for the accelerometer, mdps and dps
/// for the gyroscope, mgauss and gauss for the magnetometer.
pub trait FunctionDriver<C> {
    /// Start the function at its configured rate
    ///
    /// # Errors
    /// Any driver error.
    fn enable(&self, obj: &mut C) -> DriverResult<()>;

    /// Power the function down
    ///
    /// # Errors
    /// Any driver error.
    fn disable(&self, obj: &mut C) -> DriverResult<()>;

    /// Read the three axes in mg, mdps or mgauss
    ///
    /// # Errors
    /// Any driver error.
    fn get_axes(&self, obj: &mut C) -> DriverResult<Axes>;

    /// Read the three axes in raw counts
    ///
    /// # Errors
    /// Any driver error.
    fn get_axes_raw(&self, obj: &mut C) -> DriverResult<AxesRaw>;

    /// Output units per LSB at the current full scale
    ///
    /// # Errors
    /// Any driver error.
    fn get_sensitivity(&self, obj: &mut C) -> DriverResult<f32>;

    /// Current output data rate in Hz
    ///
    /// # Errors
    /// Any driver error.
    fn get_output_data_rate(&self, obj: &mut C) -> DriverResult<f32>;

    /// Set the output data rate in Hz; the component may round it
    ///
    /// # Errors
    /// Any driver error.
    fn set_output_data_rate(&self, obj: &mut C, odr: f32) -> DriverResult<()>;

    /// Current full scale in g, dps or gauss
    ///
    /// # Errors
    /// Any driver error.
    fn get_full_scale(&self, obj: &mut C) -> DriverResult<i32>;

    /// Set the full scale in g, dps or gauss; the component may round it
    ///
    /// # Errors
    /// Any driver error.
    fn set_full_scale(&self, obj: &mut C, full_scale: i32) -> DriverResult<()>;
}

/// A component that can be probed onto a motion instance
///
/// The component object owns its bus. Probing builds it from a bus,
/// registers the bus I/O, checks the identity and then hands out the
/// static driver descriptors.
pub trait Component: Sized + 'static {
    /// Bus the component is attached to
    type Bus: BusIo;

    /// Expected identity register value
    const ID: u8;

    /// Bind a component object to its bus
    fn new(bus: Self::Bus) -> Self;

    /// Unbind and return the bus
    fn release(self) -> Self::Bus;

    /// Bring the component's bus up
    ///
    /// # Errors
    /// [`DriverError::Bus`] if the bus cannot be initialized.
    fn register_bus_io(&mut self) -> DriverResult<()>;

    /// Read the identity register
    ///
    /// # Errors
    /// Any driver error.
    fn read_id(&mut self) -> DriverResult<u8>;

    /// Report the capability record
    ///
    /// # Errors
    /// Any driver error.
    fn capabilities(&mut self) -> DriverResult<Capabilities>;

    /// Lifecycle descriptor
    fn common_driver() -> &'static dyn CommonDriver<Self>;

    /// Descriptor for `function`, if the component implements it
    fn function_driver(function: Function) -> Option<&'static dyn FunctionDriver<Self>>;
}
