//! Motion sensor instances and dispatch
//!
//! [`MotionSensors`] owns one slot per motion instance. A slot holds the bus
//! until probe, then the component object, its lifecycle descriptor, one
//! descriptor per bound function and the [`SensorContext`] recording which
//! functions the instance serves.
//!
//! Every call is validated before anything is dispatched: the instance must
//! be in range and, for function-scoped calls, the function must be in the
//! instance's mask. Driver errors are logged and folded into
//! [`Error::ComponentFailure`] (or [`Error::UnknownComponent`] for identity
//! queries).

use crate::capabilities::Capabilities;
use crate::config::MOTION_FUNCTIONS_NBR;
use crate::driver::{CommonDriver, Component, DriverError, FunctionDriver};
use crate::function::{Function, Functions};
use crate::sensors::{Axes, AxesRaw};
use crate::{Error, Result};

/// Per-instance record of the functions the bound component serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorContext {
    /// Functions reported by the component at the last successful identity check
    pub functions: Functions,
}

/// Motion sensor instances of a board
///
/// `N` is the number of instances; `C` the component type bound to them.
pub struct MotionSensors<C: Component, const N: usize> {
    pub(crate) buses: [Option<C::Bus>; N],
    pub(crate) objects: [Option<C>; N],
    pub(crate) common_drivers: [Option<&'static dyn CommonDriver<C>>; N],
    pub(crate) function_drivers: [[Option<&'static dyn FunctionDriver<C>>; MOTION_FUNCTIONS_NBR]; N],
    pub(crate) contexts: [SensorContext; N],
}

fn component_failure(operation: &str, instance: usize, error: DriverError) -> Error {
    log::warn!("motion {}: {} failed: {}", instance, operation, error);
    Error::ComponentFailure
}

fn unknown_component(operation: &str, instance: usize, error: DriverError) -> Error {
    log::warn!("motion {}: {} failed: {}", instance, operation, error);
    Error::UnknownComponent
}

impl<C: Component, const N: usize> Default for MotionSensors<C, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Component, const N: usize> MotionSensors<C, N> {
    /// Create a registry with no buses attached
    #[must_use]
    pub fn new() -> Self {
        Self::with_buses(core::array::from_fn(|_| None))
    }

    /// Create a registry with the given per-instance buses
    #[must_use]
    pub fn with_buses(buses: [Option<C::Bus>; N]) -> Self {
        Self {
            buses,
            objects: core::array::from_fn(|_| None),
            common_drivers: [None; N],
            function_drivers: [[None; MOTION_FUNCTIONS_NBR]; N],
            contexts: [SensorContext::default(); N],
        }
    }

    /// Attach the bus for `instance`, replacing any previous binding
    ///
    /// # Errors
    ///
    /// [`Error::WrongParam`] if `instance` is out of range.
    pub fn attach_bus(&mut self, instance: usize, bus: C::Bus) -> Result<()> {
        Self::check_instance(instance)?;
        self.unbind(instance);
        self.objects[instance] = None;
        self.buses[instance] = Some(bus);
        Ok(())
    }

    /// Detach and return the bus of `instance`
    ///
    /// Works both before probe and after; the instance is left unbound.
    pub fn take_bus(&mut self, instance: usize) -> Option<C::Bus> {
        if instance >= N {
            return None;
        }
        self.unbind(instance);
        self.buses[instance]
            .take()
            .or_else(|| self.objects[instance].take().map(C::release))
    }

    /// Functions `instance` currently serves (empty if out of range)
    #[must_use]
    pub fn functions(&self, instance: usize) -> Functions {
        self.context(instance)
            .map_or(Functions::empty(), |ctx| ctx.functions)
    }

    /// Sensor context of `instance`
    #[must_use]
    pub fn context(&self, instance: usize) -> Option<&SensorContext> {
        self.contexts.get(instance)
    }

    /// Component object bound to `instance`, if probed
    #[must_use]
    pub fn component(&self, instance: usize) -> Option<&C> {
        self.objects.get(instance).and_then(Option::as_ref)
    }

    /// Mutable access to the component object of `instance`
    ///
    /// For component features the dispatch layer does not cover.
    pub fn component_mut(&mut self, instance: usize) -> Option<&mut C> {
        self.objects.get_mut(instance).and_then(Option::as_mut)
    }

    /// Probe `instance`, bind the requested functions and enable them
    ///
    /// Requested functions are bound and enabled in bit order (gyro,
    /// accelerometer, magnetometer). Nothing is rolled back on failure.
    ///
    /// # Errors
    ///
    /// - [`Error::WrongParam`] if `instance` is out of range
    /// - [`Error::NoInit`] if no bus is attached or it cannot be registered
    /// - [`Error::UnknownComponent`] if identity or capabilities cannot be read,
    ///   or the identity does not match
    /// - [`Error::ComponentFailure`] if a requested function has no driver,
    ///   or the component fails to init or enable
    pub fn init(&mut self, instance: usize, functions: Functions) -> Result<()> {
        Self::check_instance(instance)?;
        self.probe(instance, functions)?;

        let (common, obj) = self.common_target(instance)?;
        let capabilities = common
            .get_capabilities(obj)
            .map_err(|e| unknown_component("get capabilities", instance, e))?;

        let enabled = functions & capabilities.functions();
        for function in enabled.functions() {
            let (driver, obj) = self.function_target(instance, function)?;
            driver
                .enable(obj)
                .map_err(|e| component_failure("enable", instance, e))?;
        }

        log::debug!("motion {}: enabled {:?}", instance, enabled);
        Ok(())
    }

    /// De-initialize the component of `instance`
    ///
    /// The function mask and bindings are kept; a later [`init`](Self::init)
    /// re-probes.
    ///
    /// # Errors
    ///
    /// - [`Error::WrongParam`] if `instance` is out of range
    /// - [`Error::NoInit`] if the instance was never bound
    /// - [`Error::ComponentFailure`] if the component fails
    pub fn deinit(&mut self, instance: usize) -> Result<()> {
        let (common, obj) = self.common_target(instance)?;
        common
            .deinit(obj)
            .map_err(|e| component_failure("deinit", instance, e))
    }

    /// Capability record of the component bound to `instance`
    ///
    /// # Errors
    ///
    /// [`Error::WrongParam`], [`Error::NoInit`], or
    /// [`Error::UnknownComponent`] if the component fails.
    pub fn get_capabilities(&mut self, instance: usize) -> Result<Capabilities> {
        let (common, obj) = self.common_target(instance)?;
        common
            .get_capabilities(obj)
            .map_err(|e| unknown_component("get capabilities", instance, e))
    }

    /// Identity register of the component bound to `instance`
    ///
    /// # Errors
    ///
    /// [`Error::WrongParam`], [`Error::NoInit`], or
    /// [`Error::UnknownComponent`] if the component fails.
    pub fn read_id(&mut self, instance: usize) -> Result<u8> {
        let (common, obj) = self.common_target(instance)?;
        common
            .read_id(obj)
            .map_err(|e| unknown_component("read id", instance, e))
    }

    /// Enable `function` on `instance`
    ///
    /// # Errors
    ///
    /// [`Error::WrongParam`] if the instance is out of range or the function is
    /// not in its mask, [`Error::NoInit`] if the function was not bound at
    /// init, [`Error::ComponentFailure`] if the component fails.
    pub fn enable(&mut self, instance: usize, function: Function) -> Result<()> {
        let (driver, obj) = self.function_target(instance, function)?;
        driver
            .enable(obj)
            .map_err(|e| component_failure("enable", instance, e))
    }

    /// Disable `function` on `instance`
    ///
    /// # Errors
    ///
    /// See [`enable`](Self::enable).
    pub fn disable(&mut self, instance: usize, function: Function) -> Result<()> {
        let (driver, obj) = self.function_target(instance, function)?;
        driver
            .disable(obj)
            .map_err(|e| component_failure("disable", instance, e))
    }

    /// Read `function` axes in physical units
    ///
    /// # Errors
    ///
    /// See [`enable`](Self::enable).
    pub fn get_axes(&mut self, instance: usize, function: Function) -> Result<Axes> {
        let (driver, obj) = self.function_target(instance, function)?;
        driver
            .get_axes(obj)
            .map_err(|e| component_failure("get axes", instance, e))
    }

    /// Read `function` axes in raw counts
    ///
    /// # Errors
    ///
    /// See [`enable`](Self::enable).
    pub fn get_axes_raw(&mut self, instance: usize, function: Function) -> Result<AxesRaw> {
        let (driver, obj) = self.function_target(instance, function)?;
        driver
            .get_axes_raw(obj)
            .map_err(|e| component_failure("get raw axes", instance, e))
    }

    /// Sensitivity of `function` in output units per LSB
    ///
    /// # Errors
    ///
    /// See [`enable`](Self::enable).
    pub fn get_sensitivity(&mut self, instance: usize, function: Function) -> Result<f32> {
        let (driver, obj) = self.function_target(instance, function)?;
        driver
            .get_sensitivity(obj)
            .map_err(|e| component_failure("get sensitivity", instance, e))
    }

    /// Output data rate of `function` in Hz
    ///
    /// # Errors
    ///
    /// See [`enable`](Self::enable).
    pub fn get_output_data_rate(&mut self, instance: usize, function: Function) -> Result<f32> {
        let (driver, obj) = self.function_target(instance, function)?;
        driver
            .get_output_data_rate(obj)
            .map_err(|e| component_failure("get output data rate", instance, e))
    }

    /// Set the output data rate of `function` in Hz
    ///
    /// The component may round to a rate it supports.
    ///
    /// # Errors
    ///
    /// See [`enable`](Self::enable).
    pub fn set_output_data_rate(
        &mut self,
        instance: usize,
        function: Function,
        odr: f32,
    ) -> Result<()> {
        let (driver, obj) = self.function_target(instance, function)?;
        driver
            .set_output_data_rate(obj, odr)
            .map_err(|e| component_failure("set output data rate", instance, e))
    }

    /// Full scale of `function` (g, dps or gauss)
    ///
    /// # Errors
    ///
    /// See [`enable`](Self::enable).
    pub fn get_full_scale(&mut self, instance: usize, function: Function) -> Result<i32> {
        let (driver, obj) = self.function_target(instance, function)?;
        driver
            .get_full_scale(obj)
            .map_err(|e| component_failure("get full scale", instance, e))
    }

    /// Set the full scale of `function`
    ///
    /// The component may round to a range it supports.
    ///
    /// # Errors
    ///
    /// See [`enable`](Self::enable).
    pub fn set_full_scale(
        &mut self,
        instance: usize,
        function: Function,
        full_scale: i32,
    ) -> Result<()> {
        let (driver, obj) = self.function_target(instance, function)?;
        driver
            .set_full_scale(obj, full_scale)
            .map_err(|e| component_failure("set full scale", instance, e))
    }

    // ==================== Validation ====================

    const fn check_instance(instance: usize) -> Result<()> {
        if instance >= N {
            return Err(Error::WrongParam);
        }
        Ok(())
    }

    fn common_target(
        &mut self,
        instance: usize,
    ) -> Result<(&'static dyn CommonDriver<C>, &mut C)> {
        Self::check_instance(instance)?;
        let driver = self.common_drivers[instance].ok_or(Error::NoInit)?;
        let obj = self.objects[instance].as_mut().ok_or(Error::NoInit)?;
        Ok((driver, obj))
    }

    fn function_target(
        &mut self,
        instance: usize,
        function: Function,
    ) -> Result<(&'static dyn FunctionDriver<C>, &mut C)> {
        Self::check_instance(instance)?;
        if !self.contexts[instance].functions.has(function) {
            return Err(Error::WrongParam);
        }
        let driver = self.function_drivers[instance][function.slot()].ok_or(Error::NoInit)?;
        let obj = self.objects[instance].as_mut().ok_or(Error::NoInit)?;
        Ok((driver, obj))
    }

    pub(crate) fn unbind(&mut self, instance: usize) {
        self.contexts[instance] = SensorContext::default();
        self.common_drivers[instance] = None;
        self.function_drivers[instance] = [None; MOTION_FUNCTIONS_NBR];
    }
}
