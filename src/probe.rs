//! Component probing
//!
//! Builds the component object for an instance from its bus, checks the
//! identity and binds the driver descriptors for the requested functions.

use crate::driver::Component;
use crate::function::Functions;
use crate::registry::MotionSensors;
use crate::{Error, Result};

impl<C: Component, const N: usize> MotionSensors<C, N> {
    /// Probe `instance` and bind `functions`
    ///
    /// The previous binding is dropped first, so after a failed probe the
    /// instance serves nothing past the failing step. A probe on an already
    /// bound instance reuses the component's bus.
    ///
    /// Requested functions the component reports as absent are skipped; a
    /// requested function the component has no driver for fails the probe.
    pub(crate) fn probe(&mut self, instance: usize, functions: Functions) -> Result<()> {
        self.unbind(instance);

        let bus = match self.buses[instance].take() {
            Some(bus) => bus,
            None => match self.objects[instance].take() {
                Some(obj) => obj.release(),
                None => {
                    log::warn!("motion {}: no bus attached", instance);
                    return Err(Error::NoInit);
                }
            },
        };

        let object = self.objects[instance].insert(C::new(bus));
        if let Err(e) = object.register_bus_io() {
            log::warn!("motion {}: bus registration failed: {}", instance, e);
            return Err(Error::NoInit);
        }

        match object.read_id() {
            Ok(id) if id == C::ID => {}
            Ok(id) => {
                log::warn!(
                    "motion {}: unexpected id {:#04x} (expected {:#04x})",
                    instance,
                    id,
                    C::ID
                );
                return Err(Error::UnknownComponent);
            }
            Err(e) => {
                log::warn!("motion {}: read id failed: {}", instance, e);
                return Err(Error::UnknownComponent);
            }
        }

        let capabilities = object.capabilities().map_err(|e| {
            log::warn!("motion {}: capabilities failed: {}", instance, e);
            Error::UnknownComponent
        })?;
        self.contexts[instance].functions = capabilities.functions();

        let common = C::common_driver();
        self.common_drivers[instance] = Some(common);

        for function in functions.functions() {
            let Some(driver) = C::function_driver(function) else {
                log::warn!("motion {}: no driver for {:?}", instance, function);
                return Err(Error::ComponentFailure);
            };
            if !capabilities.supports(function) {
                log::debug!("motion {}: {:?} not present, skipped", instance, function);
                continue;
            }

            self.function_drivers[instance][function.slot()] = Some(driver);
            common.init(object).map_err(|e| {
                log::warn!("motion {}: init for {:?} failed: {}", instance, function, e);
                Error::ComponentFailure
            })?;
        }

        log::debug!(
            "motion {}: probed, serves {:?}, bound {:?}",
            instance,
            capabilities.functions(),
            functions & capabilities.functions()
        );
        Ok(())
    }
}
