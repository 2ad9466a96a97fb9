//! LSM6DSOX component
//!
//! This module provides the LSM6DSOX accelerometer/gyroscope object, its
//! register-level operations, and the static driver descriptors the motion
//! dispatch layer binds at probe time.

use crate::capabilities::Capabilities;
use crate::driver::{CommonDriver, Component, DriverError, DriverResult, FunctionDriver};
use crate::function::Function;
use crate::interface::{BusIo, BusType, RegisterBus};
use crate::registers::Lsm6dsox as RegisterDevice;
use crate::registers::{OUTX_L_A, OUTX_L_G};
use crate::sensors::{AccelFullScale, Axes, AxesRaw, GyroFullScale, OutputDataRate};
use crate::WHO_AM_I_VALUE;

use device_driver::RegisterInterface;

/// Rate restored on first enable after init
const DEFAULT_ODR: OutputDataRate = OutputDataRate::Hz104;

fn bus_error<E: core::fmt::Debug>(error: E) -> DriverError {
    log::warn!("lsm6dsox: bus error {:?}", error);
    DriverError::Bus
}

/// LSM6DSOX component object
///
/// Owns the bus. Each sensor remembers the rate it should run at while
/// disabled, so that enable restores it.
pub struct Lsm6dsox<B> {
    device: RegisterDevice<RegisterBus<B>>,
    is_initialized: bool,
    acc_is_enabled: bool,
    gyro_is_enabled: bool,
    acc_odr: OutputDataRate,
    gyro_odr: OutputDataRate,
}

impl<B: BusIo> Lsm6dsox<B> {
    /// Bind a component object to its bus
    ///
    /// Nothing is sent on the bus until [`register_bus_io`](Self::register_bus_io).
    pub fn new(bus: B) -> Self {
        Self {
            device: RegisterDevice::new(RegisterBus::new(bus)),
            is_initialized: false,
            acc_is_enabled: false,
            gyro_is_enabled: false,
            acc_odr: OutputDataRate::Off,
            gyro_odr: OutputDataRate::Off,
        }
    }

    /// Consume the component and return the bus
    pub fn release(self) -> B {
        self.device.interface.release()
    }

    /// Whether [`init`](Self::init) has run since the last de-init
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.is_initialized
    }

    /// Bring the bus up and apply bus-specific settings
    ///
    /// On 3-wire SPI the device is switched to 3-wire mode (`CTRL3_C.SIM`).
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::Bus`] if the bus cannot be initialized.
    pub fn register_bus_io(&mut self) -> DriverResult<()> {
        let bus = self.device.interface.bus_mut();
        bus.init().map_err(bus_error)?;

        if bus.bus_type() == BusType::Spi3Wires {
            self.device
                .ctrl_3_c()
                .modify(|w| {
                    w.set_sim(true);
                })
                .map_err(bus_error)?;
        }

        Ok(())
    }

    /// Read the `WHO_AM_I` register
    ///
    /// Should return 0x6C for a valid LSM6DSOX
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_who_am_i(&mut self) -> DriverResult<u8> {
        let reg = self.device.who_am_i().read().map_err(bus_error)?;
        Ok(reg.who_am_i())
    }

    /// Read and verify the `WHO_AM_I` register
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::InvalidDevice`] with the value read if it is not
    /// [`WHO_AM_I_VALUE`].
    pub fn verify_who_am_i(&mut self) -> DriverResult<()> {
        let who_am_i = self.read_who_am_i()?;
        if who_am_i != WHO_AM_I_VALUE {
            return Err(DriverError::InvalidDevice(who_am_i));
        }
        Ok(())
    }

    /// Initialize the device with default settings
    ///
    /// - I3C interface disabled
    /// - Register auto-increment and block data update on
    /// - FIFO in bypass mode
    /// - Both sensors powered down, ±2g and ±2000 dps, 104 Hz on next enable
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn init(&mut self) -> DriverResult<()> {
        self.device
            .ctrl_9_xl()
            .modify(|w| {
                w.set_i_3_c_disable(true);
            })
            .map_err(bus_error)?;
        self.device
            .i_3_c_bus_avb()
            .modify(|w| {
                w.set_i_3_c_bus_avb_sel(0);
            })
            .map_err(bus_error)?;

        self.device
            .ctrl_3_c()
            .modify(|w| {
                w.set_if_inc(true);
                w.set_bdu(true);
            })
            .map_err(bus_error)?;

        self.device
            .fifo_ctrl_4()
            .modify(|w| {
                w.set_fifo_mode(0);
            })
            .map_err(bus_error)?;

        self.acc_odr = DEFAULT_ODR;
        self.device
            .ctrl_1_xl()
            .modify(|w| {
                w.set_odr_xl(OutputDataRate::Off.bits());
                w.set_fs_xl(AccelFullScale::G2.bits());
            })
            .map_err(bus_error)?;

        self.gyro_odr = DEFAULT_ODR;
        self.write_gyro_full_scale(GyroFullScale::Dps2000)?;
        self.device
            .ctrl_2_g()
            .modify(|w| {
                w.set_odr_g(OutputDataRate::Off.bits());
            })
            .map_err(bus_error)?;

        self.acc_is_enabled = false;
        self.gyro_is_enabled = false;
        self.is_initialized = true;

        log::debug!("lsm6dsox: initialized");
        Ok(())
    }

    /// Power both sensors down
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn deinit(&mut self) -> DriverResult<()> {
        self.acc_disable()?;
        self.gyro_disable()?;

        self.acc_odr = OutputDataRate::Off;
        self.gyro_odr = OutputDataRate::Off;
        self.is_initialized = false;

        Ok(())
    }

    /// Capability record of the LSM6DSOX
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        Capabilities {
            acc: true,
            gyro: true,
            magneto: false,
            low_power: false,
            gyro_max_fs: 2000,
            acc_max_fs: 16,
            mag_max_fs: 0,
            gyro_max_odr: 6667.0,
            acc_max_odr: 6667.0,
            mag_max_odr: 0.0,
        }
    }

    // ==================== Accelerometer ====================

    /// Start the accelerometer at its stored rate
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::NotInitialized`] before [`init`](Self::init), or
    /// a bus error.
    pub fn acc_enable(&mut self) -> DriverResult<()> {
        if self.acc_is_enabled {
            return Ok(());
        }
        if !self.is_initialized {
            return Err(DriverError::NotInitialized);
        }

        self.write_acc_odr(self.acc_odr)?;
        self.acc_is_enabled = true;
        Ok(())
    }

    /// Power the accelerometer down, remembering its current rate
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn acc_disable(&mut self) -> DriverResult<()> {
        if !self.acc_is_enabled {
            return Ok(());
        }

        self.acc_odr = self.read_acc_odr()?;
        self.write_acc_odr(OutputDataRate::Off)?;
        self.acc_is_enabled = false;
        Ok(())
    }

    /// Current accelerometer rate in Hz (0.0 when powered down)
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails or the register holds a
    /// reserved code.
    pub fn acc_output_data_rate(&mut self) -> DriverResult<f32> {
        Ok(self.read_acc_odr()?.hz())
    }

    /// Set the accelerometer rate, rounding up to a supported rate
    ///
    /// While disabled the rate is only stored and applied on enable.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_acc_output_data_rate(&mut self, odr: f32) -> DriverResult<()> {
        let odr = OutputDataRate::at_least(odr);
        if self.acc_is_enabled {
            self.write_acc_odr(odr)
        } else {
            self.acc_odr = odr;
            Ok(())
        }
    }

    /// Current accelerometer full scale in g
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn acc_full_scale(&mut self) -> DriverResult<i32> {
        Ok(self.read_acc_full_scale()?.max_value())
    }

    /// Set the accelerometer full scale, rounding up to a supported range
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_acc_full_scale(&mut self, full_scale: i32) -> DriverResult<()> {
        let fs = AccelFullScale::at_least(full_scale);
        self.device
            .ctrl_1_xl()
            .modify(|w| {
                w.set_fs_xl(fs.bits());
            })
            .map_err(bus_error)
    }

    /// Accelerometer sensitivity in mg/LSB for the current full scale
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn acc_sensitivity(&mut self) -> DriverResult<f32> {
        Ok(self.read_acc_full_scale()?.sensitivity())
    }

    /// Read accelerometer data
    ///
    /// Returns raw 16-bit values for X, Y, Z axes.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn acc_axes_raw(&mut self) -> DriverResult<AxesRaw> {
        self.read_axes_raw(OUTX_L_A)
    }

    /// Read accelerometer data in mg
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn acc_axes(&mut self) -> DriverResult<Axes> {
        let raw = self.acc_axes_raw()?;
        let sensitivity = self.acc_sensitivity()?;
        Ok(raw.scale(sensitivity))
    }

    // ==================== Gyroscope ====================

    /// Start the gyroscope at its stored rate
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::NotInitialized`] before [`init`](Self::init), or
    /// a bus error.
    pub fn gyro_enable(&mut self) -> DriverResult<()> {
        if self.gyro_is_enabled {
            return Ok(());
        }
        if !self.is_initialized {
            return Err(DriverError::NotInitialized);
        }

        self.write_gyro_odr(self.gyro_odr)?;
        self.gyro_is_enabled = true;
        Ok(())
    }

    /// Power the gyroscope down, remembering its current rate
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn gyro_disable(&mut self) -> DriverResult<()> {
        if !self.gyro_is_enabled {
            return Ok(());
        }

        self.gyro_odr = self.read_gyro_odr()?;
        self.write_gyro_odr(OutputDataRate::Off)?;
        self.gyro_is_enabled = false;
        Ok(())
    }

    /// Current gyroscope rate in Hz (0.0 when powered down)
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails or the register holds a
    /// reserved code.
    pub fn gyro_output_data_rate(&mut self) -> DriverResult<f32> {
        Ok(self.read_gyro_odr()?.hz())
    }

    /// Set the gyroscope rate, rounding up to a supported rate
    ///
    /// While disabled the rate is only stored and applied on enable.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_gyro_output_data_rate(&mut self, odr: f32) -> DriverResult<()> {
        let odr = OutputDataRate::at_least(odr);
        if self.gyro_is_enabled {
            self.write_gyro_odr(odr)
        } else {
            self.gyro_odr = odr;
            Ok(())
        }
    }

    /// Current gyroscope full scale in dps
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn gyro_full_scale(&mut self) -> DriverResult<i32> {
        Ok(self.read_gyro_full_scale()?.max_value())
    }

    /// Set the gyroscope full scale, rounding up to a supported range
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_gyro_full_scale(&mut self, full_scale: i32) -> DriverResult<()> {
        self.write_gyro_full_scale(GyroFullScale::at_least(full_scale))
    }

    /// Gyroscope sensitivity in mdps/LSB for the current full scale
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn gyro_sensitivity(&mut self) -> DriverResult<f32> {
        Ok(self.read_gyro_full_scale()?.sensitivity())
    }

    /// Read gyroscope data
    ///
    /// Returns raw 16-bit values for X, Y, Z axes.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn gyro_axes_raw(&mut self) -> DriverResult<AxesRaw> {
        self.read_axes_raw(OUTX_L_G)
    }

    /// Read gyroscope data in mdps
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn gyro_axes(&mut self) -> DriverResult<Axes> {
        let raw = self.gyro_axes_raw()?;
        let sensitivity = self.gyro_sensitivity()?;
        Ok(raw.scale(sensitivity))
    }

    // ==================== Register helpers ====================

    fn read_axes_raw(&mut self, start: u8) -> DriverResult<AxesRaw> {
        // One 6-byte burst; BDU keeps the low and high halves consistent
        let mut buffer = [0u8; 6];
        self.device
            .interface
            .read_register(start, 48, &mut buffer)
            .map_err(bus_error)?;

        Ok(AxesRaw::from_le_bytes(buffer))
    }

    fn read_acc_odr(&mut self) -> DriverResult<OutputDataRate> {
        let reg = self.device.ctrl_1_xl().read().map_err(bus_error)?;
        OutputDataRate::from_bits(reg.odr_xl()).ok_or(DriverError::InvalidArgument)
    }

    fn write_acc_odr(&mut self, odr: OutputDataRate) -> DriverResult<()> {
        self.device
            .ctrl_1_xl()
            .modify(|w| {
                w.set_odr_xl(odr.bits());
            })
            .map_err(bus_error)
    }

    fn read_acc_full_scale(&mut self) -> DriverResult<AccelFullScale> {
        let reg = self.device.ctrl_1_xl().read().map_err(bus_error)?;
        Ok(AccelFullScale::from_bits(reg.fs_xl()))
    }

    fn read_gyro_odr(&mut self) -> DriverResult<OutputDataRate> {
        let reg = self.device.ctrl_2_g().read().map_err(bus_error)?;
        OutputDataRate::from_bits(reg.odr_g()).ok_or(DriverError::InvalidArgument)
    }

    fn write_gyro_odr(&mut self, odr: OutputDataRate) -> DriverResult<()> {
        self.device
            .ctrl_2_g()
            .modify(|w| {
                w.set_odr_g(odr.bits());
            })
            .map_err(bus_error)
    }

    fn read_gyro_full_scale(&mut self) -> DriverResult<GyroFullScale> {
        let reg = self.device.ctrl_2_g().read().map_err(bus_error)?;
        Ok(GyroFullScale::from_bits(reg.fs_125(), reg.fs_g()))
    }

    fn write_gyro_full_scale(&mut self, fs: GyroFullScale) -> DriverResult<()> {
        self.device
            .ctrl_2_g()
            .modify(|w| match fs.fs_g_bits() {
                Some(bits) => {
                    w.set_fs_125(false);
                    w.set_fs_g(bits);
                }
                None => {
                    w.set_fs_125(true);
                }
            })
            .map_err(bus_error)
    }
}

// ==================== Driver descriptors ====================

/// Lifecycle descriptor of the LSM6DSOX
#[derive(Debug, Clone, Copy, Default)]
pub struct Lsm6dsoxCommonDriver;

/// Accelerometer descriptor of the LSM6DSOX
#[derive(Debug, Clone, Copy, Default)]
pub struct Lsm6dsoxAccDriver;

/// Gyroscope descriptor of the LSM6DSOX
#[derive(Debug, Clone, Copy, Default)]
pub struct Lsm6dsoxGyroDriver;

/// Shared lifecycle descriptor
pub static LSM6DSOX_COMMON_DRIVER: Lsm6dsoxCommonDriver = Lsm6dsoxCommonDriver;
/// Shared accelerometer descriptor
pub static LSM6DSOX_ACC_DRIVER: Lsm6dsoxAccDriver = Lsm6dsoxAccDriver;
/// Shared gyroscope descriptor
pub static LSM6DSOX_GYRO_DRIVER: Lsm6dsoxGyroDriver = Lsm6dsoxGyroDriver;

impl<B: BusIo> CommonDriver<Lsm6dsox<B>> for Lsm6dsoxCommonDriver {
    fn init(&self, obj: &mut Lsm6dsox<B>) -> DriverResult<()> {
        obj.init()
    }

    fn deinit(&self, obj: &mut Lsm6dsox<B>) -> DriverResult<()> {
        obj.deinit()
    }

    fn read_id(&self, obj: &mut Lsm6dsox<B>) -> DriverResult<u8> {
        obj.read_who_am_i()
    }

    fn get_capabilities(&self, obj: &mut Lsm6dsox<B>) -> DriverResult<Capabilities> {
        Ok(Lsm6dsox::capabilities(obj))
    }
}

impl<B: BusIo> FunctionDriver<Lsm6dsox<B>> for Lsm6dsoxAccDriver {
    fn enable(&self, obj: &mut Lsm6dsox<B>) -> DriverResult<()> {
        obj.acc_enable()
    }

    fn disable(&self, obj: &mut Lsm6dsox<B>) -> DriverResult<()> {
        obj.acc_disable()
    }

    fn get_axes(&self, obj: &mut Lsm6dsox<B>) -> DriverResult<Axes> {
        obj.acc_axes()
    }

    fn get_axes_raw(&self, obj: &mut Lsm6dsox<B>) -> DriverResult<AxesRaw> {
        obj.acc_axes_raw()
    }

    fn get_sensitivity(&self, obj: &mut Lsm6dsox<B>) -> DriverResult<f32> {
        obj.acc_sensitivity()
    }

    fn get_output_data_rate(&self, obj: &mut Lsm6dsox<B>) -> DriverResult<f32> {
        obj.acc_output_data_rate()
    }

    fn set_output_data_rate(&self, obj: &mut Lsm6dsox<B>, odr: f32) -> DriverResult<()> {
        obj.set_acc_output_data_rate(odr)
    }

    fn get_full_scale(&self, obj: &mut Lsm6dsox<B>) -> DriverResult<i32> {
        obj.acc_full_scale()
    }

    fn set_full_scale(&self, obj: &mut Lsm6dsox<B>, full_scale: i32) -> DriverResult<()> {
        obj.set_acc_full_scale(full_scale)
    }
}

impl<B: BusIo> FunctionDriver<Lsm6dsox<B>> for Lsm6dsoxGyroDriver {
    fn enable(&self, obj: &mut Lsm6dsox<B>) -> DriverResult<()> {
        obj.gyro_enable()
    }

    fn disable(&self, obj: &mut Lsm6dsox<B>) -> DriverResult<()> {
        obj.gyro_disable()
    }

    fn get_axes(&self, obj: &mut Lsm6dsox<B>) -> DriverResult<Axes> {
        obj.gyro_axes()
    }

    fn get_axes_raw(&self, obj: &mut Lsm6dsox<B>) -> DriverResult<AxesRaw> {
        obj.gyro_axes_raw()
    }

    fn get_sensitivity(&self, obj: &mut Lsm6dsox<B>) -> DriverResult<f32> {
        obj.gyro_sensitivity()
    }

    fn get_output_data_rate(&self, obj: &mut Lsm6dsox<B>) -> DriverResult<f32> {
        obj.gyro_output_data_rate()
    }

    fn set_output_data_rate(&self, obj: &mut Lsm6dsox<B>, odr: f32) -> DriverResult<()> {
        obj.set_gyro_output_data_rate(odr)
    }

    fn get_full_scale(&self, obj: &mut Lsm6dsox<B>) -> DriverResult<i32> {
        obj.gyro_full_scale()
    }

    fn set_full_scale(&self, obj: &mut Lsm6dsox<B>, full_scale: i32) -> DriverResult<()> {
        obj.set_gyro_full_scale(full_scale)
    }
}

impl<B: BusIo + 'static> Component for Lsm6dsox<B> {
    type Bus = B;

    const ID: u8 = WHO_AM_I_VALUE;

    fn new(bus: B) -> Self {
        Self::new(bus)
    }

    fn release(self) -> B {
        Self::release(self)
    }

    fn register_bus_io(&mut self) -> DriverResult<()> {
        Self::register_bus_io(self)
    }

    fn read_id(&mut self) -> DriverResult<u8> {
        self.read_who_am_i()
    }

    fn capabilities(&mut self) -> DriverResult<Capabilities> {
        Ok(Self::capabilities(self))
    }

    fn common_driver() -> &'static dyn CommonDriver<Self> {
        &LSM6DSOX_COMMON_DRIVER
    }

    fn function_driver(function: Function) -> Option<&'static dyn FunctionDriver<Self>> {
        match function {
            Function::Gyro => Some(&LSM6DSOX_GYRO_DRIVER),
            Function::Accelero => Some(&LSM6DSOX_ACC_DRIVER),
            Function::Magneto => None,
        }
    }
}
