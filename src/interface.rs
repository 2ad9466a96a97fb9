//! Bus I/O contract and implementations
//!
//! A motion component talks to its bus only through [`BusIo`]. The board
//! provides [`I2cBus`] over any `embedded-hal` I2C peripheral. [`RegisterBus`]
//! adapts a [`BusIo`] to the `device-driver` register interface used by the
//! generated register maps.

use crate::config::BusConfig;
use crate::I2C_ADDRESS_SA0_LOW;

/// Bus flavour a component is wired to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusType {
    /// I2C
    I2c,
    /// 4-wire SPI
    Spi4Wires,
    /// 3-wire SPI
    Spi3Wires,
}

/// Register-level bus access bound to one component
pub trait BusIo {
    /// Bus error type
    type Error: core::fmt::Debug;

    /// Bus flavour
    fn bus_type(&self) -> BusType;

    /// Device address on the bus (7-bit, I2C only)
    fn address(&self) -> u8;

    /// Bring the bus up before first use
    ///
    /// # Errors
    /// Returns the bus error if the peripheral cannot be initialized.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Release the bus after the component is de-initialized
    ///
    /// Carried for components that shut their bus down; the LSM6DSOX leaves
    /// the bus up so a later probe can reuse it.
    ///
    /// # Errors
    /// Returns the bus error if the peripheral cannot be shut down.
    fn deinit(&mut self) -> Result<(), Self::Error>;

    /// Read consecutive registers starting at `reg`
    ///
    /// # Errors
    /// Returns the bus error on a failed transfer.
    fn read_registers(&mut self, reg: u8, data: &mut [u8]) -> Result<(), Self::Error>;

    /// Write consecutive registers starting at `reg`
    ///
    /// # Errors
    /// Returns the bus error on a failed transfer.
    fn write_registers(&mut self, reg: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Board millisecond tick
    ///
    /// Time base for components that need delays or timeouts. The LSM6DSOX
    /// register sequence has none, so it never reads the tick.
    fn tick(&self) -> u32;
}

fn no_tick() -> u32 {
    0
}

/// I2C bus for a motion component
pub struct I2cBus<I2C> {
    i2c: I2C,
    address: u8,
    tick: fn() -> u32,
}

impl<I2C> I2cBus<I2C> {
    /// Create a new I2C bus with the default address (0x6A, SA0 pin LOW)
    ///
    /// # Example
    /// ```ignore
    /// let bus = I2cBus::default(i2c).with_tick(board_tick_ms);
    /// ```
    pub const fn default(i2c: I2C) -> Self {
        Self::new(i2c, I2C_ADDRESS_SA0_LOW)
    }

    /// Create a new I2C bus with the alternative address (0x6B, SA0 pin HIGH)
    pub const fn alternative(i2c: I2C) -> Self {
        Self::new(i2c, crate::I2C_ADDRESS_SA0_HIGH)
    }

    /// Create a new I2C bus with a custom device address
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            tick: no_tick,
        }
    }

    /// Create an I2C bus from board configuration
    ///
    /// Only the address is taken from `config`; the bus type is always I2C.
    pub const fn from_config(i2c: I2C, config: BusConfig) -> Self {
        Self::new(i2c, config.address)
    }

    /// Attach the board millisecond tick
    #[must_use]
    pub fn with_tick(mut self, tick: fn() -> u32) -> Self {
        self.tick = tick;
        self
    }

    /// Consume the bus and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> BusIo for I2cBus<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
    E: core::fmt::Debug,
{
    type Error = E;

    fn bus_type(&self) -> BusType {
        BusType::I2c
    }

    fn address(&self) -> u8 {
        self.address
    }

    fn init(&mut self) -> Result<(), Self::Error> {
        // The HAL peripheral is configured by the board before it is handed over
        Ok(())
    }

    fn deinit(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn read_registers(&mut self, reg: u8, data: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.write_read(self.address, &[reg], data)
    }

    fn write_registers(&mut self, reg: u8, data: &[u8]) -> Result<(), Self::Error> {
        let mut buffer = [0u8; 33]; // Max: 1 address + 32 data bytes
        buffer[0] = reg;
        let len = data.len().min(32);
        buffer[1..=len].copy_from_slice(&data[..len]);

        self.i2c.write(self.address, &buffer[..=len])
    }

    fn tick(&self) -> u32 {
        (self.tick)()
    }
}

/// `device-driver` register interface over a [`BusIo`]
#[derive(Debug)]
pub struct RegisterBus<B> {
    bus: B,
}

impl<B> RegisterBus<B> {
    /// Wrap a bus
    pub const fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Borrow the underlying bus
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Mutably borrow the underlying bus
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Consume the wrapper and return the bus
    pub fn release(self) -> B {
        self.bus
    }
}

#[cfg(feature = "lsm6dsox")]
impl<B: BusIo> device_driver::RegisterInterface for RegisterBus<B> {
    type Error = B::Error;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in read_data.len()
        self.bus.read_registers(address, read_data)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in write_data.len()
        self.bus.write_registers(address, write_data)
    }
}
