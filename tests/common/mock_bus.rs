//! Register-map bus mock for exercising the LSM6DSOX component

use motion_bsp::{BusIo, BusType};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Records operations performed on the mock bus
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Bus brought up
    Init,
    /// Bus shut down
    DeInit,
    /// Register read
    ReadRegister {
        /// Register address
        address: u8,
        /// Value that was returned
        value: u8,
    },
    /// Register write
    WriteRegister {
        /// Register address
        address: u8,
        /// Value that was written
        value: u8,
    },
}

/// Shared state for mock bus (uses interior mutability)
#[derive(Debug)]
struct MockState {
    /// Simulated register values
    registers: HashMap<u8, u8>,

    /// Operations log for verification
    operations: Vec<Operation>,

    bus_type: BusType,

    /// Failure injection flags
    fail_init: bool,
    fail_next_read: bool,
    fail_next_write: bool,
}

impl MockState {
    fn new() -> Self {
        let mut state = Self {
            registers: HashMap::new(),
            operations: Vec::new(),
            bus_type: BusType::I2c,
            fail_init: false,
            fail_next_read: false,
            fail_next_write: false,
        };

        // Power-on values of the registers the component touches
        state.registers.insert(0x0F, 0x6C); // WHO_AM_I
        state.registers.insert(0x12, 0x04); // CTRL3_C: IF_INC
        state.registers.insert(0x18, 0xE0); // CTRL9_XL

        state
    }

    fn set_axes(&mut self, start: u8, x: i16, y: i16, z: i16) {
        let bytes = [x.to_le_bytes(), y.to_le_bytes(), z.to_le_bytes()].concat();
        for (offset, byte) in bytes.into_iter().enumerate() {
            self.registers.insert(start + offset as u8, byte);
        }
    }
}

/// Mock error type
#[derive(Debug, Clone, PartialEq)]
pub enum MockError {
    /// Simulated communication error
    Communication,
}

/// Mock bus for testing
#[derive(Clone)]
pub struct MockBus {
    state: Rc<RefCell<MockState>>,
}

impl MockBus {
    /// Create a new mock bus with power-on register values
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(MockState::new())),
        }
    }

    /// Set a register value
    pub fn set_register(&self, address: u8, value: u8) {
        self.state.borrow_mut().registers.insert(address, value);
    }

    /// Get a register value
    pub fn get_register(&self, address: u8) -> u8 {
        self.state
            .borrow()
            .registers
            .get(&address)
            .copied()
            .unwrap_or(0)
    }

    /// Set WHO_AM_I register value
    pub fn set_who_am_i(&self, value: u8) {
        self.set_register(0x0F, value);
    }

    /// Set accelerometer output registers
    pub fn set_accel_data(&self, x: i16, y: i16, z: i16) {
        self.state.borrow_mut().set_axes(0x28, x, y, z);
    }

    /// Set gyroscope output registers
    pub fn set_gyro_data(&self, x: i16, y: i16, z: i16) {
        self.state.borrow_mut().set_axes(0x22, x, y, z);
    }

    /// Report a different bus flavour
    pub fn set_bus_type(&self, bus_type: BusType) {
        self.state.borrow_mut().bus_type = bus_type;
    }

    /// Make bus bring-up fail
    pub fn fail_init(&self, enable: bool) {
        self.state.borrow_mut().fail_init = enable;
    }

    /// Inject a read failure on the next read operation
    pub fn fail_next_read(&self) {
        self.state.borrow_mut().fail_next_read = true;
    }

    /// Inject a write failure on the next write operation
    pub fn fail_next_write(&self) {
        self.state.borrow_mut().fail_next_write = true;
    }

    /// Get the operations log
    pub fn operations(&self) -> Vec<Operation> {
        self.state.borrow().operations.clone()
    }

    /// Clear the operations log
    pub fn clear_operations(&self) {
        self.state.borrow_mut().operations.clear();
    }

    /// Count register writes
    pub fn write_count(&self) -> usize {
        self.state
            .borrow()
            .operations
            .iter()
            .filter(|op| matches!(op, Operation::WriteRegister { .. }))
            .count()
    }
}

impl BusIo for MockBus {
    type Error = MockError;

    fn bus_type(&self) -> BusType {
        self.state.borrow().bus_type
    }

    fn address(&self) -> u8 {
        0x6A
    }

    fn init(&mut self) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        if state.fail_init {
            return Err(MockError::Communication);
        }
        state.operations.push(Operation::Init);
        Ok(())
    }

    fn deinit(&mut self) -> Result<(), Self::Error> {
        self.state.borrow_mut().operations.push(Operation::DeInit);
        Ok(())
    }

    fn read_registers(&mut self, reg: u8, data: &mut [u8]) -> Result<(), Self::Error> {
        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;

        // Check for injected failure
        if state.fail_next_read {
            state.fail_next_read = false;
            return Err(MockError::Communication);
        }

        // Auto-increment across consecutive registers
        for (offset, byte) in data.iter_mut().enumerate() {
            let address = reg.wrapping_add(offset as u8);
            *byte = state.registers.get(&address).copied().unwrap_or(0);
            state.operations.push(Operation::ReadRegister {
                address,
                value: *byte,
            });
        }
        Ok(())
    }

    fn write_registers(&mut self, reg: u8, data: &[u8]) -> Result<(), Self::Error> {
        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;

        if state.fail_next_write {
            state.fail_next_write = false;
            return Err(MockError::Communication);
        }

        for (offset, value) in data.iter().copied().enumerate() {
            let address = reg.wrapping_add(offset as u8);
            state.registers.insert(address, value);
            state.operations.push(Operation::WriteRegister { address, value });
        }
        Ok(())
    }

    fn tick(&self) -> u32 {
        0
    }
}
