//! Register definitions for the LSM6DSOX
//!
//! Only the control registers the motion dispatch layer needs are mapped.
//! Output data (`OUTX_L_G`..`OUTZ_H_A`) is read as raw 6-byte blocks through
//! the register interface with auto-increment enabled.

/// Gyroscope output block start (`OUTX_L_G`)
pub const OUTX_L_G: u8 = 0x22;

/// Accelerometer output block start (`OUTX_L_A`)
pub const OUTX_L_A: u8 = 0x28;

device_driver::create_device!(
    device_name: Lsm6dsox,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = LE;
        }

        /// FIFO_CTRL4 - FIFO mode and batching (0x0A)
        register FifoCtrl4 {
            const ADDRESS = 0x0A;
            const SIZE_BITS = 8;

            /// FIFO mode (0 = bypass)
            fifo_mode: uint = 0..3,
            reserved_3: uint = 3..4,
            /// Temperature batch rate
            odr_t_batch: uint = 4..6,
            /// Timestamp decimation
            dec_ts_batch: uint = 6..8,
        },

        /// WHO_AM_I - Device ID Register (0x0F)
        /// Expected value: 0x6C
        register WhoAmI {
            const ADDRESS = 0x0F;
            const SIZE_BITS = 8;

            /// Device ID (should read 0x6C)
            who_am_i: uint = 0..8,
        },

        /// CTRL1_XL - Accelerometer control (0x10)
        register Ctrl1Xl {
            const ADDRESS = 0x10;
            const SIZE_BITS = 8;

            reserved_0: uint = 0..1,
            /// Second-stage digital filter select
            lpf2_xl_en: bool = 1,
            /// Full scale (00 = 2g, 01 = 16g, 10 = 4g, 11 = 8g)
            fs_xl: uint = 2..4,
            /// Output data rate code
            odr_xl: uint = 4..8,
        },

        /// CTRL2_G - Gyroscope control (0x11)
        register Ctrl2G {
            const ADDRESS = 0x11;
            const SIZE_BITS = 8;

            reserved_0: uint = 0..1,
            /// ±125 dps range select (overrides fs_g)
            fs_125: bool = 1,
            /// Full scale (00 = 250, 01 = 500, 10 = 1000, 11 = 2000 dps)
            fs_g: uint = 2..4,
            /// Output data rate code
            odr_g: uint = 4..8,
        },

        /// CTRL3_C - Common control (0x12)
        register Ctrl3C {
            const ADDRESS = 0x12;
            const SIZE_BITS = 8;

            /// Software reset
            sw_reset: bool = 0,
            reserved_1: uint = 1..2,
            /// Register address auto-increment on multi-byte access
            if_inc: bool = 2,
            /// SPI 3-wire mode
            sim: bool = 3,
            /// Interrupt pads open drain
            pp_od: bool = 4,
            /// Interrupt active low
            h_lactive: bool = 5,
            /// Block data update
            bdu: bool = 6,
            /// Reboot memory content
            boot: bool = 7,
        },

        /// CTRL9_XL - Accelerometer control 9 (0x18)
        register Ctrl9Xl {
            const ADDRESS = 0x18;
            const SIZE_BITS = 8;

            reserved_0: uint = 0..1,
            /// Disable MIPI I3C interface
            i3c_disable: bool = 1,
            /// DEN data ready LSB
            den_lh: bool = 2,
            /// DEN stored in accelerometer LSB
            den_xl_en: bool = 3,
            /// DEN stored in gyroscope LSB
            den_xl_g: bool = 4,
            /// DEN on Z axis
            den_z: bool = 5,
            /// DEN on Y axis
            den_y: bool = 6,
            /// DEN on X axis
            den_x: bool = 7,
        },

        /// I3C_BUS_AVB - I3C bus available time (0x62)
        register I3cBusAvb {
            const ADDRESS = 0x62;
            const SIZE_BITS = 8;

            /// Disable INT1 pull-down
            pd_dis_int1: bool = 0,
            reserved_1: uint = 1..3,
            /// Bus available time selection
            i3c_bus_avb_sel: uint = 3..5,
            reserved_5: uint = 5..8,
        },
    }
);
