// Pad-configuration entries in the form the pin loader consumes.

use crate::pads::PadId;
use crate::types::{Error, PadFieldError, Result};
use byteorder::LittleEndian;
use core::mem::size_of;
use modular_bitfield::prelude::*;
use static_assertions::const_assert;
use zerocopy::{AsBytes, FromBytes, Unaligned, U16, U32};

/// Pad mode: plain GPIO or one of the seven native functions.
#[derive(Debug, PartialEq, Clone, Copy, BitfieldSpecifier)]
#[bits = 3]
pub enum PadMode {
    Gpio = 0,
    Nf1 = 1,
    Nf2 = 2,
    Nf3 = 3,
    Nf4 = 4,
    Nf5 = 5,
    Nf6 = 6,
    Nf7 = 7,
}

/// Reset domain that returns the pad to its default configuration.
#[derive(Debug, PartialEq, Clone, Copy, BitfieldSpecifier)]
#[bits = 2]
pub enum PadReset {
    PwrOk = 0,
    Deep = 1,
    PltRst = 2,
    RsmRst = 3,
}

/// Interrupt trigger sensitivity.
#[derive(Debug, PartialEq, Clone, Copy, BitfieldSpecifier)]
#[bits = 2]
pub enum PadTrigger {
    Level = 0,
    EdgeSingle = 1,
    Off = 2,
    EdgeBoth = 3,
}

/// Termination select. The code points are sparse; decode is fallible.
#[derive(Debug, PartialEq, Clone, Copy, BitfieldSpecifier)]
#[bits = 4]
pub enum PadPull {
    None = 0x0,
    Dn5K = 0x2,
    Dn20K = 0x4,
    Up1K = 0x9,
    Up5K = 0xA,
    Up2K = 0xB,
    Up20K = 0xC,
    Up667 = 0xD,
    Native = 0xF,
}

/// RX polarity argument of the interrupt-capable builders.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RxInvert {
    None,
    Invert,
}

/// Decoded view of the first configuration word.
#[bitfield(bits = 32)]
#[repr(u32)]
#[derive(Clone, Copy)]
pub struct PadCfgDw0 {
    pub tx_state: bool,
    pub rx_state: bool, // read-only to software
    #[skip]
    __: B6,
    pub tx_disable: bool,
    pub rx_disable: bool,
    pub mode: PadMode,
    #[skip]
    __: B4,
    pub route_nmi: bool,
    pub route_smi: bool,
    pub route_sci: bool,
    pub route_ioapic: bool,
    #[skip]
    __: B2,
    pub rx_invert: bool,
    #[skip]
    __: B1,
    pub trigger: PadTrigger,
    #[skip]
    __: B3,
    pub reset: PadReset,
}

/// Decoded view of the second configuration word.
#[bitfield(bits = 32)]
#[repr(u32)]
#[derive(Clone, Copy)]
pub struct PadCfgDw1 {
    #[skip]
    __: B4, // interrupt select, low half
    pub gpio_driver: bool, // host ownership; not a hardware bit
    #[skip]
    __: B3, // interrupt select, high half
    #[skip]
    __: B2, // termination strength for native pads
    pub pull: PadPull,
    #[skip]
    __: B11, // IO-standby state and termination; never set by these tables
    pub tol_1v8: bool,
    #[skip]
    __: B6,
}

const DW0_TX_STATE: u32 = 1 << 0;
const DW0_TX_DISABLE: u32 = 1 << 8;
const DW0_RX_DISABLE: u32 = 1 << 9;
const DW0_MODE_SHIFT: u32 = 10;
const DW0_ROUTE_SCI: u32 = 1 << 19;
const DW0_ROUTE_IOAPIC: u32 = 1 << 20;
const DW0_RX_INVERT: u32 = 1 << 23;
const DW0_TRIG_SHIFT: u32 = 25;
const DW0_RESET_SHIFT: u32 = 30;
const DW1_GPIO_DRIVER: u32 = 1 << 4;
const DW1_PULL_SHIFT: u32 = 10;

const fn mode_bits(mode: PadMode) -> u32 {
    (mode as u32) << DW0_MODE_SHIFT
}
const fn reset_bits(reset: PadReset) -> u32 {
    (reset as u32) << DW0_RESET_SHIFT
}
const fn trigger_bits(trigger: PadTrigger) -> u32 {
    (trigger as u32) << DW0_TRIG_SHIFT
}
const fn invert_bits(invert: RxInvert) -> u32 {
    match invert {
        RxInvert::None => 0,
        RxInvert::Invert => DW0_RX_INVERT,
    }
}
const fn pull_bits(pull: PadPull) -> u32 {
    (pull as u32) << DW1_PULL_SHIFT
}

/// One pad table entry: the pad identity and the two configuration
/// words, in the order the loader programs them.
#[derive(FromBytes, AsBytes, Unaligned, Debug, Clone, Copy)]
#[repr(C, packed)]
#[allow(non_camel_case_types)]
pub struct PAD_CFG {
    pub pad: U16<LittleEndian>,
    reserved: U16<LittleEndian>, // 0
    pub dw0: U32<LittleEndian>,
    pub dw1: U32<LittleEndian>,
}

pub const PAD_ENTRY_ALIGNMENT: usize = 4;

const_assert!(size_of::<PAD_CFG>() == 12);
const_assert!(size_of::<PAD_CFG>() % PAD_ENTRY_ALIGNMENT == 0);

impl PAD_CFG {
    /// Builds an entry from already-encoded words.
    pub const fn from_raw_parts(pad: PadId, dw0: u32, dw1: u32) -> Self {
        Self {
            pad: U16::from_bytes(pad.raw_value().to_le_bytes()),
            reserved: U16::from_bytes([0; 2]),
            dw0: U32::from_bytes(dw0.to_le_bytes()),
            dw1: U32::from_bytes(dw1.to_le_bytes()),
        }
    }

    /// No-connect: GPIO mode, both buffers disabled, deep reset. Strap
    /// pads keep their strap value this way.
    pub const fn nc(pad: PadId, pull: PadPull) -> Self {
        Self::from_raw_parts(
            pad,
            mode_bits(PadMode::Gpio)
                | reset_bits(PadReset::Deep)
                | DW0_TX_DISABLE
                | DW0_RX_DISABLE,
            pull_bits(pull),
        )
    }

    /// Input: TX buffer disabled.
    pub const fn gpi(pad: PadId, pull: PadPull, reset: PadReset) -> Self {
        Self::from_raw_parts(
            pad,
            mode_bits(PadMode::Gpio) | reset_bits(reset) | DW0_TX_DISABLE,
            pull_bits(pull),
        )
    }

    /// Output driving the given initial level; RX buffer disabled, no
    /// termination.
    pub const fn gpo(pad: PadId, value: u32, reset: PadReset) -> Self {
        let tx_state = if value != 0 { DW0_TX_STATE } else { 0 };
        Self::from_raw_parts(
            pad,
            mode_bits(PadMode::Gpio) | reset_bits(reset) | DW0_RX_DISABLE | tx_state,
            pull_bits(PadPull::None),
        )
    }

    /// Native function.
    pub const fn nf(pad: PadId, pull: PadPull, reset: PadReset, mode: PadMode) -> Self {
        Self::from_raw_parts(pad, reset_bits(reset) | mode_bits(mode), pull_bits(pull))
    }

    /// Interrupt input routed to the IOAPIC.
    pub const fn gpi_apic(
        pad: PadId,
        pull: PadPull,
        reset: PadReset,
        trigger: PadTrigger,
        invert: RxInvert,
    ) -> Self {
        Self::from_raw_parts(
            pad,
            mode_bits(PadMode::Gpio)
                | reset_bits(reset)
                | trigger_bits(trigger)
                | DW0_ROUTE_IOAPIC
                | invert_bits(invert)
                | DW0_TX_DISABLE,
            pull_bits(pull),
        )
    }

    /// Interrupt input owned by the host GPIO driver.
    pub const fn gpi_int(pad: PadId, pull: PadPull, reset: PadReset, trigger: PadTrigger) -> Self {
        Self::from_raw_parts(
            pad,
            mode_bits(PadMode::Gpio) | reset_bits(reset) | trigger_bits(trigger) | DW0_TX_DISABLE,
            pull_bits(pull) | DW1_GPIO_DRIVER,
        )
    }

    /// Interrupt input dual-routed to IOAPIC and SCI so it can wake the
    /// platform.
    pub const fn gpi_irq_wake(
        pad: PadId,
        pull: PadPull,
        reset: PadReset,
        trigger: PadTrigger,
        invert: RxInvert,
    ) -> Self {
        Self::from_raw_parts(
            pad,
            mode_bits(PadMode::Gpio)
                | reset_bits(reset)
                | trigger_bits(trigger)
                | DW0_ROUTE_IOAPIC
                | DW0_ROUTE_SCI
                | invert_bits(invert)
                | DW0_TX_DISABLE,
            pull_bits(pull),
        )
    }

    /// Plain input owned by the host GPIO driver.
    pub const fn gpi_gpio_driver(pad: PadId, pull: PadPull, reset: PadReset) -> Self {
        Self::from_raw_parts(
            pad,
            mode_bits(PadMode::Gpio) | reset_bits(reset) | DW0_TX_DISABLE,
            pull_bits(pull) | DW1_GPIO_DRIVER,
        )
    }

    pub fn pad_id(&self) -> Result<PadId> {
        PadId::from_raw(self.pad.get())
    }

    pub fn dw0_view(&self) -> PadCfgDw0 {
        PadCfgDw0::from(self.dw0.get())
    }

    pub fn dw1_view(&self) -> PadCfgDw1 {
        PadCfgDw1::from(self.dw1.get())
    }

    pub fn mode(&self) -> PadMode {
        self.dw0_view().mode()
    }

    pub fn reset(&self) -> PadReset {
        self.dw0_view().reset()
    }

    pub fn trigger(&self) -> PadTrigger {
        self.dw0_view().trigger()
    }

    pub fn pull(&self) -> Result<PadPull> {
        self.dw1_view()
            .pull_or_err()
            .map_err(|_| Error::PadField(PadFieldError::UnknownPull, "PAD_CFG::dw1"))
    }

    /// Whether the loader hands this pad to the host GPIO driver
    /// instead of ACPI.
    pub fn gpio_driver(&self) -> bool {
        self.dw1_view().gpio_driver()
    }

    pub fn routed_to_ioapic(&self) -> bool {
        self.dw0_view().route_ioapic()
    }

    pub fn is_output(&self) -> bool {
        let dw0 = self.dw0_view();
        dw0.mode() == PadMode::Gpio && !dw0.tx_disable()
    }

    /// Initial TX level of an output entry.
    pub fn output_state(&self) -> bool {
        self.dw0_view().tx_state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memoffset::offset_of;

    #[test]
    fn test_struct_sizes() {
        assert!(size_of::<PAD_CFG>() == 12);
        assert!(offset_of!(PAD_CFG, pad) == 0);
        assert!(offset_of!(PAD_CFG, reserved) == 2);
        assert!(offset_of!(PAD_CFG, dw0) == 4);
        assert!(offset_of!(PAD_CFG, dw1) == 8);
    }
}
