// Pad identities for the host bridge GPIO communities.

use crate::types::{Error, PadFieldError, Result};
use num_traits::FromPrimitive;

/// Pad groups in pad-numbering order. `Gpd` pads stay powered in deep
/// sleep; `Vgpio` pads are virtual wires with no package ball.
#[repr(u8)]
#[derive(Debug, PartialEq, num_derive::FromPrimitive, Copy, Clone)]
pub enum Group {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    H = 6,
    R = 7,
    S = 8,
    Gpd = 9,
    Vgpio = 10,
}

impl Group {
    /// Number of pads in the group.
    pub const fn pad_count(self) -> u16 {
        match self {
            Group::A | Group::B | Group::C | Group::E | Group::F | Group::H => 24,
            Group::D => 20,
            Group::R | Group::S => 8,
            Group::Gpd => 12,
            Group::Vgpio => 40,
        }
    }
}

/// Identity of one pad: the group plus the index within the group.
/// The packed numeric form is what pad entries store.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
pub struct PadId(u16);

impl PadId {
    /// Panics when the index is outside the group. In const position
    /// (the board tables) that is a compile error.
    pub const fn new(group: Group, index: u16) -> Self {
        assert!(index < group.pad_count());
        Self(((group as u16) << 8) | index)
    }

    pub const fn try_new(group: Group, index: u16) -> Result<Self> {
        if index < group.pad_count() {
            Ok(Self(((group as u16) << 8) | index))
        } else {
            Err(Error::PadField(
                PadFieldError::IndexOutOfRange,
                "PadId::index",
            ))
        }
    }

    /// Reinstates an id from the numeric form a pad entry stores.
    pub fn from_raw(value: u16) -> Result<Self> {
        let group = Group::from_u8((value >> 8) as u8).ok_or(Error::PadField(
            PadFieldError::UnknownGroup,
            "PAD_CFG::pad",
        ))?;
        Self::try_new(group, value & 0xff)
    }

    pub const fn raw_value(self) -> u16 {
        self.0
    }

    pub fn group(self) -> Group {
        // The constructors checked the group byte.
        Group::from_u8((self.0 >> 8) as u8).unwrap()
    }

    pub const fn index(self) -> u16 {
        self.0 & 0xff
    }
}

impl core::fmt::Display for PadId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.group() {
            Group::Gpd => write!(f, "GPD{}", self.index()),
            Group::Vgpio => write!(f, "GPP_VGPIO_{}", self.index()),
            group => write!(f, "GPP_{:?}{}", group, self.index()),
        }
    }
}

impl core::str::FromStr for PadId {
    type Err = Error;

    /// Parses schematic-style pad names ("GPP_A6", "GPD3",
    /// "GPP_VGPIO_18").
    fn from_str(value: &str) -> Result<Self> {
        fn index_of(digits: &str) -> Result<u16> {
            if digits.is_empty() || !digits.bytes().all(|c| c.is_ascii_digit()) {
                return Err(Error::PadName);
            }
            digits.parse::<u16>().map_err(|_| Error::PadName)
        }
        if let Some(digits) = value.strip_prefix("GPP_VGPIO_") {
            return PadId::try_new(Group::Vgpio, index_of(digits)?);
        }
        if let Some(digits) = value.strip_prefix("GPD") {
            return PadId::try_new(Group::Gpd, index_of(digits)?);
        }
        if let Some(name) = value.strip_prefix("GPP_") {
            let group = match name.as_bytes().first() {
                Some(b'A') => Group::A,
                Some(b'B') => Group::B,
                Some(b'C') => Group::C,
                Some(b'D') => Group::D,
                Some(b'E') => Group::E,
                Some(b'F') => Group::F,
                Some(b'H') => Group::H,
                Some(b'R') => Group::R,
                Some(b'S') => Group::S,
                _ => return Err(Error::PadName),
            };
            return PadId::try_new(group, index_of(&name[1..])?);
        }
        Err(Error::PadName)
    }
}

macro_rules! pad_consts {
    ($group:ident as $prefix:ident: $($index:literal)+) => {
        paste::paste!{
            $(
                pub const [<$prefix $index>]: PadId = PadId::new(Group::$group, $index);
            )+
        }
    };
}

pad_consts!(A as GPP_A: 0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23);
pad_consts!(B as GPP_B: 0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23);
pad_consts!(C as GPP_C: 0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23);
pad_consts!(D as GPP_D: 0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19);
pad_consts!(E as GPP_E: 0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23);
pad_consts!(F as GPP_F: 0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23);
pad_consts!(H as GPP_H: 0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23);
pad_consts!(R as GPP_R: 0 1 2 3 4 5 6 7);
pad_consts!(S as GPP_S: 0 1 2 3 4 5 6 7);
pad_consts!(Gpd as GPD: 0 1 2 3 4 5 6 7 8 9 10 11);
// Only the virtual wires the platform routes get names; see the CNVi
// notes next to the board table.
pad_consts!(Vgpio as GPP_VGPIO_: 6 7 8 9 18 19 20 21);
