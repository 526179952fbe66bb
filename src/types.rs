
use crate::pads::PadId;

#[derive(Debug, PartialEq)]
#[non_exhaustive]
pub enum PadFieldError {
    UnknownGroup,
    IndexOutOfRange,
    UnknownPull,
}

#[derive(Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    PadField(PadFieldError, &'static str), // error detail, field name
    PadName,
    PadNotFound,
    DuplicatePad(PadId),
}

pub type Result<Q> = core::result::Result<Q, Error>;
