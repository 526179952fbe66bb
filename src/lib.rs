#![cfg_attr(not(feature = "std"), no_std)]

mod baseboard;
mod padcfg;
mod pads;
#[cfg(feature = "serde")]
mod serializers;
mod svi;
mod types;
mod variant;

pub use baseboard::{
    EARLY_GPIO_TABLE, EC_IN_RW_PAD, FLAG_GPIOS, GPIO_DEVICE_NAME, GPIO_TABLE, MEM_CH_SEL_PAD,
    OVERRIDE_GPIO_TABLE, ROMSTAGE_GPIO_TABLE, WRITE_PROTECT_PAD,
};
pub use padcfg::{
    PadCfgDw0, PadCfgDw1, PadMode, PadPull, PadReset, PadTrigger, RxInvert, PAD_CFG,
    PAD_ENTRY_ALIGNMENT,
};
pub use pads::*;
pub use svi::{
    SviRevision, SVI2_DECODE_MICROVOLTS, SVI2_MAX_MICROVOLTS, SVI2_OFF_VID,
    SVI3_BASE_MICROVOLTS, SVI3_DECODE_MICROVOLTS,
};
pub use types::Error;
pub use types::PadFieldError;
pub use types::Result;
pub use variant::{
    find_pad, validate_table, with_overrides, Baseboard, BootPhase, FlagGpio, FlagPolarity,
    FlagRole, FlagSource, MergedTableIter, Variant,
};
