// Serial VID decode, per the processor vendor's serial voltage
// interface specifications.

/// Base voltage on top of which third-generation VID codes count.
pub const SVI3_BASE_MICROVOLTS: u32 = 245_000;
/// Voltage step per VID code, third-generation interface.
pub const SVI3_DECODE_MICROVOLTS: u32 = 5_000;

/// Highest encodable voltage, second-generation interface; codes count
/// down from here.
pub const SVI2_MAX_MICROVOLTS: u32 = 1_550_000;
/// Voltage step per VID code, second-generation interface.
pub const SVI2_DECODE_MICROVOLTS: u32 = 6_250;
/// First of the second-generation codes that mean voltage off.
pub const SVI2_OFF_VID: u16 = 0xF8;

/// Serial VID Interface revision spoken by the voltage regulator.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SviRevision {
    Svi2,
    Svi3,
}

impl SviRevision {
    /// Decodes a VID code to microvolts. Codes that mean voltage off
    /// decode to 0.
    pub const fn microvolts_from_vid(self, vid: u16) -> u32 {
        match self {
            SviRevision::Svi3 => {
                if vid == 0x00 {
                    0
                } else {
                    SVI3_BASE_MICROVOLTS + SVI3_DECODE_MICROVOLTS * vid as u32
                }
            }
            SviRevision::Svi2 => {
                if vid >= SVI2_OFF_VID {
                    0
                } else {
                    SVI2_MAX_MICROVOLTS - SVI2_DECODE_MICROVOLTS * vid as u32
                }
            }
        }
    }
}
