// Boot-phase table selection and the variant override seam.

use crate::baseboard;
use crate::padcfg::PAD_CFG;
use crate::pads::PadId;
use crate::types::{Error, Result};

/// Boot phases that program pads.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum BootPhase {
    Bootblock,
    Romstage,
    Ramstage,
}

/// Which firmware flag a GPIO reports.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FlagRole {
    Recovery,
    WriteProtect,
}

/// Electrical polarity of a flag GPIO.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FlagPolarity {
    ActiveHigh,
    ActiveLow,
}

/// Where a flag is sampled.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FlagSource {
    /// Reported by the embedded controller; no physical pad.
    Virtual,
    Pad(PadId),
}

/// One firmware-flag GPIO exported to the OS.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct FlagGpio {
    pub role: FlagRole,
    pub polarity: FlagPolarity,
    pub source: FlagSource,
    /// ACPI name of the controller device the flag is read through.
    pub device: &'static str,
}

/// Board variant hooks. Defaults serve the baseboard tables; a variant
/// overrides only the accessors it differs in.
pub trait Variant {
    /// Full table programmed in ramstage, before the override merge.
    fn gpio_table(&self) -> &'static [PAD_CFG] {
        baseboard::GPIO_TABLE
    }

    /// Table programmed in bootblock.
    fn early_gpio_table(&self) -> &'static [PAD_CFG] {
        baseboard::EARLY_GPIO_TABLE
    }

    /// Extra pads programmed in romstage.
    fn romstage_gpio_table(&self) -> &'static [PAD_CFG] {
        baseboard::ROMSTAGE_GPIO_TABLE
    }

    /// Override entries merged over `gpio_table` in ramstage.
    fn override_gpio_table(&self) -> &'static [PAD_CFG] {
        baseboard::OVERRIDE_GPIO_TABLE
    }

    /// Firmware-flag GPIOs this variant reports.
    fn flag_gpios(&self) -> &'static [FlagGpio] {
        baseboard::FLAG_GPIOS
    }

    /// The table a phase programs, before the override merge.
    fn table_for(&self, phase: BootPhase) -> &'static [PAD_CFG] {
        match phase {
            BootPhase::Bootblock => self.early_gpio_table(),
            BootPhase::Romstage => self.romstage_gpio_table(),
            BootPhase::Ramstage => self.gpio_table(),
        }
    }
}

/// The canonical variant, every hook at its default.
#[derive(Debug)]
pub struct Baseboard;

impl Variant for Baseboard {}

/// Iterator over a base table with override entries substituted in
/// place. See [`with_overrides`].
#[derive(Clone)]
pub struct MergedTableIter<'a> {
    base: core::slice::Iter<'a, PAD_CFG>,
    overrides: &'a [PAD_CFG],
}

impl<'a> Iterator for MergedTableIter<'a> {
    type Item = &'a PAD_CFG;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.base.next()?;
        let merged = self
            .overrides
            .iter()
            .find(|o| o.pad.get() == entry.pad.get())
            .unwrap_or(entry);
        Some(merged)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.base.size_hint()
    }
}

/// The effective configuration: each base entry is replaced by the
/// override entry for the same pad, if one exists. Override entries
/// whose pad is absent from the base table are dropped, which is how
/// the pin loader's merge pass treats them. With duplicate override
/// pads the first one wins.
pub fn with_overrides<'a>(base: &'a [PAD_CFG], overrides: &'a [PAD_CFG]) -> MergedTableIter<'a> {
    MergedTableIter { base: base.iter(), overrides }
}

/// Looks up `pad` in a table. The first entry wins if a pad is listed
/// twice.
pub fn find_pad<'a>(table: &'a [PAD_CFG], pad: PadId) -> Result<&'a PAD_CFG> {
    table
        .iter()
        .find(|entry| entry.pad.get() == pad.raw_value())
        .ok_or(Error::PadNotFound)
}

/// Checks a table the way the pin loader consumes it: every pad and
/// every pull code must decode, and no pad may be configured twice.
pub fn validate_table(table: &[PAD_CFG]) -> Result<()> {
    for (position, entry) in table.iter().enumerate() {
        let pad = entry.pad_id()?;
        entry.pull()?;
        for earlier in &table[..position] {
            if earlier.pad.get() == entry.pad.get() {
                return Err(Error::DuplicatePad(pad));
            }
        }
    }
    Ok(())
}
