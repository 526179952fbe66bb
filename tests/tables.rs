// Audit of the shipped board tables.

use bsp_tables::{
    find_pad, validate_table, with_overrides, Baseboard, PadMode, PadPull, PadReset, Variant,
    EARLY_GPIO_TABLE, EC_IN_RW_PAD, GPIO_TABLE, MEM_CH_SEL_PAD, OVERRIDE_GPIO_TABLE,
    ROMSTAGE_GPIO_TABLE, WRITE_PROTECT_PAD,
};
use bsp_tables::{
    GPD7, GPP_A0, GPP_A1, GPP_A10, GPP_A2, GPP_A3, GPP_A4, GPP_A9, GPP_B14, GPP_B18, GPP_B4,
    GPP_C2, GPP_C5, GPP_D1, GPP_D12, GPP_E0, GPP_E16, GPP_E6, GPP_F10, GPP_F7, GPP_H0, GPP_H1,
    GPP_H2, GPP_VGPIO_18, GPP_VGPIO_19, GPP_VGPIO_20, GPP_VGPIO_21, GPP_VGPIO_6, GPP_VGPIO_7,
    GPP_VGPIO_8, GPP_VGPIO_9,
};

#[test]
fn test_tables_validate() {
    validate_table(GPIO_TABLE).unwrap();
    validate_table(EARLY_GPIO_TABLE).unwrap();
    validate_table(ROMSTAGE_GPIO_TABLE).unwrap();
    validate_table(OVERRIDE_GPIO_TABLE).unwrap();
}

#[test]
fn test_table_sizes() {
    assert_eq!(GPIO_TABLE.len(), 177);
    assert_eq!(EARLY_GPIO_TABLE.len(), 13);
    assert!(ROMSTAGE_GPIO_TABLE.is_empty());
    assert!(OVERRIDE_GPIO_TABLE.is_empty());
}

#[test]
fn test_every_early_pad_is_reprogrammed_later() {
    for entry in EARLY_GPIO_TABLE {
        let pad = entry.pad_id().unwrap();
        assert!(find_pad(GPIO_TABLE, pad).is_ok(), "pad {} missing", pad);
    }
}

#[test]
fn test_reset_lines_release_in_ramstage() {
    // Fingerprint reset, WWAN reset and SSD PERST are asserted from
    // bootblock on and deasserted only in ramstage.
    for pad in [GPP_D1, GPP_E16, GPP_B4] {
        let early = find_pad(EARLY_GPIO_TABLE, pad).unwrap();
        assert!(early.is_output(), "{} must be driven early", pad);
        assert!(!early.output_state(), "{} must be low early", pad);
        let late = find_pad(GPIO_TABLE, pad).unwrap();
        assert!(late.is_output(), "{} must be driven late", pad);
        assert!(late.output_state(), "{} must be high late", pad);
    }
}

#[test]
fn test_wwan_perst_deasserts_after_wwan_reset() {
    let reset_position = GPIO_TABLE
        .iter()
        .position(|entry| entry.pad.get() == GPP_E16.raw_value())
        .unwrap();
    let perst_position = GPIO_TABLE
        .iter()
        .position(|entry| entry.pad.get() == GPP_E0.raw_value())
        .unwrap();
    assert!(reset_position < perst_position);
    let perst = &GPIO_TABLE[perst_position];
    assert!(perst.output_state());
    // Programmed during power-down rather than tied to platform reset.
    assert_eq!(perst.reset(), PadReset::Deep);
}

#[test]
fn test_write_protect_is_host_owned_in_every_phase() {
    for table in [EARLY_GPIO_TABLE, GPIO_TABLE] {
        let entry = find_pad(table, WRITE_PROTECT_PAD).unwrap();
        assert!(entry.gpio_driver());
        assert!(!entry.is_output());
    }
}

#[test]
fn test_board_sense_inputs_stay_inputs() {
    for pad in [EC_IN_RW_PAD, MEM_CH_SEL_PAD] {
        let entry = find_pad(GPIO_TABLE, pad).unwrap();
        assert!(!entry.is_output());
        assert_eq!(entry.pull().unwrap(), PadPull::None);
    }
    // The memory strap is sampled before raminit, so bootblock must
    // program it.
    assert!(find_pad(EARLY_GPIO_TABLE, MEM_CH_SEL_PAD).is_ok());
}

#[test]
fn test_strap_pads_stay_unconfigured() {
    let straps = [
        GPP_B14, GPP_B18, GPP_C2, GPP_C5, GPP_D12, GPP_E6, GPP_F7, GPP_F10, GPP_H0, GPP_H1,
        GPP_H2, GPD7,
    ];
    for pad in straps {
        let entry = find_pad(GPIO_TABLE, pad).unwrap();
        let dw0 = entry.dw0_view();
        assert_eq!(entry.mode(), PadMode::Gpio);
        assert!(dw0.tx_disable(), "{} must not drive its strap", pad);
        assert!(dw0.rx_disable(), "{} must not listen", pad);
    }
}

#[test]
fn test_espi_pads_are_left_alone() {
    for pad in [GPP_A0, GPP_A1, GPP_A2, GPP_A3, GPP_A4, GPP_A9, GPP_A10] {
        assert!(find_pad(GPIO_TABLE, pad).is_err());
        assert!(find_pad(EARLY_GPIO_TABLE, pad).is_err());
    }
}

#[test]
fn test_virtual_wires_are_parked() {
    let wires = [
        GPP_VGPIO_6, GPP_VGPIO_7, GPP_VGPIO_8, GPP_VGPIO_9, GPP_VGPIO_18, GPP_VGPIO_19,
        GPP_VGPIO_20, GPP_VGPIO_21,
    ];
    for pad in wires {
        let entry = find_pad(GPIO_TABLE, pad).unwrap();
        let dw0 = entry.dw0_view();
        assert!(dw0.tx_disable() && dw0.rx_disable());
    }
}

#[test]
fn test_override_merge_covers_the_base_table() {
    let variant = Baseboard;
    let merged = with_overrides(variant.gpio_table(), variant.override_gpio_table());
    assert_eq!(merged.count(), GPIO_TABLE.len());
}
