#[cfg(feature = "serde")]
const WWAN_POWER_STR: &str = r#"
{
        pad: "GPP_A12",
        dw0: "0x40000201",
        dw1: "0x00000000"
}
"#;

#[cfg(feature = "serde")]
const EARLY_FRAGMENT_STR: &str = r#"
[
        { pad: "GPP_B7", dw0: "0x40000800", dw1: "0x00000000" },
        { pad: "GPP_D1", dw0: 0x40000200, dw1: 0 }
]
"#;

#[cfg(feature = "serde")]
const MISSPELLED_STR: &str = r#"
{
        pad: "GPP_A12",
        dw0: "0x40000201",
        dw2: "0x00000000"
}
"#;

#[cfg(feature = "serde")]
#[test]
fn test_entry_from_hex_strings() {
    let entry: bsp_tables::PAD_CFG =
        serde_yaml::from_str(WWAN_POWER_STR).expect("configuration be valid JSON");
    assert_eq!(entry.pad_id().unwrap(), bsp_tables::GPP_A12);
    assert_eq!(entry.dw0.get(), 0x4000_0201);
    assert_eq!(entry.dw1.get(), 0x0000_0000);
    assert!(entry.is_output());
    assert!(entry.output_state());
}

#[cfg(feature = "serde")]
#[test]
fn test_entries_from_plain_integers() {
    let table: Vec<bsp_tables::PAD_CFG> =
        serde_yaml::from_str(EARLY_FRAGMENT_STR).expect("configuration be valid JSON");
    assert_eq!(table.len(), 2);
    let reference = bsp_tables::PAD_CFG::nf(
        bsp_tables::GPP_B7,
        bsp_tables::PadPull::None,
        bsp_tables::PadReset::Deep,
        bsp_tables::PadMode::Nf2,
    );
    assert_eq!(table[0].pad.get(), reference.pad.get());
    assert_eq!(table[0].dw0.get(), reference.dw0.get());
    assert_eq!(table[1].pad_id().unwrap(), bsp_tables::GPP_D1);
    assert_eq!(table[1].dw0.get(), 0x4000_0200);
}

#[cfg(feature = "serde")]
#[test]
fn test_entry_roundtrip() {
    let entry = bsp_tables::PAD_CFG::nc(bsp_tables::GPP_H13, bsp_tables::PadPull::Up20K);
    let text = serde_yaml::to_string(&entry).unwrap();
    assert!(text.contains("GPP_H13"));
    assert!(text.contains("0x40000300"));
    assert!(text.contains("0x00003000"));
    let back: bsp_tables::PAD_CFG = serde_yaml::from_str(&text).unwrap();
    assert_eq!(back.pad.get(), entry.pad.get());
    assert_eq!(back.dw0.get(), entry.dw0.get());
    assert_eq!(back.dw1.get(), entry.dw1.get());
}

#[cfg(feature = "serde")]
#[test]
fn test_pad_names_serialize_as_strings() {
    let text = serde_yaml::to_string(&bsp_tables::GPP_VGPIO_18).unwrap();
    assert!(text.contains("GPP_VGPIO_18"));
    let pad: bsp_tables::PadId =
        serde_yaml::from_str("\"GPD3\"").expect("configuration be valid JSON");
    assert_eq!(pad, bsp_tables::GPD3);
}

#[cfg(feature = "serde")]
#[test]
fn test_unknown_field() {
    match serde_yaml::from_str::<bsp_tables::PAD_CFG>(MISSPELLED_STR) {
        Ok(_) => {
            panic!("unexpected success");
        }
        Err(e) => {
            if e.to_string().contains("unknown field") {
                return;
            } else {
                panic!("unexpected error: {}", e.to_string());
            }
        }
    };
}

#[cfg(feature = "serde")]
#[test]
fn test_invalid_pad_name() {
    match serde_yaml::from_str::<bsp_tables::PadId>("\"GPP_Z5\"") {
        Ok(_) => {
            panic!("unexpected success");
        }
        Err(_) => {}
    };
}

#[cfg(feature = "serde")]
#[test]
fn test_invalid_word_string() {
    match serde_yaml::from_str::<bsp_tables::PAD_CFG>(
        "{ pad: \"GPP_A12\", dw0: \"0xnope\", dw1: 0 }",
    ) {
        Ok(_) => {
            panic!("unexpected success");
        }
        Err(_) => {}
    };
}
