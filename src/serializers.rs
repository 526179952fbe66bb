// Serde behavior for the table types. Serialization goes through a
// proxy struct so the text form stays independent of the packed
// layout: pads appear under their names and the register words as hex
// strings. Deserialization accepts the words as hex strings or plain
// integers.

use crate::padcfg::PAD_CFG;
use crate::pads::PadId;
#[cfg(feature = "schemars")]
use schemars::JsonSchema;
use serde::de::Deserialize;
use serde::ser::Serialize;

impl serde::Serialize for PadId {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::de::Deserialize<'de> for PadId {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse()
            .map_err(|_| serde::de::Error::custom("unknown pad name"))
    }
}

#[cfg(feature = "schemars")]
impl schemars::JsonSchema for PadId {
    fn schema_name() -> String {
        "PadId".to_string()
    }
    fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        String::json_schema(gen)
    }
}

fn hex_word<S>(value: &u32, serializer: S) -> core::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&format!("{:#010x}", value))
}

fn parse_word<'de, D>(deserializer: D) -> core::result::Result<u32, D::Error>
where
    D: serde::de::Deserializer<'de>,
{
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }
    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => parse_int::parse::<u32>(&text)
            .map_err(|_| serde::de::Error::custom("expected a 32-bit word")),
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(deny_unknown_fields)]
#[allow(non_camel_case_types)]
pub struct SerdePAD_CFG {
    pub pad: PadId,
    #[serde(serialize_with = "hex_word", deserialize_with = "parse_word")]
    pub dw0: u32,
    #[serde(serialize_with = "hex_word", deserialize_with = "parse_word")]
    pub dw1: u32,
}

impl<'de> serde::de::Deserialize<'de> for PAD_CFG {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        let config = SerdePAD_CFG::deserialize(deserializer)?;
        Ok(PAD_CFG::from_raw_parts(config.pad, config.dw0, config.dw1))
    }
}

impl serde::Serialize for PAD_CFG {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        SerdePAD_CFG {
            pad: self
                .pad_id()
                .map_err(|_| serde::ser::Error::custom("pad unknown"))?,
            dw0: self.dw0.get(),
            dw1: self.dw1.get(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "schemars")]
impl schemars::JsonSchema for PAD_CFG {
    fn schema_name() -> String {
        SerdePAD_CFG::schema_name()
    }
    fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        SerdePAD_CFG::json_schema(gen)
    }
}
