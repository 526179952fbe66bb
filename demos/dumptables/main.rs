//! Dumps the per-phase board tables in the YAML form the board tooling
//! consumes. Doubles as a check that every shipped entry serializes:
//! serialization fails for an entry whose pad id does not decode.

use bsp_tables::{Baseboard, BootPhase, Variant};

fn main() {
    let variant = Baseboard;
    for phase in [
        BootPhase::Bootblock,
        BootPhase::Romstage,
        BootPhase::Ramstage,
    ] {
        println!("# {:?}", phase);
        println!("{}", serde_yaml::to_string(&variant.table_for(phase)).unwrap());
    }
}
