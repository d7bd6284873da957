use rf_core::{NoHooks, base_gain};

pub fn run(level: u8, mob_level: u8, tier: &str) -> Result<(), String> {
    let tier = super::parse_tier(tier)?;
    println!("{}", base_gain(level, mob_level, tier, &NoHooks));
    Ok(())
}
