use rf_core::{NoHooks, honor_at_level};

pub fn run(level: u8, multiplier: f32) -> Result<(), String> {
    if !multiplier.is_finite() || multiplier < 0.0 {
        return Err(format!("invalid honor multiplier: {multiplier}"));
    }
    println!("{}", honor_at_level(level, multiplier, &NoHooks));
    Ok(())
}
