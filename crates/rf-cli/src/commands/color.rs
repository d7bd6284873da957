use rf_core::{NoHooks, color_code};

pub fn run(level: u8, mob_level: u8) -> Result<(), String> {
    let color = color_code(level, mob_level, &NoHooks);
    println!("{}", super::paint(color));
    Ok(())
}
