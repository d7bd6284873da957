use rf_core::{NoHooks, group_rate};

pub fn run(count: u32, raid: bool) -> Result<(), String> {
    println!("{}", group_rate(count, raid, &NoHooks));
    Ok(())
}
