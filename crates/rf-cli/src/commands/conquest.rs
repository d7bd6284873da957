use colored::Colorize;
use rf_core::{NoHooks, bg_conquest_cap, conquest_cap};

pub fn run(rating: u32) -> Result<(), String> {
    println!("  {}", format!("Rating {rating}").bold());
    println!("  arena:        {}", conquest_cap(rating, &NoHooks));
    println!("  battleground: {}", bg_conquest_cap(rating, &NoHooks));
    Ok(())
}
