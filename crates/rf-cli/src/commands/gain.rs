use std::path::PathBuf;

use colored::Colorize;
use rf_core::{Killer, NoHooks, Victim, base_gain, color_code, gain};

/// Everything the `gain` subcommand needs to describe a kill.
pub struct GainArgs {
    pub level: u8,
    pub mob_level: u8,
    pub tier: String,
    pub elite: bool,
    pub instance: bool,
    pub kind: String,
    pub no_xp: bool,
    pub personal_rate: Option<f32>,
    pub premium: bool,
    pub rates: Option<PathBuf>,
}

pub fn run(args: &GainArgs) -> Result<(), String> {
    let tier = super::parse_tier(&args.tier)?;
    let kind = super::parse_kind(&args.kind)?;
    let rates = super::load_rates(args.rates.as_deref())?;

    let mut killer = Killer::new(args.level).with_premium(args.premium);
    if let Some(rate) = args.personal_rate {
        killer = killer.with_personal_rate(rate);
    }

    let victim = Victim::new(args.mob_level, tier)
        .with_kind(kind)
        .with_no_xp(args.no_xp)
        .with_elite(args.elite)
        .with_instance(args.instance);

    let color = color_code(args.level, args.mob_level, &NoHooks);
    let total = gain(&killer, &victim, &rates, &NoHooks);

    println!(
        "  {} level {} vs level {} ({}, tier {tier})",
        "Kill".bold(),
        args.level,
        args.mob_level,
        super::paint(color),
    );
    if victim.is_exempt() {
        println!("  {}", "opponent grants no experience".dimmed());
    } else {
        println!(
            "  base:    {}",
            base_gain(args.level, args.mob_level, tier, &NoHooks)
        );
        println!("  elite:   x{}", victim.elite_bonus());
        println!("  rate:    x{}", killer.kill_rate(&rates));
        println!("  premium: x{}", killer.premium_rate(&rates));
    }
    println!("  total:   {total} XP");

    Ok(())
}
