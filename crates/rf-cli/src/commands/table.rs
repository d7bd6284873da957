use comfy_table::{Cell, Color, ContentArrangement, Table};
use rf_core::{
    DifficultyColor, Killer, NoHooks, RateConfig, Victim, base_gain, color_code, gain, gray_level,
    zero_difference,
};

/// Levels above the character shown in the table.
const LEVELS_ABOVE: u8 = 5;

pub fn run(level: u8, tier: &str) -> Result<(), String> {
    let tier = super::parse_tier(tier)?;
    let gray = gray_level(level, &NoHooks);
    let killer = Killer::new(level);
    let rates = RateConfig::default();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Opponent", "Color", "Base XP", "Elite XP", "Dungeon elite XP"]);

    let lowest = gray.max(1);
    let highest = level.saturating_add(LEVELS_ABOVE);
    for mob_level in (lowest..=highest).rev() {
        let color = color_code(level, mob_level, &NoHooks);
        let elite = Victim::new(mob_level, tier).with_elite(true);
        let dungeon_elite = elite.clone().with_instance(true);

        table.add_row(vec![
            Cell::new(mob_level),
            Cell::new(color).fg(cell_color(color)),
            Cell::new(base_gain(level, mob_level, tier, &NoHooks)),
            Cell::new(gain(&killer, &elite, &rates, &NoHooks)),
            Cell::new(gain(&killer, &dungeon_elite, &rates, &NoHooks)),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  level {level}, tier {tier}: gray at {gray}, zero difference {}",
        zero_difference(level, &NoHooks)
    );

    Ok(())
}

fn cell_color(color: DifficultyColor) -> Color {
    match color {
        DifficultyColor::Red => Color::Red,
        DifficultyColor::Orange => Color::Rgb {
            r: 255,
            g: 128,
            b: 0,
        },
        DifficultyColor::Yellow => Color::Yellow,
        DifficultyColor::Green => Color::Green,
        DifficultyColor::Gray => Color::Grey,
    }
}
