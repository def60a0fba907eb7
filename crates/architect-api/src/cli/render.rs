//! Terminal rendering of the build dashboard.

use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::{Style, style};

use architect_core::presentation::{Accent, BuildView, StatTile};
use architect_types::build::{Build, Requirement};

fn accent_style(accent: Accent) -> Style {
    match accent {
        Accent::Red => Style::new().red(),
        Accent::Orange => Style::new().color256(208),
        Accent::Emerald => Style::new().green(),
        Accent::Blue => Style::new().blue(),
        Accent::Purple => Style::new().magenta(),
        Accent::Pink => Style::new().color256(205),
        Accent::Gold => Style::new().yellow(),
    }
}

fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Red => Color::Red,
        Accent::Orange => Color::DarkYellow,
        Accent::Emerald => Color::Green,
        Accent::Blue => Color::Blue,
        Accent::Purple => Color::Magenta,
        Accent::Pink => Color::DarkMagenta,
        Accent::Gold => Color::Yellow,
    }
}

/// Print the full dashboard for one build.
pub fn print_dashboard(build: &Build) {
    let view = BuildView::from_build(build);

    println!();
    println!(
        "  {} {}",
        accent_style(view.badge.accent()).bold().apply_to(&view.badge_label),
        style(&view.title).bold()
    );
    println!(
        "  {}",
        style(format!(
            "{} · {} · {} · {}",
            view.oath, view.attunement, view.race, view.weapon_type
        ))
        .dim()
    );
    if !view.murmur.is_empty() {
        println!("  {}  {}", style("Murmur:").bold(), view.murmur);
    }
    if let Some(image) = &build.image_url {
        println!("  {}  {}", style("Illustration:").bold(), style(image_summary(image.as_str())).dim());
    }

    section("Attributes");
    println!("{}", stat_table(&view.pre_shrine_stats, &view.post_shrine_stats));

    section("Investment");
    let investment: Vec<String> = view
        .investment
        .iter()
        .map(|tile| format!("{} {}", style(tile.label).bold(), tile.value))
        .collect();
    println!("  {}", investment.join("   "));

    section("Attunements");
    for (heading, rows) in [
        ("Pre-shrine", &view.pre_shrine_attunement),
        ("Post-shrine", &view.post_shrine_attunement),
    ] {
        let entries: Vec<String> = rows
            .iter()
            .map(|row| format!("{} {}", accent_style(row.accent).apply_to(&row.name), row.value))
            .collect();
        println!("  {:<12} {}", style(heading).bold(), entries.join(", "));
    }

    section("Talents");
    list("Pre-shrine", &build.pre_shrine_talents);
    list("Post-shrine", &build.post_shrine_talents);

    section("Progression");
    for marker in &view.progression {
        println!(
            "  {} {}",
            accent_style(marker.accent).bold().apply_to(&marker.heading),
            marker.action
        );
        if !marker.reason.is_empty() {
            println!("      {}", style(&marker.reason).dim());
        }
    }

    section("Mantras");
    bullets(&view.mantras);

    section("Requirements");
    println!("{}", requirement_table(&view.weapon_requirements, &view.oath_requirements));

    section("Bells");
    bullets(&view.recommended_bells);

    section("Boons & Flaws");
    list("Boons", &view.preferable_boons);
    list("Flaws", &view.preferable_flaws);

    section("Description");
    println!("  {}", view.description);

    section("Playstyle");
    println!("  {}", view.playstyle);

    section("Export");
    println!("  {}", style(&view.export_summary).cyan());
    println!();
}

/// Short description of an illustration. Data URIs are far too long to print.
fn image_summary(reference: &str) -> String {
    match reference.strip_prefix("data:") {
        Some(rest) => {
            let (mime, payload) = rest.split_once(";base64,").unwrap_or((rest, ""));
            format!("inline {mime}, {} KiB", payload.len() * 3 / 4 / 1024)
        }
        None => reference.to_string(),
    }
}

fn section(title: &str) {
    println!();
    println!("  {}", style(title).bold().underlined());
}

fn bullets(items: &[String]) {
    if items.is_empty() {
        println!("  {}", style("(none)").dim());
    }
    for item in items {
        println!("    {} {item}", style("•").dim());
    }
}

fn list(heading: &str, items: &[String]) {
    let joined = if items.is_empty() {
        style("(none)".to_string()).dim().to_string()
    } else {
        items.join(", ")
    };
    println!("  {:<12} {joined}", style(heading).bold());
}

fn stat_table(pre: &[StatTile; 6], post: &[StatTile; 6]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("")];
    header.extend(pre.iter().map(|tile| Cell::new(tile.abbreviation).fg(accent_color(tile.accent))));
    table.set_header(header);

    for (label, tiles) in [("Pre", pre), ("Post", post)] {
        let mut row = vec![Cell::new(label).fg(Color::White)];
        row.extend(tiles.iter().map(|tile| Cell::new(tile.value)));
        table.add_row(row);
    }
    table
}

fn requirement_table(weapon: &[Requirement], oath: &[Requirement]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Kind").fg(Color::White),
            Cell::new("Item").fg(Color::White),
            Cell::new("Requirement").fg(Color::White),
        ]);

    for (kind, requirements) in [("Weapon", weapon), ("Oath", oath)] {
        for requirement in requirements {
            table.add_row(vec![
                Cell::new(kind).fg(Color::DarkGrey),
                Cell::new(&requirement.item).fg(Color::Cyan),
                Cell::new(&requirement.stat_requirement),
            ]);
        }
    }
    table
}
