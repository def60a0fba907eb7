//! `architect presets`.

use anyhow::Result;
use comfy_table::{Cell, Color, Table, presets};

use architect_core::session::PRESETS;

pub fn list_presets(json: bool) -> Result<()> {
    if json {
        let entries: Vec<_> = PRESETS
            .iter()
            .enumerate()
            .map(|(i, prompt)| serde_json::json!({ "number": i + 1, "prompt": prompt }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("#").fg(Color::White),
        Cell::new("Prompt").fg(Color::White),
    ]);
    for (i, prompt) in PRESETS.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1).fg(Color::DarkGrey),
            Cell::new(prompt).fg(Color::Cyan),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!("  Use one with: architect generate --preset N");
    println!();
    Ok(())
}
