//! Output formatting utilities for the CLI.

use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};
use serde::Serialize;

/// Result of a command, renderable for humans or as JSON
pub trait CommandOutput: Serialize {
    /// Plain-text rendering
    fn to_human(&self) -> String;
    /// JSON rendering
    fn to_json(&self) -> serde_json::Value;
}

/// Print `result` to stdout in the selected mode
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

/// Two-column table with a bold header row
pub fn key_value_table<K, V>(headers: (&str, &str), rows: impl IntoIterator<Item = (K, V)>) -> Table
where
    K: ToString,
    V: ToString,
{
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new(headers.0).add_attribute(Attribute::Bold),
        Cell::new(headers.1).add_attribute(Attribute::Bold),
    ]);

    for (key, value) in rows {
        table.add_row(vec![Cell::new(key.to_string()), Cell::new(value.to_string())]);
    }

    table
}
