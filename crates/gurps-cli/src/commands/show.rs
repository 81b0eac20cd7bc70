use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use crate::session::Session;

pub fn run(file: &Path, index: Option<usize>) -> Result<(), String> {
    let session =
        Session::load(file).map_err(|e| format!("failed to load {}: {e}", file.display()))?;

    if let Some(index) = index {
        let entry = index
            .checked_sub(1)
            .and_then(|i| session.entries().get(i))
            .ok_or_else(|| {
                format!(
                    "no character at position {index} ({} in file)",
                    session.len()
                )
            })?;
        println!("{}", entry.text);
        return Ok(());
    }

    if session.is_empty() {
        println!("  No characters found.");
        return Ok(());
    }

    println!("  {} {}", "Session".bold(), file.display());
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Name", "Attributes"]);
    for (i, entry) in session.entries().iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), entry.name.clone(), attribute_line(&entry.text)]);
    }
    println!("{table}");
    println!();
    println!("  {} characters", session.len());
    Ok(())
}

/// `ST 12 DX 10 IQ 9 HT 11` pulled from the sheet's stat lines.
fn attribute_line(text: &str) -> String {
    text.lines()
        .filter_map(|line| {
            let (label, rest) = line.split_once(": ")?;
            let value = rest.split_whitespace().next()?;
            ["ST", "DX", "IQ", "HT"]
                .contains(&label)
                .then(|| format!("{label} {value}"))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_line_reads_stat_pairs() {
        let text = "Арго (М)\n\tnotes\nST: 12 \t\t FP: 12\nDX: 10 \t\t Will: 9\nIQ: 9 \t\t Per: 9\nHT: 11 \t\t HP: 12";
        assert_eq!(attribute_line(text), "ST 12 DX 10 IQ 9 HT 11");
    }

    #[test]
    fn attribute_line_without_stats() {
        assert_eq!(attribute_line("free text"), "");
    }
}
