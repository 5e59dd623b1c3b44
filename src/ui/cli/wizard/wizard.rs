use anyhow::Result;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use strum::{EnumMessage, IntoEnumIterator};

use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::{
    CsvParameters, RunConfig, SourceConfig, SourceKind, SyntheticParameters,
};

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

struct KindItem {
    kind: SourceKind,
    text: String,
}

impl Display for KindItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

fn kind_items() -> Vec<KindItem> {
    SourceKind::iter()
        .map(|kind| {
            let label = kind.get_message().unwrap_or_else(|| kind.into());
            let desc = kind.get_detailed_message().unwrap_or("");
            let text = if desc.is_empty() {
                label.to_string()
            } else {
                format!("{label}  {DIM_ITALIC}{desc}{RESET}")
            };
            KindItem { kind, text }
        })
        .collect()
}

/// Interactively assembles a [`RunConfig`].
pub fn run_wizard<D: PromptDriver>(driver: &D) -> Result<RunConfig> {
    let selected = inquire::Select::new("Choose a data source:", kind_items()).prompt()?;

    let source = match selected.kind {
        SourceKind::CsvFile => {
            let path = prompt_path_until_ok(
                driver,
                "Data file path",
                "Comma separated records, one per line, label last",
                "",
                &["data", "csv"],
            )?;
            SourceConfig::CsvFile(CsvParameters { path })
        }
        SourceKind::Synthetic => {
            let rows =
                driver.ask_u64("Rows", "Number of records to generate", 1000, Some(1), None)?;
            let seed = driver.ask_u64("Seed", "Generator seed", 1, None, None)?;
            SourceConfig::Synthetic(SyntheticParameters { rows, seed })
        }
    };

    Ok(RunConfig { source })
}

fn validate_path_str(input: &str, allowed_exts: &[&str]) -> Result<(), String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Path cannot be empty".into());
    }
    let p = Path::new(trimmed);

    if !p.exists() {
        return Err(format!("Path does not exist: {}", p.display()));
    }
    if !p.is_file() {
        return Err("Expected a file path, not a directory".into());
    }
    match p.extension().and_then(|e| e.to_str()) {
        Some(ext) if allowed_exts.iter().any(|e| e.eq_ignore_ascii_case(ext)) => Ok(()),
        _ => Err(format!("Expected a .{} file", allowed_exts.join(" / ."))),
    }
}

fn prompt_path_until_ok<D: PromptDriver>(
    driver: &D,
    title: &str,
    help: &str,
    default: &str,
    allowed_exts: &[&str],
) -> Result<PathBuf> {
    loop {
        let answer = driver.ask_string(title, help, default)?;
        match validate_path_str(&answer, allowed_exts) {
            Ok(()) => return Ok(PathBuf::from(answer.trim())),
            Err(msg) => {
                eprintln!("✗ {}", msg);
            }
        }
    }
}
