use anyhow::{Context, Result};
use ramo::classifiers::id3::{learn_tree, print_tree};
use ramo::ui::cli::drivers::InquireDriver;
use ramo::ui::cli::wizard::run_wizard;
use ramo::ui::types::{RunConfig, build_table};
use std::fs;

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("cannot read run configuration {path}"))?;
            serde_json::from_str::<RunConfig>(&raw)
                .with_context(|| format!("invalid run configuration {path}"))?
        }
        None => run_wizard(&InquireDriver)?,
    };

    let table = build_table(&config)?;
    let tree = learn_tree(&table);
    print_tree(&tree);
    Ok(())
}
