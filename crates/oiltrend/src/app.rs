//! Application entry point and dispatch.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use oiltrend_core::schema::{Field, DATE_COLUMN};
use oiltrend_core::Dataset;
use oiltrend_store::{export_csv, CsvStore};
use oiltrend_tui::App;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        clap_complete::generate(shell, &mut cmd, "oiltrend", &mut std::io::stdout());
        return Ok(());
    }

    // A missing file is an empty dataset; anything else is fatal here
    // rather than silently starting over an unreadable file.
    let store = CsvStore::new(&config.data_file);
    let dataset = store
        .load()
        .with_context(|| format!("failed to load data file {}", config.data_file.display()))?;

    if let Some(path) = &config.export {
        return export_to(path, &dataset);
    }

    if config.print {
        print_table(&dataset);
        return Ok(());
    }

    App::new(store, dataset).run()?;
    Ok(())
}

fn export_to(path: &Path, dataset: &Dataset) -> Result<()> {
    let bytes = export_csv(dataset).context("failed to serialize export")?;
    std::fs::write(path, bytes)
        .with_context(|| format!("failed to write export to {}", path.display()))?;
    println!(
        "{} {} rows to {}",
        style("Exported").green().bold(),
        dataset.len(),
        path.display()
    );
    Ok(())
}

fn print_table(dataset: &Dataset) {
    if dataset.is_empty() {
        println!("{}", style("No data recorded yet.").yellow());
        return;
    }

    let mut header = format!("{DATE_COLUMN:<12}");
    for field in Field::ALL {
        header.push_str(&format!(" {:>20}", field.name()));
    }
    println!("{}", style(header).bold());

    for record in dataset.records() {
        let mut row = format!("{:<12}", record.date);
        for value in record.values() {
            row.push_str(&format!(" {value:>20.2}"));
        }
        println!("{row}");
    }

    println!("{}", style(format!("{} records", dataset.len())).dim());
}
