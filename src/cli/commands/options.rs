use anyhow::Result;
use console::style;
use std::path::PathBuf;

use crate::config::Config;

pub async fn run(topics: bool, data: Option<PathBuf>) -> Result<()> {
    let config = Config::load_or_default()?;
    let store = super::open_store(&config, data);

    let rows: Vec<(String, String)> = if topics {
        store
            .topic_options()?
            .into_iter()
            .map(|o| (o.value.to_string(), o.label))
            .collect()
    } else {
        store
            .legislator_options()?
            .into_iter()
            .map(|o| (o.value, o.label))
            .collect()
    };

    if rows.is_empty() {
        println!("{}", style("No options found.").yellow());
        return Ok(());
    }

    for (value, label) in &rows {
        println!("{:<20} {}", style(value).cyan(), label);
    }

    Ok(())
}
