use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::cli::FilterArgs;
use crate::config::Config;
use crate::layout::compute_layout;

/// Print the layout the dashboard would apply, as JSON
pub async fn run(filter: FilterArgs, data: Option<PathBuf>) -> Result<()> {
    let config = Config::load_or_default()?;
    let store = super::open_store(&config, data);

    let elements = store.load(&filter.criteria())?;
    let layout = compute_layout(
        &elements,
        &filter.legislator_selection(),
        &filter.topic_selection(),
        &config.layout,
    )
    .context("Failed to compute layout")?;

    println!("{}", serde_json::to_string_pretty(&layout)?);

    Ok(())
}
