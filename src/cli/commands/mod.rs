pub mod detail;
pub mod export;
pub mod init;
pub mod layout;
pub mod options;
pub mod serve;
pub mod stats;

use anyhow::Result;
use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::Config;
use crate::graph::GraphStore;

/// Store for the `--data` override if given, otherwise the configured path
pub fn open_store(config: &Config, data: Option<PathBuf>) -> GraphStore {
    GraphStore::new(data.unwrap_or_else(|| config.data_path.clone()))
}

pub fn spinner(icon: Emoji<'_, '_>, message: &'static str) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner().template(&format!("{}{{spinner:.green}} {{msg}}", icon))?,
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(message);
    Ok(spinner)
}
