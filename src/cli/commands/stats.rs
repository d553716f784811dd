use anyhow::{Context, Result};
use console::{Emoji, style};
use std::path::PathBuf;

use crate::config::Config;
use crate::graph::analytics;

static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
static TROPHY: Emoji<'_, '_> = Emoji("🏆 ", "");
static GRAPH: Emoji<'_, '_> = Emoji("🔗 ", "");
static DATABASE: Emoji<'_, '_> = Emoji("💾 ", "");
static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");

pub async fn run(top: usize, data: Option<PathBuf>) -> Result<()> {
    println!();
    println!(
        "{}",
        style(" SenateGraph - Graph Statistics ").bold().reverse()
    );
    println!();

    let config = Config::load_or_default()?;
    let store = super::open_store(&config, data);

    let spinner = super::spinner(DATABASE, "Loading graph document...")?;
    let document = store
        .document()
        .with_context(|| format!("Failed to load {}", store.path().display()))?;
    spinner.set_message("Computing analytics...");
    let stats = analytics::compute_stats(&document, top);
    spinner.finish_and_clear();

    println!("{}Graph Overview", CHART);
    println!();
    println!(
        "  {} Legislators:          {}",
        style("•").cyan(),
        style(stats.legislator_count).green().bold()
    );
    println!(
        "  {} Topics:               {}",
        style("•").cyan(),
        style(stats.topic_count).green().bold()
    );
    println!(
        "  {} Edges:                {}",
        style("•").cyan(),
        style(stats.edge_count).green().bold()
    );
    println!(
        "  {} Tweets:               {}",
        style("•").cyan(),
        style(stats.total_tweets).green().bold()
    );
    println!(
        "  {} Connected components: {}",
        style("•").cyan(),
        style(stats.connected_components).green().bold()
    );

    if stats.dangling_edges > 0 {
        println!();
        println!(
            "{}{} edges reference a node that is not in the document",
            WARN,
            style(stats.dangling_edges).yellow().bold()
        );
    }

    if !stats.top_legislators.is_empty() {
        println!();
        println!("{}Legislators Covering Most Topics", TROPHY);
        println!();
        for (i, (label, degree)) in stats.top_legislators.iter().enumerate() {
            let bar = "█".repeat((*degree).min(30));
            println!(
                "  {:>2}. {:<30} {} ({})",
                i + 1,
                style(label).cyan().bold(),
                style(&bar).magenta(),
                style(degree).dim(),
            );
        }
    }

    if !stats.top_topics.is_empty() {
        println!();
        println!("{}Most Discussed Topics", GRAPH);
        println!();
        for (i, (label, degree)) in stats.top_topics.iter().enumerate() {
            let bar = "█".repeat((*degree).min(30));
            println!(
                "  {:>2}. {:<30} {} ({})",
                i + 1,
                style(label).cyan().bold(),
                style(&bar).blue(),
                style(degree).dim(),
            );
        }
    }

    println!();

    Ok(())
}
