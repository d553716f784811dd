use anyhow::Result;
use console::{Emoji, style};
use std::path::PathBuf;

use crate::cli::{ExportFormat, FilterArgs};
use crate::config::Config;

static DATABASE: Emoji<'_, '_> = Emoji("💾 ", "");
static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK] ");
static FILE: Emoji<'_, '_> = Emoji("📁 ", "");

pub async fn run(
    format: ExportFormat,
    output: PathBuf,
    filter: FilterArgs,
    data: Option<PathBuf>,
) -> Result<()> {
    println!();
    println!("{}", style(" SenateGraph - Export ").bold().reverse());
    println!();

    let config = Config::load_or_default()?;
    let store = super::open_store(&config, data);

    let spinner = super::spinner(DATABASE, "Loading graph document...")?;
    let elements = store.load(&filter.criteria())?;
    spinner.finish_and_clear();

    let edge_count = elements.iter().filter(|e| e.is_edge()).count();
    println!(
        "{}Selected {} nodes, {} edges",
        CHECK,
        style(elements.len() - edge_count).green().bold(),
        style(edge_count).green().bold()
    );

    print!("{}Exporting to {}... ", FILE, style(format).cyan());

    let written = match format {
        ExportFormat::Json => {
            crate::export::export_json(&elements, &output)?;
            vec![output]
        }
        ExportFormat::Csv => {
            let nodes_path = output.with_extension("nodes.csv");
            let edges_path = output.with_extension("edges.csv");
            crate::export::export_csv(&elements, &nodes_path, &edges_path)?;
            vec![nodes_path, edges_path]
        }
        ExportFormat::Graphml => {
            crate::export::export_graphml(&elements, &output)?;
            vec![output]
        }
    };

    println!("{}", style("done").green());
    println!();
    for path in &written {
        println!("  {} {}", style("→").dim(), style(path.display()).cyan().underlined());
    }
    println!();

    Ok(())
}
