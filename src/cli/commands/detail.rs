use anyhow::{Context, Result};
use console::{Emoji, style};
use std::path::PathBuf;

use crate::config::Config;
use crate::dashboard::detail::{self, Detail, TOPIC_GROUP, TapEvent};
use crate::graph::TopicId;

static TWEET: Emoji<'_, '_> = Emoji("🐦 ", "- ");

pub async fn run(
    node: Option<String>,
    topic_node: bool,
    edge: Option<Vec<String>>,
    data: Option<PathBuf>,
) -> Result<()> {
    let config = Config::load_or_default()?;
    let store = super::open_store(&config, data);

    let tap = match (node, edge) {
        (Some(id), _) => TapEvent::node(id, topic_node.then_some(TOPIC_GROUP)),
        (None, Some(pair)) => {
            let [source, target] = pair.as_slice() else {
                anyhow::bail!("--edge takes exactly two values: LEGISLATOR TOPIC");
            };
            let target: TopicId = target
                .parse()
                .with_context(|| format!("Invalid topic id '{}'", target))?;
            let document = store.document()?;
            let edge = document
                .edges()
                .find(|e| &e.source == source && e.target == target)
                .with_context(|| format!("No edge from {} to topic {}", source, target))?;
            TapEvent::Edge(edge.clone())
        }
        (None, None) => anyhow::bail!("Pass either --node or --edge"),
    };

    let detail = detail::render(&store, &tap)?;

    println!();
    for (i, line) in detail.lines().iter().enumerate() {
        if i == 0 {
            println!("  {}", style(line).bold());
        } else {
            println!("  {}", line);
        }
    }

    if let Detail::Stance(stance) = &detail {
        if !stance.previews.is_empty() {
            println!();
            for url in &stance.previews {
                println!("  {}{}", TWEET, style(url).cyan().underlined());
            }
        }
    }
    println!();

    Ok(())
}
