use anyhow::{Context, Result};
use console::{Emoji, style};
use std::path::PathBuf;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::dashboard::{Dashboard, Session};
use crate::server;

static BROWSER: Emoji<'_, '_> = Emoji("🌐 ", "");
static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK] ");

pub async fn run(host: Option<String>, port: Option<u16>, data: Option<PathBuf>) -> Result<()> {
    println!();
    println!("{}", style(" SenateGraph - Dashboard ").bold().reverse());
    println!();

    let config = Config::load_or_default()?;
    let store = super::open_store(&config, data);

    // Fail early on a missing or corrupt document; requests reload it anyway
    let document = store
        .document()
        .with_context(|| format!("Cannot serve {}", store.path().display()))?;
    println!(
        "{}Loaded {} legislators, {} topics, {} edges",
        CHECK,
        style(document.legislators().count()).green().bold(),
        style(document.topics().count()).green().bold(),
        style(document.edges().count()).green().bold()
    );

    let session = Session::new(&config.filter);
    let dashboard = Dashboard::new(store, config.layout.clone(), config.theme.clone());
    let app = server::create_router(dashboard, session);

    let host = host.unwrap_or(config.server.host);
    let port = port.unwrap_or(config.server.port);
    let listener = bind(&host, port).await?;
    let addr = listener.local_addr()?;

    tracing::info!("Dashboard listening on http://{}", addr);
    println!(
        "{}Dashboard running at {}",
        BROWSER,
        style(format!("http://{}", addr)).cyan().underlined()
    );
    println!();

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Bind the dashboard listener; `host` may be a hostname or an IPv4/IPv6 literal
async fn bind(host: &str, port: u16) -> Result<TcpListener> {
    TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {} port {}", host, port))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_accepts_hostname() {
        let listener = bind("localhost", 0).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }

    #[tokio::test]
    async fn test_bind_accepts_ipv4_literal() {
        let listener = bind("127.0.0.1", 0).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn test_bind_reports_unresolvable_host() {
        let err = bind("no such host", 0).await.unwrap_err();
        assert!(err.to_string().contains("no such host"));
    }
}
