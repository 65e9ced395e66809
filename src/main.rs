//! # Portfolio Dashboard — headless host
//!
//! Loads the bar feed, opens the dashboard with the starter portfolio and
//! replays a short user session through the intent channel.  Every event the
//! renderer would receive is logged as JSON.
//!
//! ```text
//!  intents (mpsc) ──▶ run_event_loop ──▶ Dashboard ──▶ broadcast (JSON) ──▶ log
//! ```

use anyhow::Context;
use tokio::sync::{broadcast::error::RecvError, mpsc};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use portfolio_dashboard::{
    engine::MarketData,
    models::PositionInput,
    portfolio::Portfolio,
    run_event_loop, Dashboard, DashboardConfig, Intent,
};

/// Sample feed used when `MARKET_DATA_PATH` is not set.
const SAMPLE_MARKET_DATA: &str = include_str!("../data/market_data.json");

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // ── 1. Load .env ──────────────────────────────────────────────────────────
    dotenvy::dotenv().ok();

    // ── 2. Structured logging ─────────────────────────────────────────────────
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("portfolio_dashboard=debug".parse()?))
        .init();

    // ── 3. Config & market data ───────────────────────────────────────────────
    let config = DashboardConfig::from_env();
    info!(?config, "Configuration loaded");

    let market_data = match &config.market_data_path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read market data from {}", path.display()))?;
            MarketData::from_json(&text).context("Failed to parse market data file")?
        }
        None => {
            warn!("MARKET_DATA_PATH not set — using embedded sample data");
            MarketData::from_json(SAMPLE_MARKET_DATA).context("Embedded sample data is invalid")?
        }
    };

    // ── 4. Dashboard + renderer stand-in ──────────────────────────────────────
    let mut dashboard = Dashboard::new(&config, Portfolio::starter());
    let mut events = dashboard.subscribe();
    let renderer = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(json) => info!(target: "portfolio_dashboard::render", "{json}"),
                Err(RecvError::Lagged(skipped)) => warn!(skipped, "Renderer lagged"),
                Err(RecvError::Closed) => break,
            }
        }
    });

    dashboard.load(market_data);

    // ── 5. Replay a user session ──────────────────────────────────────────────
    let (tx, intents) = mpsc::channel(32);
    let session = vec![
        Intent::SelectSymbol { symbol: "SHOP".into() },
        Intent::AddPosition { input: PositionInput::new("AAPL", "10", "150") },
        Intent::AddPosition { input: PositionInput::new("aapl", "4", "150") },
        Intent::SetGainAlert { value: 5.0 },
        Intent::SetLossAlert { value: -2.0 },
        Intent::RemovePosition { index: 1 },
        Intent::RemovePosition { index: 10 },
    ];
    let driver = tokio::spawn(async move {
        for intent in session {
            if tx.send(intent).await.is_err() {
                break;
            }
        }
    });

    let dashboard = run_event_loop(dashboard, intents).await;
    driver.await?;

    // ── 6. Summary ────────────────────────────────────────────────────────────
    let state = dashboard.state();
    if let Some(metrics) = &state.metrics {
        info!(
            positions     = metrics.positions.len(),
            total_value   = %format!("{:.2}", metrics.total_value),
            total_cost    = %format!("{:.2}", metrics.total_cost),
            total_return  = %format!("{:+.2}%", metrics.total_gain_loss_percent),
            notifications = state.notifications.len(),
            "🏁 Session finished"
        );
    }

    drop(dashboard);
    renderer.await?;
    Ok(())
}
