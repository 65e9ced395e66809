//! # Portfolio Dashboard — core
//!
//! ```text
//!  ┌─────────────┐  Vec<Bar>   ┌──────────────────────────────┐
//!  │ Market data │ ──────────▶ │ Dashboard (controller)       │
//!  │ (JSON feed) │   load()    │ ├─ market_data   📊          │
//!  └─────────────┘             │ ├─ portfolio  ── budget 🛡️   │
//!                              │ ├─ metrics    (derived)      │
//!  ┌─────────────┐  Intent     │ ├─ thresholds                │
//!  │  Renderer   │ ──────────▶ │ └─ notifications (cap 10) 🔔 │
//!  │ (charts/UI) │ ◀────────── │    broadcast_tx ── JSON      │
//!  └─────────────┘  events     └──────────────────────────────┘
//! ```

pub mod budget;
pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod events;
pub mod models;
pub mod notifications;
pub mod portfolio;
pub mod state;

pub use config::DashboardConfig;
pub use controller::{run_event_loop, Dashboard};
pub use error::DashboardError;
pub use events::{DashboardEvent, Intent};
