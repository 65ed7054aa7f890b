//! Synology Storage Monitor
//!
//! A read-only disk and volume health client for Synology NAS appliances running DSM.
//!
//! # Overview
//!
//! The monitor logs in to the DSM HTTP management API, discovers which API paths
//! and versions the appliance exposes, queries disk and volume status, and renders
//! capacities in human-readable decimal units.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐    HTTP(S) GET      ┌──────────────────────────┐
//! │  Synology   │ ◄────────────────►  │      SynologyClient      │
//! │    DSM      │  /webapi/*.cgi      │  ┌────────┐ ┌─────────┐  │
//! └─────────────┘   JSON envelopes    │  │Session │ │ Catalog │  │
//!                                     │  └────────┘ └─────────┘  │
//!                                     │  ┌────────────────────┐  │     text     ┌──────────┐
//!                                     │  │  Storage queries   │  │ ───────────► │  stdout  │
//!                                     │  └────────────────────┘  │              └──────────┘
//!                                     └──────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`synology`] - DSM API client: transport, session, discovery, storage queries
//! - [`units`] - Capacity formatting (`Mo` / `Go` / `To`)
//! - [`monitor`] - One-shot login → query → logout orchestration
//! - [`report`] - Console rendering
//! - [`config`] - Configuration management
//! - [`error`] - Error types
//!
//! # Quick Start
//!
//! ```no_run
//! use syno_storage_monitor::{config::Config, monitor, report};
//! use syno_storage_monitor::synology::{Session, SynologyClient};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config/Default.toml")?;
//!     let client = SynologyClient::new(&config.nas);
//!     let mut session = Session::new();
//!     let storage = monitor::collect_report(&client, &mut session, &config.client)?;
//!     print!("{}", report::render_report(&storage));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod monitor;
pub mod report;
pub mod synology;
pub mod units;
