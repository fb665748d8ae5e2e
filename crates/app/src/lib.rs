//! # scriptdeck-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ScriptRepository` — fetch the script catalog, run a script
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ScriptService` — load the catalog, look up scripts by position,
//!     run a script and report the outcome
//! - Hold the in-memory [`Catalog`](catalog::Catalog), the ordered sequence
//!   of scripts the dashboard renders
//! - Orchestrate domain objects without knowing *how* scripts are sourced
//!   or executed
//!
//! ## Dependency rule
//! Depends on `scriptdeck-domain` only (plus `tokio::sync` for the catalog
//! lock). Never imports adapter crates. Adapters depend on *this* crate,
//! not the reverse.

pub mod catalog;
pub mod ports;
pub mod services;
