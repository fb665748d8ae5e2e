//! # scriptdeck-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **REST-ish JSON API** for programmatic access
//!   (`/api/scripts`, `/api/scripts/{index}/run`, …)
//! - Serve a **server-side-rendered HTML dashboard** that works with
//!   **zero JavaScript** — pure HTML forms posting back to the server
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses (JSON or HTML)
//!
//! ## No-JS dashboard approach
//! - Every page is rendered server-side as complete HTML, built by plain
//!   render functions (no template engine).
//! - The Run button on each row is a `<form>` posting to
//!   `/scripts/{index}/run`; the response is a result page linking back.
//! - The Reload button posts to `/scripts/reload` and redirects back to
//!   the list (PRG pattern).
//!
//! ## Dependency rule
//! Depends on `scriptdeck-app` (for port traits and services) and
//! `scriptdeck-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
