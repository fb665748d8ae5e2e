//! # scriptdeck-domain
//!
//! Pure domain model for the scriptdeck automation dashboard.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define **`AutomationScript`** (named, described units of work the user
//!   can trigger from the dashboard)
//! - Define **`RunOutcome`** and **`RunReport`** (the Success/Failure result
//!   of an activation and its user-visible message)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod outcome;
pub mod script;
pub mod time;
