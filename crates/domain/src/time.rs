//! Time handling for the domain.

use chrono::{DateTime, Utc};

/// UTC timestamp used for run reports.
pub type Timestamp = DateTime<Utc>;

/// Returns the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}
