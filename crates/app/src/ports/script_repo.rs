//! Script repository port — sourcing and executing automation scripts.

use std::future::Future;

use scriptdeck_domain::error::ScriptDeckError;
use scriptdeck_domain::outcome::RunOutcome;
use scriptdeck_domain::script::AutomationScript;

/// Repository for fetching and running [`AutomationScript`]s.
///
/// Both operations are async even when an implementation can complete
/// immediately; callers must not assume immediate completion.
pub trait ScriptRepository {
    /// Fetch the full script catalog.
    ///
    /// Implementations that source scripts from an external system fail with
    /// [`ScriptDeckError::Fetch`] when the source is unavailable.
    fn fetch_scripts(&self)
    -> impl Future<Output = Result<Vec<AutomationScript>, ScriptDeckError>> + Send;

    /// Run the given script and report how it ended.
    ///
    /// A script that executes but fails reports `Ok(RunOutcome::Failure)`;
    /// the error channel is reserved for infrastructure failures.
    fn run_script(
        &self,
        script: &AutomationScript,
    ) -> impl Future<Output = Result<RunOutcome, ScriptDeckError>> + Send;
}
