//! # scriptdeck-adapter-virtual
//!
//! Virtual/demo script repository that provides a fixed catalog and
//! instantly completing runs for testing and demonstration purposes.
//!
//! ## Provided catalog
//!
//! | Name | Description |
//! |------|-------------|
//! | Script 1 | This is script 1 |
//! | Script 2 | This is script 2 |
//! | Script 3 | This is script 3 |
//!
//! Runs always succeed. Both the catalog and the run outcome can be
//! overridden through [`VirtualScriptRepository::with_scripts`] and
//! [`VirtualScriptRepository::with_run_outcome`].
//!
//! ## Dependency rule
//!
//! Depends on `scriptdeck-app` (port traits) and `scriptdeck-domain` only.

use scriptdeck_app::ports::ScriptRepository;
use scriptdeck_domain::error::ScriptDeckError;
use scriptdeck_domain::outcome::RunOutcome;
use scriptdeck_domain::script::AutomationScript;

/// Script repository backed by an in-memory demo catalog.
pub struct VirtualScriptRepository {
    scripts: Vec<AutomationScript>,
    run_outcome: RunOutcome,
}

impl Default for VirtualScriptRepository {
    fn default() -> Self {
        let scripts = (1..=3)
            .map(|n| AutomationScript {
                name: format!("Script {n}"),
                description: format!("This is script {n}"),
            })
            .collect();

        Self {
            scripts,
            run_outcome: RunOutcome::Success,
        }
    }
}

impl VirtualScriptRepository {
    /// Repository serving the given catalog instead of the demo one.
    #[must_use]
    pub fn with_scripts(scripts: Vec<AutomationScript>) -> Self {
        Self {
            scripts,
            run_outcome: RunOutcome::Success,
        }
    }

    /// Force every run to report the given outcome.
    #[must_use]
    pub fn with_run_outcome(mut self, outcome: RunOutcome) -> Self {
        self.run_outcome = outcome;
        self
    }
}

impl ScriptRepository for VirtualScriptRepository {
    async fn fetch_scripts(&self) -> Result<Vec<AutomationScript>, ScriptDeckError> {
        Ok(self.scripts.clone())
    }

    async fn run_script(&self, script: &AutomationScript) -> Result<RunOutcome, ScriptDeckError> {
        tracing::info!("Running automation script {}", script.name);
        Ok(self.run_outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_fetch_three_demo_scripts() {
        let repo = VirtualScriptRepository::default();
        let scripts = repo.fetch_scripts().await.unwrap();
        assert_eq!(scripts.len(), 3);
    }

    #[tokio::test]
    async fn should_name_and_describe_demo_scripts() {
        let repo = VirtualScriptRepository::default();
        let scripts = repo.fetch_scripts().await.unwrap();

        assert_eq!(scripts[0].name, "Script 1");
        assert_eq!(scripts[0].description, "This is script 1");
        assert_eq!(scripts[1].name, "Script 2");
        assert_eq!(scripts[1].description, "This is script 2");
        assert_eq!(scripts[2].name, "Script 3");
        assert_eq!(scripts[2].description, "This is script 3");
    }

    #[tokio::test]
    async fn should_fetch_same_catalog_on_every_call() {
        let repo = VirtualScriptRepository::default();
        let first = repo.fetch_scripts().await.unwrap();
        let second = repo.fetch_scripts().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn should_succeed_when_running_demo_script() {
        let repo = VirtualScriptRepository::default();
        let scripts = repo.fetch_scripts().await.unwrap();

        let outcome = repo.run_script(&scripts[0]).await.unwrap();
        assert_eq!(outcome, RunOutcome::Success);
    }

    #[tokio::test]
    async fn should_serve_custom_catalog() {
        let custom = vec![
            AutomationScript::builder()
                .name("Water the plants")
                .description("Garden irrigation cycle")
                .build()
                .unwrap(),
        ];
        let repo = VirtualScriptRepository::with_scripts(custom);

        let scripts = repo.fetch_scripts().await.unwrap();
        assert_eq!(scripts.len(), 1);
        assert_eq!(scripts[0].name, "Water the plants");
    }

    #[tokio::test]
    async fn should_report_forced_failure_outcome() {
        let repo = VirtualScriptRepository::default().with_run_outcome(RunOutcome::Failure);
        let scripts = repo.fetch_scripts().await.unwrap();

        let outcome = repo.run_script(&scripts[1]).await.unwrap();
        assert_eq!(outcome, RunOutcome::Failure);
    }
}
