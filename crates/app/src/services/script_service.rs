//! Script service — use-cases for the script dashboard.

use tokio::sync::RwLock;

use scriptdeck_domain::error::ScriptDeckError;
use scriptdeck_domain::outcome::RunReport;
use scriptdeck_domain::script::AutomationScript;

use crate::catalog::Catalog;
use crate::ports::ScriptRepository;

/// Application service for loading the catalog and running scripts.
///
/// Owns the [`Catalog`] behind a read/write lock so that concurrent page
/// renders share snapshots while a reload swaps the sequence atomically.
pub struct ScriptService<R> {
    repo: R,
    catalog: RwLock<Catalog>,
}

impl<R: ScriptRepository> ScriptService<R> {
    /// Create a new service backed by the given repository, starting with
    /// an empty catalog.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            catalog: RwLock::new(Catalog::new()),
        }
    }

    /// Fetch the catalog from the repository and replace the held sequence.
    ///
    /// A failed fetch leaves the previously loaded catalog untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptDeckError::Fetch`] when the repository cannot deliver
    /// a catalog.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self) -> Result<(), ScriptDeckError> {
        let scripts = self.repo.fetch_scripts().await?;
        let count = scripts.len();
        self.catalog.write().await.replace(scripts);
        tracing::info!(count, "script catalog loaded");
        Ok(())
    }

    /// Number of scripts currently loaded.
    pub async fn count(&self) -> usize {
        self.catalog.read().await.len()
    }

    /// Script at `index` in the loaded catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptDeckError::IndexOutOfRange`] when `index` is outside
    /// the loaded sequence.
    pub async fn script_at(&self, index: usize) -> Result<AutomationScript, ScriptDeckError> {
        Ok(self.catalog.read().await.get(index)?.clone())
    }

    /// Snapshot of the full catalog, in order, for rendering.
    pub async fn scripts(&self) -> Vec<AutomationScript> {
        self.catalog.read().await.as_slice().to_vec()
    }

    /// Run the script at `index` and report how it ended.
    ///
    /// The script is resolved at activation time. The catalog lock is
    /// released before the run starts, so a long-running script never
    /// blocks page renders or reloads.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptDeckError::IndexOutOfRange`] when `index` is outside
    /// the loaded sequence; the repository is not consulted in that case.
    #[tracing::instrument(skip(self))]
    pub async fn run_at(&self, index: usize) -> Result<RunReport, ScriptDeckError> {
        let script = self.catalog.read().await.get(index)?.clone();
        let outcome = self.repo.run_script(&script).await?;
        let report = RunReport::new(script, outcome);
        if report.outcome.is_success() {
            tracing::info!("{}", report.message());
        } else {
            tracing::warn!("{}", report.message());
        }
        Ok(report)
    }
}
