//! Scaffold service - fetch-then-render orchestrator.
//!
//! Coordinates the materialization workflow once the prompt flow has
//! collected all answers:
//! 1. Guard the destination (must not exist - nothing is written otherwise)
//! 2. Ensure the template bundle is present locally
//! 3. Render the template into the destination

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer, TemplateSource},
    },
    domain::{ProjectAnswers, RenderVars},
    error::ScaffoldResult,
};

/// Main scaffolding service.
pub struct ScaffoldService {
    source: Box<dyn TemplateSource>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        source: Box<dyn TemplateSource>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            source,
            renderer,
            filesystem,
        }
    }

    /// Materialize a new project at `project_path` from the cached template.
    ///
    /// Returns the template directory that was used, mostly for logging.
    #[instrument(skip_all, fields(project = %answers.project_name, path = %project_path.display()))]
    pub fn scaffold(
        &self,
        answers: &ProjectAnswers,
        project_path: &Path,
    ) -> ScaffoldResult<PathBuf> {
        // The flow already checked this, but the service is the last gate
        // before writes; re-check so the renderer can rely on it.
        if self.filesystem.exists(project_path) {
            return Err(ApplicationError::ProjectExists {
                path: project_path.to_path_buf(),
            }
            .into());
        }

        let template_dir = self.source.ensure()?;
        info!(template = %template_dir.display(), "template ready");

        let vars = RenderVars::from(answers);
        self.renderer.render(&template_dir, project_path, &vars)?;

        info!("scaffold completed");
        Ok(template_dir)
    }
}
