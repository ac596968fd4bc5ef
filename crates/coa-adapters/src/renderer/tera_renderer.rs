//! Tera-based template renderer.
//!
//! Renders both file contents and path segments through Tera with the four
//! collected variables. Output is staged in a scratch directory beside the
//! destination and renamed into place, so a failing render never leaves a
//! half-written project behind.

use std::fs;
use std::path::{Path, PathBuf};

use tera::{Context, Tera};
use tracing::{debug, instrument};
use walkdir::WalkDir;

use coa_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::RenderVars,
    error::ScaffoldResult,
};

/// Production renderer delegating substitution to Tera.
#[derive(Debug, Clone, Copy)]
pub struct TeraRenderer;

impl TeraRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TeraRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn build_context(vars: &RenderVars) -> Context {
    let mut context = Context::new();
    for (key, value) in vars.entries() {
        context.insert(key, value);
    }
    context
}

fn render_str(input: &str, context: &Context, what: &Path) -> ScaffoldResult<String> {
    Tera::one_off(input, context, false).map_err(|e| {
        ApplicationError::RenderingFailed {
            reason: format!("{}: {e}", what.display()),
        }
        .into()
    })
}

fn fs_error(path: &Path, context: &str, e: std::io::Error) -> ApplicationError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("{context}: {e}"),
    }
}

impl TemplateRenderer for TeraRenderer {
    #[instrument(skip(self, vars), fields(dest = %dest.display()))]
    fn render(&self, template_dir: &Path, dest: &Path, vars: &RenderVars) -> ScaffoldResult<()> {
        if dest.exists() {
            return Err(ApplicationError::ProjectExists {
                path: dest.to_path_buf(),
            }
            .into());
        }

        let context = build_context(vars);
        let parent = dest.parent().filter(|p| !p.as_os_str().is_empty());
        let parent = parent.unwrap_or_else(|| Path::new("."));

        // Scratch lives next to the destination so the final rename is a
        // same-filesystem move; TempDir drop cleans it up on any failure.
        let scratch = tempfile::tempdir_in(parent)
            .map_err(|e| fs_error(parent, "create staging directory", e))?;
        let staged = scratch.path().join("render");
        fs::create_dir(&staged).map_err(|e| fs_error(&staged, "create staging root", e))?;

        let mut files = 0usize;
        for entry in WalkDir::new(template_dir).min_depth(1) {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: template_dir.to_path_buf(),
                reason: format!("walking template: {e}"),
            })?;

            let rel = entry.path().strip_prefix(template_dir).map_err(|e| {
                ApplicationError::FilesystemError {
                    path: entry.path().to_path_buf(),
                    reason: format!("outside template root: {e}"),
                }
            })?;
            let rendered_rel = render_str(&rel.to_string_lossy(), &context, rel)?;
            let out_path = staged.join(PathBuf::from(rendered_rel));

            if entry.file_type().is_dir() {
                fs::create_dir_all(&out_path)
                    .map_err(|e| fs_error(&out_path, "create directory", e))?;
                continue;
            }

            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| fs_error(parent, "create parent directory", e))?;
            }

            let raw = fs::read(entry.path())
                .map_err(|e| fs_error(entry.path(), "read template file", e))?;
            match String::from_utf8(raw) {
                // Text files go through the engine.
                Ok(text) => {
                    let rendered = render_str(&text, &context, rel)?;
                    fs::write(&out_path, rendered)
                        .map_err(|e| fs_error(&out_path, "write file", e))?;
                }
                // Binary assets are copied verbatim.
                Err(raw) => {
                    fs::write(&out_path, raw.into_bytes())
                        .map_err(|e| fs_error(&out_path, "write file", e))?;
                }
            }
            files += 1;
        }

        fs::rename(&staged, dest).map_err(|e| fs_error(dest, "move project into place", e))?;
        debug!(files, "template rendered");
        Ok(())
    }
}
