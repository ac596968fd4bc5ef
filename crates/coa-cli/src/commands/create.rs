//! The interactive create flow.
//!
//! Responsibility: wire the terminal prompter and real adapters into the
//! core prompt flow and scaffold service, and display results. No business
//! logic lives here.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, instrument};

use coa_adapters::{CachedTemplateSource, FetcherConfig, LocalFilesystem, TeraRenderer, UreqArchiveClient};
use coa_core::application::{FlowDefaults, FlowOutcome, ScaffoldService, run_prompt_flow};

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompter::DialoguerPrompter,
};

/// Run the interactive session end to end.
///
/// Dispatch sequence:
/// 1. Banner
/// 2. Prompt flow (questions; cancel exits cleanly)
/// 3. Early-exit when the destination already exists
/// 4. Fetch + render via `ScaffoldService`
/// 5. Success message + next-steps guidance
#[instrument(skip_all)]
pub fn execute(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    output.banner()?;

    // 1-2. Collect answers.
    let cwd = std::env::current_dir()?;
    let filesystem = LocalFilesystem::new();
    let mut prompter = DialoguerPrompter::new();
    let defaults = FlowDefaults {
        project_name: config.defaults.project_name.clone(),
    };

    let outcome = match run_prompt_flow(&mut prompter, &filesystem, &cwd, &defaults) {
        Ok(outcome) => outcome,
        Err(e) if e.is_cancelled() => {
            output.print("Project creation cancelled.")?;
            return Ok(());
        }
        Err(e) => return Err(CliError::Core(e)),
    };

    let (answers, project_path, notices) = match outcome {
        FlowOutcome::Ready {
            answers,
            project_path,
            notices,
        } => (answers, project_path, notices),
        FlowOutcome::DestinationExists { project_path } => {
            // Deliberate clean exit: nothing was written, nothing is wrong.
            output.error(&format!(
                "Directory '{}' already exists.",
                project_path.display()
            ))?;
            return Ok(());
        }
    };

    for notice in &notices {
        output.warning(&notice.message())?;
    }

    // 3-4. Fetch and render.
    let mut fetcher_config = FetcherConfig::default_locations();
    if let Some(url) = &config.template.archive_url {
        fetcher_config.archive_url = url.clone();
    }
    if let Some(root) = &config.template.cache_root {
        fetcher_config.cache_root = root.clone();
    }

    let service = ScaffoldService::new(
        Box::new(CachedTemplateSource::new(
            Box::new(UreqArchiveClient::new()),
            fetcher_config,
        )),
        Box::new(TeraRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    info!(project = %answers.project_name, path = %project_path.display(), "scaffold started");

    let spinner = make_spinner(&output);
    spinner.set_message("Setting up your project...");
    let result = service.scaffold(&answers, &project_path);
    spinner.finish_and_clear();
    result?;

    // 5. Success + next steps.
    output.success(&format!(
        "Successfully created your AgentKit project in {}",
        project_path.display()
    ))?;

    if !global.quiet {
        output.print("")?;
        output.header("What's Next?")?;
        output.print(&format!("  cd {}", answers.project_name))?;
        output.print("  poetry install")?;
        output.print("  # configure your .env.local, then:")?;
        output.print("  mv .env.local .env")?;
        output.print("  poetry run python chatbot.py")?;
        output.print("")?;
        output.print("Learn more:")?;
        output.print("  Docs:    https://docs.cdp.coinbase.com/agentkit/docs/welcome")?;
        output.print("  GitHub:  https://github.com/coinbase/agentkit")?;
        output.print("  Discord: https://discord.gg/CDP")?;
    }

    Ok(())
}

/// Spinner shown while the template downloads and renders; hidden in quiet
/// mode and when colour is disabled (CI logs).
fn make_spinner(output: &OutputManager) -> ProgressBar {
    if output.is_quiet() || !output.supports_color() {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
