//! Integration tests wiring the core flow and service to real adapters.

use std::io::{Cursor, Write as _};
use std::path::{Path, PathBuf};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use coa_adapters::{
    CachedTemplateSource, FetcherConfig, LocalFilesystem, MemoryFilesystem, ScriptedPrompter,
    TeraRenderer,
};
use coa_core::{
    application::{
        FlowDefaults, FlowOutcome, ScaffoldService,
        ports::{ArchiveClient, TemplateSource},
        run_prompt_flow,
    },
    domain::WalletProvider,
    error::{ScaffoldError, ScaffoldResult},
};
use zip::write::SimpleFileOptions;

/// Archive client serving a canned payload and counting requests.
struct CountingClient {
    payload: ScaffoldResult<Vec<u8>>,
    requests: Arc<AtomicUsize>,
}

impl CountingClient {
    fn new(payload: ScaffoldResult<Vec<u8>>) -> (Self, Arc<AtomicUsize>) {
        let requests = Arc::new(AtomicUsize::new(0));
        (
            Self {
                payload,
                requests: requests.clone(),
            },
            requests,
        )
    }
}

impl ArchiveClient for CountingClient {
    fn fetch(&self, _url: &str) -> ScaffoldResult<Vec<u8>> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        match &self.payload {
            Ok(bytes) => Ok(bytes.clone()),
            Err(e) => Err(e.clone()),
        }
    }
}

/// Zip archive shaped like the remote snapshot: a top-level repo directory
/// with the templates subtree at the expected subpath.
fn template_archive() -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    writer
        .add_directory("repo-main/python/create-onchain-agent/templates/chatbot", options)
        .unwrap();
    writer
        .start_file(
            "repo-main/python/create-onchain-agent/templates/chatbot/README.md",
            options,
        )
        .unwrap();
    writer
        .write_all(b"# {{ _project_name }}\n\nNetwork: {{ _network }}\n")
        .unwrap();
    writer
        .start_file(
            "repo-main/python/create-onchain-agent/templates/chatbot/{{ _package_name }}/agent.py",
            options,
        )
        .unwrap();
    writer
        .write_all(b"WALLET_PROVIDER = \"{{ _wallet_provider }}\"\n")
        .unwrap();

    writer.finish().unwrap().into_inner()
}

fn config_in(cache_root: &Path) -> FetcherConfig {
    FetcherConfig {
        archive_url: "https://example.invalid/main.zip".into(),
        cache_root: cache_root.to_path_buf(),
        archive_subpath: PathBuf::from("repo-main/python/create-onchain-agent/templates"),
    }
}

// ── fetcher ───────────────────────────────────────────────────────────────────

#[test]
fn cold_cache_downloads_and_populates() {
    let cache = tempfile::tempdir().unwrap();
    let (client, requests) = CountingClient::new(Ok(template_archive()));
    let source = CachedTemplateSource::new(Box::new(client), config_in(cache.path()));

    let templates = source.ensure().unwrap();
    assert_eq!(requests.load(Ordering::SeqCst), 1);
    assert!(templates.join("chatbot/README.md").is_file());
}

#[test]
fn warm_cache_performs_zero_network_requests() {
    let cache = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(cache.path().join("templates/chatbot")).unwrap();

    let (client, requests) = CountingClient::new(Ok(template_archive()));
    let source = CachedTemplateSource::new(Box::new(client), config_in(cache.path()));

    let first = source.ensure().unwrap();
    let second = source.ensure().unwrap();
    assert_eq!(first, second);
    assert_eq!(requests.load(Ordering::SeqCst), 0);
}

#[test]
fn populate_is_idempotent_across_calls() {
    let cache = tempfile::tempdir().unwrap();
    let (client, requests) = CountingClient::new(Ok(template_archive()));
    let source = CachedTemplateSource::new(Box::new(client), config_in(cache.path()));

    source.ensure().unwrap();
    source.ensure().unwrap();
    assert_eq!(requests.load(Ordering::SeqCst), 1);
}

#[test]
fn download_failure_leaves_no_cache_behind() {
    let cache = tempfile::tempdir().unwrap();
    let (client, _) = CountingClient::new(Err(ScaffoldError::Application(
        coa_core::application::ApplicationError::DownloadFailed {
            url: "https://example.invalid/main.zip".into(),
            reason: "connection refused".into(),
        },
    )));
    let source = CachedTemplateSource::new(Box::new(client), config_in(cache.path()));

    assert!(source.ensure().is_err());
    // A later run must not mistake the failed attempt for a valid cache.
    assert!(!cache.path().join("templates").exists());
}

#[test]
fn corrupt_archive_is_an_extraction_error() {
    let cache = tempfile::tempdir().unwrap();
    let (client, _) = CountingClient::new(Ok(b"not a zip archive".to_vec()));
    let source = CachedTemplateSource::new(Box::new(client), config_in(cache.path()));

    let err = source.ensure().unwrap_err();
    assert!(err.to_string().contains("extraction"), "got: {err}");
    assert!(!cache.path().join("templates").exists());
}

#[test]
fn archive_without_expected_subpath_is_template_missing() {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("repo-main/README.md", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"nothing here").unwrap();
    let bytes = writer.finish().unwrap().into_inner();

    let cache = tempfile::tempdir().unwrap();
    let (client, _) = CountingClient::new(Ok(bytes));
    let source = CachedTemplateSource::new(Box::new(client), config_in(cache.path()));

    let err = source.ensure().unwrap_err();
    assert!(err.to_string().contains("Template not found"), "got: {err}");
}

// ── flow + service end-to-end ─────────────────────────────────────────────────

fn base_sepolia_index() -> usize {
    coa_core::domain::default_network_index()
}

#[test]
fn end_to_end_scaffold_from_scripted_answers() {
    let cache = tempfile::tempdir().unwrap();
    let workdir = tempfile::tempdir().unwrap();

    let mut prompter = ScriptedPrompter::new()
        .answer_text("demo")
        .answer_select(base_sepolia_index())
        .answer_select(0);

    let outcome = run_prompt_flow(
        &mut prompter,
        &LocalFilesystem::new(),
        workdir.path(),
        &FlowDefaults::default(),
    )
    .unwrap();

    let FlowOutcome::Ready {
        answers,
        project_path,
        notices,
    } = outcome
    else {
        panic!("expected Ready outcome");
    };

    assert_eq!(answers.project_name, "demo");
    assert_eq!(answers.package_name, "demo");
    assert_eq!(answers.network, "base-sepolia");
    assert_eq!(answers.wallet_provider, WalletProvider::Cdp);
    assert!(notices.is_empty());

    let (client, requests) = CountingClient::new(Ok(template_archive()));
    let service = ScaffoldService::new(
        Box::new(CachedTemplateSource::new(
            Box::new(client),
            config_in(cache.path()),
        )),
        Box::new(TeraRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    service.scaffold(&answers, &project_path).unwrap();
    assert_eq!(requests.load(Ordering::SeqCst), 1);

    let readme = std::fs::read_to_string(project_path.join("chatbot/README.md")).unwrap();
    assert!(readme.contains("# demo"));
    assert!(readme.contains("Network: base-sepolia"));

    let agent = std::fs::read_to_string(project_path.join("chatbot/demo/agent.py")).unwrap();
    assert_eq!(agent, "WALLET_PROVIDER = \"cdp\"\n");
}

#[test]
fn existing_destination_short_circuits_without_writes() {
    let workdir = tempfile::tempdir().unwrap();
    std::fs::create_dir(workdir.path().join("taken")).unwrap();

    let mut prompter = ScriptedPrompter::new().answer_text("taken");
    let outcome = run_prompt_flow(
        &mut prompter,
        &LocalFilesystem::new(),
        workdir.path(),
        &FlowDefaults::default(),
    )
    .unwrap();

    assert!(matches!(outcome, FlowOutcome::DestinationExists { .. }));
    // Only the project-name question ran.
    assert_eq!(prompter.asked().len(), 1);
}

#[test]
fn non_custodial_network_forces_eth_with_single_warning() {
    let workdir = tempfile::tempdir().unwrap();
    let optimism = coa_core::domain::NETWORK_CHOICES
        .iter()
        .position(|c| c.key == "optimism-sepolia")
        .unwrap();

    let mut prompter = ScriptedPrompter::new()
        .answer_text("demo")
        .answer_select(optimism);

    let outcome = run_prompt_flow(
        &mut prompter,
        &LocalFilesystem::new(),
        workdir.path(),
        &FlowDefaults::default(),
    )
    .unwrap();

    let FlowOutcome::Ready {
        answers, notices, ..
    } = outcome
    else {
        panic!("expected Ready outcome");
    };
    assert_eq!(answers.wallet_provider, WalletProvider::Eth);
    assert_eq!(notices.len(), 1);
    // The wallet-provider question was never asked.
    assert!(!prompter.asked().iter().any(|m| m.contains("wallet")));
}

#[test]
fn scripted_memory_filesystem_flow_detects_existing_destination() {
    let fs = MemoryFilesystem::new();
    fs.touch("/work/demo");

    let mut prompter = ScriptedPrompter::new().answer_text("demo");
    let outcome = run_prompt_flow(
        &mut prompter,
        &fs,
        Path::new("/work"),
        &FlowDefaults::default(),
    )
    .unwrap();

    assert_eq!(
        outcome,
        FlowOutcome::DestinationExists {
            project_path: PathBuf::from("/work/demo"),
        }
    );
}
