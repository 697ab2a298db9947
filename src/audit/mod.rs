//! Audit orchestration: fan a batch of tool checks out over a worker
//! pool, with optional caching and a progress bar.

pub mod cache;
pub mod manager;
pub mod result;

pub use cache::CachedAuditor;
pub use manager::AuditManager;
pub use result::ToolCheckResult;

use std::collections::BTreeMap;
use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;

use indicatif::{ProgressBar, ProgressStyle};

use crate::config::ToolConfig;

/// Batches below this size skip both the cache and the progress bar.
const SMALL_BATCH: usize = 5;

/// Options for a batch audit.
#[derive(Debug, Clone, Default)]
pub struct AuditOptions {
    pub no_cache: bool,
    /// Keep only tools carrying at least one of these tags.
    pub tags: Option<Vec<String>>,
    pub show_progress: bool,
}

/// Audit every tool in `tools`, in parallel.
///
/// Results come back sorted by tool name regardless of which worker
/// finished first.
pub fn process_tools(
    tools: &BTreeMap<String, ToolConfig>,
    options: &AuditOptions,
) -> Vec<ToolCheckResult> {
    let selected: Vec<&ToolConfig> = tools
        .values()
        .filter(|config| matches_tags(config, options.tags.as_deref()))
        .collect();
    if selected.is_empty() {
        return Vec::new();
    }

    let enable_cache = selected.len() >= SMALL_BATCH && !options.no_cache;
    let auditor = CachedAuditor::new(AuditManager::default(), enable_cache);

    let progress = progress_bar(selected.len(), options.show_progress);

    let workers = thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(selected.len());
    tracing::debug!("auditing {} tools on {workers} workers", selected.len());

    let next_job = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel::<ToolCheckResult>();

    thread::scope(|scope| {
        for _ in 0..workers {
            let tx = tx.clone();
            let next_job = &next_job;
            let selected = &selected;
            let auditor = &auditor;
            let progress = &progress;
            scope.spawn(move || loop {
                let index = next_job.fetch_add(1, Ordering::SeqCst);
                let Some(config) = selected.get(index) else {
                    break;
                };
                let result = auditor.call_and_check(config);
                progress.inc(1);
                if tx.send(result).is_err() {
                    break;
                }
            });
        }
    });
    drop(tx);

    progress.finish_and_clear();

    let mut results: Vec<ToolCheckResult> = rx.into_iter().collect();
    results.sort_by(|a, b| a.tool.cmp(&b.tool));
    results
}

fn matches_tags(config: &ToolConfig, tags: Option<&[String]>) -> bool {
    let Some(tags) = tags else {
        return true;
    };
    if tags.is_empty() {
        return true;
    }
    config
        .tags
        .as_deref()
        .unwrap_or_default()
        .iter()
        .any(|tag| tags.contains(tag))
}

fn progress_bar(total: usize, show_progress: bool) -> ProgressBar {
    let quiet_env = env::var_os("CI").is_some() || env::var_os("NO_COLOR").is_some();
    if !show_progress || total < SMALL_BATCH || quiet_env {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(total as u64);
    if let Ok(style) =
        ProgressStyle::with_template("{spinner} checking tools [{bar:30}] {pos}/{len}")
    {
        bar.set_style(style);
    }
    bar
}
