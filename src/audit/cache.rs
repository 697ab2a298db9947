//! Per-tool result cache.
//!
//! Results are cached per tool under `.toolcheck-cache/` in the working
//! directory, keyed by a fingerprint of the tool's configuration. Any
//! config change produces a new fingerprint, so stale entries are
//! simply never read again. Problem results are not cached: a missing
//! or broken tool should be re-checked every run.

use std::fs;
use std::path::PathBuf;

use crate::config::ToolConfig;

use super::manager::AuditManager;
use super::result::ToolCheckResult;

pub const CACHE_DIR: &str = ".toolcheck-cache";

/// Wraps an [`AuditManager`] with a filesystem cache.
pub struct CachedAuditor {
    inner: AuditManager,
    cache_dir: PathBuf,
    enabled: bool,
}

impl CachedAuditor {
    pub fn new(inner: AuditManager, enabled: bool) -> Self {
        Self {
            inner,
            cache_dir: PathBuf::from(CACHE_DIR),
            enabled,
        }
    }

    #[cfg(test)]
    fn with_dir(inner: AuditManager, cache_dir: PathBuf) -> Self {
        Self {
            inner,
            cache_dir,
            enabled: true,
        }
    }

    pub fn call_and_check(&self, config: &ToolConfig) -> ToolCheckResult {
        if !self.enabled {
            return self.inner.call_and_check(config);
        }

        let path = self.cache_path(config);
        if let Some(hit) = self.read_cached(&path) {
            tracing::debug!("cache hit for {}", config.name);
            return hit;
        }

        let result = self.inner.call_and_check(config);
        if !result.is_problem() {
            self.write_cached(&path, &result);
        }
        result
    }

    fn cache_path(&self, config: &ToolConfig) -> PathBuf {
        let sanitized = config.name.replace('.', "_");
        self.cache_dir
            .join(format!("{sanitized}_{}.json", config.fingerprint()))
    }

    fn read_cached(&self, path: &PathBuf) -> Option<ToolCheckResult> {
        let content = fs::read_to_string(path).ok()?;
        match serde_json::from_str(&content) {
            Ok(result) => Some(result),
            Err(err) => {
                tracing::debug!("discarding unreadable cache file {}: {err}", path.display());
                None
            }
        }
    }

    fn write_cached(&self, path: &PathBuf, result: &ToolCheckResult) {
        let write = || -> std::io::Result<()> {
            fs::create_dir_all(&self.cache_dir)?;
            let json = serde_json::to_string_pretty(result)
                .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
            fs::write(path, json)
        };
        // Caching is best effort, an unwritable directory only costs speed.
        if let Err(err) = write() {
            tracing::debug!("could not cache result for {}: {err}", result.tool);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::Schema;
    use crate::runner::KnownSwitches;
    use std::time::Duration;
    use tempfile::TempDir;

    fn auditor(dir: &TempDir) -> CachedAuditor {
        CachedAuditor::with_dir(
            AuditManager::new(KnownSwitches::default(), Duration::from_secs(15)),
            dir.path().join(CACHE_DIR),
        )
    }

    #[test]
    fn problems_are_never_cached() {
        let dir = TempDir::new().unwrap();
        let auditor = auditor(&dir);
        let mut config = ToolConfig::new("definitely-not-a-real-tool-xyz");
        config.version = Some(">=1.0.0".into());

        let result = auditor.call_and_check(&config);
        assert!(result.is_problem());
        assert!(auditor.read_cached(&auditor.cache_path(&config)).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn clean_result_round_trips_through_cache() {
        let dir = TempDir::new().unwrap();
        let auditor = auditor(&dir);
        let mut config = ToolConfig::new("sh");
        config.schema = Some(Schema::Existence);

        let first = auditor.call_and_check(&config);
        assert!(!first.is_problem());

        let cached = auditor.read_cached(&auditor.cache_path(&config));
        assert!(cached.is_some());
        assert_eq!(cached.unwrap().tool, "sh");
    }

    #[cfg(unix)]
    #[test]
    fn fingerprint_change_misses_the_cache() {
        let dir = TempDir::new().unwrap();
        let auditor = auditor(&dir);
        let mut config = ToolConfig::new("sh");
        config.schema = Some(Schema::Existence);
        auditor.call_and_check(&config);

        config.version = Some("*".into());
        assert!(auditor.read_cached(&auditor.cache_path(&config)).is_none());
    }

    #[test]
    fn dots_in_names_are_sanitized() {
        let dir = TempDir::new().unwrap();
        let auditor = auditor(&dir);
        let config = ToolConfig::new("dotnet.exe");
        let path = auditor.cache_path(&config);
        let file_name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(file_name.starts_with("dotnet_exe_"));
    }
}
