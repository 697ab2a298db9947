//! Executable lookup on the search path.

use std::env;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

/// Find `name` on the `PATH`, the way the OS shell would.
///
/// On Windows the `PATHEXT` extensions are tried for bare names.
pub fn find_executable(name: &str) -> Option<PathBuf> {
    let path_var = env::var_os("PATH")?;
    for dir in env::split_paths(&path_var) {
        if dir.as_os_str().is_empty() {
            continue;
        }
        for candidate in candidates(&dir, name) {
            if is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

#[cfg(windows)]
fn candidates(dir: &Path, name: &str) -> Vec<PathBuf> {
    let mut out = vec![dir.join(name)];
    if !name.contains('.') {
        let exts = env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string());
        for ext in exts.split(';').filter(|ext| !ext.is_empty()) {
            out.push(dir.join(format!("{name}{}", ext.to_lowercase())));
        }
    }
    out
}

#[cfg(not(windows))]
fn candidates(dir: &Path, name: &str) -> Vec<PathBuf> {
    vec![dir.join(name)]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Last modification time of the tool's binary, when readable.
pub fn last_modified(path: &Path) -> Option<DateTime<Local>> {
    let modified = path.metadata().ok()?.modified().ok()?;
    Some(DateTime::from(modified))
}
