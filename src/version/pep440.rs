//! PEP 440 version handling and conversion into the semver model.
//!
//! Many CLI tools written in Python report PEP 440 versions (`1.2.3a1`,
//! `2.10`, `1.0.post1`). The audit compares everything with semver
//! precedence, so PEP 440 versions are converted: pre-release segments map
//! to the semver prerelease slot and `dev` segments to the build slot.
//!
//! Conversion refuses epochs and post-releases. Neither has a semver
//! analog: an epoch reorders the whole release line, and a post-release
//! sorts *after* its base version while anything in the semver prerelease
//! slot sorts *before* it. Dropping either would corrupt comparisons, so
//! the caller treats refusal as a normalization failure.

use pep508_rs::pep440_rs::{PrereleaseKind, Version as Pep440Version};
use semver::{BuildMetadata, Prerelease, Version};

/// Why a PEP 440 version could not be converted to semver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The version carries an epoch (`1!2.0`).
    Epoch,
    /// The version carries a post-release segment (`1.0.post1`).
    Post,
    /// The release does not have two or three numeric components.
    BadComponentCount,
    /// A pre-release or dev segment did not form a valid semver identifier.
    BadIdentifier,
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::Epoch => write!(f, "can't convert an epoch to semver"),
            ConvertError::Post => write!(f, "can't convert a post segment to semver"),
            ConvertError::BadComponentCount => {
                write!(f, "release must have two or three components")
            }
            ConvertError::BadIdentifier => write!(f, "invalid prerelease or build identifier"),
        }
    }
}

/// Convert a PEP 440 version into a semver version.
///
/// Two-part releases are promoted (`2.10` becomes `2.10.0`). Pre-release
/// segments land in the prerelease slot (`1.2.3a1` becomes `1.2.3-a1`),
/// `dev` segments in the build slot.
pub fn to_semver(ver: &Pep440Version) -> Result<Version, ConvertError> {
    if ver.epoch() != 0 {
        return Err(ConvertError::Epoch);
    }
    if ver.post().is_some() {
        return Err(ConvertError::Post);
    }

    let release = ver.release();
    if release.len() < 2 || release.len() > 3 {
        return Err(ConvertError::BadComponentCount);
    }
    let major = release[0];
    let minor = release[1];
    let patch = release.get(2).copied().unwrap_or(0);

    let pre = match ver.pre() {
        Some(pre) => {
            let tag = format!("{}{}", prerelease_tag(pre.kind), pre.number);
            Prerelease::new(&tag).map_err(|_| ConvertError::BadIdentifier)?
        }
        None => Prerelease::EMPTY,
    };

    let build = match ver.dev() {
        Some(dev) => {
            BuildMetadata::new(&dev.to_string()).map_err(|_| ConvertError::BadIdentifier)?
        }
        None => BuildMetadata::EMPTY,
    };

    Ok(Version {
        major,
        minor,
        patch,
        pre,
        build,
    })
}

fn prerelease_tag(kind: PrereleaseKind) -> &'static str {
    match kind {
        PrereleaseKind::Alpha => "a",
        PrereleaseKind::Beta => "b",
        PrereleaseKind::Rc => "rc",
    }
}
