//! Image preloading.
//!
//! Resolves every `img` source against the deck directory and checks that
//! the file is there, so missing images are reported once at startup rather
//! than when their slide comes up.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::constants::dom::{PRELOADED_ATTR, SRC_ATTR};
use crate::document::{Document, Selector};

/// Outcome of a preload pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PreloadReport {
    /// Images found on disk, with their size in bytes.
    pub loaded: Vec<(PathBuf, u64)>,
    /// Sources that could not be found.
    pub missing: Vec<String>,
}

/// Check every image of `doc` and mark the ones that exist.
pub fn preload_images<D: Document>(doc: &mut D, base_dir: &Path) -> PreloadReport {
    let mut report = PreloadReport::default();
    for node in doc.find_all(Selector::Tags(&["img"])) {
        let Some(src) = doc.attribute(node, SRC_ATTR).map(str::to_owned) else {
            continue;
        };
        let path = resolve(base_dir, &src);
        match fs_err::metadata(&path) {
            Ok(meta) if meta.is_file() => {
                debug!(path = %path.display(), bytes = meta.len(), "preloaded image");
                doc.set_attribute(node, PRELOADED_ATTR, "true");
                report.loaded.push((path, meta.len()));
            }
            Ok(_) => {
                warn!(path = %path.display(), "image source is not a file");
                report.missing.push(src);
            }
            Err(e) => {
                warn!("Failed to preload image: {e}");
                report.missing.push(src);
            }
        }
    }
    report
}

fn resolve(base_dir: &Path, src: &str) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(src).as_ref());
    if expanded.is_absolute() {
        expanded
    } else {
        base_dir.join(expanded)
    }
}
