/// Image folder scanner.
///
/// Lists the regular files directly inside the images folder (no
/// recursion), keeps the supported picture formats, and resolves name
/// collisions by extension priority.
use super::{ImageEntry, ImageFormat, ImageLibrary, ScanReport, SkipReason, SkippedFile};
use crate::error::LibraryError;

use compact_str::CompactString;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Scan `dir` and build the image library.
///
/// Fails only when the folder itself cannot be listed. Individual entries
/// that cannot be read or classified are reported in
/// [`ScanReport::skipped`].
pub fn scan_folder(dir: &Path) -> Result<ScanReport, LibraryError> {
    info!("Scanning image folder {}", dir.display());

    let unreadable = |source| LibraryError::FolderUnreadable {
        path: dir.to_path_buf(),
        source,
    };

    let mut candidates: Vec<ImageEntry> = Vec::new();
    let mut skipped: Vec<SkippedFile> = Vec::new();

    for dir_entry in fs::read_dir(dir).map_err(unreadable)? {
        let dir_entry = match dir_entry {
            Ok(e) => e,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                skipped.push(SkippedFile {
                    file_name: format!("({e})"),
                    reason: SkipReason::Unreadable,
                });
                continue;
            }
        };
        let path = dir_entry.path();

        // Follows symlinks, so linked pictures count as files.
        if !path.is_file() {
            continue;
        }

        let classified = classify(&path).map(|(name, format)| (CompactString::from(name), format));
        match classified {
            Some((name, format)) => candidates.push(ImageEntry { name, format, path }),
            None => {
                let file_name = dir_entry.file_name().to_string_lossy().into_owned();
                let reason = skip_reason(&file_name);
                debug!("Skipping {} ({:?})", file_name, reason);
                skipped.push(SkippedFile { file_name, reason });
            }
        }
    }

    let report = resolve(candidates, skipped);

    info!(
        "Image folder scanned: {} words, {} files skipped",
        report.library.len(),
        report.skipped.len()
    );
    if report.library.is_empty() {
        warn!("No usable pictures in {}", dir.display());
    }

    Ok(report)
}

/// Split a path into (word, format). `None` for unsupported or non-UTF-8
/// names.
fn classify(path: &Path) -> Option<(&str, ImageFormat)> {
    let format = ImageFormat::from_extension(path.extension()?.to_str()?)?;
    let name = path.file_stem()?.to_str()?;
    Some((name, format))
}

/// Why a file that `classify` rejected is skipped.
///
/// `.gif` has no stem in front of its extension, so `Path` reads the whole
/// name as the stem. Such files are reported as nameless rather than as
/// unsupported.
fn skip_reason(file_name: &str) -> SkipReason {
    match file_name.strip_prefix('.') {
        Some(ext) if ImageFormat::from_extension(ext).is_some() => SkipReason::EmptyName,
        _ => SkipReason::UnsupportedExtension,
    }
}

/// Keep one entry per name, preferring the lowest priority value.
///
/// Candidates are ordered by (name, priority, path) first so that ties
/// such as `cat.GIF` / `cat.gif` resolve the same way on every run.
fn resolve(mut candidates: Vec<ImageEntry>, mut skipped: Vec<SkippedFile>) -> ScanReport {
    candidates.sort_by(|a, b| {
        a.name
            .cmp(&b.name)
            .then(a.format.priority().cmp(&b.format.priority()))
            .then_with(|| a.path.cmp(&b.path))
    });

    let mut library = ImageLibrary::default();
    for candidate in candidates {
        if let Err(loser) = library.insert_new(candidate) {
            // The winner is always present when insertion is rejected.
            let by = library.format_of(&loser.name).unwrap_or(loser.format);
            debug!("{} is shadowed by .{}", loser.path.display(), by);
            skipped.push(SkippedFile {
                file_name: file_name_of(&loser.path),
                reason: SkipReason::Shadowed { by },
            });
        }
    }

    skipped.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    ScanReport { library, skipped }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
