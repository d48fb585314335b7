/// Image library — the table that maps a typed word to a picture file.
///
/// The library is built once from a flat folder of images (see [`scan`]).
/// Every file name (without extension) becomes a word; when the same word
/// exists in several formats only the highest-priority one is kept.
pub mod format;
pub mod scan;

pub use format::ImageFormat;
pub use scan::scan_folder;

use compact_str::CompactString;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// A picture file the library can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    /// File name without its final extension. This is the word to type.
    pub name: CompactString,
    pub format: ImageFormat,
    /// Full path to the file.
    pub path: PathBuf,
}

/// Why a file in the images folder is not part of the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Extension is not gif, png, jpg or jpeg (or the name is not UTF-8).
    UnsupportedExtension,
    /// Supported extension but nothing in front of it, e.g. `.gif`.
    EmptyName,
    /// The folder listing failed for this entry; `file_name` holds the error.
    Unreadable,
    /// Another file with the same name and a preferred format won.
    Shadowed { by: ImageFormat },
}

/// A file that was found but will never be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub file_name: String,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            SkipReason::UnsupportedExtension | SkipReason::EmptyName | SkipReason::Unreadable => {
                f.write_str(&self.file_name)
            }
            SkipReason::Shadowed { by } => write!(f, "{} (.{} is used)", self.file_name, by),
        }
    }
}

/// Resolved word → picture table. Holds at most one entry per name.
#[derive(Debug, Clone, Default)]
pub struct ImageLibrary {
    entries: BTreeMap<CompactString, ImageEntry>,
}

impl ImageLibrary {
    /// Find the picture for an already-normalised word.
    ///
    /// Matching is exact and case-sensitive. An empty word never matches.
    pub fn lookup(&self, word: &str) -> Option<&ImageEntry> {
        if word.is_empty() {
            return None;
        }
        self.entries.get(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = &ImageEntry> {
        self.entries.values()
    }

    /// Insert an entry unless one with the same name is already present.
    /// Returns the rejected entry on conflict.
    pub(crate) fn insert_new(&mut self, entry: ImageEntry) -> Result<(), ImageEntry> {
        match self.entries.get(entry.name.as_str()) {
            Some(_) => Err(entry),
            None => {
                self.entries.insert(entry.name.clone(), entry);
                Ok(())
            }
        }
    }

    /// Format of the entry stored under `name`.
    pub(crate) fn format_of(&self, name: &str) -> Option<ImageFormat> {
        self.entries.get(name).map(|e| e.format)
    }
}

/// Result of scanning the images folder.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub library: ImageLibrary,
    /// Files left out of the library, sorted by file name.
    pub skipped: Vec<SkippedFile>,
}

impl ScanReport {
    /// Validation messages to show the user after a scan.
    ///
    /// Empty when the folder holds at least one picture and nothing was
    /// skipped.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.library.is_empty() {
            warnings.push("There are no proper files in the images folder.".to_string());
        }

        let groups: [(&str, fn(SkipReason) -> bool); 4] = [
            ("There are several files with unsupported extensions: ", |r| {
                r == SkipReason::UnsupportedExtension
            }),
            ("Some pictures have no name before the extension: ", |r| {
                r == SkipReason::EmptyName
            }),
            (
                "Some pictures exist in more than one format and were skipped: ",
                |r| matches!(r, SkipReason::Shadowed { .. }),
            ),
            ("Some entries in the images folder could not be read: ", |r| {
                r == SkipReason::Unreadable
            }),
        ];

        for (heading, belongs) in groups {
            let names: Vec<String> = self
                .skipped
                .iter()
                .filter(|s| belongs(s.reason))
                .map(|s| s.to_string())
                .collect();
            if !names.is_empty() {
                warnings.push(format!("{heading}{}", names.join(" ")));
            }
        }

        warnings
    }
}
