/// End-to-end image library tests.
///
/// These tests build real image folders with `tempfile`, write genuine
/// picture files with the `image` crate, and run the public scan, lookup and
/// decode paths against them. No filesystem mocking is involved.
use startwriting_core::library::{scan_folder, ImageFormat, SkipReason};
use startwriting_core::picture::load_picture;
use startwriting_core::text::normalize_word;
use startwriting_core::LibraryError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Write a solid-colour picture; the format follows the extension.
fn write_picture(path: &Path, width: u32, height: u32) {
    image::RgbImage::from_pixel(width, height, image::Rgb([200, 40, 40]))
        .save(path)
        .unwrap();
}

/// Build a folder:
///
/// ```text
/// images/
///   kot.gif     (2x2)
///   kot.png     (3x3)   shadowed by kot.gif
///   pies.jpg    (4x2)
///   pies.jpeg   (5x5)   shadowed by pies.jpg
///   Dom.PNG     (6x1)
///   notes.txt
///   sub/
///     ryba.png          ignored, not scanned recursively
/// ```
fn build_images(root: &Path) {
    write_picture(&root.join("kot.gif"), 2, 2);
    write_picture(&root.join("kot.png"), 3, 3);
    write_picture(&root.join("pies.jpg"), 4, 2);
    write_picture(&root.join("pies.jpeg"), 5, 5);
    write_picture(&root.join("Dom.PNG"), 6, 1);
    fs::write(root.join("notes.txt"), "not a picture").unwrap();
    let sub = root.join("sub");
    fs::create_dir_all(&sub).unwrap();
    write_picture(&sub.join("ryba.png"), 1, 1);
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn scan_keeps_one_entry_per_word() {
    let tmp = TempDir::new().unwrap();
    build_images(tmp.path());

    let report = scan_folder(tmp.path()).unwrap();
    let words: Vec<&str> = report.library.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(words, vec!["Dom", "kot", "pies"]);
}

#[test]
fn scan_applies_extension_priority() {
    let tmp = TempDir::new().unwrap();
    build_images(tmp.path());

    let report = scan_folder(tmp.path()).unwrap();
    assert_eq!(
        report.library.lookup("kot").map(|e| e.format),
        Some(ImageFormat::Gif)
    );
    assert_eq!(
        report.library.lookup("pies").map(|e| e.format),
        Some(ImageFormat::Jpg)
    );
    assert_eq!(
        report.library.lookup("Dom").map(|e| e.format),
        Some(ImageFormat::Png)
    );
}

#[test]
fn scan_reports_every_skipped_file() {
    let tmp = TempDir::new().unwrap();
    build_images(tmp.path());

    let report = scan_folder(tmp.path()).unwrap();
    let skipped: Vec<(&str, SkipReason)> = report
        .skipped
        .iter()
        .map(|s| (s.file_name.as_str(), s.reason))
        .collect();
    assert_eq!(
        skipped,
        vec![
            (
                "kot.png",
                SkipReason::Shadowed {
                    by: ImageFormat::Gif
                }
            ),
            ("notes.txt", SkipReason::UnsupportedExtension),
            (
                "pies.jpeg",
                SkipReason::Shadowed {
                    by: ImageFormat::Jpg
                }
            ),
        ]
    );

    // Library + skipped accounts for every file at the top level.
    assert_eq!(report.library.len() + report.skipped.len(), 6);
    assert_eq!(report.warnings().len(), 2);
}

#[test]
fn scan_empty_folder_warns() {
    let tmp = TempDir::new().unwrap();
    let report = scan_folder(tmp.path()).unwrap();
    assert!(report.library.is_empty());
    assert_eq!(
        report.warnings(),
        vec!["There are no proper files in the images folder.".to_string()]
    );
}

#[test]
fn scan_reports_nameless_pictures_separately() {
    let tmp = TempDir::new().unwrap();
    write_picture(&tmp.path().join("kot.gif"), 2, 2);
    fs::write(tmp.path().join(".gif"), "no name").unwrap();
    fs::write(tmp.path().join(".hidden"), "dotfile").unwrap();

    let report = scan_folder(tmp.path()).unwrap();
    assert_eq!(report.library.len(), 1);
    assert!(report.library.lookup("").is_none());

    let reason_of = |name: &str| {
        report
            .skipped
            .iter()
            .find(|s| s.file_name == name)
            .map(|s| s.reason)
    };
    assert_eq!(reason_of(".gif"), Some(SkipReason::EmptyName));
    assert_eq!(reason_of(".hidden"), Some(SkipReason::UnsupportedExtension));

    assert_eq!(
        report.warnings(),
        vec![
            "There are several files with unsupported extensions: .hidden".to_string(),
            "Some pictures have no name before the extension: .gif".to_string(),
        ]
    );
}

#[test]
fn scan_missing_folder_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("images");

    match scan_folder(&missing) {
        Err(LibraryError::FolderUnreadable { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected FolderUnreadable, got {other:?}"),
    }
}

#[test]
fn lookup_uses_normalised_word() {
    let tmp = TempDir::new().unwrap();
    build_images(tmp.path());
    let report = scan_folder(tmp.path()).unwrap();

    let word = normalize_word("ko\r\nt\n");
    let entry = report.library.lookup(&word).expect("kot must match");
    assert_eq!(entry.path, tmp.path().join("kot.gif"));

    assert!(report.library.lookup(&normalize_word("KOT")).is_none());
    assert!(report.library.lookup(&normalize_word("\n")).is_none());
}

#[test]
fn load_picture_decodes_each_format() {
    let tmp = TempDir::new().unwrap();
    build_images(tmp.path());

    let gif = load_picture(&tmp.path().join("kot.gif")).unwrap();
    assert_eq!((gif.width, gif.height), (2, 2));
    assert_eq!(gif.rgba.len(), 2 * 2 * 4);

    let jpg = load_picture(&tmp.path().join("pies.jpg")).unwrap();
    assert_eq!(jpg.size(), [4, 2]);

    let png = load_picture(&tmp.path().join("Dom.PNG")).unwrap();
    assert_eq!(png.size(), [6, 1]);
}

#[test]
fn load_picture_reports_corrupt_and_missing_files() {
    let tmp = TempDir::new().unwrap();
    let corrupt = tmp.path().join("zepsuty.png");
    fs::write(&corrupt, b"\x89PNG definitely not a png").unwrap();

    match load_picture(&corrupt) {
        Err(LibraryError::ImageUnreadable { path, .. }) => assert_eq!(path, corrupt),
        other => panic!("expected ImageUnreadable, got {other:?}"),
    }

    let missing = tmp.path().join("gone.gif");
    assert!(matches!(
        load_picture(&missing),
        Err(LibraryError::ImageUnreadable { .. })
    ));
}
