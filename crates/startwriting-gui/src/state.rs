/// Application state management.
///
/// Centralises all mutable state that the UI reads and writes. Nothing in
/// here touches egui, so every user-visible transition (checking a word,
/// retrying a broken picture, dismissing dialogs) can be driven from tests
/// without a window.
use startwriting_core::library::{scan_folder, ImageLibrary, ScanReport};
use startwriting_core::picture::{load_picture, Picture};
use startwriting_core::settings::Settings;
use startwriting_core::text::normalize_word;
use std::collections::VecDeque;
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Shown when the images folder cannot be read. The application closes
/// after this message.
pub const FOLDER_ERROR_MESSAGE: &str = "There is an error with image folder and the application \
     will close. Please fix the problem with folder and try again.";

/// Shown when a matched picture is missing or cannot be decoded.
pub const IMAGE_ERROR_MESSAGE: &str = "The crocodile has eaten this image!";

/// A message box waiting for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// Validation messages after a folder scan. OK only.
    Warnings(String),
    /// A picture could not be loaded. Retry or Cancel.
    ImageUnreadable {
        word: String,
        path: PathBuf,
        message: String,
    },
    /// The images folder is unreadable. OK closes the application.
    Fatal(String),
}

/// Result of the most recent check, for the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Found(String),
    NotFound(String),
    Failed(String),
}

/// The picture currently on screen.
#[derive(Debug, Clone)]
pub struct ShownPicture {
    pub word: String,
    pub path: PathBuf,
    pub picture: Picture,
    /// Bumped on every successful check so the UI knows to upload a new
    /// texture even when the same word is checked twice.
    pub revision: u64,
}

/// All application state.
pub struct AppState {
    // ── Configuration ──────────────────────────────────
    pub settings: Settings,
    pub images_dir: PathBuf,

    // ── Library ────────────────────────────────────────
    pub library: ImageLibrary,

    // ── Word box ───────────────────────────────────────
    /// Raw text box contents, line breaks included.
    pub text: String,

    // ── Results ────────────────────────────────────────
    pub picture: Option<ShownPicture>,
    pub last_check: Option<CheckOutcome>,
    picture_revision: u64,

    // ── Dialogs ────────────────────────────────────────
    /// Pending message boxes; only the front one is shown.
    pub dialogs: VecDeque<Dialog>,
    pub show_about: bool,
    /// Set once the user acknowledges a fatal error.
    pub should_close: bool,
}

impl AppState {
    /// Build the state from a completed startup scan.
    ///
    /// Validation warnings from the scan are queued as the first dialog.
    pub fn from_scan(settings: Settings, images_dir: PathBuf, report: ScanReport) -> Self {
        let mut state = Self {
            settings,
            images_dir,
            library: ImageLibrary::default(),
            text: String::new(),
            picture: None,
            last_check: None,
            picture_revision: 0,
            dialogs: VecDeque::new(),
            show_about: false,
            should_close: false,
        };
        state.install_report(report);
        state
    }

    /// The word that a check would look up right now.
    pub fn current_word(&self) -> String {
        normalize_word(&self.text)
    }

    /// The front dialog, if any.
    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialogs.front()
    }

    /// Look up the typed word and show its picture.
    ///
    /// A miss clears the picture. A match whose file cannot be decoded
    /// clears the picture and queues [`Dialog::ImageUnreadable`].
    ///
    /// Ignored while a dialog is waiting for an answer.
    pub fn check_word(&mut self) {
        if !self.dialogs.is_empty() {
            debug!("Check ignored while a dialog is open");
            return;
        }
        let word = self.current_word();
        self.check(word);
    }

    fn check(&mut self, word: String) {
        let Some(entry) = self.library.lookup(&word).cloned() else {
            info!("No picture for {:?}", word);
            self.picture = None;
            self.last_check = Some(CheckOutcome::NotFound(word));
            return;
        };

        match load_picture(&entry.path) {
            Ok(picture) => {
                info!("Showing {} for {:?}", entry.path.display(), word);
                self.picture_revision += 1;
                self.picture = Some(ShownPicture {
                    word: word.clone(),
                    path: entry.path,
                    picture,
                    revision: self.picture_revision,
                });
                self.last_check = Some(CheckOutcome::Found(word));
            }
            Err(e) => {
                self.picture = None;
                self.last_check = Some(CheckOutcome::Failed(word.clone()));
                self.dialogs.push_back(Dialog::ImageUnreadable {
                    word,
                    path: entry.path,
                    message: e.to_string(),
                });
            }
        }
    }

    /// Rescan the images folder and replace the library.
    ///
    /// Returns `false` when the folder could not be read; a
    /// [`Dialog::Fatal`] is queued in that case.
    pub fn rescan(&mut self) -> bool {
        match scan_folder(&self.images_dir) {
            Ok(report) => {
                self.install_report(report);
                true
            }
            Err(e) => {
                error!("{}", e);
                self.dialogs
                    .push_back(Dialog::Fatal(FOLDER_ERROR_MESSAGE.to_string()));
                false
            }
        }
    }

    /// Answer "Retry" on the front [`Dialog::ImageUnreadable`]: rescan the
    /// folder and check the same word again.
    ///
    /// Does nothing when the front dialog is of another kind.
    pub fn retry(&mut self) {
        let word = match self.dialogs.front() {
            Some(Dialog::ImageUnreadable { word, .. }) => word.clone(),
            _ => return,
        };
        self.dialogs.pop_front();

        info!("Retrying {:?}", word);
        if self.rescan() {
            self.check(word);
        }
    }

    /// Answer "Cancel" on the front dialog.
    pub fn cancel_dialog(&mut self) {
        self.dialogs.pop_front();
    }

    /// Answer "OK" on the front dialog. Acknowledging a fatal error requests
    /// application shutdown.
    pub fn acknowledge_dialog(&mut self) {
        if let Some(Dialog::Fatal(_)) = self.dialogs.pop_front() {
            self.should_close = true;
        }
    }

    /// Process exit status once the window has closed: 1 after a fatal
    /// folder error, 0 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.should_close {
            1
        } else {
            0
        }
    }

    /// Empty the word box and the picture.
    pub fn clear(&mut self) {
        self.text.clear();
        self.picture = None;
        self.last_check = None;
    }

    fn install_report(&mut self, report: ScanReport) {
        let warnings = report.warnings();
        if !warnings.is_empty() {
            self.dialogs.push_back(Dialog::Warnings(warnings.join("\n")));
        }
        self.library = report.library;
    }
}
