/// StartWriting Core — image library, word lookup, and text highlighting.
///
/// This crate contains all business logic with zero UI dependencies.
/// The GUI crate only wires these pieces to widgets.
///
/// # Modules
///
/// - [`library`] — Image folder scan and extension-priority resolution.
/// - [`text`] — Word normalisation and vowel highlighting.
/// - [`picture`] — Decoding image files into RGBA pixels.
/// - [`settings`] — Optional `startwriting.json` configuration.
/// - [`error`] — Error types shared by the modules above.
pub mod error;
pub mod library;
pub mod picture;
pub mod settings;
pub mod text;

pub use error::LibraryError;
