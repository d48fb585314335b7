/// Errors raised while reading the image folder or decoding a picture.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    /// The images folder is missing or cannot be listed. Fatal at startup.
    #[error("cannot read image folder {}: {source}", .path.display())]
    FolderUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A matched image file disappeared or is not a valid image.
    #[error("cannot load image {}: {source}", .path.display())]
    ImageUnreadable {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
