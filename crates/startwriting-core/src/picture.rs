/// Picture decoding — turns an image file into RGBA pixels ready for upload
/// as a GPU texture.
use crate::error::LibraryError;
use std::path::Path;
use tracing::{debug, warn};

/// A decoded picture, RGBA8, row-major, top-to-bottom.
#[derive(Clone)]
pub struct Picture {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl std::fmt::Debug for Picture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Picture")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

impl Picture {
    /// `[width, height]` as `usize`, the shape egui expects.
    pub fn size(&self) -> [usize; 2] {
        [self.width as usize, self.height as usize]
    }
}

/// Decode the image at `path`.
///
/// For animated GIFs only the first frame is decoded. A missing file, a
/// truncated file, or a file whose content is not an image all yield
/// [`LibraryError::ImageUnreadable`].
pub fn load_picture(path: &Path) -> Result<Picture, LibraryError> {
    let img = image::open(path).map_err(|source| {
        warn!("Failed to load {}: {}", path.display(), source);
        LibraryError::ImageUnreadable {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let rgba = img.to_rgba8();
    debug!(
        "Decoded {} ({}x{})",
        path.display(),
        rgba.width(),
        rgba.height()
    );

    Ok(Picture {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}
