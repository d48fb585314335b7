/// Supported image formats and their lookup priority.
///
/// When several files share a name, the format with the lowest priority
/// value wins: GIF first, then PNG, then JPG, then JPEG.
use std::fmt;

/// An image format the library accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ImageFormat {
    Gif,
    Png,
    Jpg,
    Jpeg,
}

impl ImageFormat {
    /// Parse a file extension, ignoring case and an optional leading dot.
    ///
    /// Lowercases into a fixed stack buffer; anything longer than the
    /// longest supported extension is rejected without allocating.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        let bytes = ext.as_bytes();
        if bytes.len() > 4 {
            return None;
        }

        let mut lower = [0u8; 4];
        for (dest, &src) in lower.iter_mut().zip(bytes.iter()) {
            *dest = src.to_ascii_lowercase();
        }

        match &lower[..bytes.len()] {
            b"gif" => Some(Self::Gif),
            b"png" => Some(Self::Png),
            b"jpg" => Some(Self::Jpg),
            b"jpeg" => Some(Self::Jpeg),
            _ => None,
        }
    }

    /// Lookup priority: 0 is preferred over 1, and so on.
    pub fn priority(self) -> u8 {
        match self {
            Self::Gif => 0,
            Self::Png => 1,
            Self::Jpg => 2,
            Self::Jpeg => 3,
        }
    }

    /// Canonical lowercase extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Gif => "gif",
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Jpeg => "jpeg",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
