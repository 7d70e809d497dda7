//! Opaque image handles and the host loader seam.
//!
//! The engine never decodes or draws pixels. Hosts own an asset cache of
//! decoded bitmaps; a motif holds only an opaque [`ImageHandle`] into that
//! cache plus the natural dimensions reported at load time. Decoding is
//! asynchronous on the host side — by the time a motif is created the
//! bitmap has either decoded or failed, so the seam here is synchronous.

use uuid::Uuid;

/// Opaque reference to a decoded bitmap in the host's asset cache.
pub type ImageHandle = Uuid;

/// A successfully decoded bitmap: its cache handle and natural pixel size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadedImage {
    pub handle: ImageHandle,
    /// Natural bitmap width in pixels.
    pub width: f64,
    /// Natural bitmap height in pixels.
    pub height: f64,
}

/// A bitmap source that could not be decoded.
#[derive(Debug, Clone, thiserror::Error)]
#[error("image source failed to load: {url}")]
pub struct ImageLoadError {
    /// The URL or asset path that failed.
    pub url: String,
}

/// Host-provided bitmap loader.
///
/// Implementations decode `source` (a URL or asset path), register the
/// result in their asset cache, and report the handle plus natural
/// dimensions.
pub trait ImageLoader {
    fn load(&mut self, source: &str) -> Result<LoadedImage, ImageLoadError>;
}
