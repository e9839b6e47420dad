//! The rasterization backend seam.

use std::fmt;
use std::path::Path;

use horizon_decor_buttons::VariantLoader;

/// Turns resolved image files into backend pixel data.
///
/// Decoding, scaling and drawing all belong to the backend; this crate only
/// decides which file to hand it.
pub trait AssetBackend {
    /// Decoded image handle.
    type Handle;
    /// Decode error.
    type Error: fmt::Display;

    /// Decode the image at `path`.
    fn decode(&mut self, path: &Path) -> Result<Self::Handle, Self::Error>;
}

/// Feeds a backend to [`ButtonStyle::load`](horizon_decor_buttons::ButtonStyle::load).
pub struct BackendLoader<'a, B>(pub &'a mut B);

impl<B: AssetBackend> VariantLoader for BackendLoader<'_, B> {
    type Handle = B::Handle;
    type Error = B::Error;

    fn load_variant(&mut self, path: &Path) -> Result<Self::Handle, Self::Error> {
        self.0.decode(path)
    }
}
