//! Crop geometry and the crop-to-asset raster transform.
//!
//! Accepts raw image bytes (PNG, JPEG, BMP, WebP) and a pixel-space
//! crop rectangle, and produces a JPEG of exactly the rectangle's
//! pixels at the rectangle's own dimensions -- no rescaling.
//!
//! The rectangle itself comes from [`CropViewport::selection`], which
//! turns the interactive state (zoom + pan) into an aspect-locked
//! rectangle that always lies fully inside the source bounds.

use serde::{Deserialize, Serialize};

/// Minimum interactive zoom factor (1.0 = the whole fitted rectangle).
pub const MIN_ZOOM: f32 = 1.0;

/// Maximum interactive zoom factor.
pub const MAX_ZOOM: f32 = 3.0;

/// JPEG encode quality for produced assets. High enough to keep menu
/// text legible, low enough to bound upload size.
pub const JPEG_QUALITY: u8 = 95;

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// An exact rational aspect ratio.
///
/// Kept as an integer pair rather than an `f64` so slot targets
/// compare exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AspectRatio {
    /// Width term.
    pub w: u32,
    /// Height term.
    pub h: u32,
}

impl AspectRatio {
    /// 16:9 -- the main banner slot.
    pub const WIDE: Self = Self { w: 16, h: 9 };

    /// 4:3 -- both side banner slots.
    pub const CARD: Self = Self { w: 4, h: 3 };

    /// Width divided by height.
    #[must_use]
    pub fn ratio(self) -> f64 {
        f64::from(self.w) / f64::from(self.h)
    }
}

/// A crop rectangle in source-image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    /// Whether the rectangle lies fully inside `bounds`.
    #[must_use]
    pub const fn fits(self, bounds: Dimensions) -> bool {
        self.width > 0
            && self.height > 0
            && self.x.checked_add(self.width).is_some()
            && self.y.checked_add(self.height).is_some()
            && self.x + self.width <= bounds.width
            && self.y + self.height <= bounds.height
    }

    /// Width divided by height.
    #[must_use]
    pub fn ratio(self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

/// Interactive crop selection state: zoom and normalized pan.
///
/// `zoom` is clamped to [`MIN_ZOOM`]..=[`MAX_ZOOM`]. Pan is normalized
/// per axis: `0.0` puts the selection at the left/top edge, `1.0` at
/// the right/bottom edge, `0.5` centers it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropViewport {
    zoom: f32,
    pan_x: f32,
    pan_y: f32,
}

impl Default for CropViewport {
    fn default() -> Self {
        Self {
            zoom: MIN_ZOOM,
            pan_x: 0.5,
            pan_y: 0.5,
        }
    }
}

impl CropViewport {
    /// A centered, unzoomed viewport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current zoom factor.
    #[must_use]
    pub const fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Set the zoom factor, clamped to the supported range.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Current normalized pan as `(x, y)`.
    #[must_use]
    pub const fn pan(&self) -> (f32, f32) {
        (self.pan_x, self.pan_y)
    }

    /// Shift the pan by normalized deltas, clamped to `[0, 1]`.
    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.pan_x = (self.pan_x + dx).clamp(0.0, 1.0);
        self.pan_y = (self.pan_y + dy).clamp(0.0, 1.0);
    }

    /// Derive the pixel-space crop rectangle for a source image.
    ///
    /// The base rectangle is the largest `aspect`-shaped rectangle
    /// that fits inside `natural`; zoom shrinks it by `1/zoom`, and
    /// pan positions it across the remaining slack. Integer rounding
    /// never pushes the result outside the source bounds.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn selection(&self, natural: Dimensions, aspect: AspectRatio) -> CropRect {
        let nw = f64::from(natural.width);
        let nh = f64::from(natural.height);
        let target = aspect.ratio();

        let (base_w, base_h) = if nw / nh > target {
            (nh * target, nh)
        } else {
            (nw, nw / target)
        };

        let zoom = f64::from(self.zoom.clamp(MIN_ZOOM, MAX_ZOOM));
        let width = ((base_w / zoom).round().max(1.0) as u32).min(natural.width);
        let height = ((base_h / zoom).round().max(1.0) as u32).min(natural.height);

        let slack_x = f64::from(natural.width - width);
        let slack_y = f64::from(natural.height - height);
        let x = (f64::from(self.pan_x.clamp(0.0, 1.0)) * slack_x).round() as u32;
        let y = (f64::from(self.pan_y.clamp(0.0, 1.0)) * slack_y).round() as u32;

        CropRect {
            x,
            y,
            width,
            height,
        }
    }
}

/// Errors from decoding, cropping, or encoding a source image.
#[derive(Debug, thiserror::Error)]
pub enum CropError {
    /// The input image bytes were empty.
    #[error("input image data is empty")]
    EmptyInput,

    /// Failed to decode the input image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// The crop rectangle does not lie inside the decoded image.
    #[error("crop rectangle {rect:?} exceeds image bounds {bounds:?}")]
    OutOfBounds {
        rect: CropRect,
        bounds: Dimensions,
    },

    /// JPEG encoding of the cropped raster failed.
    #[error("failed to encode cropped image: {0}")]
    JpegEncode(String),
}

/// Decode `bytes` to learn the source's natural dimensions.
///
/// # Errors
///
/// Returns [`CropError::EmptyInput`] if `bytes` is empty.
/// Returns [`CropError::ImageDecode`] if the format is unrecognized
/// or the data is corrupt.
pub fn probe_dimensions(bytes: &[u8]) -> Result<Dimensions, CropError> {
    if bytes.is_empty() {
        return Err(CropError::EmptyInput);
    }
    let img = image::load_from_memory(bytes)?;
    Ok(Dimensions {
        width: img.width(),
        height: img.height(),
    })
}

/// Render exactly `rect`'s pixels into a JPEG at [`JPEG_QUALITY`].
///
/// The output raster has the rectangle's own dimensions -- no
/// rescaling is applied. The rectangle's aspect ratio is an
/// external-input contract (the interactive selection step locks it
/// to the slot target) and is not re-validated here.
///
/// # Errors
///
/// Returns [`CropError::EmptyInput`] if `bytes` is empty.
/// Returns [`CropError::ImageDecode`] if the image cannot be decoded;
/// no state is mutated on failure.
/// Returns [`CropError::OutOfBounds`] if `rect` escapes the decoded
/// bounds.
/// Returns [`CropError::JpegEncode`] if the encoder fails.
pub fn crop_to_jpeg(bytes: &[u8], rect: CropRect) -> Result<Vec<u8>, CropError> {
    if bytes.is_empty() {
        return Err(CropError::EmptyInput);
    }

    let decoded = image::load_from_memory(bytes)?;
    let bounds = Dimensions {
        width: decoded.width(),
        height: decoded.height(),
    };
    if !rect.fits(bounds) {
        return Err(CropError::OutOfBounds { rect, bounds });
    }

    let cropped = decoded
        .crop_imm(rect.x, rect.y, rect.width, rect.height)
        .to_rgb8();

    let mut out = Vec::new();
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY);
    cropped
        .write_with_encoder(encoder)
        .map_err(|e| CropError::JpegEncode(e.to_string()))?;
    Ok(out)
}
