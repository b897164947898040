pub mod config;
pub mod contour;
pub mod error;
pub mod loader;
pub mod mask;
pub mod svg;
pub mod vectorizer;

pub use config::{BinarizeOptions, ChainApproximation, ContourOptions, PathStyle, RetrievalMode};
pub use contour::{BorderKind, Contour, find_contours};
pub use error::{LineTraceError, LineTraceResult};
pub use mask::BilevelMask;
pub use svg::{PathCommand, SvgDocument, VectorPath};
pub use vectorizer::MaskVectorizer;
pub use vectorizer::path::{PathOptions, SvgPathVectorizer, emit_paths, trace_to_svg_document};

use std::path::Path;

use image::DynamicImage;

use crate::loader::load_image;
use crate::mask::binarize;

/// Entry point for configuring and running raster-to-line-art tracing.
#[derive(Debug, Clone, Default)]
pub struct LineTrace {
    binarize: BinarizeOptions,
    /// Used by [`MaskHandle::contours`] and [`MaskHandle::to_svg`].
    default_path_options: PathOptions,
}

impl LineTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the options used to binarize loaded images.
    pub fn with_binarize_options(mut self, options: BinarizeOptions) -> Self {
        self.binarize = options;
        self
    }

    /// Set the contour options used when none are given explicitly.
    pub fn with_contour_options(mut self, options: ContourOptions) -> Self {
        self.default_path_options.contours = options;
        self
    }

    /// Set the style applied to every emitted path.
    pub fn with_path_style(mut self, style: PathStyle) -> Self {
        self.default_path_options.style = style;
        self
    }

    /// Decode a single image, wrapped in a [`LoadedImage`].
    pub fn for_image(&self, image_path: impl AsRef<Path>) -> LineTraceResult<LoadedImage> {
        let image = load_image(image_path.as_ref())?;
        Ok(self.for_raster(image))
    }

    /// Wrap an already decoded raster.
    pub fn for_raster(&self, image: DynamicImage) -> LoadedImage {
        LoadedImage {
            image,
            binarize: self.binarize,
            default_path_options: self.default_path_options.clone(),
        }
    }
}

/// A decoded raster from which the mask and vector output are derived.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    image: DynamicImage,
    binarize: BinarizeOptions,
    default_path_options: PathOptions,
}

impl LoadedImage {
    /// Get a reference to the decoded raster.
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }

    /// Binarize the raster with the configured cutoff.
    pub fn mask(&self) -> MaskHandle {
        MaskHandle {
            mask: binarize(&self.image, &self.binarize),
            default_path_options: self.default_path_options.clone(),
        }
    }
}

/// A bilevel mask together with the default options for tracing it.
#[derive(Debug, Clone)]
pub struct MaskHandle {
    mask: BilevelMask,
    default_path_options: PathOptions,
}

impl MaskHandle {
    /// Wrap an existing mask with default path options.
    pub fn new(mask: BilevelMask) -> Self {
        Self {
            mask,
            default_path_options: PathOptions::default(),
        }
    }

    /// Get a reference to the mask.
    pub fn mask(&self) -> &BilevelMask {
        &self.mask
    }

    /// Trace the mask borders with the default contour options.
    pub fn contours(&self) -> Vec<Contour> {
        find_contours(&self.mask, &self.default_path_options.contours)
    }

    /// Trace the mask into an SVG document with the default path options.
    pub fn to_svg(&self) -> LineTraceResult<SvgDocument> {
        self.trace(&SvgPathVectorizer, &self.default_path_options)
    }

    /// Trace the mask using the specified vectorizer and options.
    pub fn trace<V>(&self, vectorizer: &V, options: &V::Options) -> LineTraceResult<V::Output>
    where
        V: MaskVectorizer,
    {
        vectorizer.vectorize(&self.mask, options)
    }
}
