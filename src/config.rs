/// Options describing how a raster is turned into a bilevel mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinarizeOptions {
    /// Luma cutoff (0-255). Samples above it fall on the "light" side.
    pub threshold: u8,
    /// Treat dark samples as foreground.
    pub invert: bool,
}

impl Default for BinarizeOptions {
    fn default() -> Self {
        Self {
            threshold: 127,
            invert: true,
        }
    }
}

/// Which borders are kept after tracing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RetrievalMode {
    /// Outer and hole borders, with parent links.
    #[default]
    Tree,
    /// Outer and hole borders, without parent links.
    List,
    /// Only top-level outer borders.
    External,
}

/// How the traced boundary pixels are stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChainApproximation {
    /// Keep every boundary pixel.
    None,
    /// Collapse straight horizontal, vertical and diagonal runs to their endpoints.
    #[default]
    Simple,
}

/// Options for contour extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContourOptions {
    pub retrieval: RetrievalMode,
    pub approximation: ChainApproximation,
}

impl ContourOptions {
    /// Set the retrieval mode.
    pub fn with_retrieval(mut self, retrieval: RetrievalMode) -> Self {
        self.retrieval = retrieval;
        self
    }

    /// Set the chain approximation.
    pub fn with_approximation(mut self, approximation: ChainApproximation) -> Self {
        self.approximation = approximation;
        self
    }
}

/// Paint attributes applied to every emitted path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathStyle {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f32,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            fill: "none".to_string(),
            stroke: "black".to_string(),
            stroke_width: 1.0,
        }
    }
}
