use tracing::debug;

use crate::config::{ContourOptions, PathStyle};
use crate::contour::{Contour, find_contours};
use crate::mask::BilevelMask;
use crate::svg::{PathCommand, SvgDocument, VectorPath};
use crate::{LineTraceError, LineTraceResult};

use super::MaskVectorizer;

/// Options for tracing the mask into polyline SVG paths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathOptions {
    pub contours: ContourOptions,
    pub style: PathStyle,
}

/// Border-following vectorizer that emits one closed polyline per contour.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgPathVectorizer;

impl MaskVectorizer for SvgPathVectorizer {
    type Options = PathOptions;
    type Output = SvgDocument;

    fn vectorize(
        &self,
        mask: &BilevelMask,
        options: &Self::Options,
    ) -> LineTraceResult<Self::Output> {
        trace_to_svg_document(mask, options)
    }
}

/// Trace a mask and emit its contours into a document sized to the mask.
pub fn trace_to_svg_document(
    mask: &BilevelMask,
    options: &PathOptions,
) -> LineTraceResult<SvgDocument> {
    let contours = find_contours(mask, &options.contours);
    let (w, h) = mask.dimensions();
    let mut document = SvgDocument::new(w, h);
    emit_paths(&mut document, &contours, &options.style)?;
    Ok(document)
}

/// Append one closed path per drawable contour, in contour order.
///
/// Contours with fewer than two points are skipped. Returns the number of paths added.
/// A point outside the document canvas aborts the whole emission and leaves the
/// document untouched.
pub fn emit_paths(
    document: &mut SvgDocument,
    contours: &[Contour],
    style: &PathStyle,
) -> LineTraceResult<usize> {
    let canvas = (document.width, document.height);
    let mut paths = Vec::with_capacity(contours.len());
    for contour in contours {
        if let Some(path) = contour_to_path(contour, style) {
            check_bounds(contour, canvas)?;
            paths.push(path);
        }
    }

    let emitted = paths.len();
    debug!(
        contours = contours.len(),
        emitted,
        skipped = contours.len() - emitted,
        "emitted contour paths"
    );
    document.paths.extend(paths);
    Ok(emitted)
}

/// Build the closed path for a contour, or `None` when it has fewer than two points.
pub fn contour_to_path(contour: &Contour, style: &PathStyle) -> Option<VectorPath> {
    let (first, rest) = contour.points.split_first()?;
    if rest.is_empty() {
        return None;
    }

    let mut commands = Vec::with_capacity(contour.points.len() + 1);
    commands.push(PathCommand::MoveTo(first.x, first.y));
    commands.extend(rest.iter().map(|p| PathCommand::LineTo(p.x, p.y)));
    commands.push(PathCommand::Close);

    Some(VectorPath {
        commands,
        style: style.clone(),
    })
}

fn check_bounds(contour: &Contour, canvas: (u32, u32)) -> LineTraceResult<()> {
    let (w, h) = canvas;
    match contour.points.iter().find(|p| p.x >= w || p.y >= h) {
        Some(p) => Err(LineTraceError::ContourOutOfBounds {
            point: (p.x, p.y),
            canvas,
        }),
        None => Ok(()),
    }
}
