//! Topological border following (Suzuki & Abe, 1985) over a [`BilevelMask`].
//!
//! Foreground is 8-connected, background 4-connected. The mask is copied into a
//! label grid with a one-pixel background frame, so borders touching the image
//! edge are closed like any other. Each traced border stamps its number onto the
//! pixels it visits; those stamps are both the visited-marking that stops a border
//! from being traced twice and the source of the parent links.

use imageproc::point::Point;
use tracing::debug;

use crate::config::{ChainApproximation, ContourOptions, RetrievalMode};
use crate::mask::BilevelMask;

/// Neighbour offsets, counter-clockwise on screen starting east.
const DX: [isize; 8] = [1, 1, 0, -1, -1, -1, 0, 1];
const DY: [isize; 8] = [0, -1, -1, -1, 0, 1, 1, 1];
const EAST: usize = 0;
const WEST: usize = 4;

/// Label carried by the virtual frame around the image.
const FRAME: i32 = 1;

/// Whether a border separates a region from its surroundings or from a hole inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderKind {
    Outer,
    Hole,
}

/// A closed boundary loop in pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    /// Boundary pixels in traversal order. Outer borders run counter-clockwise on
    /// screen, hole borders clockwise.
    pub points: Vec<Point<u32>>,
    pub kind: BorderKind,
    /// Index of the enclosing contour in the same list, if any.
    pub parent: Option<usize>,
}

impl Contour {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A contour needs at least two points to describe any geometry.
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2
    }
}

/// Padded label grid. Cells hold 0 (background), 1 (unvisited foreground) or the
/// signed number of the border that visited them.
struct LabelGrid {
    stride: usize,
    cells: Vec<i32>,
}

impl LabelGrid {
    fn from_mask(mask: &BilevelMask) -> Self {
        let (w, h) = mask.dimensions();
        let stride = w as usize + 2;
        let mut cells = vec![0; stride * (h as usize + 2)];
        for (x, y, px) in mask.image().enumerate_pixels() {
            if px[0] != 0 {
                cells[(y as usize + 1) * stride + x as usize + 1] = 1;
            }
        }
        Self { stride, cells }
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    /// Index of the neighbour of `idx` in direction `dir`.
    ///
    /// Only called for foreground cells, which never sit on the frame, so the
    /// result is always in bounds.
    fn neighbor(&self, idx: usize, dir: usize) -> usize {
        let offset = DY[dir] * self.stride as isize + DX[dir];
        idx.wrapping_add_signed(offset)
    }

    /// Image coordinates of a padded cell.
    fn point(&self, idx: usize) -> Point<u32> {
        let x = idx % self.stride - 1;
        let y = idx / self.stride - 1;
        Point::new(x as u32, y as u32)
    }
}

/// Trace every border in the mask and return them in discovery order.
pub fn find_contours(mask: &BilevelMask, options: &ContourOptions) -> Vec<Contour> {
    let (w, h) = mask.dimensions();
    if w == 0 || h == 0 {
        return Vec::new();
    }

    let mut grid = LabelGrid::from_mask(mask);
    let mut contours: Vec<Contour> = Vec::new();
    // Border numbers start above the frame; contour `i` carries number `i + 2`.
    let mut nbd = FRAME;

    for y in 1..=h as usize {
        let mut lnbd = FRAME;
        for x in 1..=w as usize {
            let idx = grid.index(x, y);
            let here = grid.cells[idx];
            if here == 0 {
                continue;
            }

            let start = if here == 1 && grid.cells[idx - 1] == 0 {
                Some((BorderKind::Outer, WEST))
            } else if here >= 1 && grid.cells[idx + 1] == 0 {
                if here > 1 {
                    lnbd = here;
                }
                Some((BorderKind::Hole, EAST))
            } else {
                None
            };

            if let Some((kind, from)) = start {
                nbd += 1;
                let parent = parent_for(kind, lnbd, &contours);
                let points = follow_border(&mut grid, idx, from, nbd);
                let points = match options.approximation {
                    ChainApproximation::None => points,
                    ChainApproximation::Simple => simplify_chain(points),
                };
                contours.push(Contour {
                    points,
                    kind,
                    parent,
                });
            }

            let label = grid.cells[idx];
            if label != 1 {
                lnbd = label.abs();
            }
        }
    }

    let contours = retrieve(contours, options.retrieval);
    debug!(
        width = w,
        height = h,
        contours = contours.len(),
        retrieval = ?options.retrieval,
        approximation = ?options.approximation,
        "traced mask borders"
    );
    contours
}

/// Decide the parent of a new border from the border last crossed on this row.
fn parent_for(kind: BorderKind, lnbd: i32, contours: &[Contour]) -> Option<usize> {
    if lnbd == FRAME {
        return None;
    }
    let last = (lnbd - 2) as usize;
    let last_kind = contours[last].kind;
    match (kind, last_kind) {
        (BorderKind::Outer, BorderKind::Outer) | (BorderKind::Hole, BorderKind::Hole) => {
            contours[last].parent
        }
        (BorderKind::Outer, BorderKind::Hole) | (BorderKind::Hole, BorderKind::Outer) => Some(last),
    }
}

/// Walk one border starting at `start`, whose neighbour in direction `from` is background.
fn follow_border(grid: &mut LabelGrid, start: usize, from: usize, nbd: i32) -> Vec<Point<u32>> {
    // Clockwise from the background neighbour to the first foreground neighbour.
    let first_dir = (0..8)
        .map(|k| (from + 8 - k) % 8)
        .find(|&dir| grid.cells[grid.neighbor(start, dir)] != 0);

    let Some(first_dir) = first_dir else {
        // Isolated pixel.
        grid.cells[start] = -nbd;
        return vec![grid.point(start)];
    };

    let first = grid.neighbor(start, first_dir);
    let mut current = start;
    // Direction from `current` back to the pixel we came from.
    let mut back = first_dir;
    let mut points = Vec::new();

    loop {
        points.push(grid.point(current));

        let mut east_is_background = false;
        let mut next_dir = back;
        for k in 1..=8 {
            let dir = (back + k) % 8;
            if grid.cells[grid.neighbor(current, dir)] != 0 {
                next_dir = dir;
                break;
            }
            if dir == EAST {
                east_is_background = true;
            }
        }

        if east_is_background {
            grid.cells[current] = -nbd;
        } else if grid.cells[current] == 1 {
            grid.cells[current] = nbd;
        }

        let next = grid.neighbor(current, next_dir);
        if next == start && current == first {
            break;
        }
        back = (next_dir + 4) % 8;
        current = next;
    }

    points
}

/// Drop points that sit in the middle of a straight run.
///
/// The first point always survives, as does every point where the step direction
/// changes.
pub fn simplify_chain(points: Vec<Point<u32>>) -> Vec<Point<u32>> {
    let n = points.len();
    if n < 3 {
        return points;
    }

    let step = |a: Point<u32>, b: Point<u32>| {
        (
            (i64::from(b.x) - i64::from(a.x)).signum(),
            (i64::from(b.y) - i64::from(a.y)).signum(),
        )
    };

    let mut kept = Vec::with_capacity(n);
    kept.push(points[0]);
    for i in 1..n {
        let incoming = step(points[i - 1], points[i]);
        let outgoing = step(points[i], points[(i + 1) % n]);
        if incoming != outgoing {
            kept.push(points[i]);
        }
    }
    kept
}

fn retrieve(contours: Vec<Contour>, mode: RetrievalMode) -> Vec<Contour> {
    match mode {
        RetrievalMode::Tree => contours,
        RetrievalMode::List => contours
            .into_iter()
            .map(|c| Contour { parent: None, ..c })
            .collect(),
        RetrievalMode::External => contours
            .into_iter()
            .filter(|c| c.kind == BorderKind::Outer && c.parent.is_none())
            .collect(),
    }
}
