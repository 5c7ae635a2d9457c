//! Uniform grid index over committed label boxes
//!
//! Collision checks only visit boxes registered in the cells a candidate
//! touches, instead of every committed label. Results are identical to a
//! pairwise scan.

use crate::layout::canvas::{BoundingBox, Canvas};
use ndarray::Array2;
use std::ops::RangeInclusive;

/// Committed boxes bucketed by the grid cells they cover
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    origin: [i32; 2],
    cell_size: i32,
    /// Box indices per cell (indexed by `row`, `col`)
    cells: Array2<Vec<usize>>,
    boxes: Vec<BoundingBox>,
}

impl SpatialIndex {
    /// Create an empty index covering the canvas
    ///
    /// Boxes reaching past the canvas are clamped into the border cells.
    pub fn new(canvas: &Canvas, cell_size: i32) -> Self {
        let cell_size = cell_size.max(1);
        let cols = (canvas.width() / cell_size + 1).max(1) as usize;
        let rows = (canvas.height() / cell_size + 1).max(1) as usize;

        Self {
            origin: [canvas.min_x, canvas.min_y],
            cell_size,
            cells: Array2::from_elem((rows, cols), Vec::new()),
            boxes: Vec::new(),
        }
    }

    /// Grid dimensions (rows, cols)
    pub fn dim(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Number of committed boxes
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Whether no box is committed
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Commit a box and return its index
    pub fn insert(&mut self, bbox: BoundingBox) -> usize {
        let index = self.boxes.len();
        let (rows, cols) = self.cell_spans(&bbox);

        for row in rows {
            for col in cols.clone() {
                if let Some(cell) = self.cells.get_mut([row, col]) {
                    cell.push(index);
                }
            }
        }

        self.boxes.push(bbox);
        index
    }

    /// Index of a committed box overlapping the candidate, if any
    pub fn first_overlap(&self, candidate: &BoundingBox) -> Option<usize> {
        let (rows, cols) = self.cell_spans(candidate);

        for row in rows {
            for col in cols.clone() {
                let Some(cell) = self.cells.get([row, col]) else {
                    continue;
                };
                let hit = cell.iter().copied().find(|&index| {
                    self.boxes
                        .get(index)
                        .is_some_and(|committed| committed.overlaps(candidate))
                });
                if hit.is_some() {
                    return hit;
                }
            }
        }

        None
    }

    /// Cell rows and columns a box touches, clamped to the grid
    fn cell_spans(&self, bbox: &BoundingBox) -> (RangeInclusive<usize>, RangeInclusive<usize>) {
        let (rows, cols) = self.cells.dim();
        let col_span = self.axis_span(bbox.min[0], bbox.max[0], self.origin[0], cols);
        let row_span = self.axis_span(bbox.min[1], bbox.max[1], self.origin[1], rows);
        (row_span, col_span)
    }

    fn axis_span(&self, min: i32, max: i32, origin: i32, cells: usize) -> RangeInclusive<usize> {
        let last = cells.saturating_sub(1) as i32;
        // Boxes span min inclusive to max exclusive
        let end = max.saturating_sub(1).max(min);
        let first_cell = min.saturating_sub(origin).div_euclid(self.cell_size).clamp(0, last);
        let last_cell = end.saturating_sub(origin).div_euclid(self.cell_size).clamp(0, last);
        (first_cell as usize)..=(last_cell as usize)
    }
}
