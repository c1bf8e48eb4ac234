//! Row-major grid packing.

use crate::config::MAX_ROW_SPAN;
use crate::types::{GridPosition, GridSpan};

/// Places spans on a fixed-width grid in order.
///
/// A cursor walks left to right, top to bottom. Each widget goes into the
/// first free slot at or after the cursor that fits its span; a widget wider
/// than what is left of the row moves to the next row. Spans wider than the
/// grid are clamped to the column count, and row spans to [`MAX_ROW_SPAN`].
pub struct GridPacker {
    columns: u32,
    occupied: Vec<Vec<bool>>,
    row: u32,
    column: u32,
}

impl GridPacker {
    pub fn new(columns: u32) -> Self {
        Self {
            columns: columns.max(1),
            occupied: Vec::new(),
            row: 0,
            column: 0,
        }
    }

    /// Place the next widget.
    pub fn place(&mut self, span: GridSpan) -> GridPosition {
        let column_span = span.columns.clamp(1, self.columns);
        let row_span = span.rows.clamp(1, MAX_ROW_SPAN);

        loop {
            if self.column + column_span > self.columns {
                self.row += 1;
                self.column = 0;
                continue;
            }

            if self.is_free(self.row, self.column, column_span, row_span) {
                let position = GridPosition {
                    column: self.column,
                    row: self.row,
                    column_span,
                    row_span,
                };
                self.occupy(&position);
                self.column += column_span;
                return position;
            }

            self.column += 1;
        }
    }

    fn is_free(&self, row: u32, column: u32, column_span: u32, row_span: u32) -> bool {
        (row..row + row_span).all(|r| {
            self.occupied.get(r as usize).map_or(true, |cells| {
                (column..column + column_span).all(|c| !cells[c as usize])
            })
        })
    }

    fn occupy(&mut self, position: &GridPosition) {
        let needed = (position.row + position.row_span) as usize;
        let width = self.columns as usize;
        if self.occupied.len() < needed {
            self.occupied.resize_with(needed, || vec![false; width]);
        }
        for (column, row) in position.cells() {
            self.occupied[row as usize][column as usize] = true;
        }
    }
}

/// Place `spans` in order on a grid with `columns` columns.
pub fn pack(spans: &[GridSpan], columns: u32) -> Vec<GridPosition> {
    let mut packer = GridPacker::new(columns);
    spans.iter().map(|span| packer.place(*span)).collect()
}
