/*
 * Spatial Grid Module
 *
 * This module defines the SpatialGrid struct for efficient neighbor lookups.
 * It divides the world into square cells; every agent is bucketed in the
 * single cell containing its position, keyed by id and pointing at the
 * agent's slot in the World registry. The grid owns no agents.
 *
 * Radius queries gather whole cells whose offset (i, j) from the query
 * cell satisfies i^2 + j^2 <= r^2, with r = ceil(radius / cell_size).
 * This deliberately over-approximates the circle near its boundary.
 * Queries do not wrap across world edges.
 */

use std::collections::HashMap;

use nannou::prelude::Vec2;

use crate::agent::EntityId;
use crate::error::{Result, SimError};

// Upper bound on the number of cells a grid may allocate
pub const MAX_CELLS: usize = 1 << 22;

pub struct SpatialGrid {
    pub cell_size: f32,
    pub cols: usize,
    pub rows: usize,
    // Row-major, id -> registry slot
    cells: Vec<HashMap<EntityId, usize>>,
    len: usize,
}

impl SpatialGrid {
    pub fn new(cell_size: f32, world_width: f32, world_height: f32) -> Result<Self> {
        let (cols, rows) = Self::dimensions(cell_size, world_width, world_height)?;
        let mut cells = Vec::with_capacity(cols * rows);
        cells.resize_with(cols * rows, HashMap::new);

        Ok(Self {
            cell_size,
            cols,
            rows,
            cells,
            len: 0,
        })
    }

    // Columns and rows needed to cover the world, at most MAX_CELLS in total
    pub fn dimensions(cell_size: f32, world_width: f32, world_height: f32) -> Result<(usize, usize)> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(SimError::InvalidConfig("cell_size must be positive and finite"));
        }
        if !(world_width.is_finite() && world_height.is_finite()) {
            return Err(SimError::InvalidConfig("world dimensions must be finite"));
        }
        let cols = (world_width / cell_size).ceil().max(1.0);
        let rows = (world_height / cell_size).ceil().max(1.0);
        if cols > MAX_CELLS as f32 || rows > MAX_CELLS as f32 {
            return Err(SimError::InvalidConfig("cell_size is too small for the world"));
        }
        let (cols, rows) = (cols as usize, rows as usize);
        match cols.checked_mul(rows) {
            Some(cells) if cells <= MAX_CELLS => Ok((cols, rows)),
            _ => Err(SimError::InvalidConfig("cell_size is too small for the world")),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // Cell (column, row) holding `position`, clamped into the grid
    #[inline]
    pub fn cell_of(&self, position: Vec2) -> (usize, usize) {
        let col = (position.x / self.cell_size).floor().clamp(0.0, (self.cols - 1) as f32) as usize;
        let row = (position.y / self.cell_size).floor().clamp(0.0, (self.rows - 1) as f32) as usize;
        (col, row)
    }

    #[inline]
    fn cell_index(&self, position: Vec2) -> usize {
        let (col, row) = self.cell_of(position);
        row * self.cols + col
    }

    pub fn insert(&mut self, id: EntityId, slot: usize, position: Vec2) {
        let index = self.cell_index(position);
        if self.cells[index].insert(id, slot).is_none() {
            self.len += 1;
        }
    }

    /// Remove `id` from the cell containing `last_known_position`.
    ///
    /// Panics if the agent is not bucketed there, since the index and the
    /// registry have then drifted apart.
    pub fn remove(&mut self, id: EntityId, last_known_position: Vec2) {
        let index = self.cell_index(last_known_position);
        let removed = self.cells[index].remove(&id);
        assert!(
            removed.is_some(),
            "spatial grid out of sync: {id} not found in cell {:?}",
            self.cell_of(last_known_position)
        );
        self.len -= 1;
    }

    // old_position must be the pre-update position
    pub fn move_agent(&mut self, id: EntityId, slot: usize, old_position: Vec2, new_position: Vec2) {
        self.remove(id, old_position);
        self.insert(id, slot, new_position);
    }

    pub fn contains(&self, id: EntityId, position: Vec2) -> bool {
        self.cells[self.cell_index(position)].contains_key(&id)
    }

    // Registry slots of every agent bucketed near `center`. Order is unspecified.
    pub fn query_radius(&self, center: Vec2, radius: f32) -> Vec<usize> {
        let mut result = Vec::new();
        self.query_radius_into(center, radius, &mut result);
        result
    }

    pub fn query_radius_into(&self, center: Vec2, radius: f32, result: &mut Vec<usize>) {
        if !(center.x.is_finite() && center.y.is_finite()) {
            return;
        }

        // Unclamped so that queries outside the grid are clipped, not pulled in
        let cell_size = f64::from(self.cell_size);
        let grid_x = (f64::from(center.x) / cell_size).floor();
        let grid_y = (f64::from(center.y) / cell_size).floor();
        let r = (f64::from(radius.max(0.0)) / cell_size).ceil();
        let r_squared = r * r;

        // Only offsets that land inside the grid are visited
        let Some((first_row, last_row)) = clip_span(grid_y, r, self.rows) else {
            return;
        };
        let Some((first_col, last_col)) = clip_span(grid_x, r, self.cols) else {
            return;
        };

        for row in first_row..=last_row {
            let i = row as f64 - grid_y;
            let y_index = row * self.cols;

            for col in first_col..=last_col {
                let j = col as f64 - grid_x;
                if i * i + j * j > r_squared {
                    continue;
                }
                result.extend(self.cells[y_index + col].values().copied());
            }
        }
    }
}

// Indices in 0..len within r of origin, or None when the span misses the grid
fn clip_span(origin: f64, r: f64, len: usize) -> Option<(usize, usize)> {
    let first = (origin - r).max(0.0);
    let last = (origin + r).min((len - 1) as f64);
    (first <= last).then(|| (first as usize, last as usize))
}
