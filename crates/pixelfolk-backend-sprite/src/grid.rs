//! Square pixel grid where each cell is empty or holds a color.

use crate::color::Rgb;

/// The 8 Moore-neighborhood offsets, row by row.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// The 4 orthogonal offsets.
pub const ORTHOGONAL_OFFSETS: [(i32, i32); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// Axis-aligned cell rectangle, half-open on the right and bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CellRect {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A square pixel grid, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    size: u32,
    data: Vec<Option<Rgb>>,
}

impl PixelGrid {
    /// Create an empty grid.
    pub fn new(size: u32) -> Self {
        Self {
            size,
            data: vec![None; (size as usize) * (size as usize)],
        }
    }

    /// Edge length in cells.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.size as usize) + x as usize
    }

    /// Get a cell. Coordinates must be on the canvas.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        self.data[self.index(x, y)]
    }

    /// Set a cell. Coordinates must be on the canvas.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: Option<Rgb>) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    /// Fill a cell with a color.
    #[inline]
    pub fn fill(&mut self, x: u32, y: u32, color: Rgb) {
        self.set(x, y, Some(color));
    }

    #[inline]
    pub fn is_filled(&self, x: u32, y: u32) -> bool {
        self.get(x, y).is_some()
    }

    /// Get a cell by signed coordinates; `None` when off the canvas.
    #[inline]
    pub fn get_checked(&self, x: i32, y: i32) -> Option<Option<Rgb>> {
        if x < 0 || y < 0 || x >= self.size as i32 || y >= self.size as i32 {
            return None;
        }
        Some(self.get(x as u32, y as u32))
    }

    /// True if the cell exists and is filled. Off-canvas counts as empty.
    #[inline]
    pub fn is_filled_checked(&self, x: i32, y: i32) -> bool {
        matches!(self.get_checked(x, y), Some(Some(_)))
    }

    /// Number of filled cells among the 8 Moore neighbors.
    pub fn moore_count(&self, x: u32, y: u32) -> usize {
        MOORE_OFFSETS
            .iter()
            .filter(|(dx, dy)| self.is_filled_checked(x as i32 + dx, y as i32 + dy))
            .count()
    }

    /// Total number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.data.iter().filter(|c| c.is_some()).count()
    }

    /// Iterate `(x, y, cell)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, Option<Rgb>)> + '_ {
        let size = self.size;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, c)| ((i as u32) % size, (i as u32) / size, *c))
    }

    /// Borrow one row.
    pub fn row(&self, y: u32) -> &[Option<Rgb>] {
        let start = self.index(0, y);
        &self.data[start..start + self.size as usize]
    }

    /// Overwrite one row.
    pub fn set_row(&mut self, y: u32, row: &[Option<Rgb>]) {
        let start = self.index(0, y);
        self.data[start..start + self.size as usize].copy_from_slice(row);
    }

    /// True if every cell equals its mirror across the vertical center line.
    pub fn is_mirror_symmetric(&self) -> bool {
        let n = self.size;
        (0..n).all(|y| (0..n / 2).all(|x| self.get(x, y) == self.get(n - 1 - x, y)))
    }

    /// Copy the cells inside `rect` (clipped to the canvas).
    pub fn extract(&self, rect: CellRect) -> SubGrid {
        let rect = self.clip(rect);
        let mut cells = Vec::with_capacity((rect.width * rect.height) as usize);
        for y in rect.y..rect.y + rect.height {
            for x in rect.x..rect.x + rect.width {
                cells.push(self.get(x, y));
            }
        }
        SubGrid {
            width: rect.width,
            height: rect.height,
            cells,
        }
    }

    /// Write a sub-grid with its top-left corner at `(x, y)`, including empty
    /// cells. Parts that fall off the canvas are dropped.
    pub fn paste(&mut self, sub: &SubGrid, x: i32, y: i32) {
        for sy in 0..sub.height {
            for sx in 0..sub.width {
                let tx = x + sx as i32;
                let ty = y + sy as i32;
                if self.get_checked(tx, ty).is_some() {
                    self.set(tx as u32, ty as u32, sub.get(sx, sy));
                }
            }
        }
    }

    /// Clip a rectangle to the canvas.
    pub fn clip(&self, rect: CellRect) -> CellRect {
        let x0 = rect.x.min(self.size);
        let y0 = rect.y.min(self.size);
        let x1 = rect.x.saturating_add(rect.width).min(self.size);
        let y1 = rect.y.saturating_add(rect.height).min(self.size);
        CellRect {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        }
    }
}

/// A rectangular copy of grid cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubGrid {
    pub width: u32,
    pub height: u32,
    cells: Vec<Option<Rgb>>,
}

impl SubGrid {
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        self.cells[(y * self.width + x) as usize]
    }
}
