use super::{MATRIX_CELLS, MATRIX_SIZE, MatrixDriver};
use crate::math8::scale8;

/// In-memory matrix collaborator
///
/// Stores a level per cell (`plot` = 255, `unplot` = 0) and the global
/// brightness register. Coordinates outside the matrix are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixFrame {
    levels: [u8; MATRIX_CELLS],
    brightness: u8,
}

impl MatrixFrame {
    /// Create a blank frame at full brightness
    pub const fn new() -> Self {
        Self {
            levels: [0; MATRIX_CELLS],
            brightness: u8::MAX,
        }
    }

    /// Current brightness register
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Level of a single cell, 0 when out of range
    pub fn level(&self, col: u8, row: u8) -> u8 {
        Self::index_of(col, row).map_or(0, |index| self.levels[index])
    }

    /// Check if a cell is on
    pub fn is_lit(&self, col: u8, row: u8) -> bool {
        self.level(col, row) > 0
    }

    /// Number of cells that are on
    pub fn lit_count(&self) -> usize {
        self.levels.iter().filter(|level| **level > 0).count()
    }

    /// Cell levels scaled by the brightness register, indexed `[row][col]`
    pub fn output(&self) -> [[u8; MATRIX_SIZE as usize]; MATRIX_SIZE as usize] {
        let mut out = [[0; MATRIX_SIZE as usize]; MATRIX_SIZE as usize];
        for (index, level) in self.levels.iter().enumerate() {
            let size = MATRIX_SIZE as usize;
            out[index / size][index % size] = scale8(*level, self.brightness);
        }
        out
    }

    fn index_of(col: u8, row: u8) -> Option<usize> {
        if col >= MATRIX_SIZE || row >= MATRIX_SIZE {
            return None;
        }
        Some(usize::from(row) * usize::from(MATRIX_SIZE) + usize::from(col))
    }

    fn set_level(&mut self, col: u8, row: u8, level: u8) {
        if let Some(index) = Self::index_of(col, row) {
            self.levels[index] = level;
        }
    }
}

impl Default for MatrixFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixDriver for MatrixFrame {
    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn plot(&mut self, col: u8, row: u8) {
        self.set_level(col, row, u8::MAX);
    }

    fn unplot(&mut self, col: u8, row: u8) {
        self.set_level(col, row, 0);
    }

    fn plot_brightness(&mut self, col: u8, row: u8, brightness: u8) {
        self.set_level(col, row, brightness);
    }

    fn clear_screen(&mut self) {
        self.levels.fill(0);
    }
}
