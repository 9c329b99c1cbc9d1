//! Rendering onto the 5x5 monochrome LED matrix.
//!
//! Cells are addressed as `(col, row)` with `(0, 0)` in the top left corner.
//! Renderers that share the display with previous frames plot and unplot
//! every cell they own instead of clearing the screen, which would flicker.

mod bar;
mod disk;
mod frame;
mod full;
mod spiral;

pub use bar::{draw_bar, draw_double_bars};
pub use disk::draw_disk;
pub use frame::MatrixFrame;
pub use full::draw_full;
pub use spiral::draw_spiral;

/// Number of rows and columns
pub const MATRIX_SIZE: u8 = 5;

/// Number of cells on the matrix
pub const MATRIX_CELLS: usize = (MATRIX_SIZE as usize) * (MATRIX_SIZE as usize);

/// Row-major index of the center cell `(2, 2)`
pub const CENTER_INDEX: usize = MATRIX_CELLS / 2;

/// Matrix collaborator
///
/// Coordinates are 0-4 on both axes.
pub trait MatrixDriver {
    /// Set the global brightness register (0-255)
    fn set_brightness(&mut self, brightness: u8);

    /// Turn a cell on
    fn plot(&mut self, col: u8, row: u8);

    /// Turn a cell off
    fn unplot(&mut self, col: u8, row: u8);

    /// Turn a cell on at its own brightness (0-255)
    fn plot_brightness(&mut self, col: u8, row: u8, brightness: u8);

    /// Turn every cell off
    fn clear_screen(&mut self);
}

impl<T: MatrixDriver + ?Sized> MatrixDriver for &mut T {
    fn set_brightness(&mut self, brightness: u8) {
        (**self).set_brightness(brightness);
    }

    fn plot(&mut self, col: u8, row: u8) {
        (**self).plot(col, row);
    }

    fn unplot(&mut self, col: u8, row: u8) {
        (**self).unplot(col, row);
    }

    fn plot_brightness(&mut self, col: u8, row: u8, brightness: u8) {
        (**self).plot_brightness(col, row, brightness);
    }

    fn clear_screen(&mut self) {
        (**self).clear_screen();
    }
}

/// Convert a row-major cell index into `(col, row)`
#[allow(clippy::cast_possible_truncation)]
pub const fn cell_of(index: usize) -> (u8, u8) {
    let size = MATRIX_SIZE as usize;
    ((index % size) as u8, (index / size) as u8)
}
