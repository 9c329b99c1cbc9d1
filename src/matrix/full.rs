use super::{MATRIX_CELLS, MatrixDriver, cell_of};
use crate::scale::percent_to_u8;

/// Light every cell at a uniform brightness (percent)
pub fn draw_full<M: MatrixDriver>(matrix: &mut M, brightness: f32) {
    matrix.set_brightness(percent_to_u8(brightness));
    for index in 0..MATRIX_CELLS {
        let (col, row) = cell_of(index);
        matrix.plot(col, row);
    }
}
