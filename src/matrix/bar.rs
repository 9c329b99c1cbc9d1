use super::{MATRIX_SIZE, MatrixDriver};
use crate::scale::{percent_to_u8, scale_count};

/// Columns lit by the single bar
const BAR_COLUMNS: [u8; 3] = [1, 2, 3];
/// Columns kept dark around the single bar
const BAR_MARGINS: [u8; 2] = [0, 4];

const LEFT_BAR_COLUMNS: [u8; 2] = [0, 1];
const RIGHT_BAR_COLUMNS: [u8; 2] = [3, 4];
const DIVIDER_COLUMN: u8 = 2;

/// How filled cells of a column are lit
#[derive(Clone, Copy)]
enum Fill {
    /// Plain plot, dimmed by the global brightness register
    Plot,
    /// Per-cell brightness
    Level(u8),
}

/// Draw a column filled from the bottom up
///
/// Rows above the fill line are unplotted.
fn draw_column<M: MatrixDriver>(matrix: &mut M, col: u8, height: usize, fill: Fill) {
    let top = usize::from(MATRIX_SIZE).saturating_sub(height);
    for row in 0..MATRIX_SIZE {
        if usize::from(row) < top {
            matrix.unplot(col, row);
            continue;
        }
        match fill {
            Fill::Plot => matrix.plot(col, row),
            Fill::Level(brightness) => matrix.plot_brightness(col, row, brightness),
        }
    }
}

/// Draw a single three column wide bar filled from the bottom
///
/// `length` and `brightness` are percent (0-100). The side columns are
/// always unplotted, so no screen clear is needed before the call.
pub fn draw_bar<M: MatrixDriver>(matrix: &mut M, length: f32, brightness: f32) {
    let height = scale_count(length, u16::from(MATRIX_SIZE));

    matrix.set_brightness(percent_to_u8(brightness));
    for col in BAR_COLUMNS {
        draw_column(matrix, col, height, Fill::Plot);
    }
    for col in BAR_MARGINS {
        draw_column(matrix, col, 0, Fill::Plot);
    }
}

/// Draw two independent two column wide bars
///
/// The left bar (columns 0-1) follows `length1`/`brightness1`, the right bar
/// (columns 3-4) follows `length2`/`brightness2`. Brightness is applied per
/// cell so both bars can differ. Column 2 is always unplotted.
pub fn draw_double_bars<M: MatrixDriver>(
    matrix: &mut M,
    length1: f32,
    brightness1: f32,
    length2: f32,
    brightness2: f32,
) {
    let bars = [
        (LEFT_BAR_COLUMNS, length1, brightness1),
        (RIGHT_BAR_COLUMNS, length2, brightness2),
    ];
    for (columns, length, brightness) in bars {
        let height = scale_count(length, u16::from(MATRIX_SIZE));
        let fill = Fill::Level(percent_to_u8(brightness));
        for col in columns {
            draw_column(matrix, col, height, fill);
        }
    }
    draw_column(matrix, DIVIDER_COLUMN, 0, Fill::Plot);
}
