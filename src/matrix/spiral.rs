use super::{CENTER_INDEX, MATRIX_CELLS, MatrixDriver, cell_of};
use crate::direction::RotationDir;
use crate::scale::{percent_to_u8, scale_count};
use crate::spiral::Spiral;

/// Segments needed to walk every cell from the center (1+1+2+2+3+3+4+4+5)
pub(crate) const SPIRAL_SEGMENTS: usize = 9;

const STEPS_CLOCKWISE: [isize; 4] = [1, 5, -1, -5];
const STEPS_COUNTER_CLOCKWISE: [isize; 4] = [1, -5, -1, 5];

/// Draw a spiral growing out of the center cell
///
/// `length` and `brightness` are percent (0-100). The first
/// `scale(length, 25)` cells along the spiral are plotted and every other
/// cell is unplotted, so the previous frame never shows through.
pub fn draw_spiral<M: MatrixDriver>(
    matrix: &mut M,
    length: f32,
    brightness: f32,
    direction: RotationDir,
) {
    #[allow(clippy::cast_possible_truncation)]
    let length = scale_count(length, MATRIX_CELLS as u16);
    let steps = match direction {
        RotationDir::Clockwise => STEPS_CLOCKWISE,
        RotationDir::CounterClockwise => STEPS_COUNTER_CLOCKWISE,
    };

    matrix.set_brightness(percent_to_u8(brightness));

    let walk = Spiral::new(CENTER_INDEX, steps).limit_segments(SPIRAL_SEGMENTS);
    for (count, index) in walk.enumerate() {
        let (col, row) = cell_of(index);
        if count < length {
            matrix.plot(col, row);
        } else {
            matrix.unplot(col, row);
        }
    }
}

