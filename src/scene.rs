//! Matrix scenes and signal sinks
//!
//! All scenes are stored in an enum to avoid heap allocations. A scene
//! remembers the parameters of one matrix renderer, so a host loop only has
//! to feed it the latest signal value.

use crate::color::Rgb;
use crate::direction::RotationDir;
use crate::matrix::{self, MatrixDriver};
use crate::strip::{self, StripDriver, StripLayout};

const SCENE_NAME_FULL: &str = "full";
const SCENE_NAME_SPIRAL: &str = "spiral";
const SCENE_NAME_BAR: &str = "bar";
const SCENE_NAME_DOUBLE_BARS: &str = "double_bars";
const SCENE_NAME_DISK: &str = "disk";

const SCENE_ID_FULL: u8 = 0;
const SCENE_ID_SPIRAL: u8 = 1;
const SCENE_ID_BAR: u8 = 2;
const SCENE_ID_DOUBLE_BARS: u8 = 3;
const SCENE_ID_DISK: u8 = 4;

/// Default brightness of a freshly created scene, percent
const DEFAULT_BRIGHTNESS: f32 = 10.0;

/// Known scene ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum SceneId {
    Full = SCENE_ID_FULL,
    Spiral = SCENE_ID_SPIRAL,
    Bar = SCENE_ID_BAR,
    DoubleBars = SCENE_ID_DOUBLE_BARS,
    Disk = SCENE_ID_DISK,
}

impl SceneId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            SCENE_ID_FULL => Self::Full,
            SCENE_ID_SPIRAL => Self::Spiral,
            SCENE_ID_BAR => Self::Bar,
            SCENE_ID_DOUBLE_BARS => Self::DoubleBars,
            SCENE_ID_DISK => Self::Disk,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Full => SCENE_NAME_FULL,
            Self::Spiral => SCENE_NAME_SPIRAL,
            Self::Bar => SCENE_NAME_BAR,
            Self::DoubleBars => SCENE_NAME_DOUBLE_BARS,
            Self::Disk => SCENE_NAME_DISK,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            SCENE_NAME_FULL => Some(Self::Full),
            SCENE_NAME_SPIRAL => Some(Self::Spiral),
            SCENE_NAME_BAR => Some(Self::Bar),
            SCENE_NAME_DOUBLE_BARS => Some(Self::DoubleBars),
            SCENE_NAME_DISK => Some(Self::Disk),
            _ => None,
        }
    }

    /// Scene with default parameters (25% value, 10% brightness)
    pub const fn to_scene(self) -> MatrixScene {
        let value = 25.0;
        let brightness = DEFAULT_BRIGHTNESS;
        match self {
            Self::Full => MatrixScene::Full { brightness },
            Self::Spiral => MatrixScene::Spiral {
                length: value,
                brightness,
                direction: RotationDir::Clockwise,
            },
            Self::Bar => MatrixScene::Bar {
                length: value,
                brightness,
            },
            Self::DoubleBars => MatrixScene::DoubleBars {
                length1: value,
                brightness1: brightness,
                length2: value,
                brightness2: brightness,
            },
            Self::Disk => MatrixScene::Disk {
                radius: 100.0,
                brightness,
            },
        }
    }
}

/// Matrix scene - enum containing the parameters of every matrix renderer
///
/// All values are percent (0-100).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatrixScene {
    /// Every cell lit
    Full { brightness: f32 },
    /// Spiral growing from the center
    Spiral {
        length: f32,
        brightness: f32,
        direction: RotationDir,
    },
    /// Single bar filled from the bottom
    Bar { length: f32, brightness: f32 },
    /// Two independent bars
    DoubleBars {
        length1: f32,
        brightness1: f32,
        length2: f32,
        brightness2: f32,
    },
    /// Soft edged disk
    Disk { radius: f32, brightness: f32 },
}

impl Default for MatrixScene {
    fn default() -> Self {
        SceneId::Spiral.to_scene()
    }
}

impl MatrixScene {
    /// Get the scene ID for external observation
    pub const fn id(&self) -> SceneId {
        match self {
            Self::Full { .. } => SceneId::Full,
            Self::Spiral { .. } => SceneId::Spiral,
            Self::Bar { .. } => SceneId::Bar,
            Self::DoubleBars { .. } => SceneId::DoubleBars,
            Self::Disk { .. } => SceneId::Disk,
        }
    }

    /// Replace the value the scene visualises
    ///
    /// That is the length for spirals and bars, the first bar of a double
    /// bar, the radius of a disk and the brightness of a full matrix.
    #[must_use]
    pub const fn with_value(mut self, value: f32) -> Self {
        match &mut self {
            Self::Full { brightness } => *brightness = value,
            Self::Spiral { length, .. } | Self::Bar { length, .. } => *length = value,
            Self::DoubleBars { length1, .. } => *length1 = value,
            Self::Disk { radius, .. } => *radius = value,
        }
        self
    }

    /// Render the scene
    pub fn render<M: MatrixDriver>(&self, target: &mut M) {
        match *self {
            Self::Full { brightness } => matrix::draw_full(target, brightness),
            Self::Spiral {
                length,
                brightness,
                direction,
            } => matrix::draw_spiral(target, length, brightness, direction),
            Self::Bar { length, brightness } => matrix::draw_bar(target, length, brightness),
            Self::DoubleBars {
                length1,
                brightness1,
                length2,
                brightness2,
            } => matrix::draw_double_bars(target, length1, brightness1, length2, brightness2),
            Self::Disk { radius, brightness } => matrix::draw_disk(target, radius, brightness),
        }
    }
}

/// Anything that can show a percent signal value
pub trait SignalSink {
    /// Redraw for the given value (percent)
    fn render_value(&mut self, value: f32);
}

/// Matrix driven by a scene
pub struct MatrixTarget<M: MatrixDriver> {
    matrix: M,
    scene: MatrixScene,
}

impl<M: MatrixDriver> MatrixTarget<M> {
    pub const fn new(matrix: M, scene: MatrixScene) -> Self {
        Self { matrix, scene }
    }

    pub const fn scene(&self) -> &MatrixScene {
        &self.scene
    }

    /// Swap the scene, takes effect on the next value
    pub fn set_scene(&mut self, scene: MatrixScene) {
        self.scene = scene;
    }

    pub const fn matrix(&self) -> &M {
        &self.matrix
    }

    pub fn matrix_mut(&mut self) -> &mut M {
        &mut self.matrix
    }
}

impl<M: MatrixDriver> SignalSink for MatrixTarget<M> {
    fn render_value(&mut self, value: f32) {
        self.scene.with_value(value).render(&mut self.matrix);
    }
}

/// Strip drawing the value as a spiral
pub struct StripTarget<S: StripDriver> {
    strip: S,
    layout: StripLayout,
    color: Rgb,
    brightness: f32,
    direction: RotationDir,
}

impl<S: StripDriver> StripTarget<S> {
    /// Create a target on the reference 8x8 layout
    pub const fn new(strip: S, color: Rgb, brightness: f32, direction: RotationDir) -> Self {
        Self {
            strip,
            layout: StripLayout::NEOPIXEL_8X8,
            color,
            brightness,
            direction,
        }
    }

    /// Use a custom strip layout
    #[must_use]
    pub fn with_layout(mut self, layout: StripLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    pub fn set_brightness(&mut self, brightness: f32) {
        self.brightness = brightness;
    }

    pub fn set_direction(&mut self, direction: RotationDir) {
        self.direction = direction;
    }

    pub const fn strip(&self) -> &S {
        &self.strip
    }

    pub fn strip_mut(&mut self) -> &mut S {
        &mut self.strip
    }
}

impl<S: StripDriver> SignalSink for StripTarget<S> {
    fn render_value(&mut self, value: f32) {
        strip::draw_spiral_on(
            &self.layout,
            Some(&mut self.strip),
            value,
            self.color,
            self.brightness,
            self.direction,
        );
    }
}
