const ROTATION_NAME_CLOCKWISE: &str = "clockwise";
const ROTATION_NAME_COUNTER_CLOCKWISE: &str = "counter_clockwise";

const ROTATION_RAW_CLOCKWISE: i8 = 1;
const ROTATION_RAW_COUNTER_CLOCKWISE: i8 = -1;

/// Error returned when a raw value is not a known rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRotation(pub i8);

/// Traversal direction of the spiral renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(i8)]
pub enum RotationDir {
    #[default]
    Clockwise = ROTATION_RAW_CLOCKWISE,
    CounterClockwise = ROTATION_RAW_COUNTER_CLOCKWISE,
}

impl RotationDir {
    pub const fn from_raw(value: i8) -> Option<Self> {
        match value {
            ROTATION_RAW_CLOCKWISE => Some(Self::Clockwise),
            ROTATION_RAW_COUNTER_CLOCKWISE => Some(Self::CounterClockwise),
            _ => None,
        }
    }

    pub const fn as_raw(self) -> i8 {
        self as i8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clockwise => ROTATION_NAME_CLOCKWISE,
            Self::CounterClockwise => ROTATION_NAME_COUNTER_CLOCKWISE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ROTATION_NAME_CLOCKWISE => Some(Self::Clockwise),
            ROTATION_NAME_COUNTER_CLOCKWISE => Some(Self::CounterClockwise),
            _ => None,
        }
    }

    /// The opposite rotation
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

impl TryFrom<i8> for RotationDir {
    type Error = InvalidRotation;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Self::from_raw(value).ok_or(InvalidRotation(value))
    }
}
