//! Speed levels and per-algorithm delay tables

use std::fmt;
use std::time::Duration;

/// User-selectable playback speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpeedLevel {
    Fast,
    #[default]
    Normal,
    Slow,
}

impl SpeedLevel {
    pub const ALL: [SpeedLevel; 3] = [SpeedLevel::Fast, SpeedLevel::Normal, SpeedLevel::Slow];

    /// Parse a level name; anything unrecognized falls back to `Normal`
    pub fn parse(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "fast" => SpeedLevel::Fast,
            "slow" => SpeedLevel::Slow,
            _ => SpeedLevel::Normal,
        }
    }

    pub(crate) fn to_u8(self) -> u8 {
        match self {
            SpeedLevel::Fast => 0,
            SpeedLevel::Normal => 1,
            SpeedLevel::Slow => 2,
        }
    }

    pub(crate) fn from_u8(raw: u8) -> Self {
        match raw {
            0 => SpeedLevel::Fast,
            2 => SpeedLevel::Slow,
            _ => SpeedLevel::Normal,
        }
    }
}

impl fmt::Display for SpeedLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpeedLevel::Fast => "Fast",
            SpeedLevel::Normal => "Normal",
            SpeedLevel::Slow => "Slow",
        };
        write!(f, "{}", name)
    }
}

/// Base delay per speed level for one algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedTable {
    pub fast: Duration,
    pub normal: Duration,
    pub slow: Duration,
}

impl SpeedTable {
    pub const fn from_millis(fast: u64, normal: u64, slow: u64) -> Self {
        SpeedTable {
            fast: Duration::from_millis(fast),
            normal: Duration::from_millis(normal),
            slow: Duration::from_millis(slow),
        }
    }

    /// Delay for `level`
    pub fn delay(&self, level: SpeedLevel) -> Duration {
        match level {
            SpeedLevel::Fast => self.fast,
            SpeedLevel::Normal => self.normal,
            SpeedLevel::Slow => self.slow,
        }
    }
}

/// How long the controller waits after publishing a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    /// The full delay for the current speed
    Full,
    /// Half the delay for the current speed
    Half,
    /// A fixed wait independent of speed
    Fixed(Duration),
    /// Publish and continue without waiting
    Immediate,
}

impl Pace {
    /// Resolve against a base delay read at wait time
    pub fn resolve(self, base: Duration) -> Duration {
        match self {
            Pace::Full => base,
            Pace::Half => base / 2,
            Pace::Fixed(d) => d,
            Pace::Immediate => Duration::ZERO,
        }
    }
}
