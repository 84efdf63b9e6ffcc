use crate::motion::{LinearMap, Spring, SpringConfig};

/// Velocity reads as zero once the latest sample is older than this; wider
/// sample gaps are divided by this instead of their real span.
const MAX_VELOCITY_DELTA_MS: f64 = 30.0;
const NAV_COMPACT_OFFSET: f64 = 50.0;

const FOREGROUND_PARALLAX: LinearMap = LinearMap::new((0.0, 500.0), (0.0, 200.0));
const BACKGROUND_PARALLAX: LinearMap = LinearMap::new((0.0, 500.0), (0.0, -150.0));
const HINT_OPACITY: LinearMap = LinearMap::new((0.0, 300.0), (1.0, 0.0));

const SKEW_FROM_VELOCITY: LinearMap = LinearMap::new((-2000.0, 2000.0), (2.0, -2.0));
const SKEW_SPRING: SpringConfig = SpringConfig::new(400.0, 90.0, 1.0);

/// Current scroll position and its rate of change in px/s.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSignal {
    pub offset: f64,
    pub velocity: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct ScrollSample {
    offset: f64,
    time_ms: f64,
}

/// Derives scroll velocity from the two most recent timestamped offsets.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    previous: Option<ScrollSample>,
    latest: Option<ScrollSample>,
}

impl VelocityTracker {
    pub fn record(&mut self, offset: f64, time_ms: f64) {
        let sample = ScrollSample { offset, time_ms };
        match self.latest {
            Some(latest) if time_ms <= latest.time_ms => self.latest = Some(sample),
            _ => {
                self.previous = self.latest;
                self.latest = Some(sample);
            }
        }
    }

    pub fn signal(&self, now_ms: f64) -> ScrollSignal {
        let Some(latest) = self.latest else {
            return ScrollSignal::default();
        };

        let velocity = match self.previous {
            Some(previous)
                if now_ms - latest.time_ms <= MAX_VELOCITY_DELTA_MS
                    && latest.time_ms > previous.time_ms =>
            {
                let span_ms = (latest.time_ms - previous.time_ms).min(MAX_VELOCITY_DELTA_MS);
                (latest.offset - previous.offset) / span_ms * 1000.0
            }
            _ => 0.0,
        };

        ScrollSignal {
            offset: latest.offset,
            velocity,
        }
    }
}

pub fn nav_is_compact(offset: f64) -> bool {
    offset > NAV_COMPACT_OFFSET
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxFrame {
    pub foreground_y: f64,
    pub background_y: f64,
    pub hint_opacity: f64,
}

impl ParallaxFrame {
    pub fn at(offset: f64) -> Self {
        Self {
            foreground_y: FOREGROUND_PARALLAX.apply(offset),
            background_y: BACKGROUND_PARALLAX.apply(offset),
            hint_opacity: HINT_OPACITY.apply(offset),
        }
    }

    pub fn foreground_css(&self) -> String {
        format!("transform: translate3d(0, {:.2}px, 0);", self.foreground_y)
    }

    pub fn background_css(&self) -> String {
        format!("transform: translate3d(0, {:.2}px, 0);", self.background_y)
    }

    pub fn hint_css(&self) -> String {
        format!("opacity: {:.3};", self.hint_opacity)
    }
}

/// Spring-smoothed skew of the main content, driven by scroll velocity.
#[derive(Clone, Debug)]
pub struct SkewController {
    spring: Spring,
}

impl Default for SkewController {
    fn default() -> Self {
        Self {
            spring: Spring::new(SKEW_SPRING, 0.0),
        }
    }
}

impl SkewController {
    /// Unsmoothed skew in degrees for a velocity in px/s.
    pub fn raw_target(velocity: f64) -> f64 {
        SKEW_FROM_VELOCITY.apply(velocity)
    }

    pub fn track(&mut self, velocity: f64) {
        self.spring.set_target(Self::raw_target(velocity));
    }

    pub fn step(&mut self, dt_seconds: f64) -> f64 {
        self.spring.step(dt_seconds)
    }

    pub fn degrees(&self) -> f64 {
        self.spring.value()
    }

    pub fn is_settled(&self) -> bool {
        self.spring.is_settled()
    }

    pub fn css(&self) -> String {
        format!("transform: skewY({:.3}deg);", self.degrees())
    }
}
