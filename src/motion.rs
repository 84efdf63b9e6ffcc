//! Animation primitives shared by every scroll- and pointer-driven controller.

/// Largest frame delta fed to a spring. Longer gaps (background tabs, debugger
/// pauses) are treated as a single long frame instead of a jump.
const MAX_FRAME_DT: f64 = 0.064;
/// Integration step; small enough for the stiffest spring on the page.
const MAX_SUBSTEP: f64 = 0.001;

/// Linear interpolation from an input range to an output range, clamped at both
/// ends of the input domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearMap {
    input: (f64, f64),
    output: (f64, f64),
}

impl LinearMap {
    pub const fn new(input: (f64, f64), output: (f64, f64)) -> Self {
        Self { input, output }
    }

    pub fn apply(self, value: f64) -> f64 {
        let (from, to) = self.input;
        let span = to - from;
        if span == 0.0 || value.is_nan() {
            return self.output.0;
        }

        let progress = ((value - from) / span).clamp(0.0, 1.0);
        self.output.0 + (self.output.1 - self.output.0) * progress
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    pub fn css(self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

/// Fast start, long soft landing. Used for every entrance transition.
pub const EASE_OUT_QUINT: CubicBezier = CubicBezier {
    x1: 0.22,
    y1: 1.0,
    x2: 0.36,
    y2: 1.0,
};

/// Exponential ease-out handed to the inertial scrolling engine.
pub fn expo_out(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

/// A timed CSS transition over a fixed set of properties.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration_s: f64,
    pub delay_s: f64,
    pub ease: CubicBezier,
}

impl Transition {
    pub fn css(self, properties: &[&str]) -> String {
        let ease = self.ease.css();
        properties
            .iter()
            .map(|property| {
                format!(
                    "{property} {}s {ease} {}s",
                    self.duration_s, self.delay_s
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    pub rest_delta: f64,
    pub rest_speed: f64,
}

impl SpringConfig {
    pub const fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            rest_delta: 0.01,
            rest_speed: 0.05,
        }
    }
}

/// Damped harmonic oscillator chasing a movable target. Stepped once per
/// rendered frame with semi-implicit Euler sub-steps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_settled(&self) -> bool {
        (self.target - self.value).abs() <= self.config.rest_delta
            && self.velocity.abs() <= self.config.rest_speed
    }

    pub fn step(&mut self, dt_seconds: f64) -> f64 {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return self.value;
        }

        let SpringConfig {
            stiffness,
            damping,
            mass,
            ..
        } = self.config;
        let mut remaining = dt_seconds.clamp(0.0, MAX_FRAME_DT);
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            let displacement = self.value - self.target;
            let acceleration = (-stiffness * displacement - damping * self.velocity) / mass;
            self.velocity += acceleration * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }
}
