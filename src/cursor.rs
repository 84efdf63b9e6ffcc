use crate::content::ACCENT_COLOR;
use crate::motion::{Spring, SpringConfig};

const DOT_SIZE: f64 = 16.0;
const RING_SIZE: f64 = 48.0;
const HOVER_SCALE: f64 = 1.5;
const RING_HOVER_BORDER: &str = "#fff";

const DOT_SPRING: SpringConfig = SpringConfig::new(1000.0, 50.0, 0.1);
const RING_SPRING: SpringConfig = SpringConfig::new(300.0, 30.0, 0.8);

/// Tags that count as interactive when the pointer rests on them or inside them.
pub const INTERACTIVE_SELECTOR: &str = "a, button";

pub fn is_interactive_tag(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("a") || tag_name.eq_ignore_ascii_case("button")
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
    pub is_hovering: bool,
}

#[derive(Clone, Debug)]
struct Follower {
    size: f64,
    x: Spring,
    y: Spring,
    scale: Spring,
}

impl Follower {
    fn new(config: SpringConfig, size: f64) -> Self {
        let half = size / 2.0;
        Self {
            size,
            x: Spring::new(config, -half),
            y: Spring::new(config, -half),
            scale: Spring::new(config, 1.0),
        }
    }

    fn aim(&mut self, pointer: PointerState) {
        let half = self.size / 2.0;
        self.x.set_target(pointer.x - half);
        self.y.set_target(pointer.y - half);
        self.scale
            .set_target(if pointer.is_hovering { HOVER_SCALE } else { 1.0 });
    }

    fn step(&mut self, dt_seconds: f64) {
        self.x.step(dt_seconds);
        self.y.step(dt_seconds);
        self.scale.step(dt_seconds);
    }

    fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled() && self.scale.is_settled()
    }

    fn transform(&self) -> String {
        format!(
            "transform: translate3d({:.2}px, {:.2}px, 0) scale({:.3});",
            self.x.value(),
            self.y.value(),
            self.scale.value()
        )
    }
}

/// Two trailing indicators: a tight inner dot and a looser outer ring.
#[derive(Clone, Debug)]
pub struct CursorFollower {
    pointer: PointerState,
    dot: Follower,
    ring: Follower,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self {
            pointer: PointerState::default(),
            dot: Follower::new(DOT_SPRING, DOT_SIZE),
            ring: Follower::new(RING_SPRING, RING_SIZE),
        }
    }
}

impl CursorFollower {
    pub fn update(&mut self, pointer: PointerState) {
        self.pointer = pointer;
        self.dot.aim(pointer);
        self.ring.aim(pointer);
    }

    pub fn step(&mut self, dt_seconds: f64) {
        self.dot.step(dt_seconds);
        self.ring.step(dt_seconds);
    }

    pub fn is_settled(&self) -> bool {
        self.dot.is_settled() && self.ring.is_settled()
    }

    pub fn dot_css(&self) -> String {
        self.dot.transform()
    }

    pub fn ring_css(&self) -> String {
        let border = if self.pointer.is_hovering {
            RING_HOVER_BORDER
        } else {
            ACCENT_COLOR
        };
        format!("{} border-color: {border};", self.ring.transform())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(cursor: &mut CursorFollower) {
        for _ in 0..1_200 {
            cursor.step(1.0 / 60.0);
        }
    }

    #[test]
    fn interactive_tags_ignore_case() {
        assert!(is_interactive_tag("A"));
        assert!(is_interactive_tag("button"));
        assert!(!is_interactive_tag("span"));
        assert!(!is_interactive_tag("abbr"));
    }

    #[test]
    fn indicators_recenter_on_pointer() {
        let mut cursor = CursorFollower::default();
        cursor.update(PointerState {
            x: 200.0,
            y: 120.0,
            is_hovering: false,
        });
        settle(&mut cursor);

        assert!(cursor.is_settled());
        assert_eq!(
            cursor.dot_css(),
            "transform: translate3d(192.00px, 112.00px, 0) scale(1.000);"
        );
        assert_eq!(
            cursor.ring_css(),
            "transform: translate3d(176.00px, 96.00px, 0) scale(1.000); border-color: #00A6D6;"
        );
    }

    #[test]
    fn hovering_scales_both_and_whitens_ring() {
        let mut cursor = CursorFollower::default();
        cursor.update(PointerState {
            x: 10.0,
            y: 10.0,
            is_hovering: true,
        });
        settle(&mut cursor);

        assert!(cursor.dot_css().ends_with("scale(1.500);"));
        assert!(cursor.ring_css().contains("scale(1.500)"));
        assert!(cursor.ring_css().ends_with("border-color: #fff;"));
    }

    #[test]
    fn dot_follows_tighter_than_ring() {
        let mut cursor = CursorFollower::default();
        cursor.update(PointerState {
            x: 400.0,
            y: 0.0,
            is_hovering: false,
        });
        cursor.step(1.0 / 60.0);

        let dot_progress = (cursor.dot.x.value() + 8.0) / 400.0;
        let ring_progress = (cursor.ring.x.value() + 24.0) / 400.0;
        assert!(dot_progress > ring_progress);
        assert!(!cursor.is_settled());
    }
}
