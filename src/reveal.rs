use crate::motion::{Transition, EASE_OUT_QUINT};

const STAGGER_STEP_S: f64 = 0.1;
/// `@keyframes` rule in `styles.css` that rises from `--reveal-offset`.
const ENTRANCE_KEYFRAMES: &str = "reveal-rise";

/// Hidden pose and timing of a one-shot entrance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealProfile {
    pub offset_px: f64,
    pub duration_s: f64,
    /// IntersectionObserver `rootMargin` that triggers the reveal.
    pub root_margin: &'static str,
}

pub const SECTION_REVEAL: RevealProfile = RevealProfile {
    offset_px: 50.0,
    duration_s: 0.8,
    // fires once the block is 10% inside the viewport
    root_margin: "-10%",
};

pub const CARD_REVEAL: RevealProfile = RevealProfile {
    offset_px: 20.0,
    duration_s: 0.6,
    root_margin: "0px",
};

pub const TITLE_REVEAL: RevealProfile = RevealProfile {
    offset_px: 100.0,
    duration_s: 1.0,
    root_margin: "0px",
};

pub fn stagger_delay(index: usize) -> f64 {
    index as f64 * STAGGER_STEP_S
}

/// Becomes visible on the first intersection and stays visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: bool,
}

impl RevealState {
    pub fn is_revealed(self) -> bool {
        self.revealed
    }

    /// Feeds one intersection observation; returns `true` only on the
    /// observation that performs the hidden → visible transition.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.revealed || !is_intersecting {
            return false;
        }
        self.revealed = true;
        true
    }
}

impl RevealProfile {
    pub fn style(self, revealed: bool, delay_s: f64) -> String {
        let transition = Transition {
            duration_s: self.duration_s,
            delay_s,
            ease: EASE_OUT_QUINT,
        }
        .css(&["opacity", "transform"]);

        if revealed {
            format!("opacity: 1; transform: none; transition: {transition};")
        } else {
            format!(
                "opacity: 0; transform: translate3d(0, {}px, 0); transition: {transition};",
                self.offset_px
            )
        }
    }

    /// Keyframe entrance that plays on mount, for blocks visible at load.
    /// The `both` fill mode holds the hidden pose through the delay.
    pub fn entrance_style(self, delay_s: f64) -> String {
        format!(
            "--reveal-offset: {}px; animation: {ENTRANCE_KEYFRAMES} {}s {} {delay_s}s both;",
            self.offset_px,
            self.duration_s,
            EASE_OUT_QUINT.css()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_is_one_way() {
        let mut state = RevealState::default();
        assert!(!state.observe(false));
        assert!(!state.is_revealed());

        assert!(state.observe(true));
        assert!(state.is_revealed());

        assert!(!state.observe(false));
        assert!(state.is_revealed());
        assert!(!state.observe(true));
        assert!(state.is_revealed());
    }

    #[test]
    fn hidden_section_sits_fifty_pixels_low() {
        let style = SECTION_REVEAL.style(false, 0.0);
        assert!(style.starts_with("opacity: 0; transform: translate3d(0, 50px, 0);"));
        assert!(style.contains("opacity 0.8s cubic-bezier(0.22, 1, 0.36, 1) 0s"));
    }

    #[test]
    fn visible_section_keeps_delay() {
        let style = SECTION_REVEAL.style(true, 0.3);
        assert!(style.starts_with("opacity: 1; transform: none;"));
        assert!(style.contains("transform 0.8s cubic-bezier(0.22, 1, 0.36, 1) 0.3s"));
    }

    #[test]
    fn title_entrance_is_a_delayed_keyframe_animation() {
        let style = TITLE_REVEAL.entrance_style(stagger_delay(1));
        assert_eq!(
            style,
            "--reveal-offset: 100px; animation: reveal-rise 1s cubic-bezier(0.22, 1, 0.36, 1) 0.1s both;"
        );
        assert!(!style.contains("transition"));
    }

    #[test]
    fn cards_trigger_at_the_viewport_edge() {
        assert_eq!(SECTION_REVEAL.root_margin, "-10%");
        assert_eq!(CARD_REVEAL.root_margin, "0px");
    }

    #[test]
    fn stagger_grows_by_a_tenth() {
        assert_eq!(stagger_delay(0), 0.0);
        assert!((stagger_delay(2) - 0.2).abs() < 1e-12);
    }
}
