//! Lifecycle of the optional inertial scrolling engine.
//!
//! The engine script is injected by the host page and may show up at any point
//! after mount, or never. The bridge polls for it, releases the preloader after
//! a fixed timeout regardless, drives the engine once per animation frame
//! while it runs, and tears everything down exactly once.
//!
//! Timer, interval and frame registrations are held as opaque handles whose
//! `Drop` cancels them, so releasing a resource is just dropping its slot.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::Result;

pub const POLL_INTERVAL_MS: u32 = 100;
pub const FALLBACK_TIMEOUT_MS: u32 = 1_500;

/// Tuning passed to the engine constructor. The easing curve is a function and
/// is attached by the binding layer.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineOptions {
    pub duration: f64,
    pub smooth_wheel: bool,
    pub wheel_multiplier: f64,
    pub touch_multiplier: f64,
    pub infinite: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            duration: 1.2,
            smooth_wheel: true,
            wheel_multiplier: 1.0,
            touch_multiplier: 2.0,
            infinite: false,
        }
    }
}

impl EngineOptions {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

pub trait ScrollEngine {
    type Target: ?Sized;

    fn raf(&mut self, time_ms: f64) -> Result<()>;
    fn scroll_to(&mut self, target: &Self::Target) -> Result<()>;
    fn destroy(&mut self) -> Result<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BridgePhase {
    Absent,
    Polling,
    Running,
    Destroyed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollOutcome {
    /// Engine not there yet; keep the interval.
    Waiting,
    /// Engine constructed on this tick; start the frame loop.
    Activated,
    /// Nothing left to poll for; the interval has been released.
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Engine,
    Native,
}

/// Owns the engine instance together with every registration made on its
/// behalf: poll interval `P`, fallback timeout `T` and animation frame `F`.
pub struct SmoothScrollBridge<E: ScrollEngine, P, T, F> {
    phase: BridgePhase,
    ready: bool,
    engine: Option<E>,
    poll: Option<P>,
    fallback: Option<T>,
    frame: Option<F>,
}

impl<E: ScrollEngine, P, T, F> Default for SmoothScrollBridge<E, P, T, F> {
    fn default() -> Self {
        Self {
            phase: BridgePhase::Absent,
            ready: false,
            engine: None,
            poll: None,
            fallback: None,
            frame: None,
        }
    }
}

impl<E: ScrollEngine, P, T, F> SmoothScrollBridge<E, P, T, F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> BridgePhase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn is_running(&self) -> bool {
        self.phase == BridgePhase::Running
    }

    /// Hands over the poll interval and the fallback timer. Ignored, and the
    /// handles dropped, unless the bridge is still `Absent`.
    pub fn start(&mut self, poll: P, fallback: T) {
        if self.phase != BridgePhase::Absent {
            return;
        }
        self.poll = Some(poll);
        self.fallback = Some(fallback);
        self.phase = BridgePhase::Polling;
        debug!(interval_ms = POLL_INTERVAL_MS, "polling for smooth-scroll engine");
    }

    /// One poll tick. `detect` returns `None` while the engine is missing and
    /// the construction result once it is present; it is not called after
    /// the engine is running or the bridge is destroyed.
    pub fn poll(&mut self, detect: impl FnOnce() -> Option<Result<E>>) -> PollOutcome {
        match self.phase {
            BridgePhase::Destroyed | BridgePhase::Running => {
                self.poll = None;
                return PollOutcome::Stopped;
            }
            BridgePhase::Absent | BridgePhase::Polling => {}
        }

        match detect() {
            None => PollOutcome::Waiting,
            Some(Err(error)) => {
                warn!(%error, "smooth-scroll engine present but unusable");
                PollOutcome::Waiting
            }
            Some(Ok(engine)) => {
                self.activate(engine);
                PollOutcome::Activated
            }
        }
    }

    fn activate(&mut self, engine: E) {
        let late = self.ready;
        self.engine = Some(engine);
        self.phase = BridgePhase::Running;
        self.ready = true;
        self.poll = None;
        self.fallback = None;
        info!(late, "smooth-scroll engine running");
    }

    /// Fallback timer fired. Returns `true` if this flipped `ready`.
    /// Polling continues so a late engine still takes over.
    pub fn fallback_elapsed(&mut self) -> bool {
        if self.phase == BridgePhase::Destroyed {
            return false;
        }
        self.fallback = None;
        if self.ready {
            return false;
        }
        self.ready = true;
        info!(
            timeout_ms = FALLBACK_TIMEOUT_MS,
            "smooth-scroll engine not found, using native scrolling"
        );
        true
    }

    /// Stores the next frame registration. Dropped immediately unless running.
    pub fn arm_frame(&mut self, frame: F) -> bool {
        if !self.is_running() {
            return false;
        }
        self.frame = Some(frame);
        true
    }

    /// Feeds one frame timestamp to the engine. Returns whether the caller
    /// should request another frame.
    pub fn drive_frame(&mut self, time_ms: f64) -> bool {
        self.frame = None;
        if !self.is_running() {
            return false;
        }
        let Some(engine) = self.engine.as_mut() else {
            return false;
        };
        if let Err(error) = engine.raf(time_ms) {
            warn!(%error, "smooth-scroll frame update failed");
        }
        true
    }

    /// Routes an in-page navigation. `Native` means the caller should fall
    /// back to the browser's own smooth scrolling.
    pub fn navigate(&mut self, target: &E::Target) -> Navigation {
        if !self.is_running() {
            return Navigation::Native;
        }
        let Some(engine) = self.engine.as_mut() else {
            return Navigation::Native;
        };
        match engine.scroll_to(target) {
            Ok(()) => Navigation::Engine,
            Err(error) => {
                warn!(%error, "engine scroll failed, using native scrolling");
                Navigation::Native
            }
        }
    }

    /// Releases every registration and disposes the engine. Safe at any
    /// point in the lifecycle; only the first call does anything.
    pub fn teardown(&mut self) -> bool {
        if self.phase == BridgePhase::Destroyed {
            return false;
        }
        self.poll = None;
        self.fallback = None;
        self.frame = None;
        if let Some(mut engine) = self.engine.take() {
            if let Err(error) = engine.destroy() {
                warn!(%error, "smooth-scroll engine did not shut down cleanly");
            }
        }
        self.phase = BridgePhase::Destroyed;
        debug!("smooth-scroll bridge torn down");
        true
    }
}

impl<E: ScrollEngine, P, T, F> Drop for SmoothScrollBridge<E, P, T, F> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BridgeError;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Stand-in for a timer handle; counts how many were released.
    struct Handle(Rc<Cell<u32>>);

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[derive(Default)]
    struct EngineLog {
        frames: Vec<f64>,
        scrolls: Vec<String>,
        destroyed: u32,
    }

    struct FakeEngine {
        log: Rc<RefCell<EngineLog>>,
        fail_scroll: bool,
    }

    impl ScrollEngine for FakeEngine {
        type Target = str;

        fn raf(&mut self, time_ms: f64) -> Result<()> {
            self.log.borrow_mut().frames.push(time_ms);
            Ok(())
        }

        fn scroll_to(&mut self, target: &str) -> Result<()> {
            if self.fail_scroll {
                return Err(BridgeError::EngineCall {
                    method: "scrollTo",
                    message: "boom".to_string(),
                });
            }
            self.log.borrow_mut().scrolls.push(target.to_string());
            Ok(())
        }

        fn destroy(&mut self) -> Result<()> {
            self.log.borrow_mut().destroyed += 1;
            Ok(())
        }
    }

    type Bridge = SmoothScrollBridge<FakeEngine, Handle, Handle, Handle>;

    /// Drives a bridge on a millisecond clock the way the page does: the
    /// interval ticks every 100 ms, the fallback fires once at 1500 ms.
    struct Harness {
        bridge: Bridge,
        released: Rc<Cell<u32>>,
        log: Rc<RefCell<EngineLog>>,
        engine_arrives_at: Option<u32>,
        constructed: u32,
        ready_at: Option<u32>,
        activated_at: Option<u32>,
        now: u32,
    }

    impl Harness {
        fn mount(engine_arrives_at: Option<u32>) -> Self {
            let released = Rc::new(Cell::new(0));
            let mut bridge = Bridge::new();
            bridge.start(Handle(released.clone()), Handle(released.clone()));
            Self {
                bridge,
                released,
                log: Rc::new(RefCell::new(EngineLog::default())),
                engine_arrives_at,
                constructed: 0,
                ready_at: None,
                activated_at: None,
                now: 0,
            }
        }

        fn handle(&self) -> Handle {
            Handle(self.released.clone())
        }

        fn advance_to(&mut self, until: u32) {
            while self.now < until {
                self.now += 1;
                let now = self.now;

                if now % POLL_INTERVAL_MS == 0 && self.bridge.poll.is_some() {
                    let present = self.engine_arrives_at.is_some_and(|at| at <= now);
                    let log = self.log.clone();
                    let constructed = &mut self.constructed;
                    let outcome = self.bridge.poll(|| {
                        present.then(|| {
                            *constructed += 1;
                            Ok(FakeEngine {
                                log,
                                fail_scroll: false,
                            })
                        })
                    });
                    if outcome == PollOutcome::Activated {
                        self.activated_at = Some(now);
                        let frame = self.handle();
                        assert!(self.bridge.arm_frame(frame));
                    }
                }

                if now == FALLBACK_TIMEOUT_MS && self.bridge.fallback.is_some() {
                    self.bridge.fallback_elapsed();
                }

                if now % 16 == 0 && self.bridge.frame.is_some() {
                    if self.bridge.drive_frame(f64::from(now)) {
                        let frame = self.handle();
                        self.bridge.arm_frame(frame);
                    }
                }

                if self.ready_at.is_none() && self.bridge.is_ready() {
                    self.ready_at = Some(now);
                }
            }
        }
    }

    #[test]
    fn engine_before_timeout_activates_on_detection() {
        let mut harness = Harness::mount(Some(430));
        harness.advance_to(500);

        assert_eq!(harness.activated_at, Some(500));
        assert_eq!(harness.ready_at, Some(500));
        assert!(harness.bridge.poll.is_none());
        assert!(harness.bridge.fallback.is_none());
        assert_eq!(harness.bridge.phase(), BridgePhase::Running);
        assert_eq!(harness.constructed, 1);
    }

    #[test]
    fn missing_engine_releases_preloader_at_timeout() {
        let mut harness = Harness::mount(None);
        harness.advance_to(1_499);
        assert!(!harness.bridge.is_ready());

        harness.advance_to(3_000);
        assert_eq!(harness.ready_at, Some(FALLBACK_TIMEOUT_MS));
        assert_eq!(harness.constructed, 0);
        assert_eq!(harness.bridge.phase(), BridgePhase::Polling);
        assert_eq!(harness.bridge.navigate("about"), Navigation::Native);
    }

    #[test]
    fn late_engine_still_takes_over() {
        let mut harness = Harness::mount(Some(2_250));
        harness.advance_to(2_299);
        assert!(harness.bridge.is_ready());
        assert!(!harness.bridge.is_running());

        harness.advance_to(2_400);
        assert_eq!(harness.activated_at, Some(2_300));
        assert_eq!(harness.ready_at, Some(FALLBACK_TIMEOUT_MS));
        assert!(harness.bridge.is_running());
        assert!(!harness.log.borrow().frames.is_empty());
    }

    #[test]
    fn frames_feed_engine_while_running() {
        let mut harness = Harness::mount(Some(0));
        harness.advance_to(200);

        let frames = harness.log.borrow().frames.clone();
        assert_eq!(frames.first(), Some(&112.0));
        assert!(frames.windows(2).all(|pair| pair[1] - pair[0] == 16.0));
    }

    #[test]
    fn navigation_prefers_engine_when_running() {
        let mut harness = Harness::mount(Some(0));
        assert_eq!(harness.bridge.navigate("skills"), Navigation::Native);

        harness.advance_to(100);
        assert_eq!(harness.bridge.navigate("skills"), Navigation::Engine);
        assert_eq!(harness.log.borrow().scrolls, vec!["skills".to_string()]);
    }

    #[test]
    fn failing_engine_scroll_falls_back_to_native() {
        let log = Rc::new(RefCell::new(EngineLog::default()));
        let mut bridge = Bridge::new();
        let released = Rc::new(Cell::new(0));
        bridge.start(Handle(released.clone()), Handle(released.clone()));
        bridge.poll(|| {
            Some(Ok(FakeEngine {
                log: log.clone(),
                fail_scroll: true,
            }))
        });

        assert_eq!(bridge.navigate("contact"), Navigation::Native);
        assert!(log.borrow().scrolls.is_empty());
    }

    #[test]
    fn unusable_engine_keeps_polling() {
        let released = Rc::new(Cell::new(0));
        let mut bridge = Bridge::new();
        bridge.start(Handle(released.clone()), Handle(released.clone()));

        let outcome =
            bridge.poll(|| Some(Err(BridgeError::EngineConstruct("not a constructor".into()))));
        assert_eq!(outcome, PollOutcome::Waiting);
        assert_eq!(bridge.phase(), BridgePhase::Polling);
        assert_eq!(released.get(), 0);
    }

    #[test]
    fn teardown_while_polling_releases_timers() {
        let mut harness = Harness::mount(None);
        harness.advance_to(700);
        assert_eq!(harness.released.get(), 0);

        assert!(harness.bridge.teardown());
        assert_eq!(harness.released.get(), 2);
        assert_eq!(harness.log.borrow().destroyed, 0);

        assert!(!harness.bridge.teardown());
        assert_eq!(harness.released.get(), 2);
    }

    #[test]
    fn teardown_while_running_disposes_engine_once() {
        let mut harness = Harness::mount(Some(0));
        harness.advance_to(250);
        let released_before = harness.released.get();

        assert!(harness.bridge.teardown());
        assert_eq!(harness.released.get(), released_before + 1);
        assert_eq!(harness.log.borrow().destroyed, 1);

        assert!(!harness.bridge.teardown());
        drop(harness.bridge);
        assert_eq!(harness.log.borrow().destroyed, 1);
    }

    #[test]
    fn teardown_before_start_is_harmless() {
        let mut bridge = Bridge::new();
        assert!(bridge.teardown());
        assert!(!bridge.teardown());

        let released = Rc::new(Cell::new(0));
        bridge.start(Handle(released.clone()), Handle(released.clone()));
        assert_eq!(released.get(), 2);
        assert_eq!(bridge.phase(), BridgePhase::Destroyed);
    }

    #[test]
    fn nothing_mutates_after_teardown() {
        let mut harness = Harness::mount(Some(1_000));
        harness.advance_to(300);
        harness.bridge.teardown();

        let outcome = harness.bridge.poll(|| unreachable!("detect after teardown"));
        assert_eq!(outcome, PollOutcome::Stopped);
        assert!(!harness.bridge.fallback_elapsed());
        assert!(!harness.bridge.is_ready());
        let frame = harness.handle();
        assert!(!harness.bridge.arm_frame(frame));
        assert!(!harness.bridge.drive_frame(400.0));
    }

    #[test]
    fn dropping_bridge_tears_down() {
        let log = Rc::new(RefCell::new(EngineLog::default()));
        let released = Rc::new(Cell::new(0));
        {
            let mut bridge = Bridge::new();
            bridge.start(Handle(released.clone()), Handle(released.clone()));
            bridge.poll(|| {
                Some(Ok(FakeEngine {
                    log: log.clone(),
                    fail_scroll: false,
                }))
            });
            bridge.arm_frame(Handle(released.clone()));
        }
        assert_eq!(released.get(), 3);
        assert_eq!(log.borrow().destroyed, 1);
    }

    #[test]
    fn options_serialize_in_engine_casing() {
        let json = EngineOptions::default().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "duration": 1.2,
                "smoothWheel": true,
                "wheelMultiplier": 1.0,
                "touchMultiplier": 2.0,
                "infinite": false,
            })
        );
    }
}
