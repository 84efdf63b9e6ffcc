use gloo::render::{request_animation_frame, AnimationFrame};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Assumed delta for the first frame after the loop has been idle.
const IDLE_FRAME_DT: f64 = 1.0 / 60.0;

type Tick = Box<dyn FnMut(f64, f64) -> bool>;

/// Runs `tick(time_ms, dt_seconds)` on animation frames for as long as it
/// returns `true`. Any number of wakes between two paints yield one tick.
#[derive(Clone)]
pub struct FrameLoop {
    inner: Rc<FrameLoopInner>,
}

struct FrameLoopInner {
    pending: RefCell<Option<AnimationFrame>>,
    last_time: Cell<Option<f64>>,
    stopped: Cell<bool>,
    tick: RefCell<Tick>,
}

impl FrameLoop {
    pub fn new(tick: impl FnMut(f64, f64) -> bool + 'static) -> Self {
        Self {
            inner: Rc::new(FrameLoopInner {
                pending: RefCell::new(None),
                last_time: Cell::new(None),
                stopped: Cell::new(false),
                tick: RefCell::new(Box::new(tick)),
            }),
        }
    }

    pub fn wake(&self) {
        schedule(&self.inner);
    }

    /// Cancels the pending frame and ignores later wakes.
    pub fn stop(&self) {
        self.inner.stopped.set(true);
        self.inner.pending.borrow_mut().take();
    }
}

fn schedule(inner: &Rc<FrameLoopInner>) {
    if inner.stopped.get() || inner.pending.borrow().is_some() {
        return;
    }
    let frame_inner = Rc::clone(inner);
    let handle = request_animation_frame(move |time| run(&frame_inner, time));
    *inner.pending.borrow_mut() = Some(handle);
}

fn run(inner: &Rc<FrameLoopInner>, time: f64) {
    inner.pending.borrow_mut().take();
    if inner.stopped.get() {
        return;
    }

    let dt = inner
        .last_time
        .get()
        .map(|last| (time - last) / 1000.0)
        .unwrap_or(IDLE_FRAME_DT);
    let more = {
        let mut tick = inner.tick.borrow_mut();
        (*tick)(time, dt)
    };

    if more {
        inner.last_time.set(Some(time));
        schedule(inner);
    } else {
        inner.last_time.set(None);
    }
}
