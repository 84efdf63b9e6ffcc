use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, Event, MouseEvent};
use yew::prelude::*;

use super::frame::FrameLoop;
use super::set_style;
use crate::cursor::{is_interactive_tag, CursorFollower, PointerState, INTERACTIVE_SELECTOR};

fn hovers_interactive(event: &Event) -> bool {
    let Some(element) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
    else {
        return false;
    };

    is_interactive_tag(&element.tag_name())
        || element
            .closest(INTERACTIVE_SELECTOR)
            .ok()
            .flatten()
            .is_some()
}

#[function_component(Cursor)]
pub fn cursor() -> Html {
    let dot = use_node_ref();
    let ring = use_node_ref();

    {
        let dot = dot.clone();
        let ring = ring.clone();
        use_effect_with((), move |_| {
            let follower = Rc::new(RefCell::new(CursorFollower::default()));

            let frames = {
                let follower = Rc::clone(&follower);
                FrameLoop::new(move |_, dt| {
                    let mut follower = follower.borrow_mut();
                    follower.step(dt);
                    set_style(&dot, &follower.dot_css());
                    set_style(&ring, &follower.ring_css());
                    !follower.is_settled()
                })
            };
            frames.wake();

            let listener = window().map(|win| {
                let frames = frames.clone();
                EventListener::new(&win, "mousemove", move |event| {
                    let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    follower.borrow_mut().update(PointerState {
                        x: f64::from(mouse.client_x()),
                        y: f64::from(mouse.client_y()),
                        is_hovering: hovers_interactive(event),
                    });
                    frames.wake();
                })
            });

            move || {
                drop(listener);
                frames.stop();
            }
        });
    }

    html! {
        <>
            <div ref={dot} class="cursor-dot" aria-hidden="true"></div>
            <div ref={ring} class="cursor-ring" aria-hidden="true"></div>
        </>
    }
}
