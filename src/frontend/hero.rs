use gloo::events::EventListener;
use web_sys::window;
use yew::prelude::*;

use super::frame::FrameLoop;
use super::{scroll_y, set_style};
use crate::content::HERO_LINES;
use crate::reveal::{stagger_delay, TITLE_REVEAL};
use crate::scroll::ParallaxFrame;

#[function_component(Hero)]
pub fn hero() -> Html {
    let foreground = use_node_ref();
    let background = use_node_ref();
    let hint = use_node_ref();

    {
        let foreground = foreground.clone();
        let background = background.clone();
        let hint = hint.clone();
        use_effect_with((), move |_| {
            let frames = FrameLoop::new(move |_, _| {
                let parallax = ParallaxFrame::at(scroll_y());
                set_style(&foreground, &parallax.foreground_css());
                set_style(&background, &parallax.background_css());
                set_style(&hint, &parallax.hint_css());
                false
            });
            frames.wake();

            let listener = window().map(|win| {
                let frames = frames.clone();
                EventListener::new(&win, "scroll", move |_| frames.wake())
            });

            move || {
                drop(listener);
                frames.stop();
            }
        });
    }

    html! {
        <div class="hero">
            <div ref={foreground} class="hero-shape hero-shape-front"></div>
            <div ref={background} class="hero-shape hero-shape-back"></div>

            <div class="hero-copy">
                <div class="hero-badge">
                    <span>{"Portfolio 2025"}</span>
                </div>

                { for HERO_LINES.iter().enumerate().map(|(index, line)| html! {
                    <div class="hero-line" key={*line}>
                        <h1
                            class={classes!("hero-title", (index > 0).then_some("hero-title-muted"))}
                            style={TITLE_REVEAL.entrance_style(stagger_delay(index))}
                        >
                            {*line}
                        </h1>
                    </div>
                }) }

                <div class="hero-subtitle">
                    <p class="hero-role">
                        {"Aspiring "}<span class="serif-italic accent">{"Computer Scientist"}</span>
                    </p>
                    <p class="hero-target">{"Target: TU Delft"}</p>
                </div>
            </div>

            <div ref={hint} class="hero-hint">
                <span>{"SCROLL"}</span>
                <span class="hero-hint-arrow" aria-hidden="true">{"↓"}</span>
            </div>
        </div>
    }
}
