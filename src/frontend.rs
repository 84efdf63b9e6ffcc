mod cursor;
mod engine;
mod frame;
mod hero;
mod preloader;
mod reveal;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::{Interval, Timeout};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{window, Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::bridge::{
    Navigation, PollOutcome, SmoothScrollBridge, FALLBACK_TIMEOUT_MS, POLL_INTERVAL_MS,
};
use crate::content::{
    NavLink, CONTACT_EMAIL, COURSEWORK, NAV_LINKS, OWNER_NAME, PROJECTS, SKILL_CATEGORIES,
    TERMINAL_SKILLS, WHOAMI_LINES,
};
use crate::scroll::{nav_is_compact, SkewController, VelocityTracker};

use cursor::Cursor;
use engine::Lenis;
use frame::FrameLoop;
use hero::Hero;
use preloader::Preloader;
use reveal::{CourseCard, Section};

type PageBridge = SmoothScrollBridge<Lenis, Interval, Timeout, AnimationFrame>;

fn scroll_y() -> f64 {
    window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

fn set_style(node: &NodeRef, css: &str) {
    if let Some(element) = node.cast::<Element>() {
        let _ = element.set_attribute("style", css);
    }
}

fn native_scroll_into_view(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Feeds the engine one timestamp per frame until the bridge stops it.
fn drive_engine(bridge: &Rc<RefCell<PageBridge>>) {
    let frame = {
        let bridge = Rc::clone(bridge);
        request_animation_frame(move |time| {
            if bridge.borrow_mut().drive_frame(time) {
                drive_engine(&bridge);
            }
        })
    };
    bridge.borrow_mut().arm_frame(frame);
}

fn start_bridge(bridge: &Rc<RefCell<PageBridge>>, ready: UseStateHandle<bool>) {
    let poll = {
        let bridge = Rc::clone(bridge);
        let ready = ready.clone();
        Interval::new(POLL_INTERVAL_MS, move || {
            let outcome = bridge.borrow_mut().poll(engine::detect);
            if outcome == PollOutcome::Activated {
                ready.set(true);
                drive_engine(&bridge);
            }
        })
    };

    let fallback = {
        let bridge = Rc::clone(bridge);
        Timeout::new(FALLBACK_TIMEOUT_MS, move || {
            if bridge.borrow_mut().fallback_elapsed() {
                ready.set(true);
            }
        })
    };

    bridge.borrow_mut().start(poll, fallback);
}

#[derive(Properties, PartialEq)]
struct NavBarProps {
    compact: bool,
    on_navigate: Callback<&'static str>,
}

#[function_component(NavBar)]
fn nav_bar(props: &NavBarProps) -> Html {
    html! {
        <nav class={classes!("site-nav", props.compact.then_some("is-compact"))}>
            <div class="site-nav-inner">
                <a href="#" class="logo">{"E"}<span class="accent">{"."}</span></a>
                <div class="site-nav-links">
                    { for NAV_LINKS.iter().map(|link| {
                        let NavLink { label, anchor } = *link;
                        let on_navigate = props.on_navigate.clone();
                        let onclick = Callback::from(move |event: MouseEvent| {
                            event.prevent_default();
                            on_navigate.emit(anchor);
                        });
                        html! {
                            <a key={anchor} href={link.href()} class="nav-link" onclick={onclick}>
                                <span>{label}</span>
                                <span class="nav-underline" aria-hidden="true"></span>
                            </a>
                        }
                    }) }
                </div>
            </div>
        </nav>
    }
}

fn about() -> Html {
    html! {
        <Section id="about">
            <div class="about-grid">
                <div>
                    <h2 class="about-title">
                        {"Logic"}<br />
                        <span class="serif-italic muted">{"&"}</span>{" Code"}
                    </h2>
                    <div class="about-copy">
                        <p>
                            {"I don't just write code; I architect solutions based on fundamental truths. My journey traverses the abstract landscapes of "}
                            <strong>{"advanced mathematics"}</strong>
                            {" and the concrete battlegrounds of "}
                            <strong>{"cybersecurity"}</strong>{"."}
                        </p>
                        <p>
                            {"Currently aimed at "}<span class="accent">{"TU Delft"}</span>
                            {", I combine the rigor of formal logic with the creativity of engineering to build systems that are secure by design."}
                        </p>
                    </div>
                </div>

                <div class="terminal">
                    <div class="terminal-lights" aria-hidden="true">
                        <span></span><span></span><span></span>
                    </div>
                    <div class="terminal-line"><span class="accent">{"➜ "}</span>{"whoami"}</div>
                    <div class="terminal-output">
                        { for WHOAMI_LINES.iter().map(|line| html! { <div>{*line}</div> }) }
                    </div>
                    <div class="terminal-line"><span class="accent">{"➜ "}</span>{"skills --list"}</div>
                    <div class="terminal-output terminal-grid">
                        { for TERMINAL_SKILLS.iter().map(|skill| html! { <span>{format!("[✓] {skill}")}</span> }) }
                    </div>
                    <div class="terminal-line">
                        <span class="accent">{"➜ "}</span>
                        <span class="terminal-caret" aria-hidden="true"></span>
                    </div>
                </div>
            </div>
        </Section>
    }
}

fn coursework() -> Html {
    html! {
        <Section id="coursework">
            <div class="section-head">
                <div>
                    <span class="eyebrow">{"Academic Foundation"}</span>
                    <h2>{"Rigorous Coursework"}</h2>
                </div>
                <p class="muted">
                    {"University-level mathematics and computer science completed during high school."}
                </p>
            </div>
            <div class="course-list">
                { for COURSEWORK.iter().enumerate().map(|(index, course)| html! {
                    <CourseCard key={course.id} course={*course} index={index} />
                }) }
            </div>
        </Section>
    }
}

fn skills() -> Html {
    html! {
        <Section id="skills">
            <h2 class="centered">{"Technical Arsenal"}</h2>
            <div class="skill-grid">
                { for SKILL_CATEGORIES.iter().map(|category| html! {
                    <div key={category.title} class="skill-card">
                        <span class="skill-icon" aria-hidden="true">{category.icon.glyph()}</span>
                        <h3>{category.title}</h3>
                        <ul>
                            { for category.skills.iter().map(|skill| html! {
                                <li key={*skill}><span class="bullet"></span>{*skill}</li>
                            }) }
                        </ul>
                    </div>
                }) }
            </div>
        </Section>
    }
}

fn projects() -> Html {
    html! {
        <Section>
            <div class="projects-head">
                <h2>{"Featured Projects"}</h2>
                <div class="rule"></div>
            </div>
            <div class="project-grid">
                { for PROJECTS.iter().map(|project| {
                    let title = match project.link {
                        Some(link) => html! { <a href={link} target="_blank" rel="noopener noreferrer">{project.title}</a> },
                        None => html! { {project.title} },
                    };
                    html! {
                        <div key={project.title} class="project-card">
                            <div class="project-card-top">
                                <span class="project-icon" aria-hidden="true">{"</>"}</span>
                                <span class="project-arrow" aria-hidden="true">{"→"}</span>
                            </div>
                            <h3>{title}</h3>
                            <p>{project.description}</p>
                            <div class="tag-list">
                                { for project.tech.iter().map(|tech| html! {
                                    <span key={*tech} class="tag tag-square">{*tech}</span>
                                }) }
                            </div>
                        </div>
                    }
                }) }
            </div>
        </Section>
    }
}

fn footer() -> Html {
    html! {
        <footer id="contact" class="site-footer">
            <div class="site-footer-glow" aria-hidden="true"></div>
            <div class="site-footer-inner">
                <h2 class="footer-title">{"GET IN TOUCH"}</h2>
                <p class="serif-italic footer-tagline">{"Ready to engineer the future."}</p>
                <div class="footer-actions">
                    <a href={CONTACT_EMAIL} class="button button-solid">{"Contact Me"}</a>
                    <a href="#" class="button button-outline">{"GitHub Profile"}</a>
                </div>
                <div class="footer-meta">
                    <div>{format!("© 2025 {OWNER_NAME}")}</div>
                    <div>{"Built with Rust • Yew • WebAssembly"}</div>
                </div>
            </div>
        </footer>
    }
}

#[function_component(App)]
fn app() -> Html {
    let ready = use_state_eq(|| false);
    let compact = use_state_eq(|| nav_is_compact(scroll_y()));
    let bridge = use_mut_ref(PageBridge::new);
    let main_ref = use_node_ref();

    {
        let bridge = bridge.clone();
        let ready = ready.clone();
        use_effect_with((), move |_| {
            start_bridge(&bridge, ready);
            move || {
                bridge.borrow_mut().teardown();
            }
        });
    }

    {
        let compact = compact.clone();
        let main_ref = main_ref.clone();
        use_effect_with((), move |_| {
            let tracker = Rc::new(RefCell::new(VelocityTracker::default()));
            let mut skew = SkewController::default();

            let frames = {
                let tracker = Rc::clone(&tracker);
                FrameLoop::new(move |time, dt| {
                    let signal = tracker.borrow().signal(time);
                    skew.track(signal.velocity);
                    skew.step(dt);
                    set_style(&main_ref, &skew.css());
                    signal.velocity != 0.0 || !skew.is_settled()
                })
            };

            let listener = window().map(|win| {
                let frames = frames.clone();
                EventListener::new(&win, "scroll", move |event| {
                    let offset = scroll_y();
                    tracker.borrow_mut().record(offset, event.time_stamp());
                    compact.set(nav_is_compact(offset));
                    frames.wake();
                })
            });

            move || {
                drop(listener);
                frames.stop();
            }
        });
    }

    let on_navigate = {
        let bridge = bridge.clone();
        Callback::from(move |anchor: &'static str| {
            let Some(element) = window()
                .and_then(|win| win.document())
                .and_then(|document| document.get_element_by_id(anchor))
            else {
                return;
            };
            if bridge.borrow_mut().navigate(&element) == Navigation::Native {
                native_scroll_into_view(&element);
            }
        })
    };

    html! {
        <div class="page">
            <Cursor />
            <Preloader ready={*ready} />

            <div class="noise-overlay" aria-hidden="true"></div>
            <div class="grid-overlay" aria-hidden="true"></div>

            <NavBar compact={*compact} on_navigate={on_navigate} />

            <main ref={main_ref} class="page-main">
                <Hero />
                {about()}
                {coursework()}
                {skills()}
                {projects()}
                {footer()}
            </main>
        </div>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
