use js_sys::Array;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::content::CourseEntry;
use crate::reveal::{stagger_delay, RevealProfile, RevealState, CARD_REVEAL, SECTION_REVEAL};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Keeps the observer and its callback alive together; disconnects on drop.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_once(
    element: &Element,
    root_margin: &str,
    state: Rc<RefCell<RevealState>>,
    on_reveal: Callback<()>,
) -> Option<RevealObserver> {
    let callback = ObserverCallback::new(move |entries: Array, observer: IntersectionObserver| {
        let intersecting = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .any(|entry| entry.is_intersecting());

        if state.borrow_mut().observe(intersecting) {
            observer.disconnect();
            on_reveal.emit(());
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_root_margin(root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(element);

    Some(RevealObserver {
        observer,
        _callback: callback,
    })
}

/// `true` from the first time `node` scrolls into view, for good.
#[hook]
fn use_reveal(node: NodeRef, profile: RevealProfile) -> bool {
    let revealed = use_state_eq(|| false);
    let state = use_mut_ref(RevealState::default);

    {
        let revealed = revealed.clone();
        use_effect_with(node, move |node| {
            let on_reveal = Callback::from(move |_| revealed.set(true));
            let observer = match node.cast::<Element>() {
                Some(element) if !state.borrow().is_revealed() => {
                    let observer = observe_once(
                        &element,
                        profile.root_margin,
                        Rc::clone(&state),
                        on_reveal.clone(),
                    );
                    // No IntersectionObserver: show the block rather than hide it forever.
                    if observer.is_none() && state.borrow_mut().observe(true) {
                        on_reveal.emit(());
                    }
                    observer
                }
                _ => None,
            };
            move || drop(observer)
        });
    }

    *revealed
}

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), SECTION_REVEAL);

    html! {
        <section
            id={props.id.clone()}
            ref={node}
            class="section"
            style={SECTION_REVEAL.style(revealed, props.delay)}
        >
            {props.children.clone()}
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct CourseCardProps {
    pub course: CourseEntry,
    pub index: usize,
}

#[function_component(CourseCard)]
pub fn course_card(props: &CourseCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), CARD_REVEAL);
    let course = props.course;

    html! {
        <article
            ref={node}
            class="course-card"
            style={CARD_REVEAL.style(revealed, stagger_delay(props.index))}
        >
            <div class="course-glow" aria-hidden="true"></div>
            <div class="course-grid">
                <div class="course-meta">
                    <span class="course-year">{course.year}</span>
                    <span class="course-id">{format!("/{}", course.id)}</span>
                </div>
                <div class="course-heading">
                    <h3>{course.title}</h3>
                    <p class="serif-italic">{course.institution}</p>
                </div>
                <div class="course-body">
                    <p>{course.description}</p>
                    <ul class="tag-list">
                        { for course.skills.iter().map(|skill| html! {
                            <li key={*skill} class="tag">{*skill}</li>
                        }) }
                    </ul>
                </div>
            </div>
            <div class="course-line" aria-hidden="true"></div>
        </article>
    }
}
