use yew::prelude::*;

const DOT_DELAYS_S: [f64; 3] = [0.0, 0.2, 0.4];

#[derive(Properties, PartialEq)]
pub struct PreloaderProps {
    pub ready: bool,
}

/// Full-screen cover until the scroll bridge reports ready, then fades out.
#[function_component(Preloader)]
pub fn preloader(props: &PreloaderProps) -> Html {
    html! {
        <div
            class={classes!("preloader", props.ready.then_some("is-done"))}
            aria-hidden={props.ready.to_string()}
        >
            <div class="preloader-dots">
                { for DOT_DELAYS_S.iter().map(|delay| html! {
                    <span class="preloader-dot" style={format!("animation-delay: {delay}s;")}></span>
                }) }
            </div>
        </div>
    }
}
