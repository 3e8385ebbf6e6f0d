//! Demo host: mounts a gallery of badges under a shared configuration.

use badge_config::BadgeConfig;
use yew::prelude::*;

use crate::components::Badge;
use crate::model::IconPosition;

mod host_config;

#[function_component(BadgeGallery)]
fn badge_gallery() -> Html {
    let config = use_memo(|_| host_config::load_or_default(), ());
    let flipped = use_state(|| false);

    let on_flip = {
        let flipped = flipped.clone();
        Callback::from(move |_: MouseEvent| flipped.set(!*flipped))
    };
    let live_label = if *flipped { "B" } else { "A" };

    html! {
        <ContextProvider<BadgeConfig> context={(*config).clone()}>
            <main class="badge-gallery">
                <section>
                    <h2>{"Label only"}</h2>
                    <Badge label="New" />
                </section>
                <section>
                    <h2>{"Icon and size"}</h2>
                    <Badge label="5" icon_name="star" size="large" />
                    <Badge
                        label="Due"
                        icon_name="utility:clock"
                        size="small"
                        icon_position={IconPosition::Right}
                    />
                </section>
                <section>
                    <h2>{"Re-render"}</h2>
                    <Badge label={live_label} />
                    <button type="button" onclick={on_flip}>{"Toggle label"}</button>
                </section>
            </main>
        </ContextProvider<BadgeConfig>>
    }
}

/// Install logging and the panic hook, then render the gallery.
pub fn run_app() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<BadgeGallery>::with_root(root).render();
    } else {
        yew::Renderer::<BadgeGallery>::new().render();
    }
}
