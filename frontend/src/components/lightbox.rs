use yew::prelude::*;
use web_sys::{window, Element};

use crate::chrome::LightboxState;

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub state: LightboxState,
    pub on_change: Callback<LightboxState>,
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let img_ref = use_node_ref();

    // Page scroll is locked while the overlay is up
    use_effect_with_deps(
        move |overflow: &&'static str| {
            if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
                let _ = body.style().set_property("overflow", overflow);
            }
            || ()
        },
        props.state.body_overflow(),
    );

    let onclick = {
        let state = props.state.clone();
        let on_change = props.on_change.clone();
        let img_ref = img_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let on_image = match (e.target_dyn_into::<Element>(), img_ref.cast::<Element>()) {
                (Some(target), Some(img)) => target == img,
                _ => false,
            };
            on_change.emit(state.after_click(on_image));
        })
    };

    let display = if props.state.is_open() { "display: block;" } else { "display: none;" };

    html! {
        <div id="lightbox" class="lightbox" style={display} {onclick}>
            <style>
                {r#"
                    .lightbox {
                        position: fixed;
                        inset: 0;
                        z-index: 1000;
                        background: rgba(20, 14, 10, 0.92);
                        cursor: zoom-out;
                    }
                    .lightbox img {
                        display: block;
                        max-width: 90vw;
                        max-height: 85vh;
                        margin: 7vh auto 0;
                        border-radius: 4px;
                        cursor: default;
                    }
                    .close-lightbox {
                        position: absolute;
                        top: 1rem;
                        right: 2rem;
                        color: #fff;
                        font-size: 2.5rem;
                        cursor: pointer;
                    }
                "#}
            </style>
            <span class="close-lightbox">{"×"}</span>
            <img
                id="lightbox-img"
                ref={img_ref}
                src={props.state.source().unwrap_or_default().to_string()}
                alt="Enlarged photo"
            />
        </div>
    }
}
