use yew::prelude::*;

use crate::chrome::MobileMenu;
use crate::components::nav::{anchor_scroll, Nav};
use crate::components::video_gallery::VideoSection;
use crate::intro::{self, IntroPhase};
use crate::storage::{self, BrowserStore};

const PAGE_LINKS: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Upload", "#upload"),
];

/// Stand-alone upload page. It has no intro overlay, so it never runs the
/// puzzle.
#[function_component(Videos)]
pub fn videos() -> Html {
    let decision = *use_state(|| {
        intro::decide_on_load(storage::puzzle_solved(&BrowserStore::session()), false)
    });
    let menu = use_state(MobileMenu::default);

    use_effect_with_deps(
        move |_| {
            if let Some(options) = decision.load_animations() {
                intro::init_scroll_animations(options);
            }
            || ()
        },
        (),
    );

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: ()| menu.set(menu.toggled()))
    };

    html! {
        <div id="main-content" class="main-content" style={IntroPhase::initial(decision).content_style()}>
            <Nav
                menu={*menu}
                on_toggle={toggle_menu}
                on_anchor={anchor_scroll(menu.clone())}
                links={PAGE_LINKS}
            />
            <section id="upload" class="wedding-section" style="padding-top: 8rem;">
                <h2 data-aos="fade-up">{"Share Your Videos"}</h2>
                <VideoSection />
            </section>
        </div>
    }
}
