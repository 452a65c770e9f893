use yew::prelude::*;
use yew_hooks::prelude::*;
use web_sys::{window, Element, ScrollBehavior, ScrollIntoViewOptions};

use crate::chrome::{self, MobileMenu};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub menu: MobileMenu,
    pub on_toggle: Callback<()>,
    pub on_anchor: Callback<MouseEvent>,
    /// (label, href) pairs
    pub links: &'static [(&'static str, &'static str)],
}

/// Click handler for same-page links: closes the mobile menu, then smoothly
/// scrolls to the element the fragment names. Links whose target is missing
/// keep the browser's default behaviour.
pub fn anchor_scroll(menu: UseStateHandle<MobileMenu>) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        if menu.is_open() {
            menu.set(menu.closed());
        }

        let Some(link) = e
            .target_dyn_into::<Element>()
            .and_then(|el| el.closest("a[href^='#']").ok().flatten())
        else {
            return;
        };
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        let Some(id) = chrome::fragment_target(&href) else {
            return;
        };
        let Some(target) = window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(id))
        else {
            return;
        };

        e.prevent_default();
        let mut options = ScrollIntoViewOptions::new();
        options.behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    })
}

fn current_scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { menu, on_toggle, on_anchor, links } = props;
    let is_scrolled = use_state(|| chrome::nav_scrolled(current_scroll_y()));

    {
        let is_scrolled = is_scrolled.clone();
        use_event_with_window("scroll", move |_: Event| {
            is_scrolled.set(chrome::nav_scrolled(current_scroll_y()));
        });
    }

    let toggle_menu = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <nav class={classes!("main-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .main-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 100;
                        padding: 1.5rem 0;
                        transition: background 0.3s ease, padding 0.3s ease;
                    }
                    .main-nav.scrolled {
                        background: rgba(255, 250, 245, 0.96);
                        box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
                        padding: 0.8rem 0;
                    }
                    .nav-container {
                        max-width: 1100px;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 0 1.5rem;
                    }
                    .nav-logo {
                        font-family: "Great Vibes", cursive;
                        font-size: 2rem;
                        color: #8a6d5a;
                        text-decoration: none;
                    }
                    .nav-links {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-links a {
                        color: #5a4638;
                        text-decoration: none;
                        letter-spacing: 0.08em;
                        text-transform: uppercase;
                        font-size: 0.85rem;
                    }
                    .hamburger {
                        display: none;
                        background: none;
                        border: none;
                        font-size: 1.5rem;
                        color: #5a4638;
                        cursor: pointer;
                    }
                    @media (max-width: 768px) {
                        .hamburger {
                            display: block;
                        }
                        .nav-links {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            width: 100%;
                            flex-direction: column;
                            align-items: center;
                            background: rgba(255, 250, 245, 0.98);
                            padding: 1.5rem 0;
                        }
                        .nav-links.active {
                            display: flex;
                        }
                    }
                "#}
            </style>
            <div class="nav-container">
                <a href="#home" class="nav-logo" onclick={on_anchor.clone()}>{"A & J"}</a>
                <div class={menu.links_class()}>
                    { for links.iter().map(|(label, href)| html! {
                        <a href={*href} onclick={on_anchor.clone()}>{*label}</a>
                    }) }
                </div>
                <button class="hamburger" aria-label="Menu" onclick={toggle_menu}>
                    <i class={menu.icon_class()}></i>
                </button>
            </div>
        </nav>
    }
}
