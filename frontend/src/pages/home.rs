use yew::prelude::*;
use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;

use crate::chrome::{LightboxState, MobileMenu};
use crate::components::lightbox::Lightbox;
use crate::components::nav::{anchor_scroll, Nav};
use crate::components::puzzle_intro::PuzzleIntro;
use crate::components::video_gallery::VideoSection;
use crate::config;
use crate::intro::{self, AnimationOptions, IntroPhase, LoadDecision};
use crate::storage::{self, BrowserStore};

const SECTION_LINKS: &[(&str, &str)] = &[
    ("Our Story", "#story"),
    ("Details", "#details"),
    ("Gallery", "#gallery"),
    ("Videos", "#videos"),
];

const PHOTOS: &[(&str, &str)] = &[
    ("/assets/photos/proposal.jpg", "The proposal"),
    ("/assets/photos/engagement.jpg", "Engagement shoot"),
    ("/assets/photos/ceremony.jpg", "Ceremony"),
    ("/assets/photos/first-dance.jpg", "First dance"),
    ("/assets/photos/toast.jpg", "The toast"),
    ("/assets/photos/sparklers.jpg", "Sparkler exit"),
];

/// Shows the main content once the overlay has faded.
fn reveal(content: &HtmlElement) {
    let style = content.style();
    let _ = style.set_property("display", "block");
    // reading layout here makes the opacity change below animate
    let _ = content.offset_width();
    let _ = style.set_property("opacity", "1");
}

#[function_component(Home)]
pub fn home() -> Html {
    let decision = *use_state(|| {
        intro::decide_on_load(storage::puzzle_solved(&BrowserStore::session()), true)
    });
    // `guard` is what callbacks check, `phase` is what the view renders
    let guard = use_mut_ref(|| IntroPhase::initial(decision));
    let phase = use_state(|| IntroPhase::initial(decision));
    let content_ref = use_node_ref();
    let menu = use_state(MobileMenu::default);
    let lightbox = use_state(LightboxState::default);

    use_effect_with_deps(
        move |_| {
            match decision {
                LoadDecision::Bypass => log::info!("Intro already solved this session"),
                LoadDecision::RunPuzzle => log::info!("Starting intro puzzle"),
                LoadDecision::NoIntro => {}
            }
            if let Some(options) = decision.load_animations() {
                intro::init_scroll_animations(options);
            }
            || ()
        },
        (),
    );

    let complete_intro = {
        let guard = guard.clone();
        let phase = phase.clone();
        let content_ref = content_ref.clone();
        Callback::from(move |_: ()| {
            if !intro::complete_intro(&mut guard.borrow_mut(), &BrowserStore::session()) {
                return;
            }
            phase.set(*guard.borrow());

            let guard = guard.clone();
            let phase = phase.clone();
            let content_ref = content_ref.clone();
            let timeout = Timeout::new(config::INTRO_FADE_MS, move || {
                if !intro::finish_intro(&mut guard.borrow_mut()) {
                    return;
                }
                if let Some(content) = content_ref.cast::<HtmlElement>() {
                    reveal(&content);
                }
                phase.set(*guard.borrow());
                intro::init_scroll_animations(AnimationOptions::first_visit());
            });
            timeout.forget();
        })
    };

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: ()| menu.set(menu.toggled()))
    };
    let on_anchor = anchor_scroll(menu.clone());

    let on_lightbox = {
        let lightbox = lightbox.clone();
        Callback::from(move |next: LightboxState| lightbox.set(next))
    };

    let photos = PHOTOS.iter().map(|(src, caption)| {
        let onclick = {
            let lightbox = lightbox.clone();
            let src = *src;
            Callback::from(move |_: MouseEvent| lightbox.set(LightboxState::opened(src)))
        };
        html! {
            <figure class="photo" data-aos="zoom-in" {onclick}>
                <img src={*src} alt={*caption} loading="lazy" />
                <figcaption>{*caption}</figcaption>
            </figure>
        }
    });

    html! {
        <>
            {
                if phase.shows_overlay() {
                    html! { <PuzzleIntro phase={*phase} on_complete={complete_intro} /> }
                } else {
                    html! {}
                }
            }
            <div id="main-content" class="main-content" ref={content_ref} style={phase.content_style()}>
                <style>
                    {r#"
                        .main-content {
                            transition: opacity 1s ease;
                            color: #4a3a2e;
                        }
                        .hero {
                            min-height: 100vh;
                            display: flex;
                            flex-direction: column;
                            align-items: center;
                            justify-content: center;
                            text-align: center;
                            background: linear-gradient(rgba(0,0,0,0.25), rgba(0,0,0,0.25)),
                                url("/assets/photos/hero.jpg") center / cover no-repeat;
                            color: #fff;
                        }
                        .hero h1 {
                            font-family: "Great Vibes", cursive;
                            font-size: clamp(3rem, 8vw, 6rem);
                            margin: 0;
                        }
                        .wedding-section {
                            max-width: 1100px;
                            margin: 0 auto;
                            padding: 6rem 1.5rem;
                        }
                        .wedding-section h2 {
                            font-family: "Great Vibes", cursive;
                            font-size: 2.8rem;
                            text-align: center;
                            color: #8a6d5a;
                        }
                        .details-grid {
                            display: grid;
                            grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                            gap: 2rem;
                            text-align: center;
                        }
                        .photo-grid {
                            display: grid;
                            grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
                            gap: 1rem;
                        }
                        .photo {
                            margin: 0;
                            cursor: zoom-in;
                        }
                        .photo img {
                            width: 100%;
                            height: 260px;
                            object-fit: cover;
                            border-radius: 6px;
                        }
                        .photo figcaption {
                            text-align: center;
                            font-size: 0.85rem;
                            margin-top: 0.4rem;
                        }
                        .site-footer {
                            text-align: center;
                            padding: 3rem 1rem;
                            color: #a38b7a;
                        }
                    "#}
                </style>
                <Nav
                    menu={*menu}
                    on_toggle={toggle_menu}
                    on_anchor={on_anchor.clone()}
                    links={SECTION_LINKS}
                />
                <header id="home" class="hero">
                    <h1 data-aos="fade-down">{"Anna & James"}</h1>
                    <p data-aos="fade-up">{"14 June 2025 · Lake Como"}</p>
                    <a href="#story" class="hero-scroll" onclick={on_anchor.clone()}>
                        <i class="fas fa-chevron-down"></i>
                    </a>
                </header>
                <section id="story" class="wedding-section">
                    <h2 data-aos="fade-up">{"Our Story"}</h2>
                    <p data-aos="fade-up">
                        {"We met on a rainy Tuesday in a bookshop neither of us meant to walk into. Eight years, three cities and one very patient dog later, we are getting married."}
                    </p>
                </section>
                <section id="details" class="wedding-section">
                    <h2 data-aos="fade-up">{"The Details"}</h2>
                    <div class="details-grid">
                        <div data-aos="fade-right">
                            <h3>{"Ceremony"}</h3>
                            <p>{"4:00 PM · Villa Lario gardens"}</p>
                        </div>
                        <div data-aos="fade-up">
                            <h3>{"Dinner"}</h3>
                            <p>{"6:30 PM · The lakeside terrace"}</p>
                        </div>
                        <div data-aos="fade-left">
                            <h3>{"Party"}</h3>
                            <p>{"9:00 PM until the boats stop running"}</p>
                        </div>
                    </div>
                </section>
                <section id="gallery" class="wedding-section">
                    <h2 data-aos="fade-up">{"Gallery"}</h2>
                    <div class="photo-grid">
                        { for photos }
                    </div>
                </section>
                <section id="videos" class="wedding-section">
                    <h2 data-aos="fade-up">{"Your Videos"}</h2>
                    <p data-aos="fade-up">{"Share the moments you caught. Videos stay on this device only."}</p>
                    <VideoSection />
                </section>
                <footer class="site-footer">
                    <p>{"Made with love · Anna & James"}</p>
                </footer>
            </div>
            <Lightbox state={(*lightbox).clone()} on_change={on_lightbox} />
        </>
    }
}
