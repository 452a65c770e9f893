use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod chrome;
mod config;
mod dialogs;
mod gallery;
mod intro;
mod puzzle;
mod storage;
mod components {
    pub mod lightbox;
    pub mod nav;
    pub mod puzzle_intro;
    pub mod video_gallery;
}
mod pages {
    pub mod home;
    pub mod videos;
}

use pages::{home::Home, videos::Videos};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/videos")]
    Videos,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Videos => {
            info!("Rendering Videos page");
            html! { <Videos /> }
        },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting wedding site");
    yew::Renderer::<App>::new().render();
}
