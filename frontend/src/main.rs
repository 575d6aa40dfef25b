use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod directory;
mod scroll;
mod components {
    pub mod faq;
    pub mod footer;
    pub mod fragment_link;
    pub mod nav;
}
mod pages {
    pub mod get_started;
    pub mod how_it_works;
    pub mod landing;
    pub mod leader_profile;
    pub mod leadership;
    pub mod not_found;
    pub mod therapists;
}

use components::{footer::Footer, nav::Nav};
use pages::{
    get_started::GetStarted,
    how_it_works::HowItWorks,
    landing::Landing,
    leader_profile::LeaderProfile,
    leadership::Leadership,
    not_found::NotFound,
    therapists::Therapists,
};
use scroll::ScrollRestoration;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/how-it-works")]
    HowItWorks,
    #[at("/leadership")]
    Leaders,
    #[at("/leader")]
    LeaderBare,
    #[at("/leader/:id")]
    Leader { id: String },
    #[at("/therapists")]
    Therapists,
    #[at("/get-started")]
    GetStarted,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::HowItWorks => {
            info!("Rendering How It Works page");
            html! { <HowItWorks /> }
        },
        Route::Leaders => {
            info!("Rendering Leadership page");
            html! { <Leadership /> }
        },
        Route::LeaderBare => {
            info!("Rendering Leader page without id");
            html! { <LeaderProfile /> }
        },
        Route::Leader { id } => {
            info!("Rendering Leader page for {}", id);
            html! { <LeaderProfile id={Some(AttrValue::from(id))} /> }
        },
        Route::Therapists => {
            info!("Rendering Therapists page");
            html! { <Therapists /> }
        },
        Route::GetStarted => {
            info!("Rendering Get Started page");
            html! { <GetStarted /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ScrollRestoration />
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn leader_routes_round_trip() {
        let route = Route::Leader { id: "2".to_string() };
        assert_eq!(route.to_path(), "/leader/2");
        assert_eq!(Route::recognize("/leader/2"), Some(route));
    }

    #[test]
    fn bare_leader_path_has_its_own_route() {
        assert_eq!(Route::recognize("/leader"), Some(Route::LeaderBare));
    }

    #[test]
    fn not_found_route_is_registered() {
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
        assert_eq!(Route::Home.to_path(), "/");
    }
}
