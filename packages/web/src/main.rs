use dioxus::prelude::*;

use ui::{BrandingConfig, Destination};
use views::{AdminDashboard, Dashboard, Home, Login, Signup};

mod views;

/// Client-side routes. There is no catch-all: unknown paths match no view.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/signup")]
    Signup {},
    #[route("/login")]
    Login {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/AdminDashboard")]
    AdminDashboard {},
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Home => Route::Home {},
            Destination::Signup => Route::Signup {},
            Destination::Login => Route::Login {},
            Destination::Dashboard => Route::Dashboard {},
            Destination::AdminDashboard => Route::AdminDashboard {},
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(BrandingConfig::embedded);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Push a view's requested destination onto the router.
fn use_destination_handler() -> impl Fn(Destination) + Copy + 'static {
    let nav = use_navigator();
    move |destination: Destination| {
        tracing::debug!(path = destination.path(), "Navigating");
        nav.push(Route::from(destination));
    }
}
