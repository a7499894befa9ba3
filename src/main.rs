use yew::prelude::*;
use log::info;

mod config;
mod dom;
mod navigation;
mod catalog {
    pub mod models;
    pub mod overlays;
    pub mod regions;
}
mod hover {
    pub mod mediator;
    pub mod policy;
}
mod motion {
    pub mod in_view;
    pub mod parallax;
    pub mod presence;
    pub mod variants;
}
mod components {
    pub mod catalog_entry;
    pub mod contact_panel;
    pub mod hero;
    pub mod nav_bar;
    pub mod overlay_card;
    pub mod service_catalog;
    pub mod support_catalog;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    info!("Starting {} site", config::COMPANY_NAME);
    yew::Renderer::<App>::new().render();
}
