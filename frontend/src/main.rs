use log::info;
use yew::prelude::*;

mod config;
mod content;
mod models;
mod components {
    pub mod cards;
    pub mod faq;
    pub mod icon;
    pub mod learning_module;
    pub mod progress_chart;
    pub mod reveal;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    info!("Rendering Landing page");
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::SITE_NAME);
    yew::Renderer::<App>::new().render();
}
