#![recursion_limit = "512"]

//! # userdesk
//!
//! Yew + WASM front-end: a landing card and a user creation form that
//! validates a username/avatar pair and appends it to `localStorage`.

pub mod components;
pub mod config;
pub mod models;
pub mod services;

use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

use components::home::{Home, NewUserPage};
use config::AppConfig;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[derive(Debug, Clone, Copy, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/users/new")]
    NewUser,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(Main)]
fn main() -> Html {
    let config = use_state(AppConfig::load);

    html! {
        <ContextProvider<AppConfig> context={(*config).clone()}>
            <BrowserRouter>
                <div class="flex w-screen h-screen">
                    <Switch<Route> render={Switch::render(switch)} />
                </div>
            </BrowserRouter>
        </ContextProvider<AppConfig>>
    }
}

fn switch(selected_route: &Route) -> Html {
    match selected_route {
        Route::Home => html! { <Home /> },
        Route::NewUser => html! { <NewUserPage /> },
        Route::NotFound => html! { <h1 class="m-auto text-2xl">{"404 not found"}</h1> },
    }
}

fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[wasm_bindgen(start)]
pub fn run_app() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(log_level()));
    log::info!("starting userdesk");
    yew::start_app::<Main>();
    Ok(())
}
