use crate::app::App;

mod app;
mod components;
mod config;
mod helpers;
mod navigation;
mod services;

fn main() {
    yew::Renderer::<App>::new().render();
}
