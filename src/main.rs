use std::rc::Rc;

use gloo::console::error;

mod app;
mod catalog;
mod config;
mod forms;
mod sections;

#[cfg(test)]
mod test_support;

use app::{App, AppProps};

fn main() {
    if let Err(e) = catalog::validate(catalog::MENU_CATEGORIES, catalog::DRINK_CATEGORIES) {
        error!(format!("Menu catalog problem: {e}"));
    }

    let config = Rc::new(config::load());
    let year = js_sys::Date::new_0().get_full_year() as i32;

    yew::Renderer::<App>::with_props(AppProps { config, year }).render();
}
