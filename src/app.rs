use std::rc::Rc;

use yew::prelude::*;

use crate::config::SiteConfig;
use crate::sections::{About, Contact, Footer, Gallery, Hero, MenuSection, Navigation, Reservation};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<SiteConfig>,
    /// Copyright year for the footer, read from the clock once at start-up.
    pub year: i32,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = props.config.clone();

    html! {
      <main class="page">
        <Navigation config={config.clone()} />
        <Hero config={config.clone()} />
        <About config={config.clone()} />
        <MenuSection />
        <Gallery />
        <Reservation />
        <Contact config={config.clone()} />
        <Footer {config} year={props.year} />
      </main>
    }
}
