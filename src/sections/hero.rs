use std::rc::Rc;

use yew::prelude::*;

use crate::config::SiteConfig;

const HERO_BACKGROUND: &str = "/photo2.png";

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub config: Rc<SiteConfig>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let cfg = &props.config;

    html! {
      <section id="home" class="hero">
        <div class="hero-bg" style={format!("background-image: url({HERO_BACKGROUND});")}>
          <div class="hero-shade"></div>
        </div>

        <div class="hero-body">
          <div class="hero-brand">
            <img src={cfg.logo.clone()} alt={format!("{} Logo", cfg.name)} class="hero-logo" />
            <h1 class="hero-title">{ cfg.brand.clone() }</h1>
          </div>
          <p class="hero-tagline">{ cfg.tagline.clone() }</p>
          <p class="hero-sub">{ cfg.subline.clone() }</p>
          <div class="hero-actions">
            <a href="#reservation" class="btn btn-primary">{ "Make a Reservation" }</a>
            <a href="#menu" class="btn btn-outline">{ "View Menu" }</a>
          </div>
        </div>

        <a href="#about" class="scroll-hint" aria-label="Scroll to about">{ "⌄" }</a>
      </section>
    }
}
