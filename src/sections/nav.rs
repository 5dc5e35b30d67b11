use std::rc::Rc;

use yew::prelude::*;

use crate::config::SiteConfig;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    /// Also listed under "Quick Links" in the footer.
    pub in_footer: bool,
}

pub const NAV_LINKS: [NavLink; 6] = [
    NavLink { href: "#home", label: "Home", in_footer: true },
    NavLink { href: "#about", label: "About", in_footer: true },
    NavLink { href: "#menu", label: "Menu", in_footer: true },
    NavLink { href: "#gallery", label: "Gallery", in_footer: false },
    NavLink { href: "#reservation", label: "Reservation", in_footer: true },
    NavLink { href: "#contact", label: "Contact", in_footer: false },
];

/// Mobile menu drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    #[default]
    Closed,
    Open,
}

impl NavState {
    pub fn toggle(self) -> Self {
        match self {
            NavState::Closed => NavState::Open,
            NavState::Open => NavState::Closed,
        }
    }

    /// Following a link always closes the drawer.
    pub fn select_link(self) -> Self {
        NavState::Closed
    }

    pub fn is_open(self) -> bool {
        self == NavState::Open
    }
}

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub config: Rc<SiteConfig>,
    #[prop_or_default]
    pub initial: NavState,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let state = {
        let initial = props.initial;
        use_state(move || initial)
    };

    let on_toggle = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.set(state.toggle()))
    };

    let on_select = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.set(state.select_link()))
    };

    let cfg = &props.config;

    html! {
      <nav class="topnav">
        <div class="container">
          <div class="topnav-row">
            <a href="#home" class="brand">
              <img src={cfg.logo.clone()} alt={format!("{} Logo", cfg.name)} class="brand-logo" />
              <span class="brand-name">{ cfg.brand.clone() }</span>
            </a>

            <div class="nav-desktop">
              { for NAV_LINKS.iter().map(|l| html! {
                  <a key={l.href} href={l.href} class="nav-link">{ l.label }</a>
              }) }
            </div>

            <button class="nav-toggle" aria-label="Toggle menu" onclick={on_toggle}>
              { if state.is_open() { "✕" } else { "☰" } }
            </button>
          </div>

          if state.is_open() {
            <div class="nav-mobile">
              { for NAV_LINKS.iter().map(|l| html! {
                  <a key={l.href} href={l.href} class="nav-link block" onclick={on_select.clone()}>
                    { l.label }
                  </a>
              }) }
            </div>
          }
        </div>
      </nav>
    }
}
