use std::rc::Rc;

use yew::prelude::*;

use super::nav::NAV_LINKS;
use crate::config::SiteConfig;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub config: Rc<SiteConfig>,
    pub year: i32,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let cfg = &props.config;

    html! {
      <footer class="footer">
        <div class="container">
          <div class="footer-grid">
            <div>
              <div class="brand">
                <img src={cfg.logo.clone()} alt={format!("{} Logo", cfg.name)} class="brand-logo" />
                <span class="brand-name">{ cfg.brand.clone() }</span>
              </div>
              <p class="muted small">{ "Authentic Korean BBQ experience in the heart of Kingston, Ontario." }</p>
            </div>

            <div>
              <h4 class="footer-h">{ "Quick Links" }</h4>
              { for NAV_LINKS.iter().filter(|l| l.in_footer).map(|l| html! {
                  <a key={l.href} href={l.href} class="footer-link">{ l.label }</a>
              }) }
            </div>

            <div>
              <h4 class="footer-h">{ "Contact" }</h4>
              <div class="muted small">
                <p>{ cfg.street.clone() }</p>
                <p>{ cfg.city_line.clone() }</p>
                <p>{ cfg.phone_display.clone() }</p>
                <a href={cfg.instagram_url.clone()} target="_blank" rel="noopener noreferrer" class="footer-link">
                  { cfg.instagram_handle.clone() }
                </a>
              </div>
            </div>
          </div>

          <div class="footer-bottom">
            <p class="muted small">
              { format!("© {} {} Korean BBQ. All rights reserved.", props.year, cfg.name) }
            </p>
          </div>
        </div>
      </footer>
    }
}
