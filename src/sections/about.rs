use std::rc::Rc;

use yew::prelude::*;

use crate::config::SiteConfig;

const HIGHLIGHTS: [(&str, &str); 3] = [
    ("100%", "Fresh Daily"),
    ("Premium", "Quality Meats"),
    ("Authentic", "Korean Recipes"),
];

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub config: Rc<SiteConfig>,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let name = props.config.name.clone();

    html! {
      <section id="about" class="section section-light">
        <div class="container about-grid">
          <div>
            <h2 class="section-title">
              <span class="accent-yellow">{ "About" }</span>{ format!(" {name}") }
            </h2>
            <p class="about-text">
              { format!("Welcome to {name}, Kingston's premier Korean BBQ destination. We bring the authentic \
                 taste of Korea to your table with premium quality meats and traditional recipes \
                 passed down through generations.") }
            </p>
            <p class="about-text">
              { format!("At {name}, we believe in the communal experience of Korean BBQ – gathering around \
                 the grill, cooking together, and sharing delicious food with friends and family. \
                 Our carefully selected cuts of beef, pork, and chicken are marinated with our \
                 special house recipes and grilled to perfection at your table.") }
            </p>
            <p class="about-text">
              { "Every meal comes with our signature banchan – traditional Korean side dishes that \
                 complement your BBQ experience. From fresh kimchi to seasoned vegetables, each \
                 side is made fresh daily with authentic Korean flavors." }
            </p>
            <div class="highlights">
              { for HIGHLIGHTS.iter().map(|(big, small)| html! {
                  <div class="highlight">
                    <div class="highlight-big">{ *big }</div>
                    <div class="highlight-small">{ *small }</div>
                  </div>
              }) }
            </div>
          </div>
          <div class="about-photo">
            <img src="/photo4.png" alt={format!("Premium beef cuts at {name}")} />
            <div class="about-badge">
              <div class="about-badge-big">{ "K-BBQ" }</div>
              <div class="about-badge-small">{ "Experience" }</div>
            </div>
          </div>
        </div>
      </section>
    }
}
