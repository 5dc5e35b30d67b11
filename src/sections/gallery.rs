use yew::prelude::*;

use crate::catalog::GALLERY;

#[function_component(Gallery)]
pub fn gallery() -> Html {
    html! {
      <section id="gallery" class="section section-light">
        <div class="container">
          <div class="section-head">
            <h2 class="section-title"><span class="accent-yellow">{ "Gallery" }</span></h2>
            <p class="section-lead">{ "A glimpse into the Woodon experience" }</p>
          </div>

          <div class="gallery-grid">
            // First photo takes a 2x2 tile on wide screens
            { for GALLERY.iter().enumerate().map(|(i, image)| html! {
                <div key={image.src} class={classes!("gallery-tile", (i == 0).then_some("featured"))}>
                  <img src={image.src} alt={image.alt} />
                  <div class="gallery-caption">
                    <span>{ image.alt }</span>
                  </div>
                </div>
            }) }
          </div>
        </div>
      </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;

    #[tokio::test]
    async fn renders_every_photo_with_first_featured() {
        let html = render::<Gallery, _>(|| ()).await;
        for n in 1..=7 {
            assert!(html.contains(&format!("src=\"/photo{n}.png\"")));
        }
        assert_eq!(html.matches("gallery-tile featured").count(), 1);
        assert!(html.find("featured").unwrap() < html.find("/photo2.png").unwrap());
    }
}
