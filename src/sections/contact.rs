use std::rc::Rc;

use gloo::console::log;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::forms::{ContactField, ContactForm};

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub config: Rc<SiteConfig>,
}

fn info_block(icon: &'static str, title: &'static str, body: Html) -> Html {
    html! {
      <div class="info-row">
        <div class="info-icon">{ icon }</div>
        <div>
          <h3 class="info-title">{ title }</h3>
          { body }
        </div>
      </div>
    }
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let form = use_state(ContactForm::default);
    let cfg = &props.config;

    let on_input = |field: ContactField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(form.with(field, input.value()));
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(form.with(ContactField::Message, area.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let ack = form.submit();
            log!("Contact message acknowledged");
            gloo::dialogs::alert(ack.message());
        })
    };

    let text_input = |field: ContactField, label: &'static str, kind: &'static str| {
        html! {
          <div>
            <label class="field-label" for={field.id()}>{ label }</label>
            <input
              type={kind}
              id={field.id()}
              required={true}
              class="field"
              value={form.get(field).to_string()}
              oninput={on_input(field)}
            />
          </div>
        }
    };

    html! {
      <section id="contact" class="section section-light">
        <div class="container">
          <div class="section-head">
            <h2 class="section-title"><span class="accent-yellow">{ "Contact" }</span>{ " Us" }</h2>
            <p class="section-lead">{ "We'd love to hear from you" }</p>
          </div>

          <div class="grid-2 wide-gap">
            <div>
              <div class="info-list">
                { info_block("📍", "Address", html! {
                    <p class="muted">{ cfg.street.clone() }<br />{ cfg.city_line.clone() }</p>
                }) }
                { info_block("📞", "Phone", html! {
                    <a href={cfg.tel_href()} class="muted link">{ cfg.phone_display.clone() }</a>
                }) }
                { info_block("🕒", "Hours", html! {
                    <div class="muted small">
                      { for cfg.hours.iter().map(|h| html! { <p>{ h.clone() }</p> }) }
                    </div>
                }) }
                { info_block("📷", "Social Media", html! {
                    <a href={cfg.instagram_url.clone()} target="_blank" rel="noopener noreferrer" class="muted link">
                      { cfg.instagram_handle.clone() }
                    </a>
                }) }
              </div>

              <div class="map">
                <iframe
                  src={cfg.map_embed_url.clone()}
                  width="100%"
                  height="250"
                  style="border:0;"
                  allowfullscreen={true}
                  loading="lazy"
                  referrerpolicy="no-referrer-when-downgrade"
                  title={cfg.map_title.clone()}
                />
              </div>
            </div>

            <div>
              <form class="form-card" {onsubmit}>
                { text_input(ContactField::Name, "Name *", "text") }
                { text_input(ContactField::Email, "Email *", "email") }
                { text_input(ContactField::Subject, "Subject *", "text") }
                <div>
                  <label class="field-label" for={ContactField::Message.id()}>{ "Message *" }</label>
                  <textarea
                    id={ContactField::Message.id()}
                    rows="5"
                    required={true}
                    class="field"
                    value={form.message.clone()}
                    oninput={on_message}
                  />
                </div>
                <button type="submit" class="btn btn-primary btn-block">{ "Send Message" }</button>
              </form>
            </div>
          </div>
        </div>
      </section>
    }
}
