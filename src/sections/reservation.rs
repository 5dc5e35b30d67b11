use gloo::console::log;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::forms::{guest_options, ReservationField, ReservationForm, TIME_SLOTS};

#[derive(Properties, PartialEq)]
pub struct ReservationProps {
    #[prop_or_default]
    pub initial: ReservationForm,
}

#[function_component(Reservation)]
pub fn reservation(props: &ReservationProps) -> Html {
    let form = {
        let initial = props.initial.clone();
        use_state(move || initial)
    };

    let on_input = |field: ReservationField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(form.with(field, input.value()));
        })
    };

    let on_select = |field: ReservationField| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(form.with(field, select.value()));
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(form.with(ReservationField::Message, area.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let ack = form.submit();
            log!(format!("Reservation request acknowledged ({} guests)", form.guests));
            gloo::dialogs::alert(ack.message());
        })
    };

    let text_input = |field: ReservationField, label: &'static str, kind: &'static str| {
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
      <section id="reservation" class="section section-dark">
        <div class="container narrow">
          <div class="section-head">
            <h2 class="section-title">{ "Make a " }<span class="accent-orange">{ "Reservation" }</span></h2>
            <p class="section-lead">{ "Book your table for an authentic Korean BBQ experience" }</p>
          </div>

          <form class="form-card" {onsubmit}>
            <div class="grid-2">
              { text_input(ReservationField::Name, "Full Name *", "text") }
              { text_input(ReservationField::Email, "Email *", "email") }
              { text_input(ReservationField::Phone, "Phone Number *", "tel") }

              <div>
                <label class="field-label" for={ReservationField::Guests.id()}>{ "Number of Guests *" }</label>
                <select id={ReservationField::Guests.id()} required={true} class="field"
                        onchange={on_select(ReservationField::Guests)}>
                  { for guest_options().into_iter().map(|(value, label)| {
                      let selected = form.guests == value;
                      html! { <option value={value} selected={selected}>{ label }</option> }
                  }) }
                </select>
              </div>

              { text_input(ReservationField::Date, "Preferred Date *", "date") }

              <div>
                <label class="field-label" for={ReservationField::Time.id()}>{ "Preferred Time *" }</label>
                <select id={ReservationField::Time.id()} required={true} class="field"
                        onchange={on_select(ReservationField::Time)}>
                  <option value="" selected={form.time.is_empty()}>{ "Select a time" }</option>
                  { for TIME_SLOTS.iter().map(|(value, label)| html! {
                      <option value={*value} selected={form.time == *value}>{ *label }</option>
                  }) }
                </select>
              </div>
            </div>

            <div class="field-gap">
              <label class="field-label" for={ReservationField::Message.id()}>{ "Special Requests" }</label>
              <textarea
                id={ReservationField::Message.id()}
                rows="4"
                class="field"
                value={form.message.clone()}
                oninput={on_message}
                placeholder="Any special requests or dietary requirements..."
              />
            </div>

            <button type="submit" class="btn btn-primary btn-block">{ "Request Reservation" }</button>
          </form>
        </div>
      </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;

    /// `value` of every `<option>` carrying a `selected` attribute.
    fn selected_values(html: &str) -> Vec<&str> {
        html.split("<option")
            .skip(1)
            .filter_map(|o| o.split('>').next())
            .filter(|attrs| attrs.contains("selected"))
            .filter_map(|attrs| attrs.split("value=\"").nth(1)?.split('"').next())
            .collect()
    }

    #[tokio::test]
    async fn renders_required_fields_with_default_guests() {
        let html = render::<Reservation, _>(|| ReservationProps { initial: ReservationForm::default() }).await;
        for id in ["name", "email", "phone", "guests", "date", "time"] {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing field {id}");
        }
        assert_eq!(html.matches(" required").count(), 6);
        assert_eq!(selected_values(&html), ["2", ""]);
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("type=\"tel\""));
        assert!(html.contains("10+ Guests"));
        assert!(html.contains("Select a time"));
        assert!(html.contains("9:00 PM"));
    }

    #[tokio::test]
    async fn prefilled_values_are_rendered() {
        let html = render::<Reservation, _>(|| ReservationProps {
            initial: ReservationForm::default()
                .with(ReservationField::Name, "Jane Doe".into())
                .with(ReservationField::Time, "18:00".into()),
        })
        .await;
        assert!(html.contains("value=\"Jane Doe\""));
        assert_eq!(selected_values(&html), ["2", "18:00"]);
    }
}
