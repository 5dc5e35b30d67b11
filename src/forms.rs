//! Field state for the reservation and contact forms.
//!
//! Submitting only produces an [`Acknowledgement`] for the UI. Nothing is
//! sent, stored or reset.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acknowledgement {
    Reservation,
    Contact,
}

impl Acknowledgement {
    pub fn message(self) -> &'static str {
        match self {
            Acknowledgement::Reservation => {
                "Thank you for your reservation request! We will contact you shortly to confirm."
            }
            Acknowledgement::Contact => "Thank you for your message! We will get back to you soon.",
        }
    }
}

/// `(value, label)` pairs for the time select. Lunch then dinner service.
pub const TIME_SLOTS: &[(&str, &str)] = &[
    ("12:00", "12:00 PM"),
    ("12:30", "12:30 PM"),
    ("13:00", "1:00 PM"),
    ("13:30", "1:30 PM"),
    ("14:00", "2:00 PM"),
    ("17:00", "5:00 PM"),
    ("17:30", "5:30 PM"),
    ("18:00", "6:00 PM"),
    ("18:30", "6:30 PM"),
    ("19:00", "7:00 PM"),
    ("19:30", "7:30 PM"),
    ("20:00", "8:00 PM"),
    ("20:30", "8:30 PM"),
    ("21:00", "9:00 PM"),
];

pub const DEFAULT_GUESTS: &str = "2";

/// `(value, label)` pairs for the guest count select: 1..=10 then "10+".
pub fn guest_options() -> Vec<(String, String)> {
    let mut out: Vec<(String, String)> = (1..=10)
        .map(|n| {
            let noun = if n == 1 { "Guest" } else { "Guests" };
            (n.to_string(), format!("{n} {noun}"))
        })
        .collect();
    out.push(("10+".to_string(), "10+ Guests".to_string()));
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationField {
    Name,
    Email,
    Phone,
    Date,
    Time,
    Guests,
    Message,
}

impl ReservationField {
    /// DOM id of the input, also the label's `for`.
    pub fn id(self) -> &'static str {
        match self {
            ReservationField::Name => "name",
            ReservationField::Email => "email",
            ReservationField::Phone => "phone",
            ReservationField::Date => "date",
            ReservationField::Time => "time",
            ReservationField::Guests => "guests",
            ReservationField::Message => "message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: String,
    pub message: String,
}

impl Default for ReservationForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            date: String::new(),
            time: String::new(),
            guests: DEFAULT_GUESTS.to_string(),
            message: String::new(),
        }
    }
}

impl ReservationForm {
    pub fn get(&self, field: ReservationField) -> &str {
        match field {
            ReservationField::Name => &self.name,
            ReservationField::Email => &self.email,
            ReservationField::Phone => &self.phone,
            ReservationField::Date => &self.date,
            ReservationField::Time => &self.time,
            ReservationField::Guests => &self.guests,
            ReservationField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ReservationField, value: String) {
        let slot = match field {
            ReservationField::Name => &mut self.name,
            ReservationField::Email => &mut self.email,
            ReservationField::Phone => &mut self.phone,
            ReservationField::Date => &mut self.date,
            ReservationField::Time => &mut self.time,
            ReservationField::Guests => &mut self.guests,
            ReservationField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Copy with one field replaced, for `UseStateHandle::set`.
    pub fn with(&self, field: ReservationField, value: String) -> Self {
        let mut next = self.clone();
        next.set(field, value);
        next
    }

    pub fn submit(&self) -> Acknowledgement {
        Acknowledgement::Reservation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn id(self) -> &'static str {
        match self {
            ContactField::Name => "contact-name",
            ContactField::Email => "contact-email",
            ContactField::Subject => "contact-subject",
            ContactField::Message => "contact-message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn with(&self, field: ContactField, value: String) -> Self {
        let mut next = self.clone();
        next.set(field, value);
        next
    }

    pub fn submit(&self) -> Acknowledgement {
        Acknowledgement::Contact
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DRINK_CATEGORIES, MENU_CATEGORIES};

    fn jane() -> ReservationForm {
        [
            (ReservationField::Name, "Jane Doe"),
            (ReservationField::Email, "jane@example.com"),
            (ReservationField::Phone, "6135551234"),
            (ReservationField::Date, "2024-06-01"),
            (ReservationField::Time, "18:00"),
            (ReservationField::Guests, "2"),
        ]
        .into_iter()
        .fold(ReservationForm::default(), |form, (field, value)| form.with(field, value.to_string()))
    }

    #[test]
    fn reservation_defaults_to_two_guests() {
        let form = ReservationForm::default();
        assert_eq!(form.guests, "2");
        assert!(form.name.is_empty() && form.time.is_empty());
    }

    #[test]
    fn reservation_submit_acknowledges_without_touching_state() {
        let before_menu = MENU_CATEGORIES.to_vec();
        let before_drinks = DRINK_CATEGORIES.to_vec();

        let form = jane();
        let ack = form.submit();

        assert_eq!(ack, Acknowledgement::Reservation);
        assert!(ack.message().starts_with("Thank you for your reservation request!"));
        assert_eq!(form, jane());
        assert_eq!(form.get(ReservationField::Time), "18:00");
        assert_eq!(MENU_CATEGORIES, &before_menu[..]);
        assert_eq!(DRINK_CATEGORIES, &before_drinks[..]);
    }

    #[test]
    fn with_only_changes_one_field() {
        let form = jane();
        let next = form.with(ReservationField::Message, "Window seat please".into());
        assert_eq!(next.message, "Window seat please");
        assert_eq!(next.with(ReservationField::Message, String::new()), form);
    }

    #[test]
    fn contact_submit_acknowledges() {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "Jane Doe".into());
        form.set(ContactField::Subject, "Private event".into());
        assert_eq!(form.get(ContactField::Subject), "Private event");
        assert_eq!(form.submit().message(), "Thank you for your message! We will get back to you soon.");
        assert_eq!(form.name, "Jane Doe");
    }

    #[test]
    fn guest_options_run_one_to_ten_plus() {
        let opts = guest_options();
        assert_eq!(opts.len(), 11);
        assert_eq!(opts[0], ("1".to_string(), "1 Guest".to_string()));
        assert_eq!(opts[1].1, "2 Guests");
        assert_eq!(opts[10], ("10+".to_string(), "10+ Guests".to_string()));
        assert!(opts.iter().any(|(v, _)| v == DEFAULT_GUESTS));
    }

    #[test]
    fn time_slots_are_lunch_and_dinner() {
        assert_eq!(TIME_SLOTS.len(), 14);
        assert_eq!(TIME_SLOTS.first(), Some(&("12:00", "12:00 PM")));
        assert_eq!(TIME_SLOTS.last(), Some(&("21:00", "9:00 PM")));
        assert!(TIME_SLOTS.iter().any(|(v, _)| *v == "18:00"));
    }

    #[test]
    fn field_ids_are_distinct_across_forms() {
        let reservation = ["name", "email", "phone", "date", "time", "guests", "message"];
        for f in [ContactField::Name, ContactField::Email, ContactField::Subject, ContactField::Message] {
            assert!(!reservation.contains(&f.id()));
        }
        assert_eq!(ReservationField::Guests.id(), "guests");
    }
}
