//! One module per page section, in page order.

pub mod about;
pub mod contact;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod menu;
pub mod nav;
pub mod reservation;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use gallery::Gallery;
pub use hero::Hero;
pub use menu::MenuSection;
pub use nav::Navigation;
pub use reservation::Reservation;
