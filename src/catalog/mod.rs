//! Static menu, drinks and gallery content.
//!
//! Everything here is `'static` and immutable; the view only iterates it.

mod data;

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

pub use data::{DRINK_CATEGORIES, GALLERY, MENU_CATEGORIES};

/// Price in cents. Unsigned, so a negative price cannot be written down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u32);

impl Price {
    pub const fn from_cents(cents: u32) -> Self {
        Price(cents)
    }
}

// Always two fraction digits: 3299 -> "32.99", 300 -> "3.00"
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    /// Display name including its code prefix, e.g. "B1. Sirloin Cap".
    pub name: &'static str,
    pub korean: Option<&'static str>,
    pub weight: Option<&'static str>,
    pub price: Price,
    pub description: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuCategory {
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub items: &'static [MenuItem],
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrinkItem {
    pub name: &'static str,
    pub price: Price,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrinkCategory {
    pub name: &'static str,
    pub items: &'static [DrinkItem],
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
}

/// Catalog construction mistakes. Nothing at runtime produces these; they
/// only flag a bad edit of the static tables.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate category name: {0}")]
    DuplicateCategory(&'static str),

    #[error("duplicate item {item:?} in category {category:?}")]
    DuplicateItem {
        category: &'static str,
        item: &'static str,
    },

    #[error("category {0:?} has no items")]
    EmptyCategory(&'static str),
}

fn check_category(
    seen: &mut HashSet<&'static str>,
    category: &'static str,
    item_names: impl Iterator<Item = &'static str>,
) -> Result<(), CatalogError> {
    if !seen.insert(category) {
        return Err(CatalogError::DuplicateCategory(category));
    }

    let mut items = HashSet::new();
    for item in item_names {
        if !items.insert(item) {
            return Err(CatalogError::DuplicateItem { category, item });
        }
    }
    if items.is_empty() {
        return Err(CatalogError::EmptyCategory(category));
    }
    Ok(())
}

/// Checks that category names are unique within each list and item names
/// are unique within each category.
pub fn validate(menu: &[MenuCategory], drinks: &[DrinkCategory]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for c in menu {
        check_category(&mut seen, c.name, c.items.iter().map(|i| i.name))?;
    }

    let mut seen = HashSet::new();
    for c in drinks {
        check_category(&mut seen, c.name, c.items.iter().map(|i| i.name))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(3299, "32.99")]
    #[case(300, "3.00")]
    #[case(99, "0.99")]
    #[case(0, "0.00")]
    #[case(8999, "89.99")]
    fn price_has_two_fraction_digits(#[case] cents: u32, #[case] expected: &str) {
        assert_eq!(Price::from_cents(cents).to_string(), expected);
    }

    fn all_prices() -> Vec<Price> {
        let food = MENU_CATEGORIES.iter().flat_map(|c| c.items.iter().map(|i| i.price));
        let drinks = DRINK_CATEGORIES.iter().flat_map(|c| c.items.iter().map(|i| i.price));
        food.chain(drinks).collect()
    }

    #[test]
    fn every_catalog_price_renders_two_decimals() {
        for p in all_prices() {
            let s = p.to_string();
            let (_, frac) = s.split_once('.').expect("missing decimal point");
            assert_eq!(frac.len(), 2, "bad price rendering {s}");
        }
    }

    #[test]
    fn shipped_catalog_is_valid() {
        assert_eq!(validate(MENU_CATEGORIES, DRINK_CATEGORIES), Ok(()));
    }

    #[test]
    fn shipped_catalog_shape() {
        assert_eq!(MENU_CATEGORIES.len(), 11);
        let drinks: Vec<_> = DRINK_CATEGORIES.iter().map(|c| c.name).collect();
        assert_eq!(drinks, ["Alcoholic", "Non-Alcoholic"]);
        assert_eq!(GALLERY.len(), 7);
        assert_eq!(MENU_CATEGORIES[0].items[0].price.to_string(), "32.99");
    }

    #[test]
    fn bowl_of_rice_has_no_optional_fields() {
        let rice = MENU_CATEGORIES
            .iter()
            .flat_map(|c| c.items.iter())
            .find(|i| i.name == "E1. Bowl of Rice")
            .unwrap();
        assert_eq!(rice.korean, None);
        assert_eq!(rice.weight, None);
        assert_eq!(rice.description, None);
        assert_eq!(rice.price.to_string(), "2.49");
    }

    static SOJU: DrinkItem = DrinkItem { name: "Soju", price: Price::from_cents(1999) };

    #[test]
    fn duplicate_category_is_reported() {
        static DUP: &[DrinkCategory] = &[
            DrinkCategory { name: "Alcoholic", items: std::slice::from_ref(&SOJU) },
            DrinkCategory { name: "Alcoholic", items: std::slice::from_ref(&SOJU) },
        ];
        assert_eq!(validate(&[], DUP), Err(CatalogError::DuplicateCategory("Alcoholic")));
    }

    #[test]
    fn duplicate_item_is_reported() {
        static ITEMS: &[DrinkItem] = &[
            DrinkItem { name: "Soju", price: Price::from_cents(1999) },
            DrinkItem { name: "Soju", price: Price::from_cents(1899) },
        ];
        let drinks = [DrinkCategory { name: "Alcoholic", items: ITEMS }];
        assert_eq!(
            validate(&[], &drinks),
            Err(CatalogError::DuplicateItem { category: "Alcoholic", item: "Soju" })
        );
    }

    #[test]
    fn empty_category_is_reported() {
        let menu = [MenuCategory { name: "Soju", description: None, items: &[] }];
        let err = validate(&menu, &[]).unwrap_err();
        assert_eq!(err, CatalogError::EmptyCategory("Soju"));
        assert_eq!(err.to_string(), "category \"Soju\" has no items");
    }

    #[test]
    fn same_name_in_food_and_drinks_is_fine() {
        let drinks = [DrinkCategory { name: "Extra Bites 추가", items: std::slice::from_ref(&SOJU) }];
        assert_eq!(validate(MENU_CATEGORIES, &drinks), Ok(()));
    }
}
