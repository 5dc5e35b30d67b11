use yew::prelude::*;

use crate::catalog::{DrinkCategory, MenuCategory, MenuItem, DRINK_CATEGORIES, MENU_CATEGORIES};

const MENU_NOTE: &str = "All BBQ orders require a minimum of 2 servings. \
All BBQ selections are served with banchan - Korean side dishes to enjoy with your meal!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuTab {
    #[default]
    Food,
    Drinks,
}

impl MenuTab {
    pub fn label(self) -> &'static str {
        match self {
            MenuTab::Food => "Food",
            MenuTab::Drinks => "Drinks",
        }
    }

    pub fn all() -> [MenuTab; 2] {
        [MenuTab::Food, MenuTab::Drinks]
    }

    pub fn listing(self) -> MenuListing {
        match self {
            MenuTab::Food => MenuListing::Food(MENU_CATEGORIES),
            MenuTab::Drinks => MenuListing::Drinks(DRINK_CATEGORIES),
        }
    }
}

/// What the menu panel shows for a tab.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuListing {
    Food(&'static [MenuCategory]),
    Drinks(&'static [DrinkCategory]),
}

#[derive(Properties, PartialEq)]
pub struct FoodItemProps {
    pub item: &'static MenuItem,
}

#[function_component(FoodItemCard)]
pub fn food_item_card(props: &FoodItemProps) -> Html {
    let item = props.item;

    html! {
      <div class="item-card">
        <div class="item-head">
          <div>
            <h4 class="item-name">{ item.name }</h4>
            if let Some(korean) = item.korean {
              <span class="item-korean">{ korean }</span>
            }
            if let Some(weight) = item.weight {
              <span class="item-weight">{ weight }</span>
            }
          </div>
          <span class="price">{ format!("${}", item.price) }</span>
        </div>
        if let Some(desc) = item.description {
          <p class="item-desc">{ desc }</p>
        }
      </div>
    }
}

fn food_category(category: &'static MenuCategory) -> Html {
    html! {
      <div key={category.name} class="menu-category">
        <h3 class="category-title">{ category.name }</h3>
        if let Some(desc) = category.description {
          <p class="category-desc">{ desc }</p>
        }
        <div class="grid-2">
          { for category.items.iter().map(|item| html! {
              <FoodItemCard key={item.name} {item} />
          }) }
        </div>
      </div>
    }
}

fn drink_category(category: &'static DrinkCategory) -> Html {
    html! {
      <div key={category.name} class="menu-category">
        <h3 class="category-title">{ category.name }</h3>
        <div class="grid-3">
          { for category.items.iter().map(|item| html! {
              <div key={item.name} class="drink-row">
                <span class="drink-name">{ item.name }</span>
                <span class="price">{ format!("${}", item.price) }</span>
              </div>
          }) }
        </div>
      </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MenuSectionProps {
    #[prop_or_default]
    pub initial_tab: MenuTab,
}

#[function_component(MenuSection)]
pub fn menu_section(props: &MenuSectionProps) -> Html {
    let tab = {
        let initial = props.initial_tab;
        use_state(move || initial)
    };

    let set_tab = {
        let tab = tab.clone();
        Callback::from(move |t: MenuTab| tab.set(t))
    };

    let panel = match tab.listing() {
        MenuListing::Food(cats) => html! { for cats.iter().map(food_category) },
        MenuListing::Drinks(cats) => html! { for cats.iter().map(drink_category) },
    };

    html! {
      <section id="menu" class="section section-dark">
        <div class="container">
          <div class="section-head">
            <h2 class="section-title">{ "Our " }<span class="accent-orange">{ "Menu" }</span></h2>
            <p class="section-lead">{ MENU_NOTE }</p>
          </div>

          <div class="tabs">
            { for MenuTab::all().into_iter().map(|t| {
                let onclick = {
                  let set_tab = set_tab.clone();
                  Callback::from(move |_: MouseEvent| set_tab.emit(t))
                };
                html! {
                  <button class={classes!("tab", (*tab == t).then_some("active"))} {onclick}>
                    { t.label() }
                  </button>
                }
            }) }
          </div>

          <div class="menu-panel">
            { panel }
          </div>
        </div>
      </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;

    fn category_names(listing: &MenuListing) -> Vec<&'static str> {
        match listing {
            MenuListing::Food(cats) => cats.iter().map(|c| c.name).collect(),
            MenuListing::Drinks(cats) => cats.iter().map(|c| c.name).collect(),
        }
    }

    #[test]
    fn switching_tabs_round_trips_to_same_listing() {
        let food = MenuTab::Food.listing();
        let drinks = MenuTab::Drinks.listing();
        assert_ne!(food, drinks);
        assert_eq!(MenuTab::Food.listing(), food);
        assert_eq!(MenuTab::default(), MenuTab::Food);
    }

    #[test]
    fn drinks_listing_names() {
        assert_eq!(category_names(&MenuTab::Drinks.listing()), ["Alcoholic", "Non-Alcoholic"]);
        let food = category_names(&MenuTab::Food.listing());
        assert_eq!(food.first(), Some(&"Beef Grill 소고이"));
        assert_eq!(food.last(), Some(&"Dessert 디저트"));
    }

    #[tokio::test]
    async fn drinks_tab_renders_only_drink_categories() {
        let html = render::<MenuSection, _>(|| MenuSectionProps { initial_tab: MenuTab::Drinks }).await;
        assert!(html.contains("Alcoholic"));
        assert!(html.contains("Non-Alcoholic"));
        assert!(html.contains("$3.00"));
        for c in MENU_CATEGORIES {
            let escaped = c.name.replace('&', "&amp;");
            assert!(!html.contains(&escaped), "food category {} leaked into drinks tab", c.name);
        }
        assert!(!html.contains("B1. Sirloin Cap"));
        assert!(!html.contains("item-card"));
    }

    #[tokio::test]
    async fn food_tab_renders_every_food_category() {
        let html = render::<MenuSection, _>(|| MenuSectionProps { initial_tab: MenuTab::Food }).await;
        for c in MENU_CATEGORIES {
            let escaped = c.name.replace('&', "&amp;");
            assert!(html.contains(&escaped), "missing category {}", c.name);
        }
        assert!(!html.contains("Non-Alcoholic"));
        assert!(html.contains("$32.99"));
        assert!(html.contains("class=\"tab active\""));
    }

    #[tokio::test]
    async fn item_without_optional_fields_renders_name_and_price_only() {
        let rice = MENU_CATEGORIES
            .iter()
            .flat_map(|c| c.items.iter())
            .find(|i| i.name == "E1. Bowl of Rice")
            .unwrap();
        let html = render::<FoodItemCard, _>(move || FoodItemProps { item: rice }).await;
        assert!(html.contains("E1. Bowl of Rice"));
        assert!(html.contains("$2.49"));
        assert!(!html.contains("item-korean"));
        assert!(!html.contains("item-weight"));
        assert!(!html.contains("item-desc"));
    }

    #[tokio::test]
    async fn item_with_all_fields_renders_badge_and_korean() {
        let item = &MENU_CATEGORIES[0].items[0];
        let html = render::<FoodItemCard, _>(move || FoodItemProps { item }).await;
        assert!(html.contains("새우살"));
        assert!(html.contains("<span class=\"item-weight\">180g</span>"));
        assert!(html.contains("$32.99"));
        assert!(html.contains("item-desc"));
    }
}
