//! Word categories
//!
//! A closed set of three categories with ten subcategories. Labels and hints
//! derive from the variant, so catalog data only needs to name the slug.

use std::fmt;

/// Kinds of food
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FoodKind {
    Fruit,
    Vegetable,
    Dish,
    Drink,
    Spice,
}

/// Kinds of place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlaceKind {
    City,
    State,
    Country,
}

/// Kinds of calendar term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CalendarKind {
    Weekday,
    Month,
}

/// Category of a target word, tagged with its subcategory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Food(FoodKind),
    Place(PlaceKind),
    Calendar(CalendarKind),
}

impl Category {
    /// Every subcategory, in display order
    pub const ALL: [Self; 10] = [
        Self::Food(FoodKind::Fruit),
        Self::Food(FoodKind::Vegetable),
        Self::Food(FoodKind::Dish),
        Self::Food(FoodKind::Drink),
        Self::Food(FoodKind::Spice),
        Self::Place(PlaceKind::City),
        Self::Place(PlaceKind::State),
        Self::Place(PlaceKind::Country),
        Self::Calendar(CalendarKind::Weekday),
        Self::Calendar(CalendarKind::Month),
    ];

    /// Look up a category by its subcategory slug
    ///
    /// # Examples
    /// ```
    /// use hangword::core::{Category, PlaceKind};
    ///
    /// assert_eq!(Category::from_slug("city"), Some(Category::Place(PlaceKind::City)));
    /// assert_eq!(Category::from_slug("planet"), None);
    /// ```
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }

    /// Subcategory slug used in catalog files
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Food(FoodKind::Fruit) => "fruit",
            Self::Food(FoodKind::Vegetable) => "vegetable",
            Self::Food(FoodKind::Dish) => "dish",
            Self::Food(FoodKind::Drink) => "drink",
            Self::Food(FoodKind::Spice) => "spice",
            Self::Place(PlaceKind::City) => "city",
            Self::Place(PlaceKind::State) => "state",
            Self::Place(PlaceKind::Country) => "country",
            Self::Calendar(CalendarKind::Weekday) => "weekday",
            Self::Calendar(CalendarKind::Month) => "month",
        }
    }

    /// Top-level category label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Food(_) => "Food",
            Self::Place(_) => "Place",
            Self::Calendar(_) => "Date",
        }
    }

    /// Subcategory label
    #[must_use]
    pub const fn subcategory_label(self) -> &'static str {
        match self {
            Self::Food(FoodKind::Fruit) => "Fruit",
            Self::Food(FoodKind::Vegetable) => "Vegetable",
            Self::Food(FoodKind::Dish) => "Dish",
            Self::Food(FoodKind::Drink) => "Drink",
            Self::Food(FoodKind::Spice) => "Spice",
            Self::Place(PlaceKind::City) => "City",
            Self::Place(PlaceKind::State) => "State",
            Self::Place(PlaceKind::Country) => "Country",
            Self::Calendar(CalendarKind::Weekday) => "Day of the week",
            Self::Calendar(CalendarKind::Month) => "Month",
        }
    }

    /// Hint shown on request during a round
    #[must_use]
    pub const fn hint(self) -> &'static str {
        match self {
            Self::Food(FoodKind::Fruit) => "Maybe you like this fruit.",
            Self::Food(FoodKind::Vegetable) => "Maybe you like this vegetable.",
            Self::Food(FoodKind::Dish) => "Maybe you like this dish.",
            Self::Food(FoodKind::Drink) => "Maybe you like this drink.",
            Self::Food(FoodKind::Spice) => "Maybe you like this spice.",
            Self::Place(PlaceKind::City) => "Maybe you like this city.",
            Self::Place(PlaceKind::State) => "Maybe you like this state.",
            Self::Place(PlaceKind::Country) => "Maybe you like this country.",
            Self::Calendar(CalendarKind::Weekday) => "Maybe you like this day of the week.",
            Self::Calendar(CalendarKind::Month) => "Maybe you like this month.",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.label(), self.subcategory_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_subcategories_across_three_categories() {
        assert_eq!(Category::ALL.len(), 10);

        let food = Category::ALL.iter().filter(|c| matches!(c, Category::Food(_))).count();
        let place = Category::ALL.iter().filter(|c| matches!(c, Category::Place(_))).count();
        let calendar = Category::ALL
            .iter()
            .filter(|c| matches!(c, Category::Calendar(_)))
            .count();

        assert_eq!((food, place, calendar), (5, 3, 2));
    }

    #[test]
    fn slugs_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_slug(category.slug()), Some(category));
        }
    }

    #[test]
    fn slugs_are_unique() {
        let slugs: std::collections::HashSet<_> = Category::ALL.iter().map(|c| c.slug()).collect();
        assert_eq!(slugs.len(), Category::ALL.len());
    }

    #[test]
    fn unknown_slug() {
        assert_eq!(Category::from_slug(""), None);
        assert_eq!(Category::from_slug("Fruit"), None);
    }

    #[test]
    fn labels() {
        let month = Category::Calendar(CalendarKind::Month);
        assert_eq!(month.label(), "Date");
        assert_eq!(month.subcategory_label(), "Month");
        assert_eq!(month.hint(), "Maybe you like this month.");
        assert_eq!(format!("{month}"), "Date / Month");
    }
}
