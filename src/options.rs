//! Fixed option sets offered by the form's dropdowns.

use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, AsRefStr, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Unit {
    Cups,
    Tablespoons,
    Teaspoons,
    Ounces,
    Pounds,
    Grams,
    Pieces,
    Milliliters,
    Liters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, AsRefStr, IntoStaticStr)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, AsRefStr, IntoStaticStr)]
pub enum Category {
    Appetizer,
    #[strum(serialize = "Main Course")]
    MainCourse,
    Dessert,
    #[strum(serialize = "Side Dish")]
    SideDish,
    Beverage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, AsRefStr, IntoStaticStr)]
pub enum Cuisine {
    American,
    Italian,
    Mexican,
    Asian,
    Mediterranean,
    Other,
}

/// Labels of an option set, in the order they are offered.
pub fn labels<T>() -> Vec<&'static str>
where
    T: IntoEnumIterator + Into<&'static str>,
{
    T::iter().map(Into::into).collect()
}

/// Whether `label` names one of the options of `T`.
pub fn is_option<T: FromStr>(label: &str) -> bool {
    T::from_str(label).is_ok()
}
