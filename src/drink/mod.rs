//! Drink builder
//!
//! Assembles a hot or cold drink from the static ingredient catalog and
//! gives it a generated name.

pub mod builder;
pub mod catalog;
pub mod naming;

pub use builder::{Drink, DrinkBuilder, DrinkIngredient, SavedRecipe};
pub use catalog::{Category, DrinkType, Ingredient};
