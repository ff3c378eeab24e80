//! Drink builder state
//!
//! Holds the drink being assembled and applies input cleaning to every
//! free-text value that goes into it.

use std::fmt;

use log::{debug, info};
use rand::Rng;

use super::catalog::{DrinkType, Ingredient, find_ingredient};
use super::naming::generate_drink_name;
use crate::error::DrinkError;
use crate::utils::{sanitize_text, validate_amount};

/// Catalog row plus the amount the user picked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrinkIngredient {
    pub ingredient: &'static Ingredient,
    pub amount: String,
}

impl DrinkIngredient {
    pub fn id(&self) -> &'static str {
        self.ingredient.id
    }
}

impl fmt::Display for DrinkIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = if self.amount.is_empty() {
            "?"
        } else {
            self.amount.as_str()
        };
        write!(
            f,
            "{} {} {} ({})",
            amount, self.ingredient.unit, self.ingredient.name, self.ingredient.category
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Drink {
    pub drink_type: DrinkType,
    pub ingredients: Vec<DrinkIngredient>,
}

impl Drink {
    pub fn new(drink_type: DrinkType) -> Self {
        Self {
            drink_type,
            ingredients: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.ingredients.iter().position(|i| i.id() == id)
    }
}

/// Snapshot of a finished drink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedRecipe {
    pub name: String,
    pub drink_type: DrinkType,
    pub ingredients: Vec<DrinkIngredient>,
}

impl fmt::Display for SavedRecipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} drink)", self.name, self.drink_type)?;
        for ingredient in &self.ingredients {
            write!(f, "\n  - {}", ingredient)?;
        }
        Ok(())
    }
}

/// Drink under construction
#[derive(Debug, Clone)]
pub struct DrinkBuilder {
    drink: Drink,
    generated_name: Option<String>,
    name_max_length: usize,
}

impl DrinkBuilder {
    pub fn new(drink_type: DrinkType, name_max_length: usize) -> Self {
        Self {
            drink: Drink::new(drink_type),
            generated_name: None,
            name_max_length,
        }
    }

    pub fn drink(&self) -> &Drink {
        &self.drink
    }

    pub fn drink_type(&self) -> DrinkType {
        self.drink.drink_type
    }

    pub fn generated_name(&self) -> Option<&str> {
        self.generated_name.as_deref()
    }

    /// Switch between hot and cold. Starts over with an empty drink.
    pub fn set_type(&mut self, drink_type: DrinkType) {
        self.drink = Drink::new(drink_type);
        self.generated_name = None;
    }

    /// Add a catalog ingredient at its default amount
    pub fn add_ingredient(&mut self, id: &str) -> Result<&DrinkIngredient, DrinkError> {
        let ingredient = find_ingredient(self.drink.drink_type, id)
            .ok_or_else(|| DrinkError::UnknownIngredient(id.to_string()))?;

        if self.drink.position(id).is_some() {
            return Err(DrinkError::AlreadyAdded(id.to_string()));
        }

        self.drink.ingredients.push(DrinkIngredient {
            ingredient,
            amount: ingredient.default_amount.to_string(),
        });
        info!(
            "Added {} {} {}",
            ingredient.default_amount, ingredient.unit, ingredient.name
        );

        Ok(&self.drink.ingredients[self.drink.ingredients.len() - 1])
    }

    /// Set an ingredient amount. Anything outside the allow-list stores an empty amount.
    pub fn update_amount(&mut self, id: &str, raw_amount: &str) -> Result<&str, DrinkError> {
        let index = self
            .drink
            .position(id)
            .ok_or_else(|| DrinkError::NotInDrink(id.to_string()))?;

        let amount = validate_amount(raw_amount);
        if amount.is_empty() && !raw_amount.trim().is_empty() {
            debug!("Rejected amount for {}", id);
        }

        let entry = &mut self.drink.ingredients[index];
        entry.amount = amount;
        Ok(entry.amount.as_str())
    }

    pub fn remove_ingredient(&mut self, id: &str) -> Result<DrinkIngredient, DrinkError> {
        let index = self
            .drink
            .position(id)
            .ok_or_else(|| DrinkError::NotInDrink(id.to_string()))?;

        Ok(self.drink.ingredients.remove(index))
    }

    /// Generate, sanitize and remember a name for the current drink
    pub fn generate_name<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&str, DrinkError> {
        if self.drink.is_empty() {
            return Err(DrinkError::EmptyDrink);
        }

        let name = sanitize_text(&generate_drink_name(&self.drink, rng), self.name_max_length);
        info!("Generated name: {}", name);

        Ok(self.generated_name.insert(name).as_str())
    }

    /// Snapshot the drink under its generated name, generating one if needed
    pub fn save<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<SavedRecipe, DrinkError> {
        if self.drink.is_empty() {
            return Err(DrinkError::EmptyDrink);
        }

        let name = match &self.generated_name {
            Some(name) => name.clone(),
            None => sanitize_text(&generate_drink_name(&self.drink, rng), self.name_max_length),
        };
        info!("Saved \"{}\" to recipes", name);

        Ok(SavedRecipe {
            name,
            drink_type: self.drink.drink_type,
            ingredients: self.drink.ingredients.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_add_uses_default_amount() {
        let mut builder = DrinkBuilder::new(DrinkType::Hot, 60);
        let added = builder.add_ingredient("espresso").unwrap();
        assert_eq!(added.amount, "2");
        assert_eq!(added.ingredient.unit, "shots");
        assert_eq!(builder.drink().ingredients.len(), 1);
    }

    #[test]
    fn test_add_rejects_duplicates_and_unknown() {
        let mut builder = DrinkBuilder::new(DrinkType::Hot, 60);
        builder.add_ingredient("vanilla").unwrap();

        assert_eq!(
            builder.add_ingredient("vanilla").unwrap_err(),
            DrinkError::AlreadyAdded("vanilla".into())
        );
        // Cold-only ingredient is unknown on the hot menu
        assert_eq!(
            builder.add_ingredient("cold-brew").unwrap_err(),
            DrinkError::UnknownIngredient("cold-brew".into())
        );
        assert_eq!(builder.drink().ingredients.len(), 1);
    }

    #[test]
    fn test_update_amount_validates() {
        let mut builder = DrinkBuilder::new(DrinkType::Cold, 60);
        builder.add_ingredient("lemon").unwrap();

        assert_eq!(builder.update_amount("lemon", " 1 ½ ").unwrap(), "1 ½");
        assert_eq!(builder.update_amount("lemon", "<img src=x>").unwrap(), "");
        assert_eq!(builder.drink().ingredients[0].amount, "");
        assert_eq!(
            builder.update_amount("lime", "1").unwrap_err(),
            DrinkError::NotInDrink("lime".into())
        );
    }

    #[test]
    fn test_remove_ingredient() {
        let mut builder = DrinkBuilder::new(DrinkType::Hot, 60);
        builder.add_ingredient("espresso").unwrap();
        builder.add_ingredient("nutmeg").unwrap();

        let removed = builder.remove_ingredient("espresso").unwrap();
        assert_eq!(removed.id(), "espresso");
        assert_eq!(builder.drink().ingredients.len(), 1);
        assert!(builder.remove_ingredient("espresso").is_err());

        // Removed ingredients can be added again
        builder.add_ingredient("espresso").unwrap();
    }

    #[test]
    fn test_set_type_clears_drink_and_name() {
        let mut builder = DrinkBuilder::new(DrinkType::Hot, 60);
        builder.add_ingredient("espresso").unwrap();
        builder.generate_name(&mut rng()).unwrap();

        builder.set_type(DrinkType::Cold);
        assert_eq!(builder.drink_type(), DrinkType::Cold);
        assert!(builder.drink().is_empty());
        assert!(builder.generated_name().is_none());
    }

    #[test]
    fn test_empty_drink_cannot_be_named_or_saved() {
        let mut builder = DrinkBuilder::new(DrinkType::Hot, 60);
        assert_eq!(
            builder.generate_name(&mut rng()).unwrap_err(),
            DrinkError::EmptyDrink
        );
        assert_eq!(builder.save(&mut rng()).unwrap_err(), DrinkError::EmptyDrink);
    }

    #[test]
    fn test_generated_name_is_bounded() {
        let mut builder = DrinkBuilder::new(DrinkType::Cold, 8);
        builder.add_ingredient("refresher-base").unwrap();
        builder.add_ingredient("strawberry").unwrap();

        let name = builder.generate_name(&mut rng()).unwrap().to_string();
        assert!(name.chars().count() <= 8);
        assert_eq!(builder.generated_name(), Some(name.as_str()));
    }

    #[test]
    fn test_save_reuses_generated_name() {
        let mut builder = DrinkBuilder::new(DrinkType::Hot, 60);
        builder.add_ingredient("chai-tea").unwrap();
        builder.add_ingredient("cinnamon-dolce").unwrap();

        let name = builder.generate_name(&mut rng()).unwrap().to_string();
        let recipe = builder.save(&mut StdRng::seed_from_u64(999)).unwrap();
        assert_eq!(recipe.name, name);
        assert_eq!(recipe.drink_type, DrinkType::Hot);
        assert_eq!(recipe.ingredients.len(), 2);
        assert!(recipe.to_string().contains("Chai Tea"));
    }

    #[test]
    fn test_save_without_generated_name_generates_one() {
        let mut builder = DrinkBuilder::new(DrinkType::Cold, 60);
        builder.add_ingredient("cold-brew").unwrap();

        let recipe = builder.save(&mut rng()).unwrap();
        assert!(recipe.name.contains("Cold"));
        assert!(builder.generated_name().is_none());
    }
}
