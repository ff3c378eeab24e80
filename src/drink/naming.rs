//! Drink name generation

use rand::Rng;
use rand::seq::SliceRandom;

use super::builder::Drink;
use super::catalog::{Category, DrinkType};

pub const HOT_ADJECTIVES: [&str; 8] = [
    "Warm", "Cozy", "Steamy", "Rich", "Smooth", "Creamy", "Bold", "Aromatic",
];

pub const COLD_ADJECTIVES: [&str; 8] = [
    "Cool",
    "Refreshing",
    "Crisp",
    "Icy",
    "Smooth",
    "Zesty",
    "Bright",
    "Energizing",
];

fn first_word(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or("")
}

fn first_in_category(drink: &Drink, category: Category) -> Option<&'static str> {
    drink
        .ingredients
        .iter()
        .find(|i| i.ingredient.category == category)
        .map(|i| i.ingredient.name)
}

/// Builds a name from a random adjective, the first base and the first flavor.
pub fn generate_drink_name<R: Rng + ?Sized>(drink: &Drink, rng: &mut R) -> String {
    let (adjectives, fallback_base, fallback_name) = match drink.drink_type {
        DrinkType::Hot => (&HOT_ADJECTIVES, "Coffee", "Custom Hot Drink"),
        DrinkType::Cold => (&COLD_ADJECTIVES, "Brew", "Custom Cold Drink"),
    };

    let adjective = adjectives.choose(rng).copied().unwrap_or_default();
    let base = first_in_category(drink, Category::Base)
        .map(first_word)
        .unwrap_or(fallback_base);
    let flavor = first_in_category(drink, Category::Flavor)
        .map(first_word)
        .unwrap_or("");

    let combinations: Vec<String> = [
        format!("{adjective} {flavor} {base}"),
        format!("{flavor} {adjective} {base}"),
        format!("The {adjective} {base}"),
        format!("{base} {adjective}"),
    ]
    .into_iter()
    .map(|name| name.split_whitespace().collect::<Vec<_>>().join(" "))
    .filter(|name| !name.is_empty())
    .collect();

    combinations
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| fallback_name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drink::DrinkBuilder;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn names(builder: &DrinkBuilder, seeds: u64) -> Vec<String> {
        (0..seeds)
            .map(|seed| generate_drink_name(builder.drink(), &mut StdRng::seed_from_u64(seed)))
            .collect()
    }

    #[test]
    fn test_name_uses_first_words_of_base_and_flavor() {
        let mut builder = DrinkBuilder::new(DrinkType::Hot, 60);
        builder.add_ingredient("pike-place").unwrap();
        builder.add_ingredient("brown-sugar").unwrap();
        builder.add_ingredient("espresso").unwrap();

        for name in names(&builder, 32) {
            assert!(name.contains("Pike"), "{name}");
            assert!(!name.contains("Espresso"), "{name}");
            assert!(!name.contains("  "), "{name}");
            assert!(HOT_ADJECTIVES.iter().any(|a| name.contains(a)), "{name}");
        }
    }

    #[test]
    fn test_missing_base_falls_back() {
        let mut builder = DrinkBuilder::new(DrinkType::Cold, 60);
        builder.add_ingredient("mango").unwrap();

        for name in names(&builder, 32) {
            assert!(name.contains("Brew"), "{name}");
            assert!(COLD_ADJECTIVES.iter().any(|a| name.contains(a)), "{name}");
        }
    }

    #[test]
    fn test_missing_flavor_collapses_spaces() {
        let mut builder = DrinkBuilder::new(DrinkType::Hot, 60);
        builder.add_ingredient("whipped-cream").unwrap();

        for name in names(&builder, 32) {
            assert!(name.contains("Coffee"), "{name}");
            assert_eq!(name, name.trim());
            assert!(!name.contains("  "), "{name}");
        }
    }

    #[test]
    fn test_same_seed_same_name() {
        let mut builder = DrinkBuilder::new(DrinkType::Hot, 60);
        builder.add_ingredient("matcha").unwrap();

        let a = generate_drink_name(builder.drink(), &mut StdRng::seed_from_u64(7));
        let b = generate_drink_name(builder.drink(), &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
