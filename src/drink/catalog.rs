//! Ingredient catalog
//!
//! Static hot and cold ingredient tables.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Hot or cold drink; selects the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrinkType {
    #[default]
    Hot,
    Cold,
}

impl fmt::Display for DrinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrinkType::Hot => write!(f, "hot"),
            DrinkType::Cold => write!(f, "cold"),
        }
    }
}

impl FromStr for DrinkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hot" => Ok(DrinkType::Hot),
            "cold" => Ok(DrinkType::Cold),
            other => Err(format!("unknown drink type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Base,
    Flavor,
    Topping,
    Sweetener,
}

impl Category {
    /// Display order used when listing the catalog
    pub const ALL: [Category; 4] = [
        Category::Base,
        Category::Flavor,
        Category::Topping,
        Category::Sweetener,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Base => write!(f, "base"),
            Category::Flavor => write!(f, "flavor"),
            Category::Topping => write!(f, "topping"),
            Category::Sweetener => write!(f, "sweetener"),
        }
    }
}

/// One catalog row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    /// Hex swatch colour
    pub color: &'static str,
    pub default_amount: &'static str,
    pub unit: &'static str,
}

const fn ingredient(
    id: &'static str,
    name: &'static str,
    category: Category,
    color: &'static str,
    default_amount: &'static str,
    unit: &'static str,
) -> Ingredient {
    Ingredient {
        id,
        name,
        category,
        color,
        default_amount,
        unit,
    }
}

pub static HOT_INGREDIENTS: &[Ingredient] = &[
    ingredient("espresso", "Espresso", Category::Base, "#8B4513", "2", "shots"),
    ingredient("pike-place", "Pike Place Roast", Category::Base, "#6F4E37", "8", "oz"),
    ingredient("blonde-roast", "Blonde Roast", Category::Base, "#D2B48C", "8", "oz"),
    ingredient("dark-roast", "Dark Roast", Category::Base, "#2F1B14", "8", "oz"),
    ingredient("chai-tea", "Chai Tea", Category::Base, "#D2691E", "6", "oz"),
    ingredient("green-tea", "Green Tea", Category::Base, "#9ACD32", "6", "oz"),
    ingredient("earl-grey", "Earl Grey Tea", Category::Base, "#696969", "6", "oz"),
    ingredient("matcha", "Matcha", Category::Base, "#7CB342", "2", "scoops"),
    ingredient("hot-chocolate", "Hot Chocolate", Category::Base, "#7B3F00", "6", "oz"),
    ingredient("white-mocha", "White Hot Chocolate", Category::Base, "#F5E6D3", "6", "oz"),
    ingredient("vanilla", "Vanilla Syrup", Category::Flavor, "#F3E5AB", "1", "pump"),
    ingredient("caramel", "Caramel Syrup", Category::Flavor, "#D2691E", "1", "pump"),
    ingredient("hazelnut", "Hazelnut Syrup", Category::Flavor, "#D2B48C", "1", "pump"),
    ingredient("brown-sugar", "Brown Sugar Syrup", Category::Flavor, "#A0522D", "1", "pump"),
    ingredient("classic", "Classic Syrup", Category::Flavor, "#FFD700", "1", "pump"),
    ingredient("peppermint", "Peppermint Syrup", Category::Flavor, "#98FB98", "1", "pump"),
    ingredient("toffee-nut", "Toffee Nut Syrup", Category::Flavor, "#DEB887", "1", "pump"),
    ingredient("cinnamon-dolce", "Cinnamon Dolce", Category::Flavor, "#D2691E", "1", "pump"),
    ingredient("white-mocha-syrup", "White Mocha Syrup", Category::Flavor, "#F5E6D3", "1", "pump"),
    ingredient("mocha-syrup", "Mocha Syrup", Category::Flavor, "#654321", "1", "pump"),
    ingredient("2percent-milk", "2% Milk", Category::Flavor, "#F5F5DC", "4", "oz"),
    ingredient("oat-milk", "Oat Milk", Category::Flavor, "#F4E4BC", "4", "oz"),
    ingredient("almond-milk", "Almond Milk", Category::Flavor, "#FFEBCD", "4", "oz"),
    ingredient("coconut-milk", "Coconut Milk", Category::Flavor, "#F5F5DC", "4", "oz"),
    ingredient("soy-milk", "Soy Milk", Category::Flavor, "#F5DEB3", "4", "oz"),
    ingredient("heavy-cream", "Heavy Cream", Category::Flavor, "#FFFACD", "2", "oz"),
    ingredient("half-and-half", "Half & Half", Category::Flavor, "#FFF8DC", "3", "oz"),
    ingredient("whipped-cream", "Whipped Cream", Category::Topping, "#FFFACD", "1", "dollop"),
    ingredient("caramel-drizzle", "Caramel Drizzle", Category::Topping, "#D2691E", "1", "drizzle"),
    ingredient("chocolate-drizzle", "Chocolate Drizzle", Category::Topping, "#654321", "1", "drizzle"),
    ingredient("cinnamon-powder", "Cinnamon Powder", Category::Topping, "#D2691E", "1", "dash"),
    ingredient("nutmeg", "Nutmeg", Category::Topping, "#8B4513", "1", "pinch"),
    ingredient("foam", "Steamed Milk Foam", Category::Topping, "#FFFDD0", "2", "oz"),
    ingredient("extra-shot", "Extra Espresso Shot", Category::Topping, "#8B4513", "1", "shot"),
    ingredient("sea-salt", "Sea Salt", Category::Topping, "#F5F5F5", "1", "pinch"),
];

pub static COLD_INGREDIENTS: &[Ingredient] = &[
    ingredient("cold-brew", "Cold Brew", Category::Base, "#4A4A4A", "8", "oz"),
    ingredient("iced-coffee", "Iced Coffee", Category::Base, "#8B4513", "6", "oz"),
    ingredient("iced-americano", "Iced Americano", Category::Base, "#654321", "6", "oz"),
    ingredient("nitro-cold-brew", "Nitro Cold Brew", Category::Base, "#2F1B14", "8", "oz"),
    ingredient("iced-green-tea", "Iced Green Tea", Category::Base, "#9ACD32", "6", "oz"),
    ingredient("iced-black-tea", "Iced Black Tea", Category::Base, "#8B4513", "6", "oz"),
    ingredient("iced-white-tea", "Iced White Tea", Category::Base, "#F5F5DC", "6", "oz"),
    ingredient("refresher-base", "Refresher Base", Category::Base, "#FF69B4", "6", "oz"),
    ingredient("frappuccino-base", "Frappuccino Base", Category::Base, "#DEB887", "4", "oz"),
    ingredient("iced-matcha", "Iced Matcha", Category::Base, "#7CB342", "2", "scoops"),
    ingredient("ice", "Ice Cubes", Category::Base, "#E0F6FF", "1", "cup"),
    ingredient("crushed-ice", "Crushed Ice", Category::Base, "#F0F8FF", "½", "cup"),
    ingredient("vanilla-cold", "Vanilla Syrup", Category::Flavor, "#F3E5AB", "1", "pump"),
    ingredient("caramel-cold", "Caramel Syrup", Category::Flavor, "#D2691E", "1", "pump"),
    ingredient("hazelnut-cold", "Hazelnut Syrup", Category::Flavor, "#D2B48C", "1", "pump"),
    ingredient("brown-sugar-cold", "Brown Sugar Syrup", Category::Flavor, "#A0522D", "1", "pump"),
    ingredient("classic-cold", "Classic Syrup", Category::Flavor, "#FFD700", "1", "pump"),
    ingredient("raspberry", "Raspberry Syrup", Category::Flavor, "#DC143C", "1", "pump"),
    ingredient("peach", "Peach Syrup", Category::Flavor, "#FFCBA4", "1", "pump"),
    ingredient("mango", "Mango Syrup", Category::Flavor, "#FFB347", "1", "pump"),
    ingredient("strawberry", "Strawberry Syrup", Category::Flavor, "#FF69B4", "1", "pump"),
    ingredient("liquid-cane-sugar", "Liquid Cane Sugar", Category::Sweetener, "#F5DEB3", "1", "pump"),
    ingredient("cold-2percent", "Cold 2% Milk", Category::Flavor, "#F0F8FF", "4", "oz"),
    ingredient("cold-oat-milk", "Cold Oat Milk", Category::Flavor, "#F4E4BC", "4", "oz"),
    ingredient("cold-almond-milk", "Cold Almond Milk", Category::Flavor, "#FFEBCD", "4", "oz"),
    ingredient("cold-coconut-milk", "Cold Coconut Milk", Category::Flavor, "#F5F5DC", "4", "oz"),
    ingredient("cold-soy-milk", "Cold Soy Milk", Category::Flavor, "#F5DEB3", "4", "oz"),
    ingredient("mint", "Fresh Mint", Category::Flavor, "#98FB98", "3", "leaves"),
    ingredient("lemon", "Lemon Juice", Category::Flavor, "#FFFF00", "½", "oz"),
    ingredient("lime", "Lime Juice", Category::Flavor, "#32CD32", "½", "oz"),
    ingredient("cold-foam", "Cold Foam", Category::Topping, "#F0F8FF", "2", "oz"),
    ingredient("vanilla-sweet-cream", "Vanilla Sweet Cream", Category::Topping, "#FFFACD", "1", "splash"),
    ingredient("whipped-cream-cold", "Whipped Cream", Category::Topping, "#FFFACD", "1", "dollop"),
    ingredient("caramel-drizzle-cold", "Caramel Drizzle", Category::Topping, "#D2691E", "1", "drizzle"),
    ingredient("chocolate-drizzle-cold", "Chocolate Drizzle", Category::Topping, "#654321", "1", "drizzle"),
    ingredient("cookie-crumbles", "Cookie Crumbles", Category::Topping, "#DEB887", "1", "sprinkle"),
    ingredient("java-chips", "Java Chips", Category::Topping, "#654321", "1", "scoop"),
    ingredient("fresh-berries", "Fresh Berries", Category::Topping, "#8B008B", "2", "pieces"),
    ingredient("coconut-flakes", "Coconut Flakes", Category::Topping, "#F5F5DC", "1", "sprinkle"),
    ingredient("extra-shot-cold", "Extra Shot (Iced)", Category::Topping, "#8B4513", "1", "shot"),
];

pub fn ingredients_for(drink_type: DrinkType) -> &'static [Ingredient] {
    match drink_type {
        DrinkType::Hot => HOT_INGREDIENTS,
        DrinkType::Cold => COLD_INGREDIENTS,
    }
}

pub fn find_ingredient(drink_type: DrinkType, id: &str) -> Option<&'static Ingredient> {
    ingredients_for(drink_type).iter().find(|i| i.id == id)
}

pub fn by_category(
    drink_type: DrinkType,
    category: Category,
) -> impl Iterator<Item = &'static Ingredient> {
    ingredients_for(drink_type)
        .iter()
        .filter(move |i| i.category == category)
}
