//! Command handlers
//!
//! Dispatches parsed commands against a [`Session`] and builds the text
//! shown back to the user.

use std::fmt::Write as _;

use log::info;

use crate::auth::{AuthBackend, score_password};
use crate::commands::parser::{Command, CommandResult};
use crate::drink::catalog::{by_category, ingredients_for};
use crate::drink::{Category, DrinkType};
use crate::error::handlers::{auth_error_message, drink_error_message};
use crate::error::{AuthError, DrinkError};
use crate::session::Session;

pub const HELP_TEXT: &str = "\
Commands:
  SIGNIN <email> <password>
  SIGNUP <email> <password> [display name]
  SIGNOUT
  STRENGTH <password>
  TYPE hot|cold
  MENU
  ADD <ingredient-id>
  AMOUNT <ingredient-id> <amount>
  REMOVE <ingredient-id>
  NAME
  SAVE
  SHOW
  RECIPES
  QUIT";

/// Dispatch a parsed command to its handler
pub async fn handle_command<B: AuthBackend>(
    session: &mut Session<B>,
    command: &Command,
) -> CommandResult {
    match command {
        Command::SignIn { email, password } => handle_cmd_sign_in(session, email, password).await,
        Command::SignUp {
            email,
            password,
            display_name,
        } => handle_cmd_sign_up(session, email, password, display_name).await,
        Command::SignOut => handle_cmd_sign_out(session),
        Command::Strength(password) => handle_cmd_strength(password),
        Command::Type(drink_type) => handle_cmd_type(session, drink_type),
        Command::Menu => handle_cmd_menu(session.builder.drink_type()),
        Command::Add(id) => handle_cmd_add(session, id),
        Command::Amount { id, amount } => handle_cmd_amount(session, id, amount),
        Command::Remove(id) => handle_cmd_remove(session, id),
        Command::Name => handle_cmd_name(session),
        Command::Save => handle_cmd_save(session),
        Command::Show => handle_cmd_show(session),
        Command::Recipes => handle_cmd_recipes(session),
        Command::Help => CommandResult::success(HELP_TEXT),
        Command::Quit => CommandResult::quit("Goodbye"),
        Command::Unknown(raw) => {
            CommandResult::failure(format!("Unknown command '{}'. Type HELP for a list.", raw))
        }
    }
}

fn auth_failure(err: AuthError) -> CommandResult {
    info!("Auth rejected: {}", err);
    let mut message = auth_error_message(&err);
    if let AuthError::WeakPassword(feedback) = &err {
        for hint in feedback {
            let _ = write!(message, "\n  - {}", hint);
        }
    }
    CommandResult::failure(message)
}

fn drink_failure(err: DrinkError) -> CommandResult {
    CommandResult::failure(drink_error_message(&err))
}

async fn handle_cmd_sign_in<B: AuthBackend>(
    session: &mut Session<B>,
    email: &str,
    password: &str,
) -> CommandResult {
    match session.auth.sign_in(email, password).await {
        Ok(user) => {
            let message = format!("Welcome back, {}", greeting_name(&user.display_name, &user.email));
            session.user = Some(user);
            CommandResult::success(message)
        }
        Err(err) => auth_failure(err),
    }
}

async fn handle_cmd_sign_up<B: AuthBackend>(
    session: &mut Session<B>,
    email: &str,
    password: &str,
    display_name: &str,
) -> CommandResult {
    match session.auth.sign_up(email, password, display_name).await {
        Ok(user) => CommandResult::success(format!(
            "Account created for {}. Sign in to continue.",
            user.email
        )),
        Err(err) => auth_failure(err),
    }
}

fn handle_cmd_sign_out<B: AuthBackend>(session: &mut Session<B>) -> CommandResult {
    match session.sign_out() {
        Some(user) => CommandResult::success(format!("Signed out {}", user.email)),
        None => CommandResult::failure("Not signed in"),
    }
}

fn handle_cmd_strength(password: &str) -> CommandResult {
    let strength = score_password(password);
    let mut message = format!(
        "Password Strength: {} ({}/5, {}%)",
        strength.label(),
        strength.display_score(),
        strength.meter_percent()
    );
    for hint in &strength.feedback {
        let _ = write!(message, "\n  - {}", hint);
    }
    CommandResult::success(message)
}

fn handle_cmd_type<B>(session: &mut Session<B>, raw: &str) -> CommandResult {
    match raw.parse::<DrinkType>() {
        Ok(drink_type) => {
            session.builder.set_type(drink_type);
            CommandResult::success(format!("Building a {} drink", drink_type))
        }
        Err(reason) => CommandResult::failure(reason),
    }
}

fn handle_cmd_menu(drink_type: DrinkType) -> CommandResult {
    let mut message = format!(
        "{} ingredients ({}):",
        drink_type,
        ingredients_for(drink_type).len()
    );
    for category in Category::ALL {
        let mut rows = by_category(drink_type, category).peekable();
        if rows.peek().is_none() {
            continue;
        }
        let _ = write!(message, "\n{}s:", category);
        for ingredient in rows {
            let _ = write!(
                message,
                "\n  {:<24} {} ({} {})",
                ingredient.id, ingredient.name, ingredient.default_amount, ingredient.unit
            );
        }
    }
    CommandResult::success(message)
}

fn handle_cmd_add<B>(session: &mut Session<B>, id: &str) -> CommandResult {
    match session.builder.add_ingredient(id) {
        Ok(added) => CommandResult::success(format!(
            "Added {} {} {}",
            added.amount, added.ingredient.unit, added.ingredient.name
        )),
        Err(err) => drink_failure(err),
    }
}

fn handle_cmd_amount<B>(session: &mut Session<B>, id: &str, amount: &str) -> CommandResult {
    match session.builder.update_amount(id, amount) {
        Ok("") => CommandResult::failure(format!("Amount cleared for {}: use digits and fractions only", id)),
        Ok(stored) => CommandResult::success(format!("{} set to {}", id, stored)),
        Err(err) => drink_failure(err),
    }
}

fn handle_cmd_remove<B>(session: &mut Session<B>, id: &str) -> CommandResult {
    match session.builder.remove_ingredient(id) {
        Ok(removed) => CommandResult::success(format!("Removed {}", removed.ingredient.name)),
        Err(err) => drink_failure(err),
    }
}

fn handle_cmd_name<B>(session: &mut Session<B>) -> CommandResult {
    let Session { builder, rng, .. } = session;
    match builder.generate_name(rng) {
        Ok(name) => CommandResult::success(format!("Generated name: {}", name)),
        Err(err) => drink_failure(err),
    }
}

fn handle_cmd_save<B>(session: &mut Session<B>) -> CommandResult {
    let Session {
        builder,
        rng,
        recipes,
        ..
    } = session;
    match builder.save(rng) {
        Ok(recipe) => {
            let message = format!("Saved \"{}\" to your recipes!", recipe.name);
            recipes.push(recipe);
            CommandResult::success(message)
        }
        Err(err) => drink_failure(err),
    }
}

fn handle_cmd_show<B>(session: &Session<B>) -> CommandResult {
    let drink = session.builder.drink();
    if drink.is_empty() {
        return CommandResult::success(format!(
            "Your {} drink is empty. Start adding ingredients to build your drink",
            drink.drink_type
        ));
    }

    let mut message = format!(
        "Your {} drink ({} ingredients):",
        drink.drink_type,
        drink.ingredients.len()
    );
    for ingredient in &drink.ingredients {
        let _ = write!(message, "\n  {:<24} {}", ingredient.id(), ingredient);
    }
    if let Some(name) = session.builder.generated_name() {
        let _ = write!(message, "\nGenerated Name: {}", name);
    }
    CommandResult::success(message)
}

fn handle_cmd_recipes<B>(session: &Session<B>) -> CommandResult {
    if session.recipes.is_empty() {
        return CommandResult::success("No saved recipes yet");
    }

    let mut message = String::new();
    for (index, recipe) in session.recipes.iter().enumerate() {
        if index > 0 {
            message.push('\n');
        }
        let _ = write!(message, "{}. {}", index + 1, recipe);
    }
    CommandResult::success(message)
}

fn greeting_name<'a>(display_name: &'a str, email: &'a str) -> &'a str {
    if display_name.is_empty() {
        email
    } else {
        display_name
    }
}
