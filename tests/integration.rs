use std::time::Duration;

use drinkcraft::Session;
use drinkcraft::auth::{AuthFlow, InMemoryBackend, is_valid_email, score_password};
use drinkcraft::commands::{CommandStatus, handle_command, parse_command};
use drinkcraft::config::{AppConfig, InputConfig};
use drinkcraft::error::{AuthError, GENERIC_ERROR_MESSAGE, format_secure_error};
use drinkcraft::middleware::RateLimiter;
use drinkcraft::utils::{sanitize_text, validate_amount};
use rand::SeedableRng;
use rand::rngs::StdRng;

// Helper to build a session with a short-window limiter
fn test_session(max_attempts: usize, window: Duration) -> Session<InMemoryBackend> {
    let backend = InMemoryBackend::new().with_account("bo@example.com", "Brew1234!", "Bo");
    let limiter = RateLimiter::new(max_attempts, window);
    Session::with_rng(backend, limiter, &AppConfig::default(), StdRng::seed_from_u64(5))
}

// Helper to run one line and return the response text
async fn send_command(session: &mut Session<InMemoryBackend>, line: &str) -> (CommandStatus, String) {
    let result = handle_command(session, &parse_command(line)).await;
    (result.status, result.message.unwrap_or_default())
}

#[test]
fn test_input_hardening_helpers() {
    assert_eq!(sanitize_text("<i>Latte</i>", 255), "iLatte/i");
    assert_eq!(validate_amount("12.5"), "12.5");
    assert_eq!(validate_amount("<script>"), "");
    assert!(is_valid_email("a@b.co"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a b@c.com"));

    let strength = score_password("Abcdef12!");
    assert_eq!(strength.score, 5);
    assert!(strength.is_strong);
    assert!(strength.feedback.is_empty());

    assert_eq!(format_secure_error(None), GENERIC_ERROR_MESSAGE);
}

#[test]
fn test_limiter_recovers_after_window() {
    let mut limiter = RateLimiter::new(3, Duration::from_millis(200));
    assert_eq!(limiter.remaining_lockout_seconds("k"), 0);

    assert!(limiter.is_allowed("k"));
    assert!(limiter.is_allowed("k"));
    assert!(limiter.is_allowed("k"));
    assert!(!limiter.is_allowed("k"));
    assert!(limiter.remaining_lockout_seconds("k") > 0);

    std::thread::sleep(Duration::from_millis(250));
    assert!(limiter.is_allowed("k"));
}

#[tokio::test]
async fn test_sign_up_then_sign_in_through_flow() {
    let limiter = RateLimiter::default();
    let mut flow = AuthFlow::new(InMemoryBackend::new(), limiter, &InputConfig::default());

    let user = flow
        .sign_up("Cy@Example.com", "Mocha2024!", "Cy <admin>")
        .await
        .unwrap();
    assert_eq!(user.display_name, "Cy admin");

    let user = flow.sign_in("cy@example.com", "Mocha2024!").await.unwrap();
    assert_eq!(user.email, "cy@example.com");

    let err = flow.sign_in("cy@example.com", "nope").await.unwrap_err();
    assert!(matches!(err, AuthError::Backend(_)));
}

#[tokio::test]
async fn test_terminal_session_end_to_end() {
    let mut session = test_session(5, Duration::from_secs(900));

    let (status, text) = send_command(&mut session, "SIGNIN bo@example.com Brew1234!").await;
    assert_eq!(status, CommandStatus::Success);
    assert_eq!(text, "Welcome back, Bo");

    send_command(&mut session, "TYPE cold").await;
    let (_, text) = send_command(&mut session, "ADD cold-brew").await;
    assert_eq!(text, "Added 8 oz Cold Brew");
    send_command(&mut session, "ADD vanilla-cold").await;
    send_command(&mut session, "AMOUNT vanilla-cold 2").await;

    let (_, text) = send_command(&mut session, "SHOW").await;
    assert!(text.contains("2 pump Vanilla Syrup"));

    let (status, text) = send_command(&mut session, "SAVE").await;
    assert_eq!(status, CommandStatus::Success);
    assert!(text.starts_with("Saved \""));
    assert_eq!(session.recipes.len(), 1);
    assert!(session.recipes[0].name.contains("Cold"));
}

#[tokio::test]
async fn test_terminal_lockout_then_recovery() {
    let mut session = test_session(2, Duration::from_millis(200));

    send_command(&mut session, "SIGNIN bo@example.com wrong").await;
    let (_, text) = send_command(&mut session, "SIGNIN bo@example.com wrong").await;
    assert_eq!(text, "Invalid email or password");

    let (_, text) = send_command(&mut session, "SIGNIN bo@example.com Brew1234!").await;
    assert_eq!(text, "Too many sign-in attempts. Please try again in 1 minutes.");

    tokio::time::sleep(Duration::from_millis(250)).await;
    let (status, _) = send_command(&mut session, "SIGNIN bo@example.com Brew1234!").await;
    assert_eq!(status, CommandStatus::Success);
}
