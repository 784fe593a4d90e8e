use std::sync::Arc;

use tokio::sync::Notify;

use super::test_harness::{
    Backend, VALID_CODE, ViewHarness, setup_gated_harness, setup_view_harness,
};

const FIVE: [&str; 5] = ["A", "B", "C", "D", "E"];

fn fresh_pass() -> Backend {
    Backend::Passport {
        level: "",
        stations: FIVE.to_vec(),
        stamped: Vec::new(),
    }
}

async fn render_loaded(email: Option<&str>, backend: Backend) -> String {
    let mut harness: ViewHarness = setup_view_harness(email, backend);
    harness.rebuild();
    harness.settle().await;
    harness.render()
}

#[tokio::test(flavor = "current_thread")]
async fn passport_view_smoke_renders_fresh_pass() {
    let html = render_loaded(Some("ada@example.com"), fresh_pass()).await;

    assert!(html.contains("Passport for Ada"), "missing title in {html}");
    assert!(
        html.contains("0 of 5 stations visited"),
        "missing progress label in {html}"
    );
    assert!(!html.contains("level-badge"), "badge should be hidden in {html}");
    assert_eq!(html.matches("station-container locked").count(), 5, "{html}");
    assert!(html.contains("A-locked.png"), "missing locked icon in {html}");
    assert!(html.contains("Unlock"), "missing unlock button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn passport_view_smoke_renders_stamped_stations_and_badge() {
    let html = render_loaded(
        Some("ada@example.com"),
        Backend::Passport {
            level: "KI Explorer",
            stations: FIVE.to_vec(),
            stamped: vec!["B", "D", "Ghost"],
        },
    )
    .await;

    assert!(html.contains("2 of 5 stations visited"), "{html}");
    assert!(html.contains("level-badge explorer"), "missing badge in {html}");
    assert!(html.contains("⭐"), "missing glyph in {html}");
    assert_eq!(html.matches("station-container unlocked").count(), 2, "{html}");
    assert!(html.contains("B-unlocked.png"), "missing unlocked icon in {html}");
    assert!(!html.contains("Ghost"), "unknown station leaked into {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn passport_view_smoke_halts_on_backend_rejection() {
    let html = render_loaded(Some("ghost@example.com"), Backend::Rejects("no user")).await;

    assert!(html.contains("no user"), "missing backend error in {html}");
    assert!(!html.contains("stations visited"), "partial UI rendered in {html}");
    assert!(!html.contains("unlock-button"), "unlock control rendered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn passport_view_smoke_halts_without_identity() {
    let html = render_loaded(None, fresh_pass()).await;

    assert!(html.contains("Email required"), "missing identity message in {html}");
    assert!(!html.contains("stations visited"), "partial UI rendered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn passport_view_smoke_reports_fetch_failure() {
    let html = render_loaded(Some("ada@example.com"), Backend::Unreachable).await;

    assert!(
        html.contains("A critical error occurred"),
        "missing fetch error in {html}"
    );
    assert!(!html.contains("stations visited"), "partial UI rendered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn passport_view_smoke_unlock_stamps_station_and_clears_code() {
    let gate = Arc::new(Notify::new());
    let mut harness = setup_gated_harness(Some("ada@example.com"), fresh_pass(), gate.clone());
    harness.rebuild();
    harness.settle().await;
    assert!(harness.render().contains("0 of 5 stations visited"));

    harness.enter_code(&format!("  {VALID_CODE} "));
    harness.submit();
    harness.settle().await;

    let html = harness.render();
    assert!(harness.form().busy, "form should be busy while in flight");
    assert!(html.contains("Checking..."), "missing busy label in {html}");

    // A second press while in flight is ignored.
    harness.submit();
    harness.settle().await;
    assert_eq!(harness.unlock_calls(), 1);

    gate.notify_one();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("1 of 5 stations visited"), "{html}");
    assert!(html.contains("level-badge explorer"), "missing badge in {html}");
    assert!(html.contains("A-unlocked.png"), "missing unlocked icon in {html}");
    assert_eq!(html.matches("station-container unlocked").count(), 1, "{html}");
    assert!(html.contains("unlock-message success"), "{html}");
    assert!(html.contains("Welcome to A"), "{html}");

    let form = harness.form();
    assert!(!form.busy);
    assert!(form.code.is_empty(), "code should be cleared, got {:?}", form.code);
    assert_eq!(harness.unlock_calls(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn passport_view_smoke_rejected_code_is_kept_for_correction() {
    let mut harness = setup_view_harness(Some("ada@example.com"), fresh_pass());
    harness.rebuild();
    harness.settle().await;

    harness.enter_code("beta");
    harness.submit();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("unlock-message attention"), "{html}");
    assert!(html.contains("Invalid code"), "missing backend message in {html}");
    assert!(html.contains("0 of 5 stations visited"), "{html}");
    assert!(!html.contains("level-badge"), "badge should stay hidden in {html}");

    let form = harness.form();
    assert_eq!(form.code, "beta");
    assert!(!form.busy);
    assert_eq!(harness.unlock_calls(), 1);
}
