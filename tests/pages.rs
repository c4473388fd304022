use axum::routing::get;
use axum::{Json, Router};
use reqwest::StatusCode;
use serde_json::json;
use tokio::net::TcpListener;

use team_roster::{router, ScriptUrl, SheetClient};

async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn app_with(script_url: Option<String>) -> String {
    let client = SheetClient::with_http(reqwest::Client::new(), ScriptUrl::Fixed(script_url));
    spawn(router(client)).await
}

async fn fetch_text(url: String) -> (StatusCode, String) {
    let resp = reqwest::get(url).await.unwrap();
    (resp.status(), resp.text().await.unwrap())
}

#[tokio::test]
async fn test_home_shows_banner_only_after_submit() {
    let app = app_with(None).await;

    let (status, page) = fetch_text(format!("{app}/?submitted=1")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("Submission complete."));
    assert!(page.contains("Loading jury assignments"));

    let (_, page) = fetch_text(format!("{app}/")).await;
    assert!(!page.contains("Submission complete."));
}

#[tokio::test]
async fn test_roster_fragment_renders_table() {
    let sheet = Router::new().route(
        "/exec",
        get(|| async {
            Json(json!([
                { "Jurcy Number": "7", "Name": "Alex", "Size": "M", "Phone Number": "0170" },
                { "Name": "<b>Rin</b>" }
            ]))
        }),
    );
    let upstream = spawn(sheet).await;
    let app = app_with(Some(format!("{upstream}/exec"))).await;

    let (status, html) = fetch_text(format!("{app}/fragments/roster")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<table>"));
    assert!(html.contains("<td>Alex</td>"));
    assert!(html.contains("&lt;b&gt;Rin&lt;/b&gt;"));
    assert!(html.contains("<strong>—</strong>"));
}

#[tokio::test]
async fn test_roster_fragment_empty_state() {
    let sheet = Router::new().route("/exec", get(|| async { Json(json!([])) }));
    let upstream = spawn(sheet).await;
    let app = app_with(Some(format!("{upstream}/exec"))).await;

    let (_, html) = fetch_text(format!("{app}/fragments/roster")).await;
    assert!(html.contains("No entries yet."));
}

#[tokio::test]
async fn test_roster_fragment_failed_state_has_hint() {
    let app = app_with(None).await;

    let (status, html) = fetch_text(format!("{app}/fragments/roster")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("GOOGLE_SHEETS_SCRIPT_URL is not configured"));
    assert!(html.contains("your Apps Script is deployed"));
}

#[tokio::test]
async fn test_submit_page_renders_form() {
    let app = app_with(None).await;

    let (status, page) = fetch_text(format!("{app}/submit")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains(r#"<form id="submit-form""#));
    assert!(page.contains(r#"<option value="4XL">4XL</option>"#));
}
