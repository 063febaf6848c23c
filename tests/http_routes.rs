use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use permitnow::data::DataDoc;
use permitnow::{router, AppState};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

fn fees() -> serde_json::Value {
    json!({
        "fee_mode": "village_strict",
        "minimum_fee": 60,
        "building": {
            "res_add_alt_deck_pool": {"rate_per_1000": 13.5},
            "plan_exam": {"residential": {"alteration": 65}},
            "erosion_control": {"res_additions_alterations": 60}
        },
        "electrical": {"portal_minimum": 40, "reference_unit_fees": {"recessed_light": 2.5}},
        "hvac": {"distribution_minimum": 30}
    })
}

fn permits() -> serde_json::Value {
    json!({"permits": [
        {"name": "Electrical", "inspections": [{"type": "Rough"}, {"type": "Final"}]}
    ]})
}

fn app_with(fees: DataDoc, permits: DataDoc) -> axum::Router {
    router(Arc::new(AppState::from_results(fees, permits)))
}

fn app() -> axum::Router {
    app_with(DataDoc::Ready(fees()), DataDoc::Ready(permits()))
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/estimate")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_returns_ok() {
    let response = app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "OK");
}

#[tokio::test]
async fn page_contains_sections_form_and_notifier() {
    let response = app().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("id=\"estimator-form\""));
    assert!(html.contains("<button type=\"button\" id=\"btn-print\" disabled>"));
    assert!(html.contains("$13.5/$1,000 of valuation"));
    assert!(html.contains("<td>Electrical</td><td>Rough, Final</td>"));
    assert!(html.contains("MIR Improvements"));
    assert!(html.contains("tel:12623755305"));
    assert!(html.contains("permitnow-height"));
}

#[tokio::test]
async fn unknown_section_is_not_found() {
    let response = app().oneshot(get("/api/sections/weather")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn missing_documents_show_sentinel_messages() {
    let app = app_with(
        DataDoc::Unavailable {
            message: "Missing or unreadable: data/fees.village.json".into(),
        },
        DataDoc::Unavailable {
            message: "Missing or unreadable: data/permits.village.json".into(),
        },
    );

    let response = app.clone().oneshot(get("/api/sections/fees")).await.unwrap();
    assert_eq!(
        body_text(response).await,
        "<div class=\"sub\">Missing or unreadable: data/fees.village.json</div>"
    );

    let response = app.oneshot(get("/api/sections/inspections")).await.unwrap();
    assert!(body_text(response)
        .await
        .contains("Missing or unreadable: data/permits.village.json"));
}

#[tokio::test]
async fn estimate_renders_summary() {
    let response = app()
        .oneshot(post_form(
            "addr=5+Lake+Dr&valuation=10000&desc=new+furnace&f-recess=4",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Address: 5 Lake Dr"));
    assert!(html.contains("$135"));
    // 配置为 30 的暖通最低收费仍按 60 计
    assert!(html.contains("HVAC/Mechanical (minimum)</td><td style=\"text-align:right\">$60</td>"));
    assert!(html.contains("$320"));
    assert!(html.contains("Recessed lights ×4"));
    assert!(html.contains("<li>Mechanical Final</li>"));
}

#[tokio::test]
async fn invalid_valuation_is_rejected() {
    let response = app().oneshot(post_form("valuation=abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["error"], "Invalid valuation: abc");
}

#[tokio::test]
async fn print_without_estimate_is_a_no_op() {
    let response = app().oneshot(get("/api/print")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_text(response).await.is_empty());

    let response = app().oneshot(get("/api/summary.csv")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn print_uses_last_estimate() {
    let app = app();
    app.clone()
        .oneshot(post_form("desc=first+project&t-plum=on"))
        .await
        .unwrap();
    app.clone()
        .oneshot(post_form("desc=second+project&t-elec=on"))
        .await
        .unwrap();

    let response = app.clone().oneshot(get("/api/print")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Project: second project"));
    assert!(!html.contains("first project"));
    assert!(html.contains("<li>Rough Electrical</li>"));
    assert!(!html.contains("Plumbing"));
    assert!(html.contains("<script>window.print()</script>"));

    let response = app.oneshot(get("/api/summary.csv")).await.unwrap();
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/csv; charset=utf-8"
    );
    let csv = body_text(response).await;
    assert!(csv.contains("fee,Electrical trade (portal minimum),40,"));
}

#[tokio::test]
async fn missing_fee_schedule_still_lists_inspections() {
    let app = app_with(
        DataDoc::Unavailable {
            message: "Missing or unreadable: fees.json".into(),
        },
        DataDoc::Ready(permits()),
    );
    let response = app
        .oneshot(post_form("valuation=50000&t-hvac=on"))
        .await
        .unwrap();
    let html = body_text(response).await;

    assert!(html.contains("<th>Total (estimated)</th><th style=\"text-align:right\">$0</th>"));
    assert!(!html.contains("Plan exam"));
    assert!(html.contains("<li>Rough HVAC</li><li>Mechanical Final</li><li>Final Building Inspection</li>"));
}

#[tokio::test]
async fn height_script_is_javascript() {
    let response = app().oneshot(get("/embed/height.js")).await.unwrap();
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/javascript; charset=utf-8"
    );
    assert!(body_text(response).await.contains("postMessage"));
}
