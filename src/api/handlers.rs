use crate::error::ApiError;
use crate::host::notifier_script;
use crate::models::{EstimateForm, ProjectInput};
use crate::render::{self, printable, render_page, render_summary, summary_csv};
use crate::service::estimate;
use crate::state::AppState;
use axum::{
    extract::{Form, Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use chrono::Local;
use std::sync::Arc;

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 完整页面
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_page(&state))
}

/// 单个只读信息区块
pub async fn section(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Html<String>, ApiError> {
    let html = match name.as_str() {
        "fees" => render::render_fees(&state.fee_view),
        "inspections" => render::render_inspections(&state.permit_view),
        "contractors" => render::render_contractors(),
        "contacts" => render::render_contacts(),
        _ => return Err(ApiError::UnknownSection(name)),
    };
    Ok(Html(html))
}

/// 计算估算, 保存为最近一次结果并返回页面片段
pub async fn create_estimate(
    State(state): State<Arc<AppState>>,
    Form(form): Form<EstimateForm>,
) -> Result<Html<String>, ApiError> {
    let input = ProjectInput::try_from(form)?;
    let summary = estimate(&input, state.fee_schedule.as_ref());
    tracing::info!(
        "estimate computed: {} lines, total {}, {} inspections",
        summary.lines.len(),
        summary.total,
        summary.inspections.len()
    );

    let html = render_summary(&summary);
    state.store_summary(summary).await;
    Ok(Html(html))
}

/// 可打印文档; 尚无估算时返回 204
pub async fn print_summary(State(state): State<Arc<AppState>>) -> Response {
    let summary = state.last_summary().await;
    match printable(summary.as_ref(), Local::now()) {
        Some(html) => Html(html).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// 最近一次估算的 CSV; 尚无估算时返回 204
pub async fn export_summary(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let Some(summary) = state.last_summary().await else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };
    let body = summary_csv(&summary).map_err(|e| ApiError::Export(e.to_string()))?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"permitnow-summary.csv\"",
            ),
        ],
        body,
    )
        .into_response())
}

/// 高度上报脚本 (供外部页面单独引用)
pub async fn height_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        notifier_script(),
    )
}
