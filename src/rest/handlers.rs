use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::render::View;
use crate::types::QuoteError;

use super::{
    models::{
        CategoriesResponse, ErrorResponse, FilterRequest, HealthResponse, ImportResponse,
        NewQuoteRequest, PushResponse, QuotesResponse, ViewResponse,
    },
    AppState,
};

fn view_response(view: View) -> Json<ViewResponse> {
    Json(ViewResponse {
        line: view.line().to_string(),
        empty: view == View::Empty,
    })
}

fn error_response(err: QuoteError) -> axum::response::Response {
    let status = match err {
        QuoteError::Validation(_) | QuoteError::Format(_) => StatusCode::BAD_REQUEST,
        QuoteError::Transport(_) => StatusCode::BAD_GATEWAY,
        QuoteError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorResponse {
            message: err.to_string(),
        }),
    )
        .into_response()
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let uptime_secs = state.started_at.elapsed().map(|d| d.as_secs()).unwrap_or(0);
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            uptime_secs,
        }),
    )
}

pub async fn list_quotes(State(state): State<AppState>) -> impl IntoResponse {
    Json(QuotesResponse {
        quotes: state.manager.quotes(),
    })
}

pub async fn submit_quote(
    State(state): State<AppState>,
    Json(request): Json<NewQuoteRequest>,
) -> impl IntoResponse {
    match state.manager.submit_quote(&request.text, &request.category) {
        Ok(quote) => (StatusCode::CREATED, Json(quote)).into_response(),
        Err(err) => {
            log::warn!("rejected quote submission: {}", err);
            error_response(err)
        }
    }
}

pub async fn random_quote(State(state): State<AppState>) -> impl IntoResponse {
    view_response(state.manager.next_quote())
}

pub async fn current_quote(State(state): State<AppState>) -> impl IntoResponse {
    view_response(state.manager.current_quote())
}

pub async fn categories(State(state): State<AppState>) -> impl IntoResponse {
    let (selected, options) = state.manager.categories();
    Json(CategoriesResponse {
        selected: selected.to_string(),
        options,
    })
}

pub async fn set_filter(
    State(state): State<AppState>,
    Json(request): Json<FilterRequest>,
) -> impl IntoResponse {
    match state.manager.change_filter(&request.category) {
        Ok(view) => view_response(view).into_response(),
        Err(err) => {
            log::error!("failed to change filter: {}", err);
            error_response(err)
        }
    }
}

pub async fn export(State(state): State<AppState>) -> impl IntoResponse {
    match state.manager.export_json() {
        Ok(body) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "application/json"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"quotes.json\"",
                ),
            ],
            body,
        )
            .into_response(),
        Err(err) => {
            log::error!("failed to export quotes: {}", err);
            error_response(err)
        }
    }
}

pub async fn import(State(state): State<AppState>, body: String) -> impl IntoResponse {
    match state.manager.import_json(&body) {
        Ok(imported) => Json(ImportResponse { imported }).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn sync(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.manager.sync_now().await)
}

pub async fn push(State(state): State<AppState>) -> impl IntoResponse {
    let pushed = state.manager.push_now().await;
    let status = if pushed {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };
    (status, Json(PushResponse { pushed }))
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            message: "not found".to_string(),
        }),
    )
}
