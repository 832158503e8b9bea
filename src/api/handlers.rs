use axum::{
    Form, Json,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use std::time::Instant;

use crate::data_models::SearchResponse;
use crate::error::AppError;
use crate::pages;
use crate::responder;
use crate::results::ResultsView;
use crate::state::AppState;
use crate::submitter;

use super::models::{LoginForm, QueryForm, SearchParams};

pub async fn search_handler(Query(pairs): Query<Vec<(String, String)>>) -> Json<SearchResponse> {
    let params = SearchParams::from_pairs(pairs);
    tracing::info!("api search: q={:?}", params.q);
    Json(responder::respond(params.q.as_deref()))
}

pub async fn home_page() -> Html<String> {
    Html(pages::render_home())
}

pub async fn submit_query(Form(form): Form<QueryForm>) -> Response {
    match submitter::navigation_target(&form.query) {
        Some(target) => Redirect::to(&target).into_response(),
        None => Html(pages::render_home()).into_response(),
    }
}

pub async fn results_page(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Html<String> {
    let start = Instant::now();
    let query = SearchParams::from_pairs(pairs).q.unwrap_or_default();

    let view = ResultsView::assemble(state.config.results_source, &query, &state.search_client).await;

    tracing::info!(
        "rendered {} results for {:?} from {} in {}ms",
        view.results.len(),
        query,
        state.config.results_source,
        start.elapsed().as_millis()
    );
    Html(pages::render_results(&view))
}

pub async fn login_page() -> Html<String> {
    Html(pages::render_login(None))
}

pub async fn login_submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LoginForm>,
) -> (StatusCode, Html<String>) {
    match state.identity.sign_in(&form.email, &form.password).await {
        Ok(()) => {
            tracing::info!("login succeeded");
            (StatusCode::OK, Html(pages::render_login(Some("Logged in!"))))
        }
        Err(e) => {
            let err = AppError::from(e);
            tracing::warn!("login failed: {:#}", err);
            (StatusCode::UNAUTHORIZED, Html(pages::render_login(Some(err.notice()))))
        }
    }
}
