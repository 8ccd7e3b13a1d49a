use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Response;
use tracing::{error, info, warn};

use super::AppState;
use super::query::ScrapeQuery;
use super::response::into_response;
use crate::rendering::NavigationOptions;
use crate::scrape::{ScrapeError, scrape_url};
use crate::utils::constants::WELCOME_MESSAGE;

pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

pub async fn scrape(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, ScrapeError> {
    let Query(pairs) = query.map_err(|e| ScrapeError::InvalidQuery(e.body_text()))?;
    let request = ScrapeQuery::from_pairs(pairs).into_request().inspect_err(|e| {
        warn!(error = %e, "Rejected scrape request");
    })?;

    info!(url = %request.url, json = request.use_json, "Scrape request");

    let navigation = NavigationOptions {
        timeout_secs: state.config.navigation_timeout_secs(),
        ..NavigationOptions::default()
    };

    match scrape_url(state.provider.as_ref(), &request, navigation).await {
        Ok(result) => Ok(into_response(result, request.use_json)),
        Err(e) => {
            if matches!(e, ScrapeError::UpstreamLoad { .. }) {
                warn!(url = %request.url, error = %e, "Scrape failed upstream");
            } else {
                error!(url = %request.url, error = %e, "Scrape failed");
            }
            Err(e)
        }
    }
}
