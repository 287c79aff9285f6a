pub mod stats {
    use axum::extract::{Query, State};
    use serde::Deserialize;
    use std::sync::Arc;

    pub struct StatsState {
        pub store: crate::RoundStore,
        pub names: crate::names::NameTable,
        pub api_key: String,
    }

    pub fn router(state: Arc<StatsState>) -> axum::Router {
        axum::Router::new()
            .route("/health", axum::routing::get(health))
            .route("/stats", axum::routing::get(rounds_page))
            .route("/collect", axum::routing::post(collect))
            .route("/report", axum::routing::get(report))
            .with_state(state)
    }

    async fn health() -> axum::Json<common::HealthResponse> {
        axum::Json(common::HealthResponse {
            status: "ok".to_owned(),
        })
    }

    #[derive(Debug, Deserialize)]
    struct PageParams {
        limit: Option<usize>,
        offset: Option<usize>,
    }

    async fn rounds_page(
        State(state): State<Arc<StatsState>>,
        Query(params): Query<PageParams>,
    ) -> axum::Json<Vec<common::Round>> {
        let limit = params.limit.unwrap_or(20);
        let offset = params.offset.unwrap_or(0);

        axum::Json(state.store.page(limit, offset).await)
    }

    #[derive(Debug, Deserialize)]
    struct CollectParams {
        api_key: Option<String>,
    }

    #[derive(Debug, serde::Serialize)]
    struct CollectResponse {
        message: &'static str,
        round_id: String,
    }

    /// Round ingestion from the game server. The key may come as an
    /// `X-Api-Key` header or an `api_key` query parameter, whichever the
    /// collector plugin can produce.
    async fn collect(
        State(state): State<Arc<StatsState>>,
        Query(params): Query<CollectParams>,
        headers: axum::http::HeaderMap,
        body: String,
    ) -> Result<(axum::http::StatusCode, axum::Json<CollectResponse>), (axum::http::StatusCode, &'static str)>
    {
        let supplied_key = headers
            .get("x-api-key")
            .and_then(|v| v.to_str().ok())
            .or(params.api_key.as_deref());
        if supplied_key != Some(state.api_key.as_str()) {
            return Err((axum::http::StatusCode::UNAUTHORIZED, "Unauthorized"));
        }

        let round: common::Round = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Rejecting collect payload: {:?}", e);
            (axum::http::StatusCode::BAD_REQUEST, "Invalid JSON")
        })?;

        tracing::info!("Received round {} on {:?}", round.id, round.map_name);

        let round_id = round.id.clone();
        match state.store.insert(round).await {
            Ok(()) => Ok((
                axum::http::StatusCode::CREATED,
                axum::Json(CollectResponse {
                    message: "Stats collected successfully",
                    round_id,
                }),
            )),
            Err(crate::StoreError::DuplicateRound) => {
                Err((axum::http::StatusCode::CONFLICT, "Round already collected"))
            }
            Err(e) => {
                tracing::error!("Storing round: {:?}", e);
                Err((
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to store round",
                ))
            }
        }
    }

    /// Full-history aggregation. The engine is synchronous, so it runs on
    /// the blocking pool with its own copy of the rounds.
    async fn report(
        State(state): State<Arc<StatsState>>,
    ) -> Result<axum::Json<analysis::report::Report>, axum::http::StatusCode> {
        let rounds = state.store.all().await;
        let names = state.names.clone();

        let result = tokio::task::spawn_blocking(move || {
            analysis::report::generate(&rounds, &names)
        })
        .await
        .map_err(|e| {
            tracing::error!("Report task failed: {:?}", e);
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        })?;

        Ok(axum::Json(result))
    }
}

pub fn router(state: std::sync::Arc<stats::StatsState>) -> axum::Router {
    stats::router(state)
}
