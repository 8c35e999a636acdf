use std::sync::Arc;

use crate::application::http::health::health_routes;
use crate::application::http::recipe::router::recipe_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::args::Args;

use axum::Router;
use axum::http::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use recipe_analyzer_core::{application::create_service, domain::common::RecipeAnalyzerConfig};
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span};
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = RecipeAnalyzerConfig::from(args.as_ref().clone());
    let service = create_service(config).await?;

    Ok(AppState::new(args, service))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([CONTENT_TYPE, CONTENT_LENGTH, ACCEPT])
        .allow_credentials(true);

    let root_path = state.args.server.root_path.clone();

    let mut openapi = ApiDoc::merged();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{root_path}{path}"), item))
        .collect();
    openapi.paths = paths;

    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let mut router = Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(
            SwaggerUi::new(format!("{}/swagger-ui", root_path))
                .url(api_docs_url.clone(), openapi.clone()),
        )
        .merge(Redoc::with_url(format!("{}/redoc", root_path), openapi))
        .merge(RapiDoc::new(api_docs_url).path(format!("{}/rapidoc", root_path)))
        .merge(recipe_routes(state.clone()))
        .merge(health_routes(&root_path));

    // The recorder is process global, so it can only be installed once.
    if state.args.server.metrics {
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
        router = router
            .route(
                &format!("{}/metrics", root_path),
                get(|| async move { metric_handle.render() }),
            )
            .layer(prometheus_layer);
    }

    let router = router.layer(trace_layer).layer(cors).with_state(state);
    Ok(router)
}
