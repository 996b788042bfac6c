use std::time::Duration;

use axum::{
    body::Body,
    http::{HeaderValue, Request, Response},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::Span;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{
        agreement, auth, chat, comment, event, feedback, location, motorcycle, path, post, role,
        team, user,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(modifiers(&BearerSecurity))]
struct ApiDoc;

/// Registers the `bearer` scheme referenced by protected endpoints.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the application router with every entity family, CORS and request logging.
///
/// Swagger UI is mounted at `/docs` only when the server runs in debug mode.
pub fn router(state: AppState) -> Router {
    let config = state.config.clone();

    let (router, mut api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(auth::routes())
        .merge(user::routes())
        .merge(role::routes())
        .merge(location::routes())
        .merge(team::routes())
        .merge(motorcycle::routes())
        .merge(agreement::routes())
        .merge(path::routes())
        .merge(event::routes())
        .merge(post::routes())
        .merge(comment::routes())
        .merge(feedback::routes())
        .merge(chat::routes())
        .split_for_parts();

    api.info.title = config.app_name.clone();
    api.info.version = config.app_version.clone();

    let router = if config.debug {
        router.merge(SwaggerUi::new("/docs").url("/openapi.json", api))
    } else {
        router
    };

    router
        .layer(cors_layer(&config))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(request_span)
                .on_response(|response: &Response<Body>, latency: Duration, _span: &Span| {
                    let status = response.status();
                    let millis = latency.as_millis() as u64;
                    if status.is_server_error() {
                        tracing::error!(%status, millis, "request failed");
                    } else if status.is_client_error() {
                        tracing::warn!(%status, millis, "request rejected");
                    } else {
                        tracing::info!(%status, millis, "request finished");
                    }
                }),
        )
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    match &config.allow_origins {
        None => layer.allow_origin(Any),
        Some(origins) => {
            let origins = origins.iter().filter_map(|origin| {
                HeaderValue::from_str(origin)
                    .inspect_err(|_| tracing::warn!("Ignoring invalid CORS origin {}", origin))
                    .ok()
            });
            layer.allow_origin(AllowOrigin::list(origins))
        }
    }
}

fn request_span(request: &Request<Body>) -> Span {
    tracing::info_span!("request", method = %request.method(), path = %request.uri().path())
}
