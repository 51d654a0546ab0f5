use axum::{
    Json, Router,
    extract::MatchedPath,
    http::{HeaderName, Request},
    middleware::from_fn_with_state,
    routing::get,
};
use flightdeck_common::views::ApiErrorResponse;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info_span;
use utoipa::{
    ToSchema,
    openapi::{
        Components, Info, License, OpenApi, RefOr,
        path::Operation,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{auth::gate, context::ApiContext, handlers};

const REQUEST_ID_HEADER: &str = "x-request-id";
pub const OPENAPI_PATH: &str = "/api/v1/openapi.json";

/// Assemble the HTTP router and the OpenAPI document describing it.
pub fn make(context: ApiContext) -> (Router, OpenApi) {
    let x_request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(
            x_request_id.clone(),
            MakeRequestUuid,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request<_>| {
                    // Log the request ID as generated
                    let request_id = req.headers().get(REQUEST_ID_HEADER);
                    let span = info_span!(
                        "http_request",
                        method = req.method().to_string(),
                        request_id = Option::<&str>::None,
                        path = Option::<&str>::None,
                    );

                    if let Some(request_id) = request_id.and_then(|v| v.to_str().ok()) {
                        span.record("request_id", request_id);
                    };

                    if let Some(path) = req.extensions().get::<MatchedPath>() {
                        span.record("path", path.as_str())
                    } else {
                        span.record("path", req.uri().path())
                    };

                    span
                }),
        )
        .layer(
            CorsLayer::new()
                .allow_credentials(true)
                .allow_origin(context.cors_origin.clone())
        )
        .layer(PropagateRequestIdLayer::new(x_request_id));

    let openapi = OpenApi::builder()
        .info(
            Info::builder()
                .title("Flightdeck API Reference")
                .version(env!("CARGO_PKG_VERSION"))
                .license(Some(
                    License::builder()
                        .name("Apache 2.0 License")
                        .identifier(Some(env!("CARGO_PKG_LICENSE")))
                        .build()
                ))
        )
        .build();

    let protected = OpenApiRouter::new()
        .routes(routes!(handlers::flights::list_flights, handlers::flights::create_flight))
        .routes(routes!(
            handlers::flights::get_flight,
            handlers::flights::update_flight,
            handlers::flights::delete_flight
        ))
        .route_layer(from_fn_with_state(
            context.clone(),
            gate::require_bearer,
        ));

    let (r, mut a) = OpenApiRouter::with_openapi(openapi)
        .routes(routes!(handlers::status))
        .routes(routes!(handlers::health_check))
        .routes(routes!(handlers::auth::auth_login))
        .merge(protected)
        .layer(middleware)
        .with_state(context)
        .split_for_parts();

    a.paths.paths.iter_mut().for_each(|(_path, item)| {
        apply_default_errors(&mut item.get);
        apply_default_errors(&mut item.post);
        apply_default_errors(&mut item.patch);
        apply_default_errors(&mut item.put);
        apply_default_errors(&mut item.delete);
        apply_default_errors(&mut item.trace);
        apply_default_errors(&mut item.head);
        apply_default_errors(&mut item.options);
    });

    a.components
        .get_or_insert_with(Components::new)
        .add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );

    let document = a.clone();
    let r = r.route(OPENAPI_PATH, get(move || async move { Json(document) }));

    (r, a)
}

fn apply_default_errors(item: &mut Option<Operation>) {
    if let Some(item) = item {
        item.responses.responses.entry("401".into()).or_insert_with(|| {
            RefOr::Ref(
                utoipa::openapi::Ref::builder()
                    .summary("Unauthorized")
                    .ref_location_from_schema_name(ApiErrorResponse::name())
                    .build()
            )
        });

        item.responses.responses.insert(
            "500".into(),
            RefOr::Ref(
                utoipa::openapi::Ref::builder()
                    .summary("Internal server error")
                    .ref_location_from_schema_name(ApiErrorResponse::name())
                    .build()
            )
        );
    }
}
