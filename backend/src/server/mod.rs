//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use observation_map::Trace;
#[cfg(debug_assertions)]
use observation_map::doc::ApiDoc;
use observation_map::domain::{BoundingBox, ObservationService};
use observation_map::inbound::http::health::HealthState;
use observation_map::inbound::http::routes::configure;
use observation_map::inbound::http::state::HttpState;
use observation_map::outbound::persistence::InMemoryObservationRepository;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Wire the observation service over the in-memory store.
fn build_http_state(bounds: BoundingBox) -> web::Data<HttpState> {
    let repository = Arc::new(InMemoryObservationRepository::new());
    let service = Arc::new(ObservationService::new(repository, bounds));
    web::Data::new(HttpState::new(service.clone(), service))
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an actix HTTP server from `config`.
///
/// The returned [`Server`] must be awaited to drive the listener. Readiness
/// is flagged on `health_state` once the socket is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, bounds } = config;
    let http_state = build_http_state(bounds);
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    info!(%bind_addr, "observation map listening");
    Ok(server)
}
