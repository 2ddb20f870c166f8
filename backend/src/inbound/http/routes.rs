//! Route table shared by the server binary and end-to-end tests.

use actix_web::web;

use super::error::json_config;
use super::feed::observation_feed;
use super::health::{live, ready};
use super::observations::{create_observation, get_observation, list_observations};

/// Register every HTTP endpoint on `cfg`.
///
/// Callers supply `web::Data<HttpState>` and `web::Data<HealthState>`.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use observation_map::inbound::http::health::HealthState;
/// use observation_map::inbound::http::routes::configure;
///
/// let _app = App::new()
///     .app_data(web::Data::new(HealthState::new()))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            web::scope("/api/v1")
                .service(create_observation)
                .service(list_observations)
                .service(get_observation),
        )
        .service(observation_feed)
        .service(ready)
        .service(live);
}
