//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::web;

use super::state::HttpState;
use crate::domain::BoundingBox;
use crate::domain::ports::{FixtureObservationCommand, FixtureObservationQuery};

/// Bounding box of the state of Rio de Janeiro.
pub fn rio_bounds() -> BoundingBox {
    BoundingBox::new(-44.887212, -40.95975, -23.366868, -20.764962)
        .expect("Rio bounds are valid")
}

/// Handler state backed by the fixture ports and [`rio_bounds`].
pub fn fixture_state() -> web::Data<HttpState> {
    web::Data::new(HttpState::new(
        Arc::new(FixtureObservationCommand::new(rio_bounds())),
        Arc::new(FixtureObservationQuery),
    ))
}
