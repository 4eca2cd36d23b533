//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::Trace;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{configure, permissive_cors};
use crate::outbound::memory::InMemoryUserRepository;

/// Clock pinned to 2024-03-09T12:00:00Z.
pub struct FixtureClock;

impl FixtureClock {
    /// The pinned instant.
    pub fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0)
            .single()
            .expect("valid fixture timestamp")
    }
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        Self::now().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Self::now()
    }
}

/// State backed by a fresh in-memory repository and [`FixtureClock`].
pub fn in_memory_state() -> HttpState {
    HttpState::from_repository(
        Arc::new(InMemoryUserRepository::default()),
        Arc::new(FixtureClock),
    )
}

/// Application wired like production, minus health probes and docs.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(permissive_cors())
        .wrap(Trace)
        .configure(configure)
}
