pub mod data;
pub mod greet;
pub mod health;
pub mod hello;
pub mod metrics;

use common::Clock;

/// Shared application state accessible from all handlers.
pub struct AppState<C: Clock> {
    pub service_name: String,
    pub clock: C,
}

impl<C: Clock> AppState<C> {
    pub fn new(service_name: impl Into<String>, clock: C) -> Self {
        Self {
            service_name: service_name.into(),
            clock,
        }
    }
}
