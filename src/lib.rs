//! Library entrypoint for TrendBoard.
//!
//! This file exists mainly to make controller tests easy (integration tests
//! under `tests/` can import the app state, routers, controllers, services).

use std::time::Duration;

pub mod config;
pub mod errors;
pub mod models;

pub mod services;
pub mod views;

// Handlers refer to these as `crate::render` and `crate::templates`.
pub use views::{render, templates};

pub mod controllers;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub hbs: templates::Hbs,
    pub settings: config::Settings,
    pub api: services::analytics_api::AnalyticsClient,
}

impl AppState {
    pub fn new(settings: config::Settings) -> Result<Self, errors::AppError> {
        let api = services::analytics_api::AnalyticsClient::new(
            settings.api_base.clone(),
            Duration::from_secs(settings.request_timeout_secs),
        )?;

        Ok(Self {
            hbs: templates::build_handlebars()?,
            settings,
            api,
        })
    }
}
