//! Bookshelf server
//!
//! Books, authors and private reading notes behind a REST JSON API and a
//! GraphQL endpoint sharing one validation and authorization layer.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod graphql;
pub mod guards;
pub mod models;
pub mod repository;
pub mod services;
pub mod validation;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    pub repository: repository::Repository,
    pub schema: graphql::BookshelfSchema,
}

impl AppState {
    pub fn new(config: AppConfig, repository: repository::Repository) -> Self {
        let config = Arc::new(config);
        let services = Arc::new(services::Services::new(repository.clone(), config.auth.clone()));
        let schema = graphql::build_schema(services.clone(), config.clone());

        Self {
            config,
            services,
            repository,
            schema,
        }
    }
}
