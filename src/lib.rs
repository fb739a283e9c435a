pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

use crate::services::{
    activity_service::ActivityLogService, directory_service::UserDirectoryService,
};
use crate::store::Store;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub directory_service: UserDirectoryService,
    pub activity_service: ActivityLogService,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        let directory_service = UserDirectoryService::new(store.clone());
        let activity_service = ActivityLogService::new(store.clone());

        Self {
            store,
            directory_service,
            activity_service,
        }
    }
}
