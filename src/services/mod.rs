pub mod activity_service;
pub mod directory_service;
