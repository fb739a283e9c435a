pub mod activity_log;
pub mod admin_account;
