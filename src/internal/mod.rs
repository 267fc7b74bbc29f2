pub mod messages;
pub mod models;
pub mod notification;
pub mod ui;
