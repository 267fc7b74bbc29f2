pub mod clipboard;
pub mod datetime;
pub mod url;
