// Data models for the launch screen

pub mod countdown;
pub mod early_access;
pub mod form;
pub mod settings;
pub mod timestamp;
