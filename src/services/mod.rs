// Service module exports

pub mod clock;
pub mod countdown;
pub mod launching;
pub mod link;
pub mod retry;
pub mod settings;
pub mod submission;
pub mod validation;
