// Launch Screen Library
// Countdown engine and early access form controller behind the coming-soon screen

pub mod console;
pub mod models;
pub mod services;
pub mod utils;
