mod engine;
mod ticker;

pub use engine::remaining;
pub use ticker::{CountdownTicker, MIN_TICK_PERIOD};
