mod controller;
mod intent;
mod state;

pub use controller::{
    LaunchingController, LaunchingDependencies, EMAIL_NOT_ELIGIBLE_MESSAGE,
    GENERIC_ERROR_MESSAGE, INVALID_FORM_MESSAGE,
};
pub use intent::{LaunchingEffect, LaunchingIntent};
pub use state::LaunchingScreenState;
