use serde::Serialize;

use crate::models::countdown::RemainingDuration;
use crate::models::form::FormState;

/// Everything the coming-soon screen renders. Observers only read it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LaunchingScreenState {
    pub countdown: RemainingDuration,
    pub countdown_active: bool,
    pub form: FormState,
}

impl LaunchingScreenState {
    pub fn has_launched(&self) -> bool {
        self.countdown.is_zero()
    }
}
