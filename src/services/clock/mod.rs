// Clock capability
// Supplies the current wall-clock reading as a CivilTimestamp

use chrono::Local;

use crate::models::timestamp::CivilTimestamp;

#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> CivilTimestamp;
}

/// Host local time, truncated to whole seconds. No timezone handling: the
/// reading is whatever the local clock reports.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> CivilTimestamp {
        CivilTimestamp::from(Local::now().naive_local())
    }
}

/// Always reports the same reading.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub CivilTimestamp);

impl Clock for FixedClock {
    fn now(&self) -> CivilTimestamp {
        self.0
    }
}
