use chrono::{DateTime, SubsecRound, Utc};

/// Source of "now" for server-generated timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Profile image upload timestamp: UTC, truncated to whole seconds
pub fn make_upload_dt(clock: &dyn Clock) -> DateTime<Utc> {
    clock.now().trunc_subsecs(0)
}
