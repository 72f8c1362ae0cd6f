use chrono::{DateTime, SubsecRound, Utc};

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock at millisecond precision, so a value survives a round trip
/// through any backend unchanged (Postgres keeps microseconds).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> { Utc::now().trunc_subsecs(3) }
}
