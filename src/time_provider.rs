use chrono::{DateTime, Utc};

pub trait TimeSource {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
pub(crate) struct FixedTimeSource(pub DateTime<Utc>);

#[cfg(test)]
impl TimeSource for FixedTimeSource {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
