use time::{error::Parse, macros::format_description, OffsetDateTime, UtcOffset};

/// Source of "now" for opening pages.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> OffsetDateTime;
}

/// Wall clock shifted into a fixed offset.
///
/// The offset is resolved once at startup: reading the local offset is only
/// reliable before the runtime spawns its worker threads.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: UtcOffset,
}

impl SystemClock {
    pub fn new(offset: UtcOffset) -> Self {
        Self { offset }
    }

    /// Uses the configured offset ("+05:30") if any, else the host's local
    /// offset, else UTC.
    pub fn resolve(configured: Option<&str>) -> Result<Self, Parse> {
        let offset = match configured {
            Some(offset) => parse_offset(offset)?,
            None => UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC),
        };

        Ok(Self::new(offset))
    }

    pub fn offset(&self) -> UtcOffset {
        self.offset
    }
}

fn parse_offset(offset: &str) -> Result<UtcOffset, Parse> {
    UtcOffset::parse(
        offset.trim(),
        format_description!("[offset_hour sign:mandatory]:[offset_minute]"),
    )
}

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc().to_offset(self.offset)
    }
}

#[cfg(test)]
pub struct FixedClock(pub OffsetDateTime);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}
