use time::OffsetDateTime;

/// Hands out ids derived from the creation instant (unix milliseconds).
///
/// Ids are strictly increasing: a second id requested within the same
/// millisecond, or after the clock stepped backwards, is bumped past the
/// previous one, so an id is never handed out twice.
#[derive(Clone, Debug, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Generator whose first id is greater than `floor`.
    pub fn starting_after(floor: u64) -> Self {
        Self { last: floor }
    }

    pub fn next_at(&mut self, at: OffsetDateTime) -> String {
        let millis = u64::try_from(at.unix_timestamp_nanos() / 1_000_000).unwrap_or(0);
        let id = millis.max(self.last.saturating_add(1));
        self.last = id;
        id.to_string()
    }

    pub fn next(&mut self) -> String {
        self.next_at(OffsetDateTime::now_utc())
    }
}
