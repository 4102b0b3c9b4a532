use chrono::NaiveTime;

/// The candidate slot times offered for booking, sorted and deduplicated.
///
/// The enumeration is configuration, not policy baked into the filter: the
/// default mirrors the marketplace's current business hours, and deployments
/// override it without touching the scheduling code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessHours {
    times: Vec<NaiveTime>,
}

impl BusinessHours {
    pub fn new(mut times: Vec<NaiveTime>) -> Self {
        times.sort();
        times.dedup();
        Self { times }
    }

    /// Parses a comma-separated list of `HH:MM` values.
    pub fn parse(spec: &str) -> Result<Self, chrono::ParseError> {
        let mut times = Vec::new();
        for part in spec.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            times.push(NaiveTime::parse_from_str(part, "%H:%M")?);
        }
        Ok(Self::new(times))
    }

    /// Candidate times in ascending order.
    pub fn times(&self) -> &[NaiveTime] {
        &self.times
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        self.times.binary_search(&time).is_ok()
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

impl Default for BusinessHours {
    /// Ten on-the-hour slots from 08:00 through 18:00, skipping the 13:00
    /// lunch hour.
    fn default() -> Self {
        let hours = [8, 9, 10, 11, 12, 14, 15, 16, 17, 18];
        Self::new(
            hours
                .iter()
                .map(|&h| NaiveTime::from_hms_opt(h, 0, 0).unwrap())
                .collect(),
        )
    }
}
