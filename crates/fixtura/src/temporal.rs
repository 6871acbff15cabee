//! Temporal range generation.
//!
//! A [`RandomTemporal`] maps both endpoints to nanoseconds since the Unix
//! epoch, delegates the draw to the numeric range generator, and maps the
//! result back. Every derived view (calendar date, local date-time, offset
//! and zoned forms) is computed from the single instant drawn by the call,
//! so all views of one draw denote the same point in time.

use chrono::{DateTime, FixedOffset, Local, Months, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use fixtura_core::{GenerationError, Result};
use rand::Rng;

use crate::range;

/// Earliest instant the nanosecond mapping can represent.
pub fn linear_min() -> DateTime<Utc> {
    DateTime::from_timestamp_nanos(i64::MIN)
}

/// Latest instant the nanosecond mapping can represent.
pub fn linear_max() -> DateTime<Utc> {
    DateTime::from_timestamp_nanos(i64::MAX)
}

/// Immutable temporal range request over `[from, to]`, both inclusive.
///
/// Construction never fails; every precondition is checked by the terminal
/// call that draws from the range, and the same request may be reused for
/// any number of draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomTemporal {
    from: DateTime<Utc>,
    to: DateTime<Utc>,
}

/// Range between two instants, both inclusive.
pub fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> RandomTemporal {
    RandomTemporal { from, to }
}

/// Range between two ISO-8601 timestamps, accepting an optional bracketed
/// zone id suffix (`2007-12-03T10:15:30+01:00[Europe/Paris]`).
pub fn between_str(from: &str, to: &str) -> Result<RandomTemporal> {
    Ok(between(parse_endpoint(from)?, parse_endpoint(to)?))
}

/// Range from the Unix epoch up to `to`.
pub fn up_to(to: DateTime<Utc>) -> RandomTemporal {
    between(DateTime::UNIX_EPOCH, to)
}

/// Range from `from` up to the current instant.
pub fn since(from: DateTime<Utc>) -> RandomTemporal {
    between(from, Utc::now())
}

/// Range from the Unix epoch up to the current instant.
pub fn before_now() -> RandomTemporal {
    up_to(Utc::now())
}

/// Range from the current instant to the end of the representable window.
pub fn after_now() -> RandomTemporal {
    between(Utc::now(), linear_max())
}

/// Range spanning one century either side of the current instant.
pub fn plus_minus_100_years() -> RandomTemporal {
    let now = Utc::now();
    let from = now
        .checked_sub_months(Months::new(1200))
        .unwrap_or_else(linear_min);
    let to = now
        .checked_add_months(Months::new(1200))
        .unwrap_or_else(linear_max);
    between(from, to)
}

impl RandomTemporal {
    /// One uniformly drawn instant from the range.
    pub fn instant(&self) -> Result<DateTime<Utc>> {
        self.draw(&mut rand::rng())
    }

    /// The drawn instant as a calendar date in the local zone.
    pub fn local_date(&self) -> Result<NaiveDate> {
        Ok(self.local_date_time()?.date())
    }

    /// The drawn instant as a naive date-time in the local zone.
    pub fn local_date_time(&self) -> Result<NaiveDateTime> {
        Ok(self.instant()?.with_timezone(&Local).naive_local())
    }

    /// The drawn instant with the local UTC offset attached.
    pub fn offset_date_time(&self) -> Result<DateTime<FixedOffset>> {
        Ok(self.instant()?.with_timezone(&Local).fixed_offset())
    }

    /// The drawn instant converted to the given time zone.
    pub fn zoned(&self, zone: Tz) -> Result<DateTime<Tz>> {
        Ok(self.instant()?.with_timezone(&zone))
    }

    pub fn instants(&self, n: usize) -> Result<Vec<DateTime<Utc>>> {
        (0..n).map(|_| self.instant()).collect()
    }

    pub fn local_dates(&self, n: usize) -> Result<Vec<NaiveDate>> {
        (0..n).map(|_| self.local_date()).collect()
    }

    pub fn local_date_times(&self, n: usize) -> Result<Vec<NaiveDateTime>> {
        (0..n).map(|_| self.local_date_time()).collect()
    }

    pub fn offset_date_times(&self, n: usize) -> Result<Vec<DateTime<FixedOffset>>> {
        (0..n).map(|_| self.offset_date_time()).collect()
    }

    pub fn zoned_date_times(&self, zone: Tz, n: usize) -> Result<Vec<DateTime<Tz>>> {
        (0..n).map(|_| self.zoned(zone)).collect()
    }

    /// Core draw. Equal endpoints return that instant exactly, including
    /// sub-second components, without consulting the RNG or requiring the
    /// endpoints to be inside the nanosecond window.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<DateTime<Utc>> {
        if self.from > self.to {
            return Err(GenerationError::OutOfDomain(format!(
                "temporal range start {} is after end {}",
                self.from, self.to
            )));
        }
        if self.from == self.to {
            return Ok(self.from);
        }
        let lo = to_nanos(self.from)?;
        let hi = to_nanos(self.to)?;
        let picked = range::i64_between(lo, hi, rng)?;
        Ok(DateTime::from_timestamp_nanos(picked))
    }
}

fn to_nanos(instant: DateTime<Utc>) -> Result<i64> {
    instant.timestamp_nanos_opt().ok_or_else(|| {
        GenerationError::OutOfDomain(format!(
            "instant {instant} is outside the nanosecond-representable window"
        ))
    })
}

/// Parses an RFC 3339 timestamp, tolerating a trailing `[Zone/Id]` as used
/// by extended ISO-8601 forms. The zone id is validated against the tz
/// database; the offset carried by the timestamp itself fixes the instant.
fn parse_endpoint(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();
    if let Some((head, zone)) = value.split_once('[') {
        let zone = zone.strip_suffix(']').ok_or_else(|| {
            GenerationError::Parse(format!("unterminated zone id in '{value}'"))
        })?;
        zone.parse::<Tz>()
            .map_err(|_| GenerationError::Parse(format!("unknown zone id '{zone}'")))?;
        return parse_rfc3339(head);
    }
    parse_rfc3339(value)
}

fn parse_rfc3339(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|err| GenerationError::Parse(format!("invalid timestamp '{value}': {err}")))
}
