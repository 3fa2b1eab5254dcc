//! Protobuf well-known type ↔ domain conversions
//!
//! `google.protobuf.Timestamp` is only valid between 0001-01-01T00:00:00Z and
//! 9999-12-31T23:59:59.999999999Z with `nanos` in `[0, 1e9)`. Both directions
//! enforce that range so a value accepted on the wire can always be written
//! back to the wire.
//!
//! ## Usage
//!
//! ```ignore
//! use grpc_client::conversions::*;
//!
//! let ts = datetime_to_timestamp(Utc::now())?;
//! let dt = timestamp_to_datetime(&ts)?;
//! ```

use chrono::{DateTime, Utc};
use prost_types::Timestamp;

/// Seconds of 0001-01-01T00:00:00Z since the Unix epoch
pub const MIN_TIMESTAMP_SECONDS: i64 = -62_135_596_800;

/// Seconds of 9999-12-31T23:59:59Z since the Unix epoch
pub const MAX_TIMESTAMP_SECONDS: i64 = 253_402_300_799;

const NANOS_PER_SECOND: i32 = 1_000_000_000;

/// Check that a protobuf Timestamp lies in the representable range
pub fn validate_timestamp(ts: &Timestamp) -> Result<(), String> {
  if ts.seconds < MIN_TIMESTAMP_SECONDS {
    return Err(format!(
      "timestamp seconds {} is before 0001-01-01T00:00:00Z",
      ts.seconds
    ));
  }
  if ts.seconds > MAX_TIMESTAMP_SECONDS {
    return Err(format!(
      "timestamp seconds {} is after 9999-12-31T23:59:59Z",
      ts.seconds
    ));
  }
  if !(0..NANOS_PER_SECOND).contains(&ts.nanos) {
    return Err(format!("timestamp nanos {} is outside [0, 1e9)", ts.nanos));
  }
  Ok(())
}

/// Convert a protobuf Timestamp to DateTime<Utc>
///
/// # Example
/// ```ignore
/// let ts = Timestamp { seconds: 1_704_067_200, nanos: 0 };
/// let dt = timestamp_to_datetime(&ts)?;
/// assert_eq!(dt.to_rfc3339(), "2024-01-01T00:00:00+00:00");
/// ```
pub fn timestamp_to_datetime(ts: &Timestamp) -> Result<DateTime<Utc>, String> {
  validate_timestamp(ts)?;
  DateTime::from_timestamp(ts.seconds, ts.nanos as u32).ok_or_else(|| {
    format!(
      "timestamp ({}s, {}ns) is not representable",
      ts.seconds, ts.nanos
    )
  })
}

/// Convert DateTime<Utc> to a protobuf Timestamp
///
/// Fails for instants outside the protobuf range (PostgreSQL `timestamptz`
/// reaches far past year 9999).
pub fn datetime_to_timestamp(dt: DateTime<Utc>) -> Result<Timestamp, String> {
  let ts = Timestamp {
    seconds: dt.timestamp(),
    nanos: dt.timestamp_subsec_nanos() as i32,
  };
  validate_timestamp(&ts)?;
  Ok(ts)
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::{Duration, TimeZone};

  #[test]
  fn test_known_instant() {
    let ts = Timestamp {
      seconds: 1_704_067_200,
      nanos: 0,
    };
    let dt = timestamp_to_datetime(&ts).unwrap();
    assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    assert_eq!(datetime_to_timestamp(dt).unwrap(), ts);
  }

  #[test]
  fn test_subsecond_precision_is_kept() {
    let ts = Timestamp {
      seconds: 1_704_067_200,
      nanos: 250_000_000,
    };
    let dt = timestamp_to_datetime(&ts).unwrap();
    assert_eq!(dt.timestamp_subsec_millis(), 250);
  }

  #[test]
  fn test_range_bounds_are_inclusive() {
    let min = Timestamp {
      seconds: MIN_TIMESTAMP_SECONDS,
      nanos: 0,
    };
    let max = Timestamp {
      seconds: MAX_TIMESTAMP_SECONDS,
      nanos: NANOS_PER_SECOND - 1,
    };
    assert!(timestamp_to_datetime(&min).is_ok());
    assert!(timestamp_to_datetime(&max).is_ok());
  }

  #[test]
  fn test_rejects_out_of_range_seconds() {
    let early = Timestamp {
      seconds: MIN_TIMESTAMP_SECONDS - 1,
      nanos: 0,
    };
    let late = Timestamp {
      seconds: MAX_TIMESTAMP_SECONDS + 1,
      nanos: 0,
    };
    assert!(timestamp_to_datetime(&early).unwrap_err().contains("before"));
    assert!(timestamp_to_datetime(&late).unwrap_err().contains("after"));
  }

  #[test]
  fn test_rejects_bad_nanos() {
    for nanos in [-1, NANOS_PER_SECOND] {
      let ts = Timestamp {
        seconds: 0,
        nanos,
      };
      assert!(timestamp_to_datetime(&ts).unwrap_err().contains("nanos"));
    }
  }

  #[test]
  fn test_datetime_past_year_9999_is_rejected() {
    let far = Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap() + Duration::seconds(1);
    assert!(datetime_to_timestamp(far).is_err());
  }
}
