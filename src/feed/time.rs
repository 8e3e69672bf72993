use chrono::{DateTime, Utc};
use serde_json::Value;

/// Format of the derived `show` field: minute precision, UTC, single space separator.
pub const SHOW_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Interpret a raw `ts` value as epoch milliseconds.
///
/// Numbers are truncated toward zero. Strings follow `parseInt(s, 10)`:
/// leading whitespace is skipped, an optional sign is accepted, and the
/// leading run of ASCII digits is parsed (`"1700abc"` → `1700`).
///
/// Returns `None` for anything else (no digits, booleans, objects, overflow).
pub fn timestamp_millis(ts: &Value) -> Option<i64> {
    match ts {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => parse_int_prefix(s),
        _ => None,
    }
}

fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Derive the display timestamp for an entry.
///
/// Falls back to `now` when `ts` is absent, unparsable, or outside the range
/// chrono can represent.
pub fn display_time(ts: Option<&Value>, now: DateTime<Utc>) -> String {
    ts.and_then(timestamp_millis)
        .and_then(DateTime::from_timestamp_millis)
        .unwrap_or(now)
        .format(SHOW_FORMAT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 59).unwrap()
    }

    #[test]
    fn test_epoch_zero() {
        assert_eq!(display_time(Some(&json!(0)), fixed_now()), "1970-01-01 00:00");
    }

    #[test]
    fn test_numeric_string() {
        // 2023-11-14 22:13:20 UTC
        assert_eq!(
            display_time(Some(&json!("1700000000000")), fixed_now()),
            "2023-11-14 22:13"
        );
    }

    #[test]
    fn test_absent_uses_now() {
        assert_eq!(display_time(None, fixed_now()), "2024-03-09 07:05");
    }

    #[test]
    fn test_unparsable_uses_now() {
        assert_eq!(display_time(Some(&json!("soon")), fixed_now()), "2024-03-09 07:05");
        assert_eq!(display_time(Some(&json!(null)), fixed_now()), "2024-03-09 07:05");
        assert_eq!(display_time(Some(&json!(true)), fixed_now()), "2024-03-09 07:05");
    }

    #[test]
    fn test_out_of_range_uses_now() {
        assert_eq!(
            display_time(Some(&json!(i64::MAX)), fixed_now()),
            "2024-03-09 07:05"
        );
    }

    #[test]
    fn test_parse_int_prefix_semantics() {
        assert_eq!(timestamp_millis(&json!("  1700abc")), Some(1700));
        assert_eq!(timestamp_millis(&json!("-60000")), Some(-60000));
        assert_eq!(timestamp_millis(&json!("+5")), Some(5));
        assert_eq!(timestamp_millis(&json!("-")), None);
        assert_eq!(timestamp_millis(&json!("")), None);
        assert_eq!(timestamp_millis(&json!(1234.9)), Some(1234));
    }

    #[test]
    fn test_negative_before_epoch() {
        assert_eq!(
            display_time(Some(&json!(-60000)), fixed_now()),
            "1969-12-31 23:59"
        );
    }
}
