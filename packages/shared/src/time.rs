//! JST time helpers.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};

/// Get current Unix timestamp in JST (milliseconds)
pub fn get_jst_timestamp() -> i64 {
    let jst_offset = FixedOffset::east_opt(9 * 3600).unwrap(); // JST is UTC+9
    let now_utc = Utc::now();
    let now_jst: DateTime<FixedOffset> = now_utc.with_timezone(&jst_offset);
    now_jst.timestamp_millis()
}

/// Format a Unix millisecond timestamp as a JST wall clock, `HH:MM:SS`.
///
/// Used for chat message envelopes, which carry a human-readable send time
/// rather than a machine timestamp.
pub fn timestamp_to_jst_clock(timestamp_millis: i64) -> String {
    let jst_offset = FixedOffset::east_opt(9 * 3600).unwrap();
    let dt = Utc
        .timestamp_millis_opt(timestamp_millis)
        .single()
        .unwrap_or_else(|| Utc.timestamp_millis_opt(0).single().unwrap())
        .with_timezone(&jst_offset);
    dt.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_jst_timestamp_is_positive() {
        // テスト項目: 現在時刻のタイムスタンプが取得できる
        // when (操作):
        let ts = get_jst_timestamp();

        // then (期待する結果):
        assert!(ts > 0);
    }

    #[test]
    fn test_timestamp_to_jst_clock_format() {
        // テスト項目: タイムスタンプが JST の HH:MM:SS 形式に変換される
        // given (前提条件): 2023-01-01T00:00:00Z は JST では 09:00:00
        let timestamp = 1672531200000i64;

        // when (操作):
        let clock = timestamp_to_jst_clock(timestamp);

        // then (期待する結果):
        assert_eq!(clock, "09:00:00");
    }

    #[test]
    fn test_timestamp_to_jst_clock_zero_padded() {
        // テスト項目: 時・分・秒はゼロ埋めされた2桁で表現される
        // given (前提条件): 2023-01-01T00:01:02Z は JST では 09:01:02
        let timestamp = 1672531262000i64;

        // when (操作):
        let clock = timestamp_to_jst_clock(timestamp);

        // then (期待する結果):
        assert_eq!(clock, "09:01:02");
    }
}
