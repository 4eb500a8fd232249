//! Indonesian date and time labels used by the screens.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike};

const HARI: [&str; 7] = ["Minggu", "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu"];
const BULAN: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// `Kamis, 26 Juni 2025 — 08.05.09`
pub fn clock_label<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    let hari = HARI[now.weekday().num_days_from_sunday() as usize];
    let bulan = BULAN[now.month0() as usize];
    format!(
        "{}, {} {} {} — {:02}.{:02}.{:02}",
        hari,
        now.day(),
        bulan,
        now.year(),
        now.hour(),
        now.minute(),
        now.second()
    )
}

/// `dd-mm-yyyy` for an RFC 3339 timestamp (shown in `tz`) or a plain date.
/// Anything else is returned unchanged.
pub fn tanggal<Tz: TimeZone>(raw: &str, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(tz).format("%d-%m-%Y").to_string();
    }
    match raw.get(..10).map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d")) {
        Some(Ok(date)) => date.format("%d-%m-%Y").to_string(),
        _ => raw.to_string(),
    }
}

/// `HH:MM` for a timestamp, the first five characters of a plain time such
/// as `08:00:00`, and `-` when absent.
pub fn jam<Tz: TimeZone>(raw: Option<&str>, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return "-".to_string();
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(tz).format("%H:%M").to_string();
    }
    raw.chars().take(5).collect()
}
