// ABOUTME: Lenient date parsing for RSS pubDate/lastBuildDate values.
// ABOUTME: Tries RFC 3339/2822, named zones, numeric offsets, then zone-less forms assumed UTC.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::DateError;

/// Layouts carrying a numeric offset.
const OFFSET_LAYOUTS: &[&str] = &[
    "%a, %d %b %Y %H:%M:%S %z",
    "%a, %e %b %Y %H:%M:%S %z",
    "%a, %d %b %Y %H:%M %z",
    "%a, %d %b %y %H:%M:%S %z",
    "%d %b %Y %H:%M:%S %z",
    "%e %b %Y %H:%M:%S %z",
    "%d %b %y %H:%M:%S %z",
    "%a, %d %B %Y %H:%M:%S %z",
    "%Y-%m-%dT%H:%M:%S%:z",
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S %z",
    "%Y-%m-%d %H:%M:%S%:z",
];

/// Layouts without zone information; the result is taken as UTC.
const LOCAL_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%a, %d %b %Y %H:%M:%S",
    "%a, %e %b %Y %H:%M:%S",
    "%d %b %Y %H:%M:%S",
    "%e %b %Y %H:%M:%S",
    "%B %d, %Y %H:%M:%S",
];

/// Layouts tried after a trailing zone abbreviation has been stripped.
const ZONED_LAYOUTS: &[&str] = &[
    "%a, %d %b %Y %H:%M:%S",
    "%a, %e %b %Y %H:%M:%S",
    "%a, %d %b %Y %H:%M",
    "%a, %d %b %y %H:%M:%S",
    "%d %b %Y %H:%M:%S",
    "%e %b %Y %H:%M:%S",
    "%a, %d %B %Y %H:%M:%S",
];

const DATE_LAYOUTS: &[&str] = &["%Y-%m-%d", "%d %b %Y", "%a, %d %b %Y", "%B %d, %Y"];

/// Zone abbreviations seen in RSS dates, with their offset in seconds.
/// Ambiguous ones (CST, IST) take their North American / Irish meaning.
const ZONE_ABBREVIATIONS: &[(&str, i32)] = &[
    ("GMT", 0),
    ("UTC", 0),
    ("UT", 0),
    ("Z", 0),
    ("EST", -5 * 3600),
    ("EDT", -4 * 3600),
    ("CST", -6 * 3600),
    ("CDT", -5 * 3600),
    ("MST", -7 * 3600),
    ("MDT", -6 * 3600),
    ("PST", -8 * 3600),
    ("PDT", -7 * 3600),
    ("AKST", -9 * 3600),
    ("AKDT", -8 * 3600),
    ("HST", -10 * 3600),
    ("AST", -4 * 3600),
    ("ADT", -3 * 3600),
    ("NST", -(3 * 3600 + 30 * 60)),
    ("NDT", -(2 * 3600 + 30 * 60)),
    ("WET", 0),
    ("WEST", 3600),
    ("CET", 3600),
    ("CEST", 2 * 3600),
    ("EET", 2 * 3600),
    ("EEST", 3 * 3600),
    ("BST", 3600),
    ("IST", 3600),
    ("MSK", 3 * 3600),
    ("JST", 9 * 3600),
    ("KST", 9 * 3600),
    ("AEST", 10 * 3600),
    ("AEDT", 11 * 3600),
    ("AWST", 8 * 3600),
    ("NZST", 12 * 3600),
    ("NZDT", 13 * 3600),
];

/// Parses a feed date string into a UTC timestamp.
pub fn parse_date(raw: &str) -> Result<DateTime<Utc>, DateError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(DateError::InvalidFormat(raw.to_string()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    parse_with_zone_abbreviation(s)
        .or_else(|| parse_with_offset(s))
        .or_else(|| parse_local(s))
        .ok_or_else(|| DateError::InvalidFormat(raw.to_string()))
}

fn parse_with_zone_abbreviation(s: &str) -> Option<DateTime<Utc>> {
    let (base, zone) = s.rsplit_once(' ')?;
    let (_, offset_secs) = ZONE_ABBREVIATIONS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(zone))?;
    let offset = FixedOffset::east_opt(*offset_secs)?;

    ZONED_LAYOUTS.iter().find_map(|layout| {
        let naive = NaiveDateTime::parse_from_str(base.trim_end(), layout).ok()?;
        let dt = offset.from_local_datetime(&naive).single()?;
        Some(dt.with_timezone(&Utc))
    })
}

fn parse_with_offset(s: &str) -> Option<DateTime<Utc>> {
    OFFSET_LAYOUTS.iter().find_map(|layout| {
        DateTime::parse_from_str(s, layout)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    })
}

fn parse_local(s: &str) -> Option<DateTime<Utc>> {
    if let Some(naive) = LOCAL_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(s, layout).ok())
    {
        return Some(Utc.from_utc_datetime(&naive));
    }

    DATE_LAYOUTS.iter().find_map(|layout| {
        let date = NaiveDate::parse_from_str(s, layout).ok()?;
        Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
    })
}
