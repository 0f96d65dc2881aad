// src/shared/dates.rs
use chrono::{DateTime, NaiveDate};

/// "Jan 2024"
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// "Jan 2020 - Present" when the period is still open.
pub fn format_period(start: NaiveDate, end: Option<NaiveDate>) -> String {
    match end {
        Some(end) => format!("{} - {}", format_month_year(start), format_month_year(end)),
        None => format!("{} - Present", format_month_year(start)),
    }
}

/// Accepts the date shapes the admin forms and older rows use:
/// `2024-03-15`, `2024-03`, `March 2024`, and RFC 3339 timestamps.
/// Month-only inputs resolve to the first day of the month.
pub fn parse_flexible_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }

    if let Ok(date) = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d") {
        return Some(date);
    }

    NaiveDate::parse_from_str(&format!("1 {raw}"), "%d %B %Y")
        .or_else(|_| NaiveDate::parse_from_str(&format!("1 {raw}"), "%d %b %Y"))
        .ok()
}

/// Serde adapter: dates arrive as free-form strings and are stored as `NaiveDate`.
pub mod flexible_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_flexible_date(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unrecognised date: {raw}")))
    }
}

/// Same as [`flexible_date`] for nullable columns; empty strings mean `None`.
pub mod optional_flexible_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_some(&d.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => super::parse_flexible_date(&s)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("unrecognised date: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn formats_month_and_year() {
        assert_eq!(format_month_year(ymd(2024, 1, 31)), "Jan 2024");
    }

    #[test]
    fn open_period_ends_in_present() {
        assert_eq!(format_period(ymd(2020, 6, 1), None), "Jun 2020 - Present");
        assert_eq!(
            format_period(ymd(2020, 6, 1), Some(ymd(2022, 2, 1))),
            "Jun 2020 - Feb 2022"
        );
    }

    #[test]
    fn parses_supported_shapes() {
        assert_eq!(parse_flexible_date("2024-03-15"), Some(ymd(2024, 3, 15)));
        assert_eq!(parse_flexible_date("2024-03"), Some(ymd(2024, 3, 1)));
        assert_eq!(parse_flexible_date("March 2024"), Some(ymd(2024, 3, 1)));
        assert_eq!(parse_flexible_date("Mar 2024"), Some(ymd(2024, 3, 1)));
        assert_eq!(
            parse_flexible_date("2024-03-15T10:00:00+00:00"),
            Some(ymd(2024, 3, 15))
        );
    }

    #[test]
    fn rejects_garbage_and_blank() {
        assert_eq!(parse_flexible_date(""), None);
        assert_eq!(parse_flexible_date("   "), None);
        assert_eq!(parse_flexible_date("next tuesday"), None);
    }

    #[derive(serde::Deserialize)]
    struct Form {
        #[serde(with = "flexible_date")]
        date: NaiveDate,
        #[serde(default, with = "optional_flexible_date")]
        end: Option<NaiveDate>,
    }

    #[test]
    fn serde_adapter_accepts_strings() {
        let form: Form = serde_json::from_str(r#"{"date":"2023-11","end":""}"#).unwrap();
        assert_eq!(form.date, ymd(2023, 11, 1));
        assert_eq!(form.end, None);

        let err = serde_json::from_str::<Form>(r#"{"date":"soon"}"#);
        assert!(err.is_err());
    }
}
