use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// `$x.xx`, or `$0` when the value is absent.
pub fn money_fixed(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("${:.2}", v),
        None => "$0".to_string(),
    }
}

/// `$` followed by the value as the backend sent it (`$19.99`, `$20`).
pub fn money_plain(v: Option<f64>) -> String {
    format!("${}", plain(v))
}

/// Shortest decimal form of the value; absent values render as `0`.
pub fn plain(v: Option<f64>) -> String {
    let v = v.unwrap_or(0.0);
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{}", v)
}

pub fn fixed1(v: Option<f64>) -> String {
    format!("{:.1}", v.unwrap_or(0.0))
}

pub fn count(v: Option<i64>) -> i64 {
    v.unwrap_or(0)
}

/// `YYYY-MM-DD` for the timestamp shapes the backend emits; anything else is
/// shown as received.
pub fn short_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return "-".to_string();
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format("%Y-%m-%d").to_string();
    }

    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_money_rounds_to_cents() {
        assert_eq!(money_fixed(Some(19.999)), "$20.00");
        assert_eq!(money_fixed(Some(4.5)), "$4.50");
    }

    #[test]
    fn absent_money_is_zero() {
        assert_eq!(money_fixed(None), "$0");
        assert_eq!(money_plain(None), "$0");
    }

    #[test]
    fn plain_money_keeps_backend_precision() {
        assert_eq!(money_plain(Some(19.99)), "$19.99");
        assert_eq!(money_plain(Some(20.0)), "$20");
    }

    #[test]
    fn one_decimal() {
        assert_eq!(fixed1(Some(87.26)), "87.3");
        assert_eq!(fixed1(Some(3.0)), "3.0");
        assert_eq!(fixed1(None), "0.0");
    }

    #[test]
    fn dates() {
        assert_eq!(short_date(Some("2024-03-05T10:20:30.123456")), "2024-03-05");
        assert_eq!(short_date(Some("2024-03-05T10:20:30Z")), "2024-03-05");
        assert_eq!(short_date(Some("2024-03-05")), "2024-03-05");
        assert_eq!(short_date(Some("yesterday")), "yesterday");
        assert_eq!(short_date(None), "-");
    }
}
