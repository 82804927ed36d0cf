//! Small helpers exposed alongside the storage API.

use crate::error::{NotebookError, Result};
use chrono::{DateTime, Local};
use serde_json::Value;

/// Local wall-clock time as `YYYY/M/D HH:mm:ss`.
pub fn get_current_time() -> String {
    format_time(Local::now())
}

fn format_time(now: DateTime<Local>) -> String {
    now.format("%Y/%-m/%-d %H:%M:%S").to_string()
}

/// Upper-case `text` (Unicode aware).
pub fn format_text(text: &str) -> String {
    text.to_uppercase()
}

/// GET `url` and parse the body as JSON.
pub fn fetch_data(url: &str) -> Result<Value> {
    let fetch = || -> std::result::Result<Value, reqwest::Error> {
        reqwest::blocking::get(url)?.json::<Value>()
    };
    fetch().map_err(|e| {
        tracing::error!(url, error = %e, "failed to fetch data");
        NotebookError::Http(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn time_uses_unpadded_date_and_padded_clock() {
        let t = Local.with_ymd_and_hms(2024, 1, 5, 8, 3, 9).unwrap();
        assert_eq!(format_time(t), "2024/1/5 08:03:09");
    }

    #[test]
    fn format_text_uppercases_unicode() {
        assert_eq!(format_text("hello, straße"), "HELLO, STRASSE");
        assert_eq!(format_text("已经大写 ABC"), "已经大写 ABC");
    }

    #[test]
    fn fetch_invalid_url_is_http_error() {
        assert!(matches!(
            fetch_data("not a url"),
            Err(NotebookError::Http(_))
        ));
    }
}
