//! History wire types and the filter state that drives the history query.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::operation::Operation;

/// A single past operation as returned by the service.
///
/// The wire field names are the service's own (`operacion`, `resultado`).
/// Entries are immutable once received and are rendered in the order the
/// service returned them.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "operacion")]
    pub operation: Operation,
    pub a: f64,
    pub b: f64,
    #[serde(rename = "resultado")]
    pub result: f64,
    pub date: String,
}

/// Sort key accepted by the history endpoint.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum SortKey {
    #[default]
    Date,
    Result,
}

/// Sort direction accepted by the history endpoint.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// The view's filter state, read as one consistent snapshot whenever a
/// history fetch is issued.
///
/// Dates are local `YYYY-MM-DD` strings, the raw value of the date
/// inputs; the empty string means unset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HistoryFilter {
    pub operation: Option<Operation>,
    pub date_from: String,
    pub date_to: String,
    pub sort_by: SortKey,
    pub order: SortOrder,
}

impl HistoryFilter {
    /// Query pairs for the history request.
    ///
    /// Unset filters are omitted entirely rather than sent as empty
    /// values; date bounds are widened to the UTC midnight boundary of
    /// the selected day.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(op) = self.operation {
            pairs.push(("op", op.as_ref().to_owned()));
        }
        if let Some(from) = midnight_utc(&self.date_from) {
            pairs.push(("date_from", from));
        }
        if let Some(to) = midnight_utc(&self.date_to) {
            pairs.push(("date_to", to));
        }
        pairs.push(("sort_by", self.sort_by.as_ref().to_owned()));
        pairs.push(("order", self.order.as_ref().to_owned()));
        pairs
    }
}

/// Converts a local `YYYY-MM-DD` date to the UTC midnight timestamp the
/// service filters on. Empty or unparseable input yields `None`, which
/// drops the parameter from the query.
fn midnight_utc(day: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(
        midnight
            .and_utc()
            .format("%Y-%m-%dT%H:%M:%S%.3fZ")
            .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_filter_produces_every_parameter() {
        let filter = HistoryFilter {
            operation: Some(Operation::Sum),
            date_from: "2024-01-01".to_string(),
            date_to: "2024-01-31".to_string(),
            sort_by: SortKey::Result,
            order: SortOrder::Asc,
        };
        assert_eq!(
            filter.query_pairs(),
            vec![
                ("op", "sum".to_string()),
                ("date_from", "2024-01-01T00:00:00.000Z".to_string()),
                ("date_to", "2024-01-31T00:00:00.000Z".to_string()),
                ("sort_by", "result".to_string()),
                ("order", "asc".to_string()),
            ]
        );
    }

    #[test]
    fn default_filter_sends_only_sort_parameters() {
        assert_eq!(
            HistoryFilter::default().query_pairs(),
            vec![
                ("sort_by", "date".to_string()),
                ("order", "desc".to_string()),
            ]
        );
    }

    #[test]
    fn unset_filters_are_omitted_not_sent_empty() {
        let filter = HistoryFilter {
            operation: None,
            date_from: String::new(),
            date_to: "2024-06-15".to_string(),
            ..Default::default()
        };
        let pairs = filter.query_pairs();
        assert!(pairs.iter().all(|(key, _)| *key != "op"));
        assert!(pairs.iter().all(|(key, _)| *key != "date_from"));
        assert!(pairs
            .iter()
            .any(|(key, value)| *key == "date_to" && value == "2024-06-15T00:00:00.000Z"));
    }

    #[test]
    fn invalid_date_text_never_reaches_the_query() {
        let filter = HistoryFilter {
            date_from: "not-a-date".to_string(),
            date_to: "2024-13-40".to_string(),
            ..Default::default()
        };
        let pairs = filter.query_pairs();
        assert!(pairs.iter().all(|(key, _)| *key != "date_from"));
        assert!(pairs.iter().all(|(key, _)| *key != "date_to"));
    }

    #[test]
    fn entry_decodes_from_the_service_field_names() {
        let entry: HistoryEntry = serde_json::from_str(
            r#"{"a": 6.0, "b": 7.0, "resultado": 42.0, "operacion": "mul", "date": "2024-01-02T03:04:05+00:00"}"#,
        )
        .unwrap();
        assert_eq!(entry.operation, Operation::Mul);
        assert_eq!(entry.a, 6.0);
        assert_eq!(entry.b, 7.0);
        assert_eq!(entry.result, 42.0);
        assert_eq!(entry.date, "2024-01-02T03:04:05+00:00");
    }

    #[test]
    fn sort_tags_match_the_wire() {
        assert_eq!(SortKey::Date.as_ref(), "date");
        assert_eq!(SortKey::Result.as_ref(), "result");
        assert_eq!(SortOrder::Asc.as_ref(), "asc");
        assert_eq!(SortOrder::Desc.as_ref(), "desc");
    }
}
