//! HTTP plumbing for the remote calculator service.

use dioxus_logger::tracing;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::error::GENERIC_ERROR_MESSAGE;
use crate::history::HistoryEntry;
use crate::history::HistoryFilter;
use crate::operation::Operation;

/// Base URL of the calculator service, fixed at build time.
fn base_url() -> &'static str {
    option_env!("CALCULADORA_API_URL").unwrap_or("http://127.0.0.1:8000")
}

#[derive(Serialize)]
struct OperandPair {
    a: f64,
    b: f64,
}

/// Runs one arithmetic operation against the service and returns the
/// computed value.
pub async fn perform(op: Operation, a: f64, b: f64) -> Result<f64, ApiError> {
    let url = format!("{}/calculadora/{}", base_url(), op.as_ref());
    tracing::info!("POST {url}");

    let response = reqwest::Client::new()
        .post(&url)
        .json(&OperandPair { a, b })
        .send()
        .await?;

    let status = response.status();
    let body: Value = response.json().await.unwrap_or(Value::Null);

    if !status.is_success() {
        let message = service_error_message(&body);
        tracing::warn!("operation {op} rejected ({status}): {message}");
        return Err(ApiError::Service(message));
    }
    operation_result(&body)
}

/// Fetches the operation history for the given filter snapshot.
///
/// The response is parsed leniently: anything that is not an array under
/// the `historial` key comes back as an empty list, the same as no
/// results. Only a transport failure is an error.
pub async fn history(filter: &HistoryFilter) -> Result<Vec<HistoryEntry>, ApiError> {
    let url = format!("{}/calculadora/historial", base_url());
    let pairs = filter.query_pairs();
    tracing::info!("GET {url} ({} query params)", pairs.len());

    let response = reqwest::Client::new()
        .get(&url)
        .query(&pairs)
        .send()
        .await?;
    let body: Value = response.json().await.unwrap_or(Value::Null);
    Ok(parse_history(&body))
}

/// Extracts `resultado` from a success body.
fn operation_result(body: &Value) -> Result<f64, ApiError> {
    body.get("resultado")
        .and_then(Value::as_f64)
        .ok_or(ApiError::Decode)
}

/// Extracts the service's message from a failure body. Validation errors
/// arrive nested under `detail.error`; some errors as a bare `error`
/// field.
fn service_error_message(body: &Value) -> String {
    body.pointer("/detail/error")
        .or_else(|| body.get("error"))
        .and_then(Value::as_str)
        .unwrap_or(GENERIC_ERROR_MESSAGE)
        .to_owned()
}

fn parse_history(body: &Value) -> Vec<HistoryEntry> {
    body.get("historial")
        .map(|entries| serde_json::from_value(entries.clone()).unwrap_or_default())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn operation_result_reads_the_resultado_field() {
        let body = json!({"a": 3.0, "b": 4.0, "resultado": 7.0});
        assert_eq!(operation_result(&body).unwrap(), 7.0);
    }

    #[test]
    fn operation_result_without_the_field_is_a_decode_error() {
        let body = json!({"a": 3.0, "b": 4.0});
        assert!(matches!(operation_result(&body), Err(ApiError::Decode)));
        assert!(matches!(operation_result(&Value::Null), Err(ApiError::Decode)));
    }

    #[test]
    fn nested_detail_error_takes_precedence() {
        let body = json!({"detail": {"error": "cannot divide by zero"}, "error": "outer"});
        assert_eq!(service_error_message(&body), "cannot divide by zero");
    }

    #[test]
    fn bare_error_field_is_the_fallback_shape() {
        let body = json!({"error": "Operación inválida: mod"});
        assert_eq!(service_error_message(&body), "Operación inválida: mod");
    }

    #[test]
    fn unrecognized_failure_body_yields_the_generic_message() {
        assert_eq!(service_error_message(&json!({})), GENERIC_ERROR_MESSAGE);
        assert_eq!(service_error_message(&Value::Null), GENERIC_ERROR_MESSAGE);
        assert_eq!(
            service_error_message(&json!({"detail": "plain text"})),
            GENERIC_ERROR_MESSAGE
        );
    }

    #[test]
    fn history_list_decodes_in_service_order() {
        let body = json!({"historial": [
            {"a": 1.0, "b": 2.0, "resultado": 3.0, "operacion": "sum", "date": "2024-02-01T00:00:00+00:00"},
            {"a": 8.0, "b": 2.0, "resultado": 4.0, "operacion": "div", "date": "2024-01-01T00:00:00+00:00"},
        ]});
        let entries = parse_history(&body);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, Operation::Sum);
        assert_eq!(entries[0].result, 3.0);
        assert_eq!(entries[1].operation, Operation::Div);
    }

    #[test]
    fn malformed_history_degrades_to_an_empty_list() {
        assert!(parse_history(&json!({"historial": "not-an-array"})).is_empty());
        assert!(parse_history(&json!({"historial": 42})).is_empty());
        assert!(parse_history(&json!({})).is_empty());
        assert!(parse_history(&Value::Null).is_empty());
    }
}
