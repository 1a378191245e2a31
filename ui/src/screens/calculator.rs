//=============================================================================
// File: src/screens/calculator.rs
//=============================================================================
use std::str::FromStr;

use api::HistoryEntry;
use api::HistoryFilter;
use api::Operation;
use api::SortKey;
use api::SortOrder;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::components::pico::Input;
use crate::components::pico::Modal;

/// Parses an operand field at request time. The inputs are native
/// `type=number` widgets, so the value is numeric text or empty; empty
/// counts as zero.
fn coerce_operand(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// Fetches history for `filter` and replaces the displayed list with the
/// outcome. On a transport failure the list is left untouched and the
/// blocking error modal opens instead.
async fn refresh_history(
    filter: HistoryFilter,
    mut historial: Signal<Vec<HistoryEntry>>,
    mut error_message: Signal<String>,
    mut show_error: Signal<bool>,
) {
    match api::history(&filter).await {
        Ok(entries) => historial.set(entries),
        Err(e) => {
            tracing::warn!("history fetch failed: {e}");
            error_message.set(e.user_message());
            show_error.set(true);
        }
    }
}

/// A single line of the history list:
/// `[label] a <symbol> b = result (date)`.
#[component]
fn HistoryRow(entry: HistoryEntry) -> Element {
    let op = entry.operation;
    rsx! {
        li {
            span { class: "chip", "[{op.label()}]" }
            " {entry.a} {op.symbol()} {entry.b} = "
            strong { "{entry.result}" }
            span { class: "date", " ({entry.date})" }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn CalculatorScreen() -> Element {
    // Operands and the latest result.
    let mut operand_a = use_signal(String::new);
    let mut operand_b = use_signal(String::new);
    let mut resultado = use_signal::<Option<f64>>(|| None);

    // The displayed history and the filter controls that drive it.
    let mut historial = use_signal(Vec::<HistoryEntry>::new);
    let mut op_filter = use_signal::<Option<Operation>>(|| None);
    let mut date_from = use_signal(String::new);
    let mut date_to = use_signal(String::new);
    let mut sort_by = use_signal(SortKey::default);
    let mut order = use_signal(SortOrder::default);

    // Blocking error alert.
    let mut show_error_modal = use_signal(|| false);
    let mut error_modal_message = use_signal(String::new);

    // One consistent snapshot of the filter controls, taken right before
    // a request is issued.
    let snapshot_filter = move || HistoryFilter {
        operation: op_filter(),
        date_from: date_from(),
        date_to: date_to(),
        sort_by: sort_by(),
        order: order(),
    };

    // Initial load, exactly once, with the default filters. Reads no
    // signals, so editing a filter control does not re-trigger it; only
    // the Filtrar button or an operation success issues further fetches.
    use_future(move || async move {
        refresh_history(
            HistoryFilter::default(),
            historial,
            error_modal_message,
            show_error_modal,
        )
        .await;
    });

    // Operation click: run the operation, then refresh the history with
    // the filters that were active at click time. A failure leaves the
    // previous result and history untouched.
    let run_operation = move |op: Operation| {
        let filter = snapshot_filter();
        let a = coerce_operand(&operand_a());
        let b = coerce_operand(&operand_b());
        spawn(async move {
            match api::perform(op, a, b).await {
                Ok(value) => {
                    resultado.set(Some(value));
                    refresh_history(filter, historial, error_modal_message, show_error_modal)
                        .await;
                }
                Err(e) => {
                    error_modal_message.set(e.user_message());
                    show_error_modal.set(true);
                }
            }
        });
    };

    rsx! {
        Modal {
            is_open: show_error_modal,
            title: "Error".to_string(),
            p { "{error_modal_message}" }
            footer {
                Button {
                    on_click: move |_| show_error_modal.set(false),
                    "Cerrar"
                }
            }
        }

        Card {
            h1 { "Calculadora" }
            Grid {
                Input {
                    label: "".to_string(),
                    name: "operand_a",
                    input_type: "number".to_string(),
                    placeholder: "Número 1",
                    value: "{operand_a}",
                    on_input: move |evt: FormEvent| operand_a.set(evt.value()),
                }
                Input {
                    label: "".to_string(),
                    name: "operand_b",
                    input_type: "number".to_string(),
                    placeholder: "Número 2",
                    value: "{operand_b}",
                    on_input: move |evt: FormEvent| operand_b.set(evt.value()),
                }
            }
            Grid {
                for op in Operation::ALL {
                    Button {
                        on_click: move |_| run_operation(op),
                        "{op.action_label()}"
                    }
                }
            }
            if let Some(value) = resultado() {
                h4 { class: "result", "Resultado: {value}" }
            }
        }

        Card {
            h3 { "Historial (con filtros)" }
            div {
                class: "filters",
                label {
                    "Operación:"
                    select {
                        onchange: move |evt| op_filter.set(Operation::from_str(&evt.value()).ok()),
                        option {
                            value: "",
                            selected: op_filter().is_none(),
                            "Todas"
                        }
                        for op in Operation::ALL {
                            option {
                                value: "{op}",
                                selected: op_filter() == Some(op),
                                "{op.label()}"
                            }
                        }
                    }
                }
                label {
                    "Desde:"
                    input {
                        r#type: "date",
                        value: "{date_from}",
                        oninput: move |evt| date_from.set(evt.value()),
                    }
                }
                label {
                    "Hasta:"
                    input {
                        r#type: "date",
                        value: "{date_to}",
                        oninput: move |evt| date_to.set(evt.value()),
                    }
                }
                label {
                    "Ordenar por:"
                    select {
                        onchange: move |evt| {
                            if let Ok(key) = SortKey::from_str(&evt.value()) {
                                sort_by.set(key);
                            }
                        },
                        option {
                            value: "date",
                            selected: sort_by() == SortKey::Date,
                            "Fecha"
                        }
                        option {
                            value: "result",
                            selected: sort_by() == SortKey::Result,
                            "Resultado"
                        }
                    }
                }
                label {
                    "Dirección:"
                    select {
                        onchange: move |evt| {
                            if let Ok(direction) = SortOrder::from_str(&evt.value()) {
                                order.set(direction);
                            }
                        },
                        option {
                            value: "desc",
                            selected: order() == SortOrder::Desc,
                            "Desc"
                        }
                        option {
                            value: "asc",
                            selected: order() == SortOrder::Asc,
                            "Asc"
                        }
                    }
                }
                Button {
                    on_click: move |_| {
                        let filter = snapshot_filter();
                        spawn(async move {
                            refresh_history(
                                filter,
                                historial,
                                error_modal_message,
                                show_error_modal,
                            )
                            .await;
                        });
                    },
                    "Filtrar"
                }
            }
            ul {
                class: "history",
                for (i, entry) in historial().into_iter().enumerate() {
                    HistoryRow {
                        key: "{i}",
                        entry,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_operand_counts_as_zero() {
        assert_eq!(coerce_operand(""), 0.0);
        assert_eq!(coerce_operand("   "), 0.0);
    }

    #[test]
    fn numeric_operands_parse_exactly() {
        assert_eq!(coerce_operand("42"), 42.0);
        assert_eq!(coerce_operand("-1.5"), -1.5);
        assert_eq!(coerce_operand(" 3.25 "), 3.25);
    }

    #[test]
    fn unparseable_operand_counts_as_zero() {
        assert_eq!(coerce_operand("abc"), 0.0);
        assert_eq!(coerce_operand("1,5"), 0.0);
    }
}
