//! The operation vocabulary shared by requests, history entries and the UI.

use serde::Deserialize;
use serde::Serialize;

/// One of the four arithmetic operations the service exposes.
///
/// The wire tag (`sum`, `sub`, `mul`, `div`) doubles as the endpoint path
/// segment. The display strings live here too, so the UI renders from one
/// lookup table instead of branching on the variant by hand.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    Sum,
    Sub,
    Mul,
    Div,
}

impl Operation {
    /// Every operation, in the order the UI lays out its buttons.
    pub const ALL: [Operation; 4] = [
        Operation::Sum,
        Operation::Sub,
        Operation::Mul,
        Operation::Div,
    ];

    /// Localized name shown next to a history entry.
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Sum => "suma",
            Operation::Sub => "resta",
            Operation::Mul => "multiplicación",
            Operation::Div => "división",
        }
    }

    /// Infix symbol used when rendering `a <symbol> b = result`.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Sum => "+",
            Operation::Sub => "−",
            Operation::Mul => "×",
            Operation::Div => "÷",
        }
    }

    /// Caption for the button that triggers the operation.
    pub fn action_label(&self) -> &'static str {
        match self {
            Operation::Sum => "Sumar",
            Operation::Sub => "Restar",
            Operation::Mul => "Multiplicar",
            Operation::Div => "Dividir",
        }
    }
}
