//! Error taxonomy for calls against the calculator service.

use thiserror::Error;

/// Alert text used when the service did not supply a message of its own.
pub const GENERIC_ERROR_MESSAGE: &str = "Ocurrió un error";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The service rejected the operation and explained why.
    #[error("{0}")]
    Service(String),

    /// The request never completed (connection refused, DNS, interrupted
    /// body).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// A success response without the expected numeric payload.
    #[error("respuesta inválida del servicio")]
    Decode,
}

impl ApiError {
    /// Text for the blocking alert. Service-reported messages pass
    /// through verbatim; everything else collapses to the generic
    /// fallback.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Service(message) => message.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_message_is_surfaced_verbatim() {
        let err = ApiError::Service("cannot divide by zero".to_string());
        assert_eq!(err.user_message(), "cannot divide by zero");
        assert_eq!(err.to_string(), "cannot divide by zero");
    }

    #[test]
    fn decode_falls_back_to_the_generic_message() {
        assert_eq!(ApiError::Decode.user_message(), GENERIC_ERROR_MESSAGE);
    }
}
