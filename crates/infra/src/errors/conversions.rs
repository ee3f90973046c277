//! Conversions from external infrastructure errors into domain errors.

use kanban_domain::KanbanError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use toml::de::Error as TomlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct InfraError(pub KanbanError);

impl From<InfraError> for KanbanError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<KanbanError> for InfraError {
    fn from(value: KanbanError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoKanbanError {
    fn into_kanban(self) -> KanbanError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → KanbanError */
/* -------------------------------------------------------------------------- */

impl IntoKanbanError for HttpError {
    fn into_kanban(self) -> KanbanError {
        if self.is_timeout() {
            return KanbanError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return KanbanError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return KanbanError::InvalidInput(format!("HTTP response body is malformed: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                404 => KanbanError::NotFound(message),
                429 => KanbanError::Network(message),
                400..=499 => KanbanError::InvalidInput(message),
                _ => KanbanError::Network(message),
            };
        }

        if self.is_builder() {
            return KanbanError::Config(format!("invalid HTTP request: {self}"));
        }

        KanbanError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_kanban())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → KanbanError */
/* -------------------------------------------------------------------------- */

impl IntoKanbanError for JsonError {
    fn into_kanban(self) -> KanbanError {
        use serde_json::error::Category;

        match self.classify() {
            Category::Io => KanbanError::Network(format!("failed to read JSON body: {self}")),
            Category::Syntax | Category::Eof => {
                KanbanError::InvalidInput(format!("malformed JSON: {self}"))
            }
            Category::Data => KanbanError::InvalidInput(format!("unexpected JSON shape: {self}")),
        }
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_kanban())
    }
}

/* -------------------------------------------------------------------------- */
/* toml::de::Error → KanbanError */
/* -------------------------------------------------------------------------- */

impl IntoKanbanError for TomlError {
    fn into_kanban(self) -> KanbanError {
        KanbanError::Config(format!("failed to parse TOML config: {}", self.message()))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        InfraError(value.into_kanban())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use reqwest::{Client, StatusCode};
    use tokio::runtime::Runtime;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn status_error(status: StatusCode) -> KanbanError {
        Runtime::new().unwrap().block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(status))
                .mount(&server)
                .await;

            let client = Client::builder().no_proxy().build().unwrap();
            let error =
                client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err();
            InfraError::from(error).into()
        })
    }

    #[test]
    fn http_status_404_maps_to_not_found() {
        match status_error(StatusCode::NOT_FOUND) {
            KanbanError::NotFound(msg) => assert!(msg.contains("404")),
            other => panic!("expected not found, got {:?}", other),
        }
    }

    #[test]
    fn http_status_503_maps_to_network_error() {
        match status_error(StatusCode::SERVICE_UNAVAILABLE) {
            KanbanError::Network(msg) => assert!(msg.contains("503")),
            other => panic!("expected network error, got {:?}", other),
        }
    }

    #[test]
    fn http_status_400_maps_to_invalid_input() {
        assert!(matches!(status_error(StatusCode::BAD_REQUEST), KanbanError::InvalidInput(_)));
    }

    #[test]
    fn json_syntax_error_maps_to_invalid_input() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let mapped: KanbanError = InfraError::from(err).into();
        match mapped {
            KanbanError::InvalidInput(msg) => assert!(msg.contains("malformed JSON")),
            other => panic!("expected invalid input, got {:?}", other),
        }
    }

    #[test]
    fn toml_error_maps_to_config_error() {
        let err = toml::from_str::<toml::Value>("sheets = [").unwrap_err();
        let mapped: KanbanError = InfraError::from(err).into();
        assert!(matches!(mapped, KanbanError::Config(_)));
    }
}
