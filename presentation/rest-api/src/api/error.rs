use poem_openapi::payload::Json;

/// Body of a failed request: the error message as a bare JSON string.
pub type ErrorMessage = Json<String>;

/// Body of a rejected request: one message per offending field.
pub type ValidationMessages = Json<Vec<String>>;

/// Converts a service failure into the body of a 500 response.
pub trait IntoErrorMessage {
    fn into_error_message(self) -> ErrorMessage;
}

/// Wraps a request the framework could not parse (bad JSON, malformed
/// query) into the validation body shape.
pub fn rejected_request(err: &poem::Error) -> ValidationMessages {
    Json(vec![err.to_string()])
}
