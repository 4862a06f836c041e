use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorMessage, IntoErrorMessage};

impl IntoErrorMessage for ProductError {
    // Every service failure is a server fault; the message goes out as-is.
    fn into_error_message(self) -> ErrorMessage {
        Json(self.to_string())
    }
}
