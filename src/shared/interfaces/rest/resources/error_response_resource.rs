use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::ValidationErrors;

use crate::fiscal_identity::domain::model::enums::tax_identification_number_error::TaxIdentificationNumberError;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, Eq, PartialEq)]
pub struct FieldErrorResource {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl FieldErrorResource {
    pub fn new(field: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn from_tax_identification_number_error(
        field: &str,
        error: TaxIdentificationNumberError,
    ) -> Self {
        Self::new(field, error.code(), error.to_string())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponseResource {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_errors: Vec<FieldErrorResource>,
}

impl ErrorResponseResource {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field_errors: Vec::new(),
        }
    }

    pub fn with_field_error(message: impl Into<String>, field_error: FieldErrorResource) -> Self {
        Self {
            message: message.into(),
            field_errors: vec![field_error],
        }
    }

    pub fn from_validation_errors(errors: &ValidationErrors) -> Self {
        Self {
            message: "validation failed".to_string(),
            field_errors: field_errors(errors),
        }
    }
}

/// Flattens `validator` output into one entry per failed rule, sorted by
/// field so responses are stable.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldErrorResource> {
    let mut flattened: Vec<FieldErrorResource> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            let field = field.to_string();
            field_errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid ({})", error.code));
                FieldErrorResource::new(field.clone(), error.code.to_string(), message)
            })
        })
        .collect();

    flattened.sort_by(|left, right| left.field.cmp(&right.field).then(left.code.cmp(&right.code)));
    flattened
}
