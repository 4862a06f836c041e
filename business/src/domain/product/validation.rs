//! Field rules for raw product payloads.
//!
//! Each shape walks its fields in declaration order and reports at most one
//! entry per field. When a single field breaks several rules the messages
//! are joined with `,` into that one entry.

use serde_json::{Map, Value};

use super::model::{CreateProductParams, ProductChanges};

/// Non-empty, ordered list of rule violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn into_messages(self) -> Vec<String> {
        self.0
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Bounds of the floats that convert to `i64` without loss of range.
const MIN_WHOLE: f64 = i64::MIN as f64;
const MAX_WHOLE: f64 = i64::MAX as f64;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Presence {
    Required,
    Optional,
}

/// Collects violations field by field while extracting typed values.
struct FieldChecker<'a> {
    fields: Option<&'a Map<String, Value>>,
    errors: Vec<String>,
}

impl<'a> FieldChecker<'a> {
    fn new(payload: &'a Value) -> Self {
        Self {
            fields: payload.as_object(),
            errors: Vec::new(),
        }
    }

    fn value(&self, field: &str) -> Option<&'a Value> {
        self.fields
            .and_then(|fields| fields.get(field))
            .filter(|value| !value.is_null())
    }

    fn report(&mut self, violations: Vec<String>) {
        if !violations.is_empty() {
            self.errors.push(violations.join(","));
        }
    }

    /// Text that must not be empty.
    fn name(&mut self, field: &str, presence: Presence) -> Option<String> {
        let Some(value) = self.value(field) else {
            if presence == Presence::Required {
                self.report(vec![
                    format!("{field} should not be empty"),
                    format!("{field} must be a string"),
                ]);
            }
            return None;
        };

        match value.as_str() {
            Some("") => {
                self.report(vec![format!("{field} should not be empty")]);
                None
            }
            Some(text) => Some(text.to_string()),
            None => {
                self.report(vec![format!("{field} must be a string")]);
                None
            }
        }
    }

    /// Free text, empty allowed.
    fn text(&mut self, field: &str) -> Option<String> {
        let value = self.value(field)?;
        match value.as_str() {
            Some(text) => Some(text.to_string()),
            None => {
                self.report(vec![format!("{field} must be a string")]);
                None
            }
        }
    }

    /// Whole number, at least 1.
    fn count(&mut self, field: &str, presence: Presence) -> Option<i64> {
        let below_minimum = format!("{field} must not be less than 1");

        let Some(value) = self.value(field) else {
            if presence == Presence::Required {
                self.report(vec![below_minimum, format!("{field} must be a number")]);
            }
            return None;
        };

        let Value::Number(number) = value else {
            self.report(vec![below_minimum, format!("{field} must be a number")]);
            return None;
        };

        if let Some(whole) = number.as_i64() {
            return self.at_least_one(whole, below_minimum);
        }
        if number.is_u64() {
            self.report(vec![format!("{field} must not be greater than {}", i64::MAX)]);
            return None;
        }

        match number.as_f64() {
            // Floats with no fractional part, like 10.0, count as whole numbers.
            Some(float) if float.fract() == 0.0 && float >= MIN_WHOLE && float < MAX_WHOLE => {
                self.at_least_one(float as i64, below_minimum)
            }
            Some(float) if float.fract() == 0.0 && float >= MAX_WHOLE => {
                self.report(vec![format!("{field} must not be greater than {}", i64::MAX)]);
                None
            }
            Some(float) => {
                let mut violations = Vec::new();
                if float < 1.0 {
                    violations.push(below_minimum);
                }
                if float.fract() != 0.0 {
                    violations.push(format!("{field} must be an integer number"));
                }
                self.report(violations);
                None
            }
            None => {
                self.report(vec![below_minimum, format!("{field} must be a number")]);
                None
            }
        }
    }

    fn at_least_one(&mut self, number: i64, below_minimum: String) -> Option<i64> {
        if number < 1 {
            self.report(vec![below_minimum]);
            return None;
        }
        Some(number)
    }

    fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.errors))
        }
    }
}

/// Checks a payload against the create shape.
pub fn validate_create(payload: &Value) -> Result<CreateProductParams, ValidationErrors> {
    let mut checker = FieldChecker::new(payload);

    let name = checker.name("name", Presence::Required);
    let description = checker.text("description");
    let stock = checker.count("stock", Presence::Required);
    let price = checker.count("price", Presence::Required);

    match (name, stock, price) {
        (Some(name), Some(stock), Some(price)) if checker.errors.is_empty() => {
            Ok(CreateProductParams {
                name,
                description: description.unwrap_or_default(),
                stock,
                price,
            })
        }
        // A required field is only ever missing alongside a reported violation.
        _ => Err(ValidationErrors(checker.errors)),
    }
}

/// Checks a payload against the update shape, where every field is optional.
pub fn validate_update(payload: &Value) -> Result<ProductChanges, ValidationErrors> {
    let mut checker = FieldChecker::new(payload);

    let changes = ProductChanges {
        name: checker.name("name", Presence::Optional),
        description: checker.text("description"),
        stock: checker.count("stock", Presence::Optional),
        price: checker.count("price", Presence::Optional),
    };

    checker.finish()?;
    Ok(changes)
}
