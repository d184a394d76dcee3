//! Request and response types for the `customerCreate` mutation.

use serde::{Deserialize, Deserializer, Serialize};

/// Input for `customerCreate`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreateInput {
    /// Customer email.
    pub email: String,
    /// Customer password.
    pub password: String,
    /// Whether the customer consented to marketing email.
    pub accepts_marketing: bool,
}

impl CustomerCreateInput {
    /// Input for a newsletter signup.
    ///
    /// Marketing consent is always `true`: subscribing is the consent.
    #[must_use]
    pub fn newsletter(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            accepts_marketing: true,
        }
    }
}

/// Variables for `customerCreate`.
#[derive(Debug, Serialize)]
pub struct CustomerCreateVariables<'a> {
    pub input: &'a CustomerCreateInput,
}

/// `data` member of a `customerCreate` response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreateData {
    pub customer_create: Option<CustomerCreatePayload>,
}

/// `customerCreate` payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreatePayload {
    /// Created customer, absent when the mutation was rejected.
    #[serde(default)]
    pub customer: Option<Customer>,
    /// Business-rule errors, e.g. "Email has already been taken".
    #[serde(default, deserialize_with = "null_as_empty")]
    pub customer_user_errors: Vec<CustomerUserError>,
}

/// Customer returned by `customerCreate`.
#[derive(Debug, Clone, Deserialize)]
pub struct Customer {
    /// Shopify customer GID.
    #[serde(default)]
    pub id: Option<String>,
    /// Customer email.
    #[serde(default)]
    pub email: Option<String>,
}

/// User error from a customer mutation.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerUserError {
    /// Error code (e.g., `TAKEN`, `TOO_SHORT`).
    #[serde(default)]
    pub code: Option<String>,
    /// Path to the offending input field.
    #[serde(default)]
    pub field: Option<Vec<String>>,
    /// Human-readable message.
    pub message: String,
}

/// Treat an explicit `null` list as empty.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_input_serializes_camel_case() {
        let input = CustomerCreateInput::newsletter("user@example.com", "password123");
        let value = serde_json::to_value(CustomerCreateVariables { input: &input }).unwrap();
        assert_eq!(
            value,
            json!({
                "input": {
                    "email": "user@example.com",
                    "password": "password123",
                    "acceptsMarketing": true
                }
            })
        );
    }

    #[test]
    fn test_payload_with_user_errors() {
        let data: CustomerCreateData = serde_json::from_value(json!({
            "customerCreate": {
                "customer": null,
                "customerUserErrors": [{
                    "code": "TAKEN",
                    "field": ["input", "email"],
                    "message": "Email has already been taken"
                }]
            }
        }))
        .unwrap();

        let payload = data.customer_create.unwrap();
        assert!(payload.customer.is_none());
        let error = payload.customer_user_errors.first().unwrap();
        assert_eq!(error.code.as_deref(), Some("TAKEN"));
        assert_eq!(
            error.field.as_deref(),
            Some(&["input".to_string(), "email".to_string()][..])
        );
    }

    #[test]
    fn test_payload_defaults() {
        let data: CustomerCreateData = serde_json::from_value(json!({
            "customerCreate": { "customer": { "id": "gid://shopify/Customer/1" } }
        }))
        .unwrap();
        let payload = data.customer_create.unwrap();
        assert!(payload.customer_user_errors.is_empty());
        assert_eq!(
            payload.customer.unwrap().id.as_deref(),
            Some("gid://shopify/Customer/1")
        );
    }

    #[test]
    fn test_null_user_errors() {
        let data: CustomerCreateData = serde_json::from_value(json!({
            "customerCreate": {
                "customer": { "id": "gid://shopify/Customer/1" },
                "customerUserErrors": null
            }
        }))
        .unwrap();
        assert!(data.customer_create.unwrap().customer_user_errors.is_empty());
    }

    #[test]
    fn test_customer_without_id() {
        let data: CustomerCreateData = serde_json::from_value(json!({
            "customerCreate": { "customer": { "email": "user@example.com" } }
        }))
        .unwrap();
        let customer = data.customer_create.unwrap().customer.unwrap();
        assert!(customer.id.is_none());
        assert_eq!(customer.email.as_deref(), Some("user@example.com"));
    }

    #[test]
    fn test_null_customer_create() {
        let data: CustomerCreateData =
            serde_json::from_value(json!({ "customerCreate": null })).unwrap();
        assert!(data.customer_create.is_none());
    }
}
