//! GraphQL documents for the Shopify Storefront API.

/// Create a customer with marketing consent.
///
/// Variables: `{ input: CustomerCreateInput! }`.
pub const CUSTOMER_CREATE: &str = r"
    mutation customerCreate($input: CustomerCreateInput!) {
        customerCreate(input: $input) {
            customer {
                id
                email
            }
            customerUserErrors {
                code
                field
                message
            }
        }
    }
";
