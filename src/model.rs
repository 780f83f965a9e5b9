//! Customer record and request payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Persisted customer. `id` is assigned by the store on insert and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// A validated customer that has not been stored yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl NewCustomer {
    pub fn with_id(self, id: i64) -> Customer {
        Customer {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
        }
    }
}

/// Body of `POST /customers`. Fields are optional so that an absent field
/// surfaces as a field error instead of a deserialization failure.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateCustomer {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Body of `PUT /customers/{id}`. Absent or blank fields leave the stored value alone.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateCustomer {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}
