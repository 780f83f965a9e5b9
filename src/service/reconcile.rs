//! Partial update merge: a field is overwritten only when the update carries a non-blank value.

use crate::model::{Customer, UpdateCustomer};
use crate::service::validation::non_blank;

/// Merge `update` onto `existing`. Nothing is re-validated; blank values are skipped.
pub fn reconcile(mut existing: Customer, update: &UpdateCustomer) -> Customer {
    if let Some(name) = non_blank(update.name.as_deref()) {
        existing.name = name.to_string();
    }
    if let Some(email) = non_blank(update.email.as_deref()) {
        existing.email = email.to_string();
    }
    if let Some(phone) = non_blank(update.phone.as_deref()) {
        existing.phone = Some(phone.to_string());
    }
    existing
}
