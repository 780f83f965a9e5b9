//! Creation input validation.

use crate::error::{AppError, FieldErrors};
use crate::model::{CreateCustomer, NewCustomer};
use regex::Regex;
use std::sync::OnceLock;

pub const MSG_BLANK: &str = "must not be blank";
pub const MSG_EMAIL: &str = "must be a well-formed email address";

/// Dot-separated atoms; anything above U+007F counts as an atom character.
const LOCAL_PART: &str = concat!(
    r"[A-Za-z0-9!#$%&'*+/=?^_`{|}~\x{0080}-\x{FFFF}-]+",
    r"(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~\x{0080}-\x{FFFF}-]+)*",
);

/// Labels of letters, digits and inner hyphens; single-label hosts allowed.
const DOMAIN: &str = concat!(
    r"[\p{L}\p{N}](?:[\p{L}\p{N}-]*[\p{L}\p{N}])?",
    r"(?:\.[\p{L}\p{N}](?:[\p{L}\p{N}-]*[\p{L}\p{N}])?)*",
);

const MAX_LOCAL_LEN: usize = 64;
const MAX_DOMAIN_LEN: usize = 255;

static LOCAL_RE: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
static DOMAIN_RE: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();

fn anchored(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^{}$", pattern))
}

fn full_match(cell: &OnceLock<Result<Regex, regex::Error>>, pattern: &str, s: &str) -> bool {
    match cell.get_or_init(|| anchored(pattern)) {
        Ok(re) => re.is_match(s),
        Err(_) => false,
    }
}

pub struct RequestValidator;

impl RequestValidator {
    /// Check name and email; phone is passed through untouched. Every violated
    /// field gets exactly one entry in the returned error map.
    pub fn validate_create(input: &CreateCustomer) -> Result<NewCustomer, AppError> {
        let mut errors = FieldErrors::new();

        let name = non_blank(input.name.as_deref());
        if name.is_none() {
            errors.insert("name".into(), MSG_BLANK.into());
        }

        let email = non_blank(input.email.as_deref());
        match email {
            None => {
                errors.insert("email".into(), MSG_BLANK.into());
            }
            Some(e) if !is_email_shaped(e) => {
                errors.insert("email".into(), MSG_EMAIL.into());
            }
            Some(_) => {}
        }

        match (name, email) {
            (Some(name), Some(email)) if errors.is_empty() => Ok(NewCustomer {
                name: name.to_string(),
                email: email.to_string(),
                phone: input.phone.clone(),
            }),
            _ => Err(AppError::Validation(errors)),
        }
    }
}

/// `Some(s)` when the value is present and has at least one non-whitespace character.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// `local@domain`, split at the last `@`. Local part at most 64 characters,
/// domain at most 255.
pub fn is_email_shaped(s: &str) -> bool {
    let Some((local, domain)) = s.rsplit_once('@') else {
        return false;
    };
    local.chars().count() <= MAX_LOCAL_LEN
        && domain.chars().count() <= MAX_DOMAIN_LEN
        && full_match(&LOCAL_RE, LOCAL_PART, local)
        && full_match(&DOMAIN_RE, DOMAIN, domain)
}
