//! Client-side form validation.
//!
//! Validators trim input, return the payload ready to send, or a short
//! message suitable for the form's status line.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::{ClientDraft, ContractDraft, ProfileDraft};

/// Basic shape check: one `@`, non-empty local part, dotted domain.
pub fn validate_email(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return Err("Enter a valid email address.");
    };
    let domain_ok = domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.');
    if local.is_empty() || domain.contains('@') || !domain_ok || email.contains(char::is_whitespace) {
        return Err("Enter a valid email address.");
    }
    Ok(email.to_owned())
}

/// Registration form: every field is required.
pub fn validate_profile_draft(
    name: &str,
    organization: &str,
    address: &str,
    email: &str,
) -> Result<ProfileDraft, &'static str> {
    let name = name.trim();
    let organization = organization.trim();
    let address = address.trim();
    if name.is_empty() || organization.is_empty() || address.is_empty() {
        return Err("Name, organization and address are required.");
    }
    let email = validate_email(email)?;
    Ok(ProfileDraft { name: name.to_owned(), organization: organization.to_owned(), address: address.to_owned(), email })
}

/// Parse a decimal amount such as `1,250.5` into minor units.
pub fn parse_amount_cents(raw: &str) -> Result<i64, &'static str> {
    const INVALID: &str = "Enter an amount like 1250.00.";
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    let (whole, frac) = cleaned.split_once('.').unwrap_or((cleaned.as_str(), ""));
    if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
        return Err(INVALID);
    }
    if frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
        return Err(INVALID);
    }
    let whole: i64 = whole.parse().map_err(|_| INVALID)?;
    let frac: i64 = if frac.is_empty() { 0 } else { format!("{frac:0<2}").parse().map_err(|_| INVALID)? };
    let cents = whole.checked_mul(100).and_then(|w| w.checked_add(frac)).ok_or(INVALID)?;
    if cents == 0 {
        return Err("Amount must be greater than zero.");
    }
    Ok(cents)
}

/// New-contract form.
pub fn validate_contract_draft(
    title: &str,
    client_id: &str,
    amount: &str,
    currency: &str,
    due_date: &str,
) -> Result<ContractDraft, &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Give the contract a title.");
    }
    let client_id = client_id.trim();
    if client_id.is_empty() {
        return Err("Choose a client.");
    }
    let amount_cents = parse_amount_cents(amount)?;
    let currency = currency.trim().to_ascii_uppercase();
    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err("Currency must be a 3-letter code.");
    }
    let due_date = Some(due_date.trim()).filter(|d| !d.is_empty()).map(str::to_owned);
    Ok(ContractDraft { title: title.to_owned(), client_id: client_id.to_owned(), amount_cents, currency, due_date })
}

/// New-client form. Organization is optional.
pub fn validate_client_draft(name: &str, email: &str, organization: &str) -> Result<ClientDraft, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Client name is required.");
    }
    let email = validate_email(email)?;
    let organization = Some(organization.trim()).filter(|o| !o.is_empty()).map(str::to_owned);
    Ok(ClientDraft { name: name.to_owned(), email, organization })
}
