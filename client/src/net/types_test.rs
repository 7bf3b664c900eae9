use super::*;

fn user(name: &str, email: Option<&str>, wallet: Option<&str>) -> User {
    User {
        id: "u1".to_owned(),
        name: name.to_owned(),
        email: email.map(str::to_owned),
        wallet_address: wallet.map(str::to_owned),
    }
}

// =============================================================
// User
// =============================================================

#[test]
fn display_label_prefers_name() {
    assert_eq!(user(" Ada ", Some("ada@example.com"), None).display_label(), "Ada");
}

#[test]
fn display_label_falls_back_to_email_then_wallet() {
    assert_eq!(user("", Some("ada@example.com"), None).display_label(), "ada@example.com");
    assert_eq!(
        user("", None, Some("0x1234567890abcdef1234")).display_label(),
        "0x1234…1234"
    );
    assert_eq!(user("", None, None).display_label(), "Account");
}

#[test]
fn short_address_keeps_short_values() {
    assert_eq!(short_address("0x1234"), "0x1234");
}

#[test]
fn user_deserializes_without_optional_fields() {
    let user: User = serde_json::from_str(r#"{"id":"u1","name":"Ada"}"#).expect("user");
    assert_eq!(user.email, None);
    assert_eq!(user.wallet_address, None);
}

// =============================================================
// ContractStatus
// =============================================================

#[test]
fn contract_status_uses_lowercase_wire_names() {
    let status: ContractStatus = serde_json::from_str("\"signed\"").expect("status");
    assert_eq!(status, ContractStatus::Signed);
    assert_eq!(serde_json::to_string(&ContractStatus::Paid).expect("json"), "\"paid\"");
}

#[test]
fn outstanding_statuses_are_sent_and_signed() {
    assert!(ContractStatus::Sent.is_outstanding());
    assert!(ContractStatus::Signed.is_outstanding());
    assert!(!ContractStatus::Draft.is_outstanding());
    assert!(!ContractStatus::Paid.is_outstanding());
    assert!(!ContractStatus::Void.is_outstanding());
}

#[test]
fn public_contract_defaults_body_and_due_date() {
    let json = r#"{
        "title": "Logo design",
        "freelancer_name": "Ada",
        "client_name": "Acme",
        "amount_cents": 125000,
        "currency": "USD",
        "status": "sent"
    }"#;
    let contract: PublicContract = serde_json::from_str(json).expect("contract");
    assert_eq!(contract.body, "");
    assert_eq!(contract.due_date, None);
}

// =============================================================
// format_amount
// =============================================================

#[test]
fn format_amount_groups_thousands() {
    assert_eq!(format_amount(125_000, "USD"), "USD 1,250.00");
    assert_eq!(format_amount(123_456_789, "EUR"), "EUR 1,234,567.89");
}

#[test]
fn format_amount_small_and_negative_values() {
    assert_eq!(format_amount(5, "USD"), "USD 0.05");
    assert_eq!(format_amount(-1_999, "USD"), "USD -19.99");
}
