use super::*;

#[test]
fn money_lines_shows_zero_for_empty_map() {
    assert_eq!(money_lines(&BTreeMap::new()), vec!["0.00".to_owned()]);
}

#[test]
fn money_lines_formats_each_currency_in_order() {
    let mut amounts = BTreeMap::new();
    amounts.insert("USD".to_owned(), 125_000);
    amounts.insert("EUR".to_owned(), 99);
    assert_eq!(money_lines(&amounts), vec!["EUR 0.99".to_owned(), "USD 1,250.00".to_owned()]);
}

#[test]
fn greeting_uses_organization_when_present() {
    assert_eq!(greeting(Some("Acme Studio")), "Welcome back, Acme Studio");
    assert_eq!(greeting(Some("   ")), "Welcome back");
    assert_eq!(greeting(None), "Welcome back");
}
