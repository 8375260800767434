use super::*;

fn naina() -> LeadFields {
    LeadFields::new("Naina Kapoor", "naina@aria.com", "9876543210")
}

// =============================================================
// FieldKey
// =============================================================

#[test]
fn field_key_parses_input_names() {
    assert_eq!("name".parse::<FieldKey>(), Ok(FieldKey::Name));
    assert_eq!("email".parse::<FieldKey>(), Ok(FieldKey::Email));
    assert_eq!("phone".parse::<FieldKey>(), Ok(FieldKey::Phone));
}

#[test]
fn field_key_rejects_unknown_and_case_variants() {
    assert_eq!("Name".parse::<FieldKey>(), Err(UnknownField("Name".into())));
    let err = "company".parse::<FieldKey>().unwrap_err();
    assert_eq!(err.to_string(), "unknown lead field: company");
}

#[test]
fn field_key_display_matches_input_name() {
    for key in FieldKey::ALL {
        assert_eq!(key.to_string().parse::<FieldKey>(), Ok(key));
    }
}

// =============================================================
// Field store
// =============================================================

#[test]
fn default_fields_are_empty() {
    let fields = LeadFields::default();
    assert_eq!(fields, LeadFields::new("", "", ""));
    assert_eq!(fields.missing(), FieldKey::ALL.to_vec());
}

#[test]
fn set_field_overwrites_only_named_field() {
    let mut fields = naina();
    fields.set_field(FieldKey::Email, "other@aria.com");
    assert_eq!(fields.name, "Naina Kapoor");
    assert_eq!(fields.email, "other@aria.com");
    assert_eq!(fields.phone, "9876543210");
}

#[test]
fn set_field_keeps_value_verbatim() {
    let mut fields = LeadFields::default();
    fields.set_field(FieldKey::Name, "  Naina  ");
    assert_eq!(fields.get(FieldKey::Name), "  Naina  ");
}

#[test]
fn set_field_can_empty_a_field() {
    let mut fields = naina();
    fields.set_field(FieldKey::Phone, "");
    assert_eq!(fields.missing(), vec![FieldKey::Phone]);
}

#[test]
fn clear_resets_every_field() {
    let mut fields = naina();
    fields.clear();
    assert_eq!(fields, LeadFields::default());
}

#[test]
fn serializes_to_exact_wire_keys() {
    let value = serde_json::to_value(naina()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "name": "Naina Kapoor", "email": "naina@aria.com", "phone": "9876543210" })
    );
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_passes_complete_fields() {
    assert_eq!(validate(&naina()), Ok(()));
}

#[test]
fn validate_does_not_check_format() {
    let fields = LeadFields::new("x", "not-an-email", "abc");
    assert!(validate(&fields).is_ok());
}

#[test]
fn validate_accepts_whitespace_only_values() {
    let fields = LeadFields::new(" ", "\t", " ");
    assert!(validate(&fields).is_ok());
}

#[test]
fn validate_fails_when_any_single_field_is_empty() {
    for key in FieldKey::ALL {
        let mut fields = naina();
        fields.set_field(key, "");
        let err = validate(&fields).unwrap_err();
        assert_eq!(err, ValidationError::Incomplete { missing: vec![key] });
        assert_eq!(err.to_string(), "incomplete");
    }
}

#[test]
fn validate_lists_all_missing_fields() {
    let fields = LeadFields::new("", "a@b.com", "");
    assert_eq!(
        validate(&fields),
        Err(ValidationError::Incomplete { missing: vec![FieldKey::Name, FieldKey::Phone] })
    );
}
