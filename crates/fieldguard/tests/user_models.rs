//! Integration test: end-to-end user-model scenarios.
//!
//! Exercises the full pipeline the library is built for: a schema with
//! built-in and custom rules, entities built via the factory, guarded
//! handles rejecting bad writes, and bulk validation over populated
//! objects — the way a typical application model would wire it all up.

use fieldguard::{rules, Entity, FieldRule, Schema, ValidateOptions, ValidationError};
use serde_json::{json, Map, Value};

fn object(value: Value) -> Map<String, Value> {
    value.as_object().cloned().expect("test data must be an object")
}

/// A naive email rule: standard string checks plus an '@'/'.' shape test.
fn email_rule() -> FieldRule {
    FieldRule::new()
        .min(5.0)
        .max(200.0)
        .validator(|value, rule, name| {
            rules::string_field(value, rule, name)?;
            let s = value.as_str().unwrap_or_default();
            let (local, domain) = s.split_once('@').unwrap_or_default();
            if local.is_empty() || !domain.contains('.') {
                return Err(ValidationError::Invalid {
                    name: name.to_string(),
                    reason: format!("expected an email address, got \"{s}\""),
                });
            }
            Ok(())
        })
}

fn user_schema() -> Schema {
    Schema::new()
        .field("firstName", rules::string(3.0, 10.0))
        .field("email", email_rule())
}

#[test]
fn test_simple_user_with_falsy_check() {
    let schema = Schema::new().field(
        "name",
        FieldRule::new().validator(|value, _, name| match value.as_str() {
            Some(s) if !s.is_empty() => Ok(()),
            _ => Err(ValidationError::Invalid {
                name: name.to_string(),
                reason: format!("cannot set to {value}"),
            }),
        }),
    );

    let mut user = Entity::from_object_guarded(object(json!({"name": "a name"})), schema).unwrap();
    user.validate(ValidateOptions::new()).unwrap();
    assert_eq!(user.get("name"), Some(&json!("a name")));

    let err = user.set("name", json!("")).unwrap_err();
    assert!(err.to_string().contains("cannot set to"));
    assert_eq!(user.get("name"), Some(&json!("a name")));
}

#[test]
fn test_factory_with_extra_attribute_allowed() {
    let schema = Schema::new().field(
        "name",
        FieldRule::new().validator(|value, _, name| match value.as_str() {
            Some(s) if !s.is_empty() => Ok(()),
            _ => Err(ValidationError::Invalid {
                name: name.to_string(),
                reason: "falsy value".to_string(),
            }),
        }),
    );

    let mut user = Entity::from_object_guarded(
        object(json!({"name": "a name", "unknown": true})),
        schema,
    )
    .unwrap();
    user.validate(ValidateOptions::new().allow_extra()).unwrap();

    assert_eq!(user.get("name"), Some(&json!("a name")));
    assert_eq!(user.get("unknown"), Some(&json!(true)));

    // The guard still rejects bad writes to declared fields.
    assert!(user.set("name", json!("")).is_err());
    // And still refuses writes to the undeclared one.
    assert!(matches!(
        user.set("unknown", json!(false)).unwrap_err(),
        ValidationError::MissingField { .. }
    ));
}

#[test]
fn test_guarded_user_rejects_bad_fields() {
    let mut user = Entity::new(user_schema()).into_guarded();

    let err = user.set("firstName", json!("1")).unwrap_err();
    assert_eq!(err.to_string(), "firstName should be between 3 and 10");

    let err = user.set("firstName", json!(1)).unwrap_err();
    assert!(matches!(err, ValidationError::EmptyString { .. }));

    let err = user.set("email", json!("s@@@@error")).unwrap_err();
    assert!(matches!(err, ValidationError::Invalid { .. }));

    let err = user.set("unknown", json!([])).unwrap_err();
    assert_eq!(err.to_string(), "missing field: unknown");

    // Nothing was ever committed.
    assert!(user.entity().is_empty());

    user.set("firstName", json!("Ada")).unwrap();
    user.set("email", json!("ada@example.com")).unwrap();
    user.validate(ValidateOptions::new()).unwrap();
}

#[test]
fn test_one_rule_shared_across_properties() {
    let email_settings_schema = Schema::new()
        .field("primaryEmail", email_rule())
        .field("secondaryEmail", email_rule());

    let settings = Entity::from_object(
        object(json!({
            "primaryEmail": "first@example.com",
            "secondaryEmail": "second@example.com"
        })),
        email_settings_schema.clone(),
    )
    .unwrap();
    settings.validate(ValidateOptions::new()).unwrap();

    let mut other = Entity::from_object_guarded(Map::new(), email_settings_schema).unwrap();
    let err = other.set("primaryEmail", json!("NOT_AN_EMAIL")).unwrap_err();
    assert!(err.to_string().contains("expected an email address"));
    assert!(other.get("primaryEmail").is_none());
}

#[test]
fn test_role_model_with_optional_extra() {
    // A role carries a validated name plus a free-form "extra" slot the
    // schema declares but never checks.
    let role_schema = Schema::new()
        .field("name", rules::string(3.0, 50.0))
        .field("extra", FieldRule::new().optional());

    let role = Entity::from_object(
        object(json!({"name": "admin", "extra": null})),
        role_schema.clone(),
    )
    .unwrap();
    role.validate(ValidateOptions::new()).unwrap();

    let bad = Entity::from_object(object(json!({"name": "ad", "extra": 1})), role_schema).unwrap();
    let err = bad.validate(ValidateOptions::new()).unwrap_err();
    assert_eq!(err.to_string(), "name should be between 3 and 50");
}

#[test]
fn test_reserved_property_rejected_by_factory() {
    let err = Entity::from_object(object(json!({"validate": "x"})), user_schema()).unwrap_err();
    match err {
        ValidationError::ReservedProperty { name } => assert_eq!(name, "validate"),
        other => panic!("expected ReservedProperty, got: {other:?}"),
    }
}

#[test]
fn test_serialized_user_contains_only_data_fields() {
    let mut user = Entity::new(user_schema()).into_guarded();
    user.set("firstName", json!("Ada")).unwrap();
    user.set("email", json!("ada@example.com")).unwrap();

    let snapshot = serde_json::to_value(&user).unwrap();
    assert_eq!(
        snapshot,
        json!({"email": "ada@example.com", "firstName": "Ada"})
    );
}

#[test]
fn test_too_many_properties_reports_allowed_list() {
    let user = Entity::from_object(
        object(json!({"firstName": "Ada", "email": "ada@example.com", "extra": 1})),
        user_schema(),
    )
    .unwrap();
    let err = user.validate(ValidateOptions::new()).unwrap_err();
    assert_eq!(err.to_string(), "only fields: email,firstName are allowed");

    user.validate(ValidateOptions::new().allow_extra()).unwrap();
}
