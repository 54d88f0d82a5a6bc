use repocoord_core::{OtpxEntity, XptoEntity};

#[test]
fn new_xpto_entity_is_not_persisted() {
    let entity = XptoEntity::new("draft");

    assert_eq!(entity.id, 0);
    assert_eq!(entity.label, "draft");
    assert!(!entity.is_persisted());
}

#[test]
fn xpto_entity_serializes_with_plain_field_names() {
    let entity = XptoEntity {
        id: 3,
        label: "exported".to_string(),
    };

    let json = serde_json::to_value(&entity).unwrap();

    assert_eq!(json, serde_json::json!({ "id": 3, "label": "exported" }));
}

#[test]
fn otpx_entity_deserializes_from_note_only() {
    let entity: OtpxEntity = serde_json::from_str(r#"{ "note": "imported" }"#).unwrap();

    assert_eq!(entity, OtpxEntity::new("imported"));
}
