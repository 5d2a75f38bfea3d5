use personas_core::{Persona, PersonaInput, PersonaValidationError, MAX_NAME_CHARS};

#[test]
fn persona_new_has_no_id() {
    let persona = Persona::new("Juan", "Pérez", 30);

    assert_eq!(persona.id, None);
    assert_eq!(persona.nombre, "Juan");
    assert_eq!(persona.apellido, "Pérez");
    assert_eq!(persona.edad, 30);
}

#[test]
fn input_into_persona_keeps_values_untrimmed() {
    let persona = PersonaInput::new("  Ana ", "López", 0).into_persona().unwrap();

    assert_eq!(persona.id, None);
    assert_eq!(persona.nombre, "  Ana ");
    assert_eq!(persona.edad, 0);
}

#[test]
fn input_rejects_missing_or_blank_nombre() {
    let missing = PersonaInput {
        nombre: None,
        ..PersonaInput::new("x", "Pérez", 30)
    };
    assert_eq!(
        missing.into_persona().unwrap_err(),
        PersonaValidationError::MissingNombre
    );

    let blank = PersonaInput::new(" \t ", "Pérez", 30);
    let err = blank.into_persona().unwrap_err();
    assert_eq!(err, PersonaValidationError::MissingNombre);
    assert_eq!(err.to_string(), "El nombre es requerido");
}

#[test]
fn input_rejects_missing_or_blank_apellido() {
    let err = PersonaInput::new("Juan", "", 30).into_persona().unwrap_err();
    assert_eq!(err.to_string(), "El apellido es requerido");

    let missing = PersonaInput {
        apellido: None,
        ..PersonaInput::new("Juan", "x", 30)
    };
    assert_eq!(
        missing.into_persona().unwrap_err(),
        PersonaValidationError::MissingApellido
    );
}

#[test]
fn input_rejects_missing_or_negative_edad() {
    let err = PersonaInput::new("Juan", "Pérez", -1)
        .into_persona()
        .unwrap_err();
    assert_eq!(err.to_string(), "La edad debe ser un valor positivo");

    let missing = PersonaInput {
        edad: None,
        ..PersonaInput::new("Juan", "Pérez", 1)
    };
    assert_eq!(
        missing.into_persona().unwrap_err(),
        PersonaValidationError::InvalidEdad
    );
}

#[test]
fn validation_reports_only_the_first_failure() {
    let input = PersonaInput {
        nombre: Some(String::new()),
        apellido: None,
        edad: Some(-3),
    };
    assert_eq!(
        input.into_persona().unwrap_err(),
        PersonaValidationError::MissingNombre
    );

    let input = PersonaInput {
        nombre: Some("Juan".to_string()),
        apellido: Some("  ".to_string()),
        edad: None,
    };
    assert_eq!(
        input.into_persona().unwrap_err(),
        PersonaValidationError::MissingApellido
    );
}

#[test]
fn validate_enforces_column_length_limit() {
    let persona = Persona::new("a".repeat(MAX_NAME_CHARS + 1), "Pérez", 30);
    let err = persona.validate().unwrap_err();

    assert_eq!(
        err,
        PersonaValidationError::FieldTooLong {
            field: "nombre",
            max: MAX_NAME_CHARS
        }
    );
    assert_eq!(err.to_string(), "El nombre no puede superar 100 caracteres");
    assert_eq!(err.code(), "field_too_long");
}

#[test]
fn apply_overwrites_fields_but_keeps_id() {
    let mut persona = Persona::with_id(7, "Juan", "Pérez", 30);
    persona.apply(Persona::new("Luis", "Gómez", 41));

    assert_eq!(persona, Persona::with_id(7, "Luis", "Gómez", 41));
}

#[test]
fn persona_serialization_uses_expected_wire_fields() {
    let persona = Persona::with_id(1, "Juan", "Pérez", 30);

    let json = serde_json::to_value(&persona).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"id": 1, "nombre": "Juan", "apellido": "Pérez", "edad": 30})
    );

    let decoded: Persona = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, persona);
}
