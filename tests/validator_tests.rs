//! Integration tests for tiered evaluation
//!
//! This suite verifies:
//! - Full evaluation returns every tier's failures in declaration order
//! - Tier-restricted evaluation returns only that tier
//! - Valid entities produce empty results from every evaluation method
//! - Results are stable across repeated calls

mod common;

use common::{TestEntity, TestRules};
use severity_validator::{
    BuildState, Failure, Severity, SeverityFilterExt, SeverityValidator, Validate,
    ValidationResult,
};

fn validator() -> SeverityValidator<TestEntity, TestRules> {
    SeverityValidator::new(TestRules)
}

/// Field names and severities, ignoring messages
fn labels(result: &ValidationResult) -> Vec<(String, Severity)> {
    result
        .failures()
        .iter()
        .map(|f| (f.field.clone(), f.severity))
        .collect()
}

fn label(field: &str, severity: Severity) -> (String, Severity) {
    (field.to_string(), severity)
}

fn all_tiers_expected() -> Vec<(String, Severity)> {
    vec![
        label("Id", Severity::Error),
        label("Name", Severity::Error),
        label("Description", Severity::Warning),
        label("FullDescription", Severity::Warning),
        label("OptionField1", Severity::Info),
        label("OptionField2", Severity::Info),
    ]
}

// ============================================================================
// Valid entities
// ============================================================================

#[test]
fn test_valid_entity_passes_every_method() {
    let validator = validator();
    let entity = TestEntity::complete();

    for result in [
        assert_ok!(validator.validate(&entity)),
        assert_ok!(validator.validate_errors(&entity)),
        assert_ok!(validator.validate_warnings(&entity)),
        assert_ok!(validator.validate_info(&entity)),
    ] {
        assert!(result.is_valid());
        assert!(result.failures().is_empty());
    }
}

// ============================================================================
// Single-tier failures under full evaluation
// ============================================================================

#[test]
fn test_missing_id_is_one_error() {
    let entity = TestEntity {
        id: None,
        ..TestEntity::complete()
    };

    let result = assert_ok!(validator().validate(&entity));
    assert!(!result.is_valid());
    assert_eq!(labels(&result), vec![label("Id", Severity::Error)]);
}

#[test]
fn test_missing_name_is_one_error() {
    let entity = TestEntity {
        name: None,
        ..TestEntity::complete()
    };

    let result = assert_ok!(validator().validate(&entity));
    assert_eq!(labels(&result), vec![label("Name", Severity::Error)]);
}

#[test]
fn test_missing_id_and_name_are_two_errors() {
    let entity = TestEntity {
        id: None,
        name: None,
        ..TestEntity::complete()
    };

    let result = assert_ok!(validator().validate(&entity));
    assert_eq!(
        labels(&result),
        vec![label("Id", Severity::Error), label("Name", Severity::Error)]
    );
}

#[test]
fn test_missing_descriptions_are_warnings() {
    let entity = TestEntity {
        description: None,
        full_description: None,
        ..TestEntity::complete()
    };

    let result = assert_ok!(validator().validate(&entity));
    assert!(!result.is_valid());
    assert!(result.has_no_errors());
    assert_eq!(
        labels(&result),
        vec![
            label("Description", Severity::Warning),
            label("FullDescription", Severity::Warning)
        ]
    );
}

#[test]
fn test_missing_option_fields_are_info() {
    let entity = TestEntity {
        option_field1: None,
        ..TestEntity::complete()
    };

    let result = assert_ok!(validator().validate(&entity));
    assert_eq!(labels(&result), vec![label("OptionField1", Severity::Info)]);

    let entity = TestEntity {
        option_field1: None,
        option_field2: None,
        ..TestEntity::complete()
    };

    let result = assert_ok!(validator().validate(&entity));
    assert_eq!(
        labels(&result),
        vec![
            label("OptionField1", Severity::Info),
            label("OptionField2", Severity::Info)
        ]
    );
}

// ============================================================================
// All tiers failing
// ============================================================================

#[test]
fn test_empty_entity_fails_every_tier_in_declaration_order() {
    let result = assert_ok!(validator().validate(&TestEntity::default()));

    assert!(!result.is_valid());
    assert_eq!(labels(&result), all_tiers_expected());
}

#[test]
fn test_validate_errors_returns_only_errors() {
    let validator = validator();
    let entity = TestEntity::default();

    let full = assert_ok!(validator.validate(&entity));
    let errors = assert_ok!(validator.validate_errors(&entity));

    assert!(!errors.is_valid());
    assert_eq!(errors.failures(), full.failures().with_severity_error().as_slice());
}

#[test]
fn test_validate_warnings_returns_only_warnings() {
    let validator = validator();
    let entity = TestEntity::default();

    let full = assert_ok!(validator.validate(&entity));
    let warnings = assert_ok!(validator.validate_warnings(&entity));

    assert_eq!(
        labels(&warnings),
        vec![
            label("Description", Severity::Warning),
            label("FullDescription", Severity::Warning)
        ]
    );
    assert_eq!(
        warnings.failures(),
        full.failures().with_severity_warning().as_slice()
    );
}

#[test]
fn test_validate_info_returns_only_info() {
    let validator = validator();
    let entity = TestEntity::default();

    let full = assert_ok!(validator.validate(&entity));
    let info = assert_ok!(validator.validate_info(&entity));

    assert!(info.failures().iter().all(|f| f.severity == Severity::Info));
    assert_eq!(info.failures(), full.failures().with_severity_info().as_slice());
}

#[test]
fn test_tier_restriction_hides_other_tier_failures() {
    // Errors would fire too, but only warnings are evaluated
    let entity = TestEntity {
        id: None,
        description: None,
        ..TestEntity::complete()
    };

    let result = assert_ok!(validator().validate_warnings(&entity));
    assert_eq!(labels(&result), vec![label("Description", Severity::Warning)]);

    let result = assert_ok!(validator().validate_info(&entity));
    assert!(result.is_valid());
}

// ============================================================================
// Idempotence and build lifecycle
// ============================================================================

#[test]
fn test_repeated_evaluation_is_equal() {
    let validator = validator();
    let entity = TestEntity::default();

    let first = assert_ok!(validator.validate(&entity));
    let second = assert_ok!(validator.validate(&entity));
    assert_eq!(first, second);

    let first = assert_ok!(validator.validate_warnings(&entity));
    let second = assert_ok!(validator.validate_warnings(&entity));
    assert_eq!(first, second);
}

#[test]
fn test_build_happens_on_first_call() {
    let validator = validator();
    assert_eq!(validator.build_state(), BuildState::Unbuilt);

    assert_ok!(validator.validate_info(&TestEntity::complete()));
    assert_eq!(validator.build_state(), BuildState::Built);
    assert_eq!(assert_ok!(validator.rule_count()), 6);
}

#[test]
fn test_default_messages_name_the_field() {
    let result = assert_ok!(validator().validate_errors(&TestEntity::default()));
    let first: &Failure = assert_some!(result.failures().first());

    assert_eq!(first.message, "'Id' must not be null.");
}

#[test]
fn test_trait_object_dispatch() {
    let validator = validator();
    let as_trait: &dyn Validate<TestEntity> = &validator;

    let result = assert_ok!(as_trait.validate(&TestEntity::default()));
    assert_eq!(result.len(), 6);
    assert_eq!(result.count_by_severity().warnings, 2);
}
