//! Test utilities for severity validator integration tests
#![allow(dead_code)]

use serde::Serialize;
use severity_validator::{Field, RuleSet, SeverityTaggedValidator, ValidatorError};

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Extract Some value or panic with context
#[macro_export]
macro_rules! assert_some {
    ($expr:expr) => {
        match $expr {
            Some(v) => v,
            None => panic!("assertion failed: expected Some, got None"),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Some(v) => v,
            None => panic!("{}: got None", $msg),
        }
    };
}

/// Entity with two required, two recommended and two optional fields
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TestEntity {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub full_description: Option<String>,
    pub option_field1: Option<String>,
    pub option_field2: Option<String>,
}

impl TestEntity {
    /// Entity with every field populated
    pub fn complete() -> Self {
        Self {
            id: Some(1),
            name: Some("Name".to_string()),
            description: Some("Description".to_string()),
            full_description: Some("FullDescription".to_string()),
            option_field1: Some("Option1".to_string()),
            option_field2: Some("Option2".to_string()),
        }
    }
}

pub fn id() -> Field<TestEntity, Option<i32>> {
    Field::new("Id", |e: &TestEntity| &e.id)
}

pub fn name() -> Field<TestEntity, Option<String>> {
    Field::new("Name", |e: &TestEntity| &e.name)
}

pub fn description() -> Field<TestEntity, Option<String>> {
    Field::new("Description", |e: &TestEntity| &e.description)
}

pub fn full_description() -> Field<TestEntity, Option<String>> {
    Field::new("FullDescription", |e: &TestEntity| &e.full_description)
}

pub fn option_field1() -> Field<TestEntity, Option<String>> {
    Field::new("OptionField1", |e: &TestEntity| &e.option_field1)
}

pub fn option_field2() -> Field<TestEntity, Option<String>> {
    Field::new("OptionField2", |e: &TestEntity| &e.option_field2)
}

/// Id and Name required (Error), descriptions recommended (Warning),
/// option fields suggested (Info)
pub struct TestRules;

impl RuleSet<TestEntity> for TestRules {
    fn declare_error_rules(
        &self,
        rules: &mut SeverityTaggedValidator<TestEntity>,
    ) -> Result<(), ValidatorError> {
        rules.error_rule_for(id())?.not_null();
        rules.error_rule_for(name())?.not_null();
        Ok(())
    }

    fn declare_warning_rules(
        &self,
        rules: &mut SeverityTaggedValidator<TestEntity>,
    ) -> Result<(), ValidatorError> {
        rules.warning_rule_for(description())?.not_null();
        rules.warning_rule_for(full_description())?.not_null();
        Ok(())
    }

    fn declare_info_rules(
        &self,
        rules: &mut SeverityTaggedValidator<TestEntity>,
    ) -> Result<(), ValidatorError> {
        rules.info_rule_for(option_field1())?.not_null();
        rules.info_rule_for(option_field2())?.not_null();
        Ok(())
    }
}
