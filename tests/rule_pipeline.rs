//! Pipeline construction: rule-spec parsing, dedup, ordering, custom rules,
//! and build-time failure modes.

use std::sync::Arc;

use formcheck::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn duplicate_tokens_collapse_into_one_rule() {
    let form = Form::builder()
        .input(Input::text("name").rules("required|required|min:3"))
        .build()
        .unwrap();

    let names: Vec<&str> = form
        .field("name")
        .unwrap()
        .rules()
        .iter()
        .map(|rule| rule.name())
        .collect();
    assert_eq!(names, vec!["required", "min"]);
}

#[test]
fn same_rule_with_different_params_stays_distinct() {
    let form = Form::builder()
        .input(Input::text("name").rules("min:3|min:6"))
        .build()
        .unwrap();
    assert_eq!(form.field("name").unwrap().rules().len(), 2);
}

#[test]
fn pipeline_runs_in_declared_order() {
    // "x" is both too short and not an email; declared order decides which
    // message wins.
    let form = Form::builder()
        .input(Input::text("a").value("x").rules("min:3|email"))
        .input(Input::text("b").value("x").rules("email|min:3"))
        .build()
        .unwrap();

    let first_error = |name: &str| {
        let field = form.field(name).unwrap();
        field.rules()[0].check(&field.current_value()).unwrap_err()
    };
    assert_eq!(first_error("a").code(), "min");
    assert_eq!(first_error("b").code(), "email");
}

#[rstest]
#[case("required|maxx:10", "maxx")]
#[case("nope", "nope")]
fn unknown_rule_name_fails_build(#[case] spec: &str, #[case] bad: &str) {
    let err = Form::builder()
        .input(Input::text("field").rules(spec))
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::UnknownRule { name, .. } if name == bad));
}

#[test]
fn dangling_reference_fails_build_for_arity_bound_rule() {
    let err = Form::builder()
        .input(Input::text("password2").rules("confirmation:#missing"))
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::MissingParam {
            rule: "confirmation",
            ..
        }
    ));
}

#[test]
fn surplus_params_do_not_fail_build() {
    let form = Form::builder()
        .input(Input::text("name").value("ok").rules("required:bonus"))
        .build()
        .unwrap();
    assert_eq!(form.validate_field("name"), Some(true));
}

#[test]
fn custom_rule_participates_in_pipeline() {
    #[derive(Debug)]
    struct StartsWith(String);

    impl Rule for StartsWith {
        fn name(&self) -> &str {
            "starts_with"
        }

        fn check(&self, value: &FieldValue) -> Result<(), ValidationError> {
            match value.as_text() {
                Some(s) if s.starts_with(&self.0) => Ok(()),
                _ => Err(ValidationError::new(
                    "starts_with",
                    format!("Please start with {}", self.0),
                )),
            }
        }
    }

    let form = Form::builder()
        .rule("starts_with", |params| {
            let prefix = params
                .first()
                .and_then(RuleParam::as_literal)
                .ok_or(ConfigError::MissingParam {
                    rule: "starts_with",
                    param: "prefix",
                })?;
            Ok(Arc::new(StartsWith(prefix.to_owned())) as SharedRule)
        })
        .input(Input::text("code").rules("required|starts_with:FX-"))
        .build()
        .unwrap();

    form.set_value("code", "FX-1234");
    assert_eq!(form.validate_field("code"), Some(true));
    form.set_value("code", "AB-1234");
    assert_eq!(form.validate_field("code"), Some(false));
}

#[test]
fn custom_factory_errors_abort_build() {
    let err = Form::builder()
        .rule("broken", |_params| {
            Err(ConfigError::MissingParam {
                rule: "broken",
                param: "anything",
            })
        })
        .input(Input::text("field").rules("broken"))
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::MissingParam { rule: "broken", .. }));
}

#[rstest]
#[case("user@example.com", true)]
#[case("first.last@sub.example.org", true)]
#[case("a@b.co", true)]
#[case("not-an-email", false)]
#[case("missing@tld", false)]
#[case("@example.com", false)]
fn email_rule_end_to_end(#[case] value: &str, #[case] valid: bool) {
    let form = Form::builder()
        .input(Input::text("email").rules("required|email"))
        .build()
        .unwrap();
    form.set_value("email", value);
    assert_eq!(form.validate_field("email"), Some(valid));
}

#[test]
fn min_counts_characters_not_bytes() {
    let form = Form::builder()
        .input(Input::text("name").rules("min:4"))
        .build()
        .unwrap();
    form.set_value("name", "żółw"); // 4 chars, 7 bytes
    assert_eq!(form.validate_field("name"), Some(true));
}

#[test]
fn field_without_rules_is_always_valid() {
    let form = Form::builder()
        .input(Input::text("note"))
        .build()
        .unwrap();
    assert_eq!(form.validate_field("note"), Some(true));
}
