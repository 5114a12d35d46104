//! Behavioural tests for checker-typed arguments: checks embedded inside
//! other checks, within and across families.
#![expect(clippy::expect_used, reason = "tests require descriptive panic messages")]

use rstest::rstest;
use valex::{Registry, STRING_CHECKER, STRING_SLICE_CHECKER};

fn registry() -> Registry {
    Registry::with_builtins()
}

fn list(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn not_surfaces_the_user_description() {
    let registry = registry();
    let checks = registry
        .parse::<String>(STRING_CHECKER, "Not(EQ(\"A\"), \"must not be A\")")
        .expect("expression should compile");
    let check = checks.first().expect("one check");

    let failure = check(&String::from("A")).expect_err("A should be rejected");
    assert!(
        failure.to_string().contains("must not be A"),
        "{failure}"
    );
    assert!(check(&String::from("B")).is_ok());
}

#[test]
fn slice_checks_compose_across_families() {
    let registry = registry();
    let checks = registry
        .parse::<Vec<String>>(STRING_SLICE_CHECKER, "And(NoDups, Length(LE(3)))")
        .expect("expression should compile");
    let check = checks.first().expect("one check");

    assert!(check(&list(&["a", "b", "c"])).is_ok());
    let failure = check(&list(&["a", "a", "b"])).expect_err("duplicates should be rejected");
    assert!(failure.to_string().contains("duplicate"), "{failure}");
    assert!(check(&list(&["a", "b", "c", "d"])).is_err());
}

#[rstest]
#[case(&["a", "bob", "zzz"], true)]
#[case(&["x", "bob"], false)]
#[case(&["a"], true)]
fn slice_by_pos_checks_leading_entries_only(#[case] entries: &[&str], #[case] accepted: bool) {
    let registry = registry();
    let checks = registry
        .parse::<Vec<String>>(
            STRING_SLICE_CHECKER,
            "SliceByPos(EQ(\"a\"), HasPrefix(\"b\"))",
        )
        .expect("expression should compile");
    let check = checks.first().expect("one check");
    assert_eq!(check(&list(entries)).is_ok(), accepted, "{entries:?}");
}

#[test]
fn slice_any_quotes_its_description_on_failure() {
    let registry = registry();
    let checks = registry
        .parse::<Vec<String>>(
            STRING_SLICE_CHECKER,
            "SliceAny(HasSuffix(\"z\"), \"an entry ending in z\")",
        )
        .expect("expression should compile");
    let check = checks.first().expect("one check");

    assert!(check(&list(&["abc", "xyz"])).is_ok());
    let failure = check(&list(&["abc", "def"])).expect_err("no entry ends in z");
    assert!(
        failure.to_string().contains("an entry ending in z"),
        "{failure}"
    );
}

#[test]
fn slice_all_applies_one_string_check_to_every_entry() {
    let registry = registry();
    let checks = registry
        .parse::<Vec<String>>(STRING_SLICE_CHECKER, "SliceAll(Length(Between(1, 3)))")
        .expect("expression should compile");
    let check = checks.first().expect("one check");

    assert!(check(&list(&["a", "ab", "abc"])).is_ok());
    let failure = check(&list(&["a", "abcd"])).expect_err("abcd is too long");
    assert!(failure.to_string().contains("entry 1"), "{failure}");
}

#[test]
fn families_can_nest_their_own_combinators() {
    let registry = registry();
    let checks = registry
        .parse::<Vec<String>>(
            STRING_SLICE_CHECKER,
            "Or(And(NoDups, Length(LE(2))), Length(GE(5)))",
        )
        .expect("expression should compile");
    let check = checks.first().expect("one check");

    assert!(check(&list(&["a", "b"])).is_ok(), "short and unique");
    assert!(
        check(&list(&["a", "a", "b", "c", "d"])).is_ok(),
        "long enough despite duplicates"
    );
    assert!(check(&list(&["a", "a", "b"])).is_err(), "neither arm holds");
}

#[test]
fn nested_failures_report_the_full_path() {
    let registry = registry();
    let Err(err) = registry.parse::<Vec<String>>(STRING_SLICE_CHECKER, "Length(GT(\"x\"))")
    else {
        panic!("a string bound for an int check should fail");
    };
    assert_eq!(
        err.to_string(),
        "can't make string-slice-checker function: Length(int-checker): \
         can't convert argument 0 to int-checker: GT(int): \
         expected INT literal, found STRING literal"
    );
}

#[test]
fn nested_construction_errors_keep_their_message() {
    let registry = registry();
    let Err(err) = registry.parse::<Vec<String>>(STRING_SLICE_CHECKER, "Length(Between(9, 3))")
    else {
        panic!("misordered limits should fail");
    };
    let message = err.to_string();
    assert!(
        message.contains("can't convert argument 0 to int-checker:"),
        "{message}"
    );
    assert!(
        message.contains("the lower limit (9) must be less than the upper limit (3)"),
        "{message}"
    );
}

#[test]
fn literal_arguments_cannot_stand_in_for_checkers() {
    let registry = registry();
    let Err(err) = registry.parse::<Vec<String>>(STRING_SLICE_CHECKER, "Length(3)")
    else {
        panic!("a bare literal is not a check");
    };
    let message = err.to_string();
    assert!(message.contains("unexpected type: INT literal"), "{message}");
}
