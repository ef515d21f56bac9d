use test_utils::run_to_inspect;

#[test]
fn integer_expressions_evaluate_with_standard_precedence() {
    assert_eq!(run_to_inspect("(5 + 10 * 2 + 15 / 3) * 2 + -10"), "50");
}

#[test]
fn division_floors_toward_negative_infinity() {
    assert_eq!(run_to_inspect("-7 / 2"), "-4");
    assert_eq!(run_to_inspect("7 / -2"), "-4");
    assert_eq!(run_to_inspect("-7 / -2"), "3");
}

#[test]
fn comparisons_and_equality_yield_booleans() {
    assert_eq!(run_to_inspect("1 < 2"), "true");
    assert_eq!(run_to_inspect("(1 < 2) == true"), "true");
    assert_eq!(run_to_inspect("!!5"), "true");
}
