use test_utils::run_to_inspect;

#[test]
fn len_supports_strings_and_arrays() {
    assert_eq!(run_to_inspect(r#"len("hello")"#), "5");
    assert_eq!(run_to_inspect("len([1, 2, 3, 4])"), "4");
}

#[test]
fn len_on_unsupported_type_is_a_runtime_error() {
    assert_eq!(
        run_to_inspect("len(1)"),
        "ERROR: argument to `len` not supported, got INTEGER"
    );
}

#[test]
fn first_last_rest_push_compose_into_array_construction() {
    assert_eq!(run_to_inspect("first([1, 2, 3])"), "1");
    assert_eq!(run_to_inspect("last([1, 2, 3])"), "3");
    assert_eq!(run_to_inspect("rest([1, 2, 3])"), "[2, 3]");
    assert_eq!(run_to_inspect("push([1, 2], 3)"), "[1, 2, 3]");
}

#[test]
fn first_and_last_of_empty_array_are_null() {
    assert_eq!(run_to_inspect("first([])"), "null");
    assert_eq!(run_to_inspect("last([])"), "null");
}

#[test]
fn puts_returns_null() {
    assert_eq!(run_to_inspect(r#"puts("hello")"#), "null");
}
