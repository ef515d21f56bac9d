use test_utils::run_to_inspect;

#[test]
fn array_indexing_out_of_bounds_is_null() {
    assert_eq!(run_to_inspect("[1, 2, 3][0]"), "1");
    assert_eq!(run_to_inspect("[1, 2, 3][3]"), "null");
    assert_eq!(run_to_inspect("[1, 2, 3][-1]"), "null");
}

#[test]
fn map_and_reduce_style_recursion_over_arrays() {
    let src = r#"
        let map = fn(arr, f) {
            let iter = fn(arr, accumulated) {
                if (len(arr) == 0) {
                    accumulated
                } else {
                    iter(rest(arr), push(accumulated, f(first(arr))))
                }
            };
            iter(arr, [])
        };
        let double = fn(x) { x * 2 };
        map([1, 2, 3], double)
    "#;
    assert_eq!(run_to_inspect(src), "[2, 4, 6]");
}

#[test]
fn hash_literal_renders_in_insertion_order() {
    assert_eq!(
        run_to_inspect(r#"{"one": 1, "two": 2, "three": 3}"#),
        "{one: 1, two: 2, three: 3}"
    );
}

#[test]
fn hash_index_with_missing_key_is_null() {
    assert_eq!(run_to_inspect(r#"{"foo": 5}["bar"]"#), "null");
}

#[test]
fn booleans_and_integers_are_usable_as_hash_keys() {
    assert_eq!(run_to_inspect("{5: \"five\", true: \"yes\"}[true]"), "yes");
}
