//! Shared helpers for the integration tests under `tests/`.

use monkeyrs::eval_source;

/// Evaluates `src` in a fresh environment and returns the resulting value's
/// `inspect()` rendering. Panics with the accumulated parse errors if `src`
/// does not parse, since every integration test fixture is expected to.
pub fn run_to_inspect(src: &str) -> String {
    let (value, errors) = eval_source(src);
    assert!(errors.is_empty(), "parse errors for {src:?}: {errors:?}");
    value.to_string()
}
