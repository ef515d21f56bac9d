use test_utils::run_to_inspect;

#[test]
fn closures_capture_their_defining_environment() {
    let src = "
        let newAdder = fn(x) {
            fn(y) { x + y };
        };
        let addTwo = newAdder(2);
        addTwo(3);
    ";
    assert_eq!(run_to_inspect(src), "5");
}

#[test]
fn recursion_through_let_binding() {
    let src = "
        let fib = fn(n) {
            if (n < 2) { n } else { fib(n - 1) + fib(n - 2) }
        };
        fib(10);
    ";
    assert_eq!(run_to_inspect(src), "55");
}

#[test]
fn returning_from_a_nested_block_stops_the_call() {
    let src = "
        let f = fn(x) {
            if (x > 5) {
                return 1;
            }
            return 0;
        };
        f(10);
    ";
    assert_eq!(run_to_inspect(src), "1");
}
