use core::cell::Cell;
use outcome_rail::sequence::{and_then_fold, sequence};
use outcome_rail::Outcome;

#[test]
fn sequence_keeps_all_values_in_order() {
    let outcomes = [
        Outcome::<_, &str>::ok(1),
        Outcome::ok(2),
        Outcome::ok(3),
    ];
    assert_eq!(sequence(outcomes), Outcome::Ok(vec![1, 2, 3]));
}

#[test]
fn sequence_returns_the_first_error() {
    let outcomes = [Outcome::ok(1), Outcome::err("x"), Outcome::ok(2)];
    assert_eq!(sequence(outcomes), Outcome::Err("x"));

    let outcomes = [
        Outcome::<i32, &str>::err("first"),
        Outcome::err("second"),
    ];
    assert_eq!(sequence(outcomes), Outcome::Err("first"));
}

#[test]
fn sequence_of_nothing_is_an_empty_success() {
    let empty: [Outcome<i32, &str>; 0] = [];
    assert_eq!(sequence(empty), Outcome::Ok(vec![]));
}

#[test]
fn collecting_outcomes_short_circuits_like_sequence() {
    let collected: Outcome<Vec<i32>, &str> =
        vec![Outcome::ok(1), Outcome::err("stop"), Outcome::ok(3)]
            .into_iter()
            .collect();
    assert_eq!(collected, Outcome::Err("stop"));
}

#[test]
fn and_then_fold_threads_the_accumulator() {
    let result = and_then_fold(
        [Outcome::<_, &str>::ok(1), Outcome::ok(2), Outcome::ok(3)],
        |acc, n| Outcome::ok(acc + n),
    );
    assert_eq!(result, Outcome::Ok(Some(6)));
}

#[test]
fn and_then_fold_of_nothing_has_no_accumulator() {
    let empty: [Outcome<i32, &str>; 0] = [];
    assert_eq!(
        and_then_fold(empty, |acc, n| Outcome::ok(acc + n)),
        Outcome::Ok(None)
    );
}

#[test]
fn and_then_fold_aborts_on_an_err_element_without_invoking_the_fold() {
    let calls = Cell::new(0u32);
    let result = and_then_fold(
        [Outcome::ok(1), Outcome::err("bad"), Outcome::ok(3)],
        |acc, n| {
            calls.set(calls.get() + 1);
            Outcome::ok(acc + n)
        },
    );
    assert_eq!(result, Outcome::Err("bad"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn and_then_fold_aborts_when_the_fold_itself_fails() {
    let calls = Cell::new(0u32);
    let result = and_then_fold(
        [Outcome::ok(1), Outcome::ok(2), Outcome::ok(3)],
        |acc, n| {
            calls.set(calls.get() + 1);
            if n == 2 {
                Outcome::err("fold refused")
            } else {
                Outcome::ok(acc + n)
            }
        },
    );
    assert_eq!(result, Outcome::Err("fold refused"));
    assert_eq!(calls.get(), 1);
}

#[test]
fn single_element_fold_returns_that_value_without_invoking_the_fold() {
    let calls = Cell::new(0u32);
    let result = and_then_fold([Outcome::<_, &str>::ok(42)], |acc, n| {
        calls.set(calls.get() + 1);
        Outcome::ok(acc + n)
    });
    assert_eq!(result, Outcome::Ok(Some(42)));
    assert_eq!(calls.get(), 0);
}
