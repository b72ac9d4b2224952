use core::cell::Cell;
use outcome_rail::Outcome;

#[test]
fn constructors_wrap_exactly_their_argument() {
    let ok = Outcome::<i32, &str>::ok(5);
    assert!(ok.is_ok());
    assert!(!ok.is_err());
    assert_eq!(ok.into_value(), Some(5));

    let err = Outcome::<i32, &str>::err("missing");
    assert!(err.is_err());
    assert!(!err.is_ok());
    assert_eq!(err.into_error(), Some("missing"));
}

#[test]
fn and_then_on_ok_equals_applying_the_function() {
    let double = |n: i32| Outcome::<i32, &str>::ok(n * 2);
    assert_eq!(Outcome::ok(4).and_then(double), double(4));
}

#[test]
fn and_then_on_err_never_invokes_the_function() {
    let calls = Cell::new(0u32);
    let result = Outcome::<i32, &str>::err("boom").and_then(|n| {
        calls.set(calls.get() + 1);
        Outcome::ok(n)
    });

    assert_eq!(result, Outcome::Err("boom"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn map_obeys_functor_composition() {
    let f = |n: i32| n + 1;
    let g = |n: i32| n * 3;

    for outcome in [Outcome::<i32, &str>::ok(7), Outcome::err("e")] {
        let stepwise = outcome.clone().map(f).map(g);
        let composed = outcome.map(|n| g(f(n)));
        assert_eq!(stepwise, composed);
    }
}

#[test]
fn map_err_leaves_success_untouched() {
    let calls = Cell::new(0u32);
    let result = Outcome::<i32, &str>::ok(1).map_err(|e| {
        calls.set(calls.get() + 1);
        e.len()
    });

    assert_eq!(result, Outcome::Ok(1));
    assert_eq!(calls.get(), 0);

    let mapped = Outcome::<i32, &str>::err("ab").map_err(|e| e.len());
    assert_eq!(mapped, Outcome::Err(2));
}

#[test]
fn catch_recovers_only_the_expected_payload() {
    let calls = Cell::new(0u32);
    let recovered = Outcome::<i32, &str>::err("foo").catch(&"foo", |e| {
        calls.set(calls.get() + 1);
        assert_eq!(e, "foo");
        Outcome::ok(0)
    });
    assert_eq!(recovered, Outcome::Ok(0));
    assert_eq!(calls.get(), 1);

    let passed = Outcome::<i32, &str>::err("bar").catch(&"foo", |_| {
        calls.set(calls.get() + 1);
        Outcome::ok(0)
    });
    assert_eq!(passed, Outcome::Err("bar"));
    assert_eq!(calls.get(), 1);

    let ok = Outcome::<i32, &str>::ok(9).catch(&"foo", |_| {
        calls.set(calls.get() + 1);
        Outcome::ok(0)
    });
    assert_eq!(ok, Outcome::Ok(9));
    assert_eq!(calls.get(), 1);
}

#[test]
fn catch_all_recovers_any_failure_and_may_retype_the_error() {
    let recovered = Outcome::<i32, &str>::err("whatever").catch_all(|e| Outcome::err(e.len()));
    assert_eq!(recovered, Outcome::Err(8));

    let ok = Outcome::<i32, &str>::ok(3).catch_all(|_| Outcome::err(0usize));
    assert_eq!(ok, Outcome::Ok(3));
}

#[test]
fn inspect_runs_the_side_effect_and_returns_the_original() {
    let seen = Cell::new(None);
    let outcome = Outcome::<i32, &str>::ok(11).inspect(|v| seen.set(Some(*v)));
    assert_eq!(outcome, Outcome::Ok(11));
    assert_eq!(seen.get(), Some(11));

    let untouched = Outcome::<i32, &str>::err("down").inspect(|v| seen.set(Some(*v)));
    assert_eq!(untouched, Outcome::Err("down"));
    assert_eq!(seen.get(), Some(11));
}

#[test]
fn unwrap_or_substitutes_only_on_failure() {
    assert_eq!(Outcome::<i32, &str>::ok(8).unwrap_or(0), 8);
    assert_eq!(Outcome::<i32, &str>::err("gone").unwrap_or(0), 0);
}

#[test]
fn flatten_collapses_one_level_of_nesting() {
    let nested = Outcome::<_, &str>::ok(Outcome::<i32, &str>::ok(1));
    assert_eq!(nested.flatten(), Outcome::Ok(1));

    let inner_err = Outcome::<_, &str>::ok(Outcome::<i32, &str>::err("inner"));
    assert_eq!(inner_err.flatten(), Outcome::Err("inner"));

    let outer_err = Outcome::<Outcome<i32, &str>, &str>::err("outer");
    assert_eq!(outer_err.flatten(), Outcome::Err("outer"));
}

#[test]
fn zip_with_short_circuits_left_to_right() {
    let both = Outcome::<i32, &str>::ok(2).zip_with(Outcome::ok(3), |a, b| a * b);
    assert_eq!(both, Outcome::Ok(6));

    let left =
        Outcome::<i32, &str>::err("left").zip_with(Outcome::<i32, _>::err("right"), |a, b| a * b);
    assert_eq!(left, Outcome::Err("left"));

    let right =
        Outcome::<i32, &str>::ok(2).zip_with(Outcome::<i32, _>::err("right"), |a, b| a * b);
    assert_eq!(right, Outcome::Err("right"));
}

#[test]
fn result_round_trip_preserves_both_variants() {
    assert_eq!(Outcome::<i32, &str>::from_result(Ok(1)), Outcome::Ok(1));
    assert_eq!(Outcome::<i32, &str>::from_result(Err("e")), Outcome::Err("e"));

    let via_from: Outcome<i32, &str> = Err("e").into();
    assert_eq!(via_from.into_result(), Err("e"));
}

#[test]
fn iterators_yield_at_most_one_value() {
    let mut ok = Outcome::<i32, &str>::ok(3);
    if let Some(value) = ok.iter_mut().next() {
        *value = 4;
    }
    assert_eq!(ok.iter().copied().collect::<Vec<_>>(), vec![4]);
    assert_eq!(ok.into_iter().collect::<Vec<_>>(), vec![4]);

    let err = Outcome::<i32, &str>::err("x");
    assert_eq!(err.iter().next(), None);
    assert_eq!(err.iter_error().copied().collect::<Vec<_>>(), vec!["x"]);
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip_preserves_variants() {
    let ok = Outcome::<i32, String>::ok(42);
    let json = serde_json::to_string(&ok).unwrap();
    let back: Outcome<i32, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ok);

    let err = Outcome::<i32, String>::err("boom".to_string());
    let json = serde_json::to_string(&err).unwrap();
    let back: Outcome<i32, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, err);
}
