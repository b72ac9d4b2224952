use outcome_rail::{all, any, outcome, Outcome};

#[test]
fn outcome_macro_wraps_expressions_and_blocks() {
    let parsed = outcome!("42".parse::<i32>());
    assert_eq!(parsed, Outcome::Ok(42));

    let failed = outcome!("nope".parse::<i32>());
    assert!(failed.is_err());

    let block = outcome!({
        let text = "21";
        text.parse::<i32>().map(|n| n * 2)
    });
    assert_eq!(block, Outcome::Ok(42));
}

#[test]
fn all_macro_requires_every_outcome_to_succeed() {
    let combined = all!(Outcome::<i32, &str>::ok(1), Outcome::ok(2), Outcome::ok(3));
    assert_eq!(combined.into_value().unwrap().into_vec(), vec![1, 2, 3]);

    let failed = all!(
        Outcome::<i32, &str>::err("a"),
        Outcome::ok(2),
        Outcome::err("b"),
    );
    assert_eq!(failed.into_error().unwrap().into_vec(), vec!["a", "b"]);
}

#[test]
fn any_macro_needs_just_one_success() {
    let combined = any!(Outcome::<i32, &str>::err("a"), Outcome::ok(9));
    assert_eq!(combined.into_value().unwrap().into_vec(), vec![9]);

    let failed = any!(Outcome::<i32, &str>::err("a"), Outcome::err("b"));
    assert_eq!(failed.into_error().unwrap().into_vec(), vec!["a", "b"]);
}
