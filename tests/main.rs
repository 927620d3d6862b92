use assert_matches::assert_matches;
use cmdln::{
    Boolean, Bound, CaptureError, Cause, Duration, Integer, List, Optional, Param, ParamSet,
    Scalar, Separated,
};
use rstest::rstest;

#[test]
fn singles_in_order() {
    let mut arg1 = String::default();
    let mut arg2 = String::default();
    let mut arg3 = String::default();
    let mut parser = ParamSet::new()
        .add(Param::single(Scalar::new(&mut arg1), "arg1"))
        .add(Param::single(Scalar::new(&mut arg2), "arg2"))
        .add(Param::single(Scalar::new(&mut arg3), "arg3"))
        .build()
        .unwrap();

    parser.parse_tokens(&["a", "b", "c"]).unwrap();
    drop(parser);

    assert_eq!((arg1.as_str(), arg2.as_str(), arg3.as_str()), ("a", "b", "c"));
}

#[test]
fn list_then_required() {
    let mut list: Vec<String> = Vec::default();
    let mut arg2 = String::default();
    let mut parser = ParamSet::new()
        .add(Param::list(List::new(&mut list), "list").optional())
        .add(Param::single(Scalar::new(&mut arg2), "arg2"))
        .build()
        .unwrap();

    parser.parse_tokens(&["a", "b", "c"]).unwrap();
    let error = parser.parse_tokens(empty::slice()).unwrap_err();
    drop(parser);

    assert_matches!(error.cause(), Cause::MissingRequiredArgument(name) if name == "arg2");
    assert_eq!(list, vec!["a", "b"]);
    assert_eq!(arg2, "c");
}

#[rstest]
#[case(vec![], Cause::MissingRequiredArgument("arg".to_string()))]
#[case(vec!["a", "b", "c"], Cause::TooManyArguments(2))]
fn single_required(#[case] tokens: Vec<&str>, #[case] expected: Cause) {
    let mut arg = String::default();
    let mut parser = ParamSet::new()
        .add(Param::single(Scalar::new(&mut arg), "arg"))
        .build()
        .unwrap();

    let error = parser.parse_tokens(&tokens).unwrap_err();

    assert_eq!(error.cause().to_string(), expected.to_string());
}

#[test]
fn bounded_list_sandwich() {
    let mut a = String::default();
    let mut list: Vec<String> = Vec::default();
    let mut b: Option<String> = None;
    let mut parser = ParamSet::new()
        .add(Param::single(Scalar::new(&mut a), "a"))
        .add(Param::custom(List::new(&mut list), "list", Bound::Range(1, 2)))
        .add(Param::single(Optional::new(&mut b), "b").optional())
        .build()
        .unwrap();

    let error = parser
        .parse_tokens(&["x", "y", "z", "w", "v"])
        .unwrap_err();
    drop(parser);

    assert_matches!(error.cause(), Cause::TooManyArguments(1));
    // Assignments are not rolled back.
    assert_eq!(a, "x");
    assert_eq!(list, vec!["y", "z"]);
    assert_eq!(b, Some("w".to_string()));
}

#[test]
fn sentinel() {
    let mut commits: Vec<String> = Vec::default();
    let mut paths: Vec<String> = Vec::default();
    let mut parser = ParamSet::new()
        .add(Separated::new(
            Param::list(List::new(&mut commits), "commit").optional(),
        ))
        .add(Param::list(List::new(&mut paths), "path").optional())
        .build()
        .unwrap();

    parser.parse_tokens(&["c1", "c2", "--", "p1"]).unwrap();
    drop(parser);

    assert_eq!(commits, vec!["c1", "c2"]);
    assert_eq!(paths, vec!["p1"]);
}

#[test]
fn sentinel_required() {
    let mut commits: Vec<String> = Vec::default();
    let mut parser = ParamSet::new()
        .add(
            Separated::new(Param::list(List::new(&mut commits), "commit").optional())
                .require_sentinel(),
        )
        .build()
        .unwrap();

    let error = parser.parse_tokens(&["c1", "c2"]).unwrap_err();
    drop(parser);

    assert_matches!(error.cause(), Cause::Specification { name, .. } if name == "commit");
    assert!(commits.is_empty());
}

#[test]
fn conversion_keeps_prior_value() {
    let mut count: i64 = 7;
    let mut timeout = Duration::from_secs(1);
    let mut parser = ParamSet::new()
        .add(Param::single(Scalar::new(&mut timeout), "timeout"))
        .add(Param::single(Scalar::new(&mut count), "count"))
        .build()
        .unwrap();

    let error = parser.parse_tokens(&["2h45m", "abc"]).unwrap_err();
    drop(parser);

    assert_matches!(
        error.cause(),
        Cause::Conversion { name, token, .. } if name == "count" && token == "abc"
    );
    assert_eq!(count, 7);
    assert_eq!(timeout, Duration::from_secs(165 * 60));
}

#[test]
fn idempotent() {
    let mut verbose = false;
    let mut values: Vec<u64> = vec![9];
    let mut parser = ParamSet::new()
        .add(Param::single(Scalar::new(&mut verbose), "verbose"))
        .add(Param::list(List::new(&mut values), "values"))
        .build()
        .unwrap();

    parser.parse_tokens(&["true", "1", "2"]).unwrap();
    parser.parse_tokens(&["true", "1", "2"]).unwrap();
    drop(parser);

    assert!(verbose);
    assert_eq!(values, vec![1, 2]);
}

#[test]
fn closure_field() {
    let mut seen: Vec<String> = Vec::default();
    let mut parser = ParamSet::new()
        .add(Param::list(
            |tokens: &[&str]| -> Result<(), CaptureError> {
                seen.extend(tokens.iter().map(|token| token.to_uppercase()));
                Ok(())
            },
            "words",
        ))
        .build()
        .unwrap();

    parser.parse_tokens(&["a", "b"]).unwrap();
    drop(parser);

    assert_eq!(seen, vec!["A", "B"]);
}

#[test]
fn duplicate_names() {
    let mut first = String::default();
    let mut second = String::default();
    let error = ParamSet::new()
        .add(Param::single(Scalar::new(&mut first), "arg"))
        .add(Param::single(Scalar::new(&mut second), "arg"))
        .build()
        .unwrap_err();

    assert!(error.to_string().contains("Cannot duplicate the parameter 'arg'."));
}

#[test]
fn unreachable_minimum() {
    let mut huge: Vec<String> = Vec::default();
    let mut tail: Vec<String> = Vec::default();
    let mut parser = ParamSet::new()
        .add(Param::custom(List::new(&mut huge), "huge", Bound::Lower(usize::MAX)))
        .add(Param::custom(List::new(&mut tail), "tail", Bound::Lower(1)))
        .build()
        .unwrap();

    let error = parser.parse_tokens(&["x"]).unwrap_err();

    assert_matches!(error.cause(), Cause::MissingRequiredArgument(name) if name == "huge");
}

#[test]
fn radix_and_short_booleans() {
    let mut mask: Integer<u32> = Integer::default();
    let mut switches: Vec<Boolean> = Vec::default();
    let mut parser = ParamSet::new()
        .add(Param::single(Scalar::new(&mut mask), "mask"))
        .add(Param::list(List::new(&mut switches), "switches"))
        .build()
        .unwrap();

    parser.parse_tokens(&["0x10", "true", "1", "0", "false"]).unwrap();
    drop(parser);

    assert_eq!(mask, Integer(16));
    assert_eq!(
        switches,
        vec![Boolean(true), Boolean(true), Boolean(false), Boolean(false)]
    );
}
