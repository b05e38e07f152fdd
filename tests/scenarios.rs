use decisions::{DecisionError, Rule, RuleTableBuilder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Criterion {
    A,
    B,
    C,
    D,
    E,
}

const ALL: [Criterion; 5] = [
    Criterion::A,
    Criterion::B,
    Criterion::C,
    Criterion::D,
    Criterion::E,
];

fn is(expected: Criterion) -> impl Fn(&Option<Criterion>) -> bool + Send + Sync {
    move |c| *c == Some(expected)
}

fn is_plain(expected: Criterion) -> impl Fn(&Criterion) -> bool + Send + Sync {
    move |c| *c == expected
}

#[test]
fn seeded_rules_then_more_rules_with_absent_fallback() {
    let selector = RuleTableBuilder::from_rules([
        Rule::new(is(Criterion::A), Some(Criterion::A)),
        Rule::new(is(Criterion::B), Some(Criterion::B)),
        Rule::new(is(Criterion::C), Some(Criterion::C)),
    ])
    .when(is(Criterion::D))
    .then(Some(Criterion::D))
    .when(is(Criterion::E))
    .then(Some(Criterion::E))
    .finalize_with_default(None);

    assert_eq!(selector.apply(&Some(Criterion::B)), Some(Criterion::B));
    for value in ALL {
        assert_eq!(selector.apply(&Some(value)), Some(value));
    }
    assert_eq!(selector.apply(&None), None);
}

#[test]
fn lazy_seed_with_identity_fallback() {
    let rules = [Criterion::A, Criterion::B, Criterion::C]
        .into_iter()
        .map(|c| Rule::new(is(c), Some(c)));
    let selector = RuleTableBuilder::from_rules(rules).finalize_with_computed_default(|c| *c);

    assert_eq!(selector.apply(&Some(Criterion::D)), Some(Criterion::D));
    for value in ALL {
        assert_eq!(selector.apply(&Some(value)), Some(value));
    }
    assert_eq!(selector.apply(&None), None);
}

#[test]
fn failure_fallback_names_the_unknown_case() {
    let selector = RuleTableBuilder::new()
        .rule(is_plain(Criterion::A), "A")
        .rule(is_plain(Criterion::B), "B")
        .rule(is_plain(Criterion::C), "C")
        .finalize_with_failure(DecisionError::no_match::<Criterion>);

    assert_eq!(selector.evaluate(&Criterion::A), Ok("A"));
    assert_eq!(selector.evaluate(&Criterion::B), Ok("B"));
    assert_eq!(selector.evaluate(&Criterion::C), Ok("C"));

    let err = selector.evaluate(&Criterion::D).unwrap_err();
    assert_eq!(err.to_string(), "unknown case: D");
    assert!(err.to_string().contains('D'));
}

#[test]
fn failure_fallback_with_custom_error_type() {
    #[derive(Debug, PartialEq)]
    struct IllegalArgument(String);

    let selector = RuleTableBuilder::new()
        .rule(is_plain(Criterion::A), "A")
        .finalize_with_failure(|c: &Criterion| IllegalArgument(format!("unknown case: {c:?}")));

    assert_eq!(
        selector.evaluate(&Criterion::E),
        Err(IllegalArgument("unknown case: E".to_owned()))
    );
}

#[test]
fn reply_when_chain_covers_all_values() {
    let selector = RuleTableBuilder::new()
        .reply(Some(Criterion::A))
        .when(is(Criterion::A))
        .reply(Some(Criterion::B))
        .when(is(Criterion::B))
        .reply(Some(Criterion::C))
        .when(is(Criterion::C))
        .reply(Some(Criterion::D))
        .when(is(Criterion::D))
        .reply(Some(Criterion::E))
        .when(is(Criterion::E))
        .finalize_with_default(None);

    for value in ALL {
        assert_eq!(selector.apply(&Some(value)), Some(value));
    }
    assert_eq!(selector.apply(&None), None);
}

#[test]
fn empty_table_returns_constant_default() {
    let selector = RuleTableBuilder::<str, &str>::new().finalize_with_default("default");

    assert!(selector.is_empty());
    for input in ["", "anything", "A"] {
        assert_eq!(selector.apply(input), "default");
    }
}

#[test]
fn function_results_dispatch_on_the_same_input() {
    fn name(c: &Criterion) -> String {
        format!("{c:?}")
    }

    let selector = RuleTableBuilder::<Criterion, fn(&Criterion) -> String>::new()
        .reply(name)
        .when(is_plain(Criterion::A))
        .reply(name)
        .when(is_plain(Criterion::B))
        .reply(name)
        .when(is_plain(Criterion::C))
        .finalize_with_default(name);

    for value in ALL {
        assert_eq!(selector.dispatch(&value), Ok(format!("{value:?}")));
    }
}
