use pretty_assertions::assert_eq;
use sift_core::{
    query::{ConditionGroup, Connector, Criterion, Entry, FieldRef, Operator},
    schema::{Entity, ModelBuilder, ModelRef},
    stmt::{Expr, Lambda, Param},
    translate::translate,
};

struct Order {
    id: i64,
    status: String,
    total: i64,
}

impl Entity for Order {
    fn describe(model: &mut ModelBuilder<Self>) {
        model.field("id", |o| &o.id, |o| &mut o.id).key();
        model.field("status", |o| &o.status, |o| &mut o.status);
        model.field("total", |o| &o.total, |o| &mut o.total);
    }
}

struct Flags {
    id: i64,
    a: bool,
    b: bool,
    c: bool,
}

impl Entity for Flags {
    fn describe(model: &mut ModelBuilder<Self>) {
        model.field("id", |f| &f.id, |f| &mut f.id).key();
        model.field("a", |f| &f.a, |f| &mut f.a);
        model.field("b", |f| &f.b, |f| &mut f.b);
        model.field("c", |f| &f.c, |f| &mut f.c);
    }
}

fn order(name: &str) -> Expr {
    Param::of::<Order>("o").member(name)
}

fn on_order(body: Expr) -> ConditionGroup {
    translate(&Lambda::new([Param::of::<Order>("o")], body)).unwrap()
}

fn prop(name: &str) -> FieldRef {
    FieldRef::property(ModelRef::of::<Order>(), name, 0)
}

fn criterion(op: Operator, field: &str, value: impl Into<sift_core::stmt::Value>) -> Criterion {
    Criterion::new(op, prop(field), FieldRef::constant(value))
}

// ---------------------------------------------------------------------------
// Shapes
// ---------------------------------------------------------------------------

#[test]
fn and_of_two_comparisons() {
    let group = on_order(order("status").eq("Paid").and(order("total").gt(100_i64)));

    assert_eq!(
        group,
        ConditionGroup::from_entries(
            Connector::And,
            vec![
                criterion(Operator::Equal, "status", "Paid").into(),
                criterion(Operator::GreaterThan, "total", 100_i64).into(),
            ],
        )
    );
}

#[test]
fn single_criterion_is_wrapped() {
    let group = on_order(order("total").le(5_i64));
    assert_eq!(group.len(), 1);
    assert_eq!(
        group.entries[0],
        Entry::Criterion(criterion(Operator::LessThanOrEqual, "total", 5_i64))
    );
}

#[test]
fn attachment_connector() {
    let lambda = Lambda::new([Param::of::<Order>("o")], order("total").le(5_i64));
    let group = sift_core::translate::translate_with(&lambda, Connector::Or).unwrap();
    assert_eq!(group.connector, Connector::Or);
    assert_eq!(group.entries[0].connector(), Connector::Or);
}

#[test]
fn or_chain_is_flat() {
    let group = on_order(
        order("status")
            .eq("a")
            .or(order("status").eq("b"))
            .or(order("status").eq("c")),
    );

    let connectors: Vec<_> = group.entries.iter().map(Entry::connector).collect();
    assert_eq!(connectors, [Connector::And, Connector::Or, Connector::Or]);
    assert!(group.entries.iter().all(|entry| entry.as_criterion().is_some()));
}

#[test]
fn left_group_is_spliced() {
    // (a || b) && c
    let group = on_order(
        order("status")
            .eq("a")
            .or(order("status").eq("b"))
            .and(order("total").gt(1_i64)),
    );

    let connectors: Vec<_> = group.entries.iter().map(Entry::connector).collect();
    assert_eq!(connectors, [Connector::And, Connector::Or, Connector::And]);
}

#[test]
fn mixed_right_group_is_nested() {
    // a && (b || c)
    let group = on_order(
        order("status")
            .eq("a")
            .and(order("status").eq("b").or(order("total").gt(1_i64))),
    );

    assert_eq!(group.len(), 2);
    let nested = group.entries[1].as_group().unwrap();
    assert_eq!(nested.connector, Connector::And);
    let connectors: Vec<_> = nested.entries.iter().map(Entry::connector).collect();
    assert_eq!(connectors, [Connector::And, Connector::Or]);
}

// ---------------------------------------------------------------------------
// Negation
// ---------------------------------------------------------------------------

#[test]
fn not_equal_is_single_criterion() {
    let group = on_order(order("status").eq("Paid").not());
    assert_eq!(
        group,
        ConditionGroup::from_entries(
            Connector::And,
            vec![criterion(Operator::NotEqual, "status", "Paid").into()],
        )
    );
}

#[test]
fn not_of_and_is_or_of_complements() {
    let group = on_order(order("status").eq("a").and(order("total").lt(3_i64)).not());

    assert_eq!(
        group.entries,
        vec![
            Entry::from(criterion(Operator::NotEqual, "status", "a")),
            Entry::from(
                criterion(Operator::GreaterThanOrEqual, "total", 3_i64)
                    .with_connector(Connector::Or)
            ),
        ]
    );
}

#[test]
fn double_negation_round_trips() {
    let body = order("status").eq("a").or(order("total").lt(3_i64));
    assert_eq!(on_order(body.clone().not().not()), on_order(body));
}

#[test]
fn negate_round_trips() {
    let group = on_order(
        order("status")
            .eq("a")
            .and(order("status").eq("b").or(order("total").gt(1_i64))),
    );
    assert_eq!(group.clone().negated().negated(), group);
}

// ---------------------------------------------------------------------------
// Truth tables
// ---------------------------------------------------------------------------

fn flag(name: &str) -> Expr {
    Param::of::<Flags>("f").member(name)
}

/// Decides boolean-member criteria from a bit assignment of `a`, `b`, `c`.
fn decide(bits: u8) -> impl FnMut(&Criterion) -> bool {
    move |criterion| {
        let name = &criterion.left.as_property().unwrap().name;
        let value = match name.as_str() {
            "a" => bits & 1 != 0,
            "b" => bits & 2 != 0,
            "c" => bits & 4 != 0,
            _ => panic!("unexpected field {name}"),
        };
        match criterion.op {
            Operator::Equal => value,
            Operator::NotEqual => !value,
            op => panic!("unexpected operator {op:?}"),
        }
    }
}

fn check(body: Expr, expected: impl Fn(bool, bool, bool) -> bool) {
    let group = translate(&Lambda::new([Param::of::<Flags>("f")], body)).unwrap();
    for bits in 0..8_u8 {
        let (a, b, c) = (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0);
        assert_eq!(
            group.evaluate(&mut decide(bits)),
            expected(a, b, c),
            "a={a} b={b} c={c}; {group:#?}"
        );
    }
}

#[test]
fn evaluates_like_the_source_expression() {
    check(flag("a").and(flag("b").or(flag("c"))), |a, b, c| a && (b || c));
    check(flag("a").or(flag("b")).and(flag("c")), |a, b, c| (a || b) && c);
    check(flag("a").or(flag("b").and(flag("c"))), |a, b, c| a || (b && c));
    check(flag("a").and(flag("b")).or(flag("c")), |a, b, c| (a && b) || c);
    check(
        flag("a").and(flag("b").or(flag("c")).not()),
        |a, b, c| a && !(b || c),
    );
    check(
        flag("a").or(flag("b")).not().or(flag("c").not()),
        |a, b, c| !(a || b) || !c,
    );
    check(
        flag("a").and(flag("b").not().and(flag("c"))).not(),
        |a, b, c| !(a && (!b && c)),
    );
}

#[test]
fn negated_group_is_logical_negation() {
    let group = translate(&Lambda::new(
        [Param::of::<Flags>("f")],
        flag("a").or(flag("b").and(flag("c").not())),
    ))
    .unwrap();
    let negated = group.clone().negated();

    for bits in 0..8_u8 {
        assert_eq!(
            negated.evaluate(&mut decide(bits)),
            !group.evaluate(&mut decide(bits))
        );
    }
}
