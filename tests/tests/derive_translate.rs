use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use sift::{
    query::{ConditionGroup, Connector, Criterion, Entry, FieldKind, FieldRef, Format, Operator, Subquery},
    schema::ModelRef,
    stmt::{Expr, Value},
};
use tests::{
    filter, filter_with,
    models::{Customer, Order},
};

fn order(name: &str) -> FieldRef {
    FieldRef::property(ModelRef::of::<Order>(), name, 0)
}

#[test]
fn paid_orders_over_a_hundred() {
    let group = filter::<Order>(|o| {
        o.member("status")
            .eq("Paid")
            .and(o.member("total").gt(Decimal::from(100)))
    })
    .unwrap();

    assert_eq!(
        group,
        ConditionGroup::from_entries(
            Connector::And,
            vec![
                Criterion::new(Operator::Equal, order("status"), FieldRef::constant("Paid")).into(),
                Criterion::new(
                    Operator::GreaterThan,
                    order("total"),
                    FieldRef::constant(Decimal::from(100))
                )
                .into(),
            ],
        )
    );
}

#[test]
fn not_paid() {
    let group = filter::<Order>(|o| o.member("status").eq("Paid").not()).unwrap();
    assert_eq!(
        group,
        ConditionGroup::from_entries(
            Connector::And,
            vec![
                Criterion::new(Operator::NotEqual, order("status"), FieldRef::constant("Paid"))
                    .into()
            ],
        )
    );
}

#[test]
fn or_attachment() {
    let group = filter_with::<Order>(Connector::Or, |o| o.member("paid")).unwrap();
    assert_eq!(group.connector, Connector::Or);
    assert_eq!(
        group.entries,
        vec![Entry::from(
            Criterion::new(Operator::Equal, order("paid"), FieldRef::constant(true))
                .with_connector(Connector::Or)
        )]
    );
}

#[test]
fn null_comparisons() {
    let group = filter::<Order>(|o| o.member("created_at").eq(Expr::null())).unwrap();
    assert_eq!(
        group.criteria().next(),
        Some(&Criterion::unary(Operator::IsNull, order("created_at")))
    );

    let err = filter::<Order>(|o| o.member("total").ge(Expr::null())).unwrap_err();
    assert!(err.is_null_ordering());
}

#[test]
fn captured_statuses() {
    let statuses = vec!["Open".to_string(), "Paid".to_string(), "Open".to_string()];
    let group = filter::<Order>(move |o| {
        Expr::captured(move || statuses.clone()).contains(o.member("status"))
    })
    .unwrap();

    let criterion = group.criteria().next().unwrap();
    assert_eq!(criterion.op, Operator::In);
    assert_eq!(
        criterion.right,
        Some(FieldRef::constant(Value::from(vec!["Open", "Paid"])))
    );
}

#[test]
fn orders_of_customers_in_a_region() {
    let region = filter::<Customer>(|c| c.member("region").eq("emea")).unwrap();
    let group = filter::<Order>(|o| {
        Subquery::new::<Customer>("id")
            .filter(region.clone())
            .contains(o.member("customer_id"))
    })
    .unwrap();

    let criterion = group.criteria().next().unwrap();
    assert_eq!(criterion.op, Operator::In);
    assert_eq!(criterion.left, order("customer_id"));
    let Some(FieldKind::Subquery(subquery)) = criterion.right.as_ref().map(|f| &f.kind) else {
        panic!("expected a subquery");
    };
    assert_eq!(subquery.filter.as_ref(), Some(&region));
}

#[test]
fn customer_name_formats() {
    let group = filter::<Customer>(|c| c.member("name").to_lower().starts_with("a")).unwrap();
    let criterion = group.criteria().next().unwrap();
    assert_eq!(criterion.op, Operator::BeginLike);
    let chain: Vec<_> = criterion.left.formats().map(|s| s.format).collect();
    assert_eq!(chain, [Format::Trim, Format::Lower]);
}

#[test]
fn missing_email() {
    let group = filter::<Customer>(|c| Expr::is_null_or_white_space(c.member("email"))).unwrap();
    let ops: Vec<_> = group.criteria().map(|c| (c.op, c.connector)).collect();
    assert_eq!(
        ops,
        [
            (Operator::IsNull, Connector::And),
            (Operator::Equal, Connector::Or)
        ]
    );
}

#[test]
fn hidden_fields_cannot_be_queried() {
    let err = filter::<Order>(|o| o.member("notes").eq("x")).unwrap_err();
    assert!(err.is_resolution());

    let err = filter::<Order>(|o| o.member("scratch").eq(1)).unwrap_err();
    assert!(err.is_resolution());

    // Revision fields stay queryable
    filter::<Order>(|o| o.member("version").gt(1)).unwrap();
}

#[test]
fn multi_entity_positions() {
    use sift::stmt::{Lambda, Param};

    let a = Param::of::<Order>("a");
    let b = Param::of::<Order>("b");
    let lambda = Lambda::new(
        [a.clone(), b.clone()],
        a.member("customer_id").eq(b.member("customer_id")),
    );
    let group = sift::translate(&lambda).unwrap();
    let criterion = group.criteria().next().unwrap();

    assert_eq!(criterion.left, order("customer_id"));
    assert_eq!(
        criterion.right,
        Some(FieldRef::property(ModelRef::of::<Order>(), "customer_id", 1))
    );
}
