use pretty_assertions::assert_eq;
use sift::{
    identity::{fields_assignment, identity_value, identity_value_is_null, init_identity_value, snapshot},
    stmt::Value,
    Entity,
};
use tests::models::{Customer, LineItem, Order};

#[test]
fn new_orders_get_serial_keys() {
    let mut order = Order::default();
    assert!(identity_value_is_null(&order).unwrap());

    init_identity_value(&mut order).unwrap();
    assert!(order.id > 0);
    assert!(!identity_value_is_null(&order).unwrap());
    assert_eq!(identity_value(&order).unwrap(), order.id.to_string());
}

#[test]
fn composite_keys() {
    let mut line = LineItem {
        order_id: 500,
        ..Default::default()
    };
    init_identity_value(&mut line).unwrap();
    assert_eq!(line.order_id, 500);
    assert!(line.line >= 1);

    let expected = {
        let mut parts = vec!["500".to_string(), line.line.to_string()];
        parts.sort();
        parts.join("_")
    };
    assert_eq!(identity_value(&line).unwrap(), expected);
}

#[test]
fn identity_memo_follows_key_writes() {
    let mut customer = Customer {
        id: 10,
        ..Default::default()
    };
    assert_eq!(identity_value(&customer).unwrap(), "10");
    assert_eq!(customer.state.identity(), Some("10"));

    Customer::metadata()
        .unwrap()
        .set_value(&mut customer, "id", Value::I32(11))
        .unwrap();
    assert_eq!(customer.id, 11);
    assert_eq!(identity_value(&customer).unwrap(), "11");
}

#[test]
fn changed_fields() {
    let mut order = Order {
        id: 1,
        status: "Open".into(),
        ..Default::default()
    };
    let before = snapshot(&order).unwrap();

    order.status = "Paid".into();
    order.paid = true;

    let assignment = fields_assignment(&order, Some(before.clone())).unwrap();
    let names: Vec<_> = assignment.names().collect();
    assert_eq!(names, ["status", "paid"]);
    assert_eq!(assignment.value("paid"), Some(&Value::Bool(true)));
    assert_eq!(assignment.old_values, Some(before));
}

#[test]
fn list_and_document_fields() {
    let mut line = LineItem {
        order_id: 1,
        line: 1,
        tags: vec!["red".into()],
        attributes: serde_json::json!({ "size": "m" }),
        ..Default::default()
    };
    let before = snapshot(&line).unwrap();
    assert!(fields_assignment(&line, Some(before.clone())).unwrap().is_empty());

    line.tags.push("large".into());
    line.attributes = serde_json::json!({ "size": "l" });

    let assignment = fields_assignment(&line, Some(before)).unwrap();
    let names: Vec<_> = assignment.names().collect();
    assert_eq!(names, ["tags", "attributes"]);
}
