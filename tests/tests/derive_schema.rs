use pretty_assertions::assert_eq;
use sift::{
    query::Format,
    schema::{Behavior, DbFeature, Field, ModelRef, Role},
    stmt::Type,
    Entity, Registry,
};
use tests::models::{Customer, LineItem, Order};

fn names<M: Entity>() -> Vec<String> {
    M::metadata()
        .unwrap()
        .fields()
        .iter()
        .map(|f| f.name().to_string())
        .collect()
}

#[test]
fn field_order() {
    assert_eq!(
        names::<Order>(),
        [
            "id",
            "status",
            "total",
            "paid",
            "customer_id",
            "version",
            "notes",
            "created_at"
        ]
    );
    assert_eq!(names::<Customer>(), ["id", "region", "name", "email"]);
    assert_eq!(names::<LineItem>(), ["order_id", "line", "sku", "quantity", "tags", "attributes"]);
}

#[test]
fn model_names() {
    assert_eq!(Order::name(), "Order");
    assert_eq!(LineItem::name(), "OrderLine");
    assert_eq!(LineItem::metadata().unwrap().name, "OrderLine");
}

#[test]
fn skipped_fields_are_not_declared() {
    assert!(Order::metadata().unwrap().field("scratch").is_none());
}

#[test]
fn field_attributes() {
    let order = Order::metadata().unwrap();

    let id = order.field("id").unwrap();
    assert!(id.is_primary_key());
    assert_eq!(id.ty, Type::I64);

    let version = order.field("version").unwrap();
    assert!(version.in_role(Role::REVISION));
    assert!(version.behavior.contains(Behavior::NOT_QUERY));
    assert!(version.is_queryable());

    let notes = order.field("notes").unwrap();
    assert!(notes.nullable);
    assert_eq!(notes.ty, Type::String);
    assert!(notes.db.contains(DbFeature::NOT_FIXED_LENGTH));
    assert!(!notes.is_queryable());
    assert!(!notes.is_updatable());

    let created_at = order.field("created_at").unwrap();
    assert!(created_at.in_role(Role::CREATED_DATE));
    assert!(!created_at.is_updatable());
    assert!(!created_at.accessor.has_setter());

    let customer = Customer::metadata().unwrap();
    assert_eq!(customer.field("email").unwrap().storage_name(), "email_address");
    assert_eq!(customer.field("name").unwrap().format, Some(Format::Trim));
    assert!(customer.field("region").unwrap().is_cache_key());

    let line = LineItem::metadata().unwrap();
    assert_eq!(line.field("tags").unwrap().ty, Type::list(Type::String));
    assert_eq!(line.field("attributes").unwrap().ty, Type::Json);
    assert_eq!(line.primary_key_names(), ["order_id", "line"]);
}

#[test]
fn queryable_fields() {
    let order = Order::metadata().unwrap();
    let queryable: Vec<_> = order.queryable_fields().map(Field::name).collect();
    assert_eq!(
        queryable,
        ["id", "status", "total", "paid", "customer_id", "version", "created_at"]
    );
}

#[test]
fn relations() {
    let registry = Registry::global();
    let forward = registry
        .relation_field_names(ModelRef::of::<Order>(), ModelRef::of::<Customer>())
        .unwrap();
    assert_eq!(forward.get("customer_id").map(String::as_str), Some("id"));

    let reverse = registry
        .relation_field_names(ModelRef::of::<Customer>(), ModelRef::of::<Order>())
        .unwrap();
    assert_eq!(reverse.get("id").map(String::as_str), Some("customer_id"));
}

#[test]
fn accessors_read_and_write() {
    let order = Order::metadata().unwrap();
    let mut value = Order {
        status: "Open".into(),
        ..Default::default()
    };

    assert_eq!(
        order.get_value(&value, "status").unwrap(),
        sift::stmt::Value::from("Open")
    );

    order
        .set_value(&mut value, "version", sift::stmt::Value::I64(3))
        .unwrap();
    assert_eq!(value.version, 3);

    let err = order
        .get_value(&Customer::default(), "status")
        .unwrap_err();
    assert!(err.is_configuration());
}
