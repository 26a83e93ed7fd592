use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sift::{Entity, EntityState};
use uuid::Uuid;

#[derive(Debug, Default, Clone, PartialEq, Entity)]
pub struct Customer {
    #[key]
    pub id: i64,

    #[field(format = "trim")]
    pub name: String,

    #[column("email_address")]
    pub email: Option<String>,

    #[cache(key)]
    pub region: String,

    #[state]
    pub state: EntityState,
}

#[derive(Debug, Default, Clone, PartialEq, Entity)]
pub struct Order {
    #[key]
    pub id: i64,

    pub status: String,

    pub total: Decimal,

    pub paid: bool,

    #[relation(target = Customer, references = id)]
    pub customer_id: i64,

    #[role(revision)]
    #[field(not_query)]
    pub version: i32,

    #[field(not_query, not_update)]
    #[db(not_fixed_length)]
    pub notes: Option<String>,

    #[field(readonly)]
    #[role(created_date)]
    pub created_at: Option<DateTime<Utc>>,

    #[field(skip)]
    pub scratch: Vec<u8>,

    #[state]
    pub state: EntityState,
}

#[derive(Debug, Default, Clone, PartialEq, Entity)]
#[entity(name = "OrderLine")]
pub struct LineItem {
    #[key]
    pub order_id: i64,

    #[key]
    pub line: i16,

    pub sku: Uuid,

    pub quantity: u32,

    pub tags: Vec<String>,

    pub attributes: serde_json::Value,
}
