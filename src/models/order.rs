use crate::errors::custom::{CustomError, DbError};
use crate::models::coffee::{Coffee, CoffeeRecord};
use crate::models::customer::{Customer, CustomerRecord};
use crate::schema::orders::dsl as order;
use crate::validations::order::OrderPrice;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind};
use serde::Serialize;

#[derive(Debug, Queryable)]
pub struct Order {
    pub id: i32,
    pub price: i32,
    pub customization: String,
    pub created_at: NaiveDateTime,
    pub coffee_id: Option<i32>,
    pub customer_id: Option<i32>,
}

#[derive(Debug)]
pub struct NewOrder {
    pub coffee_id: i32,
    pub customer_id: i32,
    pub price: i32,
    pub customization: String,
}

/// Full rendering of one order: the related coffee and customer are inlined,
/// each without their own order lists.
#[derive(Debug, Serialize)]
pub struct OrderRecord {
    pub id: i32,
    pub price: i32,
    pub customization: String,
    pub created_at: NaiveDateTime,
    pub coffee_id: Option<i32>,
    pub customer_id: Option<i32>,
    pub coffee: Option<CoffeeRecord>,
    pub customer: Option<CustomerRecord>,
}

impl From<(Order, Option<Coffee>, Option<Customer>)> for OrderRecord {
    fn from((entity, coffee, customer): (Order, Option<Coffee>, Option<Customer>)) -> Self {
        Self {
            id: entity.id,
            price: entity.price,
            customization: entity.customization,
            created_at: entity.created_at,
            coffee_id: entity.coffee_id,
            customer_id: entity.customer_id,
            coffee: coffee.map(CoffeeRecord::from),
            customer: customer.map(CustomerRecord::from),
        }
    }
}

/// Listing rendering of an order: no foreign keys and no price.
#[derive(Debug, Serialize)]
pub struct OrderSummary {
    pub id: i32,
    pub customization: String,
    pub created_at: NaiveDateTime,
    pub coffee: Option<CoffeeRecord>,
    pub customer: Option<CustomerRecord>,
}

impl From<(Order, Option<Coffee>, Option<Customer>)> for OrderSummary {
    fn from((entity, coffee, customer): (Order, Option<Coffee>, Option<Customer>)) -> Self {
        Self {
            id: entity.id,
            customization: entity.customization,
            created_at: entity.created_at,
            coffee: coffee.map(CoffeeRecord::from),
            customer: customer.map(CustomerRecord::from),
        }
    }
}

/******************************************/
// Inserting an order (price >= 2)
/******************************************/
pub fn insert_order(conn: &mut PgConnection, new_order: NewOrder) -> Result<Order, CustomError> {
    let price = OrderPrice::parse(new_order.price).map_err(CustomError::ValidationError)?;

    // created_at comes from the database default and is never written again
    diesel::insert_into(order::orders)
        .values((
            order::price.eq(price.get()),
            order::customization.eq(new_order.customization),
            order::coffee_id.eq(new_order.coffee_id),
            order::customer_id.eq(new_order.customer_id),
        ))
        .get_result(conn)
        .map_err(|err| match err {
            diesel::result::Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                CustomError::IntegrityError(info.message().to_string())
            }
            other => CustomError::DatabaseError(DbError::InsertionError(other.to_string())),
        })
}
