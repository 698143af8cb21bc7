use crate::errors::custom::{CustomError, DbError};
use crate::models::coffee::{Coffee, CoffeeRecord};
use crate::models::order::Order;
use crate::schema::customers::dsl as customer;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::Serialize;

#[derive(Debug, Queryable)]
pub struct Customer {
    pub id: i32,
    pub name: String,
}

/// A customer rendered without its order list.
#[derive(Debug, Serialize)]
pub struct CustomerRecord {
    pub id: i32,
    pub name: String,
}

impl From<Customer> for CustomerRecord {
    fn from(entity: Customer) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

/// An order as it appears inside its owning customer: the customer itself is
/// not re-rendered, which is what keeps the output acyclic.
#[derive(Debug, Serialize)]
pub struct CustomerOrderRecord {
    pub id: i32,
    pub price: i32,
    pub customization: String,
    pub created_at: NaiveDateTime,
    pub coffee_id: Option<i32>,
    pub customer_id: Option<i32>,
    pub coffee: Option<CoffeeRecord>,
}

impl From<(Order, Option<Coffee>)> for CustomerOrderRecord {
    fn from((entity, coffee): (Order, Option<Coffee>)) -> Self {
        Self {
            id: entity.id,
            price: entity.price,
            customization: entity.customization,
            created_at: entity.created_at,
            coffee_id: entity.coffee_id,
            customer_id: entity.customer_id,
            coffee: coffee.map(CoffeeRecord::from),
        }
    }
}

/// A customer with its orders inlined.
#[derive(Debug, Serialize)]
pub struct CustomerWithOrders {
    pub id: i32,
    pub name: String,
    pub orders: Vec<CustomerOrderRecord>,
}

impl CustomerWithOrders {
    pub fn new(entity: Customer, orders: Vec<(Order, Option<Coffee>)>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            orders: orders.into_iter().map(CustomerOrderRecord::from).collect(),
        }
    }
}

/******************************************/
// Inserting a customer
/******************************************/
pub fn insert_customer(conn: &mut PgConnection, new_name: &str) -> Result<Customer, CustomError> {
    diesel::insert_into(customer::customers)
        .values(customer::name.eq(new_name))
        .get_result(conn)
        .map_err(|err| CustomError::DatabaseError(DbError::InsertionError(err.to_string())))
}
