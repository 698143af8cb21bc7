use crate::db::PgPool;
use crate::errors::custom::{CustomError, DbError};
use crate::models::coffee::Coffee;
use crate::models::customer::{Customer, CustomerWithOrders};
use crate::models::order::Order;
use crate::schema::coffees::dsl as coffee;
use crate::schema::customers::dsl as customer;
use crate::schema::orders::dsl as order;
use actix_web::{web, HttpResponse};
use diesel::prelude::*;
use tracing::instrument;

/******************************************/
// Retrieving a customer with its orders
/******************************************/
/**
 * @route   GET /customers/{id}
 * @access  Public
 */
#[instrument(name = "Get customer", skip(pool))]
pub async fn get_customer(
    pool: web::Data<PgPool>,
    customer_id: web::Path<i32>,
) -> Result<HttpResponse, CustomError> {
    let customer_id = customer_id.into_inner();
    let mut conn = pool.get().expect("Failed to get db connection from Pool");

    let found: Option<Customer> = customer::customers
        .filter(customer::id.eq(customer_id))
        .first(&mut conn)
        .optional()
        .map_err(|err| CustomError::DatabaseError(DbError::QueryBuilderError(err.to_string())))?;

    let found = found.ok_or_else(|| CustomError::NotFound("Customer".to_string()))?;

    let customer_orders: Vec<(Order, Option<Coffee>)> = order::orders
        .left_join(coffee::coffees)
        .filter(order::customer_id.eq(customer_id))
        .load(&mut conn)
        .map_err(|err| CustomError::DatabaseError(DbError::QueryBuilderError(err.to_string())))?;

    Ok(HttpResponse::Ok().json(CustomerWithOrders::new(found, customer_orders)))
}
