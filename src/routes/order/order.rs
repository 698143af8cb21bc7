use crate::db::PgPool;
use crate::errors::custom::{CustomError, DbError};
use crate::models::coffee::Coffee;
use crate::models::customer::Customer;
use crate::models::order::{insert_order, NewOrder, Order, OrderRecord, OrderSummary};
use crate::schema::coffees::dsl as coffee;
use crate::schema::customers::dsl as customer;
use crate::schema::orders::dsl as order;
use actix_web::{web, HttpResponse};
use diesel::prelude::*;
use serde::Deserialize;
use tracing::instrument;

#[derive(Deserialize)]
pub struct CreateOrderBody {
    pub coffee_id: i32,
    pub customer_id: i32,
    pub price: i32,
    pub customization: String,
}

/******************************************/
// Listing all orders
/******************************************/
/**
 * @route   GET /orders
 * @access  Public
 */
#[instrument(name = "List all orders", skip(pool))]
pub async fn list_orders(pool: web::Data<PgPool>) -> Result<HttpResponse, CustomError> {
    let mut conn = pool.get().expect("Failed to get db connection from Pool");

    let rows: Vec<(Order, Option<Coffee>, Option<Customer>)> = order::orders
        .left_join(coffee::coffees)
        .left_join(customer::customers)
        .load(&mut conn)
        .map_err(|err| CustomError::DatabaseError(DbError::QueryBuilderError(err.to_string())))?;

    let summaries: Vec<OrderSummary> = rows.into_iter().map(OrderSummary::from).collect();
    Ok(HttpResponse::Ok().json(summaries))
}

/******************************************/
// New order creation route
/******************************************/
/**
 * @route   POST /orders
 * @access  Public
 */
#[instrument(
    name = "Create new order",
    skip(req_order, pool),
    fields(coffee_id = %req_order.coffee_id, customer_id = %req_order.customer_id)
)]
pub async fn create_order(
    pool: web::Data<PgPool>,
    req_order: web::Json<CreateOrderBody>,
) -> Result<HttpResponse, CustomError> {
    let order_data = req_order.into_inner();
    let insert_pool = pool.clone();

    let result = web::block(move || {
        let mut conn = insert_pool
            .get()
            .expect("Failed to get db connection from Pool");
        insert_order(
            &mut conn,
            NewOrder {
                coffee_id: order_data.coffee_id,
                customer_id: order_data.customer_id,
                price: order_data.price,
                customization: order_data.customization,
            },
        )
    })
    .await
    .map_err(|err| CustomError::BlockingError(err.to_string()))?;

    let created = result?;

    let mut conn = pool.get().expect("Failed to get db connection from Pool");
    let row: (Order, Option<Coffee>, Option<Customer>) = order::orders
        .left_join(coffee::coffees)
        .left_join(customer::customers)
        .filter(order::id.eq(created.id))
        .first(&mut conn)
        .map_err(|err| CustomError::DatabaseError(DbError::QueryBuilderError(err.to_string())))?;

    Ok(HttpResponse::Ok().json(OrderRecord::from(row)))
}
