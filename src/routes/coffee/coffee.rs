use crate::db::PgPool;
use crate::errors::custom::{CustomError, DbError};
use crate::models::coffee::{Coffee, CoffeeRecord};
use crate::schema::coffees::dsl as coffee;
use actix_web::{web, HttpResponse};
use diesel::prelude::*;
use tracing::instrument;

/******************************************/
// Listing all coffees
/******************************************/
/**
 * @route   GET /coffees
 * @access  Public
 */
#[instrument(name = "List all coffees", skip(pool))]
pub async fn list_coffees(pool: web::Data<PgPool>) -> Result<HttpResponse, CustomError> {
    let mut conn = pool.get().expect("Failed to get db connection from Pool");

    let rows: Vec<Coffee> = coffee::coffees
        .load(&mut conn)
        .map_err(|err| CustomError::DatabaseError(DbError::QueryBuilderError(err.to_string())))?;

    let records: Vec<CoffeeRecord> = rows.into_iter().map(CoffeeRecord::from).collect();
    Ok(HttpResponse::Ok().json(records))
}

/******************************************/
// Deleting a coffee by id
/******************************************/
/**
 * @route   DELETE /coffees/{id}
 * @access  Public
 */
#[instrument(name = "Delete coffee", skip(pool))]
pub async fn delete_coffee(
    pool: web::Data<PgPool>,
    coffee_id: web::Path<i32>,
) -> Result<HttpResponse, CustomError> {
    let pool = pool.clone();
    let coffee_id = coffee_id.into_inner();

    // The orders owned by this coffee go with it, via ON DELETE CASCADE
    let result = web::block(move || {
        let mut conn = pool.get().expect("Failed to get db connection from Pool");
        diesel::delete(coffee::coffees.filter(coffee::id.eq(coffee_id)))
            .execute(&mut conn)
            .map_err(|err| CustomError::DatabaseError(DbError::DeletionError(err.to_string())))
    })
    .await
    .map_err(|err| CustomError::BlockingError(err.to_string()))?;

    let deleted = result?;
    if deleted == 0 {
        return Err(CustomError::NotFound("Coffee".to_string()));
    }
    Ok(HttpResponse::NoContent().finish())
}
