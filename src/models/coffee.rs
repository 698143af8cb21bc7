use crate::errors::custom::{CustomError, DbError};
use crate::schema::coffees::dsl as coffee;
use diesel::prelude::*;
use serde::Serialize;

#[derive(Debug, Queryable)]
pub struct Coffee {
    pub id: i32,
    pub name: String,
}

/// A coffee rendered without its order list.
#[derive(Debug, Serialize)]
pub struct CoffeeRecord {
    pub id: i32,
    pub name: String,
}

impl From<Coffee> for CoffeeRecord {
    fn from(entity: Coffee) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

/******************************************/
// Inserting a coffee with a unique name
/******************************************/
pub fn insert_coffee(conn: &mut PgConnection, new_name: &str) -> Result<Coffee, CustomError> {
    // Scan-then-insert: not atomic with the write, so two concurrent
    // creations with the same name can race
    let existing_names: Vec<String> = coffee::coffees
        .select(coffee::name)
        .load(conn)
        .map_err(|err| CustomError::DatabaseError(DbError::QueryBuilderError(err.to_string())))?;

    if existing_names.iter().any(|existing| existing == new_name) {
        return Err(CustomError::ValidationError(format!(
            "Coffee name {} is already taken.",
            new_name
        )));
    }

    diesel::insert_into(coffee::coffees)
        .values(coffee::name.eq(new_name))
        .get_result(conn)
        .map_err(|err| CustomError::DatabaseError(DbError::InsertionError(err.to_string())))
}
