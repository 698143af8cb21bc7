use crate::helper::{seed_coffee, seed_customer, seed_order, spawn_app};
use claim::assert_err;
use coffee_shop::db::drop_database;
use coffee_shop::models::coffee::insert_coffee;
use serde_json::Value;

#[tokio::test]
async fn duplicate_coffee_name_is_rejected() {
    //arrange
    let app = spawn_app().await;
    let mut conn = app
        .db_pool
        .get()
        .expect("Failed to get db connection from pool");

    //act
    insert_coffee(&mut conn, "Flat White").expect("First coffee insert failed");
    let second = insert_coffee(&mut conn, "Flat White");

    drop_database(&app.database_name);

    //assert
    assert_err!(second);
}

#[tokio::test]
async fn list_coffees_excludes_orders() {
    //arrange
    let app = spawn_app().await;
    let espresso = seed_coffee(&app.db_pool, "Espresso");
    let customer = seed_customer(&app.db_pool, "Nina");
    seed_order(&app.db_pool, espresso.id, customer.id, 4, "oat milk");

    //act
    let response = app
        .api_client
        .get(&format!("{}/coffees", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    //assert
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    drop_database(&app.database_name);

    let coffees = body.as_array().expect("Expected a JSON array");
    assert_eq!(coffees.len(), 1);
    assert_eq!(coffees[0]["id"], espresso.id);
    assert_eq!(coffees[0]["name"], "Espresso");
    assert!(coffees[0].get("orders").is_none());
}

#[tokio::test]
async fn deleting_coffee_cascades_to_its_orders() {
    //arrange
    let app = spawn_app().await;
    let mocha = seed_coffee(&app.db_pool, "Mocha");
    let customer = seed_customer(&app.db_pool, "Ravi");
    seed_order(&app.db_pool, mocha.id, customer.id, 6, "extra shot");

    //act
    let delete_response = app
        .api_client
        .delete(&format!("{}/coffees/{}", &app.address, mocha.id))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(delete_response.status().as_u16(), 204);

    let orders_response = app
        .api_client
        .get(&format!("{}/orders", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    let orders: Value = orders_response.json().await.unwrap();

    // Deleting the same coffee again is a miss
    let second_delete = app
        .api_client
        .delete(&format!("{}/coffees/{}", &app.address, mocha.id))
        .send()
        .await
        .expect("Failed to execute request.");
    let second_delete_status = second_delete.status().as_u16();
    let second_delete_body: Value = second_delete.json().await.unwrap();

    drop_database(&app.database_name);

    //assert
    assert_eq!(orders.as_array().expect("Expected a JSON array").len(), 0);
    assert_eq!(second_delete_status, 404);
    assert_eq!(second_delete_body["error"], "Coffee not found");
}
