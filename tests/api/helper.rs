use diesel::prelude::*;
use diesel_migrations::{embed_migrations, EmbeddedMigrations};
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

use coffee_shop::db::{create_database, PgPool};
use coffee_shop::models::coffee::{insert_coffee, Coffee};
use coffee_shop::models::customer::{insert_customer, Customer};
use coffee_shop::models::order::{insert_order, NewOrder, Order};
use coffee_shop::startup::Application;
use coffee_shop::telemetry::{get_subscriber, init_subscriber};
use diesel::r2d2::{ConnectionManager, Pool};
use diesel_migrations::MigrationHarness;
use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;
use uuid::Uuid;

static TRACING: Lazy<()> = Lazy::new(|| {
    dotenv().ok();
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    // We cannot assign the output of `get_subscriber` to a variable based on the value of `TEST_LOG`
    // because the sink is part of the type returned by `get_subscriber`, therefore they are not the
    // same type. We could work around it, but this is the most straight-forward way of moving forward.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    };
});

pub struct TestApp {
    pub port: u16,
    pub address: String,
    pub db_pool: PgPool,
    pub database_name: String,
    pub api_client: reqwest::Client,
}

pub fn run_db_migrations(conn: &mut impl MigrationHarness<diesel::pg::Pg>) {
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Could not run migrations");
}

pub async fn spawn_app() -> TestApp {
    // To Ensure that the tracing stack is only initialized once
    Lazy::force(&TRACING);

    dotenv().ok();
    let database_name = Uuid::new_v4().to_string();
    let database_url = env::var("DATABASE_TEST_URL").expect("DATABASE_TEST_URL must be set");
    create_database(&database_name);

    let new_database_url = format!("{}/{}", database_url, database_name);
    let manager = ConnectionManager::<PgConnection>::new(new_database_url.clone());
    let pool = Pool::builder()
        .build(manager)
        .expect("Failed to create pool.");
    // Run migrations
    let mut conn = pool.get().expect("Couldn't get db connection from Pool");
    run_db_migrations(&mut conn);

    let application = Application::build(0, pool.clone())
        .await
        .expect("Failed to build application");
    let application_port = application.port();
    let address = format!("http://127.0.0.1:{}", application_port);
    let _ = tokio::spawn(application.run_until_stopped());

    let client = reqwest::Client::new();

    TestApp {
        port: application_port,
        address,
        db_pool: pool,
        database_name,
        api_client: client,
    }
}

/******************************************/
// Seeding helpers for the three entities
/******************************************/
pub fn seed_coffee(pool: &PgPool, name: &str) -> Coffee {
    let mut conn = pool.get().expect("Failed to get db connection from pool");
    insert_coffee(&mut conn, name).expect("Failed to create test coffee.")
}

pub fn seed_customer(pool: &PgPool, name: &str) -> Customer {
    let mut conn = pool.get().expect("Failed to get db connection from pool");
    insert_customer(&mut conn, name).expect("Failed to create test customer.")
}

pub fn seed_order(
    pool: &PgPool,
    coffee_id: i32,
    customer_id: i32,
    price: i32,
    customization: &str,
) -> Order {
    let mut conn = pool.get().expect("Failed to get db connection from pool");
    insert_order(
        &mut conn,
        NewOrder {
            coffee_id,
            customer_id,
            price,
            customization: customization.to_string(),
        },
    )
    .expect("Failed to create test order.")
}
