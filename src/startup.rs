use crate::db::PgPool;
use crate::routes::{
    coffee::coffee::{delete_coffee, list_coffees},
    customer::customer::get_customer,
    health_check::health_check,
    index::index,
    order::order::{create_order, list_orders},
};
use actix_web::{dev::Server, web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

/**************************************************************/
// Application state to reuse the same code in main and tests
/***************************************************************/
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(port: u16, pool: PgPool) -> Result<Self, std::io::Error> {
        let listener = if port == 0 {
            TcpListener::bind("127.0.0.1:0")?
        } else {
            let address = format!("127.0.0.1:{}", port);
            TcpListener::bind(&address)?
        };

        let actual_port = listener.local_addr()?.port();

        let server = run_server(listener, pool.clone()).await?;
        Ok(Self {
            port: actual_port,
            server,
        })
    }
    pub fn port(&self) -> u16 {
        self.port
    }
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

/******************************************/
// Running server
/******************************************/
pub async fn run_server(listener: TcpListener, pool: PgPool) -> Result<Server, std::io::Error> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(pool.clone()))
            .route("/", web::get().to(index))
            .route("/health_check", web::get().to(health_check))
            .route("/coffees", web::get().to(list_coffees))
            .route("/coffees/{id}", web::delete().to(delete_coffee))
            .route("/customers/{id}", web::get().to(get_customer))
            .route("/orders", web::get().to(list_orders))
            .route("/orders", web::post().to(create_order))
    })
    .listen(listener)?
    .run();
    Ok(server)
}
