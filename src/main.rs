use coffee_shop::config::configuration;
use coffee_shop::db::establish_connection;
use coffee_shop::startup::Application;
use coffee_shop::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("coffee_shop".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = configuration::Settings::new().expect("Failed to load configurations");
    let pool = establish_connection(&config.database.url);
    let port = 5555;

    let application = Application::build(port, pool).await?;
    application.run_until_stopped().await?;
    Ok(())
}
