use cinema_tickets::{run, AppError, Config};
use dotenvy::dotenv;

fn main() {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    if let Err(e) = purchase() {
        log::error!("{}", e);
        std::process::exit(e.exit_code());
    }
}

fn purchase() -> Result<(), AppError> {
    let config = Config::from_env()?;
    log::info!(
        "Processing order from {} (limit {} tickets)",
        config
            .order_file
            .as_ref()
            .map_or_else(|| "stdin".to_string(), |p| p.display().to_string()),
        config.max_tickets
    );

    let receipt = run(&config, std::io::stdin())?;
    println!("{}", serde_json::to_string(&receipt)?);
    Ok(())
}
