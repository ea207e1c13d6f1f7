use std::process::exit;
use clap::Parser;
use log::{error, info};
use sea_query::Value;
use tokio::runtime::Builder;
use sql_registry::common::common::{parse_value, setup_logging};
use sql_registry::config::structs::configuration::Configuration;
use sql_registry::database::database;
use sql_registry::database::structs::connection::Connection;
use sql_registry::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("[ERROR] {}", error);
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            if let Some(engine) = config.default_engine {
                info!("[BOOT] Default engine: {}", engine);
                database::set_default_engine(engine.as_str());
            }

            for db in &config.databases {
                let options = vec![db.log_events.then(Connection::with_log_events)];
                if let Err(error) = database::open(db.engine.as_str(), &db.source, options) {
                    error!("[BOOT] {}", error);
                    exit(1);
                }
            }

            if args.ping {
                for engine in database::registry().engines() {
                    match database::must_get(&engine).ping().await {
                        Ok(_) => info!("[PING] {} is reachable", engine),
                        Err(error) => error!("[PING] {} failed: {}", engine, error),
                    }
                }
            }

            if let Some(sql) = &args.sql {
                let connection = match database::get(args.engine.as_deref().unwrap_or("")) {
                    Ok(connection) => connection,
                    Err(error) => {
                        error!("[SQL] {}", error);
                        exit(1);
                    }
                };
                let values: Vec<Value> = args.args.iter().map(|arg| parse_value(arg)).collect();
                let statement = connection.select_by_sql(sql, values);
                match connection.build_sql(&statement) {
                    Ok(rendered) => println!("{}", rendered),
                    Err(error) => {
                        error!("[SQL] {}", error);
                        exit(1);
                    }
                }
            }

            database::registry().close_all().await;
        });

    Ok(())
}
