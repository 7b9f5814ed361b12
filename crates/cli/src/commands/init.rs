use std::path::Path;

use rollbook_core::config::{
    DatabaseConfig, DatabaseDriver, RollbookConfig, RollbookSection, ServerConfig,
};
use rollbook_core::db::DatabasePool;
use tracing::info;

/// Run the `init` command: create data directory, write default config, and set up the database.
pub async fn run(data_dir: &str) -> anyhow::Result<()> {
    let data_path = Path::new(data_dir);

    if !data_path.exists() {
        std::fs::create_dir_all(data_path)?;
        info!("Created data directory: {}", data_dir);
    }

    let upload_dir = data_path.join("uploads");
    std::fs::create_dir_all(&upload_dir)?;

    let db_path = data_path.join("rollbook.db");
    let db_path_str = db_path.to_string_lossy().to_string();

    let config = RollbookConfig {
        rollbook: RollbookSection {
            instance_name: "My Institution".into(),
            data_dir: data_dir.to_string(),
            upload_dir: None,
            database: DatabaseConfig {
                driver: DatabaseDriver::Sqlite,
                path: Some(db_path_str.clone()),
                url: None,
            },
        },
        server: ServerConfig::default(),
    };

    let config_path = data_path.join("rollbook.toml");
    let toml_str = toml::to_string_pretty(&config)?;
    std::fs::write(&config_path, &toml_str)?;
    info!("Wrote configuration to {}", config_path.display());

    let connect_str = format!("sqlite:{}?mode=rwc", db_path_str);
    DatabasePool::new_sqlite(&connect_str).await?;
    info!("Database initialized at {}", db_path_str);

    println!("Rollbook initialized successfully!");
    println!("  Data directory: {}", data_dir);
    println!("  Configuration:  {}", config_path.display());
    println!("  Database:       {}", db_path_str);
    println!("  Uploads:        {}", upload_dir.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit {} if the defaults need adjusting", config_path.display());
    println!("  2. Run `rollbook serve` to start the API");
    println!("  3. Run `rollbook import --kind faculty records.csv` to bulk-load records");

    Ok(())
}
