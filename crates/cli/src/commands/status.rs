use std::path::Path;

use rollbook_core::config::{DatabaseDriver, RollbookConfig};
use rollbook_core::db::repository::CountsRepository;
use rollbook_core::db::sqlite::SqliteRepository;
use rollbook_core::db::DatabasePool;
use tracing::info;

/// Run the `status` command: show record counts and database information.
pub async fn run(config_path: &str) -> anyhow::Result<()> {
    let mut config = RollbookConfig::load(Path::new(config_path))?;
    config.apply_env_overrides()?;
    config.validate()?;

    info!("Loaded configuration from {}", config_path);

    let (repo, driver_name, db_size) = match config.rollbook.database.driver {
        DatabaseDriver::Sqlite => {
            let path = config
                .rollbook
                .database
                .path
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("SQLite path not configured"))?;
            let connect_str = format!("sqlite:{}?mode=rwc", path);
            let pool = DatabasePool::new_sqlite(&connect_str).await?;

            let size = std::fs::metadata(path)
                .map(|m| format_bytes(m.len()))
                .unwrap_or_else(|_| "unknown".to_string());

            let DatabasePool::Sqlite(sqlite_pool) = pool;
            let repo = SqliteRepository::new(sqlite_pool);
            (repo, "SQLite", size)
        }
        DatabaseDriver::Postgres => {
            anyhow::bail!("PostgreSQL is not yet supported");
        }
    };

    println!("Rollbook Status");
    println!("===============");
    println!("Instance: {}", config.rollbook.instance_name);
    println!("Database: {} ({})", driver_name, db_size);
    println!();

    let counts = repo.get_record_counts().await?;
    println!("Record Counts");
    println!("-------------");
    println!("Faculty:  {}", counts.faculty);
    println!("Students: {}", counts.students);
    println!("Total:    {}", counts.total);

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * KB;
    const GB: u64 = 1024 * MB;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
