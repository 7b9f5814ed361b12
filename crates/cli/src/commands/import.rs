use std::path::Path;
use std::time::Instant;

use rollbook_core::bulk_csv;
use rollbook_core::config::{DatabaseDriver, RollbookConfig};
use rollbook_core::db::repository::{FacultyRepository, StudentRepository};
use rollbook_core::db::sqlite::SqliteRepository;
use rollbook_core::db::DatabasePool;
use tracing::info;

/// Record kind accepted by the `import` command.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum RecordKind {
    Faculty,
    Students,
}

/// Run the `import` command: read a CSV file and persist its records.
pub async fn run(config_path: &str, kind: RecordKind, file: &str) -> anyhow::Result<()> {
    let mut config = RollbookConfig::load(Path::new(config_path))?;
    config.apply_env_overrides()?;
    config.validate()?;

    info!("Loaded configuration from {}", config_path);

    let csv_path = Path::new(file);
    println!("Reading CSV from: {}", csv_path.display());

    let pool = match config.rollbook.database.driver {
        DatabaseDriver::Sqlite => {
            let path = config
                .rollbook
                .database
                .path
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("SQLite path not configured"))?;
            let connect_str = format!("sqlite:{}?mode=rwc", path);
            DatabasePool::new_sqlite(&connect_str).await?
        }
        DatabaseDriver::Postgres => {
            anyhow::bail!("PostgreSQL is not yet supported");
        }
    };

    let repo = match pool {
        DatabasePool::Sqlite(p) => SqliteRepository::new(p),
    };

    let start = Instant::now();
    let inserted = match kind {
        RecordKind::Faculty => {
            let records = bulk_csv::read_faculty_csv(csv_path)?;
            println!("Parsed {} faculty rows", records.len());
            repo.insert_faculty_batch(&records).await?
        }
        RecordKind::Students => {
            let records = bulk_csv::read_student_csv(csv_path)?;
            println!("Parsed {} student rows", records.len());
            repo.insert_student_batch(&records).await?
        }
    };

    println!(
        "Import completed in {:.1}s: {} records inserted",
        start.elapsed().as_secs_f64(),
        inserted
    );

    Ok(())
}
