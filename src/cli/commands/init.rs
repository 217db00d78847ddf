use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and its schema
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing timeclock…");

    let path = cfg.init_all(cli.test)?;
    if !cli.test {
        println!("📄 Config file : {}", path.display());
    }

    let pool = DbPool::open(&cfg.database)?;
    println!("🗄️  Database   : {}", &cfg.database);

    if cfg.endpoint.is_none() && cfg.jobs_file.is_none() {
        warning("No endpoint configured: set `endpoint` in the configuration file.");
    }

    if let Err(e) = log::ttlog(
        &pool.conn,
        "init",
        "",
        &format!("Database initialized at {}", &cfg.database),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("✅ timeclock initialization completed!");
    Ok(())
}
