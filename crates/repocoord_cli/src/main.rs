//! CLI demo entry point.
//!
//! # Responsibility
//! - Open a database, build a coordinator, run one transactional unit.
//! - Print the identifier assigned to the created entity.
//!
//! Usage: `repocoord_cli [DB_PATH] [LOG_DIR]` (in-memory database when
//! `DB_PATH` is omitted; no file logging when `LOG_DIR` is omitted).

use repocoord_core::db::{open_db, open_db_in_memory};
use repocoord_core::{
    default_log_level, init_logging, OtpxEntity, RepoError, RepositoryCoordinator, XptoEntity,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(id) => {
            println!("xpto id={id}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("repocoord_cli: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<u64, String> {
    let mut args = std::env::args().skip(1);
    let db_path = args.next();

    if let Some(log_dir) = args.next() {
        init_logging(default_log_level(), &log_dir).map_err(|err| err.to_string())?;
    }

    let conn = match db_path.as_deref() {
        Some(path) => open_db(path),
        None => open_db_in_memory(),
    }
    .map_err(|err| err.to_string())?;

    let coordinator = RepositoryCoordinator::new(&conn);
    let mut xpto = XptoEntity::new("demo");

    coordinator
        .run_in_transaction(|scope| -> Result<(), RepoError> {
            scope.xpto_repository().create(&mut xpto)?;
            scope
                .otpx_repository()
                .update(OtpxEntity::new(format!("last xpto {}", xpto.id)))?;
            Ok(())
        })
        .map_err(|err| err.to_string())?;

    log::info!("event=cli_demo module=cli status=ok xpto_id={}", xpto.id);
    Ok(xpto.id)
}
