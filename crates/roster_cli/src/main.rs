//! Import driver for the roster store.
//!
//! Usage: `roster_cli <db-path> <snapshot-dir> <salt> <salt-position>`
//!
//! Opens (and migrates) the database, then applies the next pending
//! snapshot version for each logical table. Set `ROSTER_LOG_DIR` to write
//! file logs.

use roster_core::{
    default_log_level, init_logging, open_db, FsSnapshotSource, ImportConfig, ImportService,
    GROUP_TABLE, STUDENT_TABLE, TEACHER_TABLE,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [db_path, snapshot_dir, salt, salt_position] = match args.as_slice() {
        [a, b, c, d] => [a, b, c, d],
        _ => {
            eprintln!("usage: roster_cli <db-path> <snapshot-dir> <salt> <salt-position>");
            return ExitCode::FAILURE;
        }
    };

    let salt_position: usize = match salt_position.parse() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("salt-position must be a non-negative integer");
            return ExitCode::FAILURE;
        }
    };

    if let Ok(log_dir) = std::env::var("ROSTER_LOG_DIR") {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let conn = match open_db(db_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open database `{db_path}`: {err}");
            return ExitCode::FAILURE;
        }
    };

    let service = ImportService::new(
        &conn,
        FsSnapshotSource::new(snapshot_dir.as_str()),
        ImportConfig {
            salt: salt.clone(),
            salt_position,
        },
    );

    let runs = [
        (TEACHER_TABLE, service.import_teachers()),
        (STUDENT_TABLE, service.import_students()),
        (GROUP_TABLE, service.import_groups()),
    ];

    let mut failed = false;
    for (table, result) in runs {
        match result {
            Ok(()) => println!("import table={table} status=ok"),
            Err(err) => {
                failed = true;
                eprintln!("import table={table} status=error error={err}");
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
