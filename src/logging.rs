//! `env_logger` setup used by the command-line driver.
use env_logger::fmt::Formatter;
use env_logger::Builder;
use log::{LevelFilter, Record};
use std::io;
use std::io::Write;

const CRATE_TARGET: &str = "matrix_graph";

fn format_record(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    writeln!(
        buf,
        "[{:<5} {}] {}",
        record.level(),
        record.target(),
        record.args()
    )
}

/// Logs everything from this crate at `level` or above. `RUST_LOG` still
/// applies to other targets.
pub fn build_logger_for_level(level: LevelFilter) {
    let mut builder = Builder::from_default_env();
    builder
        .format(format_record)
        .filter(Some(CRATE_TARGET), level)
        .init();
}

/// Honors `RUST_LOG` only.
pub fn build_logger() {
    let mut builder = Builder::from_default_env();
    builder.format(format_record).init();
}
