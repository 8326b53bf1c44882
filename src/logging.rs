use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

/// Level for a `-v` occurrence count: warnings by default, then info, debug
/// and trace.
pub fn level_for_verbosity(verbosity: u64) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs a stderr logger whose lines start with `c`, so they read as
/// comments of the edge list format. `RUST_LOG` overrides the level derived
/// from `verbosity`.
pub fn init_cli_logger(verbosity: u64) {
    let default = level_for_verbosity(verbosity).to_string().to_lowercase();
    Builder::from_env(Env::default().default_filter_or(default))
        .format(|buf, record| {
            writeln!(
                buf,
                "c {:<5} {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
