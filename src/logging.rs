//src/logging.rs

use std::io::Write;

use log::LevelFilter;

/// Installe le logger de la ligne de commande. `RUST_LOG` garde la priorité.
pub fn setup(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        });

    if builder.try_init().is_err() {
        eprintln!("Logger déjà initialisé");
    }
}
