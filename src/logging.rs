//! `tracing` subscriber setup.
//!
//! In the browser `tracing-web` forwards every formatted event to the devtools
//! console at the matching level. Natively the same formatter writes to
//! stderr. Initialization is idempotent.

use tracing::Level;

/// Install the subscriber at `INFO`.
pub fn init() {
    init_with_level(Level::INFO);
}

/// Install the subscriber with a maximum level. Later calls are no-ops.
pub fn init_with_level(level: Level) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    #[cfg(target_arch = "wasm32")]
    let result = builder
        .with_ansi(false)
        .without_time()
        .with_writer(tracing_web::MakeWebConsoleWriter::new())
        .try_init();

    #[cfg(not(target_arch = "wasm32"))]
    let result = builder.with_writer(std::io::stderr).try_init();

    // Err only means a global subscriber is already installed.
    let _ = result;
}

/// Parse a level name (`error`, `warn`, `info`, `debug`, `trace`).
pub fn parse_level(name: &str) -> Option<Level> {
    name.trim().parse().ok()
}
