//! Logging initialization

fn builder() -> env_logger::Builder {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
}

/// Initialize the logging system.
///
/// Uses env_logger with default filter level of `info`.
/// Override with RUST_LOG environment variable, e.g.
/// `RUST_LOG=regionscan=trace` to see every skipped cell.
///
/// # Example
/// ```
/// regionscan::core::logging::init();
/// log::info!("Scanner ready");
/// ```
pub fn init() {
    builder().init();
}

/// Like [`init`], but returns `false` instead of panicking when a logger
/// is already installed. Safe to call from tests and benches repeatedly.
pub fn try_init() -> bool {
    builder().is_test(cfg!(test)).try_init().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_init_twice() {
        try_init();
        // A logger is installed by now, so a second attempt must not panic
        assert!(!try_init());
    }
}
