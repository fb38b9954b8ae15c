//! Log output for the `render_chart_png` binary and other hosts.
//!
//! The library only emits `tracing` events: `debug!` per render pass,
//! `trace!` per stroked series and `warn!` for rejected dataset JSON. Nothing
//! is printed until a subscriber is installed.

/// Installs a compact stderr subscriber for `linechart-rs` events.
///
/// `render_chart_png` calls this on startup so `RUST_LOG=debug` shows the
/// boundary and ratios of each render. The filter comes from `RUST_LOG` and
/// defaults to `info`. Returns `false` when the `telemetry` feature is off or
/// another global subscriber already exists.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
