//! Tracing setup for hosts embedding `chart-options`.
//!
//! Setup stays explicit and opt-in: call `init_tracing` from a binary, or
//! install your own `tracing` subscriber and filters instead.

/// Installs a compact `tracing` subscriber when the `telemetry` feature is
/// enabled, honoring `RUST_LOG` and falling back to `info`.
///
/// Returns `false` when the feature is disabled or when the host already set
/// a global subscriber.
#[must_use]
pub fn init_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
