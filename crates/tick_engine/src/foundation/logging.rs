//! Process-wide logger setup
//!
//! The runtime itself reports through injected
//! [`DiagnosticSink`](crate::diagnostics::DiagnosticSink)s;
//! [`LogSink`](crate::diagnostics::LogSink) bridges that stream onto
//! the `log` facade. Hosts call [`init`] once at startup so the
//! bridged records actually appear somewhere.

/// Initialize the global logger
///
/// Honors `RUST_LOG` and falls back to `info` so the diagnostic
/// stream is visible without configuration. Safe to call more than
/// once; later calls are ignored.
pub fn init() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
