//! Signal handling for the consumer's orderly shutdown
//!
//! The handlers are installed eagerly so a failure to register them is
//! reported before the consumer joins its group. The returned future
//! resolves on the first interrupt or termination request.

use log::info;
use std::fmt;
use std::future::Future;

/// The type of shutdown signal received
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    /// SIGINT - User interrupt (Ctrl+C)
    Interrupt,
    /// SIGTERM - Termination request (kill, Kubernetes, Docker)
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownSignal::Interrupt => write!(f, "SIGINT (Ctrl+C)"),
            ShutdownSignal::Terminate => write!(f, "SIGTERM"),
        }
    }
}

#[cfg(unix)]
pub fn install_shutdown_signal() -> std::io::Result<impl Future<Output = ShutdownSignal>> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    Ok(async move {
        let received = tokio::select! {
            _ = sigint.recv() => ShutdownSignal::Interrupt,
            _ = sigterm.recv() => ShutdownSignal::Terminate,
        };
        info!("Received {} - initiating graceful shutdown", received);
        received
    })
}

/// Windows-compatible shutdown signal handler (only handles Ctrl+C)
#[cfg(not(unix))]
pub fn install_shutdown_signal() -> std::io::Result<impl Future<Output = ShutdownSignal>> {
    Ok(async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::warn!("Ctrl+C handler failed: {}", e);
        }
        info!("Received Ctrl+C - initiating graceful shutdown");
        ShutdownSignal::Interrupt
    })
}
