//! Process shutdown signals.

use tokio::signal;
use tokio_util::sync::CancellationToken;

/// Completes when SIGTERM or SIGINT (Ctrl+C) is received.
#[cfg(unix)]
pub async fn shutdown_signal() -> std::io::Result<()> {
    let mut term = signal::unix::signal(signal::unix::SignalKind::terminate())?;
    let mut interrupt = signal::unix::signal(signal::unix::SignalKind::interrupt())?;

    tokio::select! {
        _ = term.recv() => {},
        _ = interrupt.recv() => {},
    }
    Ok(())
}

/// Completes when Ctrl+C is received.
#[cfg(not(unix))]
pub async fn shutdown_signal() -> std::io::Result<()> {
    signal::ctrl_c().await
}

/// Spawn a task that cancels the returned token on the first shutdown signal.
pub fn cancel_on_signal() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        if let Err(e) = shutdown_signal().await {
            tracing::warn!("Failed to listen for shutdown signals: {}", e);
            return;
        }
        tracing::info!("Shutdown signal received, stopping after the current cycle");
        trigger.cancel();
    });
    token
}
