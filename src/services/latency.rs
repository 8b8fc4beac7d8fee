// Simulated processing latency
// An explicit, cancellable wait run by the caller before scoring.

use crate::error::{AppError, AppResult};
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info};

/// Sender side of a cancellation signal.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        // No receivers left means nothing is waiting.
        let _ = self.tx.send(true);
    }
}

pub fn cancel_pair() -> (CancelHandle, watch::Receiver<bool>) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, rx)
}

/// Sleep for `duration` unless cancelled first. A dropped handle means the
/// wait can no longer be cancelled and runs to completion.
pub async fn simulate_latency(duration: Duration, mut cancel: watch::Receiver<bool>) -> AppResult<()> {
    if *cancel.borrow_and_update() {
        return Err(AppError::Cancelled);
    }
    if duration.is_zero() {
        return Ok(());
    }

    debug!(delay_ms = duration.as_millis() as u64, "latency.start");
    let sleep = tokio::time::sleep(duration);
    tokio::pin!(sleep);

    loop {
        tokio::select! {
            _ = &mut sleep => {
                debug!("latency.elapsed");
                return Ok(());
            }
            changed = cancel.changed() => {
                if changed.is_err() {
                    (&mut sleep).await;
                    return Ok(());
                }
                if *cancel.borrow_and_update() {
                    info!("latency.cancelled");
                    return Err(AppError::Cancelled);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_zero_duration_returns_immediately() {
        let (_handle, rx) = cancel_pair();
        assert!(simulate_latency(Duration::ZERO, rx).await.is_ok());
    }

    #[tokio::test]
    async fn test_completes_without_cancel() {
        let (_handle, rx) = cancel_pair();
        assert!(simulate_latency(Duration::from_millis(10), rx).await.is_ok());
    }

    #[tokio::test]
    async fn test_cancel_interrupts_wait() {
        let (handle, rx) = cancel_pair();
        let task = tokio::spawn(simulate_latency(Duration::from_secs(30), rx));
        tokio::time::sleep(Duration::from_millis(20)).await;
        handle.cancel();
        let result = task.await.unwrap();
        assert!(matches!(result, Err(AppError::Cancelled)));
    }

    #[tokio::test]
    async fn test_already_cancelled() {
        let (handle, rx) = cancel_pair();
        handle.cancel();
        let result = simulate_latency(Duration::from_secs(30), rx).await;
        assert!(matches!(result, Err(AppError::Cancelled)));
    }

    #[tokio::test]
    async fn test_dropped_handle_still_completes() {
        let (handle, rx) = cancel_pair();
        drop(handle);
        assert!(simulate_latency(Duration::from_millis(10), rx).await.is_ok());
    }
}
