//! Cooperative stop signal for the driver loop.

use tokio::sync::watch;

/// Create a linked trigger and shutdown signal.
pub fn shutdown_channel() -> (ShutdownTrigger, Shutdown) {
    let (tx, rx) = watch::channel(false);
    (ShutdownTrigger { tx }, Shutdown { rx })
}

/// Asks the driver to stop.
#[derive(Debug)]
pub struct ShutdownTrigger {
    tx: watch::Sender<bool>,
}

impl ShutdownTrigger {
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }
}

/// Observed by the driver between writes and during pacing.
#[derive(Debug, Clone)]
pub struct Shutdown {
    rx: watch::Receiver<bool>,
}

impl Shutdown {
    /// A signal that never fires.
    pub fn never() -> Self {
        let (_tx, rx) = watch::channel(false);
        Self { rx }
    }

    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once triggered. Pends forever if the trigger was dropped
    /// without firing.
    pub async fn wait(&self) {
        let mut rx = self.rx.clone();
        let fired = rx.wait_for(|stop| *stop).await.map(|_| ());
        if fired.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn trigger_wakes_waiter() {
        let (trigger, shutdown) = shutdown_channel();
        assert!(!shutdown.is_triggered());

        let waiter = tokio::spawn({
            let shutdown = shutdown.clone();
            async move { shutdown.wait().await }
        });
        trigger.trigger();

        waiter.await.unwrap();
        assert!(shutdown.is_triggered());
    }

    #[tokio::test(start_paused = true)]
    async fn never_does_not_fire() {
        let shutdown = Shutdown::never();
        let result = tokio::time::timeout(Duration::from_secs(60), shutdown.wait()).await;
        assert!(result.is_err());
        assert!(!shutdown.is_triggered());
    }
}
