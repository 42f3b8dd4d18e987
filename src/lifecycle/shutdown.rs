//! Process shutdown trigger.
//!
//! # Order
//! ```text
//! Shutdown::trigger (signal listener or test)
//!     → HttpServer::run stops accepting
//!     → keep-alive connections finish their current request
//!     → JokeClient::close, exactly once
//!     → main returns
//! ```

use std::future::Future;

use tokio::sync::broadcast;

/// Cloneable handle that fires the stop sequence once.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Future resolving once [`Shutdown::trigger`] is called.
    ///
    /// Subscribes immediately, so a trigger issued before the future is first
    /// polled is not missed.
    pub fn notified(&self) -> impl Future<Output = ()> + Send + 'static {
        let mut rx = self.tx.subscribe();
        async move {
            // Closed or lagged both mean the trigger already fired.
            let _ = rx.recv().await;
        }
    }

    /// Fire the stop sequence. Extra calls are harmless.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
