//! Server traits for lifecycle management
//!
//! The [`Server`] trait gives every server implementation the same run
//! contract: bind, serve until the shutdown token is cancelled, drain, and
//! return. [`ServerExt`] adds the common spawn/run patterns on top.

use async_trait::async_trait;
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;

use crate::error::Result;

/// Core server trait.
#[async_trait]
pub trait Server: Send + Sync + 'static {
    /// Name for logging and identification (e.g. "http").
    fn name(&self) -> &str;

    /// Address the server is bound to, if running.
    fn address(&self) -> Option<SocketAddr>;

    /// True while the server is accepting connections.
    fn is_running(&self) -> bool;

    /// Run until the shutdown token is cancelled.
    ///
    /// Implementations bind to their configured address, serve requests
    /// until `shutdown` fires, then drain existing connections before
    /// returning.
    async fn run(&self, shutdown: CancellationToken) -> Result<()>;
}

/// Extension trait providing convenience methods for servers.
pub trait ServerExt: Server + Sized {
    /// Spawn the server on a new task.
    ///
    /// Returns the join handle and the token that triggers shutdown.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let (handle, token) = server.spawn();
    /// // ... later ...
    /// token.cancel();
    /// handle.await??;
    /// ```
    fn spawn(self) -> (tokio::task::JoinHandle<Result<()>>, CancellationToken) {
        let token = CancellationToken::new();
        let token_clone = token.clone();
        let handle = tokio::spawn(async move { self.run(token_clone).await });
        (handle, token)
    }

    /// Run the server until Ctrl+C (SIGINT) triggers graceful shutdown.
    fn run_with_ctrl_c(self) -> impl std::future::Future<Output = Result<()>> + Send {
        async move {
            let shutdown = crate::shutdown::ShutdownController::with_ctrl_c();
            self.run(shutdown.token()).await
        }
    }
}

// Blanket implementation for all Server types
impl<T: Server + Sized> ServerExt for T {}
