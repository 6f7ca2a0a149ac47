//! Server module
//!
//! The `StaticServer` instance (constructor-supplied root, explicit
//! start/stop lifecycle) and the accept/serve loop behind it.

mod listener;

use crate::handler;
use crate::logger;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::io;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

/// Immutable per-server state shared read-only by every connection.
pub struct ServerContext {
    pub root: PathBuf,
    pub access_log: bool,
}

/// A static file server bound to one root directory.
///
/// Root directory and MIME table are fixed for the server's lifetime, so
/// concurrent requests need no coordination beyond the shared `Arc`.
pub struct StaticServer {
    root: PathBuf,
    access_log: bool,
}

impl StaticServer {
    /// Create a server for the given root directory.
    ///
    /// The root is canonicalized once here, so a root supplied through a
    /// symlink is pinned to its real path before any prefix check uses it.
    /// Fails if the root does not exist.
    pub fn new(root: impl AsRef<Path>) -> io::Result<Self> {
        let root = root.as_ref().canonicalize()?;
        Ok(Self {
            root,
            access_log: false,
        })
    }

    #[must_use]
    pub fn with_access_log(mut self, enabled: bool) -> Self {
        self.access_log = enabled;
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Bind `addr` and start serving.
    ///
    /// Port 0 requests an OS-assigned ephemeral port; the concrete bound
    /// address is available on the returned handle.
    pub fn start(self, addr: SocketAddr) -> io::Result<ServerHandle> {
        let listener = listener::create_reusable_listener(addr)?;
        let local_addr = listener.local_addr()?;
        let shutdown = Arc::new(Notify::new());
        let ctx = Arc::new(ServerContext {
            root: self.root,
            access_log: self.access_log,
        });

        let loop_shutdown = Arc::clone(&shutdown);
        let task = tokio::spawn(run_accept_loop(listener, ctx, loop_shutdown));

        Ok(ServerHandle {
            addr: local_addr,
            shutdown,
            task,
        })
    }
}

/// Handle to a running server: the bound address plus lifecycle control.
pub struct ServerHandle {
    addr: SocketAddr,
    shutdown: Arc<Notify>,
    task: JoinHandle<()>,
}

impl ServerHandle {
    #[must_use]
    pub const fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stop accepting connections and release the port.
    ///
    /// In-flight connections finish in their own tasks; awaiting this
    /// guarantees the listener itself is closed.
    pub async fn shutdown(self) {
        self.shutdown.notify_one();
        let _ = self.task.await;
    }
}

async fn run_accept_loop(
    listener: TcpListener,
    ctx: Arc<ServerContext>,
    shutdown: Arc<Notify>,
) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, _peer_addr)) => {
                        handle_connection(stream, Arc::clone(&ctx));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                break;
            }
        }
    }
    // Dropping the listener here releases the port.
}

/// Serve a single connection in a spawned task.
fn handle_connection(stream: tokio::net::TcpStream, ctx: Arc<ServerContext>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| handler::handle_request(req, Arc::clone(&ctx))),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
