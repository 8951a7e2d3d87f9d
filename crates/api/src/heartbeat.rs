//! Periodic environment logging.

use std::time::Duration;

use environment::Environment;
use tokio::time::{Instant, interval_at};

/// Spawns a detached task that logs `port` and a fresh environment snapshot
/// every `period`, starting one full period from now.
///
/// There is no stop handle: the task runs until the runtime shuts down.
pub fn spawn<E>(port: String, period: Duration, env: E)
where
    E: Environment + Send + 'static,
{
    tokio::spawn(async move {
        let mut tick = interval_at(Instant::now() + period, period);
        loop {
            tick.tick().await;
            tracing::info!(
                port = %port,
                env = %env.snapshot(),
                "server is running"
            );
        }
    });
}
