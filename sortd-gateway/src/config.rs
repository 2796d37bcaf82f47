//! Command-line and environment configuration for the gateway binary.

use std::{net::SocketAddr, num::NonZeroUsize};

use clap::{Parser, ValueEnum};
use sortd_executor::FanOut;

use crate::routes::RouteTable;

/// Default `tracing` filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "sortd_gateway=info,tower_http=info";

/// Gateway settings. Every flag falls back to an environment variable.
#[derive(Debug, Clone, Parser)]
#[command(name = "sortd-gateway", about = "Batch integer sort service", long_about = None)]
pub struct GatewayConfig {
    /// Address to listen on.
    #[arg(long, env = "SORTD_LISTEN_ADDR", default_value = "0.0.0.0:8000")]
    pub listen_addr: SocketAddr,

    /// Fan-out policy of `/process-concurrent`.
    #[arg(long, env = "SORTD_FAN_OUT", value_enum, default_value = "bounded")]
    pub fan_out: FanOutMode,

    /// Worker pool size for the bounded policy. Defaults to the available
    /// parallelism. Ignored when unbounded.
    #[arg(long, env = "SORTD_WORKERS")]
    pub workers: Option<NonZeroUsize>,
}

/// Command-line spelling of [`FanOut`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FanOutMode {
    /// Cap concurrent sort tasks at `--workers`.
    Bounded,
    /// One task per sequence, no cap.
    Unbounded,
}

impl GatewayConfig {
    /// Resolve the configured fan-out policy.
    #[must_use]
    pub fn fan_out(&self) -> FanOut {
        match (self.fan_out, self.workers) {
            (FanOutMode::Unbounded, _) => FanOut::Unbounded,
            (FanOutMode::Bounded, Some(workers)) => FanOut::bounded(workers),
            (FanOutMode::Bounded, None) => FanOut::available_parallelism(),
        }
    }

    /// Build the route table served by [`crate::routes::create_router`].
    #[must_use]
    pub fn build_route_table(&self) -> RouteTable {
        if self.fan_out == FanOutMode::Unbounded && self.workers.is_some() {
            tracing::warn!("--workers is ignored with --fan-out unbounded");
        }
        RouteTable::with_fan_out(self.fan_out())
    }
}
