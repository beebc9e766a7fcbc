use service::config::Config;

mod controller;
pub mod error;
mod middleware;
mod params;
pub mod router;
pub mod server;

pub use error::{Error, Result};
pub use params::user::LookupCommand;
pub use server::{shutdown_signal, LifecycleState, Server};

/// Builds the HTTP server for the configured interface and port. The server
/// is not listening until [`Server::start`] is called.
pub fn init_server(config: &Config) -> Server {
    Server::new(config.listen_addr(), router::define_routes())
}
