use log::{debug, info};
use scylla::client::session::Session;
use scylla::client::session_builder::SessionBuilder;

use crate::config::ConnectionConfig;
use crate::error::CqlError;

/// Translates the connection settings into a driver session builder.
///
/// The contact point is always set. Plain-text authentication is enabled
/// only when a username is present (an empty password is allowed and passed
/// through as-is), and a keyspace is selected only when one was given.
pub fn session_builder(config: &ConnectionConfig) -> SessionBuilder {
    let mut builder = SessionBuilder::new().known_node(&config.host);
    if !config.username.is_empty() {
        builder = builder.user(&config.username, &config.password);
    }
    if !config.keyspace.is_empty() {
        builder = builder.use_keyspace(&config.keyspace, false);
    }
    builder
}

/// Opens a session to the cluster described by `config`.
///
/// The handshake is delegated entirely to the driver; any failure
/// (unreachable host, rejected credentials, protocol mismatch) comes back
/// as a single [`CqlError::Session`]. The caller owns the session and
/// releases it by drop.
pub async fn connect(config: &ConnectionConfig) -> Result<Session, CqlError> {
    debug!("Opening session to {}", config.host);
    let session = session_builder(config).build().await?;
    info!("Connected to {}", config.host);
    Ok(session)
}

/// Submits one CQL statement and reports success or failure.
///
/// The statement is sent unprepared and unpaged; any rows the server
/// returns are discarded.
pub async fn execute(session: &Session, query: &str) -> Result<(), CqlError> {
    debug!("Executing statement: {query}");
    session.query_unpaged(query, &[]).await?;
    Ok(())
}
