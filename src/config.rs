/// Connection settings for a single invocation.
///
/// Built once by the argument parser of each binary and passed by value
/// downstream; never mutated afterwards. An empty string means the flag was
/// not provided: an empty `username` disables authentication and an empty
/// `keyspace` leaves the session unscoped.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Contact point, either a bare hostname/IP or a `host:port` pair.
    pub host: String,
    pub keyspace: String,
    pub username: String,
    pub password: String,
}
