//! Runs a single CQL statement against a Scylla/Cassandra cluster.
//!
//! The statement is taken from the `-e`/`--execute` flag; host and port are
//! positional with sensible defaults. Exit code is 0 on success and 1 on an
//! empty query, a connection failure, or an execution failure.

use std::process::ExitCode;

use clap::Parser;

use cql_tools::config::ConnectionConfig;
use cql_tools::db;

/// Execute a single CQL statement.
///
/// If the username flag is not provided, authentication is not used.
#[derive(Debug, Parser)]
#[command(name = "cqlsh")]
struct Args {
    /// Authenticate as user. May be empty.
    #[arg(short, long, default_value = "")]
    username: String,

    /// Authenticate using password. May be empty.
    #[arg(short, long, default_value = "")]
    password: String,

    /// CQL statement to execute.
    #[arg(short, long, default_value = "")]
    execute: String,

    /// Connect to defined keyspace. May be empty.
    #[arg(short, long, default_value = "")]
    keyspace: String,

    /// Host name of the machine on which the server is running.
    #[arg(value_name = "HOST", default_value = "localhost")]
    host: String,

    /// Port on which the server is listening.
    #[arg(value_name = "PORT", default_value = "9042")]
    port: String,
}

/// Joins the two positionals into the contact point handed to the driver.
fn contact_point(host: &str, port: &str) -> String {
    format!("{host}:{port}")
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    run(Args::parse()).await
}

async fn run(args: Args) -> ExitCode {
    if args.execute.is_empty() {
        eprintln!("Query is empty.");
        return ExitCode::FAILURE;
    }

    let config = ConnectionConfig {
        host: contact_point(&args.host, &args.port),
        keyspace: args.keyspace,
        username: args.username,
        password: args.password,
    };

    let session = match db::connect(&config).await {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Connection to '{}' failed: {e}.", config.host);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = db::execute(&session, &args.execute).await {
        eprintln!("Query failed: {e}.");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
