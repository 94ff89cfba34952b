//! Runs a single CQL statement against a Scylla/Cassandra cluster.
//!
//! The statement is taken from the first positional argument. Exit code is
//! 0 on success and 1 on an empty query, a connection failure, or an
//! execution failure.

use std::process::ExitCode;

use clap::Parser;

use cql_tools::config::ConnectionConfig;
use cql_tools::db;

/// Execute a single CQL statement.
///
/// If the username flag is not provided, authentication is not used.
#[derive(Debug, Parser)]
#[command(name = "cql", disable_help_flag = true)]
struct Args {
    /// Specifies the host name of the machine on which the server is running.
    #[arg(short = 'h', long, default_value = "127.0.0.1")]
    host: String,

    /// Authenticate as user. May be empty.
    #[arg(short, long, default_value = "")]
    username: String,

    /// Authenticate using password. May be empty.
    #[arg(short, long, default_value = "")]
    password: String,

    /// Connect to defined keyspace. May be empty.
    #[arg(short, long, default_value = "")]
    keyspace: String,

    /// Prints additional information about command running.
    #[arg(short, long)]
    verbose: bool,

    /// CQL statement to execute.
    #[arg(value_name = "QUERY")]
    query: Option<String>,

    /// Show this message.
    #[arg(long, action = clap::ArgAction::Help)]
    help: Option<bool>,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    run(Args::parse()).await
}

async fn run(args: Args) -> ExitCode {
    let query = args.query.unwrap_or_default();
    if query.is_empty() {
        eprintln!("Query is empty.");
        return ExitCode::FAILURE;
    }

    let config = ConnectionConfig {
        host: args.host,
        keyspace: args.keyspace,
        username: args.username,
        password: args.password,
    };

    if args.verbose {
        println!(
            "Connecting to '{}' and keyspace '{}' as user:'{}'",
            config.host, config.keyspace, config.username
        );
    }
    let session = match db::connect(&config).await {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Connection to '{}' failed: {e}.", config.host);
            return ExitCode::FAILURE;
        }
    };
    if args.verbose {
        println!("Connected to '{}'.", config.host);
    }

    if args.verbose {
        println!("Executing query \"{query}\"");
    }
    if let Err(e) = db::execute(&session, &query).await {
        eprintln!("Query failed: {e}.");
        return ExitCode::FAILURE;
    }
    if args.verbose {
        println!("Query successful executed.");
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_with_only_a_query() {
        let args = Args::try_parse_from(["cql", "SELECT * FROM t"]).unwrap();
        assert_eq!(args.host, "127.0.0.1");
        assert_eq!(args.username, "");
        assert_eq!(args.password, "");
        assert_eq!(args.keyspace, "");
        assert!(!args.verbose);
        assert_eq!(args.query.as_deref(), Some("SELECT * FROM t"));
    }

    #[test]
    fn short_h_means_host_not_help() {
        let args = Args::try_parse_from(["cql", "-h", "scylla:9042", "SELECT 1"]).unwrap();
        assert_eq!(args.host, "scylla:9042");
    }

    #[test]
    fn long_flags_are_recognized() {
        let args = Args::try_parse_from([
            "cql",
            "--host",
            "db.example.com",
            "--username",
            "cassandra",
            "--password",
            "cassandra",
            "--keyspace",
            "ks",
            "--verbose",
            "DROP TABLE ks.t",
        ])
        .unwrap();
        assert_eq!(args.host, "db.example.com");
        assert_eq!(args.username, "cassandra");
        assert_eq!(args.password, "cassandra");
        assert_eq!(args.keyspace, "ks");
        assert!(args.verbose);
    }

    #[test]
    fn query_is_optional_at_parse_time() {
        // The missing-query case is reported by run(), not by clap,
        // so the exit code stays 1.
        let args = Args::try_parse_from(["cql"]).unwrap();
        assert_eq!(args.query, None);
    }

    #[test]
    fn help_is_still_available_via_long_flag() {
        let err = Args::try_parse_from(["cql", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
