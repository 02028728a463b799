//! Commerce CLI
//!
//! Offline tools for working with commerce API payloads: decode and
//! normalize JSON bodies, dump the schema document, mint idempotency keys,
//! and sign or verify webhook notifications.

mod config;
mod input;
mod inspect;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commerce_types::webhook::{sign_notification, verify_notification};
use commerce_types::{ApiDoc, IdempotencyKey, WebhookEvent};

use config::Config;
use input::read_input;
use inspect::{PayloadKind, inspect};

#[derive(Parser)]
#[command(name = "commerce")]
#[command(author, version, about = "Commerce API payload tools", long_about = None)]
struct Cli {
    /// Print single-line JSON
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the OpenAPI component document
    Schema,
    /// Decode a JSON payload and print its canonical form
    Inspect {
        /// Payload kind
        #[arg(value_enum)]
        kind: PayloadKind,
        /// JSON file (stdin when omitted or `-`)
        file: Option<PathBuf>,
    },
    /// Generate fresh idempotency keys
    IdempotencyKey {
        /// Number of keys to print
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Webhook notification signatures
    Webhook {
        #[command(subcommand)]
        action: WebhookCommands,
    },
}

#[derive(Subcommand)]
enum WebhookCommands {
    /// Compute the signature of a notification body
    Sign {
        /// Notification URL registered for the subscription
        #[arg(long, env = "COMMERCE_WEBHOOK_URL")]
        url: String,
        /// Subscription signature key
        #[arg(long, env = "COMMERCE_WEBHOOK_SIGNATURE_KEY", hide_env_values = true)]
        key: String,
        /// Body file (stdin when omitted or `-`)
        file: Option<PathBuf>,
    },
    /// Check a received notification against its signature
    Verify {
        #[arg(long, env = "COMMERCE_WEBHOOK_URL")]
        url: String,
        #[arg(long, env = "COMMERCE_WEBHOOK_SIGNATURE_KEY", hide_env_values = true)]
        key: String,
        /// Value of the signature header
        #[arg(long)]
        signature: String,
        file: Option<PathBuf>,
    },
}

/// How a command finished, mapped to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Success,
    SignatureMismatch,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::SignatureMismatch => ExitCode::from(1),
        }
    }
}

fn print_json<T: Serialize>(out: &mut impl Write, value: &T, compact: bool) -> Result<()> {
    if compact {
        serde_json::to_writer(&mut *out, value)?;
    } else {
        serde_json::to_writer_pretty(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Runs one command, writing its output to `out`.
fn run(cli: Cli, config: &Config, out: &mut impl Write) -> Result<Status> {
    let compact = cli.compact || config.compact_json;

    match cli.command {
        Commands::Schema => {
            writeln!(out, "{}", ApiDoc::to_json(!compact)?)?;
        }

        Commands::Inspect { kind, file } => {
            let payload = read_input(file.as_deref())?;
            let canonical = inspect(kind, &payload)?;
            print_json(out, &canonical, compact)?;
        }

        Commands::IdempotencyKey { count } => {
            for _ in 0..count {
                writeln!(out, "{}", IdempotencyKey::generate())?;
            }
        }

        Commands::Webhook { action } => match action {
            WebhookCommands::Sign { url, key, file } => {
                let body = read_input(file.as_deref())?;
                writeln!(out, "{}", sign_notification(&url, &body, &key)?)?;
            }
            WebhookCommands::Verify {
                url,
                key,
                signature,
                file,
            } => {
                let body = read_input(file.as_deref())?;
                if !verify_notification(&url, &body, &signature, &key)? {
                    eprintln!("✗ Signature does not match");
                    return Ok(Status::SignatureMismatch);
                }
                match WebhookEvent::from_slice(&body) {
                    Ok(event) => {
                        tracing::info!(event_id = %event.event_id, "Verified {}", event.event_type);
                    }
                    Err(e) => tracing::warn!("Signature valid but body is not an event: {}", e),
                }
                writeln!(out, "✓ Signature valid")?;
            }
        },
    }

    Ok(Status::Success)
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let status = run(cli, &config, &mut std::io::stdout().lock())?;
    Ok(status.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.com/webhook";
    const KEY: &str = "asdf1234";
    const PAYMENT: &[u8] =
        br#"{"id":"pay_1","amount_money":{"amount":250,"currency":"EUR"},"status":"APPROVED"}"#;

    fn config(compact_json: bool) -> Config {
        Config {
            log_filter: "warn".to_string(),
            compact_json,
        }
    }

    fn body_file(body: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body).unwrap();
        file
    }

    fn run_args(args: &[&str], config: &Config) -> (Status, String) {
        let cli = Cli::try_parse_from(std::iter::once("commerce").chain(args.iter().copied()))
            .unwrap();
        let mut out = Vec::new();
        let status = run(cli, config, &mut out).unwrap();
        (status, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_verify_matching_signature() {
        let file = body_file(PAYMENT);
        let signature = sign_notification(URL, PAYMENT, KEY).unwrap();
        let path = file.path().to_str().unwrap();

        let (status, out) = run_args(
            &["webhook", "verify", "--url", URL, "--key", KEY, "--signature", &signature, path],
            &config(false),
        );
        assert_eq!(status, Status::Success);
        assert_eq!(out, "✓ Signature valid\n");
    }

    #[test]
    fn test_verify_mismatch_exits_nonzero() {
        let file = body_file(PAYMENT);
        let signature = sign_notification(URL, b"{}", KEY).unwrap();
        let path = file.path().to_str().unwrap();

        let (status, out) = run_args(
            &["webhook", "verify", "--url", URL, "--key", KEY, "--signature", &signature, path],
            &config(false),
        );
        assert_eq!(status, Status::SignatureMismatch);
        assert!(out.is_empty());
    }

    #[test]
    fn test_sign_prints_signature() {
        let file = body_file(PAYMENT);
        let path = file.path().to_str().unwrap();

        let (status, out) = run_args(
            &["webhook", "sign", "--url", URL, "--key", KEY, path],
            &config(false),
        );
        assert_eq!(status, Status::Success);
        assert_eq!(out.trim_end(), sign_notification(URL, PAYMENT, KEY).unwrap());
    }

    #[test]
    fn test_inspect_compact_and_pretty() {
        let file = body_file(PAYMENT);
        let path = file.path().to_str().unwrap();

        let (_, compact) = run_args(&["--compact", "inspect", "payment", path], &config(false));
        assert_eq!(compact.lines().count(), 1);

        let (_, pretty) = run_args(&["inspect", "payment", path], &config(false));
        assert!(pretty.lines().count() > 1);

        let compact: serde_json::Value = serde_json::from_str(&compact).unwrap();
        let pretty: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(compact, pretty);
        assert_eq!(compact["status"], "APPROVED");
    }

    #[test]
    fn test_config_selects_compact_output() {
        let file = body_file(PAYMENT);
        let path = file.path().to_str().unwrap();

        let (_, out) = run_args(&["inspect", "payment", path], &config(true));
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_schema_output() {
        let (status, compact) = run_args(&["schema", "--compact"], &config(false));
        assert_eq!(status, Status::Success);
        assert_eq!(compact.lines().count(), 1);

        let (_, pretty) = run_args(&["schema"], &config(false));
        assert!(pretty.lines().count() > 1);

        let doc: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        assert!(doc["components"]["schemas"]["Payment"].is_object());
        assert_eq!(doc, serde_json::from_str::<serde_json::Value>(&compact).unwrap());
    }

    #[test]
    fn test_idempotency_keys() {
        let (_, out) = run_args(&["idempotency-key", "--count", "3"], &config(false));
        let keys: Vec<&str> = out.lines().collect();
        assert_eq!(keys.len(), 3);
        assert_ne!(keys[0], keys[1]);
    }
}
