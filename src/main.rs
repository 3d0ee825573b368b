//! claimcheck: check text for consistency and record the verdict on-chain.
//!
//! ```text
//! --text | --text-file
//!     → consistency check (equations + contradiction heuristics)
//!     → dry run: print the verdict and stop (no network)
//!     → live: role gate → fee selection → sign → broadcast → confirm
//! ```

use clap::{ArgGroup, Parser};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use claimcheck::blockchain::{RpcClient, SubmissionRequest, Submitter, SubmitterConfig, Wallet};
use claimcheck::config::RunConfig;
use claimcheck::consistency::check_text;
use claimcheck::digest::response_digest;
use claimcheck::error::{AuditError, AuditResult};
use claimcheck::report::{format_details, ValidationReport};

#[derive(Parser)]
#[command(name = "claimcheck")]
#[command(
    about = "Check text for arithmetic and logical consistency, then record the verdict on-chain",
    long_about = None
)]
#[command(group(ArgGroup::new("input").required(true).args(["text", "text_file"])))]
struct Cli {
    /// Text to check.
    #[arg(long)]
    text: Option<String>,

    /// Path to a file whose contents are checked.
    #[arg(long)]
    text_file: Option<String>,

    /// JSON-RPC endpoint URL.
    #[arg(long = "rpc", env = "CLAIMCHECK_RPC_URL")]
    rpc_url: Option<String>,

    /// Registry contract address.
    #[arg(long = "contract", env = "CLAIMCHECK_CONTRACT_ADDRESS")]
    contract_address: Option<String>,

    /// Hex-encoded private key used only to sign the submission.
    #[arg(long, env = "CLAIMCHECK_PRIVATE_KEY", hide_env_values = true)]
    private_key: Option<String>,

    /// Check locally and print the verdict without touching the network.
    #[arg(long)]
    dry_run: bool,

    /// Emit the verdict as pretty-printed JSON.
    #[arg(long)]
    json: bool,

    /// Per-request RPC timeout in seconds.
    #[arg(long, default_value_t = 10)]
    rpc_timeout_secs: u64,

    /// Confirmation depth to wait for (1 returns at the first receipt).
    #[arg(long, default_value_t = 1)]
    confirmations: u32,

    /// Maximum seconds to wait for confirmation.
    #[arg(long, default_value_t = 120)]
    confirm_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout stays machine-consumable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "claimcheck=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> AuditResult<()> {
    let text = resolve_text(&cli)?;
    let result = check_text(&text);
    let details = format_details(&result);

    tracing::info!(
        passed = result.passed(),
        issue_count = result.issues().len(),
        "Consistency check complete"
    );

    if cli.dry_run {
        if cli.json {
            let report = ValidationReport::dry_run(&result);
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{details}");
        }
        return Ok(());
    }

    let config = RunConfig::from_options(
        cli.rpc_url.clone(),
        cli.contract_address.clone(),
        cli.private_key.clone(),
        cli.rpc_timeout_secs,
        SubmitterConfig {
            confirmations: cli.confirmations,
            confirm_timeout_secs: cli.confirm_timeout_secs,
        },
    )?;

    let response_hash = response_digest(&text);
    let client = RpcClient::connect(&config.rpc_url, config.rpc_timeout_secs).await?;
    let wallet = Wallet::from_private_key(&config.private_key)?;
    let submitter = Submitter::new(client, wallet, config.submitter.clone());

    let request = SubmissionRequest {
        contract_address: config.contract_address,
        response_hash,
        passed: result.passed(),
        details,
    };
    let tx_hash = submitter.submit(&request).await?;

    if cli.json {
        let report = ValidationReport::submitted(&result, response_hash, tx_hash);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Validation submitted");
        println!("passed: {}", result.passed());
        println!("responseHash: {response_hash}");
        println!("tx: {tx_hash}");
    }

    Ok(())
}

/// Resolve the text to check from `--text` or `--text-file`.
fn resolve_text(cli: &Cli) -> AuditResult<String> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }
    if let Some(path) = &cli.text_file {
        return std::fs::read_to_string(path)
            .map_err(|e| AuditError::TextFile(path.clone(), e));
    }
    // The argument group makes this unreachable; kept as the backstop.
    Err(AuditError::Config(
        "Provide --text or --text-file".to_string(),
    ))
}
