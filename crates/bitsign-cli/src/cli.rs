use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(
    name = "bitsign",
    about = "Build, sign and verify mutable item payloads",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a fresh Ed25519 key pair
    Keypair,
    /// Generate a salt, random or derived from a seed
    Salt(SaltArgs),
    /// Print the signable payload for a value
    Signable(SignableArgs),
    /// Sign a value
    Sign(SignArgs),
    /// Verify a signature over a value
    Verify(VerifyArgs),
    /// Sign a JSON request of the form {"value": Buffer, "options": {...}}
    SignRequest(SignRequestArgs),
}

#[derive(Args)]
pub struct SaltArgs {
    /// Salt length in bytes (16-64)
    #[arg(short, long)]
    pub size: Option<usize>,
    /// Derive the salt from this seed instead of randomly
    #[arg(long)]
    pub seed: Option<String>,
}

#[derive(Args, Clone)]
pub struct PayloadArgs {
    /// The value, as UTF-8 text (or hex with --hex)
    pub value: String,
    /// Interpret the value as hex
    #[arg(long)]
    pub hex: bool,
    /// Sequence number
    #[arg(long)]
    pub seq: Option<u64>,
    /// Salt as hex
    #[arg(long)]
    pub salt: Option<String>,
}

#[derive(Args)]
pub struct SignableArgs {
    #[command(flatten)]
    pub payload: PayloadArgs,
}

#[derive(Args)]
pub struct SignArgs {
    #[command(flatten)]
    pub payload: PayloadArgs,
    /// 64-byte secret key as hex
    #[arg(long)]
    pub secret_key: String,
}

#[derive(Args)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub payload: PayloadArgs,
    /// Signature as hex
    #[arg(long)]
    pub signature: String,
    /// Public key as hex
    #[arg(long)]
    pub public_key: String,
}

#[derive(Args)]
pub struct SignRequestArgs {
    pub path: PathBuf,
}
