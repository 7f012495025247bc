use anyhow::Context;
use colored::Colorize;
use serde_json::{Map, Value};

use bitsign_crypto::{dynamic, KeyPair, PublicKey, SaltRequest, SecretKey, SignOptions, SignableOptions, Signature};

use crate::cli::*;
use crate::config::CliConfig;

/// Output of a command: a headline plus named hex/text fields.
#[derive(Debug)]
pub struct Report {
    title: &'static str,
    fields: Vec<(&'static str, String)>,
}

impl Report {
    fn new(title: &'static str) -> Self {
        Self { title, fields: Vec::new() }
    }

    fn field(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((name, value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => {
                let mut out = format!("{} {}", "✓".green().bold(), self.title.bold());
                for (name, value) in &self.fields {
                    out.push_str(&format!("\n  {}: {}", name, value.cyan()));
                }
                out
            }
            OutputFormat::Json => {
                let obj: Map<String, Value> = self
                    .fields
                    .iter()
                    .map(|(n, v)| (n.to_string(), Value::String(v.clone())))
                    .collect();
                Value::Object(obj).to_string()
            }
        }
    }
}

pub fn run_command(cli: Cli, config: &CliConfig) -> anyhow::Result<()> {
    let format = cli.format.unwrap_or(config.format);
    let report = match cli.command {
        Command::Keypair => cmd_keypair(),
        Command::Salt(args) => cmd_salt(args, config)?,
        Command::Signable(args) => cmd_signable(args)?,
        Command::Sign(args) => cmd_sign(args)?,
        Command::Verify(args) => cmd_verify(args)?,
        Command::SignRequest(args) => cmd_sign_request(args)?,
    };
    println!("{}", report.render(format));
    Ok(())
}

fn cmd_keypair() -> Report {
    let kp = KeyPair::generate();
    Report::new("Generated key pair")
        .field("public_key", kp.public_key().to_hex())
        .field("secret_key", kp.secret_key().to_hex())
}

fn cmd_salt(args: SaltArgs, config: &CliConfig) -> anyhow::Result<Report> {
    let request = match args.seed {
        Some(seed) => SaltRequest::SeedString { seed, size: args.size },
        None => SaltRequest::ByteCount(args.size.unwrap_or(config.default_salt_size)),
    };
    let salt = bitsign_crypto::salt(&request)?;
    Ok(Report::new("Generated salt").field("salt", hex::encode(salt)))
}

fn cmd_signable(args: SignableArgs) -> anyhow::Result<Report> {
    let (value, salt) = payload_inputs(&args.payload)?;
    let options = SignableOptions {
        seq: args.payload.seq,
        salt: salt.as_deref(),
    };
    let payload = bitsign_crypto::signable(&value, &options)?;
    Ok(Report::new("Signable payload")
        .field("payload", hex::encode(payload.as_bytes()))
        .field("bencode", payload.as_bytes().escape_ascii().to_string()))
}

fn cmd_sign(args: SignArgs) -> anyhow::Result<Report> {
    let (value, salt) = payload_inputs(&args.payload)?;
    let secret_key = SecretKey::from_hex(&args.secret_key).context("parsing --secret-key")?;
    let keypair = KeyPair::from_secret_key(secret_key);
    let options = SignOptions {
        seq: args.payload.seq,
        salt: salt.as_deref(),
        keypair: Some(&keypair),
    };
    let signature = bitsign_crypto::sign(&value, &options)?;
    Ok(Report::new("Signed")
        .field("signature", signature.to_hex())
        .field("public_key", keypair.public_key().to_hex()))
}

fn cmd_verify(args: VerifyArgs) -> anyhow::Result<Report> {
    let (value, salt) = payload_inputs(&args.payload)?;
    let signature = Signature::from_hex(&args.signature).context("parsing --signature")?;
    let public_key = PublicKey::from_hex(&args.public_key).context("parsing --public-key")?;
    let options = SignableOptions {
        seq: args.payload.seq,
        salt: salt.as_deref(),
    };
    bitsign_crypto::verify_value(&signature, &value, &options, &public_key)
        .context("signature does not verify")?;
    Ok(Report::new("Signature valid").field("public_key", public_key.to_hex()))
}

fn cmd_sign_request(args: SignRequestArgs) -> anyhow::Result<Report> {
    let text = std::fs::read_to_string(&args.path)
        .with_context(|| format!("reading request {}", args.path.display()))?;
    let request: Value = serde_json::from_str(&text)
        .with_context(|| format!("parsing request {}", args.path.display()))?;
    let signature = dynamic::sign_value(
        request.get("value").unwrap_or(&Value::Null),
        request.get("options"),
    )?;
    tracing::debug!(path = %args.path.display(), "signed request file");
    Ok(Report::new("Signed").field("signature", signature.to_hex()))
}

fn payload_inputs(args: &PayloadArgs) -> anyhow::Result<(Vec<u8>, Option<Vec<u8>>)> {
    let value = if args.hex {
        hex::decode(&args.value).context("value is not valid hex")?
    } else {
        args.value.as_bytes().to_vec()
    };
    let salt = args
        .salt
        .as_deref()
        .map(hex::decode)
        .transpose()
        .context("--salt is not valid hex")?;
    Ok((value, salt))
}
