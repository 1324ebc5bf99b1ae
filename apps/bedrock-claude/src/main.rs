//! `bedrock-claude` CLI.
//!
//! Calls Claude on Amazon Bedrock with a prompt and optional file inputs,
//! then prints the response and saves any embedded artifacts.

use std::path::PathBuf;

use anyhow::Result;
use bedrock_async::config::BEDROCK_DEFAULT_MODEL_ID;
use bedrock_async::{BedrockConfig, Client};
use clap::Parser;

use bedrock_claude::{
    CliError, ParagraphDocxExtractor, assemble_request, collect_text, extract_and_save,
    process_files,
};

#[derive(Parser)]
#[command(
    name = "bedrock-claude",
    version,
    about = "Call Claude on Amazon Bedrock with files and a prompt"
)]
struct Args {
    /// File containing the prompt text
    #[arg(short = 'p', long)]
    prompt_file: PathBuf,

    /// Input files to include (images, PDFs, documents). Repeatable.
    #[arg(short = 'f', long = "file")]
    files: Vec<PathBuf>,

    /// Directory to save generated files
    #[arg(short = 'o', long, default_value = "./output")]
    output_dir: PathBuf,

    /// AWS region
    #[arg(short = 'r', long, default_value = "us-east-1")]
    region: String,

    /// AWS profile name
    #[arg(long)]
    profile: Option<String>,

    /// Bedrock model identifier
    #[arg(long, default_value = BEDROCK_DEFAULT_MODEL_ID)]
    model_id: String,

    /// Maximum tokens in response
    #[arg(long, default_value_t = 4096)]
    max_tokens: u32,

    /// Temperature for generation
    #[arg(long, default_value_t = 1.0)]
    temperature: f32,

    /// Save output files when the response looks like generated content (default)
    #[arg(long, overrides_with = "no_save_output")]
    save_output: bool,

    /// Do not save output files even when the response looks like generated content
    #[arg(long, overrides_with = "save_output")]
    no_save_output: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Progress and warnings go to stderr; stdout carries only the response.
    let level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!(
                    "bedrock_claude={level},bedrock_async={level}"
                ))
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    run(args).await
}

async fn run(args: Args) -> Result<()> {
    let prompt = std::fs::read_to_string(&args.prompt_file)?;
    if prompt.trim().is_empty() {
        return Err(CliError::EmptyPrompt(args.prompt_file).into());
    }
    tracing::info!("Loaded prompt from: {}", args.prompt_file.display());

    let blocks = process_files(&args.files, &ParagraphDocxExtractor);
    let request = assemble_request(&prompt, blocks, args.max_tokens, args.temperature);

    let mut config = BedrockConfig::new()
        .with_region(&args.region)
        .with_model_id(&args.model_id);
    if let Some(profile) = &args.profile {
        config = config.with_profile(profile);
    }
    let client = Client::with_config(config).await;

    tracing::info!("Calling {} on Bedrock...", args.model_id);
    let response = client.messages().create(request).await?;

    let text = collect_text(&response);
    // Flags are mutually overriding; saving is the default.
    let save = args.save_output || !args.no_save_output;
    extract_and_save(&text, &args.output_dir, save)?;

    let banner = "=".repeat(80);
    println!("\n{banner}");
    println!("CLAUDE'S RESPONSE:");
    println!("{banner}\n");
    println!("{text}");

    if let Some(usage) = &response.usage {
        eprintln!("\n{banner}");
        eprintln!("Input tokens: {}", usage.input_tokens);
        eprintln!("Output tokens: {}", usage.output_tokens);
        eprintln!("{banner}");
    }

    Ok(())
}
