use clap::Parser;
use stack_exports::application::dto::TemplateFormat;
use std::path::PathBuf;

/// Normalize stack and resource level Outputs of a CloudFormation template
#[derive(Parser, Debug)]
#[command(name = "stack-exports")]
#[command(version)]
#[command(about = "Normalize stack and resource level Outputs into a canonical CloudFormation Outputs block", long_about = None)]
pub struct Args {
    /// Path to the template (CloudFormation template or serverless.yml)
    pub template: PathBuf,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format: yaml or json (defaults to the template's extension)
    #[arg(short, long)]
    pub format: Option<TemplateFormat>,

    /// Top-level key holding Resources and Outputs (e.g. "resources" for serverless.yml)
    #[arg(short, long)]
    pub section: Option<String>,

    /// Validate the Outputs declarations without writing the template
    #[arg(long)]
    pub check: bool,

    /// Show diagnostic output
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to a config file (defaults to stack-exports.config.yml next to the template)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
