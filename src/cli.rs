//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// mdmerge - Markdown knowledge base merger
///
/// Merge every Markdown file in a directory into one document ready to hand to an AI.
#[derive(Parser, Debug)]
#[command(
    name = "mdmerge",
    author,
    version,
    args_conflicts_with_subcommands = true,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Merge Markdown files from a directory into a single AI-ready document",
    long_about = "Merge multiple Markdown files from a directory into a single, AI-ready \
                  document. Optional context and prompt sections are placed at the top to \
                  orient the AI reading it.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  mdmerge my_docs knowledge.md\n    \
                  mdmerge my_docs knowledge.md --separator ===\n    \
                  mdmerge my_docs knowledge.md \\\n        \
                  --context \"This is a company knowledge base containing technical guides.\" \\\n        \
                  --prompt \"You are a technical support agent. Answer using only this document.\"\n    \
                  mdmerge --config mdmerge.yaml\n    \
                  mdmerge completions --shell bash"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub merge: MergeArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the default merge action
#[derive(Args, Debug, Default)]
pub struct MergeArgs {
    /// The directory containing the Markdown files to merge
    pub input_dir: Option<PathBuf>,

    /// The name of the output Markdown file
    pub output_file: Option<PathBuf>,

    /// A string providing context for the AI [env: MDMERGE_CONTEXT]
    #[arg(long = "context", value_name = "TEXT")]
    pub context: Option<String>,

    /// Read the AI context from a file
    #[arg(long, value_name = "PATH", conflicts_with = "context")]
    pub context_file: Option<PathBuf>,

    /// A string with specific instructions for the AI [env: MDMERGE_PROMPT]
    #[arg(long = "prompt", value_name = "TEXT")]
    pub prompt: Option<String>,

    /// Read the AI prompt from a file
    #[arg(long, value_name = "PATH", conflicts_with = "prompt")]
    pub prompt_file: Option<PathBuf>,

    /// A separator to use between articles [default: ---]
    #[arg(long, value_name = "TEXT", env = "MDMERGE_SEPARATOR")]
    pub separator: Option<String>,

    /// Skip Markdown files whose name matches this glob (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Read merge settings from a YAML file
    #[arg(long, value_name = "PATH", env = "MDMERGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show which files would be merged without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with an error when the input directory is missing or has no Markdown files
    #[arg(long)]
    pub strict: bool,

    /// Suppress progress and success output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    mdmerge completions --shell bash > ~/.bash_completion.d/mdmerge\n\n\
                  Generate zsh completions:\n    mdmerge completions --shell zsh > ~/.zfunc/_mdmerge\n\n\
                  Generate fish completions:\n    mdmerge completions --shell fish > ~/.config/fish/completions/mdmerge.fish\n\n\
                  Generate PowerShell completions:\n    mdmerge completions --shell powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
