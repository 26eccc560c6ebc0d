//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for conductor
#[derive(Parser, Debug)]
#[command(name = "conductor")]
#[command(author, version, about = "Multi-agent task orchestration over any OpenAI-compatible backend")]
#[command(long_about = r#"
Conductor decomposes a request into a plan, runs specialist tool-calling
agents for each step, and synthesizes their outputs into one answer.

The process has three phases:
1. Plan: a planner agent maps the request to specialist agents
2. Execute: each planned agent runs its bounded tool-calling loop
3. Synthesize: a synthesizer agent composes the final answer

Configuration files are loaded from (in priority order):
1. CONDUCTOR_* environment variables
2. --config <path>     Explicit config file
3. ./conductor.toml    Project-level config
4. ~/.config/conductor/config.toml   Global config

Example:
  conductor "What's the weather in Hanoi?"
  conductor -v "Tell me about Da Nang and divide 10 by 4"
  conductor --no-trace --quiet "Top headlines today?"
"#)]
pub struct Cli {
    /// The request to orchestrate
    pub query: String,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Skip exporting the run trace
    #[arg(long)]
    pub no_trace: bool,

    /// Print only the final answer
    #[arg(short, long)]
    pub quiet: bool,
}
