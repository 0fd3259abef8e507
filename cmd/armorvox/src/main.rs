//! Armorvox CLI - command line client for the Armorvox v8 API.

use clap::Parser;

mod run;

/// Command line client for the Armorvox v8 voice biometrics API.
///
/// Accepts multiple utterances together with corresponding per-utterance
/// options (phrase, check_quality, recognition, vocab). An option given once
/// applies to all utterances; given several times, values apply to
/// utterances in command line order, cycling when there are fewer values
/// than utterances. All paths are absolute or relative to the current
/// working directory.
#[derive(Parser)]
#[command(name = "armorvox")]
#[command(about = "Armorvox v8 API command line client")]
#[command(version)]
pub struct Cli {
    /// Scheme, address and base path of the Armorvox server
    #[arg(short, long, default_value = armorvox::DEFAULT_SERVER)]
    pub server: String,

    /// Group name sent as the Authorization header
    #[arg(short, long, default_value = armorvox::DEFAULT_GROUP)]
    pub group: String,

    /// API to call, full name or acronym, e.g. 'ce' for check_enrolled.
    /// Supported: check_health, check_enrolled, check_quality, enrol,
    /// verify, delete, cross_match, detect_gender, get_phrase,
    /// get_voiceprint, check_similarity, rank_model
    #[arg(short, long, default_value = "e")]
    pub api: String,

    /// Print name selecting the voiceprint type
    #[arg(long = "print_name", alias = "pn", default_value = "digit")]
    pub print_name: String,

    /// ID(s) to enrol, verify, delete or cross_match; also names models in
    /// the rank_model API
    #[arg(short, long)]
    pub id: Vec<String>,

    /// Utterance audio file(s); grouped with corresponding -p, --cq, -r,
    /// --vc values
    #[arg(short, long)]
    pub utterance: Vec<String>,

    /// Text prompted phrase(s); the value 'file' loads the contents of the
    /// adjacent file with extension .txt
    #[arg(short, long)]
    pub phrase: Vec<String>,

    /// Whether to quality check the utterance(s), 'true' or 'false'
    #[arg(long = "check_quality", alias = "cq")]
    pub check_quality: Vec<String>,

    /// Whether to run phrase recognition on the utterance(s)
    #[arg(short, long)]
    pub recognition: Vec<String>,

    /// Vocab used by text prompted utterance(s)
    #[arg(long, alias = "vc")]
    pub vocab: Vec<String>,

    /// Mode used by the check_quality API: enrol, verify, cross_match or
    /// characterise
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Configuration parameter override(s) for the request
    #[arg(short = 'o', long = "override")]
    pub overrides: Vec<String>,

    /// Channel request parameter
    #[arg(long, alias = "ch")]
    pub channel: Option<String>,

    /// Show the JSON request body before sending
    #[arg(long = "show_request", alias = "sr")]
    pub show_request: bool,

    /// Pretty print the JSON request and response
    #[arg(long = "print_print", alias = "pp")]
    pub pretty_print: bool,

    /// Excluded utterance(s), accepted and ignored; a simple way to comment
    /// out a -u entry by renaming it
    #[arg(long = "exclude_utterance", alias = "xu", value_name = "PATH")]
    pub exclude_utterance: Vec<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .init();
    }

    run::run(&cli).await
}
