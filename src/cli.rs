use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Rewrite a script export in canonical form")]
pub struct Cli {
    /// Input script export (.json)
    pub input: PathBuf,
    /// Output file; stdout when omitted
    pub output: Option<PathBuf>,
    /// Indent the output
    #[arg(long)]
    pub pretty: bool,
    /// Only verify the input is already canonical, write nothing
    #[arg(long, conflicts_with = "output")]
    pub check: bool,
}
