use crate::prelude::*;

/// Daily word API daemon
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address on which the API will listen
    #[arg(long, default_value_t = String::from("127.0.0.1:5000"))]
    pub api_addr: String,

    /// Directory containing the word list files
    #[arg(long, default_value = "words")]
    pub words_dir: PathBuf,
}
