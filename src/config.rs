//! Command line and environment configuration.

use crate::records::types::Translation;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Scripture browsing and search server
#[derive(Parser, Debug, Clone)]
#[command(name = "scripture-server")]
#[command(about = "Serves three scripture translations over a read-only REST API")]
pub struct Args {
    /// Listen address
    #[arg(long, default_value = "127.0.0.1:5000", env = "SCRIPTURE_BIND")]
    pub bind: SocketAddr,

    /// Directory holding Books.csv and Bible_<CODE>.csv files
    #[arg(long, default_value = "data", env = "SCRIPTURE_DATA_DIR")]
    pub data_dir: PathBuf,

    /// Translation whose chapter and verse layout drives browsing (CN, NKJV, KJV)
    #[arg(long, default_value = "CN", env = "SCRIPTURE_REFERENCE", value_parser = parse_translation)]
    pub reference: Translation,

    /// Build every translation index before accepting requests
    #[arg(long, env = "SCRIPTURE_WARM")]
    pub warm: bool,
}

/// Lenient on the command line: `kjv` and ` KJV ` both select KJV.
fn parse_translation(value: &str) -> Result<Translation, String> {
    value
        .trim()
        .to_ascii_uppercase()
        .parse()
        .map_err(|e: crate::error::ScriptureError| e.to_string())
}
