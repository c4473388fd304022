//! Process configuration.
//!
//! Only the bind address and log verbosity are fixed at startup. The sheet
//! endpoint URL is looked up again on every request so a missing value shows
//! up as a 503 on the API rather than a crash at boot.

use std::net::SocketAddr;

use clap::Parser;

use crate::logging::Verbosity;

/// Environment variable holding the deployed Apps Script web app URL.
pub const SCRIPT_URL_VAR: &str = "GOOGLE_SHEETS_SCRIPT_URL";

/// team-roster - jersey number sign-up backed by a spreadsheet
#[derive(Debug, Parser)]
#[command(name = "team-roster")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Address to listen on
    #[arg(long, env = "TEAM_ROSTER_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }
}

/// Where the upstream URL comes from.
#[derive(Debug, Clone)]
pub enum ScriptUrl {
    /// Read the named environment variable on each call.
    Env(&'static str),
    /// A value fixed at construction, `None` meaning unconfigured.
    Fixed(Option<String>),
}

impl Default for ScriptUrl {
    fn default() -> Self {
        Self::Env(SCRIPT_URL_VAR)
    }
}

impl ScriptUrl {
    /// Current URL, or `None` when unset or blank.
    pub fn resolve(&self) -> Option<String> {
        let raw = match self {
            Self::Env(var) => std::env::var(var).ok(),
            Self::Fixed(value) => value.clone(),
        };
        raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
    }
}
