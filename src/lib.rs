pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod logging;
pub mod models;
pub mod pages;
pub mod server;

pub use client::SheetClient;
pub use config::{Cli, ScriptUrl, SCRIPT_URL_VAR};
pub use error::RosterError;
pub use logging::{init_logging, Verbosity};
pub use models::member::{Field, MemberRow, Roster, TeamMember, PLACEHOLDER};
pub use models::submission::{Submission, SIZES};
pub use server::router;
