//! # Canopy Agent Network
//!
//! A simulated network of specialist climate agents. Nothing here opens a
//! connection: the directory is a static table, and every consultation is a
//! synchronous function of the agent id and the current dataset.

use core_types::AgentId;

pub mod directory;
pub mod error;
pub mod network;
pub mod responses;
pub mod util;

pub use directory::{ANALYZER_AGENT_ID, AgentProfile, directory, profile};
pub use error::AgentError;
pub use network::{AgentNetwork, AgentStatus, AnalyzerRegistration, CollaborationThread};
pub use responses::{AgentReply, AgentResponse, ResponseStatus};

/// Resolves a user-supplied agent key (`policy_agent` or `policy`).
pub fn parse_agent(key: &str) -> Result<AgentId, AgentError> {
    key.parse::<AgentId>()
        .map_err(|_| AgentError::UnknownAgent(key.to_string()))
}
