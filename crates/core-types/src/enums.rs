use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of total yearly emissions between the earliest and latest year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Increasing => write!(f, "increasing"),
            Trend::Decreasing => write!(f, "decreasing"),
            Trend::Stable => write!(f, "stable"),
        }
    }
}

/// Economic sectors ranked in the analysis output.
///
/// The declaration order is the priority order, so a `BTreeMap<Sector, _>`
/// iterates (and serializes) from most to least critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sector {
    Energy,
    Transportation,
    Industry,
    Agriculture,
}

impl Sector {
    pub const ALL: [Sector; 4] = [
        Sector::Energy,
        Sector::Transportation,
        Sector::Industry,
        Sector::Agriculture,
    ];
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sector::Energy => "Energy",
            Sector::Transportation => "Transportation",
            Sector::Industry => "Industry",
            Sector::Agriculture => "Agriculture",
        };
        f.write_str(name)
    }
}

/// Identifiers of the specialist agents in the simulated climate network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentId {
    #[serde(rename = "tree_planting_agent")]
    TreePlanting,
    #[serde(rename = "policy_agent")]
    Policy,
    #[serde(rename = "renewable_energy_agent")]
    RenewableEnergy,
    #[serde(rename = "carbon_trading_agent")]
    CarbonTrading,
}

impl AgentId {
    pub const ALL: [AgentId; 4] = [
        AgentId::TreePlanting,
        AgentId::Policy,
        AgentId::RenewableEnergy,
        AgentId::CarbonTrading,
    ];

    /// The wire key used to address this agent.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentId::TreePlanting => "tree_planting_agent",
            AgentId::Policy => "policy_agent",
            AgentId::RenewableEnergy => "renewable_energy_agent",
            AgentId::CarbonTrading => "carbon_trading_agent",
        }
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentId {
    type Err = CoreError;

    /// Accepts the full wire key (`policy_agent`) or its short form (`policy`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        AgentId::ALL
            .into_iter()
            .find(|id| {
                let full = id.as_str();
                key == full || Some(key) == full.strip_suffix("_agent")
            })
            .ok_or_else(|| CoreError::UnknownIdentifier(s.to_string()))
    }
}
