use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AgentError {
    #[error("Unknown agent '{0}'. Expected one of: tree_planting_agent, policy_agent, renewable_energy_agent, carbon_trading_agent")]
    UnknownAgent(String),
}
