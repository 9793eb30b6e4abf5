use core_types::AgentId;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Id under which the main analyzer registers itself.
pub const ANALYZER_AGENT_ID: &str = "carbon_analyzer_agent";

/// A directory entry for one specialist agent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentProfile {
    pub id: AgentId,
    pub name: &'static str,
    pub description: &'static str,
    /// Price of one consultation in CORAL tokens.
    pub cost_per_query: Decimal,
    pub capabilities: &'static [&'static str],
}

static TREE_PLANTING: AgentProfile = AgentProfile {
    id: AgentId::TreePlanting,
    name: "Tree Planting Optimizer",
    description: "Optimizes tree planting locations for maximum carbon absorption",
    cost_per_query: dec!(0.1),
    capabilities: &["location_analysis", "species_selection", "growth_prediction"],
};

static POLICY: AgentProfile = AgentProfile {
    id: AgentId::Policy,
    name: "Climate Policy Advisor",
    description: "Provides policy recommendations for carbon reduction",
    cost_per_query: dec!(0.2),
    capabilities: &["policy_analysis", "regulation_compliance", "incentive_design"],
};

static RENEWABLE_ENERGY: AgentProfile = AgentProfile {
    id: AgentId::RenewableEnergy,
    name: "Renewable Energy Planner",
    description: "Plans optimal renewable energy deployment",
    cost_per_query: dec!(0.15),
    capabilities: &["energy_modeling", "cost_analysis", "grid_integration"],
};

static CARBON_TRADING: AgentProfile = AgentProfile {
    id: AgentId::CarbonTrading,
    name: "Carbon Credit Optimizer",
    description: "Optimizes carbon credit trading strategies",
    cost_per_query: dec!(0.25),
    capabilities: &["market_analysis", "price_prediction", "trade_execution"],
};

/// Looks up the directory entry for an agent.
pub fn profile(id: AgentId) -> &'static AgentProfile {
    match id {
        AgentId::TreePlanting => &TREE_PLANTING,
        AgentId::Policy => &POLICY,
        AgentId::RenewableEnergy => &RENEWABLE_ENERGY,
        AgentId::CarbonTrading => &CARBON_TRADING,
    }
}

/// All specialist agents, in display order.
pub fn directory() -> [&'static AgentProfile; 4] {
    AgentId::ALL.map(profile)
}

/// Token cost of consulting every specialist once.
pub fn full_consultation_cost() -> Decimal {
    directory().iter().map(|p| p.cost_per_query).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_keyed_by_their_own_id() {
        for id in AgentId::ALL {
            assert_eq!(profile(id).id, id);
        }
    }

    #[test]
    fn full_consultation_costs_seven_tenths() {
        assert_eq!(full_consultation_cost(), dec!(0.7));
    }
}
