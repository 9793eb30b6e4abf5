use crate::directory::profile;
use crate::util::format_usd;
use analytics::MetricsEngine;
use core_types::{AgentId, Dataset, Sector};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Planting cost per tree in dollars.
const COST_PER_TREE: Decimal = dec!(2.5);

/// Carbon credit price in dollars per ton of CO₂.
const CARBON_PRICE_PER_TON: Decimal = dec!(85);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
}

/// An agent's answer to a consultation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentResponse {
    /// Display name of the answering agent.
    pub agent: String,
    pub response: AgentReply,
    pub status: ResponseStatus,
}

/// Per-agent payloads. Serialized without a tag, as the bare payload object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AgentReply {
    TreePlanting(TreePlantingReply),
    Policy(PolicyReply),
    RenewableEnergy(RenewableEnergyReply),
    CarbonTrading(CarbonTradingReply),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreePlantingReply {
    pub recommended_trees: i64,
    pub optimal_species: Vec<String>,
    pub planting_locations: Vec<String>,
    /// Dollars, at $2.50 per tree.
    #[serde(with = "rust_decimal::serde::float")]
    pub cost_estimate: Decimal,
    pub co2_absorption_rate: String,
    pub optimal_planting_season: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyReply {
    pub priority_countries: Vec<String>,
    pub recommended_policies: Vec<String>,
    pub estimated_reduction: String,
    pub implementation_cost: String,
    pub key_sectors: Vec<Sector>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyShare {
    pub source: String,
    pub share: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenewableEnergyReply {
    pub renewable_potential: String,
    pub recommended_mix: Vec<EnergyShare>,
    pub investment_needed: String,
    pub timeline: String,
    pub job_creation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarbonTradingReply {
    pub current_carbon_price: String,
    /// Total emissions priced at the current carbon price, e.g. `$51,000.00`.
    pub total_offset_cost: String,
    pub recommended_strategy: String,
    pub market_trend: String,
    pub best_credit_sources: Vec<String>,
}

/// Builds the canned reply of `agent` for `dataset`.
pub(crate) fn reply_for(agent: AgentId, dataset: &Dataset, engine: &MetricsEngine) -> AgentResponse {
    let response = match agent {
        AgentId::TreePlanting => AgentReply::TreePlanting(tree_planting(dataset, engine)),
        AgentId::Policy => AgentReply::Policy(policy(dataset, engine)),
        AgentId::RenewableEnergy => AgentReply::RenewableEnergy(renewable_energy()),
        AgentId::CarbonTrading => AgentReply::CarbonTrading(carbon_trading(dataset)),
    };

    AgentResponse {
        agent: profile(agent).name.to_string(),
        response,
        status: ResponseStatus::Success,
    }
}

fn tree_planting(dataset: &Dataset, engine: &MetricsEngine) -> TreePlantingReply {
    let trees = engine.compute_tree_impact(dataset.total_emissions()).trees_needed;
    TreePlantingReply {
        recommended_trees: trees,
        optimal_species: strings(&["Oak", "Pine", "Maple", "Birch"]),
        planting_locations: strings(&["Temperate forests", "Urban areas", "Degraded lands"]),
        cost_estimate: Decimal::from(trees) * COST_PER_TREE,
        co2_absorption_rate: "48 lbs CO2/year per tree".to_string(),
        optimal_planting_season: "Spring (March-May)".to_string(),
    }
}

fn policy(dataset: &Dataset, engine: &MetricsEngine) -> PolicyReply {
    PolicyReply {
        priority_countries: engine.top_countries(dataset, 5),
        recommended_policies: strings(&[
            "Carbon pricing mechanism",
            "Renewable energy mandates",
            "Electric vehicle incentives",
            "Industrial emission standards",
        ]),
        estimated_reduction: "15-30% over 5 years".to_string(),
        implementation_cost: "$50B globally".to_string(),
        key_sectors: vec![Sector::Energy, Sector::Transportation, Sector::Industry],
    }
}

fn renewable_energy() -> RenewableEnergyReply {
    let mix = [("Solar", "40%"), ("Wind", "35%"), ("Hydro", "15%"), ("Geothermal", "10%")];
    RenewableEnergyReply {
        renewable_potential: "65% of current emissions could be offset".to_string(),
        recommended_mix: mix
            .iter()
            .map(|&(source, share)| EnergyShare {
                source: source.to_string(),
                share: share.to_string(),
            })
            .collect(),
        investment_needed: "$2.5T globally".to_string(),
        timeline: "10-15 years for full deployment".to_string(),
        job_creation: "15 million jobs globally".to_string(),
    }
}

fn carbon_trading(dataset: &Dataset) -> CarbonTradingReply {
    // Non-finite totals cannot occur for validated data; treat them as zero cost.
    let total = Decimal::from_f64(dataset.total_emissions()).unwrap_or_default();
    CarbonTradingReply {
        current_carbon_price: format!("${}/ton CO2", CARBON_PRICE_PER_TON),
        total_offset_cost: total
            .checked_mul(CARBON_PRICE_PER_TON)
            .map(format_usd)
            .unwrap_or_else(|| "n/a".to_string()),
        recommended_strategy: "Buy 60% verified credits, invest 40% in projects".to_string(),
        market_trend: "Increasing demand, prices rising 12% annually".to_string(),
        best_credit_sources: strings(&["Forestry projects", "Renewable energy", "Carbon capture"]),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
