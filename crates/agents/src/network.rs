use crate::directory::{ANALYZER_AGENT_ID, AgentProfile, directory, full_consultation_cost};
use crate::responses::{AgentResponse, reply_for};
use analytics::MetricsEngine;
use chrono::{DateTime, Utc};
use core_types::{AgentId, Dataset};
use rust_decimal::Decimal;
use serde::Serialize;

/// Topic of the climate-action collaboration thread.
pub const CLIMATE_TOPIC: &str = "carbon_emission_reduction";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Connected,
}

/// The main analyzer's entry in the network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzerRegistration {
    pub agent_id: String,
    pub name: String,
    pub description: String,
    pub capabilities: Vec<String>,
    pub version: String,
    pub status: AgentStatus,
}

/// A multi-agent conversation coordinated by the analyzer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollaborationThread {
    pub thread_id: String,
    pub participants: Vec<String>,
    pub topic: String,
    pub coordinator: String,
}

/// Session-scoped handle on the simulated agent network.
#[derive(Debug, Clone)]
pub struct AgentNetwork {
    server_url: String,
    session_id: String,
    registration: Option<AnalyzerRegistration>,
    engine: MetricsEngine,
}

impl AgentNetwork {
    /// Opens a network session. The session id is derived from `now`.
    pub fn new(server_url: impl Into<String>, now: DateTime<Utc>) -> Self {
        let session_id = format!("carbon_emission_session_{}", now.format("%Y%m%d_%H%M%S"));
        tracing::debug!(%session_id, "Opened agent network session.");
        Self {
            server_url: server_url.into(),
            session_id,
            registration: None,
            engine: MetricsEngine::new(),
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Registers the carbon analyzer with the network. Idempotent.
    pub fn register_analyzer(&mut self) -> &AnalyzerRegistration {
        self.registration.get_or_insert_with(|| {
            tracing::info!(agent_id = ANALYZER_AGENT_ID, "Registered carbon analyzer agent.");
            AnalyzerRegistration {
                agent_id: ANALYZER_AGENT_ID.to_string(),
                name: "Carbon Emissions Analyzer".to_string(),
                description: "Analyzes carbon emissions data and provides climate insights"
                    .to_string(),
                capabilities: [
                    "data_analysis",
                    "visualization",
                    "climate_modeling",
                    "tree_impact_calculation",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect(),
                version: "1.0.0".to_string(),
                status: AgentStatus::Connected,
            }
        })
    }

    pub fn registration(&self) -> Option<&AnalyzerRegistration> {
        self.registration.as_ref()
    }

    /// Lists the specialist agents available for consultation.
    pub fn discover(&self) -> [&'static AgentProfile; 4] {
        directory()
    }

    /// Sends a consultation to one specialist and returns its reply.
    pub fn consult(&self, agent: AgentId, dataset: &Dataset) -> AgentResponse {
        tracing::info!(agent = %agent, records = dataset.len(), "Consulting agent.");
        reply_for(agent, dataset, &self.engine)
    }

    /// Creates a collaboration thread coordinated by the analyzer.
    pub fn create_thread(&self, participants: Vec<String>, now: DateTime<Utc>) -> CollaborationThread {
        let thread = CollaborationThread {
            thread_id: format!("climate_collab_{}", now.format("%H%M%S")),
            participants,
            topic: CLIMATE_TOPIC.to_string(),
            coordinator: ANALYZER_AGENT_ID.to_string(),
        };
        tracing::info!(thread_id = %thread.thread_id, participants = thread.participants.len(), "Created collaboration thread.");
        thread
    }

    /// The analyzer plus every specialist, the cast of the climate-action thread.
    pub fn climate_action_participants(&self) -> Vec<String> {
        std::iter::once(ANALYZER_AGENT_ID.to_string())
            .chain(AgentId::ALL.iter().map(|id| id.as_str().to_string()))
            .collect()
    }

    /// Ids of the specialists, as listed in exported reports.
    pub fn specialist_ids(&self) -> Vec<String> {
        AgentId::ALL.iter().map(|id| id.as_str().to_string()).collect()
    }

    /// CORAL tokens spent when every specialist is consulted once.
    pub fn tokens_per_full_consultation(&self) -> Decimal {
        full_consultation_cost()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responses::{AgentReply, ResponseStatus};
    use chrono::TimeZone;
    use core_types::EmissionRecord;
    use rust_decimal_macros::dec;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, h, m, s).unwrap()
    }

    fn network() -> AgentNetwork {
        AgentNetwork::new("http://localhost:5555", at(14, 5, 9))
    }

    fn sample() -> Dataset {
        [("USA", 2020, 100.0), ("USA", 2021, 200.0), ("China", 2020, 300.0), ("India", 2021, 50.0)]
            .iter()
            .map(|&(c, y, e)| EmissionRecord::new(c, y, e).unwrap())
            .collect()
    }

    #[test]
    fn session_id_is_timestamped() {
        assert_eq!(network().session_id(), "carbon_emission_session_20240309_140509");
    }

    #[test]
    fn registration_is_idempotent() {
        let mut net = network();
        assert!(net.registration().is_none());

        let status = net.register_analyzer().status;
        assert_eq!(status, AgentStatus::Connected);
        net.register_analyzer();
        assert_eq!(net.registration().unwrap().capabilities.len(), 4);
    }

    #[test]
    fn tree_agent_uses_tree_formula() {
        let response = network().consult(AgentId::TreePlanting, &sample());

        assert_eq!(response.agent, "Tree Planting Optimizer");
        assert_eq!(response.status, ResponseStatus::Success);
        let AgentReply::TreePlanting(reply) = response.response else {
            panic!("expected a tree planting reply");
        };
        // 650 * 1000 / 48 = 13541.67
        assert_eq!(reply.recommended_trees, 13_541);
        assert_eq!(reply.cost_estimate, dec!(33852.5));
    }

    #[test]
    fn tree_agent_handles_huge_totals() {
        let data: Dataset = [EmissionRecord::new("USA", 2020, 1.0e16).unwrap()]
            .into_iter()
            .collect();
        let AgentReply::TreePlanting(reply) = network().consult(AgentId::TreePlanting, &data).response
        else {
            panic!("expected a tree planting reply");
        };
        assert_eq!(reply.recommended_trees, analytics::TreeImpact::MAX_TREES);
        assert_eq!(reply.cost_estimate, Decimal::from(reply.recommended_trees) * dec!(2.5));
    }

    #[test]
    fn policy_agent_ranks_countries() {
        let response = network().consult(AgentId::Policy, &sample());
        let AgentReply::Policy(reply) = response.response else {
            panic!("expected a policy reply");
        };
        assert_eq!(reply.priority_countries.len(), 3);
        assert_eq!(reply.priority_countries[2], "India");
    }

    #[test]
    fn trading_agent_prices_total_emissions() {
        let response = network().consult(AgentId::CarbonTrading, &sample());
        let AgentReply::CarbonTrading(reply) = response.response else {
            panic!("expected a trading reply");
        };
        assert_eq!(reply.current_carbon_price, "$85/ton CO2");
        assert_eq!(reply.total_offset_cost, "$55,250.00");
    }

    #[test]
    fn energy_reply_serializes_as_bare_payload() {
        let response = network().consult(AgentId::RenewableEnergy, &Dataset::default());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["agent"], "Renewable Energy Planner");
        assert_eq!(json["status"], "success");
        assert_eq!(json["response"]["recommended_mix"][0]["source"], "Solar");
        assert_eq!(json["response"]["recommended_mix"][0]["share"], "40%");
    }

    #[test]
    fn climate_thread_has_five_participants() {
        let net = network();
        let thread = net.create_thread(net.climate_action_participants(), at(9, 30, 0));

        assert_eq!(thread.thread_id, "climate_collab_093000");
        assert_eq!(thread.participants.len(), 5);
        assert_eq!(thread.participants[0], ANALYZER_AGENT_ID);
        assert_eq!(thread.coordinator, ANALYZER_AGENT_ID);
        assert_eq!(thread.topic, CLIMATE_TOPIC);
    }

    #[test]
    fn unknown_agent_key_is_rejected() {
        assert_eq!(crate::parse_agent("trading"), Err(crate::AgentError::UnknownAgent("trading".into())));
        assert_eq!(crate::parse_agent("carbon_trading"), Ok(AgentId::CarbonTrading));
    }
}
