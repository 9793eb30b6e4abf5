//! Terminal rendering of dashboard views.

use agents::AgentProfile;
use analytics::{AnalysisResult, ChartSeries};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use dashboard::{CollaborationSummary, MetricCard};
use serde::Serialize;

const BAR_WIDTH: usize = 30;

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.to_vec());
    table
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn metric_cards(cards: &[MetricCard]) -> Table {
    let mut table = new_table(&["Metric", "Value"]);
    for card in cards {
        table.add_row(vec![
            Cell::new(card.label),
            Cell::new(&card.value).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn print_analysis(
    cards: &[MetricCard],
    analysis: &AnalysisResult,
    collaboration: Option<&CollaborationSummary>,
) {
    println!("{}", metric_cards(cards));

    println!("\nKey Insights:");
    for insight in &analysis.key_insights {
        println!("  • {}", insight);
    }

    println!("\nRecommendations:");
    for rec in &analysis.recommendations {
        println!("  • {}", rec);
    }

    let impact = &analysis.tree_impact;
    let mut trees = new_table(&["Tree Impact", "Value"]);
    trees.add_row(vec!["Trees needed".to_string(), impact.trees_needed.to_string()]);
    trees.add_row(vec![
        "Forest area (acres)".to_string(),
        format!("{:.2}", impact.forest_area_acres),
    ]);
    trees.add_row(vec![
        "Annual absorption (lbs CO2)".to_string(),
        impact.annual_absorption_lbs.to_string(),
    ]);
    println!("\n{}", trees);

    let mut sectors = new_table(&["Sector", "Priority"]);
    for (sector, priority) in &analysis.sector_priorities {
        sectors.add_row(vec![sector.to_string(), priority.clone()]);
    }
    println!("\n{}", sectors);

    println!("\nAgent Collaboration:");
    match collaboration {
        Some(summary) => {
            println!("  Multi-agent system engaged.");
            println!("  Agents consulted:      {}", summary.agents_consulted);
            println!("  Collaboration threads: {}", summary.collaboration_threads);
            println!("  CORAL tokens used:     {}", summary.tokens_used);
        }
        None => println!("  Rich analysis unavailable; showing data-derived fallback."),
    }
}

/// One series as a table with a proportional bar column.
pub fn chart(series: &ChartSeries) -> Table {
    let mut table = new_table(&[series.title.as_str(), "Value", ""]);
    let max = series.max_value().unwrap_or(0.0);
    for point in &series.points {
        let width = if max > 0.0 {
            ((point.value / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        table.add_row(vec![
            Cell::new(&point.label),
            Cell::new(format!("{:.2}", point.value)).set_alignment(CellAlignment::Right),
            Cell::new("█".repeat(width)),
        ]);
    }
    table
}

pub fn agent_directory(profiles: &[&AgentProfile]) -> Table {
    let mut table = new_table(&["Agent", "Name", "Cost (CORAL)", "Capabilities"]);
    for profile in profiles {
        table.add_row(vec![
            Cell::new(profile.id),
            Cell::new(profile.name),
            Cell::new(profile.cost_per_query).set_alignment(CellAlignment::Right),
            Cell::new(profile.capabilities.join(", ")),
        ]);
    }
    table
}
