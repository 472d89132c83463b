//! Chart Description Report
//!
//! This example loads a chart document and reconciles the names its
//! transitions use against the names it declares.
//!
//! Key concepts:
//! - Deserializing a chart with serde
//! - Used, unused and undeclared names per kind
//! - Canonical rendering of parsed guards
//! - Collecting every problem at once with validation
//!
//! Run with: cargo run --example describe_chart

use statechart::chart::{NameKind, StateChartDef};
use statechart::validate::validate_chart;
use stillwater::validation::Validation;

const VENDING_MACHINE: &str = r#"{
    "name": "vending",
    "events": {
        "coin": "A coin was inserted",
        "select": "A product button was pressed",
        "service": null
    },
    "conditions": {
        "credit": "Enough credit for the selection",
        "stocked": "The selected slot has items"
    },
    "actions": {
        "dispense": "Drop the product",
        "refund": "Return the coins"
    },
    "root state": {
        "name": "vending",
        "states": [
            {
                "name": "Idle",
                "transitions": [
                    {"event": "coin", "action": "addCredit", "target": "Paying"}
                ]
            },
            {
                "name": "Paying",
                "transitions": [
                    {"event": "coin", "action": "addCredit"},
                    {"event": "select", "guard": "credit and stocked", "action": "dispense", "target": "Idle"},
                    {"event": "select", "guard": "not stocked or   emptied", "action": "refund", "target": "Idle"}
                ]
            }
        ]
    }
}"#;

fn print_kind(chart: &StateChartDef, kind: NameKind) -> Result<(), Box<dyn std::error::Error>> {
    let descriptions = chart.descriptions(kind)?;

    println!("{kind:?}s:");
    for (name, description) in descriptions.all_used() {
        println!("  {name:<10} {}", description.as_deref().unwrap_or("-"));
    }
    for name in descriptions.all_unused().keys() {
        println!("  {name:<10} (declared, never used)");
    }
    for name in descriptions.undeclared() {
        println!("  {name:<10} (used, not declared)");
    }
    println!();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Chart Description Report ===\n");

    let chart: StateChartDef = serde_json::from_str(VENDING_MACHINE)?;

    for kind in [NameKind::Event, NameKind::Condition, NameKind::Action] {
        print_kind(&chart, kind)?;
    }

    println!("Guards:");
    for guard in chart.root.guard_expressions()? {
        println!("  {guard}");
    }
    println!();

    match validate_chart(&chart) {
        Validation::Success(()) => println!("Chart is valid"),
        Validation::Failure(errors) => {
            for error in errors {
                println!("error: {error}");
            }
        }
    }

    Ok(())
}
