//! # Ventify CLI Application
//!
//! Terminal front-end for the tank venting calculation engine.
//!
//! ## Usage
//!
//! - `vent_cli <input.json>` - deserialize a `CalculationInput`, validate
//!   it, calculate, and print the report plus the result as JSON
//! - `vent_cli` - interactive prompt demo for a bare-metal 7th-edition
//!   scenario

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use vent_core::calculations::{calculate, CalculationResult};
use vent_core::fluids::FluidProperties;
use vent_core::tank::{CalculationInput, Edition, OutgoingStream, TankConfiguration};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn print_result(result: &CalculationResult) {
    println!("═══════════════════════════════════════");
    println!("  TANK VENTING CALCULATION RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("{}", result.format_report());
    println!();
    if result.warnings.any() {
        println!("Warnings:");
        if result.warnings.capacity_exceeds_table {
            println!("  - Tank capacity exceeds the 30 000 m³ vent table");
        }
        if result.warnings.zero_environmental_factor {
            println!("  - Underground storage: no emergency venting requirement");
        }
        if result.warnings.hexane_defaults_applied {
            println!("  - Fluid properties defaulted from Hexane");
        }
        println!();
    }
    println!("JSON Output (for LLM/API use):");
    if let Ok(json) = serde_json::to_string_pretty(result) {
        println!("{}", json);
    }
}

fn run_file(path: &str) -> ExitCode {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Error reading '{}': {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let input: CalculationInput = match serde_json::from_str(&contents) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error parsing '{}': {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = input.validate() {
        eprintln!("Invalid input: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        return ExitCode::FAILURE;
    }

    match calculate(&input) {
        Ok(result) => {
            print_result(&result);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn run_demo() -> ExitCode {
    println!("Ventify CLI - Tank Venting Calculator (API Std 2000)");
    println!("====================================================");
    println!();

    let diameter_mm = prompt_f64("Enter tank diameter (mm) [24000]: ", 24_000.0);
    let height_mm = prompt_f64("Enter tank height (mm) [17500]: ", 17_500.0);
    let latitude_deg = prompt_f64("Enter site latitude (deg) [12.7]: ", 12.7);
    let outflow_m3_h = prompt_f64("Enter pump-out rate (m³/h) [368.9]: ", 368.9);

    println!();
    println!("Calculating bare-metal tank, 7th edition...");
    println!();

    let input = CalculationInput {
        label: "CLI-Demo".to_string(),
        diameter_mm,
        height_mm,
        latitude_deg,
        design_pressure_kpag: 2.5,
        configuration: TankConfiguration::BareMetal,
        fluid: FluidProperties::default(),
        incoming: vec![],
        outgoing: vec![OutgoingStream::new(outflow_m3_h, "Pump-out")],
        drain: None,
        edition: Edition::Seventh,
    };

    if let Err(e) = input.validate() {
        eprintln!("Invalid input: {}", e);
        return ExitCode::FAILURE;
    }

    match calculate(&input) {
        Ok(result) => {
            print_result(&result);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    match std::env::args().nth(1) {
        Some(path) => run_file(&path),
        None => run_demo(),
    }
}
