use anyhow::{anyhow, Result};
use knap_algorithms::{knapsack::dynamic, SolverConfig};
use knap_challenges::knapsack::{Challenge, Instance, Selection, Track};
use knap_utils::{compress_obj, dejsonify, jsonify, seed_from_str};
use serde::{Deserialize, Serialize};
use std::{fs, io::Read, path::PathBuf};
use tracing::info;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SolveOutput {
    pub num_items: usize,
    pub capacity: u64,
    pub value: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvaluateOutput {
    pub value: u64,
}

/// Resolves an argument that is either `-` (stdin), a path ending in
/// `.json`, or literal json.
pub fn load_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow!("Failed to read from stdin: {}", e))?;
        Ok(buffer)
    } else if input.ends_with(".json") {
        fs::read_to_string(input).map_err(|e| anyhow!("Failed to read file {}: {}", input, e))
    } else {
        Ok(input.to_string())
    }
}

pub fn load_config(config: Option<&str>) -> Result<SolverConfig> {
    match config {
        None => Ok(SolverConfig::default()),
        Some(config) => dejsonify::<SolverConfig>(&load_input(config)?)
            .map_err(|e| anyhow!("Failed to parse config: {}", e)),
    }
}

pub fn load_challenge(input: &str) -> Result<Challenge> {
    let instance = dejsonify::<Instance>(&load_input(input)?)
        .map_err(|e| anyhow!("Failed to parse instance: {}", e))?;
    Ok(Challenge::try_from(instance)?)
}

pub fn load_selection(input: &str) -> Result<Selection> {
    dejsonify::<Selection>(&load_input(input)?)
        .map_err(|e| anyhow!("Failed to parse selection: {}", e))
}

pub fn solve(challenge: &Challenge, config: &SolverConfig) -> Result<SolveOutput> {
    let value = dynamic::solve_challenge(challenge, config)?;
    Ok(SolveOutput {
        num_items: challenge.num_items(),
        capacity: challenge.capacity(),
        value,
    })
}

pub fn generate(seed: &str, track: &str) -> Result<Challenge> {
    let track: Track = track.parse()?;
    info!(%track, "generating instance");
    Ok(Challenge::generate_instance(&seed_from_str(seed), &track)?)
}

pub fn evaluate(challenge: &Challenge, selection: &Selection) -> Result<EvaluateOutput> {
    let value = challenge.evaluate_selection(selection)?;
    Ok(EvaluateOutput { value })
}

/// Prints `output` as sorted-key json, or writes it to `path` (zlib
/// compressed when `compress` is set).
pub fn write_output<T: Serialize>(output: &T, path: Option<PathBuf>, compress: bool) -> Result<()> {
    match path {
        Some(path) => {
            if compress {
                fs::write(&path, compress_obj(output)?)?;
            } else {
                fs::write(&path, jsonify(output))?;
            }
            info!(?path, compress, "output written");
        }
        None => println!("{}", jsonify(output)),
    }
    Ok(())
}

pub struct DemoCase {
    pub name: &'static str,
    pub weights: Vec<i64>,
    pub values: Vec<i64>,
    pub capacity: i64,
    pub expected: u64,
}

fn case(
    name: &'static str,
    weights: &[i64],
    values: &[i64],
    capacity: i64,
    expected: u64,
) -> DemoCase {
    DemoCase {
        name,
        weights: weights.to_vec(),
        values: values.to_vec(),
        capacity,
        expected,
    }
}

/// Reference scenarios, including the value-density trap.
pub fn demo_cases() -> Vec<DemoCase> {
    vec![
        case("Empty lists", &[], &[], 10, 0),
        case("Zero capacity", &[1, 2, 3], &[10, 20, 30], 0, 0),
        case("Single item fits", &[5], &[100], 10, 100),
        case("Single item doesn't fit", &[15], &[100], 10, 0),
        // (w=2,v=3) + (w=3,v=4)
        case("Classic example", &[2, 3, 4, 5], &[3, 4, 5, 6], 5, 7),
        case("All items fit", &[1, 2, 3], &[10, 20, 30], 10, 60),
        case("No items fit", &[10, 20, 30], &[100, 200, 300], 5, 0),
        // (w=20,v=100) + (w=30,v=120)
        case("Optimal selection", &[10, 20, 30], &[60, 100, 120], 50, 220),
        // Best density is (w=3,v=4) but (w=4,v=5) wins
        case("Greedy trap (value density)", &[1, 3, 4], &[1, 4, 5], 4, 5),
    ]
}

/// Runs every demo case, printing a report. Returns whether all passed.
pub fn run_demo(config: &SolverConfig) -> Result<bool> {
    println!("0/1 Knapsack Problem - Space Optimized DP Solution");
    println!("{}", "=".repeat(55));

    let mut all_passed = true;
    for case in demo_cases() {
        let result =
            dynamic::solve_with_config(&case.weights, &case.values, case.capacity, config)?;
        let passed = result == case.expected;
        all_passed &= passed;
        println!("\n{}:", case.name);
        println!("  Weights:  {:?}", case.weights);
        println!("  Values:   {:?}", case.values);
        println!("  Capacity: {}", case.capacity);
        println!(
            "  Expected: {}, Got: {} [{}]",
            case.expected,
            result,
            if passed { "PASS" } else { "FAIL" }
        );
    }

    println!("\n{}", "=".repeat(55));
    if all_passed {
        println!("All tests passed!");
    } else {
        println!("Some tests failed!");
    }
    Ok(all_passed)
}
