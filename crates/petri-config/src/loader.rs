//! The parameter-file parser.

use std::collections::HashMap;
use std::path::Path;

use petri_core::{Instruction, SimConfig};

use crate::error::{ConfigError, ConfigResult};
use crate::schema::{self, ParamKind};

// ── Parsed values ─────────────────────────────────────────────────────────────

/// One parsed parameter value.  The variant always matches the schema
/// kind for its name — `parse_value` is the only producer.
#[derive(Debug, Clone)]
enum Value {
    Int(i64),
    Prob(f64),
    Program(Vec<Instruction>),
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate a parameter file.
pub fn load_config(path: &Path) -> ConfigResult<SimConfig> {
    let text = std::fs::read_to_string(path)?;
    parse_config(&text)
}

/// Parse and validate parameter text against [`schema::SCHEMA`].
pub fn parse_config(text: &str) -> ConfigResult<SimConfig> {
    let mut values: HashMap<&'static str, Value> = HashMap::new();

    // ── Per-line parse ────────────────────────────────────────────────────
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let mut tokens = raw.split_whitespace();
        let Some(name) = tokens.next() else {
            continue; // blank line
        };

        let Some(spec) = schema::find(name) else {
            return Err(ConfigError::UnknownParameter {
                line,
                name: name.to_string(),
            });
        };
        if values.contains_key(spec.name) {
            return Err(ConfigError::DuplicateParameter {
                line,
                name: name.to_string(),
            });
        }

        let Some(token) = tokens.next() else {
            return Err(ConfigError::MissingValue {
                line,
                name: name.to_string(),
            });
        };
        if tokens.next().is_some() {
            return Err(ConfigError::TrailingInput { line });
        }

        let value = parse_value(spec.name, spec.kind, token, line)?;
        values.insert(spec.name, value);
    }

    // ── Missing-parameter sweep, in schema order ──────────────────────────
    for spec in schema::SCHEMA {
        if spec.required && !values.contains_key(spec.name) {
            return Err(ConfigError::MissingParameter(spec.name));
        }
    }

    // ── Assembly ──────────────────────────────────────────────────────────
    let config = SimConfig {
        rounds: take_int(&mut values, "rounds") as u64,
        initial_agents: take_int(&mut values, "initial_agents") as usize,
        initial_energy: take_int(&mut values, "initial_energy"),
        food_energy: take_int(&mut values, "food_energy"),
        food_ripening_time: take_int(&mut values, "food_ripening_time") as u32,
        round_cost: take_int(&mut values, "round_cost"),
        reproduction_limit: take_int(&mut values, "reproduction_limit"),
        print_interval: take_int(&mut values, "print_interval") as u64,
        reproduction_odds: take_prob(&mut values, "reproduction_odds"),
        parent_energy_fraction: take_prob(&mut values, "parent_energy_fraction"),
        removal_odds: take_prob(&mut values, "removal_odds"),
        addition_odds: take_prob(&mut values, "addition_odds"),
        change_odds: take_prob(&mut values, "change_odds"),
        initial_program: take_program(&mut values, "initial_program"),
        instruction_set: take_program(&mut values, "instruction_set"),
        seed: values
            .remove("seed")
            .map(|v| match v {
                Value::Int(n) => n as u64,
                _ => unreachable!("seed parsed as Int per schema"),
            })
            .unwrap_or(0),
    };

    // ── Cross-field check: the program may only use pool instructions ─────
    for instruction in &config.initial_program {
        if !config.instruction_set.contains(instruction) {
            return Err(ConfigError::InstructionOutsidePool(instruction.as_char()));
        }
    }

    Ok(config)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_value(
    name: &'static str,
    kind: ParamKind,
    token: &str,
    line: usize,
) -> ConfigResult<Value> {
    match kind {
        ParamKind::Int { min, max } => {
            let n: i64 = token.parse().map_err(|_| ConfigError::InvalidValue {
                line,
                name,
                expected: "an integer",
                got: token.to_string(),
            })?;
            if n < min || n > max {
                return Err(ConfigError::OutOfRange {
                    line,
                    name,
                    got: token.to_string(),
                });
            }
            Ok(Value::Int(n))
        }
        ParamKind::Prob => {
            let p: f64 = token.parse().map_err(|_| ConfigError::InvalidValue {
                line,
                name,
                expected: "a number in [0, 1]",
                got: token.to_string(),
            })?;
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::OutOfRange {
                    line,
                    name,
                    got: token.to_string(),
                });
            }
            Ok(Value::Prob(p))
        }
        ParamKind::Program => {
            let mut program = Vec::with_capacity(token.len());
            for c in token.chars() {
                match Instruction::from_char(c) {
                    Some(instruction) => program.push(instruction),
                    None => return Err(ConfigError::UnknownInstruction { line, found: c }),
                }
            }
            Ok(Value::Program(program))
        }
    }
}

// The take_* helpers run after the missing-parameter sweep, so the value
// is present and of the schema's kind by construction.

fn take_int(values: &mut HashMap<&'static str, Value>, name: &str) -> i64 {
    match values.remove(name) {
        Some(Value::Int(n)) => n,
        _ => unreachable!("{name} validated as Int per schema"),
    }
}

fn take_prob(values: &mut HashMap<&'static str, Value>, name: &str) -> f64 {
    match values.remove(name) {
        Some(Value::Prob(p)) => p,
        _ => unreachable!("{name} validated as Prob per schema"),
    }
}

fn take_program(values: &mut HashMap<&'static str, Value>, name: &str) -> Vec<Instruction> {
    match values.remove(name) {
        Some(Value::Program(p)) => p,
        _ => unreachable!("{name} validated as Program per schema"),
    }
}
