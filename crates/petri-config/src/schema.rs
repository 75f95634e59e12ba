//! The parameter schema table.
//!
//! One row per parameter: name, value kind, range, and whether the
//! parameter must appear.  The table is the single source of truth —
//! the loader walks it for lookup, type dispatch, and the
//! missing-parameter sweep, and holds no parameter knowledge of its own.

/// Value kind and range for one parameter.
#[derive(Debug, Clone, Copy)]
pub enum ParamKind {
    /// Integer within `min..=max`.
    Int { min: i64, max: i64 },
    /// Float in [0, 1].
    Prob,
    /// String of instruction characters.
    Program,
}

/// One row of the schema table.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name:     &'static str,
    pub kind:     ParamKind,
    pub required: bool,
}

const NON_NEGATIVE: ParamKind = ParamKind::Int { min: 0, max: i64::MAX };

/// All recognised parameters.
pub const SCHEMA: &[ParamSpec] = &[
    ParamSpec { name: "rounds",                 kind: NON_NEGATIVE, required: true },
    ParamSpec { name: "initial_agents",         kind: NON_NEGATIVE, required: true },
    ParamSpec { name: "initial_energy",         kind: NON_NEGATIVE, required: true },
    ParamSpec { name: "food_energy",            kind: NON_NEGATIVE, required: true },
    ParamSpec {
        name:     "food_ripening_time",
        kind:     ParamKind::Int { min: 0, max: u32::MAX as i64 },
        required: true,
    },
    ParamSpec { name: "round_cost",             kind: NON_NEGATIVE, required: true },
    ParamSpec { name: "reproduction_limit",     kind: NON_NEGATIVE, required: true },
    ParamSpec {
        // An interval of 0 would never print; the snapshot cadence needs
        // at least 1.
        name:     "print_interval",
        kind:     ParamKind::Int { min: 1, max: i64::MAX },
        required: true,
    },
    ParamSpec { name: "reproduction_odds",      kind: ParamKind::Prob, required: true },
    ParamSpec { name: "parent_energy_fraction", kind: ParamKind::Prob, required: true },
    ParamSpec { name: "removal_odds",           kind: ParamKind::Prob, required: true },
    ParamSpec { name: "addition_odds",          kind: ParamKind::Prob, required: true },
    ParamSpec { name: "change_odds",            kind: ParamKind::Prob, required: true },
    ParamSpec { name: "initial_program",        kind: ParamKind::Program, required: true },
    ParamSpec { name: "instruction_set",        kind: ParamKind::Program, required: true },
    ParamSpec { name: "seed",                   kind: NON_NEGATIVE, required: false },
];

/// Look a parameter up by name.
pub fn find(name: &str) -> Option<&'static ParamSpec> {
    SCHEMA.iter().find(|spec| spec.name == name)
}
