use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use normalize::{
    assemble::RejectPolicy,
    rules::{self, RuleSet},
};

/// CLI arguments relating to how lines are split and rejected.
#[derive(Args, Clone, Debug)]
pub struct RulesArgs {
    /// YAML file with additional substitution rules, as a list of `name`,
    /// `pattern` and `replacement` entries. These run after the built-in
    /// rules and before runs of spaces are turned into field boundaries.
    #[arg(long)]
    extra_rules: Option<PathBuf>,

    /// Fail a document if more than this fraction (0 to 1) of its data lines
    /// cannot be split into a full row. By default such lines are dropped
    /// regardless of how many there are.
    #[arg(long, value_parser = parse_ratio)]
    max_rejected_ratio: Option<f64>,
}

impl RulesArgs {
    /// Loads the rule set, including any extra rules.
    pub fn load_rules(&self) -> Result<RuleSet> {
        let Some(path) = &self.extra_rules else {
            return Ok(RuleSet::builtin().clone());
        };

        let specs = rules::load_rule_specs(path)?;
        log::info!("loaded {} extra rules from {:?}", specs.len(), path);
        RuleSet::with_extra(&specs).with_context(|| format!("compiling rules from {:?}", path))
    }

    pub fn reject_policy(&self) -> RejectPolicy {
        RejectPolicy::from_max_ratio(self.max_rejected_ratio)
    }
}

fn parse_ratio(s: &str) -> std::result::Result<f64, String> {
    let ratio: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&ratio) {
        Ok(ratio)
    } else {
        Err(format!("{ratio} is not between 0 and 1"))
    }
}
