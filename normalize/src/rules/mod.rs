//! Ordered substitutions that mark field boundaries the PDF text extraction
//! rendered as a single space.
//!
//! Each rule is a regex replacement applied to the whole line. Rules run in
//! table order, and several of them only exist to patch up what an earlier,
//! more general rule did to a known data point, so the order matters.


use std::{borrow::Cow, fs::File, path::Path};

use anyhow::{Context, Result};
use lazy_regex::{Lazy, Regex};
use serde_derive::Deserialize;

/// Explicit field delimiter inserted by the rules.
pub const DELIMITER: char = '\t';

/// Tire manufacturers that appear in the tire column.
///
/// "MG" is also a tire manufacturer, but it is left out because it is a car
/// make too. The kart models that run on MG tires have their own rule.
pub const TIRE_MANUFACTURERS: &[&str] = &[
    "BFGoodrich",
    "Bridgestone",
    "Multi",
    "Hoosier",
    "Continental",
    "Avon",
];

/// Serialised form of a rule, as read from an extra rules file.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct RuleSpec {
    pub name: String,
    pub pattern: String,
    /// Replacement text. Capture groups are referenced as `${1}` or
    /// `${name}`.
    pub replacement: String,
}

#[derive(Debug, thiserror::Error)]
#[error("rule {name:?} has an invalid pattern")]
pub struct RuleError {
    pub name: String,
    #[source]
    pub source: lazy_regex::regex::Error,
}

/// A single compiled substitution.
#[derive(Clone, Debug)]
pub struct Rule {
    name: String,
    pattern: Regex,
    replacement: String,
}

impl Rule {
    pub fn new(spec: &RuleSpec) -> std::result::Result<Self, RuleError> {
        let pattern = Regex::new(&spec.pattern).map_err(|source| RuleError {
            name: spec.name.clone(),
            source,
        })?;
        Ok(Self {
            name: spec.name.clone(),
            pattern,
            replacement: spec.replacement.clone(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Applies the rule to every non-overlapping match in `line`.
    pub fn apply<'t>(&self, line: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(line, self.replacement.as_str())
    }
}

/// The ordered rule table used by the line normaliser.
#[derive(Clone, Debug)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

static BUILTIN: Lazy<RuleSet> = Lazy::new(|| {
    let rules = builtin_specs()
        .iter()
        .map(Rule::new)
        .collect::<std::result::Result<Vec<_>, _>>()
        .expect("built-in rules must compile");
    RuleSet { rules }
});

impl RuleSet {
    /// The rules tuned for the results sheets.
    pub fn builtin() -> &'static RuleSet {
        &BUILTIN
    }

    /// The built-in rules followed by `extra`, in order.
    pub fn with_extra(extra: &[RuleSpec]) -> std::result::Result<Self, RuleError> {
        let mut rules = BUILTIN.rules.clone();
        for spec in extra {
            rules.push(Rule::new(spec)?);
        }
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Runs every rule over `line`, in order.
    pub fn apply(&self, line: &str) -> String {
        let mut line = line.to_string();
        for rule in &self.rules {
            let replaced = match rule.apply(&line) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(replaced) => replaced,
            };
            log::trace!("rule {:?} rewrote line to {:?}", rule.name, replaced);
            line = replaced;
        }
        line
    }
}

/// Reads a YAML list of [RuleSpec] from `path`.
pub fn load_rule_specs(path: &Path) -> Result<Vec<RuleSpec>> {
    let f = File::open(path).with_context(|| format!("opening rules file {:?}", path))?;
    serde_yaml_ng::from_reader(f).with_context(|| format!("parsing rules file {:?}", path))
}

fn spec(name: &str, pattern: impl Into<String>, replacement: &str) -> RuleSpec {
    RuleSpec {
        name: name.to_string(),
        pattern: pattern.into(),
        replacement: replacement.to_string(),
    }
}

fn builtin_specs() -> Vec<RuleSpec> {
    let tires = TIRE_MANUFACTURERS.join("|");
    vec![
        // "Lastname 1999 Mazda Miata". Usually hits the longest last name on
        // each page.
        spec("name-year", r"(\w+) (\d\d\d\d)", "${1}\t${2}"),
        spec("name-no-time", r"(\w+) No\s*Time", "${1}\tNo Time"),
        // No model year.
        spec("canekeratne", r"Canekeratne BMW", "Canekeratne\tBMW"),
        spec("dirkschneider", r"Dirkschneider Impreza", "Dirkschneider\tImpreza"),
        spec("iv-1972", r"IV1972", "IV\t1972"),
        // Junior kart, no model year.
        spec("hesskamp", r"Hesskamp Margay", "Hesskamp\tMargay"),
        // Bad data in the source document.
        spec(
            "hudson",
            r"Steve Hudson\t1990\s+Mazda Miata",
            "Steve Hudson\t1990 Mazda Miata",
        ),
        // Datsun model numbers look like years.
        spec("datsun-model", r"Datsun\t(\d\d\d\d)", "Datsun ${1}"),
        // "BFGoodrich 99.234". Hits whichever tire name is longest.
        spec(
            "tire-number",
            format!(r"({tires}) (\d\d)"),
            "${1}\t${2}",
        ),
        // "2003 Chevy Corvette Z06 BFGoodrich". Hits the longest car name.
        spec(
            "vehicle-tire",
            format!(r"([\w\d]+) ({tires})"),
            "${1}\t${2}",
        ),
        spec(
            "vehicle-bfgoodrich-joined",
            r"([\w\d]+)(BFGoodrich)",
            "${1}\t${2}",
        ),
        spec("kart-mg", r"(Maky Ka|Margay|Star) MG", "${1}\tMG"),
    ]
}
