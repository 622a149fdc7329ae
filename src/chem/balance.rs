//! Equation checking: were the right species named, and is it balanced?
//!
//! The species check is purely lexical (whitespace removed, case kept). The
//! atom balance runs only when every expected species was found, so a wrong
//! substance never produces a pile of confusing per-element mismatches.

use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;

use super::formula::{parse_species, Species};

/// Which side of the arrow an entry or issue belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Reactants,
    Products,
}

/// One `coefficient formula` term of an equation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub coefficient: u32,
    pub formula: String,
}

impl Term {
    pub fn new(coefficient: u32, formula: impl Into<String>) -> Self {
        Self {
            coefficient: coefficient.max(1),
            formula: formula.into(),
        }
    }

    /// Builds a term from raw form fields. See [`parse_coefficient`].
    pub fn from_input(coefficient: &str, formula: &str) -> Self {
        Self::new(parse_coefficient(coefficient), formula)
    }
}

/// One side of an equation as entered, in input order.
pub type EquationSide = Vec<Term>;

/// The answer key of a challenge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpectedEquation {
    pub reactants: Vec<Term>,
    pub products: Vec<Term>,
}

/// Knobs for [`check_balance_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BalanceRules {
    /// Also require the net ionic charge to match (redox equations).
    pub check_charge: bool,
}

impl BalanceRules {
    pub const ATOMS_ONLY: BalanceRules = BalanceRules { check_charge: false };
    pub const WITH_CHARGE: BalanceRules = BalanceRules { check_charge: true };
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BalanceIssue {
    /// An expected species has no lexically matching entry on its side.
    MissingSpecies { side: Side, formula: String },
    /// A non-blank entry that is not a well-formed formula.
    UnrecognizedFormula { side: Side, formula: String },
    AtomImbalance { element: String, left: u64, right: u64 },
    ChargeImbalance { left: i64, right: i64 },
}

/// Result of one check. An empty issue list means the answer is correct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BalanceReport {
    pub issues: Vec<BalanceIssue>,
}

impl BalanceReport {
    pub fn is_balanced(&self) -> bool {
        self.issues.is_empty()
    }

    /// True when every issue is a numeric imbalance, i.e. the species were
    /// right but the coefficients were not.
    pub fn only_imbalances(&self) -> bool {
        self.issues.iter().all(|issue| {
            matches!(
                issue,
                BalanceIssue::AtomImbalance { .. } | BalanceIssue::ChargeImbalance { .. }
            )
        })
    }
}

/// Coefficient from a form field: blank is 1, and anything that is not a
/// positive integer is also taken as 1 so totals stay well defined.
pub fn parse_coefficient(raw: &str) -> u32 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 1;
    }
    match raw.parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => {
            debug!("coefficient '{raw}' is not a positive integer, using 1");
            1
        }
    }
}

/// Removes all whitespace, the normal form for lexical comparison.
pub fn normalize_formula(formula: &str) -> String {
    formula.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Checks atoms only. See [`check_balance_with`].
pub fn check_balance(
    expected: &ExpectedEquation,
    reactants: &[Term],
    products: &[Term],
) -> BalanceReport {
    check_balance_with(BalanceRules::ATOMS_ONLY, expected, reactants, products)
}

pub fn check_balance_with(
    rules: BalanceRules,
    expected: &ExpectedEquation,
    reactants: &[Term],
    products: &[Term],
) -> BalanceReport {
    let left = prepare_side(reactants);
    let right = prepare_side(products);

    let mut issues = Vec::new();
    missing_species(Side::Reactants, &expected.reactants, &left, &mut issues);
    missing_species(Side::Products, &expected.products, &right, &mut issues);
    unrecognized(Side::Reactants, &left, &mut issues);
    unrecognized(Side::Products, &right, &mut issues);

    if issues.is_empty() {
        let (l_atoms, l_charge) = totals(&left);
        let (r_atoms, r_charge) = totals(&right);

        let mut elements: Vec<&String> = l_atoms.keys().chain(r_atoms.keys()).collect();
        elements.sort();
        elements.dedup();
        for element in elements {
            let l = l_atoms.get(element).copied().unwrap_or(0);
            let r = r_atoms.get(element).copied().unwrap_or(0);
            if l != r {
                issues.push(BalanceIssue::AtomImbalance {
                    element: element.clone(),
                    left: l,
                    right: r,
                });
            }
        }

        if rules.check_charge && l_charge != r_charge {
            issues.push(BalanceIssue::ChargeImbalance {
                left: l_charge,
                right: r_charge,
            });
        }
    }

    BalanceReport { issues }
}

struct Entry<'a> {
    coefficient: u32,
    original: &'a str,
    normalized: String,
    species: Option<Species>,
}

fn prepare_side(terms: &[Term]) -> Vec<Entry<'_>> {
    terms
        .iter()
        .filter_map(|term| {
            let normalized = normalize_formula(&term.formula);
            if normalized.is_empty() {
                return None;
            }
            let species = parse_species(&normalized).ok();
            Some(Entry {
                coefficient: term.coefficient.max(1),
                original: term.formula.trim(),
                normalized,
                species,
            })
        })
        .collect()
}

fn missing_species(side: Side, expected: &[Term], entries: &[Entry<'_>], issues: &mut Vec<BalanceIssue>) {
    for want in expected {
        let want_norm = normalize_formula(&want.formula);
        let found = entries
            .iter()
            .any(|e| e.species.is_some() && e.normalized == want_norm);
        if !found {
            issues.push(BalanceIssue::MissingSpecies {
                side,
                formula: want.formula.clone(),
            });
        }
    }
}

fn unrecognized(side: Side, entries: &[Entry<'_>], issues: &mut Vec<BalanceIssue>) {
    for entry in entries.iter().filter(|e| e.species.is_none()) {
        issues.push(BalanceIssue::UnrecognizedFormula {
            side,
            formula: entry.original.to_string(),
        });
    }
}

fn totals(entries: &[Entry<'_>]) -> (BTreeMap<String, u64>, i64) {
    let mut atoms: BTreeMap<String, u64> = BTreeMap::new();
    let mut charge: i64 = 0;
    for entry in entries {
        let Some(species) = &entry.species else {
            continue;
        };
        let k = u64::from(entry.coefficient);
        for (symbol, n) in &species.atoms {
            let slot = atoms.entry(symbol.clone()).or_insert(0);
            *slot = slot.saturating_add(k.saturating_mul(u64::from(*n)));
        }
        charge = charge.saturating_add(i64::from(species.charge).saturating_mul(k as i64));
    }
    (atoms, charge)
}
