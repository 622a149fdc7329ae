//! Chemical formula parsing.
//!
//! A formula such as `Ca(HCO3)2` or `Cr2O7^2-` is turned into per-element
//! atom counts. The optional charge suffix after `^` is split off first and
//! never contributes atoms. Groups are handled with an explicit stack of
//! partial counts, so nesting depth is bounded only by the input.

use std::collections::btree_map::{self, BTreeMap};

use crate::error::FormulaError;

/// Token used for the electron in redox half equations (`e^-`).
pub const ELECTRON: &str = "e";

/// Element symbol -> number of atoms. Counts are always >= 1; absent
/// elements are simply not stored. Iteration is alphabetical by symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AtomCount(BTreeMap<String, u32>);

impl AtomCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atoms of `symbol`, 0 when absent.
    pub fn get(&self, symbol: &str) -> u32 {
        self.0.get(symbol).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, u32> {
        self.0.iter()
    }

    /// Adds `n` atoms of `symbol`. Adding zero is a no-op so the map never
    /// holds a zero count.
    pub fn add(&mut self, symbol: &str, n: u32) -> Result<(), FormulaError> {
        if n == 0 {
            return Ok(());
        }
        let slot = self.0.entry(symbol.to_string()).or_insert(0);
        *slot = slot.checked_add(n).ok_or(FormulaError::Overflow)?;
        Ok(())
    }

    /// Adds every count of `other` multiplied by `factor`.
    pub fn merge_scaled(&mut self, other: &AtomCount, factor: u32) -> Result<(), FormulaError> {
        for (symbol, n) in other.iter() {
            let scaled = n.checked_mul(factor).ok_or(FormulaError::Overflow)?;
            self.add(symbol, scaled)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a AtomCount {
    type Item = (&'a String, &'a u32);
    type IntoIter = btree_map::Iter<'a, String, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<const N: usize> From<[(&str, u32); N]> for AtomCount {
    fn from(pairs: [(&str, u32); N]) -> Self {
        let mut counts = AtomCount::new();
        for (symbol, n) in pairs {
            // literal tables are small; overflow is not reachable here
            let _ = counts.add(symbol, n);
        }
        counts
    }
}

/// A parsed formula: its atoms plus the net charge from the `^` suffix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Species {
    pub atoms: AtomCount,
    pub charge: i32,
}

/// Parses a formula into atom counts, ignoring any charge annotation.
///
/// `parse_formula("Ca(HCO3)2")` gives `{C: 2, Ca: 1, H: 2, O: 6}`.
pub fn parse_formula(input: &str) -> Result<AtomCount, FormulaError> {
    parse_species(input).map(|species| species.atoms)
}

/// Parses a formula and its charge suffix.
///
/// The input must already be whitespace-free. `e`, `e^-` denote the electron.
pub fn parse_species(input: &str) -> Result<Species, FormulaError> {
    let (body, suffix) = match input.split_once('^') {
        Some((body, suffix)) => (body, Some(suffix)),
        None => (input, None),
    };
    let charge = match suffix {
        Some(suffix) => parse_charge(suffix)?,
        None => 0,
    };

    if body == ELECTRON {
        if suffix.is_some() && charge != -1 {
            return Err(FormulaError::BadCharge {
                suffix: suffix.unwrap_or_default().to_string(),
            });
        }
        return Ok(Species {
            atoms: AtomCount::new(),
            charge: -1,
        });
    }

    let atoms = parse_body(body)?;
    Ok(Species { atoms, charge })
}

/// `2+` -> 2, `-` -> -1, `3-` -> -3. Magnitude digits come before the sign.
fn parse_charge(suffix: &str) -> Result<i32, FormulaError> {
    let bad = || FormulaError::BadCharge {
        suffix: suffix.to_string(),
    };
    let (digits, sign) = match suffix.strip_suffix('+') {
        Some(digits) => (digits, 1),
        None => match suffix.strip_suffix('-') {
            Some(digits) => (digits, -1),
            None => return Err(bad()),
        },
    };
    let magnitude = if digits.is_empty() {
        1
    } else {
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(bad());
        }
        digits.parse::<i32>().map_err(|_| bad())?
    };
    if magnitude == 0 {
        return Err(bad());
    }
    Ok(sign * magnitude)
}

fn parse_body(body: &str) -> Result<AtomCount, FormulaError> {
    if body.is_empty() {
        return Err(FormulaError::Empty);
    }
    let chars: Vec<char> = body.chars().collect();

    // Enclosing partial counts, each with the position of the '(' that
    // suspended it.
    let mut stack: Vec<(AtomCount, usize)> = Vec::new();
    let mut current = AtomCount::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '(' => {
                stack.push((std::mem::take(&mut current), i));
                i += 1;
            }
            ')' => {
                let close = i;
                let Some((outer, open)) = stack.pop() else {
                    return Err(FormulaError::UnmatchedClose { pos: close });
                };
                if current.is_empty() {
                    return Err(FormulaError::EmptyGroup { pos: open });
                }
                i += 1;
                let multiplier = read_count(&chars, &mut i)?;
                let group = std::mem::replace(&mut current, outer);
                current.merge_scaled(&group, multiplier)?;
            }
            c if c.is_ascii_uppercase() => {
                let start = i;
                i += 1;
                if i < chars.len() && chars[i].is_ascii_lowercase() {
                    i += 1;
                }
                let symbol: String = chars[start..i].iter().collect();
                let n = read_count(&chars, &mut i)?;
                current.add(&symbol, n)?;
            }
            c if c.is_ascii_digit() => return Err(FormulaError::DanglingNumber { pos: i }),
            ch => return Err(FormulaError::UnexpectedChar { ch, pos: i }),
        }
    }

    if !stack.is_empty() {
        return Err(FormulaError::UnclosedGroup { open: stack.len() });
    }
    Ok(current)
}

/// Reads the digit run starting at `*i`, advancing past it. No digits means 1.
fn read_count(chars: &[char], i: &mut usize) -> Result<u32, FormulaError> {
    let start = *i;
    let mut value: u32 = 0;
    while *i < chars.len() {
        let Some(d) = chars[*i].to_digit(10) else {
            break;
        };
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(d))
            .ok_or(FormulaError::Overflow)?;
        *i += 1;
    }
    if *i == start {
        return Ok(1);
    }
    if value == 0 {
        return Err(FormulaError::ZeroCount { pos: start });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn simple_formulas() {
        assert_eq!(parse_formula("H2O").unwrap(), AtomCount::from([("H", 2), ("O", 1)]));
        assert_eq!(
            parse_formula("C6H12O6").unwrap(),
            AtomCount::from([("C", 6), ("H", 12), ("O", 6)])
        );
        assert_eq!(parse_formula("NaCl").unwrap(), AtomCount::from([("Na", 1), ("Cl", 1)]));
    }

    #[test]
    fn repeated_elements_accumulate() {
        assert_eq!(
            parse_formula("CH3COOH").unwrap(),
            AtomCount::from([("C", 2), ("H", 4), ("O", 2)])
        );
    }

    #[test]
    fn groups_are_multiplied() {
        assert_eq!(
            parse_formula("Ca(HCO3)2").unwrap(),
            AtomCount::from([("Ca", 1), ("H", 2), ("C", 2), ("O", 6)])
        );
        assert_eq!(
            parse_formula("Al2(SO4)3").unwrap(),
            AtomCount::from([("Al", 2), ("S", 3), ("O", 12)])
        );
    }

    #[test]
    fn nested_groups() {
        // K4[Fe(CN)6] written with round brackets
        assert_eq!(
            parse_formula("K4(Fe(CN)6)").unwrap(),
            AtomCount::from([("K", 4), ("Fe", 1), ("C", 6), ("N", 6)])
        );
    }

    #[test]
    fn charge_is_stripped() {
        assert_eq!(parse_formula("Fe^3+").unwrap(), AtomCount::from([("Fe", 1)]));
        assert_eq!(parse_formula("SO4^2-").unwrap(), AtomCount::from([("S", 1), ("O", 4)]));
        assert_eq!(parse_formula("MnO4^-").unwrap(), AtomCount::from([("Mn", 1), ("O", 4)]));
    }

    #[test]
    fn charge_is_reported_by_species() {
        assert_eq!(parse_species("Cr2O7^2-").unwrap().charge, -2);
        assert_eq!(parse_species("NH4^+").unwrap().charge, 1);
        assert_eq!(parse_species("Al^3+").unwrap().charge, 3);
        assert_eq!(parse_species("H2O").unwrap().charge, 0);
    }

    #[test]
    fn electron_has_no_atoms() {
        let e = parse_species("e^-").unwrap();
        assert!(e.atoms.is_empty());
        assert_eq!(e.charge, -1);
        assert!(parse_species("e^2+").is_err());
    }

    #[test]
    fn malformed_formulas_fail() {
        assert_eq!(parse_formula(""), Err(FormulaError::Empty));
        assert_eq!(parse_formula("H2O)"), Err(FormulaError::UnmatchedClose { pos: 3 }));
        assert_eq!(parse_formula("(OH"), Err(FormulaError::UnclosedGroup { open: 1 }));
        assert_eq!(parse_formula("2H"), Err(FormulaError::DanglingNumber { pos: 0 }));
        assert_eq!(parse_formula("H0"), Err(FormulaError::ZeroCount { pos: 1 }));
        assert_eq!(parse_formula("Ca()2"), Err(FormulaError::EmptyGroup { pos: 2 }));
        assert!(matches!(
            parse_formula("H2 O"),
            Err(FormulaError::UnexpectedChar { ch: ' ', pos: 2 })
        ));
        assert!(matches!(parse_formula("h2o"), Err(FormulaError::UnexpectedChar { .. })));
        assert!(matches!(parse_formula("Fe^x"), Err(FormulaError::BadCharge { .. })));
        assert!(matches!(parse_formula("Fe^0+"), Err(FormulaError::BadCharge { .. })));
        assert!(matches!(parse_formula("^2+"), Err(FormulaError::Empty)));
    }

    #[test]
    fn overflow_is_an_error() {
        assert_eq!(parse_formula("H99999999999"), Err(FormulaError::Overflow));
        assert_eq!(parse_formula("(H4000000000)2"), Err(FormulaError::Overflow));
    }

    #[test]
    fn zero_counts_never_stored() {
        let mut counts = AtomCount::new();
        counts.add("O", 0).unwrap();
        assert!(counts.is_empty());
        assert_eq!(counts.get("O"), 0);
    }

    fn symbol() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec!["H", "C", "N", "O", "Na", "Cl", "Fe", "Mg"])
    }

    proptest! {
        #[test]
        fn flat_formula_matches_direct_scan(
            parts in prop::collection::vec((symbol(), 1u32..20), 1..8)
        ) {
            let mut formula = String::new();
            let mut expected = AtomCount::new();
            for (sym, n) in &parts {
                formula.push_str(sym);
                if *n > 1 {
                    formula.push_str(&n.to_string());
                }
                expected.add(sym, *n).unwrap();
            }
            prop_assert_eq!(parse_formula(&formula).unwrap(), expected);
        }

        #[test]
        fn group_multiplier_scales_counts(
            parts in prop::collection::vec((symbol(), 1u32..10), 1..5),
            k in 2u32..9
        ) {
            let inner: String = parts
                .iter()
                .map(|(sym, n)| format!("{sym}{n}"))
                .collect();
            let flat = parse_formula(&inner).unwrap();
            let grouped = parse_formula(&format!("({inner}){k}")).unwrap();
            for (sym, n) in &flat {
                prop_assert_eq!(grouped.get(sym), n * k);
            }
            prop_assert_eq!(grouped.len(), flat.len());
        }
    }
}
