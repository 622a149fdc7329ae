//! Balancing mode: species are given, the student supplies coefficients.

use crate::bank::Equation;
use crate::chem::{check_balance_with, parse_coefficient, BalanceRules, Term};

use super::Outcome;

/// Checks one coefficient per species, reactants first then products, in
/// the order the equation lists them. Missing inputs count as blank.
pub fn check_coefficients(equation: &Equation, rules: BalanceRules, inputs: &[String]) -> Outcome {
    let mut coefficients = equation
        .reactants
        .iter()
        .chain(equation.products)
        .enumerate()
        .map(|(i, _)| parse_coefficient(inputs.get(i).map(String::as_str).unwrap_or("")));

    let reactants: Vec<Term> = equation
        .reactants
        .iter()
        .zip(coefficients.by_ref())
        .map(|(comp, k)| Term::new(k, comp.formula))
        .collect();
    let products: Vec<Term> = equation
        .products
        .iter()
        .zip(coefficients)
        .map(|(comp, k)| Term::new(k, comp.formula))
        .collect();

    let report = check_balance_with(rules, &equation.expected(), &reactants, &products);
    if !report.is_balanced() {
        return Outcome::Incorrect(report);
    }

    let common = reactants
        .iter()
        .chain(&products)
        .map(|t| t.coefficient)
        .fold(0, gcd);
    if common > 1 {
        return Outcome::NotSimplest;
    }
    Outcome::Correct
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::{balancing_pool, Topic};
    use crate::chem::BalanceIssue;

    fn inputs(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn methane() -> &'static Equation {
        balancing_pool(Topic::Organic)
            .into_iter()
            .find(|eq| eq.reactants[0].formula == "CH4")
            .unwrap()
    }

    #[test]
    fn correct_coefficients() {
        let outcome = check_coefficients(methane(), BalanceRules::ATOMS_ONLY, &inputs(&["", "2", "1", "2"]));
        assert_eq!(outcome, Outcome::Correct);
    }

    #[test]
    fn multiples_are_not_simplest() {
        let outcome = check_coefficients(methane(), BalanceRules::ATOMS_ONLY, &inputs(&["2", "4", "2", "4"]));
        assert_eq!(outcome, Outcome::NotSimplest);
    }

    #[test]
    fn wrong_coefficients_report_imbalance() {
        let outcome = check_coefficients(methane(), BalanceRules::ATOMS_ONLY, &inputs(&["1", "1", "1", "1"]));
        let Outcome::Incorrect(report) = outcome else {
            panic!("expected incorrect");
        };
        assert!(report.only_imbalances());
        assert!(report.issues.contains(&BalanceIssue::AtomImbalance {
            element: "H".into(),
            left: 4,
            right: 2
        }));
    }

    #[test]
    fn missing_inputs_default_to_one() {
        let outcome = check_coefficients(methane(), BalanceRules::ATOMS_ONLY, &[]);
        assert!(matches!(outcome, Outcome::Incorrect(_)));
    }

    #[test]
    fn redox_needs_charge_balance() {
        let eq = balancing_pool(Topic::RedoxHalf)
            .into_iter()
            .find(|eq| eq.reactants[0].formula == "Cl2")
            .unwrap();
        assert_eq!(
            check_coefficients(eq, BalanceRules::WITH_CHARGE, &inputs(&["1", "2", "2"])),
            Outcome::Correct
        );
        assert!(matches!(
            check_coefficients(eq, BalanceRules::WITH_CHARGE, &inputs(&["1", "1", "2"])),
            Outcome::Incorrect(_)
        ));
    }

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(0, 6), 6);
        assert_eq!(gcd(4, 6), 2);
        assert_eq!(gcd(3, 5), 1);
    }
}
