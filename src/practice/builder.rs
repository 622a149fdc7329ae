//! Builder mode: the student writes the whole equation from a description.

use crate::bank::BuilderChallenge;
use crate::chem::{check_balance_with, BalanceRules, Side, Term};

use super::Outcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInput {
    pub id: u32,
    pub coefficient: String,
    pub formula: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Coefficient,
    Formula,
}

/// Editable rows for both sides. Each side always keeps at least one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderForm {
    reactants: Vec<EntryInput>,
    products: Vec<EntryInput>,
    next_id: u32,
}

impl Default for BuilderForm {
    fn default() -> Self {
        let mut form = Self {
            reactants: Vec::new(),
            products: Vec::new(),
            next_id: 0,
        };
        form.add(Side::Reactants);
        form.add(Side::Products);
        form
    }
}

impl BuilderForm {
    pub fn entries(&self, side: Side) -> &[EntryInput] {
        match side {
            Side::Reactants => &self.reactants,
            Side::Products => &self.products,
        }
    }

    fn entries_mut(&mut self, side: Side) -> &mut Vec<EntryInput> {
        match side {
            Side::Reactants => &mut self.reactants,
            Side::Products => &mut self.products,
        }
    }

    pub fn add(&mut self, side: Side) {
        let id = self.next_id;
        self.next_id += 1;
        self.entries_mut(side).push(EntryInput {
            id,
            coefficient: String::new(),
            formula: String::new(),
        });
    }

    /// Removes a row unless it is the last one on its side.
    pub fn remove(&mut self, side: Side, id: u32) {
        let entries = self.entries_mut(side);
        if entries.len() > 1 {
            entries.retain(|e| e.id != id);
        }
    }

    pub fn update(&mut self, side: Side, id: u32, field: Field, value: String) {
        if let Some(entry) = self.entries_mut(side).iter_mut().find(|e| e.id == id) {
            match field {
                Field::Coefficient => entry.coefficient = value,
                Field::Formula => entry.formula = value,
            }
        }
    }

    pub fn terms(&self, side: Side) -> Vec<Term> {
        self.entries(side)
            .iter()
            .map(|e| Term::from_input(&e.coefficient, &e.formula))
            .collect()
    }

    pub fn check(&self, challenge: &BuilderChallenge, rules: BalanceRules) -> Outcome {
        let report = check_balance_with(
            rules,
            &challenge.equation.expected(),
            &self.terms(Side::Reactants),
            &self.terms(Side::Products),
        );
        if report.is_balanced() {
            Outcome::Correct
        } else {
            Outcome::Incorrect(report)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::{builder_pool, Topic};
    use crate::chem::BalanceIssue;

    fn fill(form: &mut BuilderForm, side: Side, rows: &[(&str, &str)]) {
        while form.entries(side).len() < rows.len() {
            form.add(side);
        }
        let ids: Vec<u32> = form.entries(side).iter().map(|e| e.id).collect();
        for (id, (k, f)) in ids.into_iter().zip(rows) {
            form.update(side, id, Field::Coefficient, k.to_string());
            form.update(side, id, Field::Formula, f.to_string());
        }
    }

    fn limestone() -> &'static BuilderChallenge {
        builder_pool(Topic::EarthMicro)
            .into_iter()
            .find(|c| c.equation.reactants.len() == 1 && c.equation.reactants[0].formula == "CaCO3")
            .unwrap()
    }

    #[test]
    fn starts_with_one_row_per_side() {
        let form = BuilderForm::default();
        assert_eq!(form.entries(Side::Reactants).len(), 1);
        assert_eq!(form.entries(Side::Products).len(), 1);
        assert_ne!(form.entries(Side::Reactants)[0].id, form.entries(Side::Products)[0].id);
    }

    #[test]
    fn last_row_cannot_be_removed() {
        let mut form = BuilderForm::default();
        let id = form.entries(Side::Products)[0].id;
        form.remove(Side::Products, id);
        assert_eq!(form.entries(Side::Products).len(), 1);

        form.add(Side::Products);
        form.remove(Side::Products, id);
        assert_eq!(form.entries(Side::Products).len(), 1);
        assert_ne!(form.entries(Side::Products)[0].id, id);
    }

    #[test]
    fn correct_equation_in_any_order() {
        let mut form = BuilderForm::default();
        fill(&mut form, Side::Reactants, &[("", "CaCO3")]);
        fill(&mut form, Side::Products, &[("", "CO2"), ("1", " Ca O ")]);
        assert_eq!(form.check(limestone(), BalanceRules::ATOMS_ONLY), Outcome::Correct);
    }

    #[test]
    fn missing_product_is_reported() {
        let mut form = BuilderForm::default();
        fill(&mut form, Side::Reactants, &[("", "CaCO3")]);
        fill(&mut form, Side::Products, &[("", "CaO")]);
        let Outcome::Incorrect(report) = form.check(limestone(), BalanceRules::ATOMS_ONLY) else {
            panic!("expected incorrect");
        };
        assert_eq!(
            report.issues,
            vec![BalanceIssue::MissingSpecies {
                side: Side::Products,
                formula: "CO2".into()
            }]
        );
    }

    #[test]
    fn terms_use_default_coefficient() {
        let mut form = BuilderForm::default();
        fill(&mut form, Side::Reactants, &[("x", "H2"), ("2", "O2")]);
        assert_eq!(
            form.terms(Side::Reactants),
            vec![Term::new(1, "H2"), Term::new(2, "O2")]
        );
    }
}
