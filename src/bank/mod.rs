//! Curated question banks for the three practice modes.

pub mod challenges;
pub mod equations;
pub mod ions;
pub mod select;

use serde::{Deserialize, Serialize};

use crate::chem::{BalanceRules, ExpectedEquation, Term};
use crate::i18n::Language;

pub use challenges::{builder_pool, BuilderChallenge};
pub use equations::balancing_pool;
pub use ions::{stage_pool, Ion, STAGE_COUNT};
pub use select::select_challenges;

/// A question whose answer is a single formula. This is the shape shared by
/// the ion drill and the handwriting grading request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormulaQuestion {
    pub prompt_text: String,
    pub expected_formula: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// One species of a curated equation, with its balanced coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component {
    pub formula: &'static str,
    pub coefficient: u32,
    pub name_zh: &'static str,
    pub name_en: &'static str,
}

impl Component {
    pub fn name(&self, lang: Language) -> &'static str {
        match lang {
            Language::Zh => self.name_zh,
            Language::En => self.name_en,
        }
    }
}

pub(crate) const fn c(
    formula: &'static str,
    coefficient: u32,
    name_zh: &'static str,
    name_en: &'static str,
) -> Component {
    Component {
        formula,
        coefficient,
        name_zh,
        name_en,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Equation {
    pub reactants: &'static [Component],
    pub products: &'static [Component],
    pub difficulty: Difficulty,
}

impl Equation {
    /// The balanced answer key.
    pub fn expected(&self) -> ExpectedEquation {
        let terms = |side: &[Component]| {
            side.iter()
                .map(|comp| Term::new(comp.coefficient, comp.formula))
                .collect()
        };
        ExpectedEquation {
            reactants: terms(self.reactants),
            products: terms(self.products),
        }
    }

    pub fn component_count(&self) -> usize {
        self.reactants.len() + self.products.len()
    }

    /// Whether any species carries a charge or is an electron.
    pub fn is_ionic(&self) -> bool {
        self.reactants
            .iter()
            .chain(self.products)
            .any(|comp| comp.formula.contains('^'))
    }
}

/// A broad grouping shown on the first topic screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopicFamily {
    General,
    Redox,
}

impl TopicFamily {
    pub const ALL: [TopicFamily; 2] = [TopicFamily::General, TopicFamily::Redox];

    pub fn topics(self) -> &'static [Topic] {
        match self {
            TopicFamily::General => &[
                Topic::EarthMicro,
                Topic::Metals,
                Topic::Acids,
                Topic::Organic,
                Topic::PeriodEnergy,
            ],
            TopicFamily::Redox => &[Topic::RedoxHalf, Topic::RedoxFull],
        }
    }
}

/// Curriculum topic used to pick equation pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    EarthMicro,
    Metals,
    Acids,
    Organic,
    PeriodEnergy,
    RedoxHalf,
    RedoxFull,
}

impl Topic {
    pub fn family(self) -> TopicFamily {
        match self {
            Topic::RedoxHalf | Topic::RedoxFull => TopicFamily::Redox,
            _ => TopicFamily::General,
        }
    }

    /// Redox topics also balance charge.
    pub fn balance_rules(self) -> BalanceRules {
        match self.family() {
            TopicFamily::Redox => BalanceRules::WITH_CHARGE,
            TopicFamily::General => BalanceRules::ATOMS_ONLY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chem::check_balance_with;

    fn all_equations() -> Vec<&'static Equation> {
        let mut all = Vec::new();
        for family in TopicFamily::ALL {
            for &topic in family.topics() {
                all.extend(balancing_pool(topic));
                all.extend(builder_pool(topic).into_iter().map(|ch| &ch.equation));
            }
        }
        all
    }

    #[test]
    fn every_curated_equation_balances() {
        for eq in all_equations() {
            let key = eq.expected();
            let report = check_balance_with(
                BalanceRules::WITH_CHARGE,
                &key,
                &key.reactants,
                &key.products,
            );
            assert!(report.is_balanced(), "{eq:?}: {:?}", report.issues);
        }
    }

    #[test]
    fn every_topic_has_questions() {
        for family in TopicFamily::ALL {
            for &topic in family.topics() {
                assert!(!balancing_pool(topic).is_empty(), "{topic:?}");
                assert!(!builder_pool(topic).is_empty(), "{topic:?}");
                assert_eq!(topic.family(), family);
            }
        }
    }

    #[test]
    fn redox_topics_check_charge() {
        assert!(Topic::RedoxFull.balance_rules().check_charge);
        assert!(!Topic::Acids.balance_rules().check_charge);
    }

    #[test]
    fn question_serializes_in_camel_case() {
        let q = FormulaQuestion {
            prompt_text: "Sulphate ion".into(),
            expected_formula: "SO4^2-".into(),
        };
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["promptText"], "Sulphate ion");
        assert_eq!(json["expectedFormula"], "SO4^2-");
    }
}
