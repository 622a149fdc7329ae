pub mod balance;
pub mod display;
pub mod formula;

pub use balance::{
    check_balance, check_balance_with, normalize_formula, parse_coefficient, BalanceIssue,
    BalanceReport, BalanceRules, EquationSide, ExpectedEquation, Side, Term,
};
pub use display::{format_formula, format_term};
pub use formula::{parse_formula, parse_species, AtomCount, Species, ELECTRON};
