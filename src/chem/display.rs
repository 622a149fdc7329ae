/// Renders a typed formula for display: subscript digits, superscript charge.
///
/// `Ca(HCO3)2` -> `Ca(HCO₃)₂`, `Cr2O7^2-` -> `Cr₂O₇²⁻`. Works on partial
/// input too, since it runs while the student is typing.
pub fn format_formula(formula: &str) -> String {
    let mut out = String::with_capacity(formula.len() * 2);
    let mut in_charge = false;
    for c in formula.chars() {
        if c == '^' {
            in_charge = true;
            continue;
        }
        let mapped = if in_charge {
            superscript(c)
        } else {
            subscript(c)
        };
        out.push(mapped.unwrap_or(c));
    }
    out
}

/// Renders a coefficient and formula pair, omitting a coefficient of 1.
pub fn format_term(coefficient: u32, formula: &str) -> String {
    if coefficient == 1 {
        format_formula(formula)
    } else {
        format!("{coefficient}{}", format_formula(formula))
    }
}

fn subscript(c: char) -> Option<char> {
    const SUB: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];
    c.to_digit(10).map(|d| SUB[d as usize])
}

fn superscript(c: char) -> Option<char> {
    const SUP: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
    match c {
        '+' => Some('⁺'),
        '-' => Some('⁻'),
        _ => c.to_digit(10).map(|d| SUP[d as usize]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscripts_and_charges() {
        assert_eq!(format_formula("Ca(HCO3)2"), "Ca(HCO₃)₂");
        assert_eq!(format_formula("Cr2O7^2-"), "Cr₂O₇²⁻");
        assert_eq!(format_formula("NH4^+"), "NH₄⁺");
        assert_eq!(format_formula("e^-"), "e⁻");
    }

    #[test]
    fn partial_input() {
        assert_eq!(format_formula("Fe^"), "Fe");
        assert_eq!(format_formula(""), "");
    }

    #[test]
    fn terms_hide_unit_coefficient() {
        assert_eq!(format_term(1, "O2"), "O₂");
        assert_eq!(format_term(2, "H2O"), "2H₂O");
    }
}
