//! Ions for the formula drill, grouped into unlockable stages.

use super::FormulaQuestion;
use crate::i18n::Language;

pub const STAGE_COUNT: u32 = 8;

/// Stage 7 reviews the monatomic stages, stage 8 reviews everything.
const MONATOMIC_REVIEW: u32 = 7;
const FULL_REVIEW: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ion {
    pub formula: &'static str,
    pub name_zh: &'static str,
    pub name_en: &'static str,
    pub stage: u32,
}

impl Ion {
    pub fn name(&self, lang: Language) -> &'static str {
        match lang {
            Language::Zh => self.name_zh,
            Language::En => self.name_en,
        }
    }

    pub fn question(&self, lang: Language) -> FormulaQuestion {
        FormulaQuestion {
            prompt_text: self.name(lang).to_string(),
            expected_formula: self.formula.to_string(),
        }
    }
}

const fn ion(formula: &'static str, name_zh: &'static str, name_en: &'static str, stage: u32) -> Ion {
    Ion {
        formula,
        name_zh,
        name_en,
        stage,
    }
}

static IONS: [Ion; 48] = [
    // 1: simple cations
    ion("H^+", "氫離子", "Hydrogen ion", 1),
    ion("Li^+", "鋰離子", "Lithium ion", 1),
    ion("Na^+", "鈉離子", "Sodium ion", 1),
    ion("K^+", "鉀離子", "Potassium ion", 1),
    ion("Mg^2+", "鎂離子", "Magnesium ion", 1),
    ion("Ca^2+", "鈣離子", "Calcium ion", 1),
    ion("Ba^2+", "鋇離子", "Barium ion", 1),
    ion("Al^3+", "鋁離子", "Aluminium ion", 1),
    // 2: transition metal cations
    ion("Fe^2+", "鐵(II)離子", "Iron(II) ion", 2),
    ion("Fe^3+", "鐵(III)離子", "Iron(III) ion", 2),
    ion("Cu^+", "銅(I)離子", "Copper(I) ion", 2),
    ion("Cu^2+", "銅(II)離子", "Copper(II) ion", 2),
    ion("Zn^2+", "鋅離子", "Zinc ion", 2),
    ion("Ag^+", "銀離子", "Silver ion", 2),
    ion("Pb^2+", "鉛(II)離子", "Lead(II) ion", 2),
    ion("Mn^2+", "錳(II)離子", "Manganese(II) ion", 2),
    ion("Cr^3+", "鉻(III)離子", "Chromium(III) ion", 2),
    ion("Co^2+", "鈷(II)離子", "Cobalt(II) ion", 2),
    ion("Ni^2+", "鎳(II)離子", "Nickel(II) ion", 2),
    ion("Hg^2+", "汞(II)離子", "Mercury(II) ion", 2),
    // 3: simple anions
    ion("H^-", "氫負離子", "Hydride ion", 3),
    ion("F^-", "氟離子", "Fluoride ion", 3),
    ion("Cl^-", "氯離子", "Chloride ion", 3),
    ion("Br^-", "溴離子", "Bromide ion", 3),
    ion("I^-", "碘離子", "Iodide ion", 3),
    ion("O^2-", "氧離子", "Oxide ion", 3),
    ion("S^2-", "硫離子", "Sulphide ion", 3),
    ion("N^3-", "氮離子", "Nitride ion", 3),
    // 4: common polyatomic ions
    ion("NH4^+", "銨離子", "Ammonium ion", 4),
    ion("H3O^+", "水合氫離子", "Oxonium ion", 4),
    ion("OH^-", "氫氧離子", "Hydroxide ion", 4),
    ion("NO3^-", "硝酸根離子", "Nitrate ion", 4),
    ion("NO2^-", "亞硝酸根離子", "Nitrite ion", 4),
    ion("HCO3^-", "碳酸氫根離子", "Hydrogencarbonate ion", 4),
    ion("CO3^2-", "碳酸根離子", "Carbonate ion", 4),
    // 5: sulphur and phosphorus oxoanions
    ion("SO4^2-", "硫酸根離子", "Sulphate ion", 5),
    ion("SO3^2-", "亞硫酸根離子", "Sulphite ion", 5),
    ion("HSO4^-", "硫酸氫根離子", "Hydrogensulphate ion", 5),
    ion("PO4^3-", "磷酸根離子", "Phosphate ion", 5),
    ion("HPO4^2-", "磷酸氫根離子", "Hydrogenphosphate ion", 5),
    ion("H2PO4^-", "磷酸二氫根離子", "Dihydrogenphosphate ion", 5),
    // 6: redox and other anions
    ion("MnO4^-", "高錳酸根離子", "Permanganate ion", 6),
    ion("CrO4^2-", "鉻酸根離子", "Chromate ion", 6),
    ion("Cr2O7^2-", "重鉻酸根離子", "Dichromate ion", 6),
    ion("ClO^-", "次氯酸根離子", "Hypochlorite ion", 6),
    ion("CN^-", "氰離子", "Cyanide ion", 6),
    ion("SCN^-", "硫氰酸根離子", "Thiocyanate ion", 6),
    ion("CH3COO^-", "乙酸根離子", "Ethanoate ion", 6),
];

/// Ions available in a drill stage (1-based). Unknown stages are empty.
pub fn stage_pool(stage: u32) -> Vec<&'static Ion> {
    IONS.iter()
        .filter(|ion| match stage {
            MONATOMIC_REVIEW => ion.stage <= 3,
            FULL_REVIEW => true,
            s => ion.stage == s,
        })
        .collect()
}
