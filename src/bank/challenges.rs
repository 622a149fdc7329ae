//! Described reactions for the equation builder mode.

use super::{c, Difficulty, Equation, Topic};
use crate::i18n::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderChallenge {
    pub description_zh: &'static str,
    pub description_en: &'static str,
    pub equation: Equation,
}

impl BuilderChallenge {
    pub fn description(&self, lang: Language) -> &'static str {
        match lang {
            Language::Zh => self.description_zh,
            Language::En => self.description_en,
        }
    }
}

static EARTH_MICRO: &[BuilderChallenge] = &[
    BuilderChallenge {
        description_zh: "加熱碳酸鈣固體，發生熱分解生成氧化鈣和二氧化碳。",
        description_en: "Heating calcium carbonate solid to undergo thermal decomposition, forming calcium oxide and carbon dioxide.",
        equation: Equation {
            reactants: &[c("CaCO3", 1, "碳酸鈣", "Calcium carbonate")],
            products: &[c("CaO", 1, "氧化鈣", "Calcium oxide"), c("CO2", 1, "二氧化碳", "Carbon dioxide")],
            difficulty: Difficulty::Easy,
        },
    },
    BuilderChallenge {
        description_zh: "碳酸鈣與水及二氧化碳反應，生成碳酸氫鈣。",
        description_en: "Calcium carbonate reacts with water and carbon dioxide to form calcium hydrogencarbonate.",
        equation: Equation {
            reactants: &[
                c("CaCO3", 1, "碳酸鈣", "Calcium carbonate"),
                c("H2O", 1, "水", "Water"),
                c("CO2", 1, "二氧化碳", "Carbon dioxide"),
            ],
            products: &[c("Ca(HCO3)2", 1, "碳酸氫鈣", "Calcium hydrogencarbonate")],
            difficulty: Difficulty::Medium,
        },
    },
    BuilderChallenge {
        description_zh: "鈉在氯氣中燃燒生成氯化鈉。",
        description_en: "Sodium burns in chlorine to form sodium chloride.",
        equation: Equation {
            reactants: &[c("Na", 2, "鈉", "Sodium"), c("Cl2", 1, "氯氣", "Chlorine")],
            products: &[c("NaCl", 2, "氯化鈉", "Sodium chloride")],
            difficulty: Difficulty::Easy,
        },
    },
];

static METALS: &[BuilderChallenge] = &[
    BuilderChallenge {
        description_zh: "鎂在氧氣中燃燒生成氧化鎂。",
        description_en: "Magnesium burns in oxygen to form magnesium oxide.",
        equation: Equation {
            reactants: &[c("Mg", 2, "鎂", "Magnesium"), c("O2", 1, "氧氣", "Oxygen")],
            products: &[c("MgO", 2, "氧化鎂", "Magnesium oxide")],
            difficulty: Difficulty::Easy,
        },
    },
    BuilderChallenge {
        description_zh: "鋁在氯氣中燃燒生成氯化鋁。",
        description_en: "Aluminium burns in chlorine to form aluminium chloride.",
        equation: Equation {
            reactants: &[c("Al", 2, "鋁", "Aluminium"), c("Cl2", 3, "氯氣", "Chlorine")],
            products: &[c("AlCl3", 2, "氯化鋁", "Aluminium chloride")],
            difficulty: Difficulty::Medium,
        },
    },
    BuilderChallenge {
        description_zh: "銅片放入硝酸銀溶液中，置換出銀並生成硝酸銅(II)。",
        description_en: "A copper strip is placed in silver nitrate solution, displacing silver and forming copper(II) nitrate.",
        equation: Equation {
            reactants: &[c("Cu", 1, "銅", "Copper"), c("AgNO3", 2, "硝酸銀", "Silver nitrate")],
            products: &[c("Cu(NO3)2", 1, "硝酸銅(II)", "Copper(II) nitrate"), c("Ag", 2, "銀", "Silver")],
            difficulty: Difficulty::Hard,
        },
    },
];

static ACIDS: &[BuilderChallenge] = &[
    BuilderChallenge {
        description_zh: "鋅與稀鹽酸反應，生成氯化鋅和氫氣。",
        description_en: "Zinc reacts with dilute hydrochloric acid to produce zinc chloride and hydrogen gas.",
        equation: Equation {
            reactants: &[c("Zn", 1, "鋅", "Zinc"), c("HCl", 2, "鹽酸", "Hydrochloric acid")],
            products: &[c("ZnCl2", 1, "氯化鋅", "Zinc chloride"), c("H2", 1, "氫氣", "Hydrogen")],
            difficulty: Difficulty::Easy,
        },
    },
    BuilderChallenge {
        description_zh: "氫氧化鈉溶液與稀硫酸反應，發生中和反應生成硫酸鈉和水。",
        description_en: "Sodium hydroxide solution neutralises dilute sulphuric acid, forming sodium sulphate and water.",
        equation: Equation {
            reactants: &[c("NaOH", 2, "氫氧化鈉", "Sodium hydroxide"), c("H2SO4", 1, "硫酸", "Sulphuric acid")],
            products: &[c("Na2SO4", 1, "硫酸鈉", "Sodium sulphate"), c("H2O", 2, "水", "Water")],
            difficulty: Difficulty::Medium,
        },
    },
    BuilderChallenge {
        description_zh: "碳酸氫鈉與鹽酸反應，生成氯化鈉、二氧化碳和水。",
        description_en: "Sodium hydrogencarbonate reacts with hydrochloric acid to give sodium chloride, carbon dioxide and water.",
        equation: Equation {
            reactants: &[
                c("NaHCO3", 1, "碳酸氫鈉", "Sodium hydrogencarbonate"),
                c("HCl", 1, "鹽酸", "Hydrochloric acid"),
            ],
            products: &[
                c("NaCl", 1, "氯化鈉", "Sodium chloride"),
                c("CO2", 1, "二氧化碳", "Carbon dioxide"),
                c("H2O", 1, "水", "Water"),
            ],
            difficulty: Difficulty::Medium,
        },
    },
];

static ORGANIC: &[BuilderChallenge] = &[
    BuilderChallenge {
        description_zh: "甲烷在氧氣中完全燃燒，生成二氧化碳和水。",
        description_en: "Methane burns completely in oxygen to produce carbon dioxide and water.",
        equation: Equation {
            reactants: &[c("CH4", 1, "甲烷", "Methane"), c("O2", 2, "氧氣", "Oxygen")],
            products: &[c("CO2", 1, "二氧化碳", "Carbon dioxide"), c("H2O", 2, "水", "Water")],
            difficulty: Difficulty::Medium,
        },
    },
    BuilderChallenge {
        description_zh: "乙烯在氧氣中完全燃燒，生成二氧化碳和水。",
        description_en: "Ethene burns completely in oxygen to produce carbon dioxide and water.",
        equation: Equation {
            reactants: &[c("C2H4", 1, "乙烯", "Ethene"), c("O2", 3, "氧氣", "Oxygen")],
            products: &[c("CO2", 2, "二氧化碳", "Carbon dioxide"), c("H2O", 2, "水", "Water")],
            difficulty: Difficulty::Medium,
        },
    },
];

static PERIOD_ENERGY: &[BuilderChallenge] = &[
    BuilderChallenge {
        description_zh: "氯氣與溴化鉀溶液反應，置換出溴並生成氯化鉀。",
        description_en: "Chlorine reacts with potassium bromide solution, displacing bromine and forming potassium chloride.",
        equation: Equation {
            reactants: &[c("Cl2", 1, "氯氣", "Chlorine"), c("KBr", 2, "溴化鉀", "Potassium bromide")],
            products: &[c("Br2", 1, "溴", "Bromine"), c("KCl", 2, "氯化鉀", "Potassium chloride")],
            difficulty: Difficulty::Medium,
        },
    },
    BuilderChallenge {
        description_zh: "鈉與水劇烈反應，生成氫氧化鈉和氫氣。",
        description_en: "Sodium reacts vigorously with water to form sodium hydroxide and hydrogen gas.",
        equation: Equation {
            reactants: &[c("Na", 2, "鈉", "Sodium"), c("H2O", 2, "水", "Water")],
            products: &[c("NaOH", 2, "氫氧化鈉", "Sodium hydroxide"), c("H2", 1, "氫氣", "Hydrogen")],
            difficulty: Difficulty::Medium,
        },
    },
    BuilderChallenge {
        description_zh: "氫氣在氧氣中燃燒生成水。",
        description_en: "Hydrogen burns in oxygen to form water.",
        equation: Equation {
            reactants: &[c("H2", 2, "氫氣", "Hydrogen"), c("O2", 1, "氧氣", "Oxygen")],
            products: &[c("H2O", 2, "水", "Water")],
            difficulty: Difficulty::Easy,
        },
    },
    BuilderChallenge {
        description_zh: "光合作用：二氧化碳和水在光照下生成葡萄糖和氧氣。",
        description_en: "Photosynthesis: carbon dioxide and water form glucose and oxygen in sunlight.",
        equation: Equation {
            reactants: &[c("CO2", 6, "二氧化碳", "Carbon dioxide"), c("H2O", 6, "水", "Water")],
            products: &[c("C6H12O6", 1, "葡萄糖", "Glucose"), c("O2", 6, "氧氣", "Oxygen")],
            difficulty: Difficulty::Hard,
        },
    },
];

static REDOX_HALF: &[BuilderChallenge] = &[
    BuilderChallenge {
        description_zh: "亞鐵離子被氧化成鐵(III)離子（寫出半反應式）。",
        description_en: "Iron(II) ions are oxidised to iron(III) ions (write the half equation).",
        equation: Equation {
            reactants: &[c("Fe^2+", 1, "亞鐵離子", "Iron(II) ion")],
            products: &[c("Fe^3+", 1, "鐵(III)離子", "Iron(III) ion"), c("e^-", 1, "電子", "Electron")],
            difficulty: Difficulty::Easy,
        },
    },
    BuilderChallenge {
        description_zh: "氯氣被還原成氯離子（寫出半反應式）。",
        description_en: "Chlorine is reduced to chloride ions (write the half equation).",
        equation: Equation {
            reactants: &[c("Cl2", 1, "氯氣", "Chlorine"), c("e^-", 2, "電子", "Electron")],
            products: &[c("Cl^-", 2, "氯離子", "Chloride ion")],
            difficulty: Difficulty::Easy,
        },
    },
    BuilderChallenge {
        description_zh: "在酸性溶液中，高錳酸根離子被還原成錳(II)離子和水（寫出半反應式）。",
        description_en: "In acidic solution, permanganate ions are reduced to manganese(II) ions and water (write the half equation).",
        equation: Equation {
            reactants: &[
                c("MnO4^-", 1, "高錳酸根離子", "Permanganate ion"),
                c("H^+", 8, "氫離子", "Hydrogen ion"),
                c("e^-", 5, "電子", "Electron"),
            ],
            products: &[c("Mn^2+", 1, "錳(II)離子", "Manganese(II) ion"), c("H2O", 4, "水", "Water")],
            difficulty: Difficulty::Hard,
        },
    },
];

static REDOX_FULL: &[BuilderChallenge] = &[
    BuilderChallenge {
        description_zh: "鋅放入銅(II)離子溶液中，生成鋅離子並析出銅（寫出離子方程式）。",
        description_en: "Zinc is placed in a solution of copper(II) ions, forming zinc ions and depositing copper (write the ionic equation).",
        equation: Equation {
            reactants: &[c("Zn", 1, "鋅", "Zinc"), c("Cu^2+", 1, "銅(II)離子", "Copper(II) ion")],
            products: &[c("Zn^2+", 1, "鋅離子", "Zinc ion"), c("Cu", 1, "銅", "Copper")],
            difficulty: Difficulty::Easy,
        },
    },
    BuilderChallenge {
        description_zh: "氯氣把碘離子氧化成碘，自身被還原成氯離子（寫出離子方程式）。",
        description_en: "Chlorine oxidises iodide ions to iodine and is reduced to chloride ions (write the ionic equation).",
        equation: Equation {
            reactants: &[c("Cl2", 1, "氯氣", "Chlorine"), c("I^-", 2, "碘離子", "Iodide ion")],
            products: &[c("Cl^-", 2, "氯離子", "Chloride ion"), c("I2", 1, "碘", "Iodine")],
            difficulty: Difficulty::Medium,
        },
    },
    BuilderChallenge {
        description_zh: "酸化高錳酸根離子把亞鐵離子氧化成鐵(III)離子（寫出離子方程式）。",
        description_en: "Acidified permanganate ions oxidise iron(II) ions to iron(III) ions (write the ionic equation).",
        equation: Equation {
            reactants: &[
                c("MnO4^-", 1, "高錳酸根離子", "Permanganate ion"),
                c("H^+", 8, "氫離子", "Hydrogen ion"),
                c("Fe^2+", 5, "亞鐵離子", "Iron(II) ion"),
            ],
            products: &[
                c("Mn^2+", 1, "錳(II)離子", "Manganese(II) ion"),
                c("H2O", 4, "水", "Water"),
                c("Fe^3+", 5, "鐵(III)離子", "Iron(III) ion"),
            ],
            difficulty: Difficulty::Hard,
        },
    },
];

pub fn builder_pool(topic: Topic) -> Vec<&'static BuilderChallenge> {
    let pool = match topic {
        Topic::EarthMicro => EARTH_MICRO,
        Topic::Metals => METALS,
        Topic::Acids => ACIDS,
        Topic::Organic => ORGANIC,
        Topic::PeriodEnergy => PERIOD_ENERGY,
        Topic::RedoxHalf => REDOX_HALF,
        Topic::RedoxFull => REDOX_FULL,
    };
    pool.iter().collect()
}
