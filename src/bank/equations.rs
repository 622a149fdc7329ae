//! Equations for the balancing mode. Coefficients are the balanced answer.

use super::{c, Difficulty, Equation, Topic};

static EARTH: &[Equation] = &[
    Equation {
        reactants: &[c("CO2", 6, "二氧化碳", "Carbon dioxide"), c("H2O", 6, "水", "Water")],
        products: &[c("C6H12O6", 1, "葡萄糖", "Glucose"), c("O2", 6, "氧氣", "Oxygen")],
        difficulty: Difficulty::Hard,
    },
    Equation {
        reactants: &[c("CaCO3", 1, "碳酸鈣", "Calcium carbonate")],
        products: &[c("CaO", 1, "氧化鈣", "Calcium oxide"), c("CO2", 1, "二氧化碳", "Carbon dioxide")],
        difficulty: Difficulty::Easy,
    },
    Equation {
        reactants: &[
            c("CaCO3", 1, "碳酸鈣", "Calcium carbonate"),
            c("H2O", 1, "水", "Water"),
            c("CO2", 1, "二氧化碳", "Carbon dioxide"),
        ],
        products: &[c("Ca(HCO3)2", 1, "碳酸氫鈣", "Calcium hydrogencarbonate")],
        difficulty: Difficulty::Medium,
    },
];

static MICRO: &[Equation] = &[
    Equation {
        reactants: &[c("Na", 2, "鈉", "Sodium"), c("Cl2", 1, "氯氣", "Chlorine")],
        products: &[c("NaCl", 2, "氯化鈉", "Sodium chloride")],
        difficulty: Difficulty::Easy,
    },
    Equation {
        reactants: &[c("Mg", 2, "鎂", "Magnesium"), c("O2", 1, "氧氣", "Oxygen")],
        products: &[c("MgO", 2, "氧化鎂", "Magnesium oxide")],
        difficulty: Difficulty::Easy,
    },
];

static METALS: &[Equation] = &[
    Equation {
        reactants: &[c("Fe2O3", 1, "氧化鐵(III)", "Iron(III) oxide"), c("CO", 3, "一氧化碳", "Carbon monoxide")],
        products: &[c("Fe", 2, "鐵", "Iron"), c("CO2", 3, "二氧化碳", "Carbon dioxide")],
        difficulty: Difficulty::Hard,
    },
    Equation {
        reactants: &[c("Zn", 1, "鋅", "Zinc"), c("CuSO4", 1, "硫酸銅(II)", "Copper(II) sulphate")],
        products: &[c("ZnSO4", 1, "硫酸鋅", "Zinc sulphate"), c("Cu", 1, "銅", "Copper")],
        difficulty: Difficulty::Easy,
    },
    Equation {
        reactants: &[c("Al", 4, "鋁", "Aluminium"), c("O2", 3, "氧氣", "Oxygen")],
        products: &[c("Al2O3", 2, "氧化鋁", "Aluminium oxide")],
        difficulty: Difficulty::Medium,
    },
];

static ACIDS: &[Equation] = &[
    Equation {
        reactants: &[c("Zn", 1, "鋅", "Zinc"), c("H^+", 2, "氫離子", "Hydrogen ion")],
        products: &[c("Zn^2+", 1, "鋅離子", "Zinc ion"), c("H2", 1, "氫氣", "Hydrogen")],
        difficulty: Difficulty::Medium,
    },
    Equation {
        reactants: &[c("Mg", 1, "鎂", "Magnesium"), c("HCl", 2, "鹽酸", "Hydrochloric acid")],
        products: &[c("MgCl2", 1, "氯化鎂", "Magnesium chloride"), c("H2", 1, "氫氣", "Hydrogen")],
        difficulty: Difficulty::Medium,
    },
    Equation {
        reactants: &[c("NaOH", 1, "氫氧化鈉", "Sodium hydroxide"), c("HCl", 1, "鹽酸", "Hydrochloric acid")],
        products: &[c("NaCl", 1, "氯化鈉", "Sodium chloride"), c("H2O", 1, "水", "Water")],
        difficulty: Difficulty::Easy,
    },
    Equation {
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
];

static ORGANIC: &[Equation] = &[
    Equation {
        reactants: &[c("CH4", 1, "甲烷", "Methane"), c("O2", 2, "氧氣", "Oxygen")],
        products: &[c("CO2", 1, "二氧化碳", "Carbon dioxide"), c("H2O", 2, "水", "Water")],
        difficulty: Difficulty::Medium,
    },
    Equation {
        reactants: &[c("C2H4", 1, "乙烯", "Ethene"), c("O2", 3, "氧氣", "Oxygen")],
        products: &[c("CO2", 2, "二氧化碳", "Carbon dioxide"), c("H2O", 2, "水", "Water")],
        difficulty: Difficulty::Medium,
    },
    Equation {
        reactants: &[c("C2H5OH", 1, "乙醇", "Ethanol"), c("O2", 3, "氧氣", "Oxygen")],
        products: &[c("CO2", 2, "二氧化碳", "Carbon dioxide"), c("H2O", 3, "水", "Water")],
        difficulty: Difficulty::Hard,
    },
];

static PERIODICITY: &[Equation] = &[
    Equation {
        reactants: &[c("KBr", 2, "溴化鉀", "Potassium bromide"), c("Cl2", 1, "氯氣", "Chlorine")],
        products: &[c("KCl", 2, "氯化鉀", "Potassium chloride"), c("Br2", 1, "溴", "Bromine")],
        difficulty: Difficulty::Medium,
    },
    Equation {
        reactants: &[c("KI", 2, "碘化鉀", "Potassium iodide"), c("Br2", 1, "溴", "Bromine")],
        products: &[c("KBr", 2, "溴化鉀", "Potassium bromide"), c("I2", 1, "碘", "Iodine")],
        difficulty: Difficulty::Medium,
    },
];

static ENERGETICS: &[Equation] = &[
    Equation {
        reactants: &[c("H2", 2, "氫氣", "Hydrogen"), c("O2", 1, "氧氣", "Oxygen")],
        products: &[c("H2O", 2, "水", "Water")],
        difficulty: Difficulty::Easy,
    },
    Equation {
        reactants: &[c("C", 1, "碳", "Carbon"), c("O2", 1, "氧氣", "Oxygen")],
        products: &[c("CO2", 1, "二氧化碳", "Carbon dioxide")],
        difficulty: Difficulty::Easy,
    },
    Equation {
        reactants: &[c("N2", 1, "氮氣", "Nitrogen"), c("H2", 3, "氫氣", "Hydrogen")],
        products: &[c("NH3", 2, "氨", "Ammonia")],
        difficulty: Difficulty::Medium,
    },
];

static REDOX_HALF: &[Equation] = &[
    Equation {
        reactants: &[
            c("MnO4^-", 1, "高錳酸根離子", "Permanganate ion"),
            c("H^+", 8, "氫離子", "Hydrogen ion"),
            c("e^-", 5, "電子", "Electron"),
        ],
        products: &[c("Mn^2+", 1, "錳(II)離子", "Manganese(II) ion"), c("H2O", 4, "水", "Water")],
        difficulty: Difficulty::Hard,
    },
    Equation {
        reactants: &[
            c("Cr2O7^2-", 1, "重鉻酸根離子", "Dichromate ion"),
            c("H^+", 14, "氫離子", "Hydrogen ion"),
            c("e^-", 6, "電子", "Electron"),
        ],
        products: &[c("Cr^3+", 2, "鉻(III)離子", "Chromium(III) ion"), c("H2O", 7, "水", "Water")],
        difficulty: Difficulty::Hard,
    },
    Equation {
        reactants: &[c("Fe^2+", 1, "亞鐵離子", "Iron(II) ion")],
        products: &[c("Fe^3+", 1, "鐵(III)離子", "Iron(III) ion"), c("e^-", 1, "電子", "Electron")],
        difficulty: Difficulty::Easy,
    },
    Equation {
        reactants: &[c("Cl2", 1, "氯氣", "Chlorine"), c("e^-", 2, "電子", "Electron")],
        products: &[c("Cl^-", 2, "氯離子", "Chloride ion")],
        difficulty: Difficulty::Easy,
    },
];

static REDOX_FULL: &[Equation] = &[
    Equation {
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
    Equation {
        reactants: &[c("Zn", 1, "鋅", "Zinc"), c("Cu^2+", 1, "銅(II)離子", "Copper(II) ion")],
        products: &[c("Zn^2+", 1, "鋅離子", "Zinc ion"), c("Cu", 1, "銅", "Copper")],
        difficulty: Difficulty::Easy,
    },
    Equation {
        reactants: &[c("Cl2", 1, "氯氣", "Chlorine"), c("I^-", 2, "碘離子", "Iodide ion")],
        products: &[c("Cl^-", 2, "氯離子", "Chloride ion"), c("I2", 1, "碘", "Iodine")],
        difficulty: Difficulty::Medium,
    },
];

/// All balancing equations for a topic. Combined topics merge their pools.
pub fn balancing_pool(topic: Topic) -> Vec<&'static Equation> {
    let sources: &[&'static [Equation]] = match topic {
        Topic::EarthMicro => &[EARTH, MICRO],
        Topic::Metals => &[METALS],
        Topic::Acids => &[ACIDS],
        Topic::Organic => &[ORGANIC],
        Topic::PeriodEnergy => &[PERIODICITY, ENERGETICS],
        Topic::RedoxHalf => &[REDOX_HALF],
        Topic::RedoxFull => &[REDOX_FULL],
    };
    sources.iter().flat_map(|pool| pool.iter()).collect()
}
