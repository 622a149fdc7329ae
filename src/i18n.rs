//! User-facing strings. The core reports structured issues and this module
//! turns them into Traditional Chinese or English text.

use crate::bank::{Difficulty, Topic, TopicFamily};
use crate::chem::{format_formula, BalanceIssue, BalanceReport, Side};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    Zh,
    En,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::Zh => Language::En,
            Language::En => Language::Zh,
        }
    }

    pub fn texts(self) -> &'static Texts {
        match self {
            Language::Zh => &ZH,
            Language::En => &EN,
        }
    }
}

pub struct Texts {
    pub app_title: &'static str,
    pub switch_language: &'static str,
    pub login_prompt: &'static str,
    pub login_placeholder: &'static str,
    pub login_button: &'static str,
    pub logout: &'static str,
    pub welcome: &'static str,
    pub back: &'static str,
    pub mode_formula: &'static str,
    pub mode_formula_desc: &'static str,
    pub mode_balance: &'static str,
    pub mode_balance_desc: &'static str,
    pub mode_builder: &'static str,
    pub mode_builder_desc: &'static str,
    pub select_topic: &'static str,
    pub family_general: &'static str,
    pub family_redox: &'static str,
    pub stage: &'static str,
    pub locked: &'static str,
    pub check: &'static str,
    pub clear: &'static str,
    pub retry: &'static str,
    pub next: &'static str,
    pub finish: &'static str,
    pub correct: &'static str,
    pub incorrect: &'static str,
    pub not_simplest: &'static str,
    pub score: &'static str,
    pub progress: &'static str,
    pub reactants: &'static str,
    pub products: &'static str,
    pub add: &'static str,
    pub input_formula: &'static str,
    pub input_coeff: &'static str,
    pub builder_guide: &'static str,
    pub balance_guide: &'static str,
    pub target_reaction: &'static str,
    pub your_answer: &'static str,
    pub show_answers: &'static str,
    pub answer_label: &'static str,
    pub stage_passed: &'static str,
    pub stage_failed: &'static str,
    pub empty_pool: &'static str,
    pub round_over: &'static str,
    pub choose_stage: &'static str,
    pub handwriting_title: &'static str,
    pub handwriting_hint: &'static str,
    pub handwriting_upload: &'static str,
    pub handwriting_submit: &'static str,
    pub handwriting_grading: &'static str,
    pub handwriting_no_attempts: &'static str,
    pub attempts_left: &'static str,
    pub offline_result: &'static str,
    pub grading_failed: &'static str,
    pub fallback_feedback: &'static str,
    pub fallback_overall: &'static str,
    pub student_wrote: &'static str,
    pub missing_reactant: &'static str,
    pub missing_product: &'static str,
    pub unrecognized_formula: &'static str,
    pub atoms_unbalanced: &'static str,
    pub charge_unbalanced: &'static str,
    pub coefficients_hint: &'static str,
    pub charge_hint: &'static str,
}

static ZH: Texts = Texts {
    app_title: "化學大師",
    switch_language: "English",
    login_prompt: "請輸入你的名字",
    login_placeholder: "名字",
    login_button: "開始",
    logout: "登出",
    welcome: "歡迎",
    back: "返回",
    mode_formula: "第一關：化學式與離子",
    mode_formula_desc: "寫出離子的化學式",
    mode_balance: "第二關：平衡方程式",
    mode_balance_desc: "填寫正確的係數",
    mode_builder: "第三關：方程式建構",
    mode_builder_desc: "根據描述寫出完整方程式",
    select_topic: "選擇練習課題",
    family_general: "HKDSE 綜合化學 (課題 1-8)",
    family_redox: "氧化還原反應 (Redox)",
    stage: "階段",
    locked: "未解鎖",
    check: "檢查答案",
    clear: "清除答案",
    retry: "再試一次",
    next: "下一題",
    finish: "完成",
    correct: "正確！",
    incorrect: "答案不正確",
    not_simplest: "已平衡，但係數必須是最簡整數比",
    score: "得分",
    progress: "進度",
    reactants: "反應物",
    products: "生成物",
    add: "新增",
    input_formula: "化學式 (如 O2)",
    input_coeff: "係數",
    builder_guide: "請輸入化學式及係數 (如係數為 1 可留空)。",
    balance_guide: "請為每個物質填寫係數 (如係數為 1 可留空)。",
    target_reaction: "目標反應：",
    your_answer: "你的答案",
    show_answers: "顯示答案",
    answer_label: "答案",
    stage_passed: "恭喜！已解鎖下一階段",
    stage_failed: "未達標，再接再厲！",
    empty_pool: "此課題暫時沒有題目。",
    round_over: "本輪完成！",
    choose_stage: "選擇階段",
    handwriting_title: "手寫挑戰",
    handwriting_hint: "在紙上寫下以上各題的化學式，然後上傳照片由 AI 評分。",
    handwriting_upload: "選擇照片",
    handwriting_submit: "提交評分",
    handwriting_grading: "AI 評分中...",
    handwriting_no_attempts: "挑戰次數已用完",
    attempts_left: "剩餘挑戰次數",
    offline_result: "AI 評分服務暫時不可用，已使用標準答案。",
    grading_failed: "評分失敗",
    fallback_feedback: "系統暫時無法分析，請稍後再試。",
    fallback_overall: "AI 評分服務暫時不可用，已使用標準答案。",
    student_wrote: "你寫了",
    missing_reactant: "缺漏或錯誤反應物",
    missing_product: "缺漏或錯誤生成物",
    unrecognized_formula: "無法識別的化學式",
    atoms_unbalanced: "原子未平衡",
    charge_unbalanced: "電荷未平衡",
    coefficients_hint: "物質正確，請調整係數。",
    charge_hint: "此反應涉及離子，兩邊電荷亦須相等。",
};

static EN: Texts = Texts {
    app_title: "Chemistry Master",
    switch_language: "中文",
    login_prompt: "Enter your name",
    login_placeholder: "Name",
    login_button: "Start",
    logout: "Log out",
    welcome: "Welcome",
    back: "Back",
    mode_formula: "Level 1: Formulas & Ions",
    mode_formula_desc: "Write the formula of each ion",
    mode_balance: "Level 2: Balancing Equations",
    mode_balance_desc: "Fill in the correct coefficients",
    mode_builder: "Level 3: Equation Builder",
    mode_builder_desc: "Write the full equation from a description",
    select_topic: "Select Topic",
    family_general: "General Chemistry (Topic 1-8)",
    family_redox: "Redox Reactions",
    stage: "Stage",
    locked: "Locked",
    check: "Check Answer",
    clear: "Clear Answers",
    retry: "Retry",
    next: "Next",
    finish: "Finish",
    correct: "Correct!",
    incorrect: "Incorrect",
    not_simplest: "Balanced, but coefficients must be in the simplest whole-number ratio",
    score: "Score",
    progress: "Progress",
    reactants: "Reactants",
    products: "Products",
    add: "Add",
    input_formula: "Formula (e.g. O2)",
    input_coeff: "Coeff",
    builder_guide: "Enter formulas and coefficients (leave coefficient empty for 1).",
    balance_guide: "Enter a coefficient for every species (leave empty for 1).",
    target_reaction: "Target Reaction:",
    your_answer: "Your answer",
    show_answers: "Show answers",
    answer_label: "Answer",
    stage_passed: "Well done! Next stage unlocked",
    stage_failed: "Not there yet, keep practising!",
    empty_pool: "No questions for this topic yet.",
    round_over: "Round complete!",
    choose_stage: "Choose a stage",
    handwriting_title: "Handwriting Challenge",
    handwriting_hint: "Write the formulas above on paper, then upload a photo for AI grading.",
    handwriting_upload: "Choose photo",
    handwriting_submit: "Submit for grading",
    handwriting_grading: "AI is grading...",
    handwriting_no_attempts: "No challenge attempts left",
    attempts_left: "Attempts left",
    offline_result: "The AI grading service is unavailable; the answer key was used.",
    grading_failed: "Grading failed",
    fallback_feedback: "The system could not analyse the image right now. Please try again later.",
    fallback_overall: "The AI grading service is unavailable; the answer key was used.",
    student_wrote: "You wrote",
    missing_reactant: "Missing/Incorrect Reactant",
    missing_product: "Missing/Incorrect Product",
    unrecognized_formula: "Unrecognised formula",
    atoms_unbalanced: "Atoms Unbalanced",
    charge_unbalanced: "Charge Unbalanced",
    coefficients_hint: "The species are right; adjust the coefficients.",
    charge_hint: "This reaction involves ions, so the charges must balance too.",
};

pub fn family_name(lang: Language, family: TopicFamily) -> &'static str {
    let t = lang.texts();
    match family {
        TopicFamily::General => t.family_general,
        TopicFamily::Redox => t.family_redox,
    }
}

pub fn topic_name(lang: Language, topic: Topic) -> &'static str {
    match (lang, topic) {
        (Language::Zh, Topic::EarthMicro) => "課題 1 & 2 地球與微觀世界",
        (Language::Zh, Topic::Metals) => "課題 3 金屬",
        (Language::Zh, Topic::Acids) => "課題 4 酸和鹼",
        (Language::Zh, Topic::Organic) => "課題 6 化石燃料和碳化合物",
        (Language::Zh, Topic::PeriodEnergy) => "課題 7 & 8 週期律與化學能量",
        (Language::Zh, Topic::RedoxHalf) => "半反應式",
        (Language::Zh, Topic::RedoxFull) => "全反應式",
        (Language::En, Topic::EarthMicro) => "Topic 1 & 2 Planet Earth & Micro World",
        (Language::En, Topic::Metals) => "Topic 3 Metals",
        (Language::En, Topic::Acids) => "Topic 4 Acids and Bases",
        (Language::En, Topic::Organic) => "Topic 6 Fossil Fuels and Carbon Compounds",
        (Language::En, Topic::PeriodEnergy) => "Topic 7 & 8 Periodicity & Energy Changes",
        (Language::En, Topic::RedoxHalf) => "Half Equations",
        (Language::En, Topic::RedoxFull) => "Full Equations",
    }
}

pub fn stage_title(lang: Language, stage: u32) -> &'static str {
    const ZH_TITLES: [&str; 8] = [
        "簡單陽離子",
        "過渡金屬離子",
        "簡單陰離子",
        "常見多原子離子",
        "硫和磷的含氧酸根",
        "其他多原子離子",
        "單原子離子總複習",
        "全部離子總複習",
    ];
    const EN_TITLES: [&str; 8] = [
        "Simple cations",
        "Transition metal ions",
        "Simple anions",
        "Common polyatomic ions",
        "Sulphur & phosphorus oxoanions",
        "More polyatomic ions",
        "Monatomic review",
        "Grand review",
    ];
    let titles = match lang {
        Language::Zh => &ZH_TITLES,
        Language::En => &EN_TITLES,
    };
    stage
        .checked_sub(1)
        .and_then(|i| titles.get(i as usize))
        .copied()
        .unwrap_or("")
}

pub fn difficulty_label(lang: Language, difficulty: Difficulty) -> &'static str {
    match (lang, difficulty) {
        (Language::Zh, Difficulty::Easy) => "容易",
        (Language::Zh, Difficulty::Medium) => "中等",
        (Language::Zh, Difficulty::Hard) => "困難",
        (Language::En, Difficulty::Easy) => "Easy",
        (Language::En, Difficulty::Medium) => "Medium",
        (Language::En, Difficulty::Hard) => "Hard",
    }
}

/// One display line per species issue; all numeric imbalances are folded
/// into a single "Atoms Unbalanced: O (L:2, R:1), ..." line.
pub fn describe_issues(lang: Language, issues: &[BalanceIssue]) -> Vec<String> {
    let t = lang.texts();
    let mut lines = Vec::new();
    let mut atoms = Vec::new();
    for issue in issues {
        match issue {
            BalanceIssue::MissingSpecies { side, formula } => {
                let label = match side {
                    Side::Reactants => t.missing_reactant,
                    Side::Products => t.missing_product,
                };
                lines.push(format!("{label}: {}", format_formula(formula)));
            }
            BalanceIssue::UnrecognizedFormula { formula, .. } => {
                lines.push(format!("{}: {formula}", t.unrecognized_formula));
            }
            BalanceIssue::AtomImbalance { element, left, right } => {
                atoms.push(format!("{element} (L:{left}, R:{right})"));
            }
            BalanceIssue::ChargeImbalance { left, right } => {
                lines.push(format!("{} (L:{left:+}, R:{right:+})", t.charge_unbalanced));
            }
        }
    }
    if !atoms.is_empty() {
        lines.push(format!("{}: {}", t.atoms_unbalanced, atoms.join(", ")));
    }
    lines
}

/// A nudge for answers that named every species but got the numbers wrong.
pub fn report_hint(lang: Language, report: &BalanceReport) -> Option<&'static str> {
    (!report.is_balanced() && report.only_imbalances()).then_some(lang.texts().coefficients_hint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atom_issues_fold_into_one_line() {
        let issues = vec![
            BalanceIssue::AtomImbalance { element: "H".into(), left: 4, right: 2 },
            BalanceIssue::AtomImbalance { element: "O".into(), left: 2, right: 3 },
        ];
        assert_eq!(
            describe_issues(Language::En, &issues),
            vec!["Atoms Unbalanced: H (L:4, R:2), O (L:2, R:3)".to_string()]
        );
    }

    #[test]
    fn missing_species_is_localized() {
        let issues = vec![BalanceIssue::MissingSpecies {
            side: Side::Products,
            formula: "CO2".into(),
        }];
        assert_eq!(describe_issues(Language::Zh, &issues), vec!["缺漏或錯誤生成物: CO₂".to_string()]);
        assert_eq!(describe_issues(Language::En, &issues), vec!["Missing/Incorrect Product: CO₂".to_string()]);
    }

    #[test]
    fn unrecognized_formula_is_localized() {
        let issues = vec![BalanceIssue::UnrecognizedFormula {
            side: Side::Reactants,
            formula: "H2o".into(),
        }];
        assert_eq!(describe_issues(Language::Zh, &issues), vec!["無法識別的化學式: H2o".to_string()]);
        assert_eq!(describe_issues(Language::En, &issues), vec!["Unrecognised formula: H2o".to_string()]);
    }

    #[test]
    fn hint_only_for_numeric_issues() {
        let numbers = BalanceReport {
            issues: vec![BalanceIssue::AtomImbalance { element: "O".into(), left: 2, right: 3 }],
        };
        assert_eq!(report_hint(Language::En, &numbers), Some(EN.coefficients_hint));

        let species = BalanceReport {
            issues: vec![
                BalanceIssue::MissingSpecies { side: Side::Reactants, formula: "O2".into() },
                BalanceIssue::AtomImbalance { element: "O".into(), left: 2, right: 3 },
            ],
        };
        assert_eq!(report_hint(Language::En, &species), None);
        assert_eq!(report_hint(Language::Zh, &BalanceReport::default()), None);
    }

    #[test]
    fn charge_shows_sign() {
        let issues = vec![BalanceIssue::ChargeImbalance { left: 2, right: -1 }];
        assert_eq!(describe_issues(Language::En, &issues), vec!["Charge Unbalanced (L:+2, R:-1)".to_string()]);
    }

    #[test]
    fn stage_titles_cover_all_stages() {
        for stage in 1..=crate::bank::STAGE_COUNT {
            assert!(!stage_title(Language::En, stage).is_empty());
            assert!(!stage_title(Language::Zh, stage).is_empty());
        }
        assert_eq!(stage_title(Language::En, 0), "");
    }

    #[test]
    fn toggling_language() {
        assert_eq!(Language::Zh.toggled(), Language::En);
        assert_eq!(Language::default(), Language::Zh);
    }
}
