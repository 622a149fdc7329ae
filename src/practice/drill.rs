//! Formula drill: name an ion, type its formula.

use crate::bank::{select_challenges, stage_pool, FormulaQuestion};
use crate::chem::normalize_formula;
use crate::i18n::Language;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillQuestion {
    pub question: FormulaQuestion,
    pub user_answer: String,
    /// `None` until the sheet is graded.
    pub is_correct: Option<bool>,
}

/// Whitespace is ignored, case is not.
pub fn answer_matches(expected: &str, given: &str) -> bool {
    let given = normalize_formula(given);
    !given.is_empty() && given == normalize_formula(expected)
}

/// `correct / total` reaches `percent`. An empty sheet never passes.
pub fn stage_passed(correct: usize, total: usize, percent: u32) -> bool {
    total > 0 && correct * 100 >= total * percent as usize
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillSheet {
    pub stage: u32,
    pub questions: Vec<DrillQuestion>,
    graded: bool,
}

impl DrillSheet {
    /// Draws up to `count` ions from the stage pool.
    pub fn generate(stage: u32, lang: Language, count: usize, seed: u64) -> Self {
        let questions = select_challenges(&stage_pool(stage), count, seed)
            .into_iter()
            .map(|ion| DrillQuestion {
                question: ion.question(lang),
                user_answer: String::new(),
                is_correct: None,
            })
            .collect();
        Self {
            stage,
            questions,
            graded: false,
        }
    }

    pub fn is_graded(&self) -> bool {
        self.graded
    }

    /// Ignored once graded.
    pub fn set_answer(&mut self, index: usize, value: String) {
        if self.graded {
            return;
        }
        if let Some(q) = self.questions.get_mut(index) {
            q.user_answer = value;
        }
    }

    /// Marks every question and returns the number correct.
    pub fn grade(&mut self) -> usize {
        for q in &mut self.questions {
            q.is_correct = Some(answer_matches(&q.question.expected_formula, &q.user_answer));
        }
        self.graded = true;
        self.correct_count()
    }

    pub fn correct_count(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| q.is_correct == Some(true))
            .count()
    }

    pub fn passed(&self, percent: u32) -> bool {
        self.graded && stage_passed(self.correct_count(), self.questions.len(), percent)
    }

    /// Clears answers and marks for another try at the same questions.
    pub fn reset(&mut self) {
        for q in &mut self.questions {
            q.user_answer.clear();
            q.is_correct = None;
        }
        self.graded = false;
    }

    /// The questions as sent for handwriting grading.
    pub fn formula_questions(&self) -> Vec<FormulaQuestion> {
        self.questions.iter().map(|q| q.question.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_ignores_whitespace_only() {
        assert!(answer_matches("SO4^2-", " SO4 ^2- "));
        assert!(!answer_matches("SO4^2-", "so4^2-"));
        assert!(!answer_matches("Na^+", "   "));
    }

    #[test]
    fn pass_threshold() {
        assert!(stage_passed(4, 5, 80));
        assert!(!stage_passed(3, 5, 80));
        assert!(stage_passed(8, 8, 100));
        assert!(!stage_passed(0, 0, 0));
    }

    #[test]
    fn generate_respects_pool_and_count() {
        let sheet = DrillSheet::generate(1, Language::En, 4, 7);
        assert_eq!(sheet.questions.len(), 4);
        let pool: Vec<&str> = stage_pool(1).iter().map(|i| i.formula).collect();
        for q in &sheet.questions {
            assert!(pool.contains(&q.question.expected_formula.as_str()));
            assert_eq!(q.is_correct, None);
        }
        assert_eq!(sheet, DrillSheet::generate(1, Language::En, 4, 7));
    }

    #[test]
    fn grading_marks_each_question() {
        let mut sheet = DrillSheet::generate(2, Language::Zh, 3, 1);
        let first = sheet.questions[0].question.expected_formula.clone();
        sheet.set_answer(0, first);
        sheet.set_answer(1, "Xx".into());
        assert_eq!(sheet.grade(), 1);
        assert_eq!(sheet.questions[0].is_correct, Some(true));
        assert_eq!(sheet.questions[1].is_correct, Some(false));
        assert_eq!(sheet.questions[2].is_correct, Some(false));
        assert!(!sheet.passed(80));

        sheet.set_answer(1, "ignored".into());
        assert_eq!(sheet.questions[1].user_answer, "Xx");

        sheet.reset();
        assert!(!sheet.is_graded());
        assert!(sheet.questions.iter().all(|q| q.user_answer.is_empty()));
    }

    #[test]
    fn full_marks_pass() {
        let mut sheet = DrillSheet::generate(3, Language::En, 5, 99);
        for i in 0..sheet.questions.len() {
            let answer = sheet.questions[i].question.expected_formula.clone();
            sheet.set_answer(i, answer);
        }
        sheet.grade();
        assert!(sheet.passed(100));
    }

    #[test]
    fn unknown_stage_is_empty() {
        let mut sheet = DrillSheet::generate(42, Language::En, 5, 0);
        assert!(sheet.questions.is_empty());
        assert_eq!(sheet.grade(), 0);
        assert!(!sheet.passed(0));
    }
}
