use std::rc::Rc;

use chem_master::bank::STAGE_COUNT;
use chem_master::chem::format_formula;
use chem_master::config::AppConfig;
use chem_master::i18n::{stage_title, Language};
use chem_master::nav::NavEvent;
use chem_master::practice::{DrillQuestion, DrillSheet};
use chem_master::profile::UserProfile;
use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew::TargetCast;

use super::fresh_seed;
use super::handwriting::HandwritingPanel;

#[derive(Properties, PartialEq)]
pub struct FormulaPracticeProps {
    pub lang: Language,
    pub user: UserProfile,
    pub config: Rc<AppConfig>,
    pub on_nav: Callback<NavEvent>,
    /// Emitted with the stage number when a stage is passed.
    pub on_stage_passed: Callback<u32>,
    pub on_attempt_used: Callback<()>,
}

#[function_component(FormulaPractice)]
pub fn formula_practice(props: &FormulaPracticeProps) -> Html {
    let t = props.lang.texts();
    let lang = props.lang;
    let sheet = use_state(|| None::<DrillSheet>);
    let teacher_mode = use_state(|| false);

    let Some(current) = (*sheet).clone() else {
        let on_back = props.on_nav.reform(|_: MouseEvent| NavEvent::Back);
        let pick = |stage: u32| {
            let sheet = sheet.clone();
            let count = props.config.drill_questions;
            Callback::from(move |_: MouseEvent| {
                let seed = fresh_seed();
                info!("drill stage {stage} (seed {seed})");
                sheet.set(Some(DrillSheet::generate(stage, lang, count, seed)));
            })
        };
        return html! {
            <div class="card">
                <div class="question-header">
                    <button class="btn-secondary" onclick={on_back}>{t.back}</button>
                    <h2>{t.mode_formula}</h2>
                </div>
                <div class="subtitle">{t.choose_stage}</div>
                <div class="config-grid">
                    { for (1..=STAGE_COUNT).map(|stage| {
                        let unlocked = props.user.is_stage_unlocked(stage);
                        html! {
                            <button
                                class={classes!("question-card", "mode-card", (!unlocked).then_some("locked"))}
                                disabled={!unlocked}
                                onclick={pick(stage)}
                            >
                                <div class="question-index">{format!("{} {stage}", t.stage)}</div>
                                <div class="tiny-note">
                                    { if unlocked { stage_title(lang, stage) } else { t.locked } }
                                </div>
                            </button>
                        }
                    }) }
                </div>
            </div>
        };
    };

    let stage = current.stage;
    let pass_percent = props.config.stage_pass_percent;

    let on_answer = {
        let sheet = sheet.clone();
        Callback::from(move |(index, value): (usize, String)| {
            if let Some(mut s) = (*sheet).clone() {
                s.set_answer(index, value);
                sheet.set(Some(s));
            }
        })
    };

    let on_check = {
        let sheet = sheet.clone();
        let on_stage_passed = props.on_stage_passed.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(mut s) = (*sheet).clone() else {
                return;
            };
            let correct = s.grade();
            info!("drill stage {stage}: {correct}/{}", s.questions.len());
            if s.passed(pass_percent) {
                on_stage_passed.emit(stage);
            }
            sheet.set(Some(s));
        })
    };

    let on_clear = {
        let sheet = sheet.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(mut s) = (*sheet).clone() {
                s.reset();
                sheet.set(Some(s));
            }
        })
    };

    let on_stages = {
        let sheet = sheet.clone();
        Callback::from(move |_: MouseEvent| sheet.set(None))
    };

    let on_teacher_mode = {
        let teacher_mode = teacher_mode.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            teacher_mode.set(input.checked());
        })
    };

    let on_full_marks = {
        let on_stage_passed = props.on_stage_passed.clone();
        Callback::from(move |_: ()| on_stage_passed.emit(stage))
    };

    let graded = current.is_graded();
    let correct_count = current.correct_count();
    let total_count = current.questions.len();

    html! {
        <>
            <div class="card">
                <div class="question-header">
                    <button class="btn-secondary" onclick={on_stages}>{t.back}</button>
                    <h2>{format!("{} {stage} · {}", t.stage, stage_title(lang, stage))}</h2>
                </div>
                <div class="checkbox-row">
                    <input type="checkbox" checked={*teacher_mode} oninput={on_teacher_mode} />
                    <span>{t.show_answers}</span>
                </div>

                if current.questions.is_empty() {
                    <p>{t.empty_pool}</p>
                } else {
                    <div class="questions-wrap">
                        { for current.questions.iter().enumerate().map(|(idx, q)| html! {
                            <QuestionRow
                                lang={lang}
                                index={idx}
                                question={q.clone()}
                                show_results={graded}
                                teacher_mode={*teacher_mode}
                                on_answer={on_answer.clone()}
                            />
                        }) }
                    </div>
                }

                <div class="btn-row">
                    <button class="btn-primary" onclick={on_check} disabled={graded}>{t.check}</button>
                    <button class="btn-secondary" onclick={on_clear}>{t.clear}</button>
                </div>

                if graded {
                    <div class="score-banner">
                        <div>
                            <span class="score-main">
                                {format!("{}: {}/{}", t.score, correct_count, total_count)}
                            </span>
                            {"  "}
                            {
                                if total_count > 0 {
                                    let pct = (correct_count as f64 / total_count as f64 * 100.0).round() as i32;
                                    format!("({}%)", pct)
                                } else {
                                    "".into()
                                }
                            }
                        </div>
                        <div class="tiny-note">
                            { if current.passed(pass_percent) { t.stage_passed } else { t.stage_failed } }
                        </div>
                    </div>
                }
            </div>

            if !current.questions.is_empty() {
                <HandwritingPanel
                    lang={lang}
                    questions={current.formula_questions()}
                    attempts={props.user.challenge_attempts}
                    grading={props.config.grading.clone()}
                    on_attempt_used={props.on_attempt_used.clone()}
                    on_full_marks={on_full_marks}
                />
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
struct QuestionRowProps {
    lang: Language,
    index: usize,
    question: DrillQuestion,
    show_results: bool,
    teacher_mode: bool,
    on_answer: Callback<(usize, String)>,
}

#[function_component(QuestionRow)]
fn question_row(props: &QuestionRowProps) -> Html {
    let t = props.lang.texts();
    let index = props.index;
    let question = &props.question;
    let expected = format_formula(&question.question.expected_formula);

    let on_answer_change = {
        let on_answer = props.on_answer.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_answer.emit((index, input.value()));
        })
    };

    let feedback = match (props.show_results, question.is_correct) {
        (true, Some(true)) => html! { <div class="feedback correct">{format!("✅ {}", t.correct)}</div> },
        (true, Some(false)) => html! {
            <div class="feedback incorrect">
                {format!("❌ {} {}: {}", t.incorrect, t.answer_label, expected)}
            </div>
        },
        _ => Html::default(),
    };

    html! {
        <div class="question-card">
            <div class="question-header">
                <div class="question-index">{format!("{}.", index + 1)}</div>
            </div>
            <div class="question-text">{question.question.prompt_text.clone()}</div>
            <div class="answer-row">
                <input
                    class="answer-input"
                    type="text"
                    placeholder={t.your_answer}
                    value={question.user_answer.clone()}
                    oninput={on_answer_change}
                    disabled={props.show_results}
                />
                <span class="formula">{format_formula(&question.user_answer)}</span>
            </div>
            {feedback}
            if props.teacher_mode {
                <div class="teacher-answer">{format!("{}: {}", t.answer_label, expected)}</div>
            }
        </div>
    }
}
