use chem_master::i18n::{describe_issues, report_hint, Language};
use chem_master::practice::Outcome;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RoundHeaderProps {
    pub lang: Language,
    pub index: usize,
    pub total: usize,
    pub score: u32,
    pub title: AttrValue,
    pub on_back: Callback<MouseEvent>,
}

/// Title, progress and running score for balancing and builder rounds.
#[function_component(RoundHeader)]
pub fn round_header(props: &RoundHeaderProps) -> Html {
    let t = props.lang.texts();
    html! {
        <div class="question-header">
            <button class="btn-secondary" onclick={props.on_back.clone()}>{t.back}</button>
            <div class="question-index">{props.title.clone()}</div>
            <div class="question-tag tag-basic">
                {format!("{} {}/{}", t.progress, props.index + 1, props.total)}
            </div>
            <div class="score-main">{format!("{}: {}", t.score, props.score)}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct OutcomeBannerProps {
    pub lang: Language,
    pub outcome: Option<Outcome>,
}

#[function_component(OutcomeBanner)]
pub fn outcome_banner(props: &OutcomeBannerProps) -> Html {
    let t = props.lang.texts();
    match &props.outcome {
        None => Html::default(),
        Some(Outcome::Correct) => html! {
            <div class="feedback correct">{format!("✅ {}", t.correct)}</div>
        },
        Some(Outcome::NotSimplest) => html! {
            <div class="feedback incorrect">{format!("⚠️ {}", t.not_simplest)}</div>
        },
        Some(Outcome::Incorrect(report)) => html! {
            <div class="feedback incorrect">
                <div>{format!("❌ {}", t.incorrect)}</div>
                if let Some(hint) = report_hint(props.lang, report) {
                    <div class="tiny-note">{hint}</div>
                }
                { for describe_issues(props.lang, &report.issues).into_iter().map(|line| html! {
                    <div class="tiny-note">{line}</div>
                }) }
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct RoundOverProps {
    pub lang: Language,
    pub score: u32,
    pub max_score: u32,
    pub on_done: Callback<MouseEvent>,
}

#[function_component(RoundOver)]
pub fn round_over(props: &RoundOverProps) -> Html {
    let t = props.lang.texts();
    html! {
        <div class="card">
            <div class="score-banner">
                <div class="score-main">{t.round_over}</div>
                <div>{format!("{}: {}/{}", t.score, props.score, props.max_score)}</div>
            </div>
            <div class="btn-row">
                <button class="btn-primary" onclick={props.on_done.clone()}>{t.finish}</button>
            </div>
        </div>
    }
}
