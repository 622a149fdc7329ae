use std::rc::Rc;

use chem_master::bank::{balancing_pool, select_challenges, Component, Equation, Topic};
use chem_master::chem::format_formula;
use chem_master::config::AppConfig;
use chem_master::i18n::{difficulty_label, topic_name, Language};
use chem_master::nav::NavEvent;
use chem_master::practice::{check_coefficients, Round};
use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew::TargetCast;

use super::common::{OutcomeBanner, RoundHeader, RoundOver};
use super::fresh_seed;

#[derive(Properties, PartialEq)]
pub struct BalancerProps {
    pub lang: Language,
    pub topic: Topic,
    pub config: Rc<AppConfig>,
    pub on_nav: Callback<NavEvent>,
}

fn blank_inputs(equation: Option<&&'static Equation>) -> Vec<String> {
    vec![String::new(); equation.map(|eq| eq.component_count()).unwrap_or(0)]
}

#[function_component(BalancerScreen)]
pub fn balancer_screen(props: &BalancerProps) -> Html {
    let t = props.lang.texts();
    let lang = props.lang;
    let topic = props.topic;

    let round = {
        let config = props.config.clone();
        use_state(move || {
            let seed = fresh_seed();
            let picked = select_challenges(&balancing_pool(topic), config.round_size, seed);
            info!("balancing round: {} challenges on {topic:?} (seed {seed})", picked.len());
            Round::new(picked, config.points_per_correct)
        })
    };
    let inputs = {
        let round = round.clone();
        use_state(move || blank_inputs(round.current()))
    };
    let finished = use_state(|| false);
    let reveal = use_state(|| false);

    let on_back = props.on_nav.reform(|_: MouseEvent| NavEvent::Back);
    let on_done = props.on_nav.reform(|_: MouseEvent| NavEvent::RoundFinished);

    let Some(&equation) = round.current() else {
        return html! {
            <div class="card">
                <button class="btn-secondary" onclick={on_back}>{t.back}</button>
                <p>{t.empty_pool}</p>
            </div>
        };
    };

    if *finished {
        let max_score = round.len() as u32 * props.config.points_per_correct;
        return html! { <RoundOver lang={lang} score={round.score()} {max_score} on_done={on_done} /> };
    }

    let on_coeff = |index: usize| {
        let inputs = inputs.clone();
        let round = round.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut values = (*inputs).clone();
            if let Some(v) = values.get_mut(index) {
                *v = input.value();
            }
            inputs.set(values);
            if round.outcome().is_some() {
                let mut r = (*round).clone();
                r.clear_outcome();
                round.set(r);
            }
        })
    };

    let on_check = {
        let inputs = inputs.clone();
        let round = round.clone();
        Callback::from(move |_: MouseEvent| {
            let outcome = check_coefficients(equation, topic.balance_rules(), &inputs);
            let mut r = (*round).clone();
            r.submit(outcome);
            round.set(r);
        })
    };

    let on_next = {
        let inputs = inputs.clone();
        let round = round.clone();
        let finished = finished.clone();
        let reveal = reveal.clone();
        Callback::from(move |_: MouseEvent| {
            let mut r = (*round).clone();
            if r.advance() {
                inputs.set(blank_inputs(r.current()));
                round.set(r);
                reveal.set(false);
            } else {
                info!("balancing round finished with {} points", r.score());
                finished.set(true);
            }
        })
    };

    let on_reveal = {
        let reveal = reveal.clone();
        Callback::from(move |_: MouseEvent| reveal.set(!*reveal))
    };

    let species = |offset: usize, side: &'static [Component]| -> Html {
        side.iter()
            .enumerate()
            .map(|(i, comp)| {
                let index = offset + i;
                let value = inputs.get(index).cloned().unwrap_or_default();
                html! {
                    <>
                        if i > 0 { <span class="eq-plus">{" + "}</span> }
                        <span class="eq-term" title={comp.name(lang)}>
                            <input
                                class="answer-input coeff-input"
                                type="text"
                                inputmode="numeric"
                                placeholder="1"
                                value={value}
                                oninput={on_coeff(index)}
                            />
                            <span class="formula">{format_formula(comp.formula)}</span>
                            if *reveal {
                                <span class="teacher-answer">{format!("({})", comp.coefficient)}</span>
                            }
                        </span>
                    </>
                }
            })
            .collect()
    };

    let correct = round.outcome().is_some_and(|o| o.is_correct());

    html! {
        <div class="card">
            <RoundHeader
                lang={lang}
                index={round.index()}
                total={round.len()}
                score={round.score()}
                title={topic_name(lang, topic)}
                on_back={on_back}
            />
            <div class="tiny-note">{t.balance_guide}</div>
            if equation.is_ionic() {
                <div class="tiny-note">{t.charge_hint}</div>
            }
            <div class="question-card">
                <div class="question-tag tag-word">{difficulty_label(lang, equation.difficulty)}</div>
                <div class="equation-row">
                    {species(0, equation.reactants)}
                    <span class="eq-arrow">{" → "}</span>
                    {species(equation.reactants.len(), equation.products)}
                </div>
            </div>
            <OutcomeBanner lang={lang} outcome={round.outcome().cloned()} />
            <div class="btn-row">
                if correct {
                    <button class="btn-primary" onclick={on_next}>
                        { if round.is_last() { t.finish } else { t.next } }
                    </button>
                } else {
                    <button class="btn-primary" onclick={on_check}>{t.check}</button>
                    <button class="btn-secondary" onclick={on_next}>
                        { if round.is_last() { t.finish } else { t.next } }
                    </button>
                }
                <button class="btn-secondary" onclick={on_reveal}>{t.show_answers}</button>
            </div>
        </div>
    }
}
