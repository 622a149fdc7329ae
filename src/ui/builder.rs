use std::rc::Rc;

use chem_master::bank::{builder_pool, select_challenges, Component, Topic};
use chem_master::chem::{format_formula, format_term, Side};
use chem_master::config::AppConfig;
use chem_master::i18n::{difficulty_label, topic_name, Language};
use chem_master::nav::NavEvent;
use chem_master::practice::{BuilderForm, Field, Round};
use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew::TargetCast;

use super::common::{OutcomeBanner, RoundHeader, RoundOver};
use super::fresh_seed;

#[derive(Properties, PartialEq)]
pub struct BuilderProps {
    pub lang: Language,
    pub topic: Topic,
    pub config: Rc<AppConfig>,
    pub on_nav: Callback<NavEvent>,
}

#[function_component(BuilderScreen)]
pub fn builder_screen(props: &BuilderProps) -> Html {
    let t = props.lang.texts();
    let lang = props.lang;
    let topic = props.topic;

    let round = {
        let config = props.config.clone();
        use_state(move || {
            let seed = fresh_seed();
            let picked = select_challenges(&builder_pool(topic), config.round_size, seed);
            info!("builder round: {} challenges on {topic:?} (seed {seed})", picked.len());
            Round::new(picked, config.points_per_correct)
        })
    };
    let form = use_state(BuilderForm::default);
    let finished = use_state(|| false);
    let reveal = use_state(|| false);

    let on_back = props.on_nav.reform(|_: MouseEvent| NavEvent::Back);
    let on_done = props.on_nav.reform(|_: MouseEvent| NavEvent::RoundFinished);

    let Some(&challenge) = round.current() else {
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

    // Any edit hides the previous verdict.
    let edit = {
        let form = form.clone();
        let round = round.clone();
        move |change: Box<dyn Fn(&mut BuilderForm)>| {
            let mut f = (*form).clone();
            change(&mut f);
            form.set(f);
            if round.outcome().is_some() {
                let mut r = (*round).clone();
                r.clear_outcome();
                round.set(r);
            }
        }
    };

    let on_field = |side: Side, id: u32, field: Field| {
        let edit = edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            edit(Box::new(move |f: &mut BuilderForm| f.update(side, id, field, value.clone())));
        })
    };
    let on_remove = |side: Side, id: u32| {
        let edit = edit.clone();
        Callback::from(move |_: MouseEvent| edit(Box::new(move |f: &mut BuilderForm| f.remove(side, id))))
    };
    let on_add = |side: Side| {
        let edit = edit.clone();
        Callback::from(move |_: MouseEvent| edit(Box::new(move |f: &mut BuilderForm| f.add(side))))
    };

    let on_check = {
        let form = form.clone();
        let round = round.clone();
        Callback::from(move |_: MouseEvent| {
            let outcome = form.check(challenge, topic.balance_rules());
            let mut r = (*round).clone();
            r.submit(outcome);
            round.set(r);
        })
    };

    let on_next = {
        let form = form.clone();
        let round = round.clone();
        let finished = finished.clone();
        let reveal = reveal.clone();
        Callback::from(move |_: MouseEvent| {
            let mut r = (*round).clone();
            if r.advance() {
                form.set(BuilderForm::default());
                round.set(r);
                reveal.set(false);
            } else {
                info!("builder round finished with {} points", r.score());
                finished.set(true);
            }
        })
    };

    let on_reveal = {
        let reveal = reveal.clone();
        Callback::from(move |_: MouseEvent| reveal.set(!*reveal))
    };

    let side_panel = |side: Side| -> Html {
        let label = match side {
            Side::Reactants => t.reactants,
            Side::Products => t.products,
        };
        html! {
            <div class="side-panel">
                <div class="field-label"><span>{label}</span></div>
                { for form.entries(side).iter().map(|entry| html! {
                    <div class="answer-row" key={entry.id}>
                        <input
                            class="answer-input coeff-input"
                            type="text"
                            inputmode="numeric"
                            placeholder={t.input_coeff}
                            value={entry.coefficient.clone()}
                            oninput={on_field(side, entry.id, Field::Coefficient)}
                        />
                        <input
                            class="answer-input"
                            type="text"
                            placeholder={t.input_formula}
                            value={entry.formula.clone()}
                            oninput={on_field(side, entry.id, Field::Formula)}
                        />
                        <span class="formula">{format_formula(&entry.formula)}</span>
                        <button class="btn-regen" onclick={on_remove(side, entry.id)}>{"✕"}</button>
                    </div>
                }) }
                <button class="btn-secondary" onclick={on_add(side)}>{format!("+ {}", t.add)}</button>
            </div>
        }
    };

    let answer = {
        let eq = &challenge.equation;
        let join = |side: &[Component]| {
            side.iter()
                .map(|c| format_term(c.coefficient, c.formula))
                .collect::<Vec<_>>()
                .join(" + ")
        };
        format!("{} → {}", join(eq.reactants), join(eq.products))
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
            <div class="tiny-note">{t.builder_guide}</div>
            if challenge.equation.is_ionic() {
                <div class="tiny-note">{t.charge_hint}</div>
            }
            <div class="question-card">
                <div class="question-header">
                    <div class="question-index">{t.target_reaction}</div>
                    <div class="question-tag tag-word">
                        {difficulty_label(lang, challenge.equation.difficulty)}
                    </div>
                </div>
                <div class="question-text">{challenge.description(lang)}</div>
            </div>
            <div class="config-grid">
                {side_panel(Side::Reactants)}
                {side_panel(Side::Products)}
            </div>
            <OutcomeBanner lang={lang} outcome={round.outcome().cloned()} />
            if *reveal {
                <div class="teacher-answer">{format!("{}: {answer}", t.answer_label)}</div>
            }
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
