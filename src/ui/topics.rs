use chem_master::bank::{balancing_pool, builder_pool, TopicFamily};
use chem_master::i18n::{family_name, topic_name, Language};
use chem_master::nav::{EquationMode, NavEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TopicSelectProps {
    pub lang: Language,
    pub mode: EquationMode,
    /// `None` shows the family list, `Some` the topics of that family.
    pub family: Option<TopicFamily>,
    pub on_nav: Callback<NavEvent>,
}

#[function_component(TopicSelect)]
pub fn topic_select(props: &TopicSelectProps) -> Html {
    let t = props.lang.texts();
    let lang = props.lang;
    let go = |event: NavEvent| props.on_nav.reform(move |_: MouseEvent| event);

    let heading = match props.mode {
        EquationMode::Balancing => t.mode_balance,
        EquationMode::Building => t.mode_builder,
    };

    let choices = match props.family {
        None => html! {
            { for TopicFamily::ALL.into_iter().map(|family| html! {
                <button class="question-card mode-card" onclick={go(NavEvent::ChooseFamily(family))}>
                    <div class="question-index">{family_name(lang, family)}</div>
                </button>
            }) }
        },
        Some(family) => html! {
            { for family.topics().iter().map(|&topic| {
                let count = match props.mode {
                    EquationMode::Balancing => balancing_pool(topic).len(),
                    EquationMode::Building => builder_pool(topic).len(),
                };
                html! {
                    <button
                        class="question-card mode-card"
                        disabled={count == 0}
                        onclick={go(NavEvent::ChooseTopic(topic))}
                    >
                        <div class="question-index">{topic_name(lang, topic)}</div>
                        <div class="tiny-note">{format!("({count})")}</div>
                    </button>
                }
            }) }
        },
    };

    html! {
        <div class="card">
            <div class="question-header">
                <button class="btn-secondary" onclick={go(NavEvent::Back)}>{t.back}</button>
                <h2>{heading}</h2>
            </div>
            <div class="subtitle">{t.select_topic}</div>
            <div class="config-grid">{choices}</div>
        </div>
    }
}
