use chem_master::bank::STAGE_COUNT;
use chem_master::i18n::Language;
use chem_master::nav::NavEvent;
use chem_master::profile::UserProfile;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub lang: Language,
    pub user: UserProfile,
    pub on_nav: Callback<NavEvent>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let t = props.lang.texts();
    let go = |event: NavEvent| props.on_nav.reform(move |_: MouseEvent| event);

    let modes = [
        (t.mode_formula, t.mode_formula_desc, NavEvent::OpenFormulaPractice),
        (t.mode_balance, t.mode_balance_desc, NavEvent::OpenBalancing),
        (t.mode_builder, t.mode_builder_desc, NavEvent::OpenBuilding),
    ];

    html! {
        <div class="card">
            <div class="subtitle">
                {format!(
                    "{} · {} {}/{} · {} {}",
                    props.user.name,
                    t.stage,
                    props.user.progress.level1_max_stage,
                    STAGE_COUNT,
                    t.attempts_left,
                    props.user.challenge_attempts,
                )}
            </div>
            <div class="config-grid">
                { for modes.into_iter().map(|(title, desc, event)| html! {
                    <button class="question-card mode-card" onclick={go(event)}>
                        <div class="question-index">{title}</div>
                        <div class="tiny-note">{desc}</div>
                    </button>
                }) }
            </div>
        </div>
    }
}
