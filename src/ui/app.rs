use std::rc::Rc;

use chem_master::bank::STAGE_COUNT;
use chem_master::config::AppConfig;
use chem_master::error::ProfileError;
use chem_master::i18n::Language;
use chem_master::nav::{NavEvent, Screen};
use chem_master::profile::{BrowserStore, ProfileBook, UserProfile};
use log::{debug, error, warn};
use yew::prelude::*;

use super::balancer::BalancerScreen;
use super::builder::BuilderScreen;
use super::formula_practice::FormulaPractice;
use super::home::Home;
use super::login::LoginScreen;
use super::topics::TopicSelect;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<AppConfig>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    let book = {
        let config = config.clone();
        use_memo((), move |_| {
            ProfileBook::new(BrowserStore::open(config.storage_key), &config, STAGE_COUNT)
        })
    };
    let screen = use_state(Screen::initial);
    let lang = use_state(Language::default);
    let user = use_state(|| None::<UserProfile>);
    let login_error = use_state(|| None::<AttrValue>);

    let on_nav = {
        let screen = screen.clone();
        let user = user.clone();
        Callback::from(move |event: NavEvent| {
            let next = screen.apply(event);
            debug!("nav {:?} + {event:?} -> {next:?}", *screen);
            if event == NavEvent::LoggedOut {
                user.set(None);
            }
            screen.set(next);
        })
    };

    let on_toggle_lang = {
        let lang = lang.clone();
        Callback::from(move |_: ()| lang.set(lang.toggled()))
    };

    let on_login = {
        let book = book.clone();
        let screen = screen.clone();
        let user = user.clone();
        let login_error = login_error.clone();
        let lang = *lang;
        Callback::from(move |name: String| match book.login(&name) {
            Ok(profile) => {
                user.set(Some(profile));
                login_error.set(None);
                screen.set(screen.apply(NavEvent::LoggedIn));
            }
            Err(ProfileError::BlankName) => {
                login_error.set(Some(lang.texts().login_prompt.into()));
            }
            Err(e) => {
                error!("login failed: {e}");
                login_error.set(Some(e.to_string().into()));
            }
        })
    };

    // Async flows may finish after other updates, so both handlers below
    // start from the stored copy rather than the render-time snapshot.
    let latest = {
        let book = book.clone();
        let user = user.clone();
        move || {
            let current = (*user).clone()?;
            Some(book.get(&current.name).unwrap_or(current))
        }
    };

    let on_stage_passed = {
        let book = book.clone();
        let user = user.clone();
        let latest = latest.clone();
        Callback::from(move |stage: u32| {
            let Some(profile) = latest() else {
                return;
            };
            match book.unlock_stage(&profile, stage + 1) {
                Ok(updated) => user.set(Some(updated)),
                Err(e) => error!("could not save progress: {e}"),
            }
        })
    };

    let on_attempt_used = {
        let book = book.clone();
        let user = user.clone();
        Callback::from(move |_: ()| {
            let Some(profile) = latest() else {
                return;
            };
            match book.use_attempt(&profile) {
                Ok(Some(updated)) => user.set(Some(updated)),
                Ok(None) => warn!("{} has no challenge attempts left", profile.name),
                Err(e) => error!("could not save attempt: {e}"),
            }
        })
    };

    let t = lang.texts();
    let body = match (*screen, (*user).clone()) {
        (Screen::Login, _) | (_, None) => {
            return html! {
                <div class="app-shell">
                    <LoginScreen
                        lang={*lang}
                        error={(*login_error).clone()}
                        on_login={on_login}
                        on_toggle_lang={on_toggle_lang}
                    />
                </div>
            };
        }
        (Screen::Home, Some(profile)) => html! {
            <Home lang={*lang} user={profile} on_nav={on_nav.clone()} />
        },
        (Screen::FormulaPractice, Some(profile)) => html! {
            <FormulaPractice
                lang={*lang}
                user={profile}
                config={config.clone()}
                on_nav={on_nav.clone()}
                on_stage_passed={on_stage_passed}
                on_attempt_used={on_attempt_used}
            />
        },
        (Screen::TopicSelect { mode }, Some(_)) => html! {
            <TopicSelect lang={*lang} mode={mode} family={None} on_nav={on_nav.clone()} />
        },
        (Screen::TopicSelectSub { mode, family }, Some(_)) => html! {
            <TopicSelect lang={*lang} mode={mode} family={Some(family)} on_nav={on_nav.clone()} />
        },
        (Screen::Balancing { topic }, Some(_)) => html! {
            <BalancerScreen lang={*lang} topic={topic} config={config.clone()} on_nav={on_nav.clone()} />
        },
        (Screen::Building { topic }, Some(_)) => html! {
            <BuilderScreen lang={*lang} topic={topic} config={config.clone()} on_nav={on_nav.clone()} />
        },
    };

    let on_logout = {
        let on_nav = on_nav.clone();
        Callback::from(move |_| on_nav.emit(NavEvent::LoggedOut))
    };
    let name = user.as_ref().map(|u| u.name.clone()).unwrap_or_default();

    html! {
        <div class="app-shell">
            <div class="top-bar">
                <h1>{t.app_title}</h1>
                <div class="btn-row">
                    <span class="field-hint">{format!("{} {name}", t.welcome)}</span>
                    <button class="btn-secondary" onclick={on_toggle_lang.reform(|_: MouseEvent| ())}>
                        {t.switch_language}
                    </button>
                    <button class="btn-secondary" onclick={on_logout}>
                        {t.logout}
                    </button>
                </div>
            </div>
            {body}
        </div>
    }
}
