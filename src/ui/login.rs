use chem_master::i18n::Language;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew::TargetCast;

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub lang: Language,
    pub error: Option<AttrValue>,
    pub on_login: Callback<String>,
    pub on_toggle_lang: Callback<()>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginProps) -> Html {
    let t = props.lang.texts();
    let name = use_state(String::new);

    let on_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_login.emit((*name).clone());
        })
    };

    let on_toggle = props.on_toggle_lang.reform(|_: MouseEvent| ());

    html! {
        <div class="card login-card">
            <h1>{t.app_title}</h1>
            <form onsubmit={on_submit}>
                <div class="field-label">
                    <span>{t.login_prompt}</span>
                </div>
                <input
                    class="field-input"
                    type="text"
                    placeholder={t.login_placeholder}
                    value={(*name).clone()}
                    oninput={on_input}
                />
                if let Some(err) = &props.error {
                    <div class="feedback incorrect">{err.clone()}</div>
                }
                <div class="btn-row">
                    <button class="btn-primary" type="submit">{t.login_button}</button>
                    <button class="btn-secondary" type="button" onclick={on_toggle}>
                        {t.switch_language}
                    </button>
                </div>
            </form>
        </div>
    }
}
