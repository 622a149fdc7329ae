use chem_master::bank::FormulaQuestion;
use chem_master::chem::format_formula;
use chem_master::config::GradingConfig;
use chem_master::error::GradingError;
use chem_master::grading::{evaluate_handwriting, EvaluationResult, GradingRequest};
use chem_master::i18n::Language;
use log::{error, info, warn};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;
use yew::TargetCast;

#[derive(Properties, PartialEq)]
pub struct HandwritingProps {
    pub lang: Language,
    pub questions: Vec<FormulaQuestion>,
    pub attempts: u32,
    pub grading: GradingConfig,
    pub on_attempt_used: Callback<()>,
    pub on_full_marks: Callback<()>,
}

#[derive(Clone, PartialEq)]
enum Status {
    Idle,
    Grading,
    Done(EvaluationResult),
    Failed(String),
}

fn revoke_preview(url: &str) {
    if let Err(e) = web_sys::Url::revoke_object_url(url) {
        warn!("could not release image preview: {e:?}");
    }
}

async fn read_file(file: &File) -> Result<Vec<u8>, GradingError> {
    let buf = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| GradingError::Transport(format!("could not read image: {e:?}")))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Photo upload and AI grading for the current drill sheet.
#[function_component(HandwritingPanel)]
pub fn handwriting_panel(props: &HandwritingProps) -> Html {
    let t = props.lang.texts();
    let file = use_state(|| None::<File>);
    let preview = use_state(|| None::<String>);
    let status = use_state(|| Status::Idle);

    // Releases each preview URL when it is replaced and on unmount.
    use_effect_with((*preview).clone(), |url| {
        let url = url.clone();
        move || {
            if let Some(url) = url {
                revoke_preview(&url);
            }
        }
    });

    let on_file = {
        let file = file.clone();
        let preview = preview.clone();
        let status = status.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let picked = input.files().and_then(|list| list.get(0));
            let url = picked.as_ref().and_then(|f| {
                web_sys::Url::create_object_url_with_blob(f)
                    .map_err(|e| warn!("could not preview image: {e:?}"))
                    .ok()
            });
            preview.set(url);
            file.set(picked);
            status.set(Status::Idle);
        })
    };

    let on_submit = {
        let file = file.clone();
        let status = status.clone();
        let questions = props.questions.clone();
        let grading = props.grading.clone();
        let lang = props.lang;
        let attempts = props.attempts;
        let on_attempt_used = props.on_attempt_used.clone();
        let on_full_marks = props.on_full_marks.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(file) = (*file).clone() else {
                return;
            };
            if attempts == 0 || *status == Status::Grading {
                return;
            }
            let status = status.clone();
            let questions = questions.clone();
            let grading = grading.clone();
            let on_attempt_used = on_attempt_used.clone();
            let on_full_marks = on_full_marks.clone();
            status.set(Status::Grading);

            spawn_local(async move {
                let total = questions.len();
                let request = match read_file(&file).await.and_then(|bytes| {
                    GradingRequest::from_bytes(&bytes, &file.type_(), questions)
                }) {
                    Ok(r) => r,
                    Err(e) => {
                        error!("could not prepare grading request: {e}");
                        status.set(Status::Failed(e.to_string()));
                        return;
                    }
                };

                on_attempt_used.emit(());
                match evaluate_handwriting(&grading, lang, &request).await {
                    Ok(result) => {
                        info!("handwriting graded: {}/{total} (offline: {})", result.score, result.offline);
                        if result.is_full_marks(total) {
                            on_full_marks.emit(());
                        }
                        status.set(Status::Done(result));
                    }
                    Err(e) => {
                        error!("handwriting grading failed: {e}");
                        status.set(Status::Failed(e.to_string()));
                    }
                }
            });
        })
    };

    let out_of_attempts = props.attempts == 0;
    let busy = *status == Status::Grading;

    let result_view = match &*status {
        Status::Idle => Html::default(),
        Status::Grading => html! { <div class="tiny-note">{t.handwriting_grading}</div> },
        Status::Failed(msg) => html! {
            <div class="feedback incorrect">{format!("{}: {msg}", t.grading_failed)}</div>
        },
        Status::Done(result) => html! {
            <div class="score-banner">
                <div class="score-main">
                    {format!("{}: {}/{}", t.score, result.score, props.questions.len())}
                </div>
                if result.offline {
                    <div class="tiny-note">{t.offline_result}</div>
                }
                { for result.results.iter().map(|r| html! {
                    <div class={classes!("feedback", if r.is_correct { "correct" } else { "incorrect" })}>
                        {format!(
                            "{} {}: {} {} ({} {})",
                            if r.is_correct { "✅" } else { "❌" },
                            r.question,
                            t.student_wrote,
                            format_formula(&r.student_wrote),
                            t.answer_label,
                            format_formula(&r.expected),
                        )}
                        if let Some(note) = &r.feedback {
                            <div class="tiny-note">{note.clone()}</div>
                        }
                    </div>
                }) }
                <div class="tiny-note">{result.overall_feedback.clone()}</div>
            </div>
        },
    };

    html! {
        <div class="card">
            <h2>{t.handwriting_title}</h2>
            <div class="tiny-note">{t.handwriting_hint}</div>
            <div class="tiny-note">{format!("{}: {}", t.attempts_left, props.attempts)}</div>
            if out_of_attempts {
                <div class="feedback incorrect">{t.handwriting_no_attempts}</div>
            } else {
                <div class="answer-row">
                    <label class="field-label">
                        <span>{t.handwriting_upload}</span>
                        <input type="file" accept="image/*" onchange={on_file} disabled={busy} />
                    </label>
                    <button
                        class="btn-primary"
                        onclick={on_submit}
                        disabled={busy || file.is_none()}
                    >
                        {t.handwriting_submit}
                    </button>
                </div>
            }
            if let Some(url) = (*preview).clone() {
                <img class="preview" src={url} alt="" />
            }
            {result_view}
        </div>
    }
}
