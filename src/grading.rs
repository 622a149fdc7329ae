//! AI grading of a photographed handwritten answer sheet.
//!
//! The image and the questions go to a serverless function which answers
//! with an [`EvaluationResult`]. What happens when that call fails is decided
//! by [`GradingFailurePolicy`].

use std::sync::OnceLock;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use gloo_net::http::Request;
use log::{debug, info, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::bank::FormulaQuestion;
use crate::config::{GradingConfig, GradingFailurePolicy};
use crate::error::GradingError;
use crate::i18n::Language;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradingRequest {
    /// Bare base64, without a `data:` prefix.
    pub image_base64: String,
    pub mime_type: String,
    pub questions: Vec<FormulaQuestion>,
}

impl GradingRequest {
    /// Accepts either bare base64 or a full data URL.
    pub fn new(
        image: &str,
        mime_type: &str,
        questions: Vec<FormulaQuestion>,
    ) -> Result<Self, GradingError> {
        let image = match image.strip_prefix("data:") {
            Some(rest) => rest
                .split_once(',')
                .map(|(_, data)| data)
                .ok_or(GradingError::InvalidRequest("malformed data URL"))?,
            None => image,
        };
        let image = image.trim();
        if image.is_empty() {
            return Err(GradingError::InvalidRequest("image is empty"));
        }
        if questions.is_empty() {
            return Err(GradingError::InvalidRequest("no questions to grade"));
        }
        let mime_type = match mime_type.trim() {
            "" => "image/jpeg",
            m => m,
        };
        Ok(Self {
            image_base64: image.to_string(),
            mime_type: mime_type.to_string(),
            questions,
        })
    }

    pub fn from_bytes(
        bytes: &[u8],
        mime_type: &str,
        questions: Vec<FormulaQuestion>,
    ) -> Result<Self, GradingError> {
        Self::new(&BASE64.encode(bytes), mime_type, questions)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub expected: String,
    #[serde(default)]
    pub student_wrote: String,
    pub is_correct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub score: f64,
    #[serde(default)]
    pub results: Vec<QuestionResult>,
    #[serde(default)]
    pub overall_feedback: String,
    /// Set when the result was produced locally instead of by the grader.
    #[serde(rename = "_offline", default)]
    pub offline: bool,
}

impl EvaluationResult {
    /// Every question marked correct with the answer key as the student's
    /// writing. Used when grading is unavailable.
    pub fn assume_correct(questions: &[FormulaQuestion], lang: Language) -> Self {
        let t = lang.texts();
        Self {
            score: questions.len() as f64,
            results: questions
                .iter()
                .map(|q| QuestionResult {
                    question: q.prompt_text.clone(),
                    expected: q.expected_formula.clone(),
                    student_wrote: q.expected_formula.clone(),
                    is_correct: true,
                    feedback: Some(t.fallback_feedback.to_string()),
                })
                .collect(),
            overall_feedback: t.fallback_overall.to_string(),
            offline: true,
        }
    }

    /// A real grader result with every question correct.
    pub fn is_full_marks(&self, total: usize) -> bool {
        !self.offline
            && total > 0
            && self.score >= total as f64
            && self
                .results
                .iter()
                .all(|r| r.is_correct && !r.student_wrote.trim().is_empty())
    }

    /// The grading function answers HTTP 200 with an all-correct sheet when
    /// the model output was unusable. Our request does not carry the keys it
    /// echoes, so nothing the student wrote appears in that sheet.
    fn is_unread_sheet(&self) -> bool {
        !self.results.is_empty()
            && self
                .results
                .iter()
                .all(|r| r.is_correct && r.student_wrote.trim().is_empty())
    }

    /// Fills prompts and answer keys the grader left out, by position.
    fn fill_from(&mut self, questions: &[FormulaQuestion]) {
        for (r, q) in self.results.iter_mut().zip(questions) {
            if r.question.trim().is_empty() {
                r.question = q.prompt_text.clone();
            }
            if r.expected.trim().is_empty() {
                r.expected = q.expected_formula.clone();
            }
        }
    }
}

static JSON_OBJECT: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();

fn json_object() -> Result<&'static Regex, GradingError> {
    JSON_OBJECT
        .get_or_init(|| Regex::new(r"(?s)\{.*\}"))
        .as_ref()
        .map_err(|e| GradingError::Decode(e.to_string()))
}

/// Parses the grader's reply. Models sometimes wrap the JSON in prose or code
/// fences, so the outermost `{...}` is tried when the body is not JSON. The
/// score is clamped to `0..=questions.len()` and blank prompts or answer
/// keys are taken from `questions`. The grader's own fallback sheet comes
/// back flagged `offline`.
pub fn decode_evaluation(
    body: &str,
    questions: &[FormulaQuestion],
) -> Result<EvaluationResult, GradingError> {
    let mut result: EvaluationResult = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(direct) => {
            let Some(m) = json_object()?.find(body) else {
                return Err(GradingError::Decode(direct.to_string()));
            };
            debug!("grader reply was not bare JSON, using embedded object");
            serde_json::from_str(m.as_str()).map_err(|e| GradingError::Decode(e.to_string()))?
        }
    };
    if !result.offline && result.is_unread_sheet() {
        warn!("grader returned its fallback sheet, treating as offline");
        result.offline = true;
    }
    result.fill_from(questions);
    result.score = if result.score.is_finite() {
        result.score.clamp(0.0, questions.len() as f64)
    } else {
        0.0
    };
    Ok(result)
}

/// Sends a grading request and returns the raw response body.
#[allow(async_fn_in_trait)]
pub trait GradingTransport {
    async fn post(&self, endpoint: &str, request: &GradingRequest) -> Result<String, GradingError>;
}

/// The browser `fetch` transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransport;

impl GradingTransport for HttpTransport {
    async fn post(&self, endpoint: &str, request: &GradingRequest) -> Result<String, GradingError> {
        let resp = Request::post(endpoint)
            .header("Content-Type", "application/json")
            .json(request)?
            .send()
            .await?;

        if !resp.ok() {
            return Err(GradingError::Status {
                status: resp.status(),
            });
        }
        Ok(resp.text().await?)
    }
}

pub struct Grader<T> {
    transport: T,
    config: GradingConfig,
    lang: Language,
}

impl<T: GradingTransport> Grader<T> {
    pub fn new(transport: T, config: GradingConfig, lang: Language) -> Self {
        Self {
            transport,
            config,
            lang,
        }
    }

    pub async fn grade(&self, request: &GradingRequest) -> Result<EvaluationResult, GradingError> {
        match self.config.on_failure {
            GradingFailurePolicy::AssumeCorrect => match self.attempt(request).await {
                Ok(result) => Ok(result),
                Err(e) => {
                    warn!("grading failed ({e}), assuming the answer key");
                    Ok(EvaluationResult::assume_correct(&request.questions, self.lang))
                }
            },
            GradingFailurePolicy::SurfaceError => self.attempt(request).await,
            GradingFailurePolicy::Retry { max_attempts } => {
                let attempts = max_attempts.max(1);
                let mut n = 1;
                loop {
                    match self.attempt(request).await {
                        Ok(result) => return Ok(result),
                        Err(e) if n >= attempts => {
                            return Err(GradingError::RetriesExhausted {
                                attempts,
                                last: Box::new(e),
                            })
                        }
                        Err(e) => {
                            warn!("grading attempt {n}/{attempts} failed: {e}");
                            n += 1;
                        }
                    }
                }
            }
        }
    }

    async fn attempt(&self, request: &GradingRequest) -> Result<EvaluationResult, GradingError> {
        info!(
            "grading {} questions via {}",
            request.questions.len(),
            self.config.endpoint
        );
        let body = self.transport.post(&self.config.endpoint, request).await?;
        decode_evaluation(&body, &request.questions)
    }
}

/// Grades with the browser transport.
pub async fn evaluate_handwriting(
    config: &GradingConfig,
    lang: Language,
    request: &GradingRequest,
) -> Result<EvaluationResult, GradingError> {
    Grader::new(HttpTransport, config.clone(), lang)
        .grade(request)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    struct FakeTransport {
        replies: RefCell<VecDeque<Result<String, GradingError>>>,
        calls: Cell<u32>,
    }

    impl FakeTransport {
        fn new(replies: Vec<Result<String, GradingError>>) -> Self {
            Self {
                replies: RefCell::new(replies.into()),
                calls: Cell::new(0),
            }
        }
    }

    impl GradingTransport for &FakeTransport {
        async fn post(&self, _endpoint: &str, _request: &GradingRequest) -> Result<String, GradingError> {
            self.calls.set(self.calls.get() + 1);
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or(Err(GradingError::Transport("no more replies".into())))
        }
    }

    fn questions() -> Vec<FormulaQuestion> {
        vec![
            FormulaQuestion {
                prompt_text: "Sodium ion".into(),
                expected_formula: "Na^+".into(),
            },
            FormulaQuestion {
                prompt_text: "Sulfate ion".into(),
                expected_formula: "SO4^2-".into(),
            },
        ]
    }

    fn request() -> GradingRequest {
        GradingRequest::new("aGVsbG8=", "image/png", questions()).unwrap()
    }

    fn config(on_failure: GradingFailurePolicy) -> GradingConfig {
        GradingConfig {
            endpoint: "/grade".into(),
            on_failure,
        }
    }

    const GOOD: &str = r#"{"score":1,"results":[
        {"question":"Sodium ion","expected":"Na^+","studentWrote":"Na+","isCorrect":true},
        {"question":"Sulfate ion","expected":"SO4^2-","studentWrote":"SO4","isCorrect":false,"feedback":"charge missing"}
    ],"overallFeedback":"ok"}"#;

    #[test]
    fn request_strips_data_url() {
        let r = GradingRequest::new("data:image/png;base64,QUJD", "image/png", questions()).unwrap();
        assert_eq!(r.image_base64, "QUJD");
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["imageBase64"], "QUJD");
        assert_eq!(json["mimeType"], "image/png");
        assert_eq!(json["questions"][1]["expectedFormula"], "SO4^2-");
    }

    #[test]
    fn request_validation() {
        assert!(matches!(
            GradingRequest::new("", "image/png", questions()),
            Err(GradingError::InvalidRequest(_))
        ));
        assert!(matches!(
            GradingRequest::new("data:image/png;base64", "image/png", questions()),
            Err(GradingError::InvalidRequest(_))
        ));
        assert!(matches!(
            GradingRequest::new("QUJD", "image/png", Vec::new()),
            Err(GradingError::InvalidRequest(_))
        ));
        let r = GradingRequest::from_bytes(b"ABC", " ", questions()).unwrap();
        assert_eq!(r.image_base64, "QUJD");
        assert_eq!(r.mime_type, "image/jpeg");
    }

    #[test]
    fn decodes_plain_and_wrapped_json() {
        let r = decode_evaluation(GOOD, &questions()).unwrap();
        assert_eq!(r.score, 1.0);
        assert_eq!(r.results[1].feedback.as_deref(), Some("charge missing"));
        assert!(!r.offline);

        let wrapped = format!("Here you go:\n```json\n{GOOD}\n```");
        assert_eq!(decode_evaluation(&wrapped, &questions()).unwrap(), r);
    }

    #[test]
    fn decode_clamps_score_and_rejects_garbage() {
        let r = decode_evaluation(r#"{"score": 9}"#, &questions()).unwrap();
        assert_eq!(r.score, 2.0);
        assert!(r.results.is_empty());
        let r = decode_evaluation(r#"{"score": -3}"#, &questions()).unwrap();
        assert_eq!(r.score, 0.0);
        assert!(matches!(decode_evaluation("no json here", &questions()), Err(GradingError::Decode(_))));
        assert!(matches!(decode_evaluation("{oops}", &questions()), Err(GradingError::Decode(_))));
    }

    #[test]
    fn assume_correct_on_failure() {
        let fake = FakeTransport::new(vec![Err(GradingError::Status { status: 502 })]);
        let grader = Grader::new(&fake, config(GradingFailurePolicy::AssumeCorrect), Language::En);
        let r = tokio_test::block_on(grader.grade(&request())).unwrap();
        assert!(r.offline);
        assert_eq!(r.score, 2.0);
        assert!(r.results.iter().all(|q| q.is_correct && q.student_wrote == q.expected));
        assert!(!r.is_full_marks(2));
        assert_eq!(fake.calls.get(), 1);
    }

    #[test]
    fn surface_error_passes_failure_through() {
        let fake = FakeTransport::new(vec![Ok("garbage".into())]);
        let grader = Grader::new(&fake, config(GradingFailurePolicy::SurfaceError), Language::Zh);
        let err = tokio_test::block_on(grader.grade(&request())).unwrap_err();
        assert!(matches!(err, GradingError::Decode(_)));
    }

    #[test]
    fn retry_until_success() {
        let fake = FakeTransport::new(vec![
            Err(GradingError::Transport("reset".into())),
            Ok(GOOD.into()),
        ]);
        let grader = Grader::new(&fake, config(GradingFailurePolicy::Retry { max_attempts: 3 }), Language::En);
        let r = tokio_test::block_on(grader.grade(&request())).unwrap();
        assert_eq!(r.score, 1.0);
        assert_eq!(fake.calls.get(), 2);
    }

    #[test]
    fn retry_gives_up() {
        let fake = FakeTransport::new(vec![]);
        let grader = Grader::new(&fake, config(GradingFailurePolicy::Retry { max_attempts: 2 }), Language::En);
        let err = tokio_test::block_on(grader.grade(&request())).unwrap_err();
        assert!(matches!(err, GradingError::RetriesExhausted { attempts: 2, .. }));
        assert_eq!(fake.calls.get(), 2);
    }

    #[test]
    fn full_marks_needs_every_answer() {
        let mut r = decode_evaluation(GOOD, &questions()).unwrap();
        assert!(!r.is_full_marks(2));
        r.score = 2.0;
        r.results[1].is_correct = true;
        assert!(r.is_full_marks(2));
        assert!(!r.is_full_marks(0));
    }

    #[test]
    fn grader_fallback_sheet_is_offline() {
        let body = r#"{"score":2,"results":[
            {"question":"Question 1","expected":"","studentWrote":"","isCorrect":true,"feedback":"無法識別手寫內容，已視為正確。"},
            {"question":"Question 2","expected":"","studentWrote":"","isCorrect":true,"feedback":"無法識別手寫內容，已視為正確。"}
        ],"overallFeedback":"系統無法分析圖片，請確保圖片清晰。"}"#;
        let r = decode_evaluation(body, &questions()).unwrap();
        assert!(r.offline);
        assert!(!r.is_full_marks(2));
        assert_eq!(r.results[1].expected, "SO4^2-");

        let fake = FakeTransport::new(vec![Ok(body.into())]);
        let grader = Grader::new(&fake, config(GradingFailurePolicy::SurfaceError), Language::Zh);
        let r = tokio_test::block_on(grader.grade(&request())).unwrap();
        assert!(!r.is_full_marks(2));
    }

    #[test]
    fn real_full_marks_stay_online() {
        let body = r#"{"score":2,"results":[
            {"question":"Sodium ion","expected":"Na^+","studentWrote":"Na+","isCorrect":true},
            {"question":"Sulfate ion","expected":"SO4^2-","studentWrote":"SO4 2-","isCorrect":true}
        ],"overallFeedback":"great"}"#;
        let r = decode_evaluation(body, &questions()).unwrap();
        assert!(!r.offline);
        assert!(r.is_full_marks(2));
    }

    #[test]
    fn missing_prompt_and_key_come_from_request() {
        let body = r#"{"score":1,"results":[
            {"question":"Na","studentWrote":"Na+","isCorrect":true},
            {"expected":"SO4^2-","studentWrote":"SO4","isCorrect":false}
        ],"overallFeedback":"ok"}"#;
        let r = decode_evaluation(body, &questions()).unwrap();
        assert!(!r.offline);
        assert_eq!(r.score, 1.0);
        assert_eq!(r.results[0].question, "Na");
        assert_eq!(r.results[0].expected, "Na^+");
        assert_eq!(r.results[1].question, "Sulfate ion");
        assert!(!r.results[1].is_correct);
    }
}
