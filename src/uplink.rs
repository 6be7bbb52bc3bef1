//! Neural uplink console: a floating command bar that sends one request per
//! command to the generative-language endpoint and prints the reply.
//!
//! The session rules (at most one request in flight, blank commands
//! rejected, stale completions dropped, one fixed error line) live in
//! [`CommandSession`], which is pure and tested natively. The fetch and
//! speech-capture glue below only drives it.

use std::cell::RefCell;

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, HtmlInputElement, Request, RequestInit, RequestMode, Response, window};

use crate::shell;

/// The one and only line shown when a request fails, whatever the cause.
pub const LINK_ERROR: &str = "ERROR: NEURAL LINK INTERRUPTED.";

const MODEL: &str = "gemini-3-flash-preview";
/// Window global the host page sets before loading the module.
const API_KEY_GLOBAL: &str = "REALMDEX_API_KEY";

// --- Session state machine ---------------------------------------------------

/// Request lifecycle. Microphone capture is tracked separately (see
/// [`CommandSession::is_listening`]) because the mic can be toggled while a
/// request is in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// A request is in flight; further submits are rejected.
    Awaiting,
}

/// Uplink console state. Completions carry the token handed out by
/// [`CommandSession::begin_submit`] so a reply from an abandoned request
/// can never overwrite a newer one.
#[derive(Debug)]
pub struct CommandSession {
    input: String,
    listening: bool,
    phase: Phase,
    response: Option<String>,
    next_token: u32,
    pending: Option<u32>,
}

impl CommandSession {
    pub fn new() -> CommandSession {
        CommandSession {
            input: String::new(),
            listening: false,
            phase: Phase::Idle,
            response: None,
            next_token: 0,
            pending: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn response(&self) -> Option<&str> {
        self.response.as_deref()
    }

    /// Transcript buffer fed by speech capture.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: &str) {
        self.input.clear();
        self.input.push_str(text);
    }

    /// Accept a command for dispatch. Returns the completion token, or
    /// `None` when the command is blank or a request is already in flight.
    /// A live capture ends; the caller is expected to stop the recognizer.
    pub fn begin_submit(&mut self, command: &str) -> Option<u32> {
        if command.trim().is_empty() || self.phase == Phase::Awaiting {
            return None;
        }
        let token = self.next_token;
        self.next_token = self.next_token.wrapping_add(1);
        self.pending = Some(token);
        self.phase = Phase::Awaiting;
        self.response = None;
        self.listening = false;
        self.input.clear();
        Some(token)
    }

    /// Record the outcome of the request identified by `token`. Stale
    /// tokens are dropped silently. Failures all collapse to the fixed
    /// [`LINK_ERROR`] line.
    pub fn complete(&mut self, token: u32, outcome: Result<String, String>) {
        if self.pending != Some(token) {
            return;
        }
        self.pending = None;
        self.phase = Phase::Idle;
        self.response = Some(match outcome {
            Ok(text) => text,
            Err(_) => LINK_ERROR.to_string(),
        });
    }

    /// Start microphone capture, dropping any previous input and response.
    /// No-op if capture is already running.
    pub fn begin_capture(&mut self) -> bool {
        if self.listening {
            return false;
        }
        self.listening = true;
        self.input.clear();
        self.response = None;
        true
    }

    /// Stop microphone capture if it is running.
    pub fn end_capture(&mut self) {
        self.listening = false;
    }
}

impl Default for CommandSession {
    fn default() -> Self {
        CommandSession::new()
    }
}

// --- Wire format -------------------------------------------------------------

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Terminal persona prompt; the specimen name comes from the open dossier.
pub fn build_prompt(specimen: &str, command: &str) -> String {
    format!(
        "You are a high-tech terminal AI analyzing a Pokemon specimen designated {specimen}. \
         Respond to the operator command in at most three short lines of terminal output, \
         all caps, no markdown. Command: {command}"
    )
}

pub fn build_request_body(prompt: &str) -> String {
    let req = GenerateRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: prompt.to_string(),
            }],
        }],
    };
    // Serialization of a struct of strings cannot fail.
    serde_json::to_string(&req).unwrap_or_default()
}

/// Pull the first candidate's first text part out of a response body.
pub fn parse_response_text(body: &str) -> Option<String> {
    let parsed: GenerateResponse = serde_json::from_str(body).ok()?;
    parsed
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .map(|p| p.text)
        .next()
        .filter(|t| !t.is_empty())
}

/// Fold newly finalized transcript text into the buffer. Returns the new
/// buffer and the line to display (buffer plus any interim text).
fn merge_transcripts(buffer: &str, finals: &str, interim: &str) -> (String, String) {
    let merged = format!("{buffer}{finals}");
    let display = format!("{merged}{interim}");
    (merged, display)
}

// --- Browser glue ------------------------------------------------------------

thread_local! {
    static SESSION: RefCell<CommandSession> = RefCell::new(CommandSession::new());
    static RECOGNITION: RefCell<Option<web_sys::SpeechRecognition>> = RefCell::new(None);
}

const BAR_STYLE: &str = "position:fixed; bottom:20px; left:50%; transform:translateX(-50%); width:min(640px,90vw); z-index:30; font-family:'Fira Code', monospace;";

/// Build the command bar DOM and wire its listeners. Called once at startup.
pub fn init(doc: &Document) -> Result<(), JsValue> {
    let bar = doc.create_element("div")?;
    bar.set_id("rd-uplink");
    bar.set_attribute("style", BAR_STYLE).ok();
    bar.set_inner_html(concat!(
        "<div id='rd-uplink-output' style='min-height:18px; font-size:12px; letter-spacing:1px; color:#34d399; white-space:pre-wrap; margin-bottom:8px;'></div>",
        "<div style='display:flex; gap:8px;'>",
        "<input id='rd-uplink-input' type='text' autocomplete='off' spellcheck='false' placeholder='ENTER COMMAND...' style='flex:1; background:rgba(2,4,10,0.8); border:1px solid #1f2937; border-radius:4px; color:#e5e7eb; font-family:inherit; font-size:12px; letter-spacing:1px; padding:10px 12px; outline:none;'/>",
        "<button id='rd-uplink-mic' type='button' style='background:transparent; border:1px solid #374151; border-radius:4px; color:#9ca3af; font-family:inherit; font-size:12px; padding:0 14px; cursor:pointer;'>MIC</button>",
        "<button id='rd-uplink-send' type='button' style='background:#111827; border:1px solid #374151; border-radius:4px; color:#e5e7eb; font-family:inherit; font-size:12px; letter-spacing:1px; padding:0 18px; cursor:pointer;'>SEND</button>",
        "</div>",
    ));
    doc.body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .append_child(&bar)?;

    if let Some(btn) = doc.get_element_by_id("rd-uplink-send") {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            submit();
        }) as Box<dyn FnMut(web_sys::MouseEvent)>);
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    if let Some(input) = doc.get_element_by_id("rd-uplink-input") {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            if evt.key() == "Enter" {
                submit();
            }
        }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);
        input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    if let Some(btn) = doc.get_element_by_id("rd-uplink-mic") {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            toggle_capture();
        }) as Box<dyn FnMut(web_sys::MouseEvent)>);
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

fn input_element(doc: &Document) -> Option<HtmlInputElement> {
    doc.get_element_by_id("rd-uplink-input")?
        .dyn_into::<HtmlInputElement>()
        .ok()
}

fn set_output(text: &str) {
    if let Some(doc) = window().and_then(|w| w.document()) {
        if let Some(el) = doc.get_element_by_id("rd-uplink-output") {
            el.set_text_content(Some(text));
        }
    }
}

fn submit() {
    let Some(doc) = window().and_then(|w| w.document()) else {
        return;
    };
    let Some(input) = input_element(&doc) else {
        return;
    };
    let command = input.value();
    let token = SESSION.with(|cell| cell.borrow_mut().begin_submit(&command));
    let Some(token) = token else {
        return;
    };
    // An accepted command ends any live capture before the request goes out.
    stop_capture();
    input.set_value("");
    set_output("ANALYZING...");

    let specimen = shell::active_realm()
        .map(|r| r.key().to_uppercase())
        .unwrap_or_else(|| "UNKNOWN".to_string());
    let prompt = build_prompt(&specimen, command.trim());
    spawn_local(async move {
        let outcome = dispatch(&prompt).await;
        SESSION.with(|cell| cell.borrow_mut().complete(token, outcome));
        let line = SESSION.with(|cell| cell.borrow().response().map(str::to_string));
        if let Some(line) = line {
            set_output(&line);
        }
    });
}

fn api_key() -> Option<String> {
    let win = window()?;
    js_sys::Reflect::get(&win, &JsValue::from_str(API_KEY_GLOBAL))
        .ok()?
        .as_string()
        .filter(|k| !k.is_empty())
}

/// Single outbound call. Any failure, from a missing key to a bad status
/// to an unreadable body, surfaces as `Err` so the caller can show the
/// fixed error line. No retries.
async fn dispatch(prompt: &str) -> Result<String, String> {
    let key = api_key().ok_or_else(|| "missing api key".to_string())?;
    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{MODEL}:generateContent?key={key}"
    );
    let body = build_request_body(prompt);

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_mode(RequestMode::Cors);
    init.set_body(&JsValue::from_str(&body));
    let request =
        Request::new_with_str_and_init(&url, &init).map_err(|_| "bad request".to_string())?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|_| "bad headers".to_string())?;

    let win = window().ok_or_else(|| "no window".to_string())?;
    let resp_value = JsFuture::from(win.fetch_with_request(&request))
        .await
        .map_err(|_| "network failure".to_string())?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "not a response".to_string())?;
    if !resp.ok() {
        return Err(format!("status {}", resp.status()));
    }
    let text_promise = resp.text().map_err(|_| "unreadable body".to_string())?;
    let text_value = JsFuture::from(text_promise)
        .await
        .map_err(|_| "unreadable body".to_string())?;
    let body = text_value
        .as_string()
        .ok_or_else(|| "unreadable body".to_string())?;
    parse_response_text(&body).ok_or_else(|| "empty candidates".to_string())
}

// --- Speech capture ----------------------------------------------------------

fn toggle_capture() {
    let listening = SESSION.with(|cell| cell.borrow().is_listening());
    if listening {
        stop_capture();
    } else {
        start_capture();
    }
}

fn start_capture() {
    if !SESSION.with(|cell| cell.borrow_mut().begin_capture()) {
        return;
    }
    let recognition = match web_sys::SpeechRecognition::new() {
        Ok(r) => r,
        Err(_) => {
            web_sys::console::warn_1(&JsValue::from_str("speech recognition unavailable"));
            SESSION.with(|cell| cell.borrow_mut().end_capture());
            return;
        }
    };
    recognition.set_continuous(true);
    recognition.set_interim_results(true);

    let onresult = Closure::wrap(Box::new(move |evt: web_sys::SpeechRecognitionEvent| {
        let Some(results) = evt.results() else {
            return;
        };
        // Finalized transcripts accumulate; interim ones only display.
        let mut finals = String::new();
        let mut interim = String::new();
        for i in evt.result_index()..results.length() {
            if let Some(result) = results.get(i) {
                if let Some(alt) = result.get(0) {
                    if result.is_final() {
                        finals.push_str(&alt.transcript());
                    } else {
                        interim.push_str(&alt.transcript());
                    }
                }
            }
        }
        let display = SESSION.with(|cell| {
            let mut session = cell.borrow_mut();
            let (merged, display) = merge_transcripts(session.input(), &finals, &interim);
            session.set_input(&merged);
            display
        });
        if let Some(doc) = window().and_then(|w| w.document()) {
            if let Some(input) = input_element(&doc) {
                input.set_value(&display);
            }
        }
    }) as Box<dyn FnMut(web_sys::SpeechRecognitionEvent)>);
    recognition.set_onresult(Some(onresult.as_ref().unchecked_ref()));
    onresult.forget();

    let onerror = Closure::wrap(Box::new(move |evt: web_sys::SpeechRecognitionError| {
        let detail = evt.message().unwrap_or_else(|| "unknown".to_string());
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "speech capture error: {detail}"
        )));
        stop_capture();
    }) as Box<dyn FnMut(web_sys::SpeechRecognitionError)>);
    recognition.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    let onend = Closure::wrap(Box::new(move || {
        SESSION.with(|cell| cell.borrow_mut().end_capture());
        RECOGNITION.with(|cell| cell.borrow_mut().take());
        set_mic_style(false);
    }) as Box<dyn FnMut()>);
    recognition.set_onend(Some(onend.as_ref().unchecked_ref()));
    onend.forget();

    if recognition.start().is_err() {
        SESSION.with(|cell| cell.borrow_mut().end_capture());
        return;
    }
    RECOGNITION.with(|cell| *cell.borrow_mut() = Some(recognition));
    if let Some(doc) = window().and_then(|w| w.document()) {
        if let Some(input) = input_element(&doc) {
            input.set_value("");
        }
    }
    set_output("");
    set_mic_style(true);
}

fn stop_capture() {
    RECOGNITION.with(|cell| {
        if let Some(recognition) = cell.borrow_mut().take() {
            recognition.stop();
        }
    });
    SESSION.with(|cell| cell.borrow_mut().end_capture());
    set_mic_style(false);
}

fn set_mic_style(active: bool) {
    if let Some(doc) = window().and_then(|w| w.document()) {
        if let Some(btn) = doc.get_element_by_id("rd-uplink-mic") {
            let (border, color) = if active {
                ("#f87171", "#f87171")
            } else {
                ("#374151", "#9ca3af")
            };
            btn.set_attribute(
                "style",
                &format!(
                    "background:transparent; border:1px solid {border}; border-radius:4px; color:{color}; font-family:inherit; font-size:12px; padding:0 14px; cursor:pointer;"
                ),
            )
            .ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_commands_are_rejected() {
        let mut s = CommandSession::new();
        assert_eq!(s.begin_submit(""), None);
        assert_eq!(s.begin_submit("   \t  "), None);
        assert_eq!(s.phase(), Phase::Idle);
    }

    #[test]
    fn only_one_request_may_be_in_flight() {
        let mut s = CommandSession::new();
        let token = s.begin_submit("scan");
        assert!(token.is_some());
        assert_eq!(s.phase(), Phase::Awaiting);
        assert_eq!(s.begin_submit("scan again"), None);
        s.complete(token.unwrap(), Ok("SCAN COMPLETE".to_string()));
        assert!(s.begin_submit("scan again").is_some());
    }

    #[test]
    fn awaiting_clears_the_previous_response() {
        let mut s = CommandSession::new();
        let t = s.begin_submit("scan").unwrap();
        s.complete(t, Ok("SCAN COMPLETE".to_string()));
        assert_eq!(s.response(), Some("SCAN COMPLETE"));
        s.begin_submit("run diagnostics").unwrap();
        assert_eq!(s.response(), None);
    }

    #[test]
    fn stale_completions_are_dropped() {
        let mut s = CommandSession::new();
        let stale = s.begin_submit("first").unwrap();
        s.complete(stale, Err("timeout".to_string()));
        let fresh = s.begin_submit("second").unwrap();
        s.complete(stale, Ok("LATE REPLY".to_string()));
        assert_eq!(s.phase(), Phase::Awaiting);
        assert_eq!(s.response(), None);
        s.complete(fresh, Ok("ON TIME".to_string()));
        assert_eq!(s.response(), Some("ON TIME"));
    }

    #[test]
    fn every_failure_shows_the_fixed_error_line() {
        for reason in ["network failure", "status 500", "empty candidates"] {
            let mut s = CommandSession::new();
            let t = s.begin_submit("scan").unwrap();
            s.complete(t, Err(reason.to_string()));
            assert_eq!(s.response(), Some(LINK_ERROR));
            assert_eq!(s.phase(), Phase::Idle);
        }
    }

    #[test]
    fn starting_a_capture_clears_input_and_response() {
        let mut s = CommandSession::new();
        let t = s.begin_submit("scan").unwrap();
        s.complete(t, Ok("SCAN COMPLETE".to_string()));
        s.set_input("stale transcript");
        assert!(s.begin_capture());
        assert_eq!(s.input(), "");
        assert_eq!(s.response(), None);
        assert!(!s.begin_capture());
        s.end_capture();
        assert!(!s.is_listening());
    }

    #[test]
    fn submitting_while_listening_ends_the_capture() {
        let mut s = CommandSession::new();
        assert!(s.begin_capture());
        s.set_input("scan the specimen");
        let t = s.begin_submit("scan the specimen").unwrap();
        assert!(!s.is_listening());
        assert_eq!(s.input(), "");
        assert_eq!(s.phase(), Phase::Awaiting);
        s.complete(t, Ok("OK".to_string()));
        assert_eq!(s.phase(), Phase::Idle);
    }

    #[test]
    fn capture_toggles_independently_of_a_request_in_flight() {
        let mut s = CommandSession::new();
        let _t = s.begin_submit("scan").unwrap();
        assert!(s.begin_capture());
        assert!(s.is_listening());
        assert_eq!(s.phase(), Phase::Awaiting);
        s.end_capture();
        assert!(!s.is_listening());
        assert_eq!(s.phase(), Phase::Awaiting);
    }

    #[test]
    fn final_transcripts_accumulate_interim_ones_do_not() {
        let (buf, display) = merge_transcripts("", "open ", "the");
        assert_eq!(buf, "open ");
        assert_eq!(display, "open the");
        let (buf, display) = merge_transcripts(&buf, "the registry", "");
        assert_eq!(buf, "open the registry");
        assert_eq!(display, "open the registry");
        // Interim text from the previous event never persisted.
        assert!(!buf.contains("thethe"));
    }

    #[test]
    fn request_body_matches_the_wire_shape() {
        let body = build_request_body("HELLO");
        let v: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(v["contents"][0]["parts"][0]["text"], "HELLO");
    }

    #[test]
    fn prompt_names_the_specimen_and_command() {
        let p = build_prompt("ZEKROM", "run diagnostics");
        assert!(p.contains("ZEKROM"));
        assert!(p.contains("run diagnostics"));
    }

    #[test]
    fn response_text_extraction() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"UNIT NOMINAL"}]}}]}"#;
        assert_eq!(parse_response_text(body), Some("UNIT NOMINAL".to_string()));
        assert_eq!(parse_response_text(r#"{"candidates":[]}"#), None);
        assert_eq!(parse_response_text("not json"), None);
    }
}
