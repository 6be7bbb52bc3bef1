//! Top-level view shell: the registry grid, the detail view container and
//! the switch between them.
//!
//! The shell itself is a small pure state machine so the switching rules can
//! be tested natively; the DOM glue below drives it from click handlers.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, window};

use crate::{Realm, dossier, sprite_url, uplink};

/// Which of the two page-level views is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewState {
    Registry,
    Detail,
}

/// Pure view-switching state. Selecting a realm from the registry (or from
/// a future deep link) always lands in the detail view; going back always
/// clears the active realm.
#[derive(Clone, Copy, Debug)]
pub struct Shell {
    view: ViewState,
    active: Option<Realm>,
}

impl Shell {
    pub fn new() -> Shell {
        Shell {
            view: ViewState::Registry,
            active: None,
        }
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn active(&self) -> Option<Realm> {
        self.active
    }

    pub fn select_realm(&mut self, realm: Realm) {
        self.view = ViewState::Detail;
        self.active = Some(realm);
    }

    pub fn back_to_registry(&mut self) {
        self.view = ViewState::Registry;
        self.active = None;
    }
}

impl Default for Shell {
    fn default() -> Self {
        Shell::new()
    }
}

thread_local! {
    static SHELL: RefCell<Shell> = RefCell::new(Shell::new());
}

/// Realm currently open in the detail view, if any. The uplink reads this
/// to address its prompt.
pub fn active_realm() -> Option<Realm> {
    SHELL.with(|cell| cell.borrow().active())
}

const REGISTRY_STYLE: &str = "position:fixed; inset:0; overflow-y:auto; z-index:10; padding:48px 6vw; display:grid; grid-template-columns:repeat(auto-fill,minmax(220px,1fr)); gap:18px; align-content:start; background:#030305; font-family:'Fira Code', monospace;";
const DOSSIER_STYLE: &str = "position:fixed; inset:0; z-index:10;";

/// Build the page skeleton and show the registry. Called once at startup.
pub fn start_shell() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = doc
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;
    body.set_attribute(
        "style",
        "margin:0; background:#030305; color:#e5e7eb; overflow:hidden;",
    )
    .ok();

    // Particle canvas sits behind everything; the dossier view owns it.
    let canvas = doc.create_element("canvas")?;
    canvas.set_id("rd-canvas");
    canvas.set_attribute("style", "display:none;").ok();
    body.append_child(&canvas)?;

    let status = doc.create_element("div")?;
    status.set_id("rd-status");
    status.set_attribute("style", "position:fixed; top:14px; left:16px; z-index:40; font-family:'Fira Code', monospace; font-size:11px; letter-spacing:2px; color:#6b7280;").ok();
    status.set_text_content(Some("REALM_LINK: NONE // STATUS: STANDBY"));
    body.append_child(&status)?;

    build_registry(&doc)?;

    let dossier_host = doc.create_element("div")?;
    dossier_host.set_id("rd-dossier");
    dossier_host.set_attribute("style", "display:none;").ok();
    body.append_child(&dossier_host)?;

    let back = doc.create_element("button")?;
    back.set_id("rd-back");
    back.set_attribute("type", "button").ok();
    back.set_attribute("style", "position:fixed; top:36px; left:16px; z-index:40; display:none; font-family:'Fira Code', monospace; font-size:11px; letter-spacing:2px; background:transparent; border:1px solid #374151; color:#9ca3af; padding:6px 14px; border-radius:4px; cursor:pointer;").ok();
    back.set_text_content(Some("< UNIT REGISTRY"));
    body.append_child(&back)?;
    {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            close_realm();
        }) as Box<dyn FnMut(web_sys::MouseEvent)>);
        back.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    dossier::init(&doc)?;
    uplink::init(&doc)?;
    show_registry(&doc);
    Ok(())
}

fn build_registry(doc: &Document) -> Result<(), JsValue> {
    let grid = doc.create_element("div")?;
    grid.set_id("rd-registry");
    grid.set_attribute("style", REGISTRY_STYLE).ok();

    for theme in dossier::themes() {
        let stage = &theme.stages[theme.default_stage];
        let card = doc.create_element("div")?;
        card.set_attribute(
            "style",
            &format!(
                "border:1px solid #1f2937; border-left:3px solid {}; border-radius:8px; padding:16px; background:rgba(8,10,16,0.85); cursor:pointer;",
                stage.color
            ),
        )
        .ok();
        card.set_inner_html(&format!(
            concat!(
                "<img src='{sprite}' alt='' style='width:64px; height:64px; image-rendering:pixelated;'/>",
                "<div style='font-size:16px; letter-spacing:2px; margin-top:8px;'>{name}</div>",
                "<div style='font-size:10px; letter-spacing:2px; color:{color}; margin-top:2px;'>{type_line}</div>",
                "<div style='font-size:11px; color:#6b7280; margin-top:6px; font-style:italic;'>{tagline}</div>",
            ),
            sprite = sprite_url(stage.id),
            name = theme.name,
            color = stage.color,
            type_line = theme.type_line,
            tagline = theme.tagline,
        ));
        grid.append_child(&card)?;

        let realm = theme.realm;
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            open_realm(realm);
        }) as Box<dyn FnMut(web_sys::MouseEvent)>);
        card.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    doc.body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .append_child(&grid)?;
    Ok(())
}

/// Switch to the detail view for `realm`.
pub fn open_realm(realm: Realm) {
    SHELL.with(|cell| cell.borrow_mut().select_realm(realm));
    let Some(doc) = window().and_then(|w| w.document()) else {
        return;
    };
    if dossier::mount(realm).is_err() {
        SHELL.with(|cell| cell.borrow_mut().back_to_registry());
        return;
    }
    set_display(&doc, "rd-registry", None);
    set_display(&doc, "rd-dossier", Some(DOSSIER_STYLE));
    show_back(&doc, true);
    let theme = dossier::theme_for(realm);
    set_status(&doc, &format!("REALM_LINK: {} // STATUS: ACTIVE", theme.name));
}

/// Return to the registry grid.
pub fn close_realm() {
    SHELL.with(|cell| cell.borrow_mut().back_to_registry());
    dossier::unmount();
    let Some(doc) = window().and_then(|w| w.document()) else {
        return;
    };
    show_registry(&doc);
}

fn show_registry(doc: &Document) {
    set_display(doc, "rd-registry", Some(REGISTRY_STYLE));
    set_display(doc, "rd-dossier", None);
    show_back(doc, false);
    set_status(doc, "REALM_LINK: NONE // STATUS: STANDBY");
}

fn set_display(doc: &Document, id: &str, style: Option<&str>) {
    if let Some(el) = doc.get_element_by_id(id) {
        el.set_attribute("style", style.unwrap_or("display:none;")).ok();
    }
}

fn show_back(doc: &Document, visible: bool) {
    if let Some(el) = doc.get_element_by_id("rd-back") {
        let base = "position:fixed; top:36px; left:16px; z-index:40; font-family:'Fira Code', monospace; font-size:11px; letter-spacing:2px; background:transparent; border:1px solid #374151; color:#9ca3af; padding:6px 14px; border-radius:4px; cursor:pointer;";
        let style = if visible {
            base.to_string()
        } else {
            format!("display:none; {base}")
        };
        el.set_attribute("style", &style).ok();
    }
}

fn set_status(doc: &Document, text: &str) {
    if let Some(el) = doc.get_element_by_id("rd-status") {
        el.set_text_content(Some(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_the_registry_with_no_active_realm() {
        let shell = Shell::new();
        assert_eq!(shell.view(), ViewState::Registry);
        assert_eq!(shell.active(), None);
    }

    #[test]
    fn selecting_a_realm_enters_the_detail_view() {
        let mut shell = Shell::new();
        shell.select_realm(Realm::Charizard);
        assert_eq!(shell.view(), ViewState::Detail);
        assert_eq!(shell.active(), Some(Realm::Charizard));
    }

    #[test]
    fn selecting_again_replaces_the_active_realm() {
        let mut shell = Shell::new();
        shell.select_realm(Realm::Zekrom);
        shell.select_realm(Realm::Snorlax);
        assert_eq!(shell.active(), Some(Realm::Snorlax));
        assert_eq!(shell.view(), ViewState::Detail);
    }

    #[test]
    fn back_clears_the_active_realm_and_is_idempotent() {
        let mut shell = Shell::new();
        shell.select_realm(Realm::Gengar);
        shell.back_to_registry();
        assert_eq!(shell.view(), ViewState::Registry);
        assert_eq!(shell.active(), None);
        shell.back_to_registry();
        assert_eq!(shell.view(), ViewState::Registry);
        assert_eq!(shell.active(), None);
    }
}
