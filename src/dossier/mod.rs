//! Detail-view machinery: per-realm theme data, the canvas render loop and
//! the dossier info panel.
//!
//! Each realm module contributes one [`RealmTheme`] describing its particle
//! bands and evolution stages. The loop here is the only animation-frame
//! chain in the app; it is started once and keeps running across view
//! switches, ticking whichever field is mounted.

use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, window};

use crate::field::{BandDesc, Field, Particle, ParticleKind, PointerSnapshot};
use crate::{Realm, artwork_url, performance_now};

mod realm_bulbasaur;
mod realm_charizard;
mod realm_gengar;
mod realm_magneton;
mod realm_mewtwo;
mod realm_pikachu;
mod realm_snorlax;
mod realm_squirtle;
mod realm_wobbuffet;
mod realm_zekrom;

// --- Theme data --------------------------------------------------------------

/// One evolution stage of a family: identity, palette and tuning.
pub struct StageDesc {
    /// National dex id, used for sprite and artwork URLs.
    pub id: u32,
    pub name: &'static str,
    /// Short status line shown above the title.
    pub label: &'static str,
    /// Accent color for particles and panel chrome.
    pub color: &'static str,
    /// Page background behind the canvas.
    pub bg: &'static str,
    /// Multiplier for intensity-scaled bands and effect strength.
    pub intensity: f64,
    pub lore: &'static str,
    pub stats: [(&'static str, &'static str); 2],
}

/// Everything the dossier view needs to render one realm.
pub struct RealmTheme {
    pub realm: Realm,
    pub name: &'static str,
    pub type_line: &'static str,
    pub tagline: &'static str,
    pub bands: &'static [BandDesc],
    /// Stage selected when the realm is first opened.
    pub default_stage: usize,
    pub stages: &'static [StageDesc],
}

static THEMES: [&RealmTheme; 10] = [
    &realm_zekrom::ZEKROM,
    &realm_pikachu::PIKACHU,
    &realm_charizard::CHARIZARD,
    &realm_mewtwo::MEWTWO,
    &realm_squirtle::SQUIRTLE,
    &realm_bulbasaur::BULBASAUR,
    &realm_wobbuffet::WOBBUFFET,
    &realm_gengar::GENGAR,
    &realm_magneton::MAGNETON,
    &realm_snorlax::SNORLAX,
];

/// All registered themes, in registry-grid order.
pub fn themes() -> &'static [&'static RealmTheme] {
    &THEMES
}

pub fn theme_for(realm: Realm) -> &'static RealmTheme {
    THEMES
        .iter()
        .copied()
        .find(|t| t.realm == realm)
        .unwrap_or(THEMES[0])
}

// --- Mounted state -----------------------------------------------------------

struct DossierState {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    theme: &'static RealmTheme,
    stage: usize,
    field: Field,
    pointer: PointerSnapshot,
}

thread_local! {
    static DOSSIER: RefCell<Option<DossierState>> = RefCell::new(None);
    static LOOP_STARTED: Cell<bool> = Cell::new(false);
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

const MAX_STAGE_BUTTONS: usize = 3;

const CARD_STYLE: &str = "position:fixed; right:4vw; top:50%; transform:translateY(-50%); width:min(420px,86vw); padding:24px 28px; background:rgba(2,4,10,0.72); border:1px solid #1f2937; border-radius:12px; backdrop-filter:blur(6px); font-family:'Fira Code', monospace; color:#e5e7eb; z-index:20;";

fn field_seed() -> u64 {
    #[cfg(feature = "rng")]
    {
        let mut buf = [0u8; 8];
        if getrandom::getrandom(&mut buf).is_ok() {
            return u64::from_le_bytes(buf);
        }
    }
    performance_now().to_bits()
}

fn viewport() -> (f64, f64) {
    let win = match window() {
        Some(w) => w,
        None => return (0.0, 0.0),
    };
    let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = win
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

/// Build the dossier panel DOM (once) and wire pointer, resize and stage
/// listeners. Must be called before [`mount`].
pub fn init(doc: &Document) -> Result<(), JsValue> {
    let host = doc
        .get_element_by_id("rd-dossier")
        .ok_or_else(|| JsValue::from_str("no rd-dossier host"))?;

    let card = doc.create_element("div")?;
    card.set_id("rd-card");
    card.set_attribute("style", CARD_STYLE).ok();
    card.set_inner_html(concat!(
        "<div id='rd-label' style='font-size:11px; letter-spacing:3px; color:#9ca3af;'></div>",
        "<h1 id='rd-title' style='margin:6px 0 0; font-size:34px; letter-spacing:2px;'></h1>",
        "<div id='rd-type' style='font-size:12px; letter-spacing:2px; margin-top:2px;'></div>",
        "<div id='rd-tagline' style='font-size:13px; color:#9ca3af; margin-top:8px; font-style:italic;'></div>",
        "<img id='rd-artwork' alt='' style='display:block; width:200px; margin:18px auto 10px; image-rendering:auto; filter:drop-shadow(0 0 18px rgba(255,255,255,0.12));'/>",
        "<div id='rd-stats' style='font-size:12px; letter-spacing:1px; margin-top:10px;'></div>",
        "<p id='rd-lore' style='font-size:13px; line-height:1.6; color:#d1d5db; margin-top:12px;'></p>",
        "<div id='rd-stage-row' style='display:flex; gap:8px; margin-top:16px;'>",
        "<button id='rd-stage-0' type='button'></button>",
        "<button id='rd-stage-1' type='button'></button>",
        "<button id='rd-stage-2' type='button'></button>",
        "</div>",
    ));
    host.append_child(&card)?;

    for i in 0..MAX_STAGE_BUTTONS {
        if let Some(btn) = doc.get_element_by_id(&format!("rd-stage-{i}")) {
            let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
                set_stage(i);
            }) as Box<dyn FnMut(web_sys::MouseEvent)>);
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
    }

    // One pointer snapshot per event; the loop reads it once per frame.
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            let (x, y) = (evt.client_x() as f64, evt.client_y() as f64);
            DOSSIER.with(|cell| {
                if let Some(state) = cell.borrow_mut().as_mut() {
                    state.pointer = PointerSnapshot { x, y };
                }
            });
            if let Some(w) = window() {
                if let Some(doc) = w.document() {
                    let (vw, vh) = viewport();
                    if let Some(card) = doc.get_element_by_id("rd-card") {
                        let ry = (vw / 2.0 - x) / 45.0;
                        let rx = -(vh / 2.0 - y) / 45.0;
                        let style = format!(
                            "{CARD_STYLE} transform:translateY(-50%) perspective(1000px) rotateY({ry:.2}deg) rotateX({rx:.2}deg);"
                        );
                        card.set_attribute("style", &style).ok();
                    }
                }
            }
        }) as Box<dyn FnMut(web_sys::MouseEvent)>);
        doc.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let closure = Closure::wrap(Box::new(move || {
            let (w, h) = viewport();
            DOSSIER.with(|cell| {
                if let Some(state) = cell.borrow_mut().as_mut() {
                    state.canvas.set_width(w as u32);
                    state.canvas.set_height(h as u32);
                    state.field.resize(w, h);
                }
            });
        }) as Box<dyn FnMut()>);
        if let Some(win) = window() {
            win.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        }
        closure.forget();
    }

    if !LOOP_STARTED.with(|started| started.replace(true)) {
        start_dossier_loop();
    }
    Ok(())
}

/// Open one realm's dossier: build its field at the current viewport and
/// fill in the panel.
pub fn mount(realm: Realm) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas: HtmlCanvasElement = doc
        .get_element_by_id("rd-canvas")
        .ok_or_else(|| JsValue::from_str("no rd-canvas"))?
        .dyn_into()?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    let (w, h) = viewport();
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);

    let theme = theme_for(realm);
    let stage = theme.default_stage.min(theme.stages.len().saturating_sub(1));
    let field = Field::new(w, h, theme.bands, theme.stages[stage].intensity, field_seed());

    DOSSIER.with(|cell| {
        *cell.borrow_mut() = Some(DossierState {
            canvas,
            ctx,
            theme,
            stage,
            field,
            pointer: PointerSnapshot::OFFSCREEN,
        });
    });
    apply_stage_dom(&doc, theme, stage);
    Ok(())
}

/// Tear the active dossier down. The loop keeps running but ticks nothing.
pub fn unmount() {
    DOSSIER.with(|cell| {
        if let Some(state) = cell.borrow_mut().take() {
            let (w, h) = (state.canvas.width() as f64, state.canvas.height() as f64);
            state.ctx.clear_rect(0.0, 0.0, w, h);
            state
                .canvas
                .set_attribute("style", "display:none;")
                .ok();
        }
    });
}

/// Switch the mounted realm to stage `index`. Out-of-range indices are
/// ignored, as are clicks while no dossier is mounted.
pub fn set_stage(index: usize) {
    let updated = DOSSIER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let state = borrow.as_mut()?;
        if index >= state.theme.stages.len() || index == state.stage {
            return None;
        }
        state.stage = index;
        let (w, h) = (state.field.width(), state.field.height());
        state.field = Field::new(
            w,
            h,
            state.theme.bands,
            state.theme.stages[index].intensity,
            field_seed(),
        );
        Some((state.theme, index))
    });
    if let Some((theme, stage)) = updated {
        if let Some(doc) = window().and_then(|w| w.document()) {
            apply_stage_dom(&doc, theme, stage);
        }
    }
}

fn set_text(doc: &Document, id: &str, text: &str) {
    if let Some(el) = doc.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

fn apply_stage_dom(doc: &Document, theme: &'static RealmTheme, stage: usize) {
    let desc = &theme.stages[stage];
    set_text(doc, "rd-label", desc.label);
    set_text(doc, "rd-title", desc.name);
    set_text(doc, "rd-tagline", theme.tagline);
    if let Some(el) = doc.get_element_by_id("rd-type") {
        el.set_text_content(Some(theme.type_line));
        el.set_attribute("style", &format!("font-size:12px; letter-spacing:2px; margin-top:2px; color:{};", desc.color))
            .ok();
    }
    if let Some(el) = doc.get_element_by_id("rd-lore") {
        el.set_text_content(Some(desc.lore));
    }
    if let Some(el) = doc.get_element_by_id("rd-stats") {
        let mut html = String::new();
        for (key, value) in &desc.stats {
            html.push_str(&format!(
                "<div style='display:flex; justify-content:space-between; border-bottom:1px solid #1f2937; padding:4px 0;'><span style='color:#9ca3af;'>{key}</span><span style='color:{};'>{value}</span></div>",
                desc.color
            ));
        }
        el.set_inner_html(&html);
    }
    if let Some(el) = doc.get_element_by_id("rd-artwork") {
        el.set_attribute("src", &artwork_url(desc.id)).ok();
    }
    for i in 0..MAX_STAGE_BUTTONS {
        if let Some(btn) = doc.get_element_by_id(&format!("rd-stage-{i}")) {
            if let Some(s) = theme.stages.get(i) {
                btn.set_text_content(Some(s.name));
                let (border, color) = if i == stage {
                    (s.color, s.color)
                } else {
                    ("#374151", "#9ca3af")
                };
                btn.set_attribute(
                    "style",
                    &format!(
                        "flex:1; padding:6px 0; font-family:inherit; font-size:11px; letter-spacing:1px; background:transparent; border:1px solid {border}; color:{color}; border-radius:4px; cursor:pointer;"
                    ),
                )
                .ok();
            } else {
                btn.set_attribute("style", "display:none;").ok();
            }
        }
    }
    // The canvas doubles as the page background for the active stage.
    if let Some(canvas) = doc.get_element_by_id("rd-canvas") {
        canvas
            .set_attribute(
                "style",
                &format!("position:fixed; inset:0; z-index:0; display:block; background:{};", desc.bg),
            )
            .ok();
    }
}

// --- Render loop -------------------------------------------------------------

fn start_dossier_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        DOSSIER.with(|cell| {
            if let Some(state) = cell.borrow_mut().as_mut() {
                dossier_tick(state, ts);
            }
        });
        if let Some(w) = window() {
            if let Some(cb) = f.borrow().as_ref() {
                let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = window() {
        if let Some(cb) = g.borrow().as_ref() {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}

fn dossier_tick(state: &mut DossierState, now: f64) {
    let (w, h) = (state.canvas.width() as f64, state.canvas.height() as f64);
    state.field.step(state.pointer, now);
    state.ctx.clear_rect(0.0, 0.0, w, h);
    draw_field(state, w, h);
}

fn draw_field(state: &DossierState, w: f64, h: f64) {
    let ctx = &state.ctx;
    let desc = &state.theme.stages[state.stage];
    let color = desc.color;
    let intensity = desc.intensity;
    let pointer = state.pointer;

    for (band, slice) in state.field.bands() {
        match band.kind {
            ParticleKind::Mote => {
                ctx.set_fill_style_str(color);
                for p in slice {
                    // Subtle parallax against the pointer, by particle depth.
                    let px = if pointer == PointerSnapshot::OFFSCREEN {
                        (w / 2.0, h / 2.0)
                    } else {
                        (pointer.x, pointer.y)
                    };
                    let rx = p.x + (px.0 - w / 2.0) * p.depth;
                    let ry = p.y + (px.1 - h / 2.0) * p.depth;
                    ctx.set_global_alpha(p.opacity);
                    ctx.begin_path();
                    ctx.arc(rx, ry, p.size, 0.0, TAU).ok();
                    ctx.fill();
                }
            }
            ParticleKind::Ember => {
                ctx.set_fill_style_str(color);
                ctx.set_shadow_color(color);
                ctx.set_shadow_blur(10.0 * intensity);
                for p in slice {
                    ctx.set_global_alpha((p.opacity * p.life).max(0.0));
                    ctx.begin_path();
                    ctx.arc(p.x, p.y, p.size, 0.0, TAU).ok();
                    ctx.fill();
                }
                ctx.set_shadow_blur(0.0);
            }
            ParticleKind::Leaf => {
                ctx.set_fill_style_str(color);
                for p in slice {
                    ctx.set_global_alpha(p.opacity);
                    ctx.save();
                    ctx.translate(p.x, p.y).ok();
                    ctx.rotate(p.rotation).ok();
                    ctx.begin_path();
                    ctx.ellipse(0.0, 0.0, p.size, p.size * 0.45, 0.0, 0.0, TAU)
                        .ok();
                    ctx.fill();
                    ctx.restore();
                }
            }
            ParticleKind::Bubble => {
                ctx.set_stroke_style_str(color);
                ctx.set_line_width(1.0);
                for p in slice {
                    ctx.set_global_alpha(p.opacity);
                    ctx.begin_path();
                    ctx.arc(p.x, p.y, p.size, 0.0, TAU).ok();
                    ctx.stroke();
                }
            }
            ParticleKind::Shard => {
                for p in slice {
                    draw_trail(ctx, p, color);
                    ctx.set_global_alpha(p.opacity);
                    ctx.save();
                    ctx.translate(p.x, p.y).ok();
                    ctx.rotate(p.rotation).ok();
                    draw_polygon(ctx, p.size, p.sides.max(3));
                    ctx.set_fill_style_str(color);
                    ctx.fill();
                    ctx.restore();
                    // Bright core dot.
                    ctx.set_fill_style_str("#ffffff");
                    ctx.begin_path();
                    ctx.arc(p.x, p.y, (p.size * 0.25).max(0.5), 0.0, TAU).ok();
                    ctx.fill();
                }
            }
            ParticleKind::Asteroid => {
                ctx.set_stroke_style_str(color);
                ctx.set_line_width(1.0);
                for p in slice {
                    draw_trail(ctx, p, color);
                    ctx.set_global_alpha(p.opacity);
                    ctx.save();
                    ctx.translate(p.x, p.y).ok();
                    ctx.rotate(p.rotation).ok();
                    draw_polygon(ctx, p.size, 6);
                    ctx.stroke();
                    ctx.restore();
                }
            }
            ParticleKind::Spark => {
                ctx.set_fill_style_str("#ffffff");
                for p in slice {
                    ctx.set_global_alpha((p.opacity * p.life).max(0.0));
                    ctx.fill_rect(p.x, p.y, p.size, p.size);
                }
            }
            ParticleKind::Bolt => {
                ctx.set_stroke_style_str("#ffffff");
                ctx.set_line_width(2.0);
                ctx.set_line_cap("round");
                ctx.set_shadow_color(color);
                ctx.set_shadow_blur(15.0);
                for p in slice {
                    if p.life <= 0.0 || p.history.len() < 2 {
                        continue;
                    }
                    ctx.set_global_alpha(p.life);
                    ctx.begin_path();
                    ctx.move_to(p.history[0].0, p.history[0].1);
                    for &(x, y) in &p.history[1..] {
                        ctx.line_to(x, y);
                    }
                    ctx.stroke();
                }
                ctx.set_shadow_blur(0.0);
            }
            ParticleKind::Filing => {
                ctx.set_fill_style_str(color);
                for p in slice {
                    ctx.set_global_alpha(p.opacity);
                    ctx.save();
                    ctx.translate(p.x, p.y).ok();
                    ctx.rotate(p.rotation).ok();
                    ctx.fill_rect(-p.size / 2.0, -0.75, p.size, 1.5);
                    ctx.restore();
                }
            }
            ParticleKind::Glyph => {
                ctx.set_fill_style_str(color);
                for p in slice {
                    let px = p.size * (1.0 + (1.0 - p.life));
                    ctx.set_font(&format!("{px:.0}px 'Fira Code', monospace"));
                    ctx.set_global_alpha((p.opacity * p.life).max(0.0));
                    ctx.fill_text("Z", p.x, p.y).ok();
                }
            }
        }
    }
    ctx.set_global_alpha(1.0);
}

fn draw_trail(ctx: &CanvasRenderingContext2d, p: &Particle, color: &str) {
    if p.history.len() < 2 {
        return;
    }
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(0.5);
    ctx.set_global_alpha(p.opacity * 0.3);
    ctx.begin_path();
    ctx.move_to(p.history[0].0, p.history[0].1);
    for &(x, y) in &p.history[1..] {
        ctx.line_to(x, y);
    }
    ctx.stroke();
}

fn draw_polygon(ctx: &CanvasRenderingContext2d, radius: f64, sides: u8) {
    ctx.begin_path();
    for i in 0..sides {
        let angle = TAU * i as f64 / sides as f64;
        let (x, y) = (angle.cos() * radius, angle.sin() * radius);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.close_path();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_theme_per_realm_in_registry_order() {
        assert_eq!(themes().len(), Realm::ALL.len());
        for (theme, realm) in themes().iter().zip(Realm::ALL) {
            assert_eq!(theme.realm, realm);
            assert_eq!(theme_for(realm).realm, realm);
        }
    }

    #[test]
    fn stage_data_is_well_formed() {
        let mut ids = std::collections::HashSet::new();
        for theme in themes() {
            assert!(!theme.stages.is_empty(), "{} has no stages", theme.name);
            assert!(
                theme.default_stage < theme.stages.len(),
                "{} default stage out of range",
                theme.name
            );
            assert!(theme.stages.len() <= MAX_STAGE_BUTTONS);
            assert!(!theme.bands.is_empty());
            for stage in theme.stages {
                assert!(ids.insert(stage.id), "duplicate stage id {}", stage.id);
                assert!(stage.color.starts_with('#'));
                assert!(stage.bg.starts_with('#'));
                assert!(stage.intensity > 0.0);
                assert!(!stage.lore.is_empty());
            }
        }
    }

    #[test]
    fn fields_build_and_step_for_every_theme() {
        for theme in themes() {
            let stage = &theme.stages[theme.default_stage];
            let mut field = Field::new(1920.0, 1080.0, theme.bands, stage.intensity, 7);
            assert!(!field.is_empty(), "{} field is empty", theme.name);
            let before = field.len();
            for frame in 0..600 {
                field.step(PointerSnapshot { x: 960.0, y: 540.0 }, frame as f64 * 16.0);
            }
            assert_eq!(field.len(), before);
        }
    }
}
