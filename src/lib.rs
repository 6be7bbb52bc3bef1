//! Realmdex core crate.
//!
//! A single-page "creature dossier" showcase: a registry grid of creature
//! families and per-family detail views, each backed by a themed canvas
//! particle field and a floating neural-uplink console. The particle core
//! (`field`) and the state machines (`shell`, `uplink`) are pure Rust and
//! tested natively; the DOM/canvas glue lives in `dossier` and `shell`.

use wasm_bindgen::prelude::*;

pub mod dossier;
pub mod field;
pub mod shell;
pub mod uplink;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Creature family registry
// -----------------------------------------------------------------------------

/// One creature family. Selection only changes which family is active;
/// per-stage data lives in the family's theme module under `dossier`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Realm {
    Zekrom,
    Pikachu,
    Charizard,
    Mewtwo,
    Squirtle,
    Bulbasaur,
    Wobbuffet,
    Gengar,
    Magneton,
    Snorlax,
}

impl Realm {
    pub const ALL: [Realm; 10] = [
        Realm::Zekrom,
        Realm::Pikachu,
        Realm::Charizard,
        Realm::Mewtwo,
        Realm::Squirtle,
        Realm::Bulbasaur,
        Realm::Wobbuffet,
        Realm::Gengar,
        Realm::Magneton,
        Realm::Snorlax,
    ];

    /// Stable lowercase identifier, used in uplink prompts and DOM ids.
    pub fn key(self) -> &'static str {
        match self {
            Realm::Zekrom => "zekrom",
            Realm::Pikachu => "pikachu",
            Realm::Charizard => "charizard",
            Realm::Mewtwo => "mewtwo",
            Realm::Squirtle => "squirtle",
            Realm::Bulbasaur => "bulbasaur",
            Realm::Wobbuffet => "wobbuffet",
            Realm::Gengar => "gengar",
            Realm::Magneton => "magneton",
            Realm::Snorlax => "snorlax",
        }
    }
}

/// Small thumbnail sprite for a stage id.
pub fn sprite_url(id: u32) -> String {
    format!("https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{id}.png")
}

/// Full official artwork for a stage id.
pub fn artwork_url(id: u32) -> String {
    format!(
        "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/{id}.png"
    )
}

// -----------------------------------------------------------------------------
// Unified entrypoint
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_app() -> Result<(), JsValue> {
    shell::start_shell()
}

// Internal helper, used to seed particle fields.
pub(crate) fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn realm_keys_are_unique_and_lowercase() {
        let mut seen = std::collections::HashSet::new();
        for realm in Realm::ALL {
            let key = realm.key();
            assert!(seen.insert(key), "duplicate realm key '{key}'");
            assert!(key.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn url_templates_embed_the_id() {
        assert!(sprite_url(644).ends_with("/pokemon/644.png"));
        assert!(artwork_url(644).ends_with("/official-artwork/644.png"));
    }
}
