// Integration tests (native) for the `realmdex` crate.
// These tests avoid wasm-specific functionality and exercise pure Rust logic so
// they can run under `cargo test` on the host.

use realmdex::Realm;
use realmdex::field::{Field, PointerSnapshot};
use realmdex::shell::{Shell, ViewState};

// Every registered theme must survive a long simulated session at both
// desktop and phone viewports without losing or gaining particles.
#[test]
fn every_theme_simulates_cleanly_at_both_viewports() {
    for &(w, h) in &[(1920.0, 1080.0), (375.0, 667.0)] {
        for theme in realmdex::dossier::themes() {
            let stage = &theme.stages[theme.default_stage];
            let mut field = Field::new(w, h, theme.bands, stage.intensity, 0x5eed);
            let count = field.len();
            for frame in 0..1_000 {
                let pointer = if frame % 3 == 0 {
                    PointerSnapshot {
                        x: w * 0.5,
                        y: h * 0.5,
                    }
                } else {
                    PointerSnapshot::OFFSCREEN
                };
                field.step(pointer, frame as f64 * 16.6);
            }
            assert_eq!(field.len(), count, "{} field changed size", theme.name);
            for (_, slice) in field.bands() {
                for p in slice {
                    assert!(p.x.is_finite() && p.y.is_finite(), "{}", theme.name);
                    assert!(p.opacity.is_finite() && p.size.is_finite(), "{}", theme.name);
                }
            }
        }
    }
}

// Shrinking from a desktop viewport to a phone viewport mid-session must
// leave the field in a clean state.
#[test]
fn resize_mid_session_is_clean_for_every_theme() {
    for theme in realmdex::dossier::themes() {
        let stage = &theme.stages[theme.default_stage];
        let mut field = Field::new(1920.0, 1080.0, theme.bands, stage.intensity, 1);
        for frame in 0..200 {
            field.step(PointerSnapshot::OFFSCREEN, frame as f64 * 16.6);
        }
        field.resize(375.0, 667.0);
        for frame in 0..200 {
            field.step(PointerSnapshot::OFFSCREEN, frame as f64 * 16.6);
        }
        for (_, slice) in field.bands() {
            for p in slice {
                assert!(p.x.is_finite() && p.y.is_finite(), "{}", theme.name);
                assert!(!p.opacity.is_nan() && !p.size.is_nan(), "{}", theme.name);
            }
        }
    }
}

// A full tour: open every realm in turn, then go back; the shell must end
// up exactly where it started.
#[test]
fn shell_survives_a_full_registry_tour() {
    let mut shell = Shell::new();
    for realm in Realm::ALL {
        shell.select_realm(realm);
        assert_eq!(shell.view(), ViewState::Detail);
        assert_eq!(shell.active(), Some(realm));
        shell.back_to_registry();
        assert_eq!(shell.view(), ViewState::Registry);
        assert_eq!(shell.active(), None);
    }
}
