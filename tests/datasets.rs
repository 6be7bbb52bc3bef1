// Additional integration tests for theme-dataset invariants.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use realmdex::Realm;
use realmdex::uplink::{CommandSession, LINK_ERROR, Phase, parse_response_text};

#[test]
fn registry_covers_every_realm_exactly_once() {
    let mut seen = HashSet::new();
    for theme in realmdex::dossier::themes() {
        assert!(seen.insert(theme.realm), "duplicate theme for {:?}", theme.realm);
    }
    for realm in Realm::ALL {
        assert!(seen.contains(&realm), "no theme registered for {:?}", realm);
    }
}

#[test]
fn stage_records_are_presentable() {
    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    for theme in realmdex::dossier::themes() {
        assert!(!theme.name.is_empty());
        assert!(!theme.type_line.is_empty());
        assert!(!theme.tagline.is_empty());
        for stage in theme.stages {
            assert!(ids.insert(stage.id), "stage id {} reused", stage.id);
            assert!(names.insert(stage.name), "stage name '{}' reused", stage.name);
            // Hex colors only, so they drop straight into inline styles.
            for color in [stage.color, stage.bg] {
                assert!(color.starts_with('#'), "'{}' is not a hex color", color);
                assert!(color.len() == 4 || color.len() == 7, "'{}' bad length", color);
                assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
            }
            assert!(!stage.label.is_empty());
            for (key, value) in &stage.stats {
                assert!(!key.is_empty() && !value.is_empty());
            }
        }
        assert!(realmdex::sprite_url(theme.stages[0].id).starts_with("https://"));
    }
}

// End-to-end session walk: a failed command shows the fixed error line, a
// later command can still succeed, and a reply from the failed attempt
// arriving late changes nothing.
#[test]
fn uplink_session_full_walk() {
    let mut session = CommandSession::new();

    let first = session.begin_submit("scan specimen").unwrap();
    assert_eq!(session.phase(), Phase::Awaiting);
    session.complete(first, Err("status 503".to_string()));
    assert_eq!(session.response(), Some(LINK_ERROR));

    let second = session.begin_submit("retry scan").unwrap();
    session.complete(first, Ok("GHOST REPLY".to_string()));
    assert_eq!(session.response(), None);
    session.complete(second, Ok("SCAN COMPLETE".to_string()));
    assert_eq!(session.response(), Some("SCAN COMPLETE"));
    assert_eq!(session.phase(), Phase::Idle);
}

#[test]
fn response_parsing_tolerates_sparse_bodies() {
    assert_eq!(parse_response_text("{}"), None);
    assert_eq!(parse_response_text(r#"{"candidates":[{"content":null}]}"#), None);
    assert_eq!(
        parse_response_text(r#"{"candidates":[{"content":{"parts":[{"text":"OK"}]}}]}"#),
        Some("OK".to_string())
    );
}
