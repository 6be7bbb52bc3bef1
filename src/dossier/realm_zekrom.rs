// Zekrom realm theme: antigravity debris field (motes, shards, asteroids).
use super::{RealmTheme, StageDesc};
use crate::Realm;
use crate::field::{BandDesc, ParticleKind, PointerEffect};

// Every layer reacts to the pointer as a disturbed gravity well.
const GRAV_WELL: PointerEffect = PointerEffect::Repel {
    radius: 250.0,
    force: 0.05,
};

static BANDS: [BandDesc; 3] = [
    BandDesc {
        kind: ParticleKind::Mote,
        count: 300,
        count_mobile: 120,
        intensity_scaled: false,
        size: (0.2, 1.7),
        speed: (0.2, 1.0),
        opacity: (0.1, 0.4),
        pointer: GRAV_WELL,
    },
    BandDesc {
        kind: ParticleKind::Shard,
        count: 50,
        count_mobile: 20,
        intensity_scaled: false,
        size: (2.0, 7.0),
        speed: (0.4, 0.8),
        opacity: (0.2, 0.6),
        pointer: GRAV_WELL,
    },
    BandDesc {
        kind: ParticleKind::Asteroid,
        count: 15,
        count_mobile: 8,
        intensity_scaled: false,
        size: (10.0, 30.0),
        speed: (0.15, 0.3),
        opacity: (0.1, 0.1),
        pointer: GRAV_WELL,
    },
];

static STAGES: [StageDesc; 3] = [
    StageDesc {
        id: 643,
        name: "RESHIRAM",
        label: "Truth Variant",
        color: "#fefefe",
        bg: "#0a0a0a",
        intensity: 1.0,
        lore: "A legendary creature that scorched the world with fire when people lost their sense of truth.",
        stats: [("PWR", "97"), ("FIELD", "NULL-G")],
    },
    StageDesc {
        id: 644,
        name: "ZEKROM",
        label: "Ideals Core",
        color: "#3b82f6",
        bg: "#020202",
        intensity: 1.0,
        lore: "A legendary creature that scorched the world with lightning when people lost their sense of ideals.",
        stats: [("PWR", "98"), ("FIELD", "NULL-G")],
    },
    StageDesc {
        id: 646,
        name: "KYUREM-B",
        label: "Black Overdrive",
        color: "#1e40af",
        bg: "#000105",
        intensity: 1.2,
        lore: "An empty husk awaiting truth or ideals to fill it with absolute-zero power.",
        stats: [("PWR", "99"), ("FIELD", "FROZEN")],
    },
];

pub static ZEKROM: RealmTheme = RealmTheme {
    realm: Realm::Zekrom,
    name: "ZEKROM",
    type_line: "ELECTR/DRAGON",
    tagline: "Antigravity Core",
    bands: &BANDS,
    default_stage: 1,
    stages: &STAGES,
};
