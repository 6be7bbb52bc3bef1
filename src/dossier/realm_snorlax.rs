// Snorlax realm theme: drifting banks of mist and rising sleep glyphs.
use super::{RealmTheme, StageDesc};
use crate::Realm;
use crate::field::{BandDesc, ParticleKind, PointerEffect};

static BANDS: [BandDesc; 2] = [
    BandDesc {
        kind: ParticleKind::Mote,
        count: 10,
        count_mobile: 6,
        intensity_scaled: false,
        size: (80.0, 180.0),
        speed: (0.05, 0.2),
        opacity: (0.03, 0.08),
        pointer: PointerEffect::None,
    },
    BandDesc {
        kind: ParticleKind::Glyph,
        count: 20,
        count_mobile: 10,
        intensity_scaled: false,
        size: (10.0, 24.0),
        speed: (0.2, 0.6),
        opacity: (0.2, 0.6),
        pointer: PointerEffect::None,
    },
];

static STAGES: [StageDesc; 2] = [
    StageDesc {
        id: 446,
        name: "MUNCHLAX",
        label: "STATUS: FORAGING",
        color: "#34d399",
        bg: "#02100a",
        intensity: 0.8,
        lore: "It stores food beneath its fur. It eats constantly yet somehow never feels full.",
        stats: [("SATIETY", "HIGH"), ("RECOVERY", "4.2x")],
    },
    StageDesc {
        id: 143,
        name: "SNORLAX",
        label: "STATUS: DORMANT",
        color: "#10b981",
        bg: "#02100a",
        intensity: 1.0,
        lore: "Its stomach can digest any kind of food, even if it happens to be moldy or rotten. Nothing wakes it.",
        stats: [("SATIETY", "MAX"), ("RECOVERY", "9.9x")],
    },
];

pub static SNORLAX: RealmTheme = RealmTheme {
    realm: Realm::Snorlax,
    name: "SNORLAX",
    type_line: "NORMAL",
    tagline: "Dormant Titan",
    bands: &BANDS,
    default_stage: 1,
    stages: &STAGES,
};
