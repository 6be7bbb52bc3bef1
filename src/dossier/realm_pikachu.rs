// Pikachu realm theme: lightning bolts and static sparks around the specimen.
use super::{RealmTheme, StageDesc};
use crate::Realm;
use crate::field::{BandDesc, ParticleKind, PointerEffect};

static BANDS: [BandDesc; 2] = [
    BandDesc {
        kind: ParticleKind::Bolt,
        count: 10,
        count_mobile: 5,
        intensity_scaled: true,
        size: (2.0, 2.0),
        speed: (0.0, 0.0),
        opacity: (1.0, 1.0),
        pointer: PointerEffect::None,
    },
    BandDesc {
        kind: ParticleKind::Spark,
        count: 40,
        count_mobile: 18,
        intensity_scaled: true,
        size: (1.0, 3.0),
        speed: (0.5, 1.0),
        opacity: (0.6, 1.0),
        pointer: PointerEffect::None,
    },
];

static STAGES: [StageDesc; 3] = [
    StageDesc {
        id: 172,
        name: "PICHU",
        label: "Voltage sovereign registry",
        color: "#fef08a",
        bg: "#000000",
        intensity: 0.3,
        lore: "It is not yet skilled at storing electricity. It may send out a jolt if amused or startled.",
        stats: [("OUTPUT", "10v"), ("GRID", "STABLE")],
    },
    StageDesc {
        id: 25,
        name: "PIKACHU",
        label: "Voltage sovereign registry",
        color: "#eab308",
        bg: "#000000",
        intensity: 1.0,
        lore: "When several of these creatures gather, their electricity could build and cause lightning storms.",
        stats: [("OUTPUT", "10,000v"), ("GRID", "SURGING")],
    },
    StageDesc {
        id: 26,
        name: "RAICHU",
        label: "Voltage sovereign registry",
        color: "#ca8a04",
        bg: "#000000",
        intensity: 2.5,
        lore: "Its long tail serves as a ground to protect itself from its own high-voltage power.",
        stats: [("OUTPUT", "100,000v"), ("GRID", "CRITICAL")],
    },
];

pub static PIKACHU: RealmTheme = RealmTheme {
    realm: Realm::Pikachu,
    name: "PIKACHU",
    type_line: "ELECTRIC",
    tagline: "High Voltage",
    bands: &BANDS,
    default_stage: 1,
    stages: &STAGES,
};
