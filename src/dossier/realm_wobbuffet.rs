// Wobbuffet realm theme: gentle kinetic motes.
use super::{RealmTheme, StageDesc};
use crate::Realm;
use crate::field::{BandDesc, ParticleKind, PointerEffect};

static BANDS: [BandDesc; 1] = [BandDesc {
    kind: ParticleKind::Mote,
    count: 80,
    count_mobile: 30,
    intensity_scaled: false,
    size: (0.5, 2.5),
    speed: (0.1, 0.4),
    opacity: (0.1, 0.35),
    pointer: PointerEffect::Repel {
        radius: 180.0,
        force: 0.06,
    },
}];

static STAGES: [StageDesc; 2] = [
    StageDesc {
        id: 360,
        name: "WYNAUT",
        label: "Kinetic Counter",
        color: "#38bdf8",
        bg: "#020617",
        intensity: 1.0,
        lore: "It tends to move in a pack with others. They cluster together to squeeze each other and toughen their spirits.",
        stats: [("CTR", "40"), ("HP", "95")],
    },
    StageDesc {
        id: 202,
        name: "WOBBUFFET",
        label: "Kinetic Counter",
        color: "#0ea5e9",
        bg: "#020617",
        intensity: 1.0,
        lore: "It hates light and shock. If attacked, it inflates its body to pump up its counterstrike.",
        stats: [("CTR", "100"), ("HP", "190")],
    },
];

pub static WOBBUFFET: RealmTheme = RealmTheme {
    realm: Realm::Wobbuffet,
    name: "WOBBUFFET",
    type_line: "PSYCHIC",
    tagline: "Kinetic Counter",
    bands: &BANDS,
    default_stage: 1,
    stages: &STAGES,
};
