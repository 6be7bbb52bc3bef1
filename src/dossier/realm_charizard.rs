// Charizard realm theme: rising ember column scaled by thermal intensity.
use super::{RealmTheme, StageDesc};
use crate::Realm;
use crate::field::{BandDesc, ParticleKind, PointerEffect};

static BANDS: [BandDesc; 1] = [BandDesc {
    kind: ParticleKind::Ember,
    count: 200,
    count_mobile: 80,
    intensity_scaled: true,
    size: (1.0, 4.0),
    speed: (1.0, 4.0),
    opacity: (0.2, 1.0),
    pointer: PointerEffect::Repel {
        radius: 150.0,
        force: 0.5,
    },
}];

static STAGES: [StageDesc; 3] = [
    StageDesc {
        id: 4,
        name: "CHARMANDER",
        label: "EMBER_SPECIMEN",
        color: "#f97316",
        bg: "#080201",
        intensity: 1.0,
        lore: "The flame on its tail shows the strength of its life-force. If it is weak, the flame also burns weakly.",
        stats: [("MAX_THERMAL", "1200\u{b0}C"), ("STABILITY", "FLUX_VAR")],
    },
    StageDesc {
        id: 5,
        name: "CHARMELEON",
        label: "HEAT_OPERATIVE",
        color: "#ea580c",
        bg: "#080201",
        intensity: 2.2,
        lore: "It lashes about with its tail to knock down its foe, then tears up the fallen opponent with sharp claws.",
        stats: [("MAX_THERMAL", "2400\u{b0}C"), ("STABILITY", "FLUX_VAR")],
    },
    StageDesc {
        id: 6,
        name: "CHARIZARD",
        label: "THERMAL_TITAN",
        color: "#dc2626",
        bg: "#080201",
        intensity: 4.5,
        lore: "It spits fire that is hot enough to melt boulders. It may cause forest fires by blowing flames.",
        stats: [("MAX_THERMAL", "4800\u{b0}C"), ("STABILITY", "FLUX_VAR_ALBEDO")],
    },
];

pub static CHARIZARD: RealmTheme = RealmTheme {
    realm: Realm::Charizard,
    name: "CHARIZARD",
    type_line: "FIRE/FLYING",
    tagline: "Thermal Alpha",
    bands: &BANDS,
    default_stage: 2,
    stages: &STAGES,
};
