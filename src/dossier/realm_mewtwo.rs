// Mewtwo realm theme: slow psychic motes.
use super::{RealmTheme, StageDesc};
use crate::Realm;
use crate::field::{BandDesc, ParticleKind, PointerEffect};

static BANDS: [BandDesc; 1] = [BandDesc {
    kind: ParticleKind::Mote,
    count: 140,
    count_mobile: 60,
    intensity_scaled: false,
    size: (0.5, 3.0),
    speed: (0.1, 0.5),
    opacity: (0.1, 0.5),
    pointer: PointerEffect::Repel {
        radius: 200.0,
        force: 0.08,
    },
}];

static STAGES: [StageDesc; 2] = [
    StageDesc {
        id: 151,
        name: "MEW",
        label: "Origin",
        color: "#f472b6",
        bg: "#0a0112",
        intensity: 1.0,
        lore: "Its DNA is said to contain the genetic codes of all creatures, so it can learn any technique.",
        stats: [("CLASS", "ORIGIN"), ("PSI", "80%")],
    },
    StageDesc {
        id: 150,
        name: "MEWTWO",
        label: "Genetic",
        color: "#a855f7",
        bg: "#0a0112",
        intensity: 1.4,
        lore: "A creature created by genetic manipulation. Its psychic power is said to be the strongest of all.",
        stats: [("CLASS", "GENETIC"), ("PSI", "100%")],
    },
];

pub static MEWTWO: RealmTheme = RealmTheme {
    realm: Realm::Mewtwo,
    name: "MEWTWO",
    type_line: "PSYCHIC",
    tagline: "Psychic Void",
    bands: &BANDS,
    default_stage: 1,
    stages: &STAGES,
};
