// Squirtle realm theme: rising bubbles over caustic drift motes.
use super::{RealmTheme, StageDesc};
use crate::Realm;
use crate::field::{BandDesc, ParticleKind, PointerEffect};

static BANDS: [BandDesc; 2] = [
    BandDesc {
        kind: ParticleKind::Bubble,
        count: 40,
        count_mobile: 16,
        intensity_scaled: false,
        size: (5.0, 35.0),
        speed: (0.4, 1.4),
        opacity: (0.15, 0.5),
        pointer: PointerEffect::None,
    },
    BandDesc {
        kind: ParticleKind::Mote,
        count: 60,
        count_mobile: 24,
        intensity_scaled: false,
        size: (0.5, 2.0),
        speed: (0.1, 0.4),
        opacity: (0.05, 0.25),
        pointer: PointerEffect::None,
    },
];

static STAGES: [StageDesc; 3] = [
    StageDesc {
        id: 7,
        name: "SQUIRTLE",
        label: "Hydro Stream",
        color: "#06b6d4",
        bg: "#000a12",
        intensity: 1.0,
        lore: "After birth, its back swells and hardens into a shell. Powerfully sprays foam from its mouth.",
        stats: [("HYDRO", "70"), ("SHELL", "85")],
    },
    StageDesc {
        id: 8,
        name: "WARTORTLE",
        label: "Hydro Stream",
        color: "#0891b2",
        bg: "#000a12",
        intensity: 1.2,
        lore: "It is recognized as a symbol of longevity. If its shell has algae on it, that one is very old.",
        stats: [("HYDRO", "85"), ("SHELL", "100")],
    },
    StageDesc {
        id: 9,
        name: "BLASTOISE",
        label: "Hydro Stream",
        color: "#0e7490",
        bg: "#000a12",
        intensity: 1.5,
        lore: "It crushes its foe under its heavy body to cause fainting. In a pinch, it will withdraw inside its shell.",
        stats: [("HYDRO", "110"), ("SHELL", "120")],
    },
];

pub static SQUIRTLE: RealmTheme = RealmTheme {
    realm: Realm::Squirtle,
    name: "SQUIRTLE",
    type_line: "WATER",
    tagline: "Hydro Stream",
    bands: &BANDS,
    default_stage: 0,
    stages: &STAGES,
};
