// Bulbasaur realm theme: floating solar spores and falling leaves.
use super::{RealmTheme, StageDesc};
use crate::Realm;
use crate::field::{BandDesc, ParticleKind, PointerEffect};

static BANDS: [BandDesc; 2] = [
    BandDesc {
        kind: ParticleKind::Mote,
        count: 50,
        count_mobile: 20,
        intensity_scaled: false,
        size: (2.0, 8.0),
        speed: (0.1, 0.4),
        opacity: (0.1, 0.4),
        pointer: PointerEffect::None,
    },
    BandDesc {
        kind: ParticleKind::Leaf,
        count: 30,
        count_mobile: 12,
        intensity_scaled: false,
        size: (6.0, 15.0),
        speed: (0.4, 1.4),
        opacity: (0.3, 0.9),
        pointer: PointerEffect::None,
    },
];

static STAGES: [StageDesc; 3] = [
    StageDesc {
        id: 1,
        name: "BULBASAUR",
        label: "Sprout Phase",
        color: "#10b981",
        bg: "#010a05",
        intensity: 1.0,
        lore: "A strange seed was planted on its back at birth. The plant sprouts and grows with this creature.",
        stats: [("GROWTH", "65"), ("POISON", "45")],
    },
    StageDesc {
        id: 2,
        name: "IVYSAUR",
        label: "Bud Phase",
        color: "#059669",
        bg: "#010a05",
        intensity: 1.2,
        lore: "When the bulb on its back grows large, it appears to lose the ability to stand on its hind legs.",
        stats: [("GROWTH", "80"), ("POISON", "60")],
    },
    StageDesc {
        id: 3,
        name: "VENUSAUR",
        label: "Bloom Phase",
        color: "#047857",
        bg: "#010a05",
        intensity: 1.5,
        lore: "The plant blooms when it is absorbing solar energy. It stays on the move to seek sunlight.",
        stats: [("GROWTH", "100"), ("POISON", "85")],
    },
];

pub static BULBASAUR: RealmTheme = RealmTheme {
    realm: Realm::Bulbasaur,
    name: "BULBASAUR",
    type_line: "GRASS/POISON",
    tagline: "Bio Synthesis",
    bands: &BANDS,
    default_stage: 0,
    stages: &STAGES,
};
