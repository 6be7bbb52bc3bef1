// Magneton realm theme: a lattice of pointer-oriented filings plus static sparks.
use super::{RealmTheme, StageDesc};
use crate::Realm;
use crate::field::{BandDesc, ParticleKind, PointerEffect};

static BANDS: [BandDesc; 2] = [
    BandDesc {
        kind: ParticleKind::Filing,
        count: 100,
        count_mobile: 50,
        intensity_scaled: false,
        size: (10.0, 14.0),
        speed: (0.0, 0.0),
        opacity: (0.15, 0.25),
        pointer: PointerEffect::Orient,
    },
    BandDesc {
        kind: ParticleKind::Spark,
        count: 20,
        count_mobile: 10,
        intensity_scaled: false,
        size: (1.0, 2.5),
        speed: (0.3, 0.8),
        opacity: (0.5, 1.0),
        pointer: PointerEffect::None,
    },
];

static STAGES: [StageDesc; 3] = [
    StageDesc {
        id: 81,
        name: "MAGNAM",
        label: "STATUS: UNIT-01",
        color: "#3b82f6",
        bg: "#0b0b0d",
        intensity: 1.0,
        lore: "It is born with the ability to defy gravity. It floats in the air by emitting electromagnetic waves.",
        stats: [("FLUX", "2.4T"), ("POWER", "10kV")],
    },
    StageDesc {
        id: 82,
        name: "MAGNETO",
        label: "STATUS: LINKED",
        color: "#2563eb",
        bg: "#0b0b0d",
        intensity: 1.2,
        lore: "A link of three units, it emits powerful radio waves that can cause high-voltage headaches.",
        stats: [("FLUX", "8.2T"), ("POWER", "50kV")],
    },
    StageDesc {
        id: 462,
        name: "MAGNEZONE",
        label: "STATUS: ARRAY",
        color: "#1d4ed8",
        bg: "#0b0b0d",
        intensity: 1.4,
        lore: "It evolved from exposure to a special magnetic field. It sometimes emits radar to monitor its territory.",
        stats: [("FLUX", "24.0T"), ("POWER", "250kV")],
    },
];

pub static MAGNETON: RealmTheme = RealmTheme {
    realm: Realm::Magneton,
    name: "MAGNETON",
    type_line: "ELECTRIC/STEEL",
    tagline: "Tri-Polarity",
    bands: &BANDS,
    default_stage: 1,
    stages: &STAGES,
};
