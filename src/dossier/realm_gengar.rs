// Gengar realm theme: drifting shadow fog under small haze motes.
use super::{RealmTheme, StageDesc};
use crate::Realm;
use crate::field::{BandDesc, ParticleKind, PointerEffect};

static BANDS: [BandDesc; 2] = [
    // Large blurred fog blobs; drawn with heavy shadow blur.
    BandDesc {
        kind: ParticleKind::Mote,
        count: 12,
        count_mobile: 6,
        intensity_scaled: false,
        size: (60.0, 140.0),
        speed: (0.05, 0.2),
        opacity: (0.03, 0.08),
        pointer: PointerEffect::None,
    },
    BandDesc {
        kind: ParticleKind::Mote,
        count: 60,
        count_mobile: 24,
        intensity_scaled: false,
        size: (0.5, 2.0),
        speed: (0.1, 0.5),
        opacity: (0.1, 0.4),
        pointer: PointerEffect::Repel {
            radius: 160.0,
            force: 0.07,
        },
    },
];

static STAGES: [StageDesc; 3] = [
    StageDesc {
        id: 92,
        name: "GASTLY",
        label: "VOID ENTITY",
        color: "#a855f7",
        bg: "#08010d",
        intensity: 1.0,
        lore: "Born from gases, it can topple a foe by enveloping it in gas and poisoning it.",
        stats: [("PWR", "60"), ("STATE", "VAPOR")],
    },
    StageDesc {
        id: 93,
        name: "HAUNTER",
        label: "VOID ENTITY",
        color: "#9333ea",
        bg: "#08010d",
        intensity: 1.2,
        lore: "Its tongue is made of gas. If licked, its victim starts shaking constantly until death eventually comes.",
        stats: [("PWR", "75"), ("STATE", "ETHEREAL")],
    },
    StageDesc {
        id: 94,
        name: "GENGAR",
        label: "VOID ENTITY",
        color: "#6d28d9",
        bg: "#08010d",
        intensity: 1.4,
        lore: "It hides in shadows. If a cold chill strikes your back, a Gengar is lurking nearby.",
        stats: [("PWR", "92"), ("STATE", "SHADOW")],
    },
];

pub static GENGAR: RealmTheme = RealmTheme {
    realm: Realm::Gengar,
    name: "GENGAR",
    type_line: "GHOST/POISON",
    tagline: "Shadow Bound",
    bands: &BANDS,
    default_stage: 2,
    stages: &STAGES,
};
