//! Fixed-capacity particle arena driving one dossier view's background.
//!
//! The arena is allocated once per field and particles are respawned in
//! place when they expire or leave the viewport, so cardinality stays
//! constant and the per-frame path never allocates. All motion rules are
//! pure: the render loop hands in an immutable [`PointerSnapshot`] per
//! frame instead of the effects reading ambient pointer state, which keeps
//! this module free of web APIs and testable on the host.

/// Pointer position captured once per frame by the view container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSnapshot {
    pub x: f64,
    pub y: f64,
}

impl PointerSnapshot {
    /// Sentinel used before the first pointer event; far enough out that
    /// no proximity force ever triggers.
    pub const OFFSCREEN: PointerSnapshot = PointerSnapshot {
        x: -4096.0,
        y: -4096.0,
    };
}

/// Motion/draw archetypes distilled from the per-realm background effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    /// Drifting dot with sinusoidal shimmer opacity (motes, spores, mist).
    Mote,
    /// Rising glow particle with sway and life-based fade.
    Ember,
    /// Falling ellipse with sway and tumble.
    Leaf,
    /// Rising stroked circle with horizontal wobble.
    Bubble,
    /// Tumbling polygon with a short ghost trail.
    Shard,
    /// Heavy slow chunk with glow and trail.
    Asteroid,
    /// Short-lived jittering square around the viewport center.
    Spark,
    /// Jagged polyline flash; re-arms probabilistically after expiry.
    Bolt,
    /// Stationary filing that orients itself toward the pointer.
    Filing,
    /// Rising text glyph that grows as it fades.
    Glyph,
}

/// Pointer-proximity behavior for one band.
#[derive(Clone, Copy, Debug)]
pub enum PointerEffect {
    None,
    /// Inverse-distance-weighted push away from the pointer inside `radius`.
    Repel { radius: f64, force: f64 },
    /// Rotate to face the pointer (magnetic filings).
    Orient,
}

/// One homogeneous slice of a field: kind, population and parameter ranges.
/// A theme's particle mix is a static slice of these.
#[derive(Clone, Copy, Debug)]
pub struct BandDesc {
    pub kind: ParticleKind,
    pub count: usize,
    pub count_mobile: usize,
    /// Counts multiply with the stage intensity when set (embers, bolts).
    pub intensity_scaled: bool,
    pub size: (f64, f64),
    pub speed: (f64, f64),
    pub opacity: (f64, f64),
    pub pointer: PointerEffect,
}

/// Plain data record for one visual element. Mutated once per frame and
/// overwritten in place on respawn; never removed from its field.
#[derive(Clone, Debug, Default)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub opacity: f64,
    pub base_opacity: f64,
    pub rotation: f64,
    pub rot_speed: f64,
    /// Parallax factor applied against the pointer at draw time.
    pub depth: f64,
    /// Remaining life in [0,1] where life-based fade is used; 1.0 otherwise.
    pub life: f64,
    pub shimmer_phase: f64,
    pub shimmer_speed: f64,
    pub sides: u8,
    /// Recent positions for trails, or segment points for bolts. Bounded;
    /// capacity is reserved up front so pushes never reallocate.
    pub history: Vec<(f64, f64)>,
}

// Motion tuning constants, chosen by visual inspection.
const WRAP_BUFFER: f64 = 100.0;
const DRIFT_FRICTION: f64 = 0.99;
const EMBER_LIFE_DECAY: f64 = 0.005;
const SPARK_LIFE_DECAY: f64 = 0.04;
const BOLT_LIFE_DECAY: f64 = 0.08;
const GLYPH_LIFE_DECAY: f64 = 0.006;
const BOLT_REARM_CHANCE: f64 = 0.02;
const EMBER_SWAY_PERIOD_MS: f64 = 500.0;
pub const MOBILE_BREAKPOINT: f64 = 768.0;
const MAX_TRAIL: usize = 6;
const BOLT_POINTS: usize = 9;
const HISTORY_CAPACITY: usize = 10;

/// Linear congruential generator (Numerical Recipes constants). Stateful
/// so fields can be seeded deterministically in tests.
#[derive(Clone, Debug)]
pub struct Lcg(u32);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        // Fold the seed and avoid the all-zero fixpointless start.
        Lcg((seed as u32) ^ ((seed >> 32) as u32) ^ 0x9e37_79b9)
    }

    fn next(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.0
    }

    /// Uniform in [0, 1).
    pub fn unit(&mut self) -> f64 {
        (self.next() >> 8) as f64 / (1u32 << 24) as f64
    }

    /// Uniform in [lo, hi).
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.unit()
    }
}

/// Fixed-capacity collection of particles for one theme.
pub struct Field {
    width: f64,
    height: f64,
    intensity: f64,
    bands: &'static [BandDesc],
    particles: Vec<Particle>,
    /// Half-open index ranges into `particles`, parallel to `bands`.
    spans: Vec<(usize, usize)>,
    rng: Lcg,
}

impl Field {
    /// Build a field for the given viewport. A zero-sized viewport yields
    /// an empty (degenerate) field rather than an error.
    pub fn new(
        width: f64,
        height: f64,
        bands: &'static [BandDesc],
        intensity: f64,
        seed: u64,
    ) -> Field {
        let mut field = Field {
            width,
            height,
            intensity,
            bands,
            particles: Vec::new(),
            spans: Vec::new(),
            rng: Lcg::new(seed),
        };
        field.populate();
        field
    }

    fn band_count(&self, band: &BandDesc) -> usize {
        if self.width <= 0.0 || self.height <= 0.0 {
            return 0;
        }
        let base = if self.width < MOBILE_BREAKPOINT {
            band.count_mobile
        } else {
            band.count
        };
        if band.intensity_scaled {
            (base as f64 * self.intensity).round() as usize
        } else {
            base
        }
    }

    fn populate(&mut self) {
        self.particles.clear();
        self.spans.clear();
        let mut cursor = 0usize;
        for band in self.bands {
            let n = self.band_count(band);
            for i in 0..n {
                let mut p = Particle {
                    history: Vec::with_capacity(HISTORY_CAPACITY),
                    ..Particle::default()
                };
                spawn(
                    &mut p,
                    band,
                    self.width,
                    self.height,
                    self.intensity,
                    &mut self.rng,
                    true,
                    i,
                );
                self.particles.push(p);
            }
            self.spans.push((cursor, cursor + n));
            cursor += n;
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Iterate (band, particles) pairs in insertion order for drawing.
    pub fn bands(&self) -> impl Iterator<Item = (&BandDesc, &[Particle])> {
        self.bands
            .iter()
            .zip(self.spans.iter())
            .map(move |(band, &(s, e))| (band, &self.particles[s..e]))
    }

    /// Rebuild the arena for a new viewport. The whole buffer is replaced
    /// before returning, so no frame ever observes a half-resized field.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.populate();
    }

    /// Advance every particle one frame. `now_ms` is the frame timestamp
    /// used for time-based sway.
    pub fn step(&mut self, pointer: PointerSnapshot, now_ms: f64) {
        let (w, h) = (self.width, self.height);
        let intensity = self.intensity;
        let bands = self.bands;
        for (bi, band) in bands.iter().enumerate() {
            let (s, e) = self.spans[bi];
            for i in s..e {
                // Split borrows: particles and rng are disjoint fields.
                let rng = &mut self.rng;
                let p = &mut self.particles[i];
                step_particle(p, band, w, h, intensity, pointer, now_ms, i - s, rng);
            }
        }
    }
}

/// Apply inverse-distance repulsion within the effect radius.
fn apply_pointer(p: &mut Particle, effect: PointerEffect, pointer: PointerSnapshot) {
    match effect {
        PointerEffect::None => {}
        PointerEffect::Repel { radius, force } => {
            let dx = pointer.x - p.x;
            let dy = pointer.y - p.y;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist > 0.0 && dist < radius {
                let f = (1.0 - dist / radius) * force;
                p.vx -= (dx / dist) * f;
                p.vy -= (dy / dist) * f;
            }
        }
        PointerEffect::Orient => {
            p.rotation = (pointer.y - p.y).atan2(pointer.x - p.x);
        }
    }
}

fn wrap(p: &mut Particle, w: f64, h: f64) {
    if p.x < -WRAP_BUFFER {
        p.x = w + WRAP_BUFFER;
    }
    if p.x > w + WRAP_BUFFER {
        p.x = -WRAP_BUFFER;
    }
    if p.y < -WRAP_BUFFER {
        p.y = h + WRAP_BUFFER;
    }
    if p.y > h + WRAP_BUFFER {
        p.y = -WRAP_BUFFER;
    }
}

fn wrap_x(p: &mut Particle, w: f64) {
    if p.x < -WRAP_BUFFER {
        p.x = w + WRAP_BUFFER;
    }
    if p.x > w + WRAP_BUFFER {
        p.x = -WRAP_BUFFER;
    }
}

fn push_trail(p: &mut Particle) {
    if p.history.len() >= MAX_TRAIL {
        p.history.remove(0);
    }
    p.history.push((p.x, p.y));
}

/// Randomize one particle in place. `initial` spawns distribute positions
/// over the whole viewport; respawns re-enter from the kind's natural edge.
#[allow(clippy::too_many_arguments)]
fn spawn(
    p: &mut Particle,
    band: &BandDesc,
    w: f64,
    h: f64,
    intensity: f64,
    rng: &mut Lcg,
    initial: bool,
    index: usize,
) {
    p.size = rng.range(band.size.0, band.size.1);
    p.base_opacity = rng.range(band.opacity.0, band.opacity.1);
    p.opacity = p.base_opacity;
    p.life = 1.0;
    p.rotation = 0.0;
    p.rot_speed = 0.0;
    p.depth = 0.0;
    p.shimmer_phase = 0.0;
    p.shimmer_speed = 0.0;
    p.sides = 0;
    p.history.clear();

    match band.kind {
        ParticleKind::Mote => {
            p.x = rng.range(0.0, w.max(1.0));
            p.y = rng.range(0.0, h.max(1.0));
            p.vx = rng.range(-0.5, 0.5) * band.speed.1;
            p.vy = -rng.range(band.speed.0, band.speed.1);
            p.depth = rng.range(0.01, 0.04);
            p.shimmer_phase = rng.range(0.0, std::f64::consts::TAU);
            p.shimmer_speed = rng.range(0.01, 0.05);
        }
        ParticleKind::Ember => {
            p.x = rng.range(0.0, w.max(1.0));
            p.y = if initial {
                rng.range(0.0, h.max(1.0))
            } else {
                h + 20.0
            };
            p.vx = rng.range(-1.0, 1.0);
            p.vy = -rng.range(band.speed.0, band.speed.1) * (intensity / 2.0).max(0.5);
        }
        ParticleKind::Leaf => {
            p.x = rng.range(0.0, w.max(1.0));
            p.y = if initial {
                rng.range(0.0, h.max(1.0))
            } else {
                -20.0
            };
            p.vx = rng.range(-0.3, 0.3);
            p.vy = rng.range(band.speed.0, band.speed.1);
            p.rotation = rng.range(0.0, std::f64::consts::TAU);
            p.rot_speed = rng.range(-0.05, 0.05);
            p.shimmer_phase = rng.range(0.0, std::f64::consts::TAU);
            p.shimmer_speed = rng.range(0.01, 0.03);
        }
        ParticleKind::Bubble => {
            p.x = rng.range(0.0, w.max(1.0));
            p.y = if initial {
                rng.range(0.0, h.max(1.0))
            } else {
                h + p.size
            };
            p.vx = 0.0;
            p.vy = -rng.range(band.speed.0, band.speed.1);
            p.shimmer_phase = rng.range(0.0, std::f64::consts::TAU);
            p.shimmer_speed = rng.range(0.01, 0.04);
        }
        ParticleKind::Shard => {
            p.x = rng.range(0.0, w.max(1.0));
            p.y = rng.range(0.0, h.max(1.0));
            p.vx = rng.range(-0.5, 0.5) * band.speed.1;
            p.vy = rng.range(-0.5, 0.5) * band.speed.1 * 0.75;
            p.rotation = rng.range(0.0, std::f64::consts::TAU);
            p.rot_speed = rng.range(-0.015, 0.015);
            p.depth = rng.range(0.04, 0.14);
            p.sides = 3 + (rng.unit() * 3.0) as u8;
        }
        ParticleKind::Asteroid => {
            p.x = rng.range(0.0, w.max(1.0));
            p.y = rng.range(0.0, h.max(1.0));
            p.vx = rng.range(-0.5, 0.5) * band.speed.1;
            p.vy = rng.range(-0.5, 0.5) * band.speed.1;
            p.rotation = rng.range(0.0, std::f64::consts::TAU);
            p.rot_speed = rng.range(-0.005, 0.005);
            p.depth = rng.range(0.1, 0.3);
        }
        ParticleKind::Spark => {
            // Concentrated on a ring around the viewport center.
            let angle = rng.range(0.0, std::f64::consts::TAU);
            let radius = 100.0 + rng.unit() * 250.0;
            p.x = w / 2.0 + angle.cos() * radius;
            p.y = h / 2.0 + angle.sin() * radius;
            p.vx = rng.range(-1.0, 1.0);
            p.vy = rng.range(-1.0, 1.0);
            if initial {
                // Stagger lives so the band doesn't pulse in unison.
                p.life = rng.unit();
            }
        }
        ParticleKind::Bolt => {
            rearm_bolt(p, w, h, rng);
            if initial && rng.unit() > 0.3 {
                // Most bolts start dormant; flashes arrive over time.
                p.life = 0.0;
            }
        }
        ParticleKind::Filing => {
            // Deterministic lattice so the grid fills evenly.
            p.x = ((index as f64 * 7.0) % 100.0) / 100.0 * w.max(1.0);
            p.y = ((index as f64 * 13.0) % 100.0) / 100.0 * h.max(1.0);
            p.vx = 0.0;
            p.vy = 0.0;
        }
        ParticleKind::Glyph => {
            p.x = w * 0.4 + rng.unit() * w * 0.2;
            p.y = if initial {
                rng.range(h * 0.3, h.max(1.0))
            } else {
                h * 0.8
            };
            p.vx = rng.range(0.05, 0.2);
            p.vy = -rng.range(band.speed.0, band.speed.1);
            if initial {
                p.life = rng.unit();
            }
        }
    }
}

fn rearm_bolt(p: &mut Particle, w: f64, h: f64, rng: &mut Lcg) {
    p.life = 1.0;
    p.history.clear();
    let mut x = w / 2.0 + rng.range(-200.0, 200.0);
    let mut y = h / 2.0 + rng.range(-200.0, 200.0);
    p.x = x;
    p.y = y;
    p.history.push((x, y));
    for _ in 1..BOLT_POINTS {
        x += rng.range(-60.0, 60.0);
        y += rng.range(-60.0, 60.0);
        p.history.push((x, y));
    }
}

#[allow(clippy::too_many_arguments)]
fn step_particle(
    p: &mut Particle,
    band: &BandDesc,
    w: f64,
    h: f64,
    intensity: f64,
    pointer: PointerSnapshot,
    now_ms: f64,
    index: usize,
    rng: &mut Lcg,
) {
    match band.kind {
        ParticleKind::Mote => {
            apply_pointer(p, band.pointer, pointer);
            p.vx *= DRIFT_FRICTION;
            p.vy *= DRIFT_FRICTION;
            p.x += p.vx;
            p.y += p.vy;
            wrap(p, w, h);
            p.shimmer_phase += p.shimmer_speed;
            p.opacity = p.base_opacity * (0.2 + 0.8 * (p.shimmer_phase.sin() * 0.5 + 0.5));
        }
        ParticleKind::Ember => {
            apply_pointer(p, band.pointer, pointer);
            p.y += p.vy;
            p.x += p.vx + (now_ms / EMBER_SWAY_PERIOD_MS + index as f64).sin() * 0.5;
            p.life -= EMBER_LIFE_DECAY;
            // Repulsion can flip vy positive and push an ember out the
            // bottom, so both vertical exits respawn.
            if p.life <= 0.0
                || p.y < -50.0
                || p.y > h + WRAP_BUFFER
                || p.x < -WRAP_BUFFER
                || p.x > w + WRAP_BUFFER
            {
                spawn(p, band, w, h, intensity, rng, false, index);
            }
        }
        ParticleKind::Leaf => {
            p.shimmer_phase += p.shimmer_speed;
            p.x += p.vx + p.shimmer_phase.sin() * 0.5;
            p.y += p.vy;
            p.rotation += p.rot_speed;
            wrap_x(p, w);
            if p.y > h + 30.0 {
                spawn(p, band, w, h, intensity, rng, false, index);
            }
        }
        ParticleKind::Bubble => {
            p.shimmer_phase += p.shimmer_speed;
            p.x += p.shimmer_phase.sin() * 0.4;
            p.y += p.vy;
            wrap_x(p, w);
            if p.y < -p.size - 10.0 {
                spawn(p, band, w, h, intensity, rng, false, index);
            }
        }
        ParticleKind::Shard | ParticleKind::Asteroid => {
            apply_pointer(p, band.pointer, pointer);
            p.vx *= DRIFT_FRICTION;
            p.vy *= DRIFT_FRICTION;
            p.x += p.vx;
            p.y += p.vy;
            wrap(p, w, h);
            p.rotation += p.rot_speed;
            push_trail(p);
        }
        ParticleKind::Spark => {
            p.life -= SPARK_LIFE_DECAY;
            p.x += p.vx + rng.range(-1.0, 1.0);
            p.y += p.vy + rng.range(-1.0, 1.0);
            if p.life <= 0.0 {
                spawn(p, band, w, h, intensity, rng, false, index);
            }
        }
        ParticleKind::Bolt => {
            if p.life > 0.0 {
                p.life -= BOLT_LIFE_DECAY;
                if p.life < 0.0 {
                    p.life = 0.0;
                }
            } else if rng.unit() < BOLT_REARM_CHANCE * intensity {
                rearm_bolt(p, w, h, rng);
            }
        }
        ParticleKind::Filing => {
            apply_pointer(p, band.pointer, pointer);
        }
        ParticleKind::Glyph => {
            p.x += p.vx;
            p.y += p.vy;
            p.life -= GLYPH_LIFE_DECAY;
            if p.life <= 0.0 || p.y < -50.0 {
                spawn(p, band, w, h, intensity, rng, false, index);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TEST_BANDS: &[BandDesc] = &[
        BandDesc {
            kind: ParticleKind::Mote,
            count: 40,
            count_mobile: 16,
            intensity_scaled: false,
            size: (0.2, 1.7),
            speed: (0.2, 1.0),
            opacity: (0.1, 0.4),
            pointer: PointerEffect::Repel {
                radius: 250.0,
                force: 0.05,
            },
        },
        BandDesc {
            kind: ParticleKind::Ember,
            count: 20,
            count_mobile: 8,
            intensity_scaled: true,
            size: (1.0, 4.0),
            speed: (1.0, 4.0),
            opacity: (0.2, 1.0),
            pointer: PointerEffect::Repel {
                radius: 150.0,
                force: 0.5,
            },
        },
    ];

    fn test_field(w: f64, h: f64) -> Field {
        Field::new(w, h, TEST_BANDS, 1.0, 0xdead_beef)
    }

    #[test]
    fn cardinality_is_constant_across_steps() {
        let mut f = test_field(1920.0, 1080.0);
        let expected = f.len();
        assert_eq!(expected, 40 + 20);
        for frame in 0..2_000 {
            f.step(PointerSnapshot::OFFSCREEN, frame as f64 * 16.0);
        }
        assert_eq!(f.len(), expected);
    }

    #[test]
    fn zero_viewport_yields_degenerate_field() {
        let f = test_field(0.0, 0.0);
        assert!(f.is_empty());
    }

    #[test]
    fn mobile_viewport_uses_reduced_counts() {
        let f = test_field(375.0, 667.0);
        assert_eq!(f.len(), 16 + 8);
    }

    #[test]
    fn particles_never_escape_for_good() {
        let mut f = test_field(800.0, 600.0);
        for frame in 0..5_000 {
            f.step(PointerSnapshot { x: 400.0, y: 300.0 }, frame as f64 * 16.0);
            for (_, slice) in f.bands() {
                for p in slice {
                    assert!(p.x >= -WRAP_BUFFER - 1.0 && p.x <= 800.0 + WRAP_BUFFER + 1.0);
                    // Embers respawn just below the bottom edge.
                    assert!(p.y >= -WRAP_BUFFER - 1.0 && p.y <= 600.0 + WRAP_BUFFER + 21.0);
                }
            }
        }
    }

    #[test]
    fn repelled_embers_respawn_from_below() {
        static EMBERS: &[BandDesc] = &[BandDesc {
            kind: ParticleKind::Ember,
            count: 60,
            count_mobile: 24,
            intensity_scaled: false,
            size: (1.0, 4.0),
            speed: (1.0, 4.0),
            opacity: (0.2, 1.0),
            pointer: PointerEffect::Repel {
                radius: 150.0,
                force: 0.5,
            },
        }];
        let mut f = Field::new(800.0, 600.0, EMBERS, 1.0, 0xca11);
        // A stationary pointer in the rising column flips embers downward;
        // they must respawn once past the bottom margin, not drift on.
        for frame in 0..5_000 {
            f.step(PointerSnapshot { x: 400.0, y: 300.0 }, frame as f64 * 16.0);
            for (_, slice) in f.bands() {
                for p in slice {
                    assert!(p.y <= 600.0 + WRAP_BUFFER + 1.0, "ember stuck at y={}", p.y);
                }
            }
        }
    }

    #[test]
    fn opacity_and_size_stay_bounded() {
        let mut f = test_field(1024.0, 768.0);
        for frame in 0..3_000 {
            f.step(PointerSnapshot { x: 10.0, y: 10.0 }, frame as f64 * 16.0);
        }
        for (band, slice) in f.bands() {
            for p in slice {
                assert!(p.size >= band.size.0 && p.size <= band.size.1);
                assert!(p.opacity >= 0.0 && p.opacity <= band.opacity.1 + 1e-9);
                assert!((0.0..=1.0).contains(&p.life));
            }
        }
    }

    #[test]
    fn resize_rebuilds_without_nan() {
        let mut f = test_field(1920.0, 1080.0);
        for frame in 0..120 {
            f.step(PointerSnapshot::OFFSCREEN, frame as f64 * 16.0);
        }
        f.resize(375.0, 667.0);
        assert_eq!(f.len(), 16 + 8);
        for frame in 0..120 {
            f.step(PointerSnapshot::OFFSCREEN, frame as f64 * 16.0);
        }
        for (_, slice) in f.bands() {
            for p in slice {
                assert!(p.x.is_finite() && p.y.is_finite());
                assert!(!p.opacity.is_nan() && !p.size.is_nan());
            }
        }
    }

    #[test]
    fn repulsion_only_acts_within_radius() {
        let mut p = Particle::default();
        p.x = 500.0;
        p.y = 500.0;
        apply_pointer(
            &mut p,
            PointerEffect::Repel {
                radius: 150.0,
                force: 0.5,
            },
            PointerSnapshot { x: 900.0, y: 500.0 },
        );
        assert_eq!(p.vx, 0.0);
        apply_pointer(
            &mut p,
            PointerEffect::Repel {
                radius: 150.0,
                force: 0.5,
            },
            PointerSnapshot { x: 560.0, y: 500.0 },
        );
        // Pushed away from a pointer to the right: negative vx.
        assert!(p.vx < 0.0);
    }

    #[test]
    fn lcg_is_deterministic_and_in_range() {
        let mut a = Lcg::new(42);
        let mut b = Lcg::new(42);
        for _ in 0..100 {
            let (x, y) = (a.unit(), b.unit());
            assert_eq!(x, y);
            assert!((0.0..1.0).contains(&x));
        }
    }
}
