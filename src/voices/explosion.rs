//! Explosion.
//!
//! The heaviest effect in the game, built from sixteen sources in five
//! families plus a delayed secondary blast.
//!
//! # How It Works
//!
//! 1. **Sub-bass blast**: 35, 55 and 75 Hz sines under a fast-attack envelope
//!    exp(-18t)(1 - exp(-300t))
//! 2. **Core**: three mid-range sines whose pitch wobbles at different
//!    rates, under a slow decay that also sags 20% across the buffer
//! 3. **Debris**: white noise, plain and ring-modulated at 100 and 200 rad/s,
//!    summed on one bus so a single per-sample roughness draw moves all
//!    three together
//! 4. **Shrapnel**: high wobbling sines (2.5–4 kHz) that die within ~50 ms
//! 5. **Shockwave**: broadband noise with a long tail
//! 6. **Electrical crackle**: random-sign bursts during the first 200 ms
//! 7. **Secondary blast**: a 90 Hz thud starting 50 ms in, confined to
//!    `[0.05, 0.25)` seconds with its own waveform clock
//!
//! The mix is soft-limited like every effect, then scattered across the
//! channels with a per-sample random gain and decorrelated by mixing in a
//! 6-sample delayed copy.
//!
//! # Variations
//!
//! - Shorter duration = the sag and shockwave tail compress, the burst
//!   timings stay fixed in seconds

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    dsp::{Decorrelation, Envelope, Modulation, Oscillator, StereoImage},
    graph::{Layer, Patch},
};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplosionParams {
    pub duration: f64,
}

impl Default for ExplosionParams {
    fn default() -> Self {
        Self { duration: 0.4 }
    }
}

/// Build the explosion patch.
pub fn explosion(params: &ExplosionParams) -> Patch {
    let blast = Envelope::attack_decay(18.0, 300.0);
    let core = Envelope::decay(6.0).times(Envelope::Linear { from: 1.0, to: 0.8 });
    let shrapnel = Envelope::attack_decay(30.0, 150.0);
    let shockwave = Envelope::Linear { from: 1.0, to: 0.5 }.times(Envelope::decay(3.0));

    Patch::new("explosion", params.duration, 7500.0)
        .layer(sub("sub_35", 35.0, 1.2, &blast))
        .layer(sub("sub_55", 55.0, 0.8, &blast))
        .layer(sub("sub_75", 75.0, 0.6, &blast))
        .layer(wobble("core_low", (150.0, 80.0, 4.0), 0.9, &core))
        .layer(wobble("core_mid", (200.0, 60.0, 7.0), 0.9, &core))
        .layer(wobble("core_high", (180.0, 100.0, 5.0), 0.9, &core))
        .layer(
            Layer::bus(
                "debris",
                vec![
                    Layer::new("debris_plain", Oscillator::noise(1.0)).gain(0.5),
                    Layer::new("debris_ring_100", Oscillator::noise(1.0))
                        .gain(0.4)
                        .modulated(Modulation::ring(100.0)),
                    Layer::new("debris_ring_200", Oscillator::noise(1.0))
                        .gain(0.3)
                        .modulated(Modulation::ring(200.0)),
                ],
            )
            .shaped(Envelope::decay(12.0))
            .modulated(Modulation::Jitter { min: 0.7, max: 1.3 }),
        )
        .layer(wobble("shrapnel_low", (2500.0, 800.0, 15.0), 0.4, &shrapnel))
        .layer(wobble("shrapnel_mid", (3200.0, 600.0, 20.0), 0.28, &shrapnel))
        .layer(wobble("shrapnel_high", (4000.0, 400.0, 25.0), 0.2, &shrapnel))
        .layer(
            Layer::new("shockwave", Oscillator::noise(1.0))
                .gain(0.7)
                .shaped(shockwave.clone()),
        )
        .layer(
            Layer::new("shockwave_ring", Oscillator::noise(1.0))
                .gain(0.5)
                .shaped(shockwave)
                .modulated(Modulation::ring(50.0)),
        )
        .layer(
            Layer::new("electrical", Oscillator::Crackle { min: 0.5, max: 1.0 })
                .gain(0.3)
                .shaped(Envelope::window(0.0, 0.2, Envelope::decay(25.0)))
                .modulated(Modulation::Jitter { min: 0.8, max: 1.2 }),
        )
        .layer(
            Layer::new("secondary_blast", Oscillator::wobble(90.0, 40.0, 8.0))
                .gain(0.6)
                .delayed(0.05)
                .shaped(Envelope::window(0.05, 0.25, Envelope::attack_decay(20.0, 100.0))),
        )
        .stereo(StereoImage::Scatter {
            base: 0.85,
            spread: 0.15,
        })
        .decorrelated(Decorrelation {
            delay_samples: 6,
            mix: 0.3,
        })
}

fn sub(name: &'static str, hz: f64, gain: f32, envelope: &Envelope) -> Layer {
    Layer::new(name, Oscillator::sine(hz))
        .gain(gain)
        .shaped(envelope.clone())
}

fn wobble(
    name: &'static str,
    (center, depth, rate): (f64, f64, f64),
    gain: f32,
    envelope: &Envelope,
) -> Layer {
    Layer::new(name, Oscillator::wobble(center, depth, rate))
        .gain(gain)
        .shaped(envelope.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::SynthConfig,
        graph::{RenderCtx, Source},
    };
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn secondary_blast_is_confined_to_its_window() {
        let patch = explosion(&ExplosionParams::default());
        let layer = patch.find_layer("secondary_blast").unwrap();
        let ctx = RenderCtx::new(&SynthConfig::default(), patch.duration).unwrap();
        let mut rng = Pcg64::seed_from_u64(3);
        let samples = layer.render(&ctx, &mut rng);

        let start = ctx.frames_in(0.05);
        let end = ctx.frames_in(0.25);
        assert!(samples[..start].iter().all(|&s| s == 0.0));
        assert!(samples[end..].iter().all(|&s| s == 0.0));

        let energy: f32 = samples[start..end].iter().map(|s| s * s).sum();
        assert!(energy > 1.0, "energy {energy}");
    }

    #[test]
    fn crackle_stops_after_two_hundred_ms() {
        let patch = explosion(&ExplosionParams::default());
        let layer = patch.find_layer("electrical").unwrap();
        let mut rng = Pcg64::seed_from_u64(3);
        assert_ne!(layer.sample(0.01, patch.duration, &mut rng), 0.0);
        assert_eq!(layer.sample(0.2, patch.duration, &mut rng), 0.0);
        assert_eq!(layer.sample(0.35, patch.duration, &mut rng), 0.0);
    }

    #[test]
    fn is_noisy_and_decorrelated() {
        let patch = explosion(&ExplosionParams::default());
        assert!(!patch.is_deterministic());
        assert_eq!(patch.layers.len(), 14);
        assert_eq!(patch.decorrelation.map(|d| d.delay_samples), Some(6));
    }

    #[test]
    fn debris_beds_share_one_roughness_draw() {
        let patch = explosion(&ExplosionParams::default());
        let debris = patch.find_layer("debris").unwrap();
        assert_eq!(
            debris.modulation,
            vec![Modulation::Jitter { min: 0.7, max: 1.3 }]
        );
        let Source::Bus(beds) = &debris.source else {
            panic!("debris is a bus");
        };
        assert_eq!(beds.len(), 3);
        assert!(beds
            .iter()
            .all(|bed| !bed.modulation.iter().any(Modulation::is_random)));
    }
}
