//! Built-in mood patterns.
//!
//! Each pattern is a plain function over `(index, time, total_points)`. Most are pure;
//! `fireflies` and `rainfall` sample thread-local randomness on every call for flicker, so their
//! output is not reproducible.

use crate::foundation::core::Rgb;
use crate::patterns::library::Pattern;
use rand::Rng;

/// The default palette in enumeration order.
pub fn builtin_patterns() -> Vec<Pattern> {
    vec![
        Pattern::new(
            "joy",
            "Ripples of brightness that spread like laughter",
            vec![0.8, 0.9, 0.7, 0.2, -0.3, -0.4, 0.6, 0.8],
            joy,
        ),
        Pattern::new(
            "serenity",
            "Deep, slow breathing pattern in calming tones",
            vec![0.1, 0.7, -0.6, 0.8, -0.2, 0.9, 0.4, 0.6],
            serenity,
        ),
        Pattern::new(
            "anxiety",
            "Erratic, tense pulses that interrupt each other",
            vec![-0.4, -0.6, 0.8, -0.7, 0.6, -0.8, -0.3, -0.5],
            anxiety,
        ),
        Pattern::new(
            "love",
            "Warm double-pulse rhythm like a heart beating",
            vec![0.9, 0.7, 0.2, 0.8, -0.1, 0.6, 0.8, 0.9],
            love,
        ),
        Pattern::new(
            "melancholy",
            "Deep blue-purple with occasional brighter moments that fade",
            vec![-0.7, -0.5, -0.3, 0.4, 0.1, 0.6, -0.4, -0.2],
            melancholy,
        ),
        Pattern::new(
            "energy",
            "Dynamic bursts of power with electric colors",
            vec![0.7, 0.5, 0.8, 0.3, 0.4, 0.2, 0.7, 0.6],
            energy,
        ),
        Pattern::new(
            "confidence",
            "Strong, steady golden pulse with purposeful movement",
            vec![0.8, 0.6, 0.7, 0.4, 0.5, 0.3, 0.8, 0.7],
            confidence,
        ),
        Pattern::new(
            "contemplation",
            "Deep indigo waves that slowly merge and separate",
            vec![0.1, 0.4, -0.2, 0.9, 0.3, 0.7, 0.5, 0.2],
            contemplation,
        ),
        Pattern::new(
            "peace",
            "Gentle flows between soft natural colors",
            vec![0.2, 0.8, -0.5, 0.9, -0.1, 0.8, 0.6, 0.7],
            peace,
        ),
        Pattern::new(
            "wonder",
            "Twinkling stars with occasional shooting stars",
            vec![0.6, 0.7, 0.4, 0.8, -0.2, 0.7, 0.9, 0.8],
            wonder,
        ),
        Pattern::new(
            "sadness",
            "Slow waves of deep blue with moments of lightness",
            vec![-0.6, -0.8, -0.4, 0.3, 0.2, 0.7, -0.5, -0.3],
            sadness,
        ),
        Pattern::new(
            "fireflies",
            "Warm sparks that wake and fade at random across the field",
            vec![0.5, 0.6, 0.3, 0.7, 0.1, 0.6, 0.9, 0.7],
            fireflies,
        )
        .with_match_weight(0.8),
        Pattern::new(
            "rainfall",
            "Cool drops running around the ring with the odd splash",
            vec![-0.3, 0.2, -0.4, 0.6, 0.0, 0.8, -0.1, 0.1],
            rainfall,
        )
        .with_match_weight(0.8),
    ]
}

fn joy(index: usize, t: u64, _total: usize) -> Rgb {
    let (i, t) = (index as f64, t as f64);
    let base_wave = (t * 0.1).sin();
    let ripple1 = (t * 0.15 + i * 0.4).sin();
    let ripple2 = (t * 0.15 - i * 0.4).sin();
    let combined = ((ripple1 + ripple2) * 0.5 + base_wave * 0.3).max(0.0);
    Rgb::splat(255.0, 220.0, 100.0, combined)
}

fn serenity(index: usize, t: u64, _total: usize) -> Rgb {
    let (i, t) = (index as f64, t as f64);
    let breath_cycle = (t * 0.03).sin() * 0.5 + 0.5;
    let position_influence = (i * 0.26).sin() * 0.2 + 0.8;
    Rgb::splat(130.0, 180.0, 210.0, breath_cycle * position_influence)
}

fn anxiety(index: usize, t: u64, _total: usize) -> Rgb {
    let (i, t) = (index as f64, t as f64);
    let rapid = (t * 0.4 + i * 0.5).sin();
    let interrupt = (t * 0.63 + i * 0.7).sin();
    let jitter = (t * 1.1 + i * 0.3).sin();
    let combined = rapid * 0.6 + interrupt * 0.3 + jitter * 0.1;
    // Blue tinge survives the dark half of the cycle.
    Rgb::new(
        180.0 * combined.max(0.0),
        200.0 * combined.max(0.0),
        combined.abs() * 30.0,
    )
}

fn love(index: usize, t: u64, _total: usize) -> Rgb {
    let (i, t) = (index as f64, t as f64);
    let heartbeat = t * 0.1;
    let beat = heartbeat.sin().powi(8) + (heartbeat + 0.2).sin().powi(8) * 0.6;
    let spread = (i * 0.3).sin() * 0.3 + 0.7;
    Rgb::splat(255.0, 60.0, 130.0, beat * spread)
}

fn melancholy(index: usize, t: u64, _total: usize) -> Rgb {
    let (i, t) = (index as f64, t as f64);
    let base_wave = (t * 0.03 + i * 0.1).sin() * 0.3 + 0.4;
    let bright_moment = (t * 0.047 + i * 0.15).sin().powi(16);
    Rgb::splat(40.0, 30.0, 180.0, base_wave + bright_moment * 0.3)
}

fn energy(index: usize, t: u64, _total: usize) -> Rgb {
    let (i, t) = (index as f64, t as f64);
    let burst = (t * 0.2 + i * 0.4).sin().powi(2);
    let flow = (t * 0.3 + i * 0.5).sin() * 0.5 + 0.5;
    let spark = (t * 1.5 + i * 0.2).sin().powi(8) * 0.3;
    Rgb::splat(220.0, 240.0, 255.0, (burst * flow + spark).max(0.0))
}

fn confidence(index: usize, t: u64, _total: usize) -> Rgb {
    let (i, t) = (index as f64, t as f64);
    let steady = (t * 0.08 + i * 0.2).sin() * 0.3 + 0.7;
    let pulse = (t * 0.1).sin().powi(4) * 0.3;
    Rgb::splat(255.0, 190.0, 30.0, steady + pulse)
}

fn contemplation(index: usize, t: u64, _total: usize) -> Rgb {
    let (i, t) = (index as f64, t as f64);
    let wave1 = (t * 0.02 + i * 0.2).sin();
    let wave2 = (t * 0.03 + i * 0.3).sin();
    let interference = ((wave1 + wave2) * 0.5).max(0.0);
    Rgb::splat(90.0, 40.0, 200.0, interference)
}

fn peace(index: usize, t: u64, _total: usize) -> Rgb {
    let (i, t) = (index as f64, t as f64);
    let flow = (t * 0.02 + i * 0.1).sin() * 0.5 + 0.5;
    let secondary = (t * 0.015 + i * 0.15).sin() * 0.5 + 0.5;
    Rgb::new(
        140.0 * flow * 0.3,
        170.0 * (flow * 0.7 + secondary * 0.3),
        190.0 * (secondary * 0.7 + flow * 0.3),
    )
}

fn wonder(index: usize, t: u64, _total: usize) -> Rgb {
    let (i, t) = (index as f64, t as f64);
    let twinkle = (t * 0.1 + i * 0.5).sin().powi(2);
    let shooting_star = (t * 0.05 + i * 0.8).sin().powi(16);
    Rgb::splat(220.0, 220.0, 255.0, (twinkle * 0.6).max(shooting_star))
}

fn sadness(index: usize, t: u64, _total: usize) -> Rgb {
    let (i, t) = (index as f64, t as f64);
    let deep_wave = (t * 0.04 + i * 0.08).sin() * 0.3 + 0.4;
    let light_moment = (t * 0.02 + i * 0.1).sin().powi(4) * 0.2;
    Rgb::splat(20.0, 40.0, 160.0, deep_wave + light_moment)
}

fn fireflies(index: usize, t: u64, _total: usize) -> Rgb {
    let (i, t) = (index as f64, t as f64);
    let mut rng = rand::thread_rng();
    // Golden-angle phase offsets keep neighbours out of sync.
    let glow = (t * 0.05 + i * 2.399_963).sin().max(0.0).powi(6);
    let flicker = rng.gen_range(0.75..1.0);
    Rgb::splat(240.0, 210.0, 90.0, glow * flicker)
}

fn rainfall(index: usize, t: u64, total: usize) -> Rgb {
    let total_f = total as f64;
    let head = (t as f64 * 0.25) % total_f;
    let behind = (head - index as f64).rem_euclid(total_f);
    let trail = (-behind * 0.6).exp();
    let mut rng = rand::thread_rng();
    let splash = if rng.gen_bool(0.02) { 0.6 } else { 0.0 };
    let intensity = (trail + splash).min(1.0);
    Rgb::splat(90.0, 150.0, 230.0, intensity)
}

#[cfg(test)]
#[path = "../../tests/unit/patterns/palette.rs"]
mod tests;
