use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

const ONSETS: &[&str] = &[
    "v", "k", "t", "br", "tr", "kh", "m", "d", "z", "ph", "n", "sol", "cer",
];
const VOWELS: &[&str] = &["a", "e", "i", "o", "u", "ei", "au", "yo"];
const ENDINGS: &[&str] = &[
    "on", "ara", "is", "eus", "ax", "ia", "or", "es", "ul", "ium", "antha",
];

fn pick<'a>(rng: &mut ChaCha8Rng, options: &'a [&str]) -> &'a str {
    let idx = rng.gen_range(0..options.len());
    options[idx]
}

fn build_candidate(rng: &mut ChaCha8Rng) -> String {
    // Short phoneme patterns keep the names pronounceable.
    match rng.gen_range(0..3) {
        0 => format!(
            "{}{}{}",
            pick(rng, ONSETS),
            pick(rng, VOWELS),
            pick(rng, ENDINGS)
        ),
        1 => format!(
            "{}{}{}{}{}",
            pick(rng, ONSETS),
            pick(rng, VOWELS),
            pick(rng, ONSETS),
            pick(rng, VOWELS),
            pick(rng, ENDINGS)
        ),
        _ => format!(
            "{}{} {}",
            pick(rng, ONSETS),
            pick(rng, ENDINGS),
            rng.gen_range(1..=999)
        ),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_ascii_uppercase(), chars.collect::<String>()),
        None => String::new(),
    }
}

/// Draws a system name nobody in the batch has used yet.
pub fn generate_system_name(rng: &mut ChaCha8Rng, used: &mut HashSet<String>) -> String {
    for _ in 0..200 {
        let candidate = capitalize(&build_candidate(rng));
        if candidate.is_empty() {
            continue;
        }
        if used.insert(candidate.clone()) {
            return candidate;
        }
    }

    // Phoneme space exhausted; fall back to numbered sectors.
    let mut n = used.len() + 1;
    loop {
        let fallback = format!("Sector {}", n);
        if used.insert(fallback.clone()) {
            return fallback;
        }
        n += 1;
    }
}

/// Keeps alphanumerics, `_` and `-`; everything else (spaces included)
/// becomes `_`. Matches what the game tolerates in map filenames.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
