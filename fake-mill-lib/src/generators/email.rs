use rand::Rng;
use serde::Serialize;

use crate::reference::names::{FIRST_NAMES, LAST_NAMES};
use crate::reference::random_domain;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Email {
    pub email: String,
    pub username: String,
    pub domain: String,
}

/// Address with a name-based username at `domain`, or at a random built-in domain.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, domain: Option<&str>) -> Email {
    let domain = match domain {
        Some(d) => d.to_string(),
        None => random_domain(rng),
    };
    let username = username(rng);
    Email { email: format!("{username}@{domain}"), username, domain }
}

fn username<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = fold_accents(FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())]).to_lowercase();
    let last = fold_accents(LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())]).to_lowercase();

    let style = rng.gen_range(0..6);
    let mut name = match style {
        0 => format!("{first}.{last}"),
        1 => format!("{first}_{last}"),
        2 => match last.chars().next() {
            Some(initial) => format!("{first}{initial}"),
            None => first.clone(),
        },
        3 => first.clone(),
        4 => format!("{first}{}", rng.gen_range(85..120)),
        _ if first.chars().count() > 3 && last.chars().count() > 2 => {
            let short: String = first.chars().take(3).collect();
            let surname: String = last.chars().take(3).collect();
            format!("{short}_{surname}")
        }
        _ => format!("{first}.{last}"),
    };

    if rng.gen_range(0..100) < 70 {
        if style == 4 {
            if rng.gen_bool(0.5) {
                name.push_str(&rng.gen_range(1..100).to_string());
            }
        } else {
            let suffix = if rng.gen_range(0..100) < 60 {
                rng.gen_range(1..100)
            } else {
                rng.gen_range(1..1000)
            };
            name.push_str(&suffix.to_string());
        }
    }

    sanitize(rng, &name)
}

fn fold_accents(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'á' | 'à' | 'ã' | 'â' | 'ä' => 'a',
            'Á' | 'À' | 'Ã' | 'Â' | 'Ä' => 'A',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'É' | 'È' | 'Ê' | 'Ë' => 'E',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
            'ó' | 'ò' | 'õ' | 'ô' | 'ö' => 'o',
            'Ó' | 'Ò' | 'Õ' | 'Ô' | 'Ö' => 'O',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
            'ç' => 'c',
            'Ç' => 'C',
            'ñ' => 'n',
            'Ñ' => 'N',
            other => other,
        })
        .collect()
}

/// Lowercase `[a-z0-9._-]` only, no leading/trailing separator, no `..`, at least 3 chars.
fn sanitize<R: Rng + ?Sized>(rng: &mut R, raw: &str) -> String {
    let kept: String = raw
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '-' | '_'))
        .collect();
    let mut out = kept.trim_matches(|c| matches!(c, '.' | '-' | '_')).to_string();

    if out.len() < 3 {
        out = format!("user{}", rng.gen_range(1000..11_000));
    }
    while out.contains("..") {
        out = out.replace("..", ".");
    }
    out
}
