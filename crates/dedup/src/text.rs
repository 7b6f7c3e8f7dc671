use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Returned by [`capacity_diff_pct`] when either capacity is missing,
/// so a null capacity can never pass a difference threshold.
pub const CAPACITY_DIFF_SENTINEL: f64 = 100.0;

// Everything outside ASCII word characters and the CJK ideograph range
// is dropped during normalization.
static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9_\u{4e00}-\u{9fff}]").expect("valid regex"));

static ROAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\u{4e00}-\u{9fff}]{1,8}(?:路|街|大道)").expect("valid regex"));
static SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9一二三四五六七八九十]+段").expect("valid regex"));
static LANE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+巷").expect("valid regex"));
static ALLEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+弄").expect("valid regex"));
static LOT_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+(?:之[0-9]+)?號").expect("valid regex"));

/// Lowercase, strip everything outside word characters and the CJK
/// range, trim.
pub fn normalize(input: &str) -> String {
    let lowered = input.to_lowercase();
    NON_WORD.replace_all(&lowered, "").trim().to_string()
}

/// Bigram (Sørensen–Dice) similarity over the normalized strings.
/// 0.0 when either side normalizes to empty; 1.0 for an exact
/// normalized match; 0.0 when either side is shorter than two
/// characters and not an exact match.
pub fn text_similarity(a: &str, b: &str) -> f64 {
    let na = normalize(a);
    let nb = normalize(b);
    if na.is_empty() || nb.is_empty() {
        return 0.0;
    }
    strsim::sorensen_dice(&na, &nb)
}

/// The road token keeps only what follows the last administrative
/// boundary character, so "桃園市平鎮區中正路" and "中正路" compare equal.
fn trim_admin_prefix(token: &str) -> String {
    let cut = token
        .char_indices()
        .rev()
        .find(|(_, c)| matches!(c, '市' | '縣' | '區' | '鄉' | '鎮' | '村' | '里'))
        .map(|(i, c)| i + c.len_utf8());
    match cut {
        Some(pos) if pos < token.len() => token[pos..].to_string(),
        _ => token.to_string(),
    }
}

/// Extract road, lot-section, lane, alley and lot-number tokens from an
/// address. Operates on the normalized form.
pub fn address_tokens(address: &str) -> BTreeSet<String> {
    let normalized = normalize(address);
    let mut tokens = BTreeSet::new();

    if let Some(m) = ROAD.find(&normalized) {
        tokens.insert(trim_admin_prefix(m.as_str()));
    }
    for re in [&*SECTION, &*LANE, &*ALLEY, &*LOT_NUMBER] {
        for m in re.find_iter(&normalized) {
            tokens.insert(m.as_str().to_string());
        }
    }

    tokens
}

/// Shared tokens divided by the larger token-set size.
pub fn token_overlap(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let shared = a.intersection(b).count();
    shared as f64 / a.len().max(b.len()) as f64
}

/// Address similarity: token overlap when both addresses yield
/// structured tokens, bigram similarity of the normalized strings
/// otherwise.
pub fn address_similarity(a: &str, b: &str) -> f64 {
    let na = normalize(a);
    let nb = normalize(b);
    if na.is_empty() || nb.is_empty() {
        return 0.0;
    }

    let ta = address_tokens(a);
    let tb = address_tokens(b);
    if !ta.is_empty() && !tb.is_empty() {
        token_overlap(&ta, &tb)
    } else {
        strsim::sorensen_dice(&na, &nb)
    }
}

/// Percentage difference between two capacities, relative to their
/// mean. Returns [`CAPACITY_DIFF_SENTINEL`] when either value is
/// missing.
pub fn capacity_diff_pct(a: Option<f64>, b: Option<f64>) -> f64 {
    match (a, b) {
        (Some(x), Some(y)) => {
            let avg = (x + y) / 2.0;
            if avg == 0.0 {
                if x == y {
                    0.0
                } else {
                    CAPACITY_DIFF_SENTINEL
                }
            } else {
                (x - y).abs() / avg * 100.0
            }
        }
        _ => CAPACITY_DIFF_SENTINEL,
    }
}
