//! Relevance classification of recognized text.
//!
//! A page is worth extracting from when its OCR text mentions any term from a
//! fixed shooting/crime vocabulary. This is a set-membership OR over
//! case-insensitive substring matches: no scoring, no stemming, and no word
//! boundaries, so "killed" also matches inside longer tokens. The imprecision
//! trades precision for recall, which suits an archival sweep where missed
//! pages are worse than false positives.

/// Vocabulary of terms that mark recognized text as topically relevant.
///
/// Matched case-insensitively as substrings. Exposed for tests and for
/// auditing what the classifier considers relevant.
pub const RELEVANCE_TERMS: &[&str] = &[
    "multiple counts",
    "multiple dead",
    "multiple homicide",
    "multiple murder",
    "multiple shot",
    "murder",
    "murdered",
    "murdering",
    "murderer",
    "murder suicide",
    "quadruple homicide",
    "quadruple murder",
    "rage",
    "rampage",
    "retaliation",
    "revenge",
    "rifle",
    "serial killer",
    "serial murder",
    "shoot",
    "shooter",
    "shooting",
    "shot",
    "shot dead",
    "shotgun",
    "slain",
    "slay",
    "slayed",
    "slaying",
    "slaughter",
    "slaughtered",
    "spree",
    "stand-off",
    "standoff",
    "suicide",
    "suspect dead",
    "tragedy",
    "tragic",
    "wound",
    "wounded",
    "wounding",
    "altercation",
    "bullet",
    "bullets",
    "casing",
    "casings",
    "dead",
    "deadly",
    "death",
    "deaths",
    "death penalty",
    "death sentence",
    "domestic",
    "dispute",
    "drive-by",
    "drug related",
    "erupted",
    "execution",
    "executed",
    "family killing",
    "family murder",
    "fatal",
    "fatality",
    "fatalities",
    "gun",
    "gunfire",
    "guns",
    "gunman",
    "gunmen",
    "gunned down",
    "gunshot",
    "handgun",
    "heinous",
    "kill",
    "killed",
    "killing",
    "killer",
    "life sentence",
    "mass murder",
    "mass shooting",
    "massacre",
    "massacred",
];

/// Decide whether a block of recognized text is topically relevant to a
/// shooting incident.
///
/// Lower-cases the text once and returns `true` on the first vocabulary hit.
/// Pure and deterministic; empty input is never relevant.
///
/// # Example
///
/// ```rust
/// use incidex::classify::is_relevant;
///
/// assert!(is_relevant("The suspect surrendered after a standoff."));
/// assert!(!is_relevant("City council approves new park budget."));
/// ```
pub fn is_relevant(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }

    let lowered = text.to_lowercase();
    RELEVANCE_TERMS.iter().any(|term| lowered.contains(term))
}
