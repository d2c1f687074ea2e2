//! Neutral-language enforcement for any human-readable measurement text.
//!
//! The product invariant is that no output ever contains judgmental
//! vocabulary. Two surfaces enforce it: [`sanitize`] rewrites the
//! replaceable terms, and [`contains_banned_terms`] lints against the
//! full blocklist. The blocklist is wider than the replacement map, so
//! a sanitized string can still fail the lint; the lint is a
//! pre-publication check, not a post-sanitize guarantee.

/// Judgment-laden vocabulary that must never reach the user.
pub const BANNED_TERMS: &[&str] = &[
    "flaw",
    "ugly",
    "defect",
    "abnormal",
    "crooked",
    "bad",
    "wrong",
    "unattractive",
    "deformed",
    "misshapen",
    "inferior",
    "unsightly",
    "hideous",
    "imperfect",
    "weird",
];

/// Deterministic substitutions applied by [`sanitize`], in order.
///
/// Replacement text must introduce no banned term and no earlier map
/// key, which keeps [`sanitize`] idempotent.
pub const REPLACEMENTS: &[(&str, &str)] = &[
    ("crooked", "deviated"),
    ("abnormal", "atypical"),
    ("deformed", "shaped differently"),
    ("wrong", "atypical"),
    ("bad", "atypical"),
];

/// Case-insensitive substring replacement. Terms are ASCII, so byte
/// offsets in the lowercased copy line up with the original.
fn replace_all_case_insensitive(text: &str, term: &str, replacement: &str) -> String {
    let haystack = text.to_ascii_lowercase();
    let needle = term.to_ascii_lowercase();
    let mut result = String::with_capacity(text.len());
    let mut cursor = 0;
    while let Some(offset) = haystack[cursor..].find(&needle) {
        let start = cursor + offset;
        result.push_str(&text[cursor..start]);
        result.push_str(replacement);
        cursor = start + needle.len();
    }
    result.push_str(&text[cursor..]);
    result
}

/// Applies every replacement-map entry as a case-insensitive substring
/// substitution. Idempotent: sanitizing twice equals sanitizing once.
pub fn sanitize(text: &str) -> String {
    REPLACEMENTS
        .iter()
        .fold(text.to_string(), |acc, (term, replacement)| {
            replace_all_case_insensitive(&acc, term, replacement)
        })
}

/// Lints text against the full blocklist (case-insensitive substring
/// membership). Meant to gate publication of generated copy.
pub fn contains_banned_terms(text: &str) -> bool {
    let haystack = text.to_ascii_lowercase();
    BANNED_TERMS.iter().any(|term| haystack.contains(term))
}

/// Standard neutral sentence for one measurement value.
///
/// States the value and whether it sits within the typical range, then
/// closes with natural-variation wording. Never a comparative judgment.
pub fn neutral_description(
    name: &str,
    value: f64,
    unit: &str,
    typical_min: f64,
    typical_max: f64,
) -> String {
    let placement = if value >= typical_min && value <= typical_max {
        "within"
    } else {
        "outside"
    };
    format!(
        "{name} measures {value:.1} {unit}, {placement} the typical range of \
         {typical_min:.1} to {typical_max:.1}. This is natural variation."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // ── sanitize ────────────────────────────────────────────────────

    #[rstest]
    #[case("a crooked line", "a deviated line")]
    #[case("Bad lighting", "atypical lighting")]
    #[case("ABNORMAL reading", "atypical reading")]
    #[case("nothing to change", "nothing to change")]
    fn test_sanitize_replacements(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize(input), expected);
    }

    #[test]
    fn test_sanitize_replaces_every_occurrence() {
        assert_eq!(sanitize("bad, bad, bad"), "atypical, atypical, atypical");
    }

    #[test]
    fn test_sanitize_preserves_surrounding_text() {
        assert_eq!(
            sanitize("The Crooked angle is wrong."),
            "The deviated angle is atypical."
        );
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let inputs = [
            "a crooked, abnormal, deformed, wrong and bad description",
            "already neutral text",
            "Badly crooked",
        ];
        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_replacement_text_is_clean() {
        // The map's outputs must themselves survive both checks,
        // otherwise idempotence breaks.
        for (_, replacement) in REPLACEMENTS {
            assert_eq!(sanitize(replacement), *replacement);
            assert!(!contains_banned_terms(replacement));
        }
    }

    // ── banned-term lint ────────────────────────────────────────────

    #[rstest]
    #[case::direct("that is a flaw", true)]
    #[case::uppercase("UGLY", true)]
    #[case::embedded("flawless finish", true)]
    #[case::clean("a neutral sentence", false)]
    fn test_contains_banned_terms(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(contains_banned_terms(input), expected);
    }

    #[test]
    fn test_blocklist_is_wider_than_replacement_map() {
        // "unsightly" is banned but has no replacement; sanitize leaves
        // it alone and the lint still flags it.
        let text = "an unsightly result";
        assert_eq!(sanitize(text), text);
        assert!(contains_banned_terms(text));
    }

    // ── neutral description ─────────────────────────────────────────

    #[test]
    fn test_description_within_typical_range() {
        let text = neutral_description("Facial symmetry", 87.2, "points", 60.0, 95.0);
        assert_eq!(
            text,
            "Facial symmetry measures 87.2 points, within the typical range of \
             60.0 to 95.0. This is natural variation."
        );
    }

    #[test]
    fn test_description_outside_typical_range() {
        let text = neutral_description("Canthal tilt", 12.0, "degrees", -2.0, 8.0);
        assert!(text.contains("outside the typical range"));
        assert!(text.ends_with("This is natural variation."));
    }

    #[test]
    fn test_description_range_bounds_are_inclusive() {
        let text = neutral_description("Jaw definition", 85.0, "points", 30.0, 85.0);
        assert!(text.contains("within"));
    }

    #[test]
    fn test_descriptions_pass_the_lint() {
        let text = neutral_description("Cheekbone prominence", 42.0, "points", 30.0, 85.0);
        assert!(!contains_banned_terms(&text));
        assert_eq!(sanitize(&text), text);
    }
}
