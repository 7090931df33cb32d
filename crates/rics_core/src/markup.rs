//! Rich-text markup translation and pawn placeholder substitution.
//!
//! # Responsibility
//! - Translate the embedded tag dialect (`<color=#..>`, `<b>`, `<i>`) into
//!   display markup (`<span style="color: #..">`, `<strong>`, `<em>`).
//! - Resolve `{PAWN_x}` / `[PAWN_x]` placeholders to a fixed stand-in pawn.
//!
//! # Invariants
//! - Text without markup passes through unchanged.
//! - Color spans are resolved before bold/italic.
//! - Translator output is wrapped in [`TrustedMarkup`]; escaping everything
//!   else stays with the rendering surface.
//! - Unrecognized placeholders are left verbatim.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;
use std::fmt::{Display, Formatter};

static COLOR_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<color=#([0-9a-f]{6}(?:[0-9a-f]{2})?)>(.*?)</color>")
        .expect("valid color tag regex")
});
static BOLD_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<b>(.*?)</b>").expect("valid bold tag regex"));
static ITALIC_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<i>(.*?)</i>").expect("valid italic tag regex"));
static PAWN_PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{PAWN_(\w+)\}|\[PAWN_(\w+)\]").expect("valid pawn placeholder regex")
});

/// Stand-in name used for every pawn identity placeholder.
pub const STAND_IN_PAWN_NAME: &str = "Timmy";

/// Display markup produced by [`translate`].
///
/// Rendering surfaces emit this verbatim instead of escaping it. Only the
/// color, bold and italic tags are translated; every other character of the
/// source text, including `<`, `>` and `&`, is carried through unescaped.
/// Surfaces that cannot trust their source documents must sanitize before
/// emitting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TrustedMarkup(String);

impl TrustedMarkup {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for TrustedMarkup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Translates embedded rich-text tags into display markup.
pub fn translate(text: &str) -> TrustedMarkup {
    let colored = COLOR_TAG_RE.replace_all(text, r#"<span style="color: #${1}">${2}</span>"#);
    let bold = BOLD_TAG_RE.replace_all(&colored, "<strong>${1}</strong>");
    let italic = ITALIC_TAG_RE.replace_all(&bold, "<em>${1}</em>");
    TrustedMarkup(italic.into_owned())
}

/// Translates every entry of a text list.
pub fn translate_all(lines: &[String]) -> Vec<TrustedMarkup> {
    lines.iter().map(|line| translate(line)).collect()
}

/// Resolves pawn placeholders in both bracket styles.
pub fn substitute_placeholders(text: &str) -> String {
    PAWN_PLACEHOLDER_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let token = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map_or("", |token| token.as_str());
            match pawn_stand_in(token) {
                Some(replacement) => replacement.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn pawn_stand_in(token: &str) -> Option<&'static str> {
    match token {
        "name" | "nameDef" | "label" | "def" => Some(STAND_IN_PAWN_NAME),
        "pronoun" => Some("he"),
        "possessive" => Some("his"),
        "objective" => Some("him"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{substitute_placeholders, translate};

    #[test]
    fn color_tag_becomes_colored_span() {
        let markup = translate("<color=#FF0000>Danger</color>");
        assert_eq!(
            markup.as_str(),
            r#"<span style="color: #FF0000">Danger</span>"#
        );
        assert!(!markup.as_str().contains("<color"));
    }

    #[test]
    fn color_with_alpha_channel_is_accepted() {
        let markup = translate("<COLOR=#00ff0080>ok</COLOR>");
        assert_eq!(markup.as_str(), r#"<span style="color: #00ff0080">ok</span>"#);
    }

    #[test]
    fn malformed_color_is_left_alone() {
        let text = "<color=#12>short</color>";
        assert_eq!(translate(text).as_str(), text);
    }

    #[test]
    fn bold_inside_color_is_translated_after_color() {
        let markup = translate("<color=#112233><b>Hot</b></color> and <i>cold</i>");
        assert_eq!(
            markup.as_str(),
            r#"<span style="color: #112233"><strong>Hot</strong></span> and <em>cold</em>"#
        );
    }

    #[test]
    fn plain_text_is_unchanged() {
        let text = "Fish & chips < 5 silver";
        assert_eq!(translate(text).as_str(), text);
    }

    #[test]
    fn unrecognized_tags_pass_through_unescaped() {
        let markup = translate("<script>x</script> <b>ok</b>");
        assert_eq!(markup.as_str(), "<script>x</script> <strong>ok</strong>");
    }

    #[test]
    fn placeholders_resolve_in_both_bracket_styles() {
        assert_eq!(
            substitute_placeholders("{PAWN_name} likes {PAWN_possessive} books"),
            "Timmy likes his books"
        );
        assert_eq!(
            substitute_placeholders("[PAWN_pronoun] hugs [PAWN_objective]self, [PAWN_nameDef]"),
            "he hugs himself, Timmy"
        );
    }

    #[test]
    fn unknown_or_mismatched_placeholders_stay_verbatim() {
        assert_eq!(
            substitute_placeholders("{PAWN_weird} and {PAWN_name] stay"),
            "{PAWN_weird} and {PAWN_name] stay"
        );
    }
}
