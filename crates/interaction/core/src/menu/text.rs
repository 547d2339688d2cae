use strum::{AsRefStr, Display, EnumString};

/// How menu text is compared against what the caller asked for.
///
/// Both menu flows share one policy so a lookup never silently changes
/// strictness depending on which caller made it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MatchPolicy {
    /// Normalized text must be equal.
    #[default]
    Exact,
    /// Normalized text must contain the expected fragment.
    Contains,
}

impl MatchPolicy {
    /// Compares two already-normalized strings.
    pub fn matches(self, candidate: &str, expected: &str) -> bool {
        match self {
            MatchPolicy::Exact => candidate == expected,
            MatchPolicy::Contains => candidate.contains(expected),
        }
    }
}

/// Strips `<...>` markup, collapses whitespace runs, trims and lowercases.
pub fn normalize(text: &str) -> String {
    let mut stripped = String::with_capacity(text.len());
    let mut in_tag = false;
    for ch in text.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => stripped.push(ch),
            _ => {}
        }
    }

    stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_markup_and_case() {
        assert_eq!(normalize("Take <col=ff9040>Bones</col>"), "take bones");
        assert_eq!(normalize("  <col=ffff00>Bank</col>  booth "), "bank booth");
        assert_eq!(normalize("Cancel"), "cancel");
    }

    #[test]
    fn unterminated_tag_drops_the_rest() {
        assert_eq!(normalize("Use <col=ff"), "use");
    }

    #[test]
    fn policies_differ_on_partial_text() {
        assert!(MatchPolicy::Exact.matches("take bones", "take bones"));
        assert!(!MatchPolicy::Exact.matches("take big bones", "take bones"));
        assert!(MatchPolicy::Contains.matches("take big bones", "bones"));
    }

    #[test]
    fn policy_parses_from_config_strings() {
        assert_eq!("exact".parse::<MatchPolicy>(), Ok(MatchPolicy::Exact));
        assert_eq!("Contains".parse::<MatchPolicy>(), Ok(MatchPolicy::Contains));
        assert!("fuzzy".parse::<MatchPolicy>().is_err());
        assert_eq!(MatchPolicy::Contains.to_string(), "contains");
    }
}
