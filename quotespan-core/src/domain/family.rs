//! Quote family enumeration and activation registry.
//!
//! Each family is a class of delimiter glyphs considered interchangeable for
//! matching. Directional families carry visually distinct open and close
//! glyphs; symmetric families reuse one glyph for both roles and rely on a
//! positional heuristic during scanning.

use serde::{Deserialize, Serialize};

/// The closed set of delimiter families known to the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteFamily {
    /// Curly double quotes: “…”
    CurlyDouble,
    /// Curly single quotes: ‘…’
    CurlySingle,
    /// Guillemets: «…»
    Guillemet,
    /// CJK corner brackets: 「…」
    CjkCorner,
    /// CJK white corner brackets: 『…』
    CjkWhiteCorner,
    /// Low-high double quotes: „…“
    LowHigh,
    /// Straight ASCII double quotes: "…"
    StraightDouble,
    /// LaTeX-style backtick quotes: ``…''
    LatexBacktick,
    /// Straight ASCII single quotes: '…'
    StraightSingle,
}

/// How a family's glyphs are assigned open/close roles during a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MatchPolicy {
    /// Role is fixed by the glyph itself
    Directional,
    /// Role is decided by the boundary context around the glyph
    Positional,
}

impl QuoteFamily {
    /// Fixed preference order: smart directional families first, then the
    /// always-active ASCII families. Ties in the selector fall back to this.
    pub const PRIORITY: [QuoteFamily; 9] = [
        QuoteFamily::CurlyDouble,
        QuoteFamily::CurlySingle,
        QuoteFamily::Guillemet,
        QuoteFamily::CjkCorner,
        QuoteFamily::CjkWhiteCorner,
        QuoteFamily::LowHigh,
        QuoteFamily::StraightDouble,
        QuoteFamily::LatexBacktick,
        QuoteFamily::StraightSingle,
    ];

    /// Opening delimiter glyphs.
    pub fn open_glyphs(&self) -> &'static [char] {
        match self {
            QuoteFamily::CurlyDouble => &['\u{201C}'],
            QuoteFamily::CurlySingle => &['\u{2018}'],
            QuoteFamily::Guillemet => &['\u{00AB}'],
            QuoteFamily::CjkCorner => &['\u{300C}'],
            QuoteFamily::CjkWhiteCorner => &['\u{300E}'],
            QuoteFamily::LowHigh => &['\u{201E}'],
            QuoteFamily::StraightDouble => &['"'],
            QuoteFamily::LatexBacktick => &['`', '`'],
            QuoteFamily::StraightSingle => &['\''],
        }
    }

    /// Closing delimiter glyphs.
    pub fn close_glyphs(&self) -> &'static [char] {
        match self {
            QuoteFamily::CurlyDouble => &['\u{201D}'],
            QuoteFamily::CurlySingle => &['\u{2019}'],
            QuoteFamily::Guillemet => &['\u{00BB}'],
            QuoteFamily::CjkCorner => &['\u{300D}'],
            QuoteFamily::CjkWhiteCorner => &['\u{300F}'],
            QuoteFamily::LowHigh => &['\u{201C}'],
            QuoteFamily::StraightDouble => &['"'],
            QuoteFamily::LatexBacktick => &['\'', '\''],
            QuoteFamily::StraightSingle => &['\''],
        }
    }

    /// Whether open and close are visually distinct glyphs (data-model
    /// classification). Note `LatexBacktick` is non-directional here even
    /// though its scan roles are glyph-fixed.
    pub fn is_directional(&self) -> bool {
        !matches!(
            self,
            QuoteFamily::StraightDouble | QuoteFamily::StraightSingle | QuoteFamily::LatexBacktick
        )
    }

    /// Whether the family is gated behind the `smart_quotes` option.
    pub fn is_smart(&self) -> bool {
        matches!(
            self,
            QuoteFamily::CurlyDouble
                | QuoteFamily::CurlySingle
                | QuoteFamily::Guillemet
                | QuoteFamily::CjkCorner
                | QuoteFamily::CjkWhiteCorner
                | QuoteFamily::LowHigh
        )
    }

    pub(crate) fn policy(&self) -> MatchPolicy {
        match self {
            // The latex pair has distinct open/close strings, so its roles
            // need no boundary context.
            QuoteFamily::StraightDouble | QuoteFamily::StraightSingle => MatchPolicy::Positional,
            _ => MatchPolicy::Directional,
        }
    }

    /// Rank in [`QuoteFamily::PRIORITY`]; lower is preferred.
    pub(crate) fn priority_rank(&self) -> usize {
        Self::PRIORITY
            .iter()
            .position(|f| f == self)
            .unwrap_or(Self::PRIORITY.len())
    }
}

impl std::fmt::Display for QuoteFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            QuoteFamily::CurlyDouble => "curly_double",
            QuoteFamily::CurlySingle => "curly_single",
            QuoteFamily::Guillemet => "guillemet",
            QuoteFamily::CjkCorner => "cjk_corner",
            QuoteFamily::CjkWhiteCorner => "cjk_white_corner",
            QuoteFamily::LowHigh => "low_high",
            QuoteFamily::StraightDouble => "straight_double",
            QuoteFamily::LatexBacktick => "latex_backtick",
            QuoteFamily::StraightSingle => "straight_single",
        };
        write!(f, "{name}")
    }
}

/// Activation table over the fixed family set, driven by configuration.
///
/// Querying an inactive family is simply "not a delimiter": it never appears
/// in [`FamilyRegistry::active`] and so never reaches the matcher.
#[derive(Debug, Clone)]
pub struct FamilyRegistry {
    active: Vec<QuoteFamily>,
}

impl FamilyRegistry {
    /// Build the activation table from the two family-gating options.
    pub fn new(single_quotes: bool, smart_quotes: bool) -> Self {
        let active = QuoteFamily::PRIORITY
            .iter()
            .copied()
            .filter(|family| match family {
                QuoteFamily::StraightDouble | QuoteFamily::LatexBacktick => true,
                QuoteFamily::StraightSingle => single_quotes,
                smart => smart.is_smart() && smart_quotes,
            })
            .collect();
        Self { active }
    }

    /// Active families in fixed priority order.
    pub fn active(&self) -> &[QuoteFamily] {
        &self.active
    }

    /// Families permitted inside a span of `parent`: every other active
    /// family, plus `parent` itself when same-family embedding is allowed.
    pub fn permitted_inside(
        &self,
        parent: QuoteFamily,
        allow_embedded_same: bool,
    ) -> impl Iterator<Item = QuoteFamily> + '_ {
        self.active
            .iter()
            .copied()
            .filter(move |&f| allow_embedded_same || f != parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_activation() {
        let registry = FamilyRegistry::new(false, false);
        assert_eq!(
            registry.active(),
            &[QuoteFamily::StraightDouble, QuoteFamily::LatexBacktick]
        );
    }

    #[test]
    fn test_single_quote_activation() {
        let registry = FamilyRegistry::new(true, false);
        assert!(registry.active().contains(&QuoteFamily::StraightSingle));
        assert!(!registry.active().contains(&QuoteFamily::CurlyDouble));
    }

    #[test]
    fn test_smart_activation_keeps_priority_order() {
        let registry = FamilyRegistry::new(true, true);
        assert_eq!(registry.active(), &QuoteFamily::PRIORITY);
    }

    #[test]
    fn test_permitted_inside_excludes_same_family() {
        let registry = FamilyRegistry::new(true, false);
        let inside: Vec<_> = registry
            .permitted_inside(QuoteFamily::StraightDouble, false)
            .collect();
        assert_eq!(
            inside,
            vec![QuoteFamily::LatexBacktick, QuoteFamily::StraightSingle]
        );

        let inside_same: Vec<_> = registry
            .permitted_inside(QuoteFamily::StraightDouble, true)
            .collect();
        assert!(inside_same.contains(&QuoteFamily::StraightDouble));
    }

    #[test]
    fn test_directionality_classification() {
        assert!(QuoteFamily::CurlyDouble.is_directional());
        assert!(QuoteFamily::CjkCorner.is_directional());
        assert!(!QuoteFamily::StraightDouble.is_directional());
        assert!(!QuoteFamily::LatexBacktick.is_directional());
        // Glyph-fixed scan roles despite the data-model classification
        assert_eq!(QuoteFamily::LatexBacktick.policy(), MatchPolicy::Directional);
    }
}
