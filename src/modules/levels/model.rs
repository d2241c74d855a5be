//! Level classification keyword table.
//!
//! Institutions name their classes freely ("CM2 B", "6ème A", "Tle C2"), so
//! the pedagogical level is derived by ordered substring matching against
//! this table. The table is configuration data: when an institution renames
//! its labels, the vocabulary changes here and nowhere else.

use scolaris_models::SchoolLevel;

/// One keyword rule. Matching is case-insensitive substring containment.
#[derive(Debug, Clone, Copy)]
pub struct LevelKeyword {
    pub keyword: &'static str,
    pub level: SchoolLevel,
}

const fn kw(keyword: &'static str, level: SchoolLevel) -> LevelKeyword {
    LevelKeyword { keyword, level }
}

/// Ordered, first-match-wins. Longer and more specific tokens come first:
/// "1er-cycle" (lower secondary) must win over "1ere" (upper secondary),
/// and every named token must win over the bare grade digits at the end.
pub const LEVEL_KEYWORDS: &[LevelKeyword] = &[
    // Maternelle
    kw("maternelle", SchoolLevel::EarlyChildhood),
    // Primaire
    kw("primaire", SchoolLevel::Primary),
    kw("elementaire", SchoolLevel::Primary),
    kw("élémentaire", SchoolLevel::Primary),
    kw("cm1", SchoolLevel::Primary),
    kw("cm2", SchoolLevel::Primary),
    kw("ce1", SchoolLevel::Primary),
    kw("ce2", SchoolLevel::Primary),
    kw("cp", SchoolLevel::Primary),
    // Cycle markers before the short grade tokens they contain.
    kw("1er-cycle", SchoolLevel::LowerSecondary),
    kw("1er cycle", SchoolLevel::LowerSecondary),
    kw("premier cycle", SchoolLevel::LowerSecondary),
    kw("2nd-cycle", SchoolLevel::UpperSecondary),
    kw("2nd cycle", SchoolLevel::UpperSecondary),
    kw("second cycle", SchoolLevel::UpperSecondary),
    kw("college", SchoolLevel::LowerSecondary),
    kw("collège", SchoolLevel::LowerSecondary),
    kw("lycee", SchoolLevel::UpperSecondary),
    kw("lycée", SchoolLevel::UpperSecondary),
    // Lycée grades
    kw("2nde", SchoolLevel::UpperSecondary),
    kw("seconde", SchoolLevel::UpperSecondary),
    kw("1ere", SchoolLevel::UpperSecondary),
    kw("1ère", SchoolLevel::UpperSecondary),
    kw("premiere", SchoolLevel::UpperSecondary),
    kw("première", SchoolLevel::UpperSecondary),
    kw("tle", SchoolLevel::UpperSecondary),
    kw("terminale", SchoolLevel::UpperSecondary),
    // Collège grades, bare digits last
    kw("6", SchoolLevel::LowerSecondary),
    kw("5", SchoolLevel::LowerSecondary),
    kw("4", SchoolLevel::LowerSecondary),
    kw("3", SchoolLevel::LowerSecondary),
];

/// Bucket for labels the table does not recognize. Upper secondary is the
/// most general: widest subject catalog and no fixed-room binding imposed.
pub const FALLBACK_LEVEL: SchoolLevel = SchoolLevel::UpperSecondary;
