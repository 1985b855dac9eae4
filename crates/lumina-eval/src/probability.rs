//! The fixed, case-insensitive probability-name table.
//!
//! 101 entries, one per percentile from `TRUE` (100%) down to `FALSE`
//! (0%). Two names recur at two distinct percentages each
//! (`BARELYLIKELY`, `PROBABLYNOT`); the lookup table below is built by
//! walking the raw rows from 100 down to 0 and keeping the first
//! (highest-percentage) occurrence of each name, so:
//!
//! - `BARELYLIKELY` resolves to 0.60 (not its second occurrence at 0.52).
//! - `PROBABLYNOT` resolves to 0.41 (not its second occurrence at 0.23).
//!
//! `MAYBE` has a single entry at 0.50 and is therefore unambiguous.

use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// `(percentile, name)` rows, ordered from `TRUE` at 100 down to `FALSE`
/// at 0. Duplicate names appear verbatim; resolution order is handled by
/// [`table`].
const ROWS: &[(u8, &str)] = &[
    (100, "TRUE"),
    (99, "ABSOLUTELY"),
    (98, "CERTAINLY"),
    (97, "DEFINITELY"),
    (96, "UNDOUBTEDLY"),
    (95, "ASSUREDLY"),
    (94, "SURELY"),
    (93, "UNQUESTIONABLY"),
    (92, "INDUBITABLY"),
    (91, "INEVITABLY"),
    (90, "ALMOSTCERTAIN"),
    (89, "NEARLYCERTAIN"),
    (88, "HIGHLYPROBABLE"),
    (87, "VERYLIKELY"),
    (86, "EXTREMELYLIKELY"),
    (85, "HIGHLYLIKELY"),
    (84, "STRONGLYLIKELY"),
    (83, "QUITELIKELY"),
    (82, "REALLYLIKELY"),
    (81, "PRETTYLIKELY"),
    (80, "LIKELY"),
    (79, "PROBABLE"),
    (78, "PROBABLY"),
    (77, "MOSTLIKELY"),
    (76, "CHIEFLYLIKELY"),
    (75, "LARGELYLIKELY"),
    (74, "CONSIDERABLYLIKELY"),
    (73, "SUBSTANTIALLYLIKELY"),
    (72, "REASONABLYLIKELY"),
    (71, "FAIRLYLIKELY"),
    (70, "MODERATELYLIKELY"),
    (69, "DECENTLYLIKELY"),
    (68, "MOSTLYLIKELY"),
    (67, "PARTLYLIKELY"),
    (66, "SOMEWHATLIKELY"),
    (65, "SOMEWHATPROBABLE"),
    (64, "KINDALIKELY"),
    (63, "SORTOFLIKELY"),
    (62, "MILDLYLIKELY"),
    (61, "SLIGHTLYLIKELY"),
    (60, "BARELYLIKELY"),
    (59, "FAINTLYLIKELY"),
    (58, "WEAKLYLIKELY"),
    (57, "THINLYLIKELY"),
    (56, "MARGINALLYLIKELY"),
    (55, "NARROWLYLIKELY"),
    (54, "HINTOFLIKELY"),
    (53, "TOUCHOFLIKELY"),
    (52, "BARELYLIKELY"),
    (51, "JUSTABOVEEVEN"),
    (50, "MAYBE"),
    (49, "JUSTBELOWEVEN"),
    (48, "TOUCHOFUNLIKELY"),
    (47, "HINTOFUNLIKELY"),
    (46, "NARROWLYUNLIKELY"),
    (45, "MARGINALLYUNLIKELY"),
    (44, "THINLYUNLIKELY"),
    (43, "WEAKLYUNLIKELY"),
    (42, "FAINTLYUNLIKELY"),
    (41, "PROBABLYNOT"),
    (40, "SLIGHTLYUNLIKELY"),
    (39, "MILDLYUNLIKELY"),
    (38, "SORTOFUNLIKELY"),
    (37, "KINDAUNLIKELY"),
    (36, "SOMEWHATIMPROBABLE"),
    (35, "SOMEWHATUNLIKELY"),
    (34, "PARTLYUNLIKELY"),
    (33, "MOSTLYUNLIKELY"),
    (32, "DECENTLYUNLIKELY"),
    (31, "MODERATELYUNLIKELY"),
    (30, "FAIRLYUNLIKELY"),
    (29, "REASONABLYUNLIKELY"),
    (28, "SUBSTANTIALLYUNLIKELY"),
    (27, "CONSIDERABLYUNLIKELY"),
    (26, "LARGELYUNLIKELY"),
    (25, "CHIEFLYUNLIKELY"),
    (24, "MOSTUNLIKELY"),
    (23, "PROBABLYNOT"),
    (22, "IMPROBABLE"),
    (21, "UNLIKELY"),
    (20, "PRETTYUNLIKELY"),
    (19, "REALLYUNLIKELY"),
    (18, "QUITEUNLIKELY"),
    (17, "STRONGLYUNLIKELY"),
    (16, "HIGHLYUNLIKELY"),
    (15, "EXTREMELYUNLIKELY"),
    (14, "VERYUNLIKELY"),
    (13, "HIGHLYIMPROBABLE"),
    (12, "NEARLYIMPOSSIBLE"),
    (11, "ALMOSTIMPOSSIBLE"),
    (10, "INEVITABLYNOT"),
    (9, "INDUBITABLYNOT"),
    (8, "UNQUESTIONABLYNOT"),
    (7, "SURELYNOT"),
    (6, "ASSUREDLYNOT"),
    (5, "UNDOUBTEDLYNOT"),
    (4, "DEFINITELYNOT"),
    (3, "CERTAINLYNOT"),
    (2, "ABSOLUTELYNOT"),
    (1, "ALMOSTFALSE"),
    (0, "FALSE"),
];

fn build_table() -> FxHashMap<String, f64> {
    let mut table = FxHashMap::default();
    for &(pct, name) in ROWS {
        table
            .entry(name.to_uppercase())
            .or_insert(pct as f64 / 100.0);
    }
    table
}

fn table() -> &'static FxHashMap<String, f64> {
    static TABLE: OnceLock<FxHashMap<String, f64>> = OnceLock::new();
    TABLE.get_or_init(build_table)
}

/// Looks up a token's probability, case-insensitively. `TRUE`/`FALSE`
/// are ordinary entries here (`p = 1.0` / `p = 0.0`).
pub fn lookup(token: &str) -> Option<f64> {
    table().get(&token.to_uppercase()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_count_is_101() {
        assert_eq!(ROWS.len(), 101);
    }

    #[test]
    fn true_and_false_are_bounds() {
        assert_eq!(lookup("TRUE"), Some(1.0));
        assert_eq!(lookup("false"), Some(0.0));
    }

    #[test]
    fn maybe_is_exactly_even() {
        assert_eq!(lookup("Maybe"), Some(0.5));
    }

    #[test]
    fn duplicate_names_resolve_to_first_highest_occurrence() {
        assert_eq!(lookup("BARELYLIKELY"), Some(0.60));
        assert_eq!(lookup("PROBABLYNOT"), Some(0.41));
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(lookup("NOTAREALWORD"), None);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("liKELy"), lookup("LIKELY"));
    }
}
