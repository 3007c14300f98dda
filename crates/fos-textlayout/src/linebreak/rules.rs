//! Pair table and CJK tailoring profiles

use super::class::{BreakClass, PAIR_CLASSES};

/// Break action between two adjacent classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Break allowed
    Direct,
    /// Break allowed only when spaces separate the pair
    Indirect,
    /// No break, even with spaces between
    Prohibited,
}

/// Strictness of line breaking around Japanese characters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CjkProfile {
    /// Plain UAX #14: small kana do not start lines
    #[default]
    Western,
    /// Small kana and nonstarters may start lines
    CjkLoose,
    /// Small kana may start lines
    CjkNormal,
    /// Small kana do not start lines
    CjkStrict,
}

impl CjkProfile {
    pub fn is_cjk(self) -> bool {
        !matches!(self, Self::Western)
    }

    /// Map a raw class to one present in the pair table
    pub fn resolve(self, class: BreakClass, no_ideographs: bool) -> BreakClass {
        let class = match class {
            BreakClass::AI if self.is_cjk() => BreakClass::ID,
            BreakClass::AI | BreakClass::SA | BreakClass::SG | BreakClass::XX => BreakClass::AL,
            BreakClass::CJ => match self {
                Self::Western | Self::CjkStrict => BreakClass::NS,
                Self::CjkNormal | Self::CjkLoose => BreakClass::ID,
            },
            BreakClass::NS if self == Self::CjkLoose => BreakClass::ID,
            other => other,
        };

        if no_ideographs && class.is_ideographic() {
            BreakClass::AL
        } else {
            class
        }
    }
}

// Rows are the class before the opportunity, columns the class after:
// `_` direct, `%` indirect, `^` prohibited.
const PAIR_ROWS: [&[u8; PAIR_CLASSES]; PAIR_CLASSES] = [
    //  OP CL CP QU GL NS EX SY IS PR PO NU AL ID IN HY BA BB B2 ZW CM WJ H2 H3 JL JV JT CB
    b"^^^^^^^^^^^^^^^^^^^^^^^^^^^^", // OP
    b"_^^%%^^^^%%____%%__^%^______", // CL
    b"_^^%%^^^^%%%%__%%__^%^______", // CP
    b"^^^%%%^^^%%%%%%%%%%^%^%%%%%%", // QU
    b"%^^%%%^^^%%%%%%%%%%^%^%%%%%%", // GL
    b"_^^%%%^^^______%%__^%^______", // NS
    b"_^^%%%^^^______%%__^%^______", // EX
    b"_^^%%%^^^__%___%%__^%^______", // SY
    b"_^^%%%^^^__%%__%%__^%^______", // IS
    b"%^^%%%^^^__%%%_%%__^%^%%%%%_", // PR
    b"%^^%%%^^^__%%__%%__^%^______", // PO
    b"%^^%%%^^^%%%%_%%%__^%^______", // NU
    b"%^^%%%^^^__%%_%%%__^%^______", // AL
    b"_^^%%%^^^_%___%%%__^%^______", // ID
    b"_^^%%%^^^_____%%%__^%^______", // IN
    b"_^^%_%^^^__%___%%__^%^______", // HY
    b"_^^%_%^^^______%%__^%^______", // BA
    b"%^^%%%^^^%%%%%%%%%%^%^%%%%%%", // BB
    b"_^^%%%^^^______%%_^^%^______", // B2
    b"___________________^________", // ZW
    b"%^^%%%^^^__%%_%%%__^%^______", // CM
    b"%^^%%%^^^%%%%%%%%%%^%^%%%%%%", // WJ
    b"_^^%%%^^^_%___%%%__^%^___%%_", // H2
    b"_^^%%%^^^_%___%%%__^%^____%_", // H3
    b"_^^%%%^^^_%___%%%__^%^%%%%__", // JL
    b"_^^%%%^^^_%___%%%__^%^___%%_", // JV
    b"_^^%%%^^^_%___%%%__^%^____%_", // JT
    b"_^^%%_^^^__________^%^______", // CB
];

static PAIR_TABLE: [Action; PAIR_CLASSES * PAIR_CLASSES] = build_pair_table(&PAIR_ROWS);

const fn build_pair_table(
    rows: &[&[u8; PAIR_CLASSES]; PAIR_CLASSES],
) -> [Action; PAIR_CLASSES * PAIR_CLASSES] {
    let mut table = [Action::Prohibited; PAIR_CLASSES * PAIR_CLASSES];
    let mut i = 0;
    while i < PAIR_CLASSES {
        let mut j = 0;
        while j < PAIR_CLASSES {
            table[i * PAIR_CLASSES + j] = match rows[i][j] {
                b'_' => Action::Direct,
                b'%' => Action::Indirect,
                _ => Action::Prohibited,
            };
            j += 1;
        }
        i += 1;
    }
    table
}

/// Action between two resolved classes.
///
/// Mandatory breaks always break after and never before.
pub fn pair_action(before: BreakClass, after: BreakClass) -> Action {
    if before.is_mandatory() {
        return Action::Direct;
    }
    if after.is_mandatory() {
        return Action::Prohibited;
    }

    match (before.pair_index(), after.pair_index()) {
        (Some(b), Some(a)) => PAIR_TABLE[b * PAIR_CLASSES + a],
        _ => Action::Prohibited,
    }
}
