//! UAX #14 line break classes and the code point table

use std::collections::HashMap;

/// UAX #14 line breaking class.
///
/// The first [`PAIR_CLASSES`] variants index the pair table; the rest are
/// resolved to one of those before any lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BreakClass {
    /// Open punctuation
    OP,
    /// Close punctuation
    CL,
    /// Close parenthesis
    CP,
    /// Quotation
    QU,
    /// Non-breaking glue
    GL,
    /// Nonstarter
    NS,
    /// Exclamation / interrogation
    EX,
    /// Symbols allowing break after
    SY,
    /// Infix numeric separator
    IS,
    /// Prefix numeric
    PR,
    /// Postfix numeric
    PO,
    /// Numeric
    NU,
    /// Alphabetic
    AL,
    /// Ideographic
    ID,
    /// Inseparable
    IN,
    /// Hyphen
    HY,
    /// Break after
    BA,
    /// Break before
    BB,
    /// Break opportunity before and after
    B2,
    /// Zero width space
    ZW,
    /// Combining mark
    CM,
    /// Word joiner
    WJ,
    /// Hangul LV syllable
    H2,
    /// Hangul LVT syllable
    H3,
    /// Hangul L jamo
    JL,
    /// Hangul V jamo
    JV,
    /// Hangul T jamo
    JT,
    /// Contingent break opportunity
    CB,
    /// Ambiguous
    AI,
    /// Mandatory break
    BK,
    /// Carriage return
    CR,
    /// Line feed
    LF,
    /// Next line
    NL,
    /// Complex context (South East Asian)
    SA,
    /// Surrogate
    SG,
    /// Space
    SP,
    /// Unknown
    XX,
    /// Conditional Japanese starter
    CJ,
}

/// Number of classes present in the pair table
pub const PAIR_CLASSES: usize = 28;

impl BreakClass {
    /// Parse a class name such as `"ID"` or `"ns"`
    pub fn from_name(name: &str) -> Option<Self> {
        let class = match name.to_ascii_uppercase().as_str() {
            "OP" => Self::OP,
            "CL" => Self::CL,
            "CP" => Self::CP,
            "QU" => Self::QU,
            "GL" => Self::GL,
            "NS" => Self::NS,
            "EX" => Self::EX,
            "SY" => Self::SY,
            "IS" => Self::IS,
            "PR" => Self::PR,
            "PO" => Self::PO,
            "NU" => Self::NU,
            "AL" => Self::AL,
            "ID" => Self::ID,
            "IN" => Self::IN,
            "HY" => Self::HY,
            "BA" => Self::BA,
            "BB" => Self::BB,
            "B2" => Self::B2,
            "ZW" => Self::ZW,
            "CM" => Self::CM,
            "WJ" => Self::WJ,
            "H2" => Self::H2,
            "H3" => Self::H3,
            "JL" => Self::JL,
            "JV" => Self::JV,
            "JT" => Self::JT,
            "CB" => Self::CB,
            "AI" => Self::AI,
            "BK" => Self::BK,
            "CR" => Self::CR,
            "LF" => Self::LF,
            "NL" => Self::NL,
            "SA" => Self::SA,
            "SG" => Self::SG,
            "SP" => Self::SP,
            "XX" => Self::XX,
            "CJ" => Self::CJ,
            _ => return None,
        };
        Some(class)
    }

    /// Row/column of this class in the pair table
    pub fn pair_index(self) -> Option<usize> {
        let index = self as usize;
        (index < PAIR_CLASSES).then_some(index)
    }

    /// Classes that always allow a break after them
    pub fn is_mandatory(self) -> bool {
        matches!(self, Self::BK | Self::CR | Self::LF | Self::NL)
    }

    /// Ideographic and Hangul classes
    pub fn is_ideographic(self) -> bool {
        matches!(
            self,
            Self::ID | Self::H2 | Self::H3 | Self::JL | Self::JV | Self::JT
        )
    }
}

use BreakClass as C;

/// Break classes of the basic multilingual plane. Later entries override
/// earlier ones, so broad blocks come first.
static BMP_RANGES: &[(u32, u32, BreakClass)] = &[
    // Latin, Greek, Cyrillic, Armenian, Hebrew, Arabic and Indic letters
    (0x0021, 0x007E, C::AL),
    (0x00A0, 0x1FFF, C::AL),
    (0x0300, 0x036F, C::CM),
    (0x034F, 0x034F, C::GL),
    (0x035C, 0x0362, C::GL),
    (0x037E, 0x037E, C::IS),
    (0x0483, 0x0489, C::CM),
    (0x0591, 0x05BD, C::CM),
    (0x05BE, 0x05BE, C::BA),
    (0x0610, 0x061A, C::CM),
    (0x060C, 0x060D, C::IS),
    (0x061B, 0x061B, C::EX),
    (0x061F, 0x061F, C::EX),
    (0x064B, 0x065F, C::CM),
    (0x0660, 0x0669, C::NU),
    (0x066A, 0x066A, C::PO),
    (0x066B, 0x066C, C::NU),
    (0x0670, 0x0670, C::CM),
    (0x06D6, 0x06DC, C::CM),
    (0x06DF, 0x06E4, C::CM),
    (0x06E7, 0x06E8, C::CM),
    (0x06EA, 0x06ED, C::CM),
    (0x06F0, 0x06F9, C::NU),
    (0x0900, 0x0903, C::CM),
    (0x093A, 0x094F, C::CM),
    (0x0951, 0x0957, C::CM),
    (0x0962, 0x0963, C::CM),
    (0x0964, 0x0965, C::BA),
    (0x0966, 0x096F, C::NU),
    (0x0E00, 0x0EFF, C::SA),
    (0x0E50, 0x0E59, C::NU),
    (0x0E5A, 0x0E5B, C::BA),
    (0x1000, 0x109F, C::SA),
    (0x1100, 0x115F, C::JL),
    (0x1160, 0x11A7, C::JV),
    (0x11A8, 0x11FF, C::JT),
    (0x1680, 0x1680, C::BA),
    (0x1780, 0x17FF, C::SA),
    (0x1AB0, 0x1AFF, C::CM),
    (0x1DC0, 0x1DFF, C::CM),
    // ASCII
    (0x0000, 0x0008, C::CM),
    (0x0009, 0x0009, C::BA),
    (0x000A, 0x000A, C::LF),
    (0x000B, 0x000C, C::BK),
    (0x000D, 0x000D, C::CR),
    (0x000E, 0x001F, C::CM),
    (0x0020, 0x0020, C::SP),
    (0x0021, 0x0021, C::EX),
    (0x0022, 0x0022, C::QU),
    (0x0024, 0x0024, C::PR),
    (0x0025, 0x0025, C::PO),
    (0x0027, 0x0027, C::QU),
    (0x0028, 0x0028, C::OP),
    (0x0029, 0x0029, C::CP),
    (0x002B, 0x002B, C::PR),
    (0x002C, 0x002C, C::IS),
    (0x002D, 0x002D, C::HY),
    (0x002E, 0x002E, C::IS),
    (0x002F, 0x002F, C::SY),
    (0x0030, 0x0039, C::NU),
    (0x003A, 0x003B, C::IS),
    (0x003F, 0x003F, C::EX),
    (0x005B, 0x005B, C::OP),
    (0x005C, 0x005C, C::PR),
    (0x005D, 0x005D, C::CP),
    (0x007B, 0x007B, C::OP),
    (0x007C, 0x007C, C::BA),
    (0x007D, 0x007D, C::CL),
    (0x007F, 0x009F, C::CM),
    (0x0085, 0x0085, C::NL),
    // Latin-1 punctuation
    (0x00A0, 0x00A0, C::GL),
    (0x00A1, 0x00A1, C::OP),
    (0x00A2, 0x00A2, C::PO),
    (0x00A3, 0x00A5, C::PR),
    (0x00A7, 0x00A8, C::AI),
    (0x00AA, 0x00AA, C::AI),
    (0x00AB, 0x00AB, C::QU),
    (0x00AD, 0x00AD, C::BA),
    (0x00B0, 0x00B0, C::PO),
    (0x00B1, 0x00B1, C::PR),
    (0x00B2, 0x00B3, C::AI),
    (0x00B4, 0x00B4, C::BB),
    (0x00B6, 0x00BA, C::AI),
    (0x00BB, 0x00BB, C::QU),
    (0x00BC, 0x00BE, C::AI),
    (0x00BF, 0x00BF, C::OP),
    (0x00D7, 0x00D7, C::AI),
    (0x00F7, 0x00F7, C::AI),
    (0x02C8, 0x02C8, C::BB),
    (0x02CC, 0x02CC, C::BB),
    (0x02DF, 0x02DF, C::BB),
    // General punctuation
    (0x2000, 0x2006, C::BA),
    (0x2007, 0x2007, C::GL),
    (0x2008, 0x200A, C::BA),
    (0x200B, 0x200B, C::ZW),
    (0x200C, 0x200F, C::CM),
    (0x2010, 0x2010, C::BA),
    (0x2011, 0x2011, C::GL),
    (0x2012, 0x2013, C::BA),
    (0x2014, 0x2014, C::B2),
    (0x2015, 0x2016, C::AI),
    (0x2017, 0x2017, C::AL),
    (0x2018, 0x2019, C::QU),
    (0x201A, 0x201A, C::OP),
    (0x201B, 0x201D, C::QU),
    (0x201E, 0x201E, C::OP),
    (0x201F, 0x201F, C::QU),
    (0x2020, 0x2021, C::AI),
    (0x2022, 0x2023, C::AL),
    (0x2024, 0x2026, C::IN),
    (0x2027, 0x2027, C::BA),
    (0x2028, 0x2029, C::BK),
    (0x202A, 0x202E, C::CM),
    (0x202F, 0x202F, C::GL),
    (0x2030, 0x2037, C::PO),
    (0x2038, 0x2038, C::AL),
    (0x2039, 0x203A, C::QU),
    (0x203B, 0x203B, C::AI),
    (0x203C, 0x203D, C::NS),
    (0x203E, 0x2043, C::AL),
    (0x2044, 0x2044, C::IS),
    (0x2045, 0x2045, C::OP),
    (0x2046, 0x2046, C::CL),
    (0x2047, 0x2049, C::NS),
    (0x204A, 0x2055, C::AL),
    (0x2056, 0x2056, C::BA),
    (0x2057, 0x2057, C::AL),
    (0x2058, 0x205B, C::BA),
    (0x205C, 0x205C, C::AL),
    (0x205D, 0x205F, C::BA),
    (0x2060, 0x2060, C::WJ),
    (0x2061, 0x2064, C::AL),
    (0x2066, 0x206F, C::CM),
    (0x2070, 0x209F, C::AL),
    (0x20A0, 0x20CF, C::PR),
    (0x20A7, 0x20A7, C::PO),
    (0x20B6, 0x20B6, C::PO),
    (0x20BB, 0x20BB, C::PO),
    (0x20BE, 0x20BE, C::PO),
    (0x20D0, 0x20FF, C::CM),
    // Letterlike symbols, arrows, math, technical
    (0x2100, 0x23FF, C::AL),
    (0x2103, 0x2103, C::PO),
    (0x2109, 0x2109, C::PO),
    (0x2116, 0x2116, C::PR),
    (0x2460, 0x24FF, C::AI),
    (0x2500, 0x257F, C::AI),
    (0x2580, 0x259F, C::AL),
    (0x25A0, 0x25FF, C::AI),
    (0x2600, 0x27BF, C::AL),
    (0x2605, 0x2606, C::AI),
    (0x2640, 0x2642, C::AI),
    (0x2768, 0x2768, C::OP),
    (0x2769, 0x2769, C::CL),
    (0x276A, 0x276A, C::OP),
    (0x276B, 0x276B, C::CL),
    (0x27C0, 0x2DFF, C::AL),
    (0x2E80, 0x2FFF, C::ID),
    // CJK symbols and punctuation
    (0x3000, 0x3000, C::BA),
    (0x3001, 0x3002, C::CL),
    (0x3003, 0x3004, C::ID),
    (0x3005, 0x3005, C::NS),
    (0x3006, 0x3007, C::ID),
    (0x3008, 0x3008, C::OP),
    (0x3009, 0x3009, C::CL),
    (0x300A, 0x300A, C::OP),
    (0x300B, 0x300B, C::CL),
    (0x300C, 0x300C, C::OP),
    (0x300D, 0x300D, C::CL),
    (0x300E, 0x300E, C::OP),
    (0x300F, 0x300F, C::CL),
    (0x3010, 0x3010, C::OP),
    (0x3011, 0x3011, C::CL),
    (0x3012, 0x3013, C::ID),
    (0x3014, 0x3014, C::OP),
    (0x3015, 0x3015, C::CL),
    (0x3016, 0x3016, C::OP),
    (0x3017, 0x3017, C::CL),
    (0x3018, 0x3018, C::OP),
    (0x3019, 0x3019, C::CL),
    (0x301A, 0x301A, C::OP),
    (0x301B, 0x301B, C::CL),
    (0x301C, 0x301C, C::NS),
    (0x301D, 0x301D, C::OP),
    (0x301E, 0x301F, C::CL),
    (0x3020, 0x3029, C::ID),
    (0x302A, 0x302F, C::CM),
    (0x3030, 0x303A, C::ID),
    (0x303B, 0x303B, C::NS),
    (0x303C, 0x303F, C::ID),
    // Kana
    (0x3040, 0x30FF, C::ID),
    (0x3041, 0x3041, C::CJ),
    (0x3043, 0x3043, C::CJ),
    (0x3045, 0x3045, C::CJ),
    (0x3047, 0x3047, C::CJ),
    (0x3049, 0x3049, C::CJ),
    (0x3063, 0x3063, C::CJ),
    (0x3083, 0x3083, C::CJ),
    (0x3085, 0x3085, C::CJ),
    (0x3087, 0x3087, C::CJ),
    (0x308E, 0x308E, C::CJ),
    (0x3095, 0x3096, C::CJ),
    (0x3099, 0x309A, C::CM),
    (0x309B, 0x309E, C::NS),
    (0x30A0, 0x30A0, C::NS),
    (0x30A1, 0x30A1, C::CJ),
    (0x30A3, 0x30A3, C::CJ),
    (0x30A5, 0x30A5, C::CJ),
    (0x30A7, 0x30A7, C::CJ),
    (0x30A9, 0x30A9, C::CJ),
    (0x30C3, 0x30C3, C::CJ),
    (0x30E3, 0x30E3, C::CJ),
    (0x30E5, 0x30E5, C::CJ),
    (0x30E7, 0x30E7, C::CJ),
    (0x30EE, 0x30EE, C::CJ),
    (0x30F5, 0x30F6, C::CJ),
    (0x30FB, 0x30FB, C::NS),
    (0x30FC, 0x30FC, C::CJ),
    (0x30FD, 0x30FE, C::NS),
    // Bopomofo, Hangul compatibility jamo, kanbun, CJK strokes
    (0x3100, 0x31EF, C::ID),
    (0x31F0, 0x31FF, C::CJ),
    // Enclosed CJK, compatibility, extension A, unified ideographs, Yi
    (0x3200, 0x4DBF, C::ID),
    (0x4DC0, 0x4DFF, C::AL),
    (0x4E00, 0x9FFF, C::ID),
    (0xA000, 0xA4CF, C::ID),
    (0xA015, 0xA015, C::NS),
    (0xA4D0, 0xA95F, C::AL),
    (0xA960, 0xA97F, C::JL),
    (0xA980, 0xABFF, C::AL),
    // Hangul syllables are split into H2/H3 separately
    (0xD7B0, 0xD7C6, C::JV),
    (0xD7CB, 0xD7FB, C::JT),
    (0xD800, 0xDFFF, C::SG),
    // Compatibility ideographs and presentation forms
    (0xF900, 0xFAFF, C::ID),
    (0xFB00, 0xFDFF, C::AL),
    (0xFB1E, 0xFB1E, C::CM),
    (0xFD3E, 0xFD3E, C::CL),
    (0xFD3F, 0xFD3F, C::OP),
    (0xFE00, 0xFE0F, C::CM),
    (0xFE10, 0xFE10, C::IS),
    (0xFE11, 0xFE12, C::CL),
    (0xFE13, 0xFE14, C::IS),
    (0xFE15, 0xFE16, C::EX),
    (0xFE17, 0xFE17, C::OP),
    (0xFE18, 0xFE18, C::CL),
    (0xFE19, 0xFE19, C::IN),
    (0xFE20, 0xFE2F, C::CM),
    (0xFE30, 0xFE34, C::ID),
    (0xFE45, 0xFE46, C::ID),
    (0xFE47, 0xFE47, C::OP),
    (0xFE48, 0xFE48, C::CL),
    (0xFE49, 0xFE4F, C::ID),
    (0xFE50, 0xFE50, C::CL),
    (0xFE51, 0xFE51, C::ID),
    (0xFE52, 0xFE52, C::CL),
    (0xFE54, 0xFE55, C::NS),
    (0xFE56, 0xFE57, C::EX),
    (0xFE58, 0xFE58, C::ID),
    (0xFE59, 0xFE59, C::OP),
    (0xFE5A, 0xFE5A, C::CL),
    (0xFE5B, 0xFE5B, C::OP),
    (0xFE5C, 0xFE5C, C::CL),
    (0xFE5D, 0xFE5D, C::OP),
    (0xFE5E, 0xFE5E, C::CL),
    (0xFE5F, 0xFE68, C::ID),
    (0xFE69, 0xFE69, C::PR),
    (0xFE6A, 0xFE6A, C::PO),
    (0xFE6B, 0xFE6B, C::ID),
    (0xFE70, 0xFEFE, C::AL),
    (0xFEFF, 0xFEFF, C::WJ),
    // Halfwidth and fullwidth forms
    (0xFF01, 0xFF01, C::EX),
    (0xFF02, 0xFF03, C::ID),
    (0xFF04, 0xFF04, C::PR),
    (0xFF05, 0xFF05, C::PO),
    (0xFF06, 0xFF07, C::ID),
    (0xFF08, 0xFF08, C::OP),
    (0xFF09, 0xFF09, C::CL),
    (0xFF0A, 0xFF0B, C::ID),
    (0xFF0C, 0xFF0C, C::CL),
    (0xFF0D, 0xFF0D, C::ID),
    (0xFF0E, 0xFF0E, C::CL),
    (0xFF0F, 0xFF19, C::ID),
    (0xFF1A, 0xFF1B, C::NS),
    (0xFF1C, 0xFF1E, C::ID),
    (0xFF1F, 0xFF1F, C::EX),
    (0xFF20, 0xFF3A, C::ID),
    (0xFF3B, 0xFF3B, C::OP),
    (0xFF3C, 0xFF3C, C::ID),
    (0xFF3D, 0xFF3D, C::CL),
    (0xFF3E, 0xFF5A, C::ID),
    (0xFF5B, 0xFF5B, C::OP),
    (0xFF5C, 0xFF5C, C::ID),
    (0xFF5D, 0xFF5D, C::CL),
    (0xFF5E, 0xFF5E, C::ID),
    (0xFF5F, 0xFF5F, C::OP),
    (0xFF60, 0xFF61, C::CL),
    (0xFF62, 0xFF62, C::OP),
    (0xFF63, 0xFF64, C::CL),
    (0xFF65, 0xFF65, C::NS),
    (0xFF66, 0xFF66, C::ID),
    (0xFF67, 0xFF70, C::CJ),
    (0xFF71, 0xFF9D, C::ID),
    (0xFF9E, 0xFF9F, C::NS),
    (0xFFA0, 0xFFDC, C::ID),
    (0xFFE0, 0xFFE0, C::PO),
    (0xFFE1, 0xFFE1, C::PR),
    (0xFFE2, 0xFFE4, C::ID),
    (0xFFE5, 0xFFE6, C::PR),
    (0xFFE8, 0xFFEE, C::AL),
    (0xFFF9, 0xFFFB, C::CM),
    (0xFFFC, 0xFFFC, C::CB),
    (0xFFFD, 0xFFFD, C::AI),
];

/// Code point to break class lookup with per-character tailoring.
///
/// Built once, tailored during configuration, then shared read-only by
/// every layout through a [`crate::LayoutContext`].
#[derive(Debug, Clone)]
pub struct BreakTable {
    bmp: Box<[BreakClass]>,
    /// Tailorings outside the basic multilingual plane
    supplementary: HashMap<u32, BreakClass>,
}

impl BreakTable {
    /// Create the default table
    pub fn new() -> Self {
        let mut bmp = vec![BreakClass::XX; 0x10000].into_boxed_slice();

        for &(start, end, class) in BMP_RANGES {
            bmp[start as usize..=end as usize].fill(class);
        }

        // Hangul syllables: LV when there is no trailing consonant
        for cp in 0xAC00u32..=0xD7A3 {
            bmp[cp as usize] = if (cp - 0xAC00) % 28 == 0 {
                BreakClass::H2
            } else {
                BreakClass::H3
            };
        }

        Self {
            bmp,
            supplementary: HashMap::new(),
        }
    }

    /// Class of a code point, tailoring included
    pub fn get(&self, cp: u32) -> BreakClass {
        if let Some(class) = self.bmp.get(cp as usize) {
            return *class;
        }

        if let Some(class) = self.supplementary.get(&cp) {
            return *class;
        }

        supplementary_class(cp)
    }

    /// Override the class of a character
    pub fn tailor(&mut self, c: char, class: BreakClass) {
        let cp = c as u32;
        match self.bmp.get_mut(cp as usize) {
            Some(slot) => *slot = class,
            None => {
                self.supplementary.insert(cp, class);
            }
        }
    }

    /// Override the class of every character in `chars`
    pub fn tailor_all(&mut self, chars: &str, class: BreakClass) {
        for c in chars.chars() {
            self.tailor(c, class);
        }
    }

    /// Override by class name. Unknown names tailor to [`BreakClass::XX`].
    pub fn tailor_named(&mut self, chars: &str, name: &str) {
        let class = BreakClass::from_name(name).unwrap_or_else(|| {
            tracing::warn!("Unknown line break class {:?}, using XX", name);
            BreakClass::XX
        });
        self.tailor_all(chars, class);
    }
}

impl Default for BreakTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed classes outside the basic multilingual plane
fn supplementary_class(cp: u32) -> BreakClass {
    match cp {
        0x1F000..=0x1FAFF => BreakClass::ID,
        0x20000..=0x2FFFD | 0x30000..=0x3FFFD => BreakClass::ID,
        0xE0001..=0xE007F | 0xE0100..=0xE01EF => BreakClass::CM,
        _ => BreakClass::AL,
    }
}
