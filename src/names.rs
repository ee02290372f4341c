//! A read-only table of canonical glyph names.
//!
//! Maps canonical codepoint strings to the human-readable glyph names used
//! by font editors (AGL-style naming). Consulted when remapping renames
//! glyphs at their destination, and when normalizing bare glyph names to
//! codepoints.

/// Sorted by codepoint.
static NAMES: &[(&str, &str)] = &[
    ("0020", "space"),
    ("0021", "exclam"),
    ("0022", "quotedbl"),
    ("0023", "numbersign"),
    ("0024", "dollar"),
    ("0025", "percent"),
    ("0026", "ampersand"),
    ("0027", "quotesingle"),
    ("0028", "parenleft"),
    ("0029", "parenright"),
    ("002A", "asterisk"),
    ("002B", "plus"),
    ("002C", "comma"),
    ("002D", "hyphen"),
    ("002E", "period"),
    ("002F", "slash"),
    ("0030", "zero"),
    ("0031", "one"),
    ("0032", "two"),
    ("0033", "three"),
    ("0034", "four"),
    ("0035", "five"),
    ("0036", "six"),
    ("0037", "seven"),
    ("0038", "eight"),
    ("0039", "nine"),
    ("003A", "colon"),
    ("003B", "semicolon"),
    ("003C", "less"),
    ("003D", "equal"),
    ("003E", "greater"),
    ("003F", "question"),
    ("0040", "at"),
    ("0041", "A"),
    ("0042", "B"),
    ("0043", "C"),
    ("0044", "D"),
    ("0045", "E"),
    ("0046", "F"),
    ("0047", "G"),
    ("0048", "H"),
    ("0049", "I"),
    ("004A", "J"),
    ("004B", "K"),
    ("004C", "L"),
    ("004D", "M"),
    ("004E", "N"),
    ("004F", "O"),
    ("0050", "P"),
    ("0051", "Q"),
    ("0052", "R"),
    ("0053", "S"),
    ("0054", "T"),
    ("0055", "U"),
    ("0056", "V"),
    ("0057", "W"),
    ("0058", "X"),
    ("0059", "Y"),
    ("005A", "Z"),
    ("005B", "bracketleft"),
    ("005C", "backslash"),
    ("005D", "bracketright"),
    ("005E", "asciicircum"),
    ("005F", "underscore"),
    ("0060", "grave"),
    ("0061", "a"),
    ("0062", "b"),
    ("0063", "c"),
    ("0064", "d"),
    ("0065", "e"),
    ("0066", "f"),
    ("0067", "g"),
    ("0068", "h"),
    ("0069", "i"),
    ("006A", "j"),
    ("006B", "k"),
    ("006C", "l"),
    ("006D", "m"),
    ("006E", "n"),
    ("006F", "o"),
    ("0070", "p"),
    ("0071", "q"),
    ("0072", "r"),
    ("0073", "s"),
    ("0074", "t"),
    ("0075", "u"),
    ("0076", "v"),
    ("0077", "w"),
    ("0078", "x"),
    ("0079", "y"),
    ("007A", "z"),
    ("007B", "braceleft"),
    ("007C", "bar"),
    ("007D", "braceright"),
    ("007E", "asciitilde"),
    ("00A1", "exclamdown"),
    ("00A2", "cent"),
    ("00A3", "sterling"),
    ("00A4", "currency"),
    ("00A5", "yen"),
    ("00A6", "brokenbar"),
    ("00A7", "section"),
    ("00A8", "dieresis"),
    ("00A9", "copyright"),
    ("00AA", "ordfeminine"),
    ("00AB", "guillemotleft"),
    ("00AC", "logicalnot"),
    ("00AE", "registered"),
    ("00AF", "macron"),
    ("00B0", "degree"),
    ("00B1", "plusminus"),
    ("00B4", "acute"),
    ("00B5", "mu"),
    ("00B6", "paragraph"),
    ("00B7", "periodcentered"),
    ("00B8", "cedilla"),
    ("00BA", "ordmasculine"),
    ("00BB", "guillemotright"),
    ("00BF", "questiondown"),
    ("00C0", "Agrave"),
    ("00C1", "Aacute"),
    ("00C2", "Acircumflex"),
    ("00C3", "Atilde"),
    ("00C4", "Adieresis"),
    ("00C5", "Aring"),
    ("00C6", "AE"),
    ("00C7", "Ccedilla"),
    ("00C8", "Egrave"),
    ("00C9", "Eacute"),
    ("00CA", "Ecircumflex"),
    ("00CB", "Edieresis"),
    ("00CC", "Igrave"),
    ("00CD", "Iacute"),
    ("00CE", "Icircumflex"),
    ("00CF", "Idieresis"),
    ("00D0", "Eth"),
    ("00D1", "Ntilde"),
    ("00D2", "Ograve"),
    ("00D3", "Oacute"),
    ("00D4", "Ocircumflex"),
    ("00D5", "Otilde"),
    ("00D6", "Odieresis"),
    ("00D7", "multiply"),
    ("00D8", "Oslash"),
    ("00D9", "Ugrave"),
    ("00DA", "Uacute"),
    ("00DB", "Ucircumflex"),
    ("00DC", "Udieresis"),
    ("00DD", "Yacute"),
    ("00DE", "Thorn"),
    ("00DF", "germandbls"),
    ("00E0", "agrave"),
    ("00E1", "aacute"),
    ("00E2", "acircumflex"),
    ("00E3", "atilde"),
    ("00E4", "adieresis"),
    ("00E5", "aring"),
    ("00E6", "ae"),
    ("00E7", "ccedilla"),
    ("00E8", "egrave"),
    ("00E9", "eacute"),
    ("00EA", "ecircumflex"),
    ("00EB", "edieresis"),
    ("00EC", "igrave"),
    ("00ED", "iacute"),
    ("00EE", "icircumflex"),
    ("00EF", "idieresis"),
    ("00F0", "eth"),
    ("00F1", "ntilde"),
    ("00F2", "ograve"),
    ("00F3", "oacute"),
    ("00F4", "ocircumflex"),
    ("00F5", "otilde"),
    ("00F6", "odieresis"),
    ("00F7", "divide"),
    ("00F8", "oslash"),
    ("00F9", "ugrave"),
    ("00FA", "uacute"),
    ("00FB", "ucircumflex"),
    ("00FC", "udieresis"),
    ("00FD", "yacute"),
    ("00FE", "thorn"),
    ("00FF", "ydieresis"),
    ("2013", "endash"),
    ("2014", "emdash"),
    ("2018", "quoteleft"),
    ("2019", "quoteright"),
    ("201A", "quotesinglbase"),
    ("201C", "quotedblleft"),
    ("201D", "quotedblright"),
    ("201E", "quotedblbase"),
    ("2020", "dagger"),
    ("2021", "daggerdbl"),
    ("2022", "bullet"),
    ("2026", "ellipsis"),
    ("2030", "perthousand"),
    ("2039", "guilsinglleft"),
    ("203A", "guilsinglright"),
    ("20AC", "Euro"),
    ("2122", "trademark"),
];

/// The canonical glyph name for a codepoint, if the table knows one.
pub fn name_for(codepoint: &str) -> Option<&'static str> {
    NAMES
        .binary_search_by_key(&codepoint, |(cp, _)| cp)
        .ok()
        .map(|ix| NAMES[ix].1)
}

/// The codepoint for a canonical glyph name, if the table knows one.
pub fn codepoint_for_name(name: &str) -> Option<&'static str> {
    NAMES
        .iter()
        .find(|(_, candidate)| *candidate == name)
        .map(|(cp, _)| *cp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_both_ways() {
        assert_eq!(name_for("0041"), Some("A"));
        assert_eq!(name_for("2026"), Some("ellipsis"));
        assert_eq!(name_for("FFFF"), None);
        assert_eq!(codepoint_for_name("guillemotright"), Some("00BB"));
        assert_eq!(codepoint_for_name("nosuchglyph"), None);
    }

    #[test]
    fn test_table_is_sorted() {
        for pair in NAMES.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} out of order", pair[1].0);
        }
    }
}
