// file: src/corpus/patterns.rs
// description: compiled regex patterns for corpus line parsing
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Tesserae citation tag: `<verg. ecl. 2.69>` followed by the verse text
    pub static ref TESSERAE_LINE: Regex = Regex::new(
        r"^\s*<([^>]+)>\s*(.*)$"
    ).expect("TESSERAE_LINE regex is valid");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tesserae_line_pattern() {
        let caps = TESSERAE_LINE
            .captures("<verg. ecl. 2.69>\ta, Corydon, Corydon, quae te dementia cepit!")
            .unwrap();
        assert_eq!(&caps[1], "verg. ecl. 2.69");
        assert_eq!(&caps[2], "a, Corydon, Corydon, quae te dementia cepit!");
    }

    #[test]
    fn test_untagged_line_does_not_match() {
        assert!(!TESSERAE_LINE.is_match("Tityre, tu patulae recubans sub tegmine fagi"));
    }
}
