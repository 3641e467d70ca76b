/// Filter string for the open and save dialogs.
///
/// FLTK format: one option per line, "Description\tPattern". The
/// all-files fallback is listed explicitly so it stays reachable no
/// matter how the native dialog presents its defaults.
pub fn text_files_filter() -> String {
    ["Text Files\t*.txt", "All Files\t*"].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_offers_text_files() {
        let filter = text_files_filter();
        assert!(filter.contains("*.txt"));
        assert!(filter.contains("Text Files"));
    }

    #[test]
    fn test_filter_keeps_all_files_fallback() {
        let filter = text_files_filter();
        let last = filter.lines().last().unwrap();
        assert_eq!(last, "All Files\t*");
    }

    #[test]
    fn test_filter_format() {
        for line in text_files_filter().lines() {
            assert!(line.contains('\t'));
        }
    }
}
