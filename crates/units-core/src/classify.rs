use crate::Category;

/// Every temperature alias name run together.
pub const TEMPERATURE_BLOB: &str = "celsiusfahrenheitkelvin";
pub const LENGTH_BLOB: &str = "meterfootinchkilometercentimetermillimeteryardmile";
pub const WEIGHT_BLOB: &str = "kilogrampoundgrammilligramounce";

/// Pick the category for a pair of lower-cased unit tokens.
///
/// A category matches when its blob contains either token as a substring;
/// temperature is tried first, then length, then weight. This is plain
/// substring containment, so fragments such as `"in"` (inside "kelvin") or
/// `"ram"` also match, and the first matching category wins even when the
/// token is not a real alias of it.
pub fn classify(from: &str, to: &str) -> Option<Category> {
    [
        (Category::Temperature, TEMPERATURE_BLOB),
        (Category::Length, LENGTH_BLOB),
        (Category::Weight, WEIGHT_BLOB),
    ]
    .into_iter()
    .find(|(_, blob)| blob.contains(from) || blob.contains(to))
    .map(|(category, _)| category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_category_from_either_side() {
        assert_eq!(classify("c", "f"), Some(Category::Temperature));
        assert_eq!(classify("xyz", "kelvin"), Some(Category::Temperature));
        assert_eq!(classify("km", "mi"), Some(Category::Length));
        assert_eq!(classify("pound", "oz"), Some(Category::Weight));
        assert_eq!(classify("xyz", "abc"), None);
    }

    #[test]
    fn checks_temperature_before_length_and_weight() {
        // "in" sits inside "kelvin"
        assert_eq!(classify("in", "cm"), Some(Category::Temperature));
        // "m" only appears in the length blob
        assert_eq!(classify("kg", "m"), Some(Category::Length));
    }

    #[test]
    fn matches_fragments_not_just_aliases() {
        assert_eq!(classify("ahr", "zzz"), Some(Category::Temperature));
        assert_eq!(classify("ram", "zzz"), Some(Category::Weight));
        // abbreviations and plurals that are not fragments of a blob miss
        assert_eq!(classify("meters", "yards"), None);
        assert_eq!(classify("kg", "lb"), None);
    }

    #[test]
    fn empty_token_matches_first_category() {
        assert_eq!(classify("", "zzz"), Some(Category::Temperature));
    }
}
