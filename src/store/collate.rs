use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compares two recipe names the way a reader expects them listed.
///
/// Three levels are tried in turn:
/// 1. base letters, ignoring accents and case (`Éclair` sorts with `e`)
/// 2. accents, unaccented first (`Cafe` before `Café`)
/// 3. case, lowercase first (`oat` before `Oat`)
///
/// Names that are identical report `Equal`, leaving their relative order
/// to the (stable) sort.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented(a).cmp(accented(b)))
        .then_with(|| compare_case(a, b))
}

fn accented(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd().flat_map(char::to_lowercase)
}

fn base_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    accented(name).filter(|c| !is_combining_mark(*c))
}

fn compare_case(a: &str, b: &str) -> Ordering {
    a.nfd()
        .zip(b.nfd())
        .find(|(x, y)| x != y)
        .map(|(x, y)| {
            x.is_uppercase()
                .cmp(&y.is_uppercase())
                .then_with(|| x.cmp(&y))
        })
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_primary_order() {
        assert_eq!(compare_names("almond", "Banana"), Ordering::Less);
        assert_eq!(compare_names("Cashew", "banana"), Ordering::Greater);
    }

    #[test]
    fn test_lowercase_before_uppercase_on_tie() {
        assert_eq!(compare_names("oat", "Oat"), Ordering::Less);
        assert_eq!(compare_names("Oat", "oat"), Ordering::Greater);
    }

    #[test]
    fn test_identical_names_are_equal() {
        assert_eq!(compare_names("Hemp", "Hemp"), Ordering::Equal);
        assert_eq!(compare_names("", ""), Ordering::Equal);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(compare_names("Oat", "Oat Vanilla"), Ordering::Less);
    }

    #[test]
    fn test_accents_ignored_at_base_level() {
        assert_eq!(compare_names("Éclair", "Zucchini"), Ordering::Less);
        assert_eq!(compare_names("Café Latte", "Cafe Mocha"), Ordering::Less);
        assert_eq!(compare_names("Crème Brûlée", "Cream Soda"), Ordering::Greater);
    }

    #[test]
    fn test_unaccented_before_accented_on_tie() {
        assert_eq!(compare_names("Cafe", "Café"), Ordering::Less);
        assert_eq!(compare_names("café", "Cafe"), Ordering::Greater);
    }

    #[test]
    fn test_precomposed_and_decomposed_are_equal() {
        assert_eq!(compare_names("Caf\u{e9}", "Cafe\u{301}"), Ordering::Equal);
    }

    #[test]
    fn test_non_ascii_names() {
        assert_eq!(compare_names("Ébène", "ébène"), Ordering::Greater);
        assert_eq!(compare_names("Ωmega", "ωmega"), Ordering::Greater);
    }
}
