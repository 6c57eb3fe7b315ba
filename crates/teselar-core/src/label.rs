//! Tile label line splitting.

/// Splits `name` into label lines, cutting before every ASCII capital that
/// is followed by a non-capital character.
///
/// This is a documented formatting rule for stacked tile labels, not
/// font-aware wrapping: `"WiiPlay"` becomes `["Wii", "Play"]` while an
/// acronym like `"NES"` stays whole because no capital is followed by a
/// non-capital. A capital at the very start or very end of the name never
/// opens a new line.
#[must_use]
pub fn split_label(name: &str) -> Vec<&str> {
    let positions: Vec<(usize, char)> = name.char_indices().collect();
    let mut lines = Vec::new();
    let mut start = 0;
    for window in 1..positions.len().saturating_sub(1) {
        let (offset, ch) = positions[window];
        let (_, next) = positions[window + 1];
        if ch.is_ascii_uppercase() && !next.is_ascii_uppercase() {
            lines.push(&name[start..offset]);
            start = offset;
        }
    }
    lines.push(&name[start..]);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_camel_case_runs() {
        assert_eq!(split_label("WiiPlay"), ["Wii", "Play"]);
        assert_eq!(split_label("SuperMarioBros"), ["Super", "Mario", "Bros"]);
        assert_eq!(split_label("DonkeyKong64"), ["Donkey", "Kong64"]);
    }

    #[test]
    fn acronyms_stay_whole() {
        assert_eq!(split_label("NES"), ["NES"]);
    }

    #[test]
    fn acronym_followed_by_space_splits_before_its_last_capital() {
        // The rule is positional, so the final capital of an acronym opens
        // a line when a non-capital follows it.
        assert_eq!(split_label("FIFA 17"), ["FIF", "A 17"]);
    }

    #[test]
    fn leading_and_trailing_capitals_do_not_split() {
        assert_eq!(split_label("Wii"), ["Wii"]);
        assert_eq!(split_label("Wii U"), ["Wii U"]);
        assert_eq!(split_label("X"), ["X"]);
    }

    #[test]
    fn capital_before_space_splits() {
        // The character after the capital only has to be a non-capital; a
        // space qualifies.
        assert_eq!(split_label("Mario Kart Wii"), ["Mario ", "Kart ", "Wii"]);
    }

    #[test]
    fn empty_and_plain_names() {
        assert_eq!(split_label(""), [""]);
        assert_eq!(split_label("minecraft"), ["minecraft"]);
    }

    #[test]
    fn multibyte_names_do_not_panic() {
        assert_eq!(split_label("Pokémon Red"), ["Pokémon ", "Red"]);
    }
}
