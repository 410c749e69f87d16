// src/domain/identifier/suffix.rs

/// Returns the successor of `value`, treating its trailing alphanumeric run as
/// an odometer: `"-0000"` becomes `"-0001"`, `"a9"` becomes `"b0"` and `"zz"`
/// becomes `"aaa"`. Digits, lowercase and uppercase letters each wrap within
/// their own range. Without any alphanumeric character the last character is
/// bumped to the next code point.
pub fn increment(value: &str) -> String {
    let mut chars: Vec<char> = value.chars().collect();

    let Some(end) = chars.iter().rposition(|c| c.is_ascii_alphanumeric()) else {
        return bump_last(chars);
    };
    let start = chars[..end]
        .iter()
        .rposition(|c| !c.is_ascii_alphanumeric())
        .map_or(0, |i| i + 1);

    for i in (start..=end).rev() {
        let (next, carry) = step(chars[i]);
        chars[i] = next;
        if !carry {
            return chars.into_iter().collect();
        }
    }

    // Every position wrapped; grow the run on the left.
    let overflow = match chars[start] {
        '0' => '1',
        c => c,
    };
    chars.insert(start, overflow);
    chars.into_iter().collect()
}

fn step(c: char) -> (char, bool) {
    match c {
        '9' => ('0', true),
        'z' => ('a', true),
        'Z' => ('A', true),
        c => (char::from_u32(c as u32 + 1).unwrap_or(c), false),
    }
}

fn bump_last(mut chars: Vec<char>) -> String {
    if let Some(last) = chars.last_mut() {
        if let Some(next) = char::from_u32(*last as u32 + 1) {
            *last = next;
        }
    }
    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::increment;

    #[test]
    fn increments_zero_padded_suffix() {
        assert_eq!(increment("-0000"), "-0001");
        assert_eq!(increment("-0009"), "-0010");
        assert_eq!(increment("-0999"), "-1000");
    }

    #[test]
    fn carries_across_mixed_run() {
        assert_eq!(increment("a9"), "b0");
        assert_eq!(increment("Az"), "Ba");
        assert_eq!(increment("az"), "ba");
    }

    #[test]
    fn overflow_extends_the_run() {
        assert_eq!(increment("-9999"), "-10000");
        assert_eq!(increment("zz"), "aaa");
        assert_eq!(increment("Zz"), "AAa");
        assert_eq!(increment("x-99"), "x-100");
    }

    #[test]
    fn only_trailing_run_participates() {
        assert_eq!(increment("v1-09"), "v1-10");
        assert_eq!(increment("-a-"), "-b-");
    }

    #[test]
    fn non_alphanumeric_bumps_last_char() {
        assert_eq!(increment("-"), ".");
        assert_eq!(increment(""), "");
    }

    #[test]
    fn sequence_is_strictly_new() {
        let mut value = "-0000".to_string();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            assert!(seen.insert(value.clone()));
            value = increment(&value);
        }
        assert_eq!(value, "-0100");
    }
}
