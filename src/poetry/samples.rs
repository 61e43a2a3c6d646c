//! Bundled example poems.

const EXAMPLE_POEMS: &[&str] = &[
    "The rose is sick. Invisible worm,\n\
     That flies in the nyght, in the howling storm,\n\
     Has found out thy bed of crimson joy,\n\
     And his dark secret love does thy life destroy.",
    "I wandered lonely as a clowd\n\
     That floats on high o'er vales and hills,\n\
     When all at once I saw a crowd,\n\
     A host, of golden daffodills.",
    "Two roads diverged in a yellow wood,\n\
     And sorry I could not travel both\n\
     And be one traveler, long I stood\n\
     And looked down one as far as I could\n\
     To where it bent in the undergrowth;\n\
     \n\
     Then took the other, as just as fair,\n\
     And having perhaps the better claim,\n\
     Because it was grassy and wanted wear;\n\
     Though as for that the passing there\n\
     Had worn them really about the same.",
];

/// Number of bundled poems.
pub fn example_count() -> usize {
    EXAMPLE_POEMS.len()
}

/// An example poem. Indexes wrap around.
pub fn example_poem(index: usize) -> &'static str {
    EXAMPLE_POEMS[index % EXAMPLE_POEMS.len()]
}

/// All bundled poems in order.
pub fn example_poems() -> &'static [&'static str] {
    EXAMPLE_POEMS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_wraps() {
        assert_eq!(example_poem(0), example_poem(example_count()));
        assert!(example_poem(1).starts_with("I wandered lonely"));
    }

    #[test]
    fn test_line_breaks_preserved() {
        assert_eq!(example_poem(0).lines().count(), 4);
        assert_eq!(example_poem(2).lines().count(), 11);
        assert_eq!(example_poem(2).lines().nth(5), Some(""));
    }
}
