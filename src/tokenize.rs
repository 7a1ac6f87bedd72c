//! Text normalization, word extraction and sentence splitting.
//!
//! The rules are deliberately small:
//! - A *word character* is an ASCII letter, an ASCII digit, or `_`.
//! - Normalization lowercases the text and drops every character that is
//!   neither a word character nor whitespace.
//! - Words are the whitespace-separated pieces of the normalized text.
//! - A sentence is a maximal run of non-terminators followed by one or more
//!   terminators (`.`, `!`, `?`).

/// Characters that end a sentence.
pub const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?'];

/// Shortest word (in characters) counted as informative when summarizing.
pub const SUMMARY_MIN_WORD_LEN: usize = 4;

/// Shortest word (in characters) counted as informative in conversation and
/// theme analysis.
pub const THEME_MIN_WORD_LEN: usize = 5;

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub(crate) fn is_terminator(c: char) -> bool {
    SENTENCE_TERMINATORS.contains(&c)
}

/// Lowercase `text` and strip everything that is not a word character or
/// whitespace.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|&c| is_word_char(c) || c.is_whitespace())
        .collect()
}

/// Normalized words of `text` that are at least `min_len` characters long.
pub fn informative_words(text: &str, min_len: usize) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .filter(|word| word.chars().count() >= min_len)
        .map(str::to_string)
        .collect()
}

/// Number of whitespace-separated words in the trimmed text.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Split `text` into sentences, keeping each sentence's terminators.
///
/// Text trailing the last terminator is not a sentence. When no terminated
/// sentence exists at all, the whole input is returned as the only sentence,
/// so non-empty input never yields an empty list.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start: Option<usize> = None;
    let mut in_terminators = false;

    for (idx, c) in text.char_indices() {
        if is_terminator(c) {
            if start.is_some() {
                in_terminators = true;
            }
            continue;
        }
        if in_terminators {
            if let Some(begin) = start.take() {
                sentences.push(&text[begin..idx]);
            }
            in_terminators = false;
        }
        if start.is_none() {
            start = Some(idx);
        }
    }

    if in_terminators {
        if let Some(begin) = start {
            sentences.push(&text[begin..]);
        }
    }

    if sentences.is_empty() && !text.is_empty() {
        sentences.push(text);
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_punctuation_and_lowercases() {
        assert_eq!(normalize("Hello, World! It's 2024_v2."), "hello world its 2024_v2");
    }

    #[test]
    fn normalize_keeps_whitespace_runs() {
        assert_eq!(normalize("a -- b\tc"), "a  b\tc");
    }

    #[test]
    fn informative_words_apply_length_cutoff() {
        let words = informative_words("The cat sat upon the mat, quietly.", SUMMARY_MIN_WORD_LEN);
        assert_eq!(words, vec!["upon", "quietly"]);

        let words = informative_words("The cat sat upon the mat, quietly.", THEME_MIN_WORD_LEN);
        assert_eq!(words, vec!["quietly"]);
    }

    #[test]
    fn informative_words_of_empty_text() {
        assert!(informative_words("", SUMMARY_MIN_WORD_LEN).is_empty());
        assert!(informative_words("  ?! ", SUMMARY_MIN_WORD_LEN).is_empty());
    }

    #[test]
    fn word_count_uses_whitespace_runs() {
        assert_eq!(word_count("  one   two\nthree  "), 3);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn split_keeps_terminator_runs() {
        let sentences = split_sentences("Really?! Yes. Fine...");
        assert_eq!(sentences, vec!["Really?!", " Yes.", " Fine..."]);
    }

    #[test]
    fn split_drops_unterminated_tail() {
        let sentences = split_sentences("First one. Second one! and a tail");
        assert_eq!(sentences, vec!["First one.", " Second one!"]);
    }

    #[test]
    fn split_skips_leading_terminators() {
        let sentences = split_sentences("...Hello there. Bye!");
        assert_eq!(sentences, vec!["Hello there.", " Bye!"]);
    }

    #[test]
    fn split_falls_back_to_whole_text() {
        assert_eq!(split_sentences("no terminator here"), vec!["no terminator here"]);
        assert_eq!(split_sentences("?!"), vec!["?!"]);
    }

    #[test]
    fn split_of_empty_text_is_empty() {
        assert!(split_sentences("").is_empty());
    }

    #[test]
    fn split_handles_multibyte_text() {
        let sentences = split_sentences("Café au lait. Ünïcode wörks!");
        assert_eq!(sentences, vec!["Café au lait.", " Ünïcode wörks!"]);
    }
}
