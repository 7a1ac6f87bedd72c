use std::fmt;

use unicode_width::UnicodeWidthChar;

use crate::scorer::Ranking;

const DEFAULT_MAX_WIDTH: usize = 60;

/// Plain-text table of a [`Ranking`], one row per sentence in rank order.
///
/// ```text
/// #1  * pos=1 score=7  Dogs bark loudly at cats.
/// #2  * pos=2 score=4  Cats purr.
/// #3    pos=0 score=3  Cats nap.
/// ```
///
/// Rows marked `*` are the ones a selection of [`RankingDisplay::with_selected`]
/// sentences would keep. Sentence text is cut to a display width, counting
/// wide characters as two columns.
pub struct RankingDisplay<'a> {
    ranking: &'a Ranking,
    max_width: usize,
    selected: usize,
}

impl<'a> RankingDisplay<'a> {
    pub fn new(ranking: &'a Ranking) -> Self {
        Self {
            ranking,
            max_width: DEFAULT_MAX_WIDTH,
            selected: 0,
        }
    }

    /// Display width available for sentence text.
    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width.max(1);
        self
    }

    /// Mark the first `count` rows as selected.
    pub fn with_selected(mut self, count: usize) -> Self {
        self.selected = count;
        self
    }
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }

    // leave one column for the ellipsis
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

impl<'a> fmt::Display for RankingDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos_width = self.ranking.len().saturating_sub(1).to_string().len();
        let score_width = self
            .ranking
            .best()
            .map(|s| s.score.to_string().len())
            .unwrap_or(1);

        for (rank, sentence) in self.ranking.iter().enumerate() {
            let marker = if rank < self.selected { '*' } else { ' ' };
            let label = format!("#{}", rank + 1);
            writeln!(
                f,
                "{:<4}{} pos={:<pw$} score={:<sw$}  {}",
                label,
                marker,
                sentence.position,
                sentence.score,
                truncate_to_width(&sentence.text, self.max_width),
                pw = pos_width,
                sw = score_width,
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_by_display_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exactly ten", 11), "exactly ten");
        assert_eq!(truncate_to_width("a longer sentence", 8), "a longe…");
        // each CJK character is two columns wide
        assert_eq!(truncate_to_width("漢字テキスト", 7), "漢字テ…");
    }
}
