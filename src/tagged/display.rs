use super::*;
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

/// Box-drawing rendering of a tagged sentence, one annotation line per token.
///
/// ```text
/// Ben  does  not  win
/// ╰─╯PROPN NNP ben
///      ╰──╯AUX VBZ do
///            ╰─╯PART RB not
///                 ╰─╯VERB VB win
/// ```
pub struct TaggedSentenceDisplay<'a> {
    sentence: &'a TaggedSentence,
    show_lemmas: bool,
    skip_punct: bool,
}

impl<'a> TaggedSentenceDisplay<'a> {
    pub fn new(sentence: &'a TaggedSentence) -> Self {
        TaggedSentenceDisplay {
            sentence,
            show_lemmas: true,
            skip_punct: false,
        }
    }

    /// Takes self, hides lemmas
    pub fn without_lemmas(mut self) -> Self {
        self.show_lemmas = false;
        self
    }

    /// Takes self, leaves punctuation tokens unannotated
    pub fn without_punct(mut self) -> Self {
        self.skip_punct = true;
        self
    }
}

impl<'a> fmt::Display for TaggedSentenceDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const GAP: &str = "  ";

        // Display-column span of every token in the text line.
        let mut text_line = String::new();
        let mut spans = Vec::with_capacity(self.sentence.len());
        for (idx, token) in self.sentence.tokens().iter().enumerate() {
            if idx > 0 {
                text_line.push_str(GAP);
            }
            let start = text_line.width();
            text_line.push_str(&token.text);
            spans.push((start, text_line.width()));
        }
        f.write_str(&text_line)?;

        for (token, &(start, end)) in self.sentence.tokens().iter().zip(&spans) {
            if self.skip_punct && token.pos == Pos::Punct {
                continue;
            }

            write!(f, "\n{:indent$}╰", "", indent = start)?;
            if end - start > 1 {
                for _ in start + 1..end - 1 {
                    f.write_char('─')?;
                }
                f.write_char('╯')?;
            }

            write!(f, "{} {}", token.pos, token.tag)?;
            if self.show_lemmas {
                write!(f, " {}", token.lemma)?;
            }
        }

        Ok(())
    }
}
