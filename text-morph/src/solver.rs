use tracing::debug;

use crate::error::MorphError;
use crate::glyph::Word;
use crate::plan::{FadePlan, SharedGlyphMap, Token, WordPlans};

/// Tags every word, matches each against its cyclic successor and builds
/// the fade-in/fade-out token sequences.
pub fn plan<S: AsRef<str>>(words: &[S]) -> Result<WordPlans, MorphError> {
    if words.len() < 2 {
        return Err(MorphError::TooFewWords { count: words.len() });
    }

    Ok(build(words.iter().map(|w| Word::new(w.as_ref())).collect()))
}

/// `words` must hold at least two entries; `plan` checks that.
pub(crate) fn build(words: Vec<Word>) -> WordPlans {
    let n = words.len();

    let shared: Vec<SharedGlyphMap> = (0..n)
        .map(|i| shared_glyphs(&words[i], &words[(i + 1) % n]))
        .collect();

    let fade_out = (0..n).map(|i| sequence(&words[i], &shared[i])).collect();

    // Word i fades in against what word i-1 carried over.
    let fade_in = (0..n)
        .map(|i| sequence(&words[i], &shared[(i + n - 1) % n]))
        .collect();

    let intro = words.iter().map(intro_plan).collect();

    debug!(
        words = n,
        shared = shared.iter().map(|m| m.len()).sum::<usize>(),
        "planned word list"
    );

    WordPlans {
        words,
        shared,
        fade_in,
        fade_out,
        intro,
    }
}

/// Glyphs of `current` that also occur, by tag, anywhere in `next`.
pub fn shared_glyphs(current: &Word, next: &Word) -> SharedGlyphMap {
    current
        .glyphs()
        .iter()
        .filter(|g| next.contains(**g))
        .map(|g| (*g, None))
        .collect()
}

/// Splits `word` into literal runs and standalone glyphs, tracking every
/// glyph present in `tracked`.
pub fn sequence(word: &Word, tracked: &SharedGlyphMap) -> FadePlan {
    let mut tokens = Vec::new();
    let mut run = String::new();

    for glyph in word.glyphs() {
        if tracked.contains_key(glyph) {
            if !run.is_empty() {
                tokens.push(Token::Run(std::mem::take(&mut run)));
            }

            tokens.push(Token::Glyph(*glyph));
        } else {
            run.push(glyph.ch);
        }
    }

    if !run.is_empty() {
        tokens.push(Token::Run(run));
    }

    FadePlan { tokens }
}

fn intro_plan(word: &Word) -> FadePlan {
    if word.is_empty() {
        return FadePlan::default();
    }

    FadePlan {
        tokens: vec![Token::Run(word.text().to_string())],
    }
}
