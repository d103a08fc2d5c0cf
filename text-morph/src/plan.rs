use std::collections::HashMap;

use crate::glyph::{TaggedGlyph, Word};

/// Last known rendered box of a glyph, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Position {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Glyphs of one word that persist into the next word.
///
/// `None` means the glyph has not been measured yet.
pub type SharedGlyphMap = HashMap<TaggedGlyph, Option<Position>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Untracked characters rendered and faded as one unit.
    Run(String),
    /// A glyph animated on its own.
    Glyph(TaggedGlyph),
}

impl Token {
    pub fn char_count(&self) -> usize {
        match self {
            Token::Run(run) => run.chars().count(),
            Token::Glyph(_) => 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FadePlan {
    pub tokens: Vec<Token>,
}

impl FadePlan {
    /// Concatenation of every token, which is always the original word.
    pub fn text(&self) -> String {
        let mut out = String::new();

        for token in &self.tokens {
            match token {
                Token::Run(run) => out.push_str(run),
                Token::Glyph(glyph) => out.push(glyph.ch),
            }
        }

        out
    }

    pub fn tracked(&self) -> impl Iterator<Item = TaggedGlyph> + '_ {
        self.tokens.iter().filter_map(|token| match token {
            Token::Glyph(glyph) => Some(*glyph),
            Token::Run(_) => None,
        })
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl<'a> IntoIterator for &'a FadePlan {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Frozen planner output for a whole word list. Produced by the solver,
/// replaced wholesale whenever the list changes.
#[derive(Debug, Clone)]
pub struct WordPlans {
    pub(crate) words: Vec<Word>,
    pub(crate) shared: Vec<SharedGlyphMap>,
    pub(crate) fade_in: Vec<FadePlan>,
    pub(crate) fade_out: Vec<FadePlan>,
    pub(crate) intro: Vec<FadePlan>,
}

impl WordPlans {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn word(&self, index: usize) -> &Word {
        &self.words[index]
    }

    pub fn shared(&self, index: usize) -> &SharedGlyphMap {
        &self.shared[index]
    }

    pub fn shared_mut(&mut self, index: usize) -> &mut SharedGlyphMap {
        &mut self.shared[index]
    }

    pub fn fade_in(&self, index: usize) -> &FadePlan {
        &self.fade_in[index]
    }

    pub fn fade_out(&self, index: usize) -> &FadePlan {
        &self.fade_out[index]
    }

    /// Plan for a word shown with nothing before it: every glyph fades in.
    pub fn intro(&self, index: usize) -> &FadePlan {
        &self.intro[index]
    }

    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.words.len()
    }

    pub fn prev_index(&self, index: usize) -> usize {
        (index + self.words.len() - 1) % self.words.len()
    }
}
