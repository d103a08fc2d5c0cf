use std::collections::HashMap;
use std::fmt;

/// A character paired with its 1-based occurrence rank within its own word.
///
/// The second `p` of "apple" is `p2`. Two words share a glyph only when both
/// the character and the rank agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaggedGlyph {
    pub ch: char,
    pub occurrence: u32,
}

impl TaggedGlyph {
    pub const fn new(ch: char, occurrence: u32) -> Self {
        Self { ch, occurrence }
    }
}

impl fmt::Display for TaggedGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.ch, self.occurrence)
    }
}

/// An input word together with its tagged glyphs, in reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    glyphs: Vec<TaggedGlyph>,
}

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let glyphs = tag(&text);

        Self { text, glyphs }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn glyphs(&self) -> &[TaggedGlyph] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn contains(&self, glyph: TaggedGlyph) -> bool {
        self.glyphs.contains(&glyph)
    }

    /// Index of `glyph` in reading order, if this word has it.
    pub fn index_of(&self, glyph: TaggedGlyph) -> Option<usize> {
        self.glyphs.iter().position(|g| *g == glyph)
    }
}

/// Left-to-right scan with one counter per distinct character.
pub fn tag(text: &str) -> Vec<TaggedGlyph> {
    let mut seen: HashMap<char, u32> = HashMap::new();

    text.chars()
        .map(|ch| {
            let count = seen.entry(ch).or_insert(0);
            *count += 1;
            TaggedGlyph::new(ch, *count)
        })
        .collect()
}
