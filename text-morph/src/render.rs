use std::time::Instant;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::StatefulWidget;
use unicode_width::UnicodeWidthChar;

use crate::controller::{MorphText, Scene};
use crate::fade;
use crate::glyph::Word;
use crate::plan::{FadePlan, Position, Token};

/// Paints the `MorphText` state as it should look at one instant.
///
/// Every glyph of the word being shown is recorded in the state's glyph
/// registry at its resting box, which is where position tracking reads it.
#[derive(Debug, Clone, Copy)]
pub struct MorphTextView {
    now: Instant,
}

impl MorphTextView {
    pub fn at(now: Instant) -> Self {
        Self { now }
    }
}

impl StatefulWidget for MorphTextView {
    type State = MorphText;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut MorphText) {
        if area.is_empty() {
            return;
        }

        let style = state.config().style;
        let alignment = state.config().alignment;

        match state.scene(self.now) {
            Scene::Blank => {}

            Scene::Still { word } => {
                let boxes = layout(state.plans().word(word), area, alignment);
                let plan = state.plans().intro(word);
                paint_plan(plan, &boxes, 1.0, 1.0, style, buf);
                record(state, word, &boxes, self.now);
            }

            Scene::FadeIn { word, intro, t } => {
                let plans = state.plans();
                let boxes = layout(plans.word(word), area, alignment);
                let plan = if intro {
                    plans.intro(word)
                } else {
                    plans.fade_in(word)
                };

                paint_plan(plan, &boxes, t, 1.0, style, buf);
                record(state, word, &boxes, self.now);
            }

            Scene::FadeOut { from, to, t } => {
                let plans = state.plans();
                let src_word = plans.word(from);
                let dst_word = plans.word(to);
                let src_boxes = layout(src_word, area, alignment);
                let dst_boxes = layout(dst_word, area, alignment);
                let plan = plans.fade_out(from);

                paint_runs(plan, &src_boxes, 1.0 - t, style, buf);

                for glyph in plan.tracked() {
                    let measured = plans.shared(from).get(&glyph).copied().flatten();
                    let dst = dst_word.index_of(glyph).and_then(|i| dst_boxes[i]);

                    let Some(dst) = dst else {
                        // Clipped in the next word: fade where it stands.
                        let src = measured
                            .or_else(|| src_word.index_of(glyph).and_then(|i| src_boxes[i]));
                        if let Some(src) = src {
                            paint_glyph(buf, src.x, src.y, glyph.ch, style, 1.0 - t);
                        }
                        continue;
                    };

                    // Unmeasured glyphs have nowhere to travel from.
                    let src = measured.unwrap_or(dst);

                    let x = lerp_pos(src.x, dst.x, t);
                    let y = lerp_pos(src.y, dst.y, t);

                    if x >= area.right() || y >= area.bottom() {
                        continue;
                    }

                    paint_glyph(buf, x, y, glyph.ch, style, 1.0);
                }
            }
        }
    }
}

/// Resting box of every glyph of `word` on the first row of `area`.
/// Glyphs that do not fit are `None`.
pub fn layout(word: &Word, area: Rect, alignment: Alignment) -> Vec<Option<Position>> {
    let widths: Vec<u16> = word
        .glyphs()
        .iter()
        .map(|g| g.ch.width().unwrap_or(0) as u16)
        .collect();
    let total: u16 = widths.iter().fold(0u16, |acc, w| acc.saturating_add(*w));

    let offset = match alignment {
        Alignment::Left => 0,
        Alignment::Center => area.width.saturating_sub(total) / 2,
        Alignment::Right => area.width.saturating_sub(total),
    };

    let mut x = area.x.saturating_add(offset);

    widths
        .into_iter()
        .map(|width| {
            let fits = x.saturating_add(width) <= area.right();
            let position = fits.then(|| Position::new(x, area.y, width, 1));
            x = x.saturating_add(width);
            position
        })
        .collect()
}

fn record(state: &mut MorphText, word: usize, boxes: &[Option<Position>], now: Instant) {
    let glyphs = state.plans().word(word).glyphs().to_vec();
    let registry = state.registry_mut();

    registry.forget_word(word);

    for (glyph, position) in glyphs.into_iter().zip(boxes) {
        if let Some(position) = position {
            registry.record(word, glyph, *position);
        }
    }

    state.glyphs_rendered(word, now);
}

/// Runs at `run_opacity`, tracked glyphs at `glyph_opacity`, all at rest.
fn paint_plan(
    plan: &FadePlan,
    boxes: &[Option<Position>],
    run_opacity: f32,
    glyph_opacity: f32,
    style: Style,
    buf: &mut Buffer,
) {
    let mut index = 0;

    for token in plan {
        let opacity = match token {
            Token::Run(_) => run_opacity,
            Token::Glyph(_) => glyph_opacity,
        };

        for ch in token_chars(token) {
            if let Some(Some(pos)) = boxes.get(index) {
                paint_glyph(buf, pos.x, pos.y, ch, style, opacity);
            }

            index += 1;
        }
    }
}

fn paint_runs(
    plan: &FadePlan,
    boxes: &[Option<Position>],
    opacity: f32,
    style: Style,
    buf: &mut Buffer,
) {
    let mut index = 0;

    for token in plan {
        match token {
            Token::Run(run) => {
                for ch in run.chars() {
                    if let Some(Some(pos)) = boxes.get(index) {
                        paint_glyph(buf, pos.x, pos.y, ch, style, opacity);
                    }

                    index += 1;
                }
            }
            Token::Glyph(_) => index += 1,
        }
    }
}

fn token_chars(token: &Token) -> Box<dyn Iterator<Item = char> + '_> {
    match token {
        Token::Run(run) => Box::new(run.chars()),
        Token::Glyph(glyph) => Box::new(std::iter::once(glyph.ch)),
    }
}

fn paint_glyph(buf: &mut Buffer, x: u16, y: u16, ch: char, style: Style, opacity: f32) {
    let fg = style.fg.unwrap_or(Color::Reset);
    let bg = style.bg.unwrap_or(Color::Reset);

    let Some(fg) = fade::with_opacity(fg, bg, opacity) else {
        return;
    };

    let Some(cell) = buf.cell_mut((x, y)) else {
        return;
    };

    cell.set_char(ch);
    cell.set_style(style.fg(fg));

    // The glyph hides the cells it spills into.
    let width = ch.width().unwrap_or(1) as u16;
    for trailing in (1..width).filter_map(|dx| x.checked_add(dx)) {
        if let Some(cell) = buf.cell_mut((trailing, y)) {
            cell.reset();
        }
    }
}

fn lerp_pos(src: u16, dst: u16, t: f32) -> u16 {
    let s = src as f32;
    let d = dst as f32;
    (s + (d - s) * t.clamp(0.0, 1.0)).round() as u16
}
