use std::time::Instant;

use tracing::{debug, warn};

use crate::config::{MorphConfig, PlaybackMode};
use crate::error::MorphError;
use crate::plan::WordPlans;
use crate::solver;
use crate::timeline::{Progress, Timeline};
use crate::tracker::{GlyphRegistry, PositionTracker};

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    AnimatingIn {
        word: usize,
        timeline: Timeline,
        /// Nothing was on screen before this word.
        intro: bool,
    },
    Displaying {
        word: usize,
        /// `None` while paused.
        deadline: Option<Instant>,
    },
    AnimatingOut {
        from: usize,
        to: usize,
        timeline: Timeline,
    },
    Finished {
        word: usize,
    },
}

/// What the widget should paint, with eased progress already applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scene {
    Blank,
    FadeIn { word: usize, intro: bool, t: f32 },
    Still { word: usize },
    FadeOut { from: usize, to: usize, t: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Nothing visible changed.
    Idle,
    Redraw,
}

type TransitionCallback = Box<dyn FnMut(usize)>;
type FinishedCallback = Box<dyn FnMut()>;

/// Sequences the words: fade in, hold, fade out toward the next word, repeat.
///
/// Driven by `tick(now)` from the host's frame loop; never spawns or sleeps.
pub struct MorphText {
    config: MorphConfig,
    plans: WordPlans,
    phase: Phase,
    mode: PlaybackMode,
    start_pending: bool,
    passes: u32,
    tracker: PositionTracker,
    registry: GlyphRegistry,
    on_transition_start: Option<TransitionCallback>,
    on_finished: Option<FinishedCallback>,
}

impl MorphText {
    pub fn new(config: MorphConfig) -> Result<Self, MorphError> {
        if let Err(err) = config.validate() {
            warn!(%err, "rejected morph config");
            return Err(err);
        }

        let plans = solver::plan(&config.words)?;
        let tracker = PositionTracker::new(config.retry_delay, config.max_retries);
        let mode = settled(config.mode);

        Ok(Self {
            config,
            plans,
            phase: Phase::Idle,
            mode,
            start_pending: mode.is_running(),
            passes: 0,
            tracker,
            registry: GlyphRegistry::new(),
            on_transition_start: None,
            on_finished: None,
        })
    }

    /// Called with the index of the word about to be shown.
    pub fn on_transition_start(mut self, callback: impl FnMut(usize) + 'static) -> Self {
        self.on_transition_start = Some(Box::new(callback));
        self
    }

    /// Called once when a non-looping sequence runs out of passes.
    pub fn on_finished(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_finished = Some(Box::new(callback));
        self
    }

    pub fn config(&self) -> &MorphConfig {
        &self.config
    }

    pub fn plans(&self) -> &WordPlans {
        &self.plans
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    /// Completed passes through the whole list.
    pub fn completed_passes(&self) -> u32 {
        self.passes
    }

    /// Index of the word currently on screen (the outgoing one mid-transition).
    pub fn current_index(&self) -> usize {
        match self.phase {
            Phase::Idle => 0,
            Phase::AnimatingIn { word, .. }
            | Phase::Displaying { word, .. }
            | Phase::Finished { word } => word,
            Phase::AnimatingOut { from, .. } => from,
        }
    }

    pub fn registry(&self) -> &GlyphRegistry {
        &self.registry
    }

    pub(crate) fn registry_mut(&mut self) -> &mut GlyphRegistry {
        &mut self.registry
    }

    pub fn scene(&self, now: Instant) -> Scene {
        match &self.phase {
            Phase::Idle => Scene::Blank,
            Phase::AnimatingIn {
                word,
                timeline,
                intro,
            } => Scene::FadeIn {
                word: *word,
                intro: *intro,
                t: timeline.value(now),
            },
            Phase::Displaying { word, .. } | Phase::Finished { word } => {
                Scene::Still { word: *word }
            }
            Phase::AnimatingOut { from, to, timeline } => Scene::FadeOut {
                from: *from,
                to: *to,
                t: timeline.value(now),
            },
        }
    }

    /// Advances at most one phase.
    pub fn tick(&mut self, now: Instant) -> Tick {
        if !self.mode.is_running() {
            return Tick::Idle;
        }

        if self.start_pending {
            self.start_pending = false;
            self.animate_in(0, true, now);
            return Tick::Redraw;
        }

        match self.phase.clone() {
            Phase::Idle | Phase::Finished { .. } => Tick::Idle,

            Phase::AnimatingIn { word, timeline, .. } => match timeline.poll(now) {
                Progress::Running(_) => Tick::Redraw,
                Progress::Complete => {
                    self.display(word, now);
                    Tick::Redraw
                }
            },

            Phase::Displaying { word, deadline } => {
                self.tracker
                    .poll(now, &self.registry, self.plans.shared_mut(word));

                match deadline {
                    Some(deadline) if now >= deadline => {
                        self.leave(word, now);
                        Tick::Redraw
                    }
                    _ => Tick::Idle,
                }
            }

            Phase::AnimatingOut { to, timeline, .. } => match timeline.poll(now) {
                Progress::Running(_) => Tick::Redraw,
                Progress::Complete => {
                    self.animate_in(to, false, now);
                    Tick::Redraw
                }
            },
        }
    }

    /// `Restart` rewinds and starts over; the mode then reads `Play`.
    pub fn set_mode(&mut self, mode: PlaybackMode, now: Instant) {
        let prev = self.mode;

        if prev == mode && mode != PlaybackMode::Restart {
            return;
        }

        debug!(?prev, ?mode, "playback mode change");

        match mode {
            PlaybackMode::Stop => {
                self.reset();
            }

            PlaybackMode::Pause => {
                if prev.is_running() {
                    self.freeze(now);
                }
            }

            PlaybackMode::Play | PlaybackMode::Loop => {
                let in_progress = !matches!(self.phase, Phase::Idle | Phase::Finished { .. });

                if prev == PlaybackMode::Pause && in_progress {
                    self.thaw(now);
                } else if !(prev.is_running() && (in_progress || self.start_pending)) {
                    self.reset();
                    self.start_pending = true;
                }
            }

            PlaybackMode::Restart => {
                self.reset();
                self.plans = solver::build(self.plans.words().to_vec());
                self.start_pending = true;
            }
        }

        self.mode = settled(mode);
    }

    /// Replaces the word list. Plans are rebuilt and playback rewinds to the
    /// first word; on error nothing changes.
    pub fn set_words<I, S>(&mut self, words: I) -> Result<(), MorphError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let plans = solver::plan(&words)?;

        debug!(words = words.len(), "word list replaced");

        self.config.words = words;
        self.plans = plans;
        self.reset();
        self.start_pending = self.mode.is_running();

        Ok(())
    }

    /// Called by the widget after it records `word`'s glyph boxes. While the
    /// word is held, the shared-glyph positions follow the latest render.
    pub(crate) fn glyphs_rendered(&mut self, word: usize, now: Instant) {
        let holding = matches!(
            self.phase,
            Phase::Displaying { word: w, deadline: Some(_) } if w == word
        );

        if holding {
            self.track(word, now);
        }
    }

    fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.passes = 0;
        self.start_pending = false;
        self.tracker.cancel();
        self.registry.clear();

        for i in 0..self.plans.len() {
            for position in self.plans.shared_mut(i).values_mut() {
                *position = None;
            }
        }
    }

    fn freeze(&mut self, now: Instant) {
        match &mut self.phase {
            Phase::AnimatingIn { timeline, .. } | Phase::AnimatingOut { timeline, .. } => {
                timeline.pause(now);
            }
            Phase::Displaying { deadline, .. } => {
                *deadline = None;
                self.tracker.cancel();
            }
            Phase::Idle | Phase::Finished { .. } => {}
        }
    }

    fn thaw(&mut self, now: Instant) {
        match &mut self.phase {
            Phase::AnimatingIn { timeline, .. } | Phase::AnimatingOut { timeline, .. } => {
                timeline.resume(now);
            }
            Phase::Displaying { word, deadline } => {
                *deadline = Some(now + self.config.display);
                let word = *word;
                self.track(word, now);
            }
            Phase::Idle | Phase::Finished { .. } => {}
        }
    }

    fn animate_in(&mut self, word: usize, intro: bool, now: Instant) {
        debug!(word, intro, "animating in");

        if intro {
            self.notify_transition(word);
        }

        self.phase = Phase::AnimatingIn {
            word,
            timeline: Timeline::started_at(self.config.transition, self.config.curve, now),
            intro,
        };
    }

    fn display(&mut self, word: usize, now: Instant) {
        debug!(word, "displaying");

        self.phase = Phase::Displaying {
            word,
            deadline: Some(now + self.config.display),
        };
        self.track(word, now);
    }

    fn track(&mut self, word: usize, now: Instant) {
        let glyphs: Vec<_> = self.plans.shared(word).keys().copied().collect();
        self.tracker.request(word, glyphs, now);
    }

    fn leave(&mut self, word: usize, now: Instant) {
        self.tracker.cancel();

        if word + 1 == self.plans.len() {
            self.passes += 1;

            let repeats = self.config.repeat_count.max(0) as u32;

            if self.mode != PlaybackMode::Loop && self.passes > repeats {
                debug!(word, passes = self.passes, "sequence finished");
                self.phase = Phase::Finished { word };

                if let Some(callback) = self.on_finished.as_mut() {
                    callback();
                }

                return;
            }
        }

        let to = self.plans.next_index(word);
        debug!(from = word, to, "animating out");

        self.notify_transition(to);
        self.phase = Phase::AnimatingOut {
            from: word,
            to,
            timeline: Timeline::started_at(self.config.transition, self.config.curve, now),
        };
    }

    fn notify_transition(&mut self, word: usize) {
        if let Some(callback) = self.on_transition_start.as_mut() {
            callback(word);
        }
    }
}

fn settled(mode: PlaybackMode) -> PlaybackMode {
    match mode {
        PlaybackMode::Restart => PlaybackMode::Play,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    use crate::glyph::TaggedGlyph;
    use crate::plan::Position;

    use super::*;

    const MS: Duration = Duration::from_millis(1);

    fn config(words: &[&str], mode: PlaybackMode) -> MorphConfig {
        MorphConfig {
            transition: MS * 100,
            display: MS * 200,
            mode,
            ..MorphConfig::with_words(words.iter().copied())
        }
    }

    /// Ticks every 10ms from `from` up to and including `to` (milliseconds
    /// after `t0`).
    fn run(morph: &mut MorphText, t0: Instant, from: u64, to: u64) {
        let mut ms = from;

        while ms <= to {
            morph.tick(t0 + Duration::from_millis(ms));
            ms += 10;
        }
    }

    fn recorder(morph: MorphText) -> (MorphText, Rc<RefCell<Vec<usize>>>, Rc<Cell<u32>>) {
        let starts = Rc::new(RefCell::new(Vec::new()));
        let finished = Rc::new(Cell::new(0));

        let s = Rc::clone(&starts);
        let f = Rc::clone(&finished);
        let morph = morph
            .on_transition_start(move |i| s.borrow_mut().push(i))
            .on_finished(move || f.set(f.get() + 1));

        (morph, starts, finished)
    }

    #[test]
    fn rejects_bad_config() {
        assert_eq!(
            MorphText::new(MorphConfig::with_words(["solo"])).err(),
            Some(MorphError::TooFewWords { count: 1 })
        );

        let negative = MorphConfig {
            repeat_count: -3,
            ..MorphConfig::with_words(["a", "b"])
        };
        assert_eq!(
            MorphText::new(negative).err(),
            Some(MorphError::NegativeRepeatCount { count: -3 })
        );
    }

    #[test]
    fn first_tick_starts_intro() {
        let t0 = Instant::now();
        let (mut morph, starts, _) =
            recorder(MorphText::new(config(&["cat", "act"], PlaybackMode::Play)).unwrap());

        assert_eq!(morph.scene(t0), Scene::Blank);
        assert_eq!(morph.tick(t0), Tick::Redraw);
        assert!(matches!(
            morph.phase(),
            Phase::AnimatingIn {
                word: 0,
                intro: true,
                ..
            }
        ));
        assert_eq!(*starts.borrow(), vec![0]);
    }

    #[test]
    fn phases_follow_in_order() {
        let t0 = Instant::now();
        let mut morph = MorphText::new(config(&["cat", "act"], PlaybackMode::Loop)).unwrap();

        morph.tick(t0);
        morph.tick(t0 + MS * 100);
        assert!(matches!(morph.phase(), Phase::Displaying { word: 0, .. }));

        assert_eq!(morph.tick(t0 + MS * 200), Tick::Idle);

        morph.tick(t0 + MS * 300);
        assert!(matches!(
            morph.phase(),
            Phase::AnimatingOut { from: 0, to: 1, .. }
        ));

        morph.tick(t0 + MS * 400);
        assert!(matches!(
            morph.phase(),
            Phase::AnimatingIn {
                word: 1,
                intro: false,
                ..
            }
        ));
        assert_eq!(morph.current_index(), 1);
    }

    #[test]
    fn play_once_finishes_after_one_pass() {
        let t0 = Instant::now();
        let (mut morph, starts, finished) =
            recorder(MorphText::new(config(&["cat", "act"], PlaybackMode::Play)).unwrap());

        run(&mut morph, t0, 0, 5_000);

        assert_eq!(finished.get(), 1);
        assert_eq!(*starts.borrow(), vec![0, 1]);
        assert_eq!(morph.phase(), &Phase::Finished { word: 1 });
        assert_eq!(morph.completed_passes(), 1);
        assert_eq!(morph.scene(t0 + MS * 5_000), Scene::Still { word: 1 });
    }

    #[test]
    fn repeat_count_adds_passes() {
        let t0 = Instant::now();
        let cfg = MorphConfig {
            repeat_count: 1,
            ..config(&["cat", "act"], PlaybackMode::Play)
        };
        let (mut morph, starts, finished) = recorder(MorphText::new(cfg).unwrap());

        run(&mut morph, t0, 0, 10_000);

        assert_eq!(finished.get(), 1);
        assert_eq!(*starts.borrow(), vec![0, 1, 0, 1]);
        assert_eq!(morph.completed_passes(), 2);
    }

    #[test]
    fn loop_ignores_repeat_count() {
        let t0 = Instant::now();
        let (mut morph, starts, finished) =
            recorder(MorphText::new(config(&["cat", "act"], PlaybackMode::Loop)).unwrap());

        run(&mut morph, t0, 0, 5_000);

        assert_eq!(finished.get(), 0);
        assert!(starts.borrow().len() > 4);
        assert!(morph.completed_passes() > 1);
    }

    #[test]
    fn wrapped_word_is_not_an_intro() {
        let t0 = Instant::now();
        let mut morph = MorphText::new(config(&["cat", "act"], PlaybackMode::Loop)).unwrap();

        // in 0-100, hold 100-300, out 300-400, in 400-500, hold 500-700, out 700-800.
        run(&mut morph, t0, 0, 800);

        assert!(matches!(
            morph.phase(),
            Phase::AnimatingIn {
                word: 0,
                intro: false,
                ..
            }
        ));
    }

    #[test]
    fn pause_freezes_animation() {
        let t0 = Instant::now();
        let mut morph = MorphText::new(config(&["cat", "act"], PlaybackMode::Loop)).unwrap();

        morph.tick(t0);
        morph.set_mode(PlaybackMode::Pause, t0 + MS * 50);

        let frozen = morph.scene(t0 + MS * 50);
        assert_eq!(morph.tick(t0 + MS * 5_000), Tick::Idle);
        assert_eq!(morph.scene(t0 + MS * 5_000), frozen);

        morph.set_mode(PlaybackMode::Loop, t0 + MS * 5_000);
        morph.tick(t0 + MS * 5_040);
        assert!(matches!(morph.phase(), Phase::AnimatingIn { word: 0, .. }));

        morph.tick(t0 + MS * 5_050);
        assert!(matches!(morph.phase(), Phase::Displaying { word: 0, .. }));
    }

    #[test]
    fn pause_cancels_display_timer() {
        let t0 = Instant::now();
        let (mut morph, starts, _) =
            recorder(MorphText::new(config(&["cat", "act"], PlaybackMode::Loop)).unwrap());

        morph.tick(t0);
        morph.tick(t0 + MS * 100);
        morph.set_mode(PlaybackMode::Pause, t0 + MS * 150);

        assert_eq!(
            morph.phase(),
            &Phase::Displaying {
                word: 0,
                deadline: None
            }
        );

        run(&mut morph, t0, 150, 3_000);
        assert_eq!(*starts.borrow(), vec![0]);

        // Resuming waits a full display period again.
        morph.set_mode(PlaybackMode::Play, t0 + MS * 3_000);
        morph.tick(t0 + MS * 3_100);
        assert!(matches!(morph.phase(), Phase::Displaying { word: 0, .. }));

        morph.tick(t0 + MS * 3_200);
        assert_eq!(*starts.borrow(), vec![0, 1]);
    }

    #[test]
    fn stop_rewinds_and_goes_quiet() {
        let t0 = Instant::now();
        let (mut morph, starts, finished) =
            recorder(MorphText::new(config(&["cat", "act", "tac"], PlaybackMode::Loop)).unwrap());

        run(&mut morph, t0, 0, 450);
        morph.set_mode(PlaybackMode::Stop, t0 + MS * 450);

        assert_eq!(morph.phase(), &Phase::Idle);
        assert_eq!(morph.current_index(), 0);
        assert_eq!(morph.completed_passes(), 0);

        let before = starts.borrow().len();
        run(&mut morph, t0, 450, 5_000);
        assert_eq!(starts.borrow().len(), before);
        assert_eq!(finished.get(), 0);

        morph.set_mode(PlaybackMode::Play, t0 + MS * 5_000);
        morph.tick(t0 + MS * 5_000);
        assert!(matches!(
            morph.phase(),
            Phase::AnimatingIn {
                word: 0,
                intro: true,
                ..
            }
        ));
    }

    #[test]
    fn switching_play_and_loop_keeps_position() {
        let t0 = Instant::now();
        let mut morph = MorphText::new(config(&["cat", "act"], PlaybackMode::Play)).unwrap();

        run(&mut morph, t0, 0, 450);
        morph.set_mode(PlaybackMode::Loop, t0 + MS * 450);

        assert!(matches!(morph.phase(), Phase::AnimatingIn { word: 1, .. }));
    }

    #[test]
    fn restart_discards_positions() {
        let t0 = Instant::now();
        let mut morph = MorphText::new(config(&["cat", "act"], PlaybackMode::Loop)).unwrap();
        let c = TaggedGlyph::new('c', 1);

        run(&mut morph, t0, 0, 450);
        morph
            .plans
            .shared_mut(0)
            .insert(c, Some(Position::new(1, 0, 1, 1)));

        morph.set_mode(PlaybackMode::Restart, t0 + MS * 450);

        assert_eq!(morph.plans().shared(0)[&c], None);
        assert!(morph.registry().is_empty());

        morph.tick(t0 + MS * 460);
        assert!(matches!(
            morph.phase(),
            Phase::AnimatingIn {
                word: 0,
                intro: true,
                ..
            }
        ));
    }

    #[test]
    fn restart_honours_repeat_count() {
        let t0 = Instant::now();
        let (mut morph, _, finished) =
            recorder(MorphText::new(config(&["cat", "act"], PlaybackMode::Stop)).unwrap());

        morph.set_mode(PlaybackMode::Restart, t0);
        run(&mut morph, t0, 0, 5_000);

        assert_eq!(finished.get(), 1);
    }

    #[test]
    fn restart_twice_starts_over_twice() {
        let t0 = Instant::now();
        let (mut morph, starts, _) =
            recorder(MorphText::new(config(&["cat", "act"], PlaybackMode::Stop)).unwrap());

        morph.set_mode(PlaybackMode::Restart, t0);
        assert_eq!(morph.mode(), PlaybackMode::Play);

        run(&mut morph, t0, 0, 450);
        assert!(matches!(morph.phase(), Phase::AnimatingIn { word: 1, .. }));

        morph.set_mode(PlaybackMode::Restart, t0 + MS * 450);
        assert_eq!(morph.phase(), &Phase::Idle);

        morph.tick(t0 + MS * 460);
        assert!(matches!(
            morph.phase(),
            Phase::AnimatingIn {
                word: 0,
                intro: true,
                ..
            }
        ));
        assert_eq!(*starts.borrow(), vec![0, 1, 0]);
    }

    #[test]
    fn resume_after_restart_keeps_position() {
        let t0 = Instant::now();
        let mut morph = MorphText::new(config(&["cat", "act"], PlaybackMode::Loop)).unwrap();

        morph.set_mode(PlaybackMode::Restart, t0);
        run(&mut morph, t0, 0, 450);

        let resume = morph.mode();
        morph.set_mode(PlaybackMode::Pause, t0 + MS * 450);
        morph.set_mode(resume, t0 + MS * 500);

        assert_eq!(morph.current_index(), 1);
        assert!(matches!(morph.phase(), Phase::AnimatingIn { word: 1, .. }));
    }

    #[test]
    fn restart_in_config_plays() {
        let morph = MorphText::new(config(&["cat", "act"], PlaybackMode::Restart)).unwrap();

        assert_eq!(morph.mode(), PlaybackMode::Play);
    }

    #[test]
    fn held_word_follows_latest_render() {
        let t0 = Instant::now();
        let mut morph = MorphText::new(config(&["cat", "act"], PlaybackMode::Loop)).unwrap();
        let a = TaggedGlyph::new('a', 1);

        morph.tick(t0);
        morph.tick(t0 + MS * 100);
        morph.registry_mut().record(0, a, Position::new(1, 0, 1, 1));
        morph.tick(t0 + MS * 110);
        assert_eq!(morph.plans().shared(0)[&a], Some(Position::new(1, 0, 1, 1)));

        morph.registry_mut().record(0, a, Position::new(9, 0, 1, 1));
        morph.glyphs_rendered(0, t0 + MS * 120);
        morph.tick(t0 + MS * 130);
        assert_eq!(morph.plans().shared(0)[&a], Some(Position::new(9, 0, 1, 1)));
    }

    #[test]
    fn set_words_resets_sequence() {
        let t0 = Instant::now();
        let mut morph = MorphText::new(config(&["cat", "act"], PlaybackMode::Loop)).unwrap();

        run(&mut morph, t0, 0, 1_000);
        morph.set_words(["flutter", "future", "butter"]).unwrap();

        assert_eq!(morph.phase(), &Phase::Idle);
        assert_eq!(morph.completed_passes(), 0);
        assert_eq!(morph.plans().len(), 3);
        assert_eq!(morph.plans().word(0).text(), "flutter");
        assert_eq!(morph.config().words.len(), 3);

        morph.tick(t0 + MS * 1_010);
        assert!(matches!(
            morph.phase(),
            Phase::AnimatingIn {
                word: 0,
                intro: true,
                ..
            }
        ));
    }

    #[test]
    fn set_words_rejects_short_list() {
        let mut morph = MorphText::new(config(&["cat", "act"], PlaybackMode::Loop)).unwrap();

        assert_eq!(
            morph.set_words(["lonely"]),
            Err(MorphError::TooFewWords { count: 1 })
        );
        assert_eq!(morph.plans().word(0).text(), "cat");
    }

    #[test]
    fn display_measures_shared_glyphs() {
        let t0 = Instant::now();
        let mut morph = MorphText::new(config(&["cat", "act"], PlaybackMode::Loop)).unwrap();
        let a = TaggedGlyph::new('a', 1);

        morph.tick(t0);
        morph.registry_mut().record(0, a, Position::new(4, 2, 1, 1));
        morph.tick(t0 + MS * 100);
        morph.tick(t0 + MS * 110);

        assert_eq!(
            morph.plans().shared(0)[&a],
            Some(Position::new(4, 2, 1, 1))
        );
        assert_eq!(morph.plans().shared(0)[&TaggedGlyph::new('t', 1)], None);
    }

    #[test]
    fn callbacks_are_optional() {
        let t0 = Instant::now();
        let mut morph = MorphText::new(config(&["ab", "ba"], PlaybackMode::Play)).unwrap();

        run(&mut morph, t0, 0, 2_000);

        assert_eq!(morph.phase(), &Phase::Finished { word: 1 });
    }

    #[test]
    fn paused_config_waits_for_play() {
        let t0 = Instant::now();
        let mut morph = MorphText::new(config(&["ab", "ba"], PlaybackMode::Pause)).unwrap();

        assert_eq!(morph.tick(t0), Tick::Idle);
        assert_eq!(morph.phase(), &Phase::Idle);

        morph.set_mode(PlaybackMode::Play, t0);
        assert_eq!(morph.tick(t0), Tick::Redraw);
    }
}
