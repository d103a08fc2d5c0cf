use std::fs::File;
use std::io;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};
use tracing_subscriber::EnvFilter;

use text_morph::{Driver, MorphConfig, MorphText, MorphTextView, Phase, PlaybackMode};

const DEFAULT_WORDS: &[&str] = &["flutter", "future", "butter", "further", "stutter"];

fn main() -> io::Result<()> {
    init_logging()?;

    enable_raw_mode()?;
    crossterm::execute!(io::stdout(), EnterAlternateScreen)?;

    let result = run();

    disable_raw_mode()?;
    crossterm::execute!(io::stdout(), LeaveAlternateScreen)?;

    result
}

/// Logs go to a file; the terminal belongs to the UI.
fn init_logging() -> io::Result<()> {
    let Ok(filter) = EnvFilter::try_from_env("TEXT_MORPH_LOG") else {
        return Ok(());
    };

    let file = File::create("text-morph.log")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn words_from_args() -> Vec<String> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.len() >= 2 {
        args
    } else {
        DEFAULT_WORDS.iter().map(|w| w.to_string()).collect()
    }
}

fn run() -> io::Result<()> {
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let config = MorphConfig {
        transition: Duration::from_millis(700),
        display: Duration::from_millis(1200),
        style: Style::new()
            .fg(Color::Rgb(255, 200, 80))
            .bg(Color::Rgb(20, 16, 30))
            .add_modifier(Modifier::BOLD),
        ..MorphConfig::with_words(words_from_args())
    };

    let mut morph = MorphText::new(config)?
        .on_transition_start(|index| tracing::info!(index, "transition start"))
        .on_finished(|| tracing::info!("sequence finished"));

    let mut driver = Driver::new(60, Instant::now());
    let mut resume_mode = morph.mode();

    loop {
        let timeout = driver.time_until_next_frame(Instant::now());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let now = Instant::now();

                    let mode = match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Char('p') => PlaybackMode::Play,
                        KeyCode::Char('l') => PlaybackMode::Loop,
                        KeyCode::Char('s') => PlaybackMode::Stop,
                        KeyCode::Char('r') => PlaybackMode::Restart,
                        KeyCode::Char(' ') if morph.mode() == PlaybackMode::Pause => resume_mode,
                        KeyCode::Char(' ') => {
                            resume_mode = morph.mode();
                            PlaybackMode::Pause
                        }
                        _ => continue,
                    };

                    morph.set_mode(mode, now);
                    driver.invalidate();
                }

                Event::Resize(..) => driver.invalidate(),

                _ => {}
            }
        }

        let now = Instant::now();
        driver.step(&mut terminal, &mut morph, now, |f, morph| draw(f, morph, now))?;
    }

    Ok(())
}

fn draw(f: &mut Frame, morph: &mut MorphText, now: Instant) {
    let style = morph.config().style;
    f.render_widget(Block::new().style(style), f.area());

    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(f.area());

    f.render_widget(
        Paragraph::new("text-morph  [p play] [space pause] [s stop] [r restart] [l loop] [q quit]")
            .style(Style::new().fg(Color::DarkGray)),
        rows[0],
    );

    f.render_stateful_widget(MorphTextView::at(now), rows[2], morph);

    f.render_widget(
        Paragraph::new(status_line(morph)).style(Style::new().fg(Color::DarkGray)),
        rows[4],
    );
}

fn status_line(morph: &MorphText) -> String {
    let phase = match morph.phase() {
        Phase::Idle => "idle",
        Phase::AnimatingIn { .. } => "animating in",
        Phase::Displaying { .. } => "displaying",
        Phase::AnimatingOut { .. } => "animating out",
        Phase::Finished { .. } => "finished",
    };

    format!(
        "mode {:?}  phase {}  word {}/{}  passes {}",
        morph.mode(),
        phase,
        morph.current_index() + 1,
        morph.plans().len(),
        morph.completed_passes(),
    )
}
