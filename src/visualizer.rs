//! Interactive terminal front end. Each tick advances the active run by one
//! step and redraws the bars with that step's highlights.

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use log::{debug, info};
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use crate::algorithm::Algorithm;
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::input::{parse_target, random_values, rng_from_seed};
use crate::sorting_algorithms::SortGraph;

const CONTROLS: &str =
    "R - Reset | SPACE - Start Sorting | S - Search | B/M/Q/D/L - Select | ESC - Quit";
const IDLE_POLL: Duration = Duration::from_millis(250);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    Select(Algorithm),
    Start,
    Search,
    Reset,
    Quit,
}

/// How an animation ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Flow {
    Completed,
    Interrupted(Command),
}

pub fn command_for(key: &KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        KeyCode::Char(' ') => Some(Command::Start),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::Search),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
        KeyCode::Char(c) => Algorithm::from_key(c).map(Command::Select),
        _ => None,
    }
}

/// Everything the visualizer needs between frames.
pub struct Session {
    pub settings: Settings,
    pub values: Vec<i32>,
    pub selected: Option<Algorithm>,
    pub graph: SortGraph,
    rng: StdRng,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        let settings = settings.normalized();
        let mut rng = rng_from_seed(settings.seed);
        let values = random_values(
            &mut rng,
            settings.count,
            settings.min_value,
            settings.max_value,
        );
        let mut graph = SortGraph::new("Sorting Algorithm Visualization", &values, settings.height);
        graph.set_status(CONTROLS);
        Session {
            settings,
            values,
            selected: None,
            graph,
            rng,
        }
    }

    pub fn reset(&mut self) {
        self.values = random_values(
            &mut self.rng,
            self.settings.count,
            self.settings.min_value,
            self.settings.max_value,
        );
        self.graph.update_values(&self.values);
        self.graph.set_title("Sorting Algorithm Visualization");
        self.graph.set_status(CONTROLS);
        debug!("reset with {} new values", self.values.len());
    }

    pub fn select(&mut self, algorithm: Algorithm) {
        self.selected = Some(algorithm);
        self.graph.set_title(algorithm.name());
        if algorithm.is_search() {
            self.graph
                .set_status(&format!("Press S to enter a target | {}", CONTROLS));
        } else {
            self.graph.set_status(CONTROLS);
        }
    }

    pub fn redraw<W: Write>(&self, out: &mut W) -> Result<()> {
        self.graph.draw(out, &[])?;
        Ok(())
    }

    /// Animates `algorithm` over the session values, one step per tick.
    /// `poll` waits up to one tick for a key; reset and quit abandon the run.
    pub fn play<W, P>(
        &mut self,
        out: &mut W,
        algorithm: Algorithm,
        target: Option<i32>,
        mut poll: P,
    ) -> Result<Flow>
    where
        W: Write,
        P: FnMut(Duration) -> Result<Option<Command>>,
    {
        let tick = self.settings.tick;
        let started = Instant::now();
        let mut run = match algorithm.begin_run(&mut self.values, target) {
            Ok(run) => run,
            Err(err @ Error::NegativeValue { .. }) => {
                self.graph.set_status(&format!("{} | {}", err, CONTROLS));
                self.graph.draw(out, &[])?;
                return Ok(Flow::Completed);
            }
            Err(err) => return Err(err),
        };

        let mut last_marks = Vec::new();
        loop {
            if let Some(command) = poll(tick)? {
                if matches!(command, Command::Reset | Command::Quit) {
                    debug!("{} abandoned", algorithm);
                    return Ok(Flow::Interrupted(command));
                }
            }
            match run.next() {
                Some(step) => {
                    self.graph.update_values(run.values());
                    self.graph.set_title(&format!(
                        "{} - Time: {:.4}s",
                        algorithm,
                        started.elapsed().as_secs_f64()
                    ));
                    self.graph.draw(out, &step.marks)?;
                    last_marks = step.marks;
                }
                None => break,
            }
        }

        let elapsed = started.elapsed().as_secs_f64();
        let found = run.found();
        self.graph.update_values(run.values());
        drop(run);
        info!("{} finished in {:.4}s", algorithm, elapsed);

        let summary = if algorithm.is_search() {
            match found {
                Some(index) => format!("Found at index {}", index),
                None => "Element not found".to_string(),
            }
        } else {
            last_marks.clear();
            "Sorted".to_string()
        };
        self.graph.set_title(&format!(
            "{} - Completed in {:.4}s",
            algorithm, elapsed
        ));
        self.graph.set_status(&format!("{} | {}", summary, CONTROLS));
        self.graph.draw(out, &last_marks)?;
        Ok(Flow::Completed)
    }
}

fn poll_command(timeout: Duration) -> Result<Option<Command>> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            return Ok(command_for(&key));
        }
    }
    Ok(None)
}

/// Leaves raw mode long enough to read one line from the terminal.
fn read_target<W: Write>(out: &mut W) -> Result<Option<i32>> {
    terminal::disable_raw_mode()?;
    write!(out, "Enter the target value to search for: ")?;
    out.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    terminal::enable_raw_mode()?;
    Ok(parse_target(&line).ok())
}

fn event_loop<W: Write>(session: &mut Session, out: &mut W) -> Result<()> {
    session.redraw(out)?;
    loop {
        let mut pending = poll_command(IDLE_POLL)?;
        if pending.is_none() {
            continue;
        }
        while let Some(command) = pending.take() {
            let flow = match command {
                Command::Quit => return Ok(()),
                Command::Reset => {
                    session.reset();
                    Flow::Completed
                }
                Command::Select(algorithm) => {
                    session.select(algorithm);
                    Flow::Completed
                }
                Command::Start => match session.selected {
                    Some(algorithm) if !algorithm.is_search() => {
                        session.play(out, algorithm, None, poll_command)?
                    }
                    _ => Flow::Completed,
                },
                Command::Search => match session.selected {
                    Some(algorithm) if algorithm.is_search() => match read_target(out)? {
                        Some(target) => session.play(out, algorithm, Some(target), poll_command)?,
                        None => {
                            session.graph.set_status(&format!(
                                "Invalid input. Please enter an integer. | {}",
                                CONTROLS
                            ));
                            Flow::Completed
                        }
                    },
                    _ => Flow::Completed,
                },
            };
            if let Flow::Interrupted(command) = flow {
                pending = Some(command);
            }
        }
        session.redraw(out)?;
    }
}

/// Switches to the alternate screen, calling `restore` if that fails so raw
/// mode is not left behind.
fn enter_alternate_screen<W, F>(out: &mut W, restore: F) -> Result<()>
where
    W: Write,
    F: FnOnce() -> io::Result<()>,
{
    if let Err(err) = out.execute(EnterAlternateScreen) {
        restore()?;
        return Err(err.into());
    }
    Ok(())
}

/// Runs the visualizer on the alternate screen until the user quits.
pub fn run(settings: Settings) -> Result<()> {
    let mut session = Session::new(settings);
    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    enter_alternate_screen(&mut stdout, terminal::disable_raw_mode)?;
    let result = event_loop(&mut session, &mut stdout);
    stdout.execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}
