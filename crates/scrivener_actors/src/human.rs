//! The human in the loop, answering on a terminal.

use crate::Actor;
use scrivener_core::CreativeMode;
use scrivener_error::{ActorError, ActorErrorKind, ScrivenerResult};
use std::io::{BufRead, BufReader, Write};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, instrument};

/// Answers collected before ideation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Starter {
    /// Genre (or topic, for podcasts)
    pub genre: String,
    /// Seed idea
    pub idea: String,
    /// How many concepts to brainstorm
    pub num_concepts: usize,
}

struct Terminal {
    input: Box<dyn BufRead + Send>,
    output: Box<dyn Write + Send>,
}

/// Interactive actor reading answers from an input stream.
///
/// Reads block the calling thread.
pub struct Human {
    terminal: Mutex<Terminal>,
    stopped: AtomicBool,
}

impl std::fmt::Debug for Human {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Human")
            .field("stopped", &self.is_stopped())
            .finish_non_exhaustive()
    }
}

fn io_error(e: impl std::fmt::Display) -> ActorError {
    ActorError::new(ActorErrorKind::Io(e.to_string()))
}

fn parse_number(answer: &str) -> Result<usize, ActorError> {
    answer
        .parse::<usize>()
        .map_err(|_| ActorError::new(ActorErrorKind::InvalidNumber(answer.to_string())))
}

fn choose<'a>(options: &'a [String], answer: &str) -> Result<(usize, &'a String), ActorError> {
    let selection = parse_number(answer)?;
    if selection == 0 || selection > options.len() {
        return Err(ActorError::new(ActorErrorKind::SelectionOutOfRange {
            selection,
            options: options.len(),
        }));
    }
    Ok((selection, &options[selection - 1]))
}

impl Human {
    /// Human answering through the given streams.
    pub fn new(input: impl BufRead + Send + 'static, output: impl Write + Send + 'static) -> Self {
        Self {
            terminal: Mutex::new(Terminal {
                input: Box::new(input),
                output: Box::new(output),
            }),
            stopped: AtomicBool::new(false),
        }
    }

    /// Human at the process's terminal.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(std::io::stdin()), std::io::stdout())
    }

    fn ensure_running(&self) -> Result<(), ActorError> {
        if self.is_stopped() {
            return Err(ActorError::new(ActorErrorKind::Stopped(self.role().to_string())));
        }
        Ok(())
    }

    fn with_terminal<T>(
        &self,
        f: impl FnOnce(&mut Terminal) -> Result<T, ActorError>,
    ) -> Result<T, ActorError> {
        self.ensure_running()?;
        let mut terminal = self.terminal.lock().map_err(io_error)?;
        f(&mut terminal)
    }

    /// Write text without waiting for an answer.
    pub fn say(&self, text: &str) -> ScrivenerResult<()> {
        self.with_terminal(|terminal| {
            terminal.output.write_all(text.as_bytes()).map_err(io_error)?;
            terminal.output.flush().map_err(io_error)
        })?;
        Ok(())
    }

    /// Show `prompt` and read one trimmed line.
    ///
    /// # Errors
    ///
    /// Fails with [`ActorErrorKind::InputClosed`] at end of input.
    pub fn prompt_user(&self, prompt: &str) -> ScrivenerResult<String> {
        let answer = self.with_terminal(|terminal| {
            terminal.output.write_all(prompt.as_bytes()).map_err(io_error)?;
            terminal.output.flush().map_err(io_error)?;

            let mut line = String::new();
            let read = terminal.input.read_line(&mut line).map_err(io_error)?;
            if read == 0 {
                return Err(ActorError::new(ActorErrorKind::InputClosed));
            }
            Ok(line.trim().to_string())
        })?;
        debug!(prompt = %prompt.trim(), answer = %answer, "Human answered");
        Ok(answer)
    }

    /// List numbered options and return the 1-based selection with its option.
    #[instrument(skip_all, fields(options = options.len()))]
    pub fn prompt_user_select(&self, options: &[String]) -> ScrivenerResult<(usize, String)> {
        if options.is_empty() {
            return Err(ActorError::new(ActorErrorKind::NoOptions).into());
        }
        let mut prompt = String::from("Choose one of the following options:\n");
        for (idx, option) in options.iter().enumerate() {
            prompt.push_str(&format!("{}: {}\n", idx + 1, option));
        }

        let answer = self.prompt_user(&prompt)?;
        let (selection, option) = choose(options, &answer)?;
        Ok((selection, option.clone()))
    }

    /// Ask for the genre or topic, the seed idea and the number of concepts.
    #[instrument(skip(self))]
    pub fn get_starter(&self, mode: CreativeMode) -> ScrivenerResult<Starter> {
        let genre_prompt = match mode {
            CreativeMode::Author => "which genre? > ",
            CreativeMode::Podcast => "which topic? > ",
        };
        let genre = self.prompt_user(genre_prompt)?;
        let idea = self.prompt_user("what is your idea? > ")?;
        let count = self.prompt_user("how many concepts should I generate? > ")?;
        let num_concepts = parse_number(&count)?;

        Ok(Starter {
            genre,
            idea,
            num_concepts,
        })
    }

    /// List the ideas and return the one the human picks.
    #[instrument(skip_all, fields(ideas = ideas.len()))]
    pub fn select_idea(&self, ideas: &[String]) -> ScrivenerResult<String> {
        if ideas.is_empty() {
            return Err(ActorError::new(ActorErrorKind::NoOptions).into());
        }
        let mut listing = String::from("select from one of the following:\n");
        for (idx, idea) in ideas.iter().enumerate() {
            listing.push_str(&format!("{}: {}\n", idx + 1, idea));
        }
        self.say(&listing)?;

        let answer = self.prompt_user("which concept should I build on? > ")?;
        let (_, idea) = choose(ideas, &answer)?;
        Ok(idea.clone())
    }
}

impl Actor for Human {
    fn role(&self) -> &'static str {
        "human"
    }

    fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}
