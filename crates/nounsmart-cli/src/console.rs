//! Line-oriented terminal front end for a quiz.
//!
//! Reads answers and `:commands` from any `BufRead` and writes prompts and
//! feedback to any `Write`, so it can be driven by a script in tests.

use std::io::{BufRead, Write};

use anyhow::Result;

use nounsmart_core::table::LevelCount;
use nounsmart_core::traits::PluralQuiz;
use nounsmart_core::{Level, LevelSelection, NextQuestion};

const HELP: &str = "\
Type the plural of the noun shown and press Enter.
Commands:
  :level <s|es|ies>  switch level
  :next              show another noun
  :restart           practise the current level again
  :score             show the overall score
  :help              show this help
  :quit              leave (also Ctrl-D)";

const COMPLETE: &str = "All nouns have been answered correctly. Great job!";

/// Terminal adapter over a [`PluralQuiz`].
pub struct Console<R, W> {
    input: R,
    output: W,
    levels: Vec<LevelCount>,
}

enum Flow {
    Continue,
    Quit,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, levels: Vec<LevelCount>) -> Self {
        Self {
            input,
            output,
            levels,
        }
    }

    /// Run until end of input or `:quit`, then print the overall score.
    pub fn run(&mut self, quiz: &mut dyn PluralQuiz, start: Option<Level>) -> Result<()> {
        writeln!(self.output, "NounSmart: Practice Regular Plural Nouns")?;
        let labels: Vec<String> = self.levels.iter().map(|c| c.label()).collect();
        writeln!(self.output, "Levels: {}", labels.join(", "))?;
        writeln!(self.output, "Type :help for commands.")?;

        match start {
            Some(level) => self.select(quiz, level)?,
            None => writeln!(self.output, "Select a level with :level <s|es|ies>.")?,
        }

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }

            let entry = line.trim();
            let flow = if let Some(command) = entry.strip_prefix(':') {
                self.command(quiz, command)?
            } else if entry.is_empty() {
                Flow::Continue
            } else {
                self.answer(quiz, entry)?;
                Flow::Continue
            };

            if let Flow::Quit = flow {
                break;
            }
        }

        writeln!(
            self.output,
            "Overall Score: {}",
            quiz.total_score_summary()
        )?;
        Ok(())
    }

    fn command(&mut self, quiz: &mut dyn PluralQuiz, command: &str) -> Result<Flow> {
        let mut parts = command.split_whitespace();
        match parts.next().unwrap_or("") {
            "level" | "l" => match parts.next().map(str::parse::<Level>) {
                Some(Ok(level)) => self.select(quiz, level)?,
                Some(Err(e)) => writeln!(self.output, "{e}")?,
                None => writeln!(self.output, "Usage: :level <s|es|ies>")?,
            },
            "next" | "n" => self.ask(quiz)?,
            "restart" => match quiz.restart_level() {
                Ok(selection) => {
                    self.announce(selection)?;
                    self.ask(quiz)?;
                }
                Err(e) => writeln!(self.output, "{e}")?,
            },
            "score" | "s" => writeln!(
                self.output,
                "Overall Score: {}",
                quiz.total_score_summary()
            )?,
            "help" | "h" | "?" => writeln!(self.output, "{HELP}")?,
            "quit" | "q" | "exit" => return Ok(Flow::Quit),
            other => writeln!(
                self.output,
                "Unknown command ':{other}'. Type :help for commands."
            )?,
        }
        Ok(Flow::Continue)
    }

    fn select(&mut self, quiz: &mut dyn PluralQuiz, level: Level) -> Result<()> {
        match quiz.select_level(level) {
            Ok(selection) => {
                self.announce(selection)?;
                self.ask(quiz)
            }
            Err(e) => {
                writeln!(self.output, "{e}")?;
                Ok(())
            }
        }
    }

    fn announce(&mut self, selection: LevelSelection) -> Result<()> {
        match selection {
            LevelSelection::Changed { level, available } => writeln!(
                self.output,
                "Level {level} selected ({available} items). Type your answer after each noun."
            )?,
            LevelSelection::Unchanged { level } => {
                writeln!(self.output, "Level {level} is already selected.")?
            }
        }
        Ok(())
    }

    fn ask(&mut self, quiz: &mut dyn PluralQuiz) -> Result<()> {
        match quiz.next_question() {
            Ok(NextQuestion::Ask { singular }) => {
                writeln!(self.output, "What's the plural form of '{singular}'?")?
            }
            Ok(NextQuestion::Complete { .. }) => {
                writeln!(self.output, "{}", complete_message())?
            }
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(())
    }

    fn answer(&mut self, quiz: &mut dyn PluralQuiz, guess: &str) -> Result<()> {
        match quiz.submit_answer(guess) {
            Ok(outcome) => {
                if outcome.correct {
                    writeln!(
                        self.output,
                        "Correct! '{}' is the plural form of '{}'. (Score: {})",
                        outcome.expected, outcome.singular, outcome.round
                    )?;
                } else {
                    writeln!(
                        self.output,
                        "Incorrect. The correct plural form is '{}' for '{}'. (Score: {})",
                        outcome.expected, outcome.singular, outcome.round
                    )?;
                }
                self.ask(quiz)
            }
            Err(e) if !e.is_user_facing() => {
                writeln!(self.output, "{}", complete_message())?;
                Ok(())
            }
            Err(e) => {
                writeln!(self.output, "{e}")?;
                Ok(())
            }
        }
    }
}

fn complete_message() -> String {
    format!("{COMPLETE} Use :restart or :level to keep practising.")
}
