//! Interactive Shell - menu loop that collects a request and prints names
//!
//! Reads from any `BufRead` and writes to any `Write`, so the binary wires it
//! to stdin/stdout and tests drive it with in-memory buffers.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

use crate::composer::{Gender, GeneratedName, NameComposer};
use crate::config::GeneratorConfig;
use crate::error::NameError;

/// Problems with a single request. Everything except I/O sends the user
/// back to the menu.
#[derive(Debug, Error)]
enum RequestError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Name(#[from] NameError),

    #[error("'{0}' is not a whole number")]
    InvalidCount(String),
}

/// Print items as a 1-indexed list, one per line
pub fn write_numbered<W, T>(out: &mut W, items: &[T]) -> io::Result<()>
where
    W: Write + ?Sized,
    T: Display,
{
    for (i, item) in items.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, item)?;
    }
    Ok(())
}

/// Print names as a pretty JSON array followed by a newline
pub fn write_json<W: Write + ?Sized>(out: &mut W, names: &[GeneratedName]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, names)?;
    writeln!(out)
}

pub struct Shell<'a, G: ?Sized, I, O> {
    composer: &'a NameComposer<'a>,
    config: &'a GeneratorConfig,
    rng: &'a mut G,
    input: I,
    output: O,
}

impl<'a, G, I, O> Shell<'a, G, I, O>
where
    G: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    pub fn new(
        composer: &'a NameComposer<'a>,
        config: &'a GeneratorConfig,
        rng: &'a mut G,
        input: I,
        output: O,
    ) -> Self {
        Self { composer, config, rng, input, output }
    }

    /// Run until the user enters `q` or input ends
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the Ancient Language Name Generator!")?;

        loop {
            self.display_main_menu()?;
            let Some(choice) = self.read_line()? else {
                info!("Input closed, leaving shell");
                break;
            };

            if choice.eq_ignore_ascii_case("q") {
                writeln!(self.output, "Thank you for using the Ancient Language Name Generator!")?;
                break;
            }

            match self.generate_names() {
                Ok(true) => {}
                Ok(false) => break,
                Err(RequestError::Io(err)) => return Err(err),
                Err(err) => {
                    debug!(%err, "Request rejected");
                    writeln!(self.output, "Error: {}", err)?;
                }
            }
        }

        self.output.flush()
    }

    fn display_main_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n=== Main Menu ===")?;
        writeln!(self.output, "Press ENTER to generate names")?;
        writeln!(self.output, "Enter 'q' to quit")?;
        self.output.flush()
    }

    /// One request. Returns `Ok(false)` if input ended part way through.
    fn generate_names(&mut self) -> Result<bool, RequestError> {
        writeln!(self.output, "\nAvailable language categories:")?;
        for category in self.composer.tables().categories() {
            writeln!(self.output, "- {}", category)?;
        }
        write!(self.output, "Enter your chosen language category: ")?;
        self.output.flush()?;
        let Some(category) = self.read_line()? else {
            return Ok(false);
        };

        writeln!(self.output, "\nGender options:")?;
        writeln!(self.output, "1. Male")?;
        writeln!(self.output, "2. Female")?;
        writeln!(self.output, "3. Unisex")?;
        write!(self.output, "Enter your choice (1-3): ")?;
        self.output.flush()?;
        let Some(gender) = self.read_line()? else {
            return Ok(false);
        };
        let gender: Gender = gender.parse().unwrap_or_default();

        write!(
            self.output,
            "\nHow many names would you like to generate? ({}-{}): ",
            self.config.min_count, self.config.max_count
        )?;
        self.output.flush()?;
        let Some(count) = self.read_line()? else {
            return Ok(false);
        };
        let requested: i64 = count
            .parse()
            .map_err(|_| RequestError::InvalidCount(count.clone()))?;
        let count = self.config.clamp_count(requested);

        let names = self.composer.generate(&mut *self.rng, &category, gender, count)?;

        writeln!(self.output, "\nGenerated Names:")?;
        write_numbered(&mut self.output, &names)?;

        Ok(true)
    }

    /// Next trimmed line, `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
