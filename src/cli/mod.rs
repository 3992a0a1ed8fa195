//! Interactive menu session.
//!
//! A thin front end over [`WeightedTrie`]: it reads menu choices and words
//! from any [`BufRead`], validates them, calls the trie and writes the
//! results to any [`Write`]. Invalid input is reported and asked for again;
//! end of input ends the session.

pub mod input;
pub mod menu;

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::data_structures::weighted_trie::WeightedTrie;
use crate::error::LehuaResult;
pub use menu::{menu_text, MenuChoice, MAX_CHOICE};

/// An interactive session driving one trie.
#[derive(Debug)]
pub struct Session<R, W> {
    trie: WeightedTrie,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session over `trie` reading from `input` and writing to `output`.
    pub fn new(trie: WeightedTrie, input: R, output: W) -> Self {
        Self {
            trie,
            input,
            output,
        }
    }

    /// Returns the trie driven by this session.
    pub fn trie(&self) -> &WeightedTrie {
        &self.trie
    }

    /// Ends the session, handing back the trie.
    pub fn into_trie(self) -> WeightedTrie {
        self.trie
    }

    /// Runs the menu loop until the user exits or input runs out.
    pub fn run(&mut self) -> LehuaResult<()> {
        info!("Interactive session started");
        loop {
            self.write(&menu_text())?;
            let Some(choice) = self.read_choice()? else {
                break;
            };
            debug!(?choice, "Menu choice");
            if !self.dispatch(choice)? {
                break;
            }
        }
        info!(words = self.trie.len(), "Interactive session ended");
        Ok(())
    }

    /// Executes one menu entry. Returns `false` when the session should end.
    pub fn dispatch(&mut self, choice: MenuChoice) -> LehuaResult<bool> {
        match choice {
            MenuChoice::Insert => {
                let Some(word) = self.read_word("Enter word to insert: ", false)? else {
                    return Ok(false);
                };
                self.trie.insert(&word);
                self.write(&format!("\"{word}\" has been inserted into the Trie.\n"))?;
            }
            MenuChoice::Search => {
                let Some(word) = self.read_word("Enter word to search: ", false)? else {
                    return Ok(false);
                };
                let verdict = if self.trie.search(&word) {
                    "is found"
                } else {
                    "is not found"
                };
                self.write(&format!("\"{word}\" {verdict} in the Trie.\n"))?;
            }
            MenuChoice::Delete => {
                let Some(word) = self.read_word("Enter word to delete: ", false)? else {
                    return Ok(false);
                };
                self.trie.delete(&word);
                self.write(&format!(
                    "\"{word}\" has been removed from the Trie, if it existed.\n"
                ))?;
            }
            MenuChoice::Decay => {
                self.trie.apply_weight_decay();
                self.write("Weight decay applied to all nodes.\n")?;
            }
            MenuChoice::Optimize => {
                let Some(time) = self.read_time()? else {
                    return Ok(false);
                };
                let report = self.trie.optimize_paths(time);
                self.write_lines(&report)?;
                self.write("Paths optimized based on usage and time.\n")?;
            }
            MenuChoice::View => {
                self.trie.render_tree(&mut self.output)?;
            }
            MenuChoice::Help => {
                self.write(&menu_text())?;
                self.write("\n")?;
            }
            MenuChoice::PrefixSearch => {
                let Some(prefix) = self.read_word("Enter prefix: ", false)? else {
                    return Ok(false);
                };
                let results = self.trie.search_prefix(&prefix);
                self.write_lines(&results)?;
            }
            MenuChoice::WildcardSearch => {
                let prompt = "Enter search pattern (use '*' for wildcard): ";
                let Some(pattern) = self.read_word(prompt, true)? else {
                    return Ok(false);
                };
                let results = self.trie.wildcard_search(&pattern);
                self.write_lines(&results)?;
            }
            MenuChoice::AutoComplete => {
                let Some(prefix) = self.read_word("Enter prefix for suggestions: ", false)?
                else {
                    return Ok(false);
                };
                let suggestions = self.trie.auto_complete(&prefix);
                self.write_lines(&suggestions)?;
            }
            MenuChoice::Exit => {
                self.write("Exiting...\n")?;
                return Ok(false);
            }
            MenuChoice::Statistics => {
                let stats = serde_json::to_string_pretty(&self.trie.stats())?;
                self.write(&format!("{stats}\n"))?;
            }
        }
        Ok(true)
    }

    /// Reads one line. `None` means end of input.
    fn read_line(&mut self) -> LehuaResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn read_choice(&mut self) -> LehuaResult<Option<MenuChoice>> {
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse::<MenuChoice>() {
                Ok(choice) => return Ok(Some(choice)),
                Err(e) => self.write(&format!("{e}\nChoose an option: "))?,
            }
        }
    }

    fn read_word(&mut self, prompt: &str, allow_wildcard: bool) -> LehuaResult<Option<String>> {
        self.write(prompt)?;
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match input::parse_word(&line, allow_wildcard) {
                Ok(word) => return Ok(Some(word)),
                Err(e) => {
                    let hint = if allow_wildcard {
                        "letters only, '*' allowed for wildcard"
                    } else {
                        "letters only"
                    };
                    self.write(&format!("{e}. Please enter a valid word ({hint}): "))?;
                }
            }
        }
    }

    fn read_time(&mut self) -> LehuaResult<Option<i64>> {
        self.write("Enter the current time for optimization: ")?;
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match input::parse_time(&line) {
                Ok(time) => return Ok(Some(time)),
                Err(e) => self.write(&format!("{e}: "))?,
            }
        }
    }

    fn write(&mut self, text: &str) -> LehuaResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    fn write_lines(&mut self, lines: &[String]) -> LehuaResult<()> {
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        self.output.flush()?;
        Ok(())
    }
}
