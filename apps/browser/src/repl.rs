//! # REPL
//!
//! Line-oriented command loop over any reader and writer.
//!
//! ## Commands
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  categories        list categories, active one marked                   │
//! │  select <id>       switch category (clears the search)                  │
//! │  search [text]     filter the active category; no text clears it        │
//! │  add <n>           add item number n of the list to the cart            │
//! │  remove <n>        remove cart line n (no-op if there is none)          │
//! │  cart              show the cart                                        │
//! │  show              redraw the whole screen                              │
//! │  help              this list                                            │
//! │  quit              leave                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Positions typed by the user are 1-based; the commands layer is 0-based.

use std::io::{self, BufRead, Write};

use crate::commands::{cart, menu};
use crate::error::ApiError;
use crate::state::{ConfigState, MenuState};
use crate::view;

const PROMPT: &str = "> ";

pub const HELP_TEXT: &str = "\
Commands:
  categories        list categories
  select <id>       switch category
  search [text]     filter dishes in the category (no text clears)
  add <n>           add dish number n to the cart
  remove <n>        remove cart line n
  cart              show the cart
  show              redraw everything
  help              show this help
  quit              exit
";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Categories,
    Select(String),
    Search(String),
    /// 1-based position in the visible list
    Add(usize),
    /// 1-based position in the cart
    Remove(usize),
    Cart,
    Show,
    Help,
    Quit,
}

/// Parses one input line. Blank lines are `Ok(None)`; malformed ones carry
/// the message to print.
pub fn parse_command(line: &str) -> Result<Option<ReplCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "categories" | "c" => ReplCommand::Categories,
        "select" | "s" => {
            if rest.is_empty() {
                return Err("Usage: select <category id>".to_string());
            }
            ReplCommand::Select(rest.to_string())
        }
        "search" | "/" => ReplCommand::Search(rest.to_string()),
        "add" | "a" => ReplCommand::Add(parse_position(rest, "add <n>")?),
        "remove" | "rm" => ReplCommand::Remove(parse_position(rest, "remove <n>")?),
        "cart" => ReplCommand::Cart,
        "show" | "ls" => ReplCommand::Show,
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" | "q" => ReplCommand::Quit,
        other => {
            return Err(format!(
                "Unknown command '{}'. Type 'help' for a list of commands.",
                other
            ))
        }
    };
    Ok(Some(command))
}

fn parse_position(text: &str, usage: &str) -> Result<usize, String> {
    text.parse::<usize>()
        .map_err(|_| format!("Usage: {} (n is a number from the list)", usage))
}

/// Interactive session over shared state.
pub struct Repl<'a> {
    menu: &'a MenuState,
    config: &'a ConfigState,
}

impl<'a> Repl<'a> {
    pub fn new(menu: &'a MenuState, config: &'a ConfigState) -> Self {
        Repl { menu, config }
    }

    /// Reads commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> io::Result<()> {
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break;
            }

            match parse_command(&line) {
                Ok(None) => {}
                Ok(Some(ReplCommand::Quit)) => break,
                Ok(Some(command)) => write!(output, "{}", self.execute(command))?,
                Err(message) => writeln!(output, "{}", message)?,
            }
        }
        Ok(())
    }

    /// Runs one command and renders its outcome.
    pub fn execute(&self, command: ReplCommand) -> String {
        self.try_execute(command)
            .unwrap_or_else(|err| format!("{}\n", err.message))
    }

    fn try_execute(&self, command: ReplCommand) -> Result<String, ApiError> {
        let text = match command {
            ReplCommand::Categories => view::render_categories(&menu::get_menu(self.menu)?),
            ReplCommand::Select(id) => {
                view::render_items(&menu::select_category(self.menu, &id)?, self.config)
            }
            ReplCommand::Search(text) => {
                view::render_items(&menu::set_query(self.menu, &text)?, self.config)
            }
            ReplCommand::Add(position) => {
                let response = match position.checked_sub(1) {
                    Some(index) => cart::add_to_cart_at(self.menu, index)?,
                    None => return Err(ApiError::not_found("Item", "#0")),
                };
                let added = response
                    .lines
                    .last()
                    .map(|line| format!("Added {}\n", line.name))
                    .unwrap_or_default();
                added + &view::render_cart(&response, self.config)
            }
            ReplCommand::Remove(position) => {
                let response = match position.checked_sub(1) {
                    Some(index) => cart::remove_from_cart(self.menu, index)?,
                    None => cart::get_cart(self.menu)?,
                };
                view::render_cart(&response, self.config)
            }
            ReplCommand::Cart => view::render_cart(&cart::get_cart(self.menu)?, self.config),
            ReplCommand::Show => self.render_screen()?,
            ReplCommand::Help => HELP_TEXT.to_string(),
            ReplCommand::Quit => String::new(),
        };
        Ok(text)
    }

    /// The full screen for the current state.
    pub fn render_screen(&self) -> Result<String, ApiError> {
        Ok(view::render_screen(
            self.config,
            &menu::get_menu(self.menu)?,
            &menu::get_visible_items(self.menu)?,
            &cart::get_cart(self.menu)?,
        ))
    }
}
