//! Menu definition for the interactive session.

use std::fmt;
use std::str::FromStr;

use crate::error::input::InputError;

/// Highest valid menu number.
pub const MAX_CHOICE: u8 = 12;

/// One entry of the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Insert,
    Search,
    Delete,
    Decay,
    Optimize,
    View,
    Help,
    PrefixSearch,
    WildcardSearch,
    AutoComplete,
    Exit,
    Statistics,
}

impl MenuChoice {
    /// All entries in menu order.
    pub const ALL: [MenuChoice; MAX_CHOICE as usize] = [
        MenuChoice::Insert,
        MenuChoice::Search,
        MenuChoice::Delete,
        MenuChoice::Decay,
        MenuChoice::Optimize,
        MenuChoice::View,
        MenuChoice::Help,
        MenuChoice::PrefixSearch,
        MenuChoice::WildcardSearch,
        MenuChoice::AutoComplete,
        MenuChoice::Exit,
        MenuChoice::Statistics,
    ];

    /// The number a user types to pick this entry.
    pub fn number(self) -> u8 {
        match self {
            MenuChoice::Insert => 1,
            MenuChoice::Search => 2,
            MenuChoice::Delete => 3,
            MenuChoice::Decay => 4,
            MenuChoice::Optimize => 5,
            MenuChoice::View => 6,
            MenuChoice::Help => 7,
            MenuChoice::PrefixSearch => 8,
            MenuChoice::WildcardSearch => 9,
            MenuChoice::AutoComplete => 10,
            MenuChoice::Exit => 11,
            MenuChoice::Statistics => 12,
        }
    }

    fn label(self) -> &'static str {
        match self {
            MenuChoice::Insert => "Insert word",
            MenuChoice::Search => "Search word",
            MenuChoice::Delete => "Delete word",
            MenuChoice::Decay => "Apply weight decay",
            MenuChoice::Optimize => "Optimize paths",
            MenuChoice::View => "View Trie",
            MenuChoice::Help => "Help",
            MenuChoice::PrefixSearch => "Prefix Search",
            MenuChoice::WildcardSearch => "Wildcard Search",
            MenuChoice::AutoComplete => "Auto-Complete",
            MenuChoice::Exit => "Exit",
            MenuChoice::Statistics => "Statistics",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.number(), self.label())
    }
}

impl FromStr for MenuChoice {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || InputError::InvalidChoice {
            input: s.to_string(),
            max: MAX_CHOICE,
        };
        let number: u8 = s.parse().map_err(|_| invalid())?;
        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.number() == number)
            .ok_or_else(invalid)
    }
}

/// Renders the full menu, ending with the option prompt.
pub fn menu_text() -> String {
    let mut text = String::from("\n--- Trie CLI ---\n");
    for choice in MenuChoice::ALL {
        text.push_str(&format!("{choice}\n"));
    }
    text.push_str("Choose an option: ");
    text
}
