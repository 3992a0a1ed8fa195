// Copyright (c) 2025 Lehua Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Diagnostic text rendering of the trie.

use std::fmt;
use std::io::{self, Write};

use super::node::TrieNode;
use super::WeightedTrie;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Formats the annotations shared by every rendered node.
fn annotate(line: &mut String, node: &TrieNode, path: &str) {
    line.push_str(&format!(" (w={})", node.weight));
    if node.is_terminal {
        line.push_str(" [word]");
    }
    if let Some(shortcut) = &node.shortcut {
        line.push_str(&format!(" => {path}{shortcut}"));
    }
}

/// (node, key, path, indent, is last sibling)
type Frame<'a> = (&'a TrieNode, char, String, String, bool);

/// Pushes children so that the smallest key is popped first.
fn push_children<'a>(stack: &mut Vec<Frame<'a>>, node: &'a TrieNode, path: &str, indent: &str) {
    let count = node.children.len();
    for (i, (c, child)) in node.children.iter().enumerate().rev() {
        stack.push((child, *c, format!("{path}{c}"), indent.to_string(), i + 1 == count));
    }
}

/// Renders the tree in pre-order, one line per node.
pub(crate) fn render_lines(root: &TrieNode) -> Vec<String> {
    let mut root_line = String::from("<root>");
    annotate(&mut root_line, root, "");
    let mut lines = vec![root_line];

    let mut stack = Vec::new();
    push_children(&mut stack, root, "", "");

    while let Some((node, c, path, indent, last)) = stack.pop() {
        let mut line = format!("{indent}{}{c}", if last { LAST_BRANCH } else { BRANCH });
        annotate(&mut line, node, &path);
        lines.push(line);

        let child_indent = format!("{indent}{}", if last { SPACE } else { PIPE });
        push_children(&mut stack, node, &path, &child_indent);
    }

    lines
}

impl WeightedTrie {
    /// Writes the diagnostic rendering of the whole tree to `out`.
    pub fn render_tree<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in render_lines(&self.root) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

impl fmt::Display for WeightedTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in render_lines(&self.root) {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
