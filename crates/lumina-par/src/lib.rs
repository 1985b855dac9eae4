//! Line-oriented statement parser.
//!
//! Builds the top-level statement list directly from source text; block
//! statements (`FunctionDef`, `If`, `While`) recurse into a nested body
//! terminated by a literal `END` line.

mod headline;
pub mod stmt;

use lumina_ast::Statement;
use lumina_util::{LuminaError, LuminaResult};

/// Parses a complete Lumina source file into its top-level statement
/// list.
pub fn parse_program(source: &str) -> LuminaResult<Vec<Statement>> {
    let lines: Vec<&str> = source
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect();

    let mut parser = Parser { lines, pos: 0 };
    let mut statements = Vec::new();
    while !parser.is_at_end() {
        statements.push(parser.parse_stmt()?);
    }
    Ok(statements)
}

/// A line-oriented recursive-descent parser over the program's
/// non-blank, non-comment lines.
pub struct Parser<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.lines.len()
    }

    pub fn current_line(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    pub fn advance(&mut self) -> Option<&'a str> {
        let line = self.current_line();
        if line.is_some() {
            self.pos += 1;
        }
        line
    }

    /// True if the current line is exactly an `END` marker.
    fn at_end_marker(&self) -> bool {
        match self.current_line() {
            Some(line) => headline::split_head(line)
                .first()
                .is_some_and(|(_, _, tok)| tok.eq_ignore_ascii_case("END")),
            None => false,
        }
    }

    /// Parses statements until a matching `END` line, consuming it.
    /// Fails with `MissingEnd` if the input runs out first.
    pub fn parse_block(&mut self) -> LuminaResult<Vec<Statement>> {
        let mut body = Vec::new();
        loop {
            if self.is_at_end() {
                return Err(LuminaError::MissingEnd);
            }
            if self.at_end_marker() {
                self.advance();
                return Ok(body);
            }
            body.push(self.parse_stmt()?);
        }
    }
}
