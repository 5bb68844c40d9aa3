use crate::core::commands::{CommandError, Flow};

use super::executor::CommandHandler;
use super::tokens::is_operator_char;

/// Chain operators, recognised by a token's leading characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainOperator {
    Sequence, // ;
    And,      // &&
    Or,       // ||
}

impl ChainOperator {
    pub fn parse(token: &str) -> Option<Self> {
        if token.starts_with(';') {
            Some(Self::Sequence)
        } else if token.starts_with("&&") {
            Some(Self::And)
        } else if token.starts_with("||") {
            Some(Self::Or)
        } else {
            None
        }
    }
}

fn starts_with_operator(token: &str) -> bool {
    token.chars().next().is_some_and(is_operator_char)
}

/// Rejects operators that open the line, start with a `;` pair such as `;;`,
/// or sit directly before another operator.
pub fn validate(tokens: &[String]) -> Result<(), CommandError> {
    for (i, token) in tokens.iter().enumerate() {
        if !starts_with_operator(token) {
            continue;
        }
        if i == 0 || token[1..].starts_with(';') {
            return Err(CommandError::Syntax(token.clone()));
        }
        if let Some(next) = tokens.get(i + 1).filter(|next| starts_with_operator(next)) {
            return Err(CommandError::Syntax(next.clone()));
        }
    }
    Ok(())
}

pub(crate) trait ChainRunner {
    /// Runs every `;`-separated part of a validated line in order.
    fn run_chain(&mut self, tokens: Vec<String>, resolve_aliases: bool) -> Flow;
}

impl ChainRunner for super::Shell {
    fn run_chain(&mut self, tokens: Vec<String>, resolve_aliases: bool) -> Flow {
        let mut part = Vec::new();
        for token in tokens {
            if ChainOperator::parse(&token) == Some(ChainOperator::Sequence) {
                let flow = run_and_or(self, std::mem::take(&mut part), resolve_aliases);
                if !matches!(flow, Flow::Status(_)) {
                    return flow;
                }
            } else {
                part.push(token);
            }
        }
        run_and_or(self, part, resolve_aliases)
    }
}

/// Runs segments joined by `&&`/`||`, stopping at the first operator whose
/// condition does not hold for the last status.
fn run_and_or(shell: &mut super::Shell, tokens: Vec<String>, resolve_aliases: bool) -> Flow {
    let mut segment = Vec::new();
    for token in tokens {
        let operator = match ChainOperator::parse(&token) {
            Some(op @ (ChainOperator::And | ChainOperator::Or)) => op,
            _ => {
                segment.push(token);
                continue;
            }
        };

        let flow = run_segment(shell, std::mem::take(&mut segment), resolve_aliases);
        let Flow::Status(status) = flow else {
            return flow;
        };
        let proceed = match operator {
            ChainOperator::And => status == 0,
            _ => status != 0,
        };
        if !proceed {
            log::debug!("short-circuit after {:?} with status {}", operator, status);
            return Flow::Status(status);
        }
    }
    run_segment(shell, segment, resolve_aliases)
}

/// Substitutes aliases, then dispatches. An alias that brings in operators
/// turns the segment into a chain of its own.
fn run_segment(shell: &mut super::Shell, tokens: Vec<String>, resolve_aliases: bool) -> Flow {
    if tokens.is_empty() {
        return Flow::Status(shell.state.last_status);
    }
    if !resolve_aliases {
        return shell.dispatch(&tokens);
    }

    let tokens = shell.state.aliases.resolve(tokens);
    if !tokens.iter().any(|t| ChainOperator::parse(t).is_some()) {
        return shell.dispatch(&tokens);
    }

    log::debug!("alias expanded into a chain: {:?}", tokens);
    if let Err(e) = validate(&tokens) {
        let status = shell.state.report(&e);
        shell.state.last_status = status;
        return Flow::Status(status);
    }
    shell.run_chain(tokens, false)
}
