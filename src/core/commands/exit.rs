use super::{Command, CommandError, Flow};
use crate::core::state::ShellState;

#[derive(Clone, Default)]
pub struct ExitCommand;

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }

    /// Accepts an optional `+` followed by decimal digits, up to `i32::MAX`.
    fn parse_status(operand: &str) -> Result<i32, CommandError> {
        let illegal = || CommandError::IllegalNumber(operand.to_string());
        let digits = operand.strip_prefix('+').unwrap_or(operand);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(illegal());
        }

        let mut value: u64 = 0;
        for b in digits.bytes() {
            value = value * 10 + u64::from(b - b'0');
            if value > i32::MAX as u64 {
                return Err(illegal());
            }
        }
        i32::try_from(value).map_err(|_| illegal())
    }
}

impl Command for ExitCommand {
    fn execute(&self, args: &[String], _state: &mut ShellState) -> Result<Flow, CommandError> {
        match args.first() {
            None => Ok(Flow::Terminate),
            Some(operand) => Self::parse_status(operand).map(Flow::Exit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::testing;

    fn exit_with(operand: &str) -> Result<Flow, CommandError> {
        let (mut state, _, _) = testing::state();
        ExitCommand::new().execute(&[operand.to_string()], &mut state)
    }

    #[test]
    fn test_exit_without_operand_terminates() {
        let (mut state, _, _) = testing::state();
        state.last_status = 3;
        let flow = ExitCommand::new().execute(&[], &mut state);
        assert!(matches!(flow, Ok(Flow::Terminate)));
        assert_eq!(state.last_status, 3);
    }

    #[test]
    fn test_exit_with_status() {
        assert!(matches!(exit_with("0"), Ok(Flow::Exit(0))));
        assert!(matches!(exit_with("98"), Ok(Flow::Exit(98))));
        assert!(matches!(exit_with("+7"), Ok(Flow::Exit(7))));
        assert!(matches!(exit_with("2147483647"), Ok(Flow::Exit(i32::MAX))));
    }

    #[test]
    fn test_exit_illegal_numbers() {
        for operand in ["abc", "-1", "+", "12a", "2147483648", "99999999999999999999"] {
            assert!(
                matches!(exit_with(operand), Err(CommandError::IllegalNumber(ref s)) if s == operand),
                "{} should be rejected",
                operand
            );
        }
    }
}
