//! Two-character move tokens.
//!
//! `!<` and `!>` rotate counter-clockwise and clockwise, `!B` and `!W` uplift
//! a color, anything else is a row label followed by a column label.

use derive_more::{Display, Error};
use uplift_four::{Color, Command, Pos};

/// Why a token could not be read as a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Token is not exactly two characters.
    #[display("Invalid input. Please enter two characters.")]
    WrongLength,
    /// `!` followed by an unknown character.
    #[display("Invalid special move.")]
    UnknownSpecial,
    /// A character that is not a row or column label.
    #[display("Invalid position.")]
    BadLabel,
}

/// Label character for row or column `index`.
pub fn label(index: usize) -> char {
    match index {
        0..=9 => char::from(b'0' + index as u8),
        10..=35 => char::from(b'A' + (index - 10) as u8),
        36..=61 => char::from(b'a' + (index - 36) as u8),
        _ => '?',
    }
}

/// Index named by a label character.
pub fn index_of(label: char) -> Option<usize> {
    match label {
        '0'..='9' => Some(label as usize - '0' as usize),
        'A'..='Z' => Some(label as usize - 'A' as usize + 10),
        'a'..='z' => Some(label as usize - 'a' as usize + 36),
        _ => None,
    }
}

/// Decodes one token into a command.
///
/// Positions are not bounds-checked here; the engine rejects them.
pub fn parse_command(token: &str) -> Result<Command, InputError> {
    let mut chars = token.chars();
    let (Some(first), Some(second), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(InputError::WrongLength);
    };

    if first == '!' {
        return match second {
            '<' => Ok(Command::Rotate { clockwise: false }),
            '>' => Ok(Command::Rotate { clockwise: true }),
            'B' => Ok(Command::Uplift(Color::Black)),
            'W' => Ok(Command::Uplift(Color::White)),
            _ => Err(InputError::UnknownSpecial),
        };
    }

    match (index_of(first), index_of(second)) {
        (Some(row), Some(col)) => Ok(Command::Place(Pos::new(row, col))),
        _ => Err(InputError::BadLabel),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_all_ranges() {
        for index in [0, 9, 10, 35, 36, 61] {
            assert_eq!(index_of(label(index)), Some(index));
        }
        assert_eq!(label(62), '?');
        assert_eq!(index_of('?'), None);
    }

    #[test]
    fn test_special_moves() {
        assert_eq!(parse_command("!<"), Ok(Command::Rotate { clockwise: false }));
        assert_eq!(parse_command("!>"), Ok(Command::Rotate { clockwise: true }));
        assert_eq!(parse_command("!B"), Ok(Command::Uplift(Color::Black)));
        assert_eq!(parse_command("!W"), Ok(Command::Uplift(Color::White)));
        assert_eq!(parse_command("!x"), Err(InputError::UnknownSpecial));
    }

    #[test]
    fn test_placement() {
        assert_eq!(parse_command("12"), Ok(Command::Place(Pos::new(1, 2))));
        assert_eq!(parse_command("A0"), Ok(Command::Place(Pos::new(10, 0))));
        assert_eq!(parse_command("0b"), Ok(Command::Place(Pos::new(0, 37))));
        assert_eq!(parse_command("1-"), Err(InputError::BadLabel));
    }

    #[test]
    fn test_input_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(InputError::BadLabel);
        assert_eq!(err.to_string(), "Invalid position.");
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(parse_command("1"), Err(InputError::WrongLength));
        assert_eq!(parse_command("123"), Err(InputError::WrongLength));
    }
}
