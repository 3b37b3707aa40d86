use memoreto_core::{Coord, Coord2};
use std::str::FromStr;
use thiserror::Error;

/// One line of player input at a pick prompt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Pick(Coord2),
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected row,col or q")]
    BadFormat,
    #[error("coordinates must be numbers")]
    BadNumber,
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("q") || raw.eq_ignore_ascii_case("quit") {
            return Ok(Self::Quit);
        }

        let (row, col) = raw.split_once(',').ok_or(ParseError::BadFormat)?;
        let row: Coord = row.trim().parse().map_err(|_| ParseError::BadNumber)?;
        let col: Coord = col.trim().parse().map_err(|_| ParseError::BadNumber)?;
        Ok(Self::Pick((row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_coordinates() {
        assert_eq!("1,2".parse(), Ok(Command::Pick((1, 2))));
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(" 0 , 3 ".parse(), Ok(Command::Pick((0, 3))));
    }

    #[test]
    fn recognizes_quit_keywords_case_insensitively() {
        assert_eq!("q".parse(), Ok(Command::Quit));
        assert_eq!("QUIT".parse(), Ok(Command::Quit));
        assert_eq!("Quit".parse(), Ok(Command::Quit));
    }

    #[test]
    fn rejects_junk() {
        assert_eq!(Command::from_str("one,two"), Err(ParseError::BadNumber));
        assert_eq!(Command::from_str("12"), Err(ParseError::BadFormat));
        assert_eq!(Command::from_str(""), Err(ParseError::BadFormat));
        assert_eq!(Command::from_str("1,2,3"), Err(ParseError::BadNumber));
        assert_eq!(Command::from_str("-1,2"), Err(ParseError::BadNumber));
    }
}
