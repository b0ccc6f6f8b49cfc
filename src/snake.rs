//! Snake descriptions in move-token notation.
//!
//! A snake is written as one character per segment:
//! - `s`: the first segment
//! - `f`: forced, continues straight on from the previous segment
//! - `a`: free, turns onto one of the four orthogonal directions

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::geometry::GRID_SIZE;

/// Number of segments in a snake that fills the 3x3x3 cube.
pub const SNAKE_LENGTH: usize = GRID_SIZE;

/// A foldable snake with straight runs of widths
/// `[3, 2, 1, 2, 1, 2, 3, 1, 2, 2, 1, 3, 1, 3]` drawn flat on the table,
/// each run starting under the last cube of the one before.
pub const SAMPLE_SNAKE: &str = "sffaaafaafaaafafaaaafafafaf";

/// How a segment may be placed relative to its predecessor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    Start,
    Forced,
    Free,
}

impl Token {
    pub fn from_symbol(symbol: char) -> Option<Token> {
        match symbol {
            's' => Some(Token::Start),
            'f' => Some(Token::Forced),
            'a' => Some(Token::Free),
            _ => None,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Token::Start => 's',
            Token::Forced => 'f',
            Token::Free => 'a',
        }
    }
}

/// Reasons a token string is not a valid snake.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnakeError {
    #[error("snake has {length} segments, expected {}", SNAKE_LENGTH)]
    WrongLength { length: usize },
    #[error("snake must begin with 's', found {found:?}")]
    MissingStart { found: char },
    #[error("unknown token {symbol:?} at segment {index}")]
    UnknownToken { index: usize, symbol: char },
    #[error("start token at segment {index}, only the first segment may be 's'")]
    MisplacedStart { index: usize },
}

/// A validated snake: exactly [`SNAKE_LENGTH`] tokens, `Start` first and
/// nowhere else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Snake {
    tokens: [Token; SNAKE_LENGTH],
}

impl Snake {
    /// Parses the `s`/`f`/`a` notation.
    pub fn parse(input: &str) -> Result<Snake, SnakeError> {
        let length = input.chars().count();
        if length != SNAKE_LENGTH {
            return Err(SnakeError::WrongLength { length });
        }

        let mut tokens = [Token::Start; SNAKE_LENGTH];
        for (index, symbol) in input.chars().enumerate() {
            if index == 0 && symbol != Token::Start.symbol() {
                return Err(SnakeError::MissingStart { found: symbol });
            }
            tokens[index] =
                Token::from_symbol(symbol).ok_or(SnakeError::UnknownToken { index, symbol })?;
        }
        Snake::from_tokens(tokens)
    }

    /// Checks the start-token rules on an already tokenized snake.
    pub fn from_tokens(tokens: [Token; SNAKE_LENGTH]) -> Result<Snake, SnakeError> {
        if tokens[0] != Token::Start {
            return Err(SnakeError::MissingStart {
                found: tokens[0].symbol(),
            });
        }
        if let Some(index) = tokens[1..].iter().position(|&t| t == Token::Start) {
            return Err(SnakeError::MisplacedStart { index: index + 1 });
        }
        Ok(Snake { tokens })
    }

    /// Wraps tokens read off a verified fold, which always satisfy the
    /// start-token rules.
    pub(crate) const fn from_fold_tokens(tokens: [Token; SNAKE_LENGTH]) -> Snake {
        Snake { tokens }
    }

    #[inline]
    pub fn token(&self, index: usize) -> Token {
        self.tokens[index]
    }

    pub fn tokens(&self) -> &[Token; SNAKE_LENGTH] {
        &self.tokens
    }

    pub const fn len(&self) -> usize {
        SNAKE_LENGTH
    }

    /// Never true; a snake always has [`SNAKE_LENGTH`] segments.
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl FromStr for Snake {
    type Err = SnakeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Snake::parse(input)
    }
}

impl fmt::Display for Snake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in self.tokens {
            write!(f, "{}", token.symbol())?;
        }
        Ok(())
    }
}
