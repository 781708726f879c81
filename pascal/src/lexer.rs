// (C) 2020 Srimanta Barua <srimanta.barua1@gmail.com>

use crate::{Error, Result};

/// A lexical token of the Pascal subset. Keywords are matched
/// case-insensitively.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Token {
    Integer(i64),
    Id(String),
    Plus,
    Minus,
    Mul,
    Div,
    LParen,
    RParen,
    Begin,
    End,
    Dot,
    Semi,
    Assign,
    Eof,
}

pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
}

impl Lexer {
    pub fn new(text: &str) -> Lexer {
        Lexer {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn integer(&mut self) -> i64 {
        let mut n = 0i64;
        while let Some(d) = self.current().and_then(|c| c.to_digit(10)) {
            n = n * 10 + d as i64;
            self.pos += 1;
        }
        n
    }

    fn word(&mut self) -> Token {
        let start = self.pos;
        while let Some(c) = self.current() {
            if c.is_alphanumeric() || c == '_' {
                self.pos += 1;
            } else {
                break;
            }
        }
        let word = self.chars[start..self.pos].iter().collect::<String>();
        if word.eq_ignore_ascii_case("BEGIN") {
            Token::Begin
        } else if word.eq_ignore_ascii_case("END") {
            Token::End
        } else {
            Token::Id(word)
        }
    }

    pub fn next_token(&mut self) -> Result<Token> {
        while let Some(c) = self.current() {
            if c.is_whitespace() {
                self.pos += 1;
                continue;
            }
            if c.is_ascii_digit() {
                return Ok(Token::Integer(self.integer()));
            }
            if c.is_alphabetic() {
                return Ok(self.word());
            }
            if c == ':' && self.peek() == Some('=') {
                self.pos += 2;
                return Ok(Token::Assign);
            }
            self.pos += 1;
            return match c {
                '+' => Ok(Token::Plus),
                '-' => Ok(Token::Minus),
                '*' => Ok(Token::Mul),
                '/' => Ok(Token::Div),
                '(' => Ok(Token::LParen),
                ')' => Ok(Token::RParen),
                ';' => Ok(Token::Semi),
                '.' => Ok(Token::Dot),
                _ => Err(Error::UnknownCharacter(c)),
            };
        }
        Ok(Token::Eof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(text);
        let mut out = Vec::new();
        loop {
            let token = lexer.next_token().unwrap();
            let done = token == Token::Eof;
            out.push(token);
            if done {
                break;
            }
        }
        out
    }

    #[test]
    fn operators_and_grouping() {
        assert_eq!(
            tokens("+ - * / ( ) ; ."),
            [
                Token::Plus,
                Token::Minus,
                Token::Mul,
                Token::Div,
                Token::LParen,
                Token::RParen,
                Token::Semi,
                Token::Dot,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn keywords() {
        assert_eq!(tokens("BEGIN END"), [Token::Begin, Token::End, Token::Eof]);
        assert_eq!(tokens("begin end"), [Token::Begin, Token::End, Token::Eof]);
    }

    #[test]
    fn identifiers() {
        assert_eq!(
            tokens("x y1 var_name"),
            [
                Token::Id("x".to_owned()),
                Token::Id("y1".to_owned()),
                Token::Id("var_name".to_owned()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn integers() {
        assert_eq!(
            tokens("123 0 4567"),
            [
                Token::Integer(123),
                Token::Integer(0),
                Token::Integer(4567),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn assignment() {
        assert_eq!(
            tokens("x:=10; y:= 20"),
            [
                Token::Id("x".to_owned()),
                Token::Assign,
                Token::Integer(10),
                Token::Semi,
                Token::Id("y".to_owned()),
                Token::Assign,
                Token::Integer(20),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn whitespace_handling() {
        assert_eq!(
            tokens(" BEGIN \n x := \t 1 + 2 END ."),
            [
                Token::Begin,
                Token::Id("x".to_owned()),
                Token::Assign,
                Token::Integer(1),
                Token::Plus,
                Token::Integer(2),
                Token::End,
                Token::Dot,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn unknown_character() {
        let mut lexer = Lexer::new("BEGIN @ END.");
        assert_eq!(lexer.next_token().unwrap(), Token::Begin);
        assert!(matches!(
            lexer.next_token(),
            Err(Error::UnknownCharacter('@'))
        ));
    }

    #[test]
    fn bare_colon_is_an_error() {
        let mut lexer = Lexer::new("x : = 1");
        assert_eq!(lexer.next_token().unwrap(), Token::Id("x".to_owned()));
        assert!(matches!(
            lexer.next_token(),
            Err(Error::UnknownCharacter(':'))
        ));
    }
}
