// (C) 2020 Srimanta Barua <srimanta.barua1@gmail.com>

use std::mem;

use crate::lexer::{Lexer, Token};
use crate::{Error, Result};

/// Arithmetic operators. Unary uses of `+`/`-` reuse `Add`/`Sub`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug)]
pub enum Ast {
    BinOp(Box<Ast>, Op, Box<Ast>),
    UnaryOp(Op, Box<Ast>),
    Num(i64),
    Compound(Vec<Ast>),
    Assign(String, Box<Ast>),
    Var(String),
    NoOp,
}

/// Recursive-descent parser over the grammar:
///
/// program   : compound '.'
/// compound  : BEGIN statement (';' statement)* END
/// statement : compound | ID ':=' expr | <empty>
/// expr      : term (('+' | '-') term)*
/// term      : factor (('*' | '/') factor)*
/// factor    : ('+' | '-') factor | INTEGER | '(' expr ')' | ID
pub struct Parser {
    lexer: Lexer,
    current: Token,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Result<Parser> {
        let current = lexer.next_token()?;
        Ok(Parser { lexer, current })
    }

    // Consume the current token and return it
    fn advance(&mut self) -> Result<Token> {
        let next = self.lexer.next_token()?;
        Ok(mem::replace(&mut self.current, next))
    }

    fn expect(&mut self, token: Token, expected: &'static str) -> Result<()> {
        if self.current == token {
            self.advance()?;
            Ok(())
        } else {
            Err(Error::UnexpectedToken {
                expected,
                found: self.current.clone(),
            })
        }
    }

    fn factor(&mut self) -> Result<Ast> {
        match self.current {
            Token::Plus => {
                self.advance()?;
                Ok(Ast::UnaryOp(Op::Add, Box::new(self.factor()?)))
            }
            Token::Minus => {
                self.advance()?;
                Ok(Ast::UnaryOp(Op::Sub, Box::new(self.factor()?)))
            }
            Token::Integer(n) => {
                self.advance()?;
                Ok(Ast::Num(n))
            }
            Token::LParen => {
                self.advance()?;
                let node = self.expr()?;
                self.expect(Token::RParen, "')'")?;
                Ok(node)
            }
            Token::Id(_) => Ok(Ast::Var(self.variable()?)),
            _ => Err(Error::UnexpectedToken {
                expected: "a factor",
                found: self.current.clone(),
            }),
        }
    }

    fn term(&mut self) -> Result<Ast> {
        let mut node = self.factor()?;
        loop {
            let op = match self.current {
                Token::Mul => Op::Mul,
                Token::Div => Op::Div,
                _ => break,
            };
            self.advance()?;
            node = Ast::BinOp(Box::new(node), op, Box::new(self.factor()?));
        }
        Ok(node)
    }

    fn expr(&mut self) -> Result<Ast> {
        let mut node = self.term()?;
        loop {
            let op = match self.current {
                Token::Plus => Op::Add,
                Token::Minus => Op::Sub,
                _ => break,
            };
            self.advance()?;
            node = Ast::BinOp(Box::new(node), op, Box::new(self.term()?));
        }
        Ok(node)
    }

    fn variable(&mut self) -> Result<String> {
        match self.advance()? {
            Token::Id(name) => Ok(name),
            found => Err(Error::UnexpectedToken {
                expected: "an identifier",
                found,
            }),
        }
    }

    fn assignment(&mut self) -> Result<Ast> {
        let name = self.variable()?;
        self.expect(Token::Assign, "':='")?;
        let value = self.expr()?;
        Ok(Ast::Assign(name, Box::new(value)))
    }

    fn statement(&mut self) -> Result<Ast> {
        match self.current {
            Token::Begin => self.compound_statement(),
            Token::Id(_) => self.assignment(),
            _ => Ok(Ast::NoOp),
        }
    }

    fn statement_list(&mut self) -> Result<Vec<Ast>> {
        let mut nodes = vec![self.statement()?];
        while self.current == Token::Semi {
            self.advance()?;
            nodes.push(self.statement()?);
        }
        Ok(nodes)
    }

    fn compound_statement(&mut self) -> Result<Ast> {
        self.expect(Token::Begin, "'BEGIN'")?;
        let nodes = self.statement_list()?;
        self.expect(Token::End, "'END'")?;
        Ok(Ast::Compound(nodes))
    }

    pub fn parse(&mut self) -> Result<Ast> {
        let node = self.compound_statement()?;
        self.expect(Token::Dot, "'.'")?;
        Ok(node)
    }
}
