use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_TOKEN,
};

use super::{
    stream::SourceStream,
    tokens::{Token, TokenKind, RESERVED_LOOKUP},
};

const OPERATOR_CHARS: &str = "+-*/=!<>%&|,;(){}.";

// Scanner states. `Operator` carries the already-consumed seed character
// it dispatches on.
enum State {
    Start,
    Ident,
    Integer,
    Real,
    Operator(char),
    Str,
    CharLit,
    LineComment,
    BlockComment,
}

// Every consumed character goes through here so the line counter advances
// exactly once per consumed newline, whether it sits in code, whitespace,
// or a comment.
fn take(stream: &mut SourceStream, line: &mut u32) -> Option<char> {
    let c = stream.get();
    if c == Some('\n') {
        *line += 1;
    }
    c
}

fn scan(stream: &mut SourceStream, line: &mut u32) -> Result<Token, Error> {
    let mut state = State::Start;
    let mut lexeme = String::new();

    loop {
        match state {
            State::Start => {
                let c = match stream.peek() {
                    Some(c) => c,
                    None => return Ok(MK_TOKEN!(TokenKind::EOF, String::new(), *line)),
                };

                if c.is_whitespace() {
                    take(stream, line);
                } else if c.is_ascii_alphabetic() || c == '_' {
                    lexeme.push(c);
                    take(stream, line);
                    state = State::Ident;
                } else if c.is_ascii_digit() {
                    lexeme.push(c);
                    take(stream, line);
                    state = State::Integer;
                } else if c == '"' {
                    take(stream, line);
                    state = State::Str;
                } else if c == '\'' {
                    take(stream, line);
                    state = State::CharLit;
                } else if OPERATOR_CHARS.contains(c) {
                    lexeme.push(c);
                    take(stream, line);
                    state = State::Operator(c);
                } else {
                    lexeme.push(c);
                    take(stream, line);
                    return Err(Error::new(ErrorImpl::UnrecognizedLexeme { lexeme }, *line));
                }
            }

            State::Ident => match stream.peek() {
                Some(c) if c.is_ascii_alphanumeric() || c == '_' => {
                    lexeme.push(c);
                    take(stream, line);
                }
                _ => {
                    // Reserved words match in any letter case and come back
                    // with a normalized spelling; identifiers keep theirs.
                    let folded = lexeme.to_lowercase();
                    return Ok(match RESERVED_LOOKUP.get(folded.as_str()) {
                        Some(kind) => MK_TOKEN!(*kind, folded, *line),
                        None => MK_TOKEN!(TokenKind::Identifier, lexeme, *line),
                    });
                }
            },

            State::Integer => match stream.peek() {
                Some(c) if c.is_ascii_digit() => {
                    lexeme.push(c);
                    take(stream, line);
                }
                Some('.') => {
                    take(stream, line);
                    match stream.peek() {
                        Some(c) if c.is_ascii_digit() => {
                            lexeme.push('.');
                            state = State::Real;
                        }
                        _ => {
                            // Standalone dot after the digits: give it back
                            // and let the next call scan it.
                            stream.push_back('.');
                            return Ok(MK_TOKEN!(TokenKind::IntConst, lexeme, *line));
                        }
                    }
                }
                _ => return Ok(MK_TOKEN!(TokenKind::IntConst, lexeme, *line)),
            },

            State::Real => match stream.peek() {
                Some(c) if c.is_ascii_digit() => {
                    lexeme.push(c);
                    take(stream, line);
                }
                Some('.') => {
                    // Second decimal point.
                    take(stream, line);
                    lexeme.push('.');
                    return Err(Error::new(
                        ErrorImpl::MalformedRealConstant { lexeme },
                        *line,
                    ));
                }
                _ => return Ok(MK_TOKEN!(TokenKind::RealConst, lexeme, *line)),
            },

            State::Operator(seed) => match seed {
                '+' | '-' => match stream.peek() {
                    Some('=') => {
                        take(stream, line);
                        lexeme.push('=');
                        let kind = if seed == '+' {
                            TokenKind::PlusEquals
                        } else {
                            TokenKind::MinusEquals
                        };
                        return Ok(MK_TOKEN!(kind, lexeme, *line));
                    }
                    Some(c) if c.is_ascii_digit() => {
                        // The seed is the sign of the number that follows.
                        state = State::Integer;
                    }
                    Some('.') => {
                        take(stream, line);
                        lexeme.push('.');
                        state = State::Real;
                    }
                    _ => {
                        let kind = if seed == '+' {
                            TokenKind::Plus
                        } else {
                            TokenKind::Dash
                        };
                        return Ok(MK_TOKEN!(kind, lexeme, *line));
                    }
                },
                '*' => match stream.peek() {
                    Some('=') => {
                        take(stream, line);
                        lexeme.push('=');
                        return Ok(MK_TOKEN!(TokenKind::StarEquals, lexeme, *line));
                    }
                    _ => return Ok(MK_TOKEN!(TokenKind::Star, lexeme, *line)),
                },
                '/' => match stream.peek() {
                    Some('=') => {
                        take(stream, line);
                        lexeme.push('=');
                        return Ok(MK_TOKEN!(TokenKind::SlashEquals, lexeme, *line));
                    }
                    Some('/') => {
                        take(stream, line);
                        lexeme.clear();
                        state = State::LineComment;
                    }
                    Some('*') => {
                        take(stream, line);
                        lexeme.clear();
                        state = State::BlockComment;
                    }
                    _ => return Ok(MK_TOKEN!(TokenKind::Slash, lexeme, *line)),
                },
                '=' => match stream.peek() {
                    Some('=') => {
                        take(stream, line);
                        lexeme.push('=');
                        return Ok(MK_TOKEN!(TokenKind::Equals, lexeme, *line));
                    }
                    _ => return Ok(MK_TOKEN!(TokenKind::Assignment, lexeme, *line)),
                },
                '!' => match stream.peek() {
                    Some('=') => {
                        take(stream, line);
                        lexeme.push('=');
                        return Ok(MK_TOKEN!(TokenKind::NotEquals, lexeme, *line));
                    }
                    _ => return Ok(MK_TOKEN!(TokenKind::Not, lexeme, *line)),
                },
                '<' => return Ok(MK_TOKEN!(TokenKind::Less, lexeme, *line)),
                '>' => return Ok(MK_TOKEN!(TokenKind::Greater, lexeme, *line)),
                '%' => match stream.peek() {
                    Some('=') => {
                        take(stream, line);
                        lexeme.push('=');
                        return Ok(MK_TOKEN!(TokenKind::PercentEquals, lexeme, *line));
                    }
                    _ => return Ok(MK_TOKEN!(TokenKind::Percent, lexeme, *line)),
                },
                '&' => match stream.peek() {
                    Some('&') => {
                        take(stream, line);
                        lexeme.push('&');
                        return Ok(MK_TOKEN!(TokenKind::And, lexeme, *line));
                    }
                    _ => {
                        return Err(Error::new(
                            ErrorImpl::IncompleteLogicalOperator { lexeme },
                            *line,
                        ))
                    }
                },
                '|' => match stream.peek() {
                    Some('|') => {
                        take(stream, line);
                        lexeme.push('|');
                        return Ok(MK_TOKEN!(TokenKind::Or, lexeme, *line));
                    }
                    _ => {
                        return Err(Error::new(
                            ErrorImpl::IncompleteLogicalOperator { lexeme },
                            *line,
                        ))
                    }
                },
                ',' => return Ok(MK_TOKEN!(TokenKind::Comma, lexeme, *line)),
                ';' => return Ok(MK_TOKEN!(TokenKind::Semicolon, lexeme, *line)),
                '(' => return Ok(MK_TOKEN!(TokenKind::OpenParen, lexeme, *line)),
                ')' => return Ok(MK_TOKEN!(TokenKind::CloseParen, lexeme, *line)),
                '{' => return Ok(MK_TOKEN!(TokenKind::OpenCurly, lexeme, *line)),
                '}' => return Ok(MK_TOKEN!(TokenKind::CloseCurly, lexeme, *line)),
                '.' => match stream.peek() {
                    Some(c) if c.is_ascii_digit() => {
                        // Leading-dot real constant such as `.5`.
                        state = State::Real;
                    }
                    _ => return Ok(MK_TOKEN!(TokenKind::Dot, lexeme, *line)),
                },
                _ => unreachable!(),
            },

            State::Str => match stream.peek() {
                Some('"') => {
                    take(stream, line);
                    return Ok(MK_TOKEN!(TokenKind::StringConst, lexeme, *line));
                }
                // Mismatched delimiter, end of line, or end of input. The
                // offending character is left for the next call.
                Some('\'') | Some('\n') | None => {
                    return Err(Error::new(ErrorImpl::InvalidStringConstant { lexeme }, *line))
                }
                Some(c) => {
                    lexeme.push(c);
                    take(stream, line);
                }
            },

            State::CharLit => match stream.peek() {
                Some('\'') => {
                    take(stream, line);
                    return Ok(MK_TOKEN!(TokenKind::CharConst, lexeme, *line));
                }
                Some('\n') => {
                    return Err(Error::new(ErrorImpl::NewlineInCharacterConstant, *line))
                }
                None => {
                    return Err(Error::new(
                        ErrorImpl::InvalidCharacterConstant { lexeme },
                        *line,
                    ))
                }
                Some(c) => {
                    lexeme.push(c);
                    take(stream, line);
                    if lexeme.chars().count() > 1 {
                        return Err(Error::new(
                            ErrorImpl::InvalidCharacterConstant { lexeme },
                            *line,
                        ));
                    }
                }
            },

            State::LineComment => match take(stream, line) {
                Some('\n') | None => state = State::Start,
                Some(_) => {}
            },

            State::BlockComment => match take(stream, line) {
                Some('*') if stream.peek() == Some('/') => {
                    take(stream, line);
                    state = State::Start;
                }
                // An unterminated comment runs to end of input without a
                // diagnostic.
                None => state = State::Start,
                Some(_) => {}
            },
        }
    }
}

/// Produces the next token from the stream.
///
/// Each call resumes exactly where the previous one left the cursor and
/// returns one complete token, always preferring the longest lexeme that
/// starts at the current position. Lexical failures come back as tokens of
/// kind [`TokenKind::Error`] whose lexeme is the diagnostic text; the
/// cursor stays where the failure was detected, so continuing (or not) is
/// the caller's call.
///
/// The caller owns both the stream and the line counter; the counter
/// starts at 1 and is advanced once per newline the scanner consumes.
pub fn next_token(stream: &mut SourceStream, line: &mut u32) -> Token {
    match scan(stream, line) {
        Ok(token) => token,
        Err(error) => {
            let line_number = error.get_line();
            MK_TOKEN!(TokenKind::Error, error.message(), line_number)
        }
    }
}

/// Tokenizes a whole source text, including the trailing `EOF` token.
/// The first lexical error aborts the scan.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut stream = SourceStream::new(source);
    let mut line = 1;
    let mut tokens = vec![];

    loop {
        let token = scan(&mut stream, &mut line)?;
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return Ok(tokens);
        }
    }
}
