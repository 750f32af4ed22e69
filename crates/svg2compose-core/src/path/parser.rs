use super::PathCommand;
use super::lexer::{LexError, Lexer};
use crate::{Error, Result};

/// Parses SVG path data into commands, keeping the absolute/relative distinction.
///
/// Empty (or whitespace-only) input yields an empty list. After an explicit command letter, further
/// argument groups repeat that command; groups following `M`/`m` become `L`/`l` as in SVG 1.1
/// §8.3.2.
pub fn parse_path_data(data: &str) -> Result<Vec<PathCommand>> {
    let mut lexer = Lexer::new(data);
    let mut out = Vec::new();
    let mut repeat: Option<u8> = None;

    loop {
        lexer.skip_separators();
        let Some(b) = lexer.peek() else {
            break;
        };

        if b.is_ascii_alphabetic() {
            let offset = lexer.pos();
            if PathCommand::arity(b).is_none() {
                return Err(Error::UnknownPathCommand {
                    command: char::from(b),
                    offset,
                });
            }
            lexer.bump();
            if b.eq_ignore_ascii_case(&b'z') {
                out.push(PathCommand::Close);
                repeat = None;
                continue;
            }
            out.push(read_group(&mut lexer, b)?);
            repeat = Some(match b {
                b'M' => b'L',
                b'm' => b'l',
                other => other,
            });
        } else if lexer.at_number_start() {
            let Some(letter) = repeat else {
                return Err(malformed(
                    &lexer,
                    lexer.error("number without a preceding command"),
                ));
            };
            out.push(read_group(&mut lexer, letter)?);
        } else {
            let offset = lexer.pos();
            return Err(Error::MalformedPathData {
                message: "unexpected character".to_string(),
                near: lexer.excerpt(offset),
            });
        }
    }

    Ok(out)
}

fn read_group(lexer: &mut Lexer<'_>, letter: u8) -> Result<PathCommand> {
    let arity = PathCommand::arity(letter).unwrap_or(0);
    let mut args = [0.0_f64; 7];

    for (idx, slot) in args.iter_mut().enumerate().take(arity) {
        let is_arc_flag = letter.eq_ignore_ascii_case(&b'a') && (idx == 3 || idx == 4);
        let value = if is_arc_flag {
            lexer.flag().map(|f| if f { 1.0 } else { 0.0 })
        } else {
            lexer.number()
        };
        *slot = value.map_err(|err| malformed(lexer, err))?;
    }

    PathCommand::from_args(letter, &args[..arity]).ok_or_else(|| Error::UnknownPathCommand {
        command: char::from(letter),
        offset: lexer.pos(),
    })
}

fn malformed(lexer: &Lexer<'_>, err: LexError) -> Error {
    Error::MalformedPathData {
        near: lexer.excerpt(err.offset),
        message: err.message,
    }
}
