use crate::error::{Error, Kind};
use crate::input::Input;
use crate::value::{Map, Value};
use nom::{
    branch::alt,
    bytes::complete::{tag, take, take_while},
    character::complete::{anychar, char, digit1, one_of},
    combinator::{map, opt, value},
    sequence::{preceded, tuple},
    Err, IResult, Slice,
};

pub type Span<'a> = Input<'a>;

type ParseResult<'a, R> = IResult<Span<'a>, R, Error>;

fn is_sp(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn sp(i: Span) -> ParseResult<Span> {
    take_while(is_sp)(i)
}

// A value must be followed by whitespace, a separator, a closing bracket
// or the end of input. `truex` is not `true`.
fn at_boundary(i: &Span) -> bool {
    match i.peek() {
        None => true,
        Some(c) => is_sp(c) || matches!(c, ',' | ']' | '}'),
    }
}

fn literal(i: Span) -> ParseResult<Value> {
    let start = i;

    let (i, parsed) = alt((
        value(Value::Bool(true), tag("true")),
        value(Value::Bool(false), tag("false")),
        value(Value::Null, tag("null")),
    ))(i)
    .map_err(|_: Err<Error>| Err::Failure(Error::new(&start, Kind::UnexpectedToken)))?;

    if !at_boundary(&i) {
        return Err(Err::Failure(Error::new(&start, Kind::UnexpectedToken)));
    }

    Ok((i, parsed))
}

fn u16_hex<'a>(i: Span<'a>, at: &Span<'a>) -> ParseResult<'a, u16> {
    let (i, digits) = take(4usize)(i).map_err(|_: Err<Error>| {
        // The escape ran into the end of the input
        let end = i.slice(i.fragment().len()..);

        Err::Failure(Error::new(&end, Kind::UnterminatedString))
    })?;

    match u16::from_str_radix(digits.fragment(), 16) {
        Ok(unit) => Ok((i, unit)),
        Err(_) => Err(Err::Failure(Error::new(at, Kind::InvalidEscape))),
    }
}

// Decodes the code units behind a `\u` escape. Rust strings hold scalar
// values, not UTF-16, so a high surrogate must be completed by a low one
// and a lone surrogate is rejected.
fn unicode_escape<'a>(i: Span<'a>, at: &Span<'a>) -> ParseResult<'a, char> {
    let (i, first) = u16_hex(i, at)?;

    if (0xDC00..0xE000).contains(&first) {
        return Err(Err::Failure(Error::new(at, Kind::InvalidEscape)));
    }

    let (i, scalar) = if (0xD800..0xDC00).contains(&first) {
        let (i, _) = tag("\\u")(i)
            .map_err(|_: Err<Error>| Err::Failure(Error::new(at, Kind::InvalidEscape)))?;
        let (i, low) = u16_hex(i, at)?;

        if !(0xDC00..0xE000).contains(&low) {
            return Err(Err::Failure(Error::new(at, Kind::InvalidEscape)));
        }

        let high_ten = (first as u32) - 0xD800;
        let low_ten = (low as u32) - 0xDC00;

        (i, (high_ten << 10) + low_ten + 0x10000)
    } else {
        (i, first as u32)
    };

    match std::char::from_u32(scalar) {
        Some(c) => Ok((i, c)),
        None => Err(Err::Failure(Error::new(at, Kind::InvalidEscape))),
    }
}

// Cursor sits on the character right after the backslash.
fn escape(i: Span) -> ParseResult<char> {
    match i.peek() {
        None => Err(Err::Failure(Error::new(&i, Kind::UnterminatedString))),
        Some('"') | Some('\\') => anychar(i),
        Some('u') => {
            let at = i;
            let (i, _) = anychar(i)?;

            unicode_escape(i, &at)
        }
        Some(_) => Err(Err::Failure(Error::new(&i, Kind::InvalidEscape))),
    }
}

fn string(i: Span) -> ParseResult<String> {
    let (mut i, _) = char('"')(i)?;

    let mut parsed = String::new();

    loop {
        match i.peek() {
            None => return Err(Err::Failure(Error::new(&i, Kind::UnterminatedString))),
            Some('"') => {
                let (i, _) = anychar(i)?;

                return Ok((i, parsed));
            }
            Some('\\') => {
                let (rest, _) = anychar(i)?;
                let (rest, c) = escape(rest)?;

                parsed.push(c);
                i = rest;
            }
            Some(_) => {
                let (rest, c) = anychar(i)?;

                parsed.push(c);
                i = rest;
            }
        }
    }
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

// `-?\d+(\.\d+)?([eE][+-]?\d+)?`
fn is_number_grammar(text: &str) -> bool {
    let parsed: IResult<&str, _> = tuple((
        opt(char('-')),
        digit1,
        opt(preceded(char('.'), digit1)),
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    ))(text);

    matches!(parsed, Ok(("", _)))
}

// Takes the maximal run of number characters, then validates the whole run.
// `f64::from_str` is laxer than the JSON grammar (`1.`, `.5` and `+1` all
// parse), so the run is checked before conversion.
fn number(i: Span) -> ParseResult<f64> {
    let start = i;

    let (i, run) = take_while(is_number_char)(i)?;

    let text = run.fragment();

    if !is_number_grammar(text) {
        return Err(Err::Failure(Error::new(&start, Kind::InvalidNumber)));
    }

    match text.parse::<f64>() {
        Ok(num) => Ok((i, num)),
        Err(_) => Err(Err::Failure(Error::new(&start, Kind::InvalidNumber))),
    }
}

fn array(i: Span) -> ParseResult<Vec<Value>> {
    let (i, _) = char('[')(i)?;
    let (i, _) = sp(i)?;

    if i.starts_with(']') {
        let (i, _) = anychar(i)?;

        return Ok((i, Vec::new()));
    }

    let mut items = Vec::new();
    let mut i = i;

    loop {
        let (rest, element) = json_value(i)?;

        items.push(element);

        let (rest, _) = sp(rest)?;

        if rest.starts_with(']') {
            let (rest, _) = anychar(rest)?;

            return Ok((rest, items));
        }

        if !rest.starts_with(',') {
            return Err(Err::Failure(Error::new(&rest, Kind::ExpectedComma)));
        }

        let (rest, _) = anychar(rest)?;

        i = rest;
    }
}

fn object(i: Span) -> ParseResult<Map> {
    let (i, _) = char('{')(i)?;
    let (i, _) = sp(i)?;

    if i.starts_with('}') {
        let (i, _) = anychar(i)?;

        return Ok((i, Map::new()));
    }

    let mut members = Map::new();
    let mut i = i;

    loop {
        let (rest, _) = sp(i)?;

        if !rest.starts_with('"') {
            return Err(Err::Failure(Error::new(&rest, Kind::UnexpectedToken)));
        }

        let (rest, key) = string(rest)?;

        let (rest, _) = sp(rest)?;

        if !rest.starts_with(':') {
            return Err(Err::Failure(Error::new(&rest, Kind::ExpectedColon)));
        }

        let (rest, _) = anychar(rest)?;

        let (rest, member) = json_value(rest)?;

        // Last write wins, the entry stays where the key first appeared
        members.insert(key, member);

        let (rest, _) = sp(rest)?;

        if rest.starts_with('}') {
            let (rest, _) = anychar(rest)?;

            return Ok((rest, members));
        }

        if !rest.starts_with(',') {
            return Err(Err::Failure(Error::new(&rest, Kind::ExpectedComma)));
        }

        let (rest, _) = anychar(rest)?;

        i = rest;
    }
}

fn json_value(i: Span) -> ParseResult<Value> {
    let (i, _) = sp(i)?;

    match i.peek() {
        Some('{') => map(object, Value::Object)(i),
        Some('[') => map(array, Value::Array)(i),
        Some('"') => map(string, Value::String)(i),
        Some(c) if c == '-' || c.is_ascii_digit() => map(number, Value::Number)(i),
        Some('t') | Some('f') | Some('n') => literal(i),
        _ => Err(Err::Failure(Error::new(&i, Kind::UnexpectedToken))),
    }
}

fn unwrap_nom_error<'a, T>(
    result: ParseResult<'a, T>,
) -> std::result::Result<(Span<'a>, T), Error> {
    match result {
        Ok(v) => Ok(v),
        Err(Err::Error(e)) | Err(Err::Failure(e)) => Err(e),
        // Only complete parsers run here
        Err(Err::Incomplete(_)) => unreachable!("complete parsers never return Incomplete"),
    }
}

/// Parses a complete JSON document into a [`Value`].
///
/// The whole input has to hold exactly one value, surrounded by nothing but
/// whitespace. The first error aborts the parse and reports its position.
///
/// ```rust
/// use json_codec::{parse, value::Value};
///
/// let parsed = parse("[1, 2, 3]").unwrap();
///
/// assert_eq!(
///     parsed,
///     Value::Array(vec![
///         Value::Number(1.0),
///         Value::Number(2.0),
///         Value::Number(3.0),
///     ])
/// );
/// ```
pub fn parse(s: &str) -> Result<Value, Error> {
    let span = Span::new(s);

    let (rest, parsed) = unwrap_nom_error(json_value(span))?;

    let (rest, _) = unwrap_nom_error(sp(rest))?;

    if !rest.is_empty() {
        return Err(Error::new(&rest, Kind::UnexpectedToken));
    }

    Ok(parsed)
}
