//! Turning an expanded line into words.
//!
//! Quotes are honoured while splitting (a quoted space does not end a word)
//! but stay in the word text until [`unquote`] runs right before dispatch,
//! so a quoted `;` is never mistaken for an operator.

const OPERATOR_CHARS: [char; 3] = [';', '&', '|'];

pub fn is_operator_char(c: char) -> bool {
    OPERATOR_CHARS.contains(&c)
}

/// Strips a trailing comment and puts spaces around chain operators, so
/// `ls;pwd` reads like `ls ; pwd`. A run of operator characters is kept whole
/// and set apart when it holds a `;` or is at least two long; a single `&` or
/// `|` stays inside its word.
pub fn normalize(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut out = String::with_capacity(line.len() + 8);
    let mut quote: Option<char> = None;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let prev = i.checked_sub(1).map(|p| chars[p]);
        match quote {
            Some(open) => {
                if c == open {
                    quote = None;
                }
                out.push(c);
                i += 1;
            }
            None if c == '#' && matches!(prev, None | Some(' ')) => break,
            None if is_operator_char(c) => {
                let run = chars[i..].iter().take_while(|&&n| is_operator_char(n)).count();
                let separate = run > 1 || c == ';';
                if separate && prev.is_some_and(|p| p != ' ') {
                    out.push(' ');
                }
                out.extend(&chars[i..i + run]);
                i += run;
                if separate && chars.get(i).is_some_and(|&n| n != ' ') {
                    out.push(' ');
                }
            }
            None => {
                if c == '\'' || c == '"' {
                    quote = Some(c);
                }
                out.push(c);
                i += 1;
            }
        }
    }
    out
}

/// Splits on `delim`, collapsing repeats; an empty or delimiter-only line
/// gives no tokens.
pub fn tokenize(line: &str, delim: char) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(open) if c == open => {
                quote = None;
                current.push(c);
            }
            Some(_) => current.push(c),
            None if c == delim => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            None => {
                if c == '\'' || c == '"' {
                    quote = Some(c);
                }
                current.push(c);
            }
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Removes the quote characters that delimit quoted parts of a word.
pub fn unquote(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut quote: Option<char> = None;
    for c in token.chars() {
        match quote {
            Some(open) if c == open => quote = None,
            Some(_) => out.push(c),
            None if c == '\'' || c == '"' => quote = Some(c),
            None => out.push(c),
        }
    }
    out
}
