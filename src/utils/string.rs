/// Decode the text of a Go string literal node into its runtime value.
///
/// Raw strings (backticks) are taken verbatim minus carriage returns.
/// Interpreted strings have their escape sequences decoded; unknown or
/// malformed escapes are kept as written.
pub fn unquote_go_string(s: &str) -> String {
    let s = s.trim();
    if s.len() >= 2 && s.starts_with('`') && s.ends_with('`') {
        return s[1..s.len() - 1].replace('\r', "");
    }
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        return decode_escapes(&s[1..s.len() - 1]);
    }
    s.to_string()
}

// `\xNN` and `\NNN` are single bytes, so decoding works on bytes and only
// becomes a string at the end.
fn decode_escapes(body: &str) -> String {
    let mut out: Vec<u8> = Vec::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            push_char(&mut out, c);
            continue;
        }
        let Some(esc) = chars.next() else {
            out.push(b'\\');
            break;
        };
        match esc {
            'n' => out.push(b'\n'),
            't' => out.push(b'\t'),
            'r' => out.push(b'\r'),
            'a' => out.push(0x07),
            'b' => out.push(0x08),
            'f' => out.push(0x0C),
            'v' => out.push(0x0B),
            '\\' => out.push(b'\\'),
            '"' => out.push(b'"'),
            '\'' => out.push(b'\''),
            'x' => {
                let digits: String = chars.by_ref().take(2).collect();
                match u8::from_str_radix(&digits, 16) {
                    Ok(byte) if digits.len() == 2 => out.push(byte),
                    _ => push_verbatim(&mut out, esc, &digits),
                }
            }
            'u' | 'U' => {
                let width = if esc == 'u' { 4 } else { 8 };
                let digits: String = chars.by_ref().take(width).collect();
                match u32::from_str_radix(&digits, 16).ok().and_then(char::from_u32) {
                    Some(decoded) if digits.len() == width => push_char(&mut out, decoded),
                    _ => push_verbatim(&mut out, esc, &digits),
                }
            }
            '0'..='7' => {
                let mut digits = String::new();
                while digits.len() < 2 {
                    match chars.peek() {
                        Some(d @ '0'..='7') => {
                            digits.push(*d);
                            chars.next();
                        }
                        _ => break,
                    }
                }
                match u8::from_str_radix(&format!("{esc}{digits}"), 8) {
                    Ok(byte) if digits.len() == 2 => out.push(byte),
                    _ => push_verbatim(&mut out, esc, &digits),
                }
            }
            other => push_verbatim(&mut out, other, ""),
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0u8; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}

fn push_verbatim(out: &mut Vec<u8>, esc: char, rest: &str) {
    out.push(b'\\');
    push_char(out, esc);
    out.extend_from_slice(rest.as_bytes());
}

/// Apply the rename `go test` performs on sub-test names: spaces become underscores.
pub fn sanitize_test_name(name: &str) -> String {
    name.replace(' ', "_")
}
