/// Canonicalises a decimal string in progress.
///
/// Surrounding whitespace is trimmed and redundant leading zeros of the
/// magnitude are collapsed. `""` and a lone `"-"` come back untouched, as does
/// anything of the form `0.<digits>`. Trailing zeros are never removed.
pub fn normalize(s: &str) -> String {
    let s = s.trim();
    if s.is_empty() || s == "-" {
        return s.to_owned();
    }

    let (sign, body) = match s.strip_prefix('-') {
        Some(body) => ("-", body),
        None => ("", s),
    };

    if body.len() > 1 && body.starts_with('0') && !body.starts_with("0.") {
        let stripped = body.trim_start_matches(|c: char| c == '0' || c.is_whitespace());
        if stripped.is_empty() || stripped.starts_with('.') {
            return format!("{}0{}", sign, stripped);
        }
        return format!("{}{}", sign, stripped);
    }

    format!("{}{}", sign, body)
}
