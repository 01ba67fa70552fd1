use super::Var;

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Replace `$name` references in every argument with the current
/// value of `name`. Unknown names stay as written. The result is
/// never scanned again, so a value containing `$` is inserted as is.
pub fn substitute(args: &[String], vars: &Var) -> Vec<String> {
    args.iter().map(|arg| substitute_str(arg, vars)).collect()
}

pub fn substitute_str(s: &str, vars: &Var) -> String {
    if !s.contains('$') {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    let mut chars = s.char_indices().peekable();
    while let Some((_, ch)) = chars.next() {
        if ch != '$' {
            out.push(ch);
            continue;
        }
        let start = match chars.peek() {
            Some(&(index, pk)) if is_ident_start(pk) => index,
            _ => {
                out.push('$');
                continue;
            }
        };
        let mut end = s.len();
        while let Some(&(index, pk)) = chars.peek() {
            if !is_ident_continue(pk) {
                end = index;
                break;
            }
            chars.next();
        }
        let name = &s[start..end];
        match vars.get(name) {
            Some(val) => out.push_str(&val.to_string()),
            None => {
                out.push('$');
                out.push_str(name);
            }
        }
    }
    out
}
