//! Variable substitution for command text.
//!
//! References take the form `$(NAME)` where `NAME` is one or more ASCII
//! letters or underscores. The scan is a single left-to-right pass:
//! substituted values are copied verbatim and never rescanned.

use crate::ast::Vars;

use super::IrGenError;

/// Returns whether `ch` may appear in a variable name.
///
/// # Examples
/// ```rust,ignore
/// assert!(is_variable_char('_'));
/// assert!(!is_variable_char('1'));
/// ```
fn is_variable_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Returns the name and total length of a `$(NAME)` reference at `pos`.
///
/// `chars[pos]` is expected to be `$`.
///
/// # Examples
/// ```rust,ignore
/// let chars: Vec<char> = "$(CC) -c".chars().collect();
/// assert_eq!(match_reference(&chars, 0), Some(("CC".into(), 5)));
/// ```
fn match_reference(chars: &[char], pos: usize) -> Option<(String, usize)> {
    if chars.get(pos + 1) != Some(&'(') {
        return None;
    }
    let name: String = chars
        .iter()
        .skip(pos + 2)
        .take_while(|ch| is_variable_char(**ch))
        .collect();
    if name.is_empty() || chars.get(pos + 2 + name.len()) != Some(&')') {
        return None;
    }
    let skip = name.len() + 3;
    Some((name, skip))
}

/// Replace every `$(NAME)` reference in `command` with its value in `vars`.
///
/// A `$` that does not start a well-formed reference is copied unchanged.
///
/// # Errors
///
/// Returns [`IrGenError::UndefinedVariable`] for the first reference whose
/// name is missing from `vars`; no partially substituted text is returned.
///
/// # Examples
/// ```rust
/// use makep::ast::Vars;
/// use makep::ir::substitute;
///
/// let mut vars = Vars::new();
/// vars.insert("FLAGS".into(), "-O2".into());
/// assert_eq!(substitute("gcc $(FLAGS) -c", &vars).expect("defined"), "gcc -O2 -c");
/// assert_eq!(substitute("echo $HOME $$", &vars).expect("literal"), "echo $HOME $$");
/// assert!(substitute("$(MISSING)", &vars).is_err());
/// ```
pub fn substitute(command: &str, vars: &Vars) -> Result<String, IrGenError> {
    let chars: Vec<char> = command.chars().collect();
    let mut out = String::with_capacity(command.len());
    let mut i = 0;
    while let Some(&ch) = chars.get(i) {
        if ch == '$'
            && let Some((name, skip)) = match_reference(&chars, i)
        {
            let value = vars
                .get(&name)
                .ok_or_else(|| IrGenError::UndefinedVariable {
                    name,
                    command: command.to_owned(),
                })?;
            out.push_str(value);
            i += skip;
        } else {
            out.push(ch);
            i += 1;
        }
    }
    Ok(out)
}
