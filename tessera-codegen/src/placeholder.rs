//! Literal placeholder substitution.
//!
//! Templates contain at most three tokens: `{Name}`, `{Type}` and
//! `{Children}`. They are matched literally, and every occurrence of an active
//! token is replaced. Substitution is a single left-to-right scan, so text
//! inserted for one token is never scanned for further tokens.

/// Placeholder replaced with the node's name.
pub const NAME: &str = "{Name}";
/// Placeholder replaced with the node's declared type.
pub const TYPE: &str = "{Type}";
/// Placeholder replaced with the concatenated rendering of the children.
pub const CHILDREN: &str = "{Children}";

/// Values for one substitution. A `None` value leaves its token untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Substitutions<'a> {
    pub name: Option<&'a str>,
    pub type_ref: Option<&'a str>,
    pub children: Option<&'a str>,
}

impl<'a> Substitutions<'a> {
    fn active(&self) -> [(&'static str, Option<&'a str>); 3] {
        [
            (NAME, self.name),
            (TYPE, self.type_ref),
            (CHILDREN, self.children),
        ]
    }
}

/// Replace every active token in `template` in one pass.
pub fn substitute(template: &str, values: &Substitutions<'_>) -> String {
    let tokens = values.active();
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        rest = &rest[open..];

        let matched = tokens.iter().find_map(|(token, value)| {
            value
                .filter(|_| rest.starts_with(token))
                .map(|value| (token.len(), value))
        });

        match matched {
            Some((len, value)) => {
                out.push_str(value);
                rest = &rest[len..];
            }
            None => {
                out.push('{');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
