use regex::Captures;

use crate::compile::CompiledRule;

/// Apply the first matching rule to the input.
///
/// Rules are tried in precedence order; the first one whose pattern
/// matches anywhere wins and is substituted at **every** match site
/// (first-match-wins at the rule level, global substitution within the
/// winning rule). When nothing matches the input comes back unchanged;
/// empty input gives empty output.
pub fn transform(rules: &[CompiledRule], input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    for rule in rules {
        if rule.pattern.is_match(input) {
            return rule
                .pattern
                .replace_all(input, |caps: &Captures| expand(&rule.template, caps))
                .into_owned();
        }
    }
    input.to_string()
}

/// Expand a replacement template against one match.
///
/// `$&` and `$0` are the whole match, `$1`..`$99` the captured groups
/// (empty when the group did not participate), `$$` a literal dollar.
/// Any other `$` sequence is literal text. A two-digit reference falls
/// back to its one-digit prefix when the pattern has no such group.
fn expand(template: &str, caps: &Captures) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        match after.chars().next() {
            Some('$') => {
                out.push('$');
                rest = &after[1..];
            }
            Some('&') => {
                out.push_str(caps.get(0).map_or("", |m| m.as_str()));
                rest = &after[1..];
            }
            Some(c) if c.is_ascii_digit() => {
                let digit_len = after
                    .bytes()
                    .take_while(|b| b.is_ascii_digit())
                    .count()
                    .min(2);
                let full: usize = after[..digit_len].parse().unwrap_or(0);
                let (group, used) = if digit_len == 2 && full >= caps.len() {
                    (after[..1].parse().unwrap_or(0), 1)
                } else {
                    (full, digit_len)
                };
                out.push_str(caps.get(group).map_or("", |m| m.as_str()));
                rest = &after[used..];
            }
            _ => {
                out.push('$');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
