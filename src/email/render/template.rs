//! Literal placeholder substitution for the email template.

/// Template shipped with the crate.
pub const DEFAULT_TEMPLATE: &str = include_str!("../../../resources/email_template.html");

/// Replaces `{{name}}` tokens with the matching value in one pass.
///
/// Inserted values are never rescanned, so a task title containing a
/// placeholder token is emitted as-is. Unknown tokens are left untouched.
#[must_use]
pub(crate) fn substitute(template: &str, values: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some((before, after_open)) = rest.split_once("{{") {
        output.push_str(before);
        let Some((name, after_close)) = after_open
            .split_once("}}")
            .filter(|(candidate, _)| !candidate.contains("{{"))
        else {
            // Unclosed, or a later `{{` opens the real token: keep this one
            // as text and rescan from the next opening.
            output.push_str("{{");
            rest = after_open;
            continue;
        };

        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => output.push_str(value),
            None => {
                output.push_str("{{");
                output.push_str(name);
                output.push_str("}}");
            }
        }
        rest = after_close;
    }

    output.push_str(rest);
    output
}
