use super::diagnostics::ParseFailure;

/// Hints keyed on the leading characters of a rejected line.
pub(crate) const LINE_HINTS: [(&str, &str); 2] = [
    (
        " ",
        "Command lines must start with a single tab character, not spaces.",
    ),
    (
        "#",
        "Comments are not supported; remove the line or turn it into a blank line.",
    ),
];

const COMMAND_HINT: &str =
    "Command lines must directly follow a `target: deps` line or another command line.";

pub(crate) fn hint_for(raw: &str, failure: ParseFailure) -> Option<&'static str> {
    match failure {
        ParseFailure::CommandOutsideTarget => Some(COMMAND_HINT),
        ParseFailure::UnrecognizedLine => LINE_HINTS
            .iter()
            .find(|(prefix, _)| raw.starts_with(prefix))
            .map(|(_, hint)| *hint),
    }
}
