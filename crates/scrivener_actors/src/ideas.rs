//! Pulling idea lists out of model responses.

use serde_json::Value;
use tracing::warn;

/// Appended to ideation prompts so the model answers with a JSON list.
pub const IDEA_LIST_FORMAT_INSTRUCTIONS: &str = r#"Your response should be a JSON list of strings. For example:

["item 1", "item 2", "item 3"]

Wrap each idea in double quotes. Separate each idea with a comma.
Put a single open square bracket at the start and a single close square bracket at the end.
Respond only with valid JSON and no extra characters."#;

/// Extract the list of ideas from an ideation response.
///
/// Looks inside a fenced code block first, then at each bracketed span in
/// the text. Non-string items are kept in their JSON form and blank items
/// are dropped. When no list can be found the trimmed response is the only
/// idea.
///
/// # Examples
///
/// ```
/// use scrivener_actors::parse_idea_list;
///
/// let response = "Sure! Here you go:\n```json\n[\"A cursed lighthouse\", \"A heist on Mars\"]\n```";
/// assert_eq!(parse_idea_list(response), vec!["A cursed lighthouse", "A heist on Mars"]);
///
/// assert_eq!(parse_idea_list("  A single idea  "), vec!["A single idea"]);
/// ```
pub fn parse_idea_list(response: &str) -> Vec<String> {
    let fenced = extract_from_code_block(response);
    let candidates = fenced
        .iter()
        .map(String::as_str)
        .chain(bracketed_spans(response));

    for candidate in candidates {
        if let Some(ideas) = parse_list(candidate) {
            return ideas;
        }
    }

    let trimmed = response.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    warn!(
        response_length = response.len(),
        "No JSON list in ideation response, using it as a single idea"
    );
    vec![trimmed.to_string()]
}

fn parse_list(candidate: &str) -> Option<Vec<String>> {
    match serde_json::from_str::<Value>(candidate).ok()? {
        // A bracketed number such as "[2]" in prose is not an idea list
        Value::Array(items) if !items.is_empty() && !items.iter().any(Value::is_string) => None,
        Value::Array(items) => Some(
            items
                .into_iter()
                .map(|item| match item {
                    Value::String(text) => text.trim().to_string(),
                    other => other.to_string(),
                })
                .filter(|idea| !idea.is_empty())
                .collect(),
        ),
        _ => None,
    }
}

/// Content of the first fenced code block, with any language tag removed.
fn extract_from_code_block(response: &str) -> Option<String> {
    let start = response.find("```")? + 3;
    let body_start = response[start..]
        .find('\n')
        .map(|n| start + n + 1)
        .unwrap_or(start);
    let body = match response[body_start..].find("```") {
        Some(end) => &response[body_start..body_start + end],
        // Unterminated fence, likely a truncated response
        None => &response[body_start..],
    };
    Some(body.trim().to_string())
}

/// Every balanced `[...]` span, in order of its opening bracket.
fn bracketed_spans(response: &str) -> impl Iterator<Item = &str> {
    response
        .match_indices('[')
        .filter_map(move |(start, _)| balanced_from(response, start))
}

fn balanced_from(response: &str, start: usize) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            '[' if !in_string => depth += 1,
            ']' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&response[start..start + i + 1]);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_json_list() {
        assert_eq!(
            parse_idea_list(r#"["idea1", "idea2", "idea3"]"#),
            vec!["idea1", "idea2", "idea3"]
        );
    }

    #[test]
    fn test_list_wrapped_in_prose() {
        let response = r#"Here are [2] ideas you might like: ["A [redacted] diary", "Moon \"bakers\""] Enjoy!"#;
        assert_eq!(
            parse_idea_list(response),
            vec!["A [redacted] diary", r#"Moon "bakers""#]
        );
    }

    #[test]
    fn test_unlabeled_code_fence() {
        let response = "```\n[\"one\", \"two\"]\n```";
        assert_eq!(parse_idea_list(response), vec!["one", "two"]);
    }

    #[test]
    fn test_blank_and_non_string_items() {
        assert_eq!(parse_idea_list(r#"["a", "  ", 3]"#), vec!["a", "3"]);
    }

    #[test]
    fn test_no_list_falls_back_to_text() {
        assert_eq!(parse_idea_list("\nJust one idea.\n"), vec!["Just one idea."]);
        assert!(parse_idea_list("   ").is_empty());
    }

    #[test]
    fn test_object_is_not_a_list() {
        assert_eq!(parse_idea_list(r#"{"idea": "x"}"#), vec![r#"{"idea": "x"}"#]);
    }
}
