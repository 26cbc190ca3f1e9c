use crate::constants::limits::SUGGESTIONS_SHOWN;
use crate::errors::ToolError;
use crate::utils::suggest::suggest;

/// `Unknown tool: <name>` with did-you-mean suggestions drawn from `known`.
pub fn unknown_tool_error(tool: &str, known: &[String]) -> ToolError {
    let suggestions = suggest(tool, known, SUGGESTIONS_SHOWN);
    let hint = if suggestions.is_empty() {
        "Call tools/list to see available tools".to_string()
    } else {
        format!("Did you mean: {}", suggestions.join(", "))
    };
    ToolError::invalid_params(format!("Unknown tool: {}", tool))
        .with_hint(hint)
        .with_details(serde_json::json!({ "did_you_mean": suggestions }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_close_matches() {
        let known = vec!["start_service".to_string(), "stop_service".to_string()];
        let err = unknown_tool_error("start_servce", &known);
        assert_eq!(err.message, "Unknown tool: start_servce");
        assert!(err
            .hint
            .unwrap_or_default()
            .starts_with("Did you mean: start_service"));
    }

    #[test]
    fn falls_back_to_tools_list() {
        let err = unknown_tool_error("zzz", &["list_teams".to_string()]);
        assert_eq!(err.hint.as_deref(), Some("Call tools/list to see available tools"));
    }
}
