// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Appended to every system prompt. The response schema is enforced by the
/// provider, this keeps the model from padding string fields with prose.
pub const JSON_ONLY_INSTRUCTION: &str = "You MUST respond with a single JSON object that matches the \
    supplied response schema. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Joins a role description with the JSON-only instruction.
pub fn system_prompt(role: &str) -> String {
    format!("{} {}", role.trim_end(), JSON_ONLY_INSTRUCTION)
}
