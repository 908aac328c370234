// All LLM prompt constants and response schemas for the advisor module.
// Schemas use the Gemini OpenAPI subset (upper-case type names).

use serde_json::{json, Value};

/// Role description for recommendation calls. Combined with the JSON-only
/// fragment via `llm_client::prompts::system_prompt`.
pub const RECOMMEND_ROLE: &str = "You are an experienced career counselor for students and early-career \
    professionals. You give concrete, realistic guidance grounded in the profile you are given.";

/// Recommendation prompt template.
/// Replace: {education}, {skills}, {interests}
pub const RECOMMEND_PROMPT_TEMPLATE: &str = r#"Based on the following profile, suggest suitable career paths, internship roles to apply for, and skills the person should learn next. Finish with a short summary of the advice.

EDUCATION:
{education}

SKILLS:
{skills}

INTERESTS:
{interests}

Rules:
1. careerPaths: 3 to 5 specific job titles, most suitable first
2. internshipRoles: 3 to 5 internship positions a student with this profile could realistically land
3. skillsToLearn: 3 to 6 concrete skills, tools or technologies that close the gap to the suggested paths
4. summary: 2 to 4 sentences addressed directly to the person
5. Prefer paths that connect the stated interests with the existing skills"#;

/// Role description for resume scanning.
pub const SCAN_ROLE: &str = "You are a precise resume data extractor. You read the attached document \
    and summarise it into three short plain-text fields.";

pub const SCAN_PROMPT: &str = r#"Extract a profile from the attached resume or document.

Rules:
1. education: current or highest degree, year of study, institution and field, in one line
2. skills: comma-separated technical and professional skills that appear in the document
3. interests: comma-separated domains the person appears interested in, inferred from projects, coursework and stated objectives
4. Use an empty string for any field the document gives no evidence for
5. Do NOT invent facts that are not in the document"#;

/// Fills the recommendation template with the profile values.
pub fn render_recommend_prompt(education: &str, skills: &str, interests: &str) -> String {
    RECOMMEND_PROMPT_TEMPLATE
        .replace("{education}", education.trim())
        .replace("{skills}", skills.trim())
        .replace("{interests}", interests.trim())
}

fn string_list() -> Value {
    json!({ "type": "ARRAY", "items": { "type": "STRING" } })
}

/// Response schema for `Recommendation`. All four keys required.
pub fn recommendation_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "careerPaths": string_list(),
            "internshipRoles": string_list(),
            "skillsToLearn": string_list(),
            "summary": { "type": "STRING" }
        },
        "required": ["careerPaths", "internshipRoles", "skillsToLearn", "summary"],
        "propertyOrdering": ["careerPaths", "internshipRoles", "skillsToLearn", "summary"]
    })
}

/// Response schema for a scanned `Profile`. All three keys required.
pub fn profile_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "education": { "type": "STRING" },
            "skills": { "type": "STRING" },
            "interests": { "type": "STRING" }
        },
        "required": ["education", "skills", "interests"],
        "propertyOrdering": ["education", "skills", "interests"]
    })
}
