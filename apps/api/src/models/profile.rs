use serde::{Deserialize, Serialize};

/// The education / skills / interests triple a recommendation is built from.
///
/// Passed by value between the HTTP layer, the advisor and the history store.
/// Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub education: String,
    pub skills: String,
    pub interests: String,
}

impl Profile {
    pub fn new(
        education: impl Into<String>,
        skills: impl Into<String>,
        interests: impl Into<String>,
    ) -> Self {
        Self {
            education: education.into(),
            skills: skills.into(),
            interests: interests.into(),
        }
    }

    /// Names of the fields that are blank after trimming, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("education", &self.education),
            ("skills", &self.skills),
            ("interests", &self.interests),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Structured career guidance produced by one provider call for one `Profile`.
///
/// All four keys are required on the wire; list fields may be empty but never null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub career_paths: Vec<String>,
    pub internship_roles: Vec<String>,
    pub skills_to_learn: Vec<String>,
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_reports_blank_values() {
        let profile = Profile::new("B.Tech ECE", "   ", "");
        assert_eq!(profile.missing_fields(), vec!["skills", "interests"]);
        assert!(!profile.is_complete());
    }

    #[test]
    fn test_complete_profile_has_no_missing_fields() {
        let profile = Profile::new("B.Tech ECE", "Verilog", "VLSI");
        assert!(profile.missing_fields().is_empty());
        assert!(profile.is_complete());
    }

    #[test]
    fn test_recommendation_uses_camel_case_keys() {
        let json = r#"{
            "careerPaths": ["VLSI Design Engineer"],
            "internshipRoles": ["Embedded Intern"],
            "skillsToLearn": ["SystemVerilog"],
            "summary": "Hardware focus."
        }"#;
        let rec: Recommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.career_paths, vec!["VLSI Design Engineer"]);
        assert_eq!(rec.skills_to_learn, vec!["SystemVerilog"]);

        let back = serde_json::to_value(&rec).unwrap();
        assert!(back.get("internshipRoles").is_some());
        assert!(back.get("internship_roles").is_none());
    }

    #[test]
    fn test_recommendation_rejects_missing_key() {
        let json = r#"{
            "careerPaths": [],
            "internshipRoles": [],
            "summary": "no skills list"
        }"#;
        assert!(serde_json::from_str::<Recommendation>(json).is_err());
    }

    #[test]
    fn test_recommendation_rejects_null_list() {
        let json = r#"{
            "careerPaths": null,
            "internshipRoles": [],
            "skillsToLearn": [],
            "summary": "x"
        }"#;
        assert!(serde_json::from_str::<Recommendation>(json).is_err());
    }
}
