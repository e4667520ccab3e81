// Prompt construction for the AI classifier

use crate::common::IssueCategory;
use crate::domains::ngos::{NgoRoster, SERVES_ENTIRE_REGION};

/// Build the single-message prompt sent to the language model.
pub fn build_prompt(
    roster: &NgoRoster,
    issue_text: &str,
    location: &str,
    pincode: Option<&str>,
) -> String {
    let ngo_list = roster.format_for_prompt();
    let categories = IssueCategory::listing();
    let pincode = pincode.unwrap_or("Not provided");

    format!(
        r#"You are an AI assistant for a civic issue routing system. Your task is to analyze civic issues and recommend the most suitable NGOs.

{ngo_list}
**Issue Details:**
- Description: {issue_text}
- Location: {location}
- Pincode: {pincode}

**Your Task:**
1. Classify the issue into ONE category ({categories})
2. Assign a severity level: Low, Medium, High, or Critical
3. Provide an impact score from 0.0 to 10.0 (where 10.0 is most severe)
4. Select the TOP 3 most relevant NGOs from the list above ONLY by their exact names
5. Provide clear reasoning for your recommendations

**CRITICAL RULES:**
- You MUST select NGOs ONLY from the provided list above
- Return EXACTLY 3 NGO names (no more, no less)
- Use the EXACT names as listed (do not modify)
- Consider both the issue category and the NGO's operating area
- Prioritize NGOs that operate in "{region}" or the specific area mentioned

**Response Format:**
Return your response as a valid JSON object with this exact structure:
{{
    "category": "category name",
    "severity": "Low/Medium/High/Critical",
    "impact_score": numeric value between 0.0 and 10.0,
    "suggested_ngos": ["NGO Name 1", "NGO Name 2", "NGO Name 3"],
    "reasoning": "explanation of your analysis and recommendations"
}}

Return ONLY the JSON object, no additional text before or after.
"#,
        region = SERVES_ENTIRE_REGION,
    )
}
