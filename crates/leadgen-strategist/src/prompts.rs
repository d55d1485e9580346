//! Prompts for the summarizer and ICP generator.

pub const SUMMARY_SYSTEM_PROMPT: &str = "You are a helpful business analysis assistant.";

pub const ICP_SYSTEM_PROMPT: &str =
    "You are a helpful business strategy assistant that outputs only valid JSON.";

/// Build the stage 1 prompt around the raw context document.
#[must_use]
pub fn summary_prompt(context: &str) -> String {
    format!(
        r"You are a world-class business strategist. Your task is to analyze the provided context document about a consulting company.

Read the following document carefully:
---
{context}
---

Based ONLY on the information in this document, provide a concise summary that answers these three questions:
1. What is the company's core business and value proposition?
2. Who are their typical customers (industries, company type)?
3. What specific business problems do they solve for these customers?

Present the summary in a clear, easy-to-read format."
    )
}

/// Build the stage 2 prompt. The India and AI constraints are part of the
/// instruction text, not enforced on the output.
#[must_use]
pub fn icp_prompt(summary: &str) -> String {
    format!(
        r#"You are a Chief Strategy Officer for a B2B digital transformation consultancy specializing in AI solutions. Your task is to define FIVE distinct and high-potential Ideal Customer Profiles (ICPs) based on the company summary provided below.

**CRITICAL INSTRUCTIONS:**
1. All companies MUST be located in **India**.
2. All "buying_signals" MUST be specifically related to **Artificial Intelligence (AI)**.

**Company Summary:**
---
{summary}
---

Your final output MUST be a single, valid JSON object. The top-level key must be "ideal_customer_profiles", which contains an array of the five ICPs.

**JSON Schema for each ICP:**
- `icp_name`: A descriptive name for this profile (e.g., "AI-Powered FinTech Innovator").
- `industry_vertical`: A list of the specific industries to target (e.g., ["Financial Services", "Insurance"]).
- `location_cities`: A list of 2-3 key cities in India for this ICP (e.g., ["Bengaluru", "Mumbai", "Pune"]).
- `key_challenges`: A list of 2-3 specific business or technology problems this company is likely facing related to AI adoption.
- `buying_signals`: A list of 3-4 short, 2-4 word keywords that are publicly discoverable events or "signals" specifically related to AI (e.g., "launching a new AI product", "hiring AI engineers", "acquiring an AI startup")."#
    )
}
