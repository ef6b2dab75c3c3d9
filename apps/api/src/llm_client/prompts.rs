// Cross-cutting prompt fragments. Feature modules keep their own prompts.rs.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Appended to prompts whose answers quote money.
pub const RUPEE_INSTRUCTION: &str = "Quote all salaries in Indian Rupees (₹) \
    using Indian digit grouping, e.g. ₹12,00,000.";
