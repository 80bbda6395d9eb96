// Roster extraction LLM prompt templates.
// All prompts for the roster module are defined here.

pub const ROSTER_PARSE_SYSTEM: &str = "\
You are a highly precise data structuring engine. \
You convert free-form student roster text into a single, clean JSON array. \
You follow the rules in the task without exception and respond with the JSON \
array only — no markdown fences, no explanations.";

pub const ROSTER_PARSE_PROMPT: &str = r#"Convert the provided text into a single, clean JSON array of student objects.

CRITICAL RULES:
1. Mandatory fields: every student object MUST contain these four keys:
   `full_name`, `registration_number`, `department`, and `year`. No exceptions.
2. Handling missing information: if the information for any of the four
   mandatory keys cannot be found or inferred from the text, you MUST include
   the key with an empty string "" as its value. Do not omit the key.
3. Department inference (mandatory):
   - First, try to extract the department from the text (e.g., "ECE", "CSE").
   - If it is not in the text, you MUST infer it from the two-letter code in
     the `registration_number`.
   - Department code mapping:
     CS -> CSE, IT -> IT, EC -> ECE, EE -> EEE, CE -> CIVIL, ME -> MECH,
     AD -> AI&DS, AM -> AIML, EI -> EIE, CB -> CSBS, CJ -> M.Tech CSE,
     MU -> Mechanical and Automation, IC -> ICE.
   - If the department cannot be found or inferred, set its value to an empty
     string: "department": "".
4. Year inference (mandatory):
   - You MUST infer the `year` from the `registration_number`.
   - Reference the current academic year: 2025-2026.
   - Inference logic:
     SEC22... -> "year": "Fourth"
     SEC23... -> "year": "Third"
     SEC24... -> "year": "Second"
     SEC25... -> "year": "First"
   - If the `registration_number` is missing, set the year's value to an empty
     string: "year": "".
5. Category key (conditional):
   - The `category` key is the ONLY key you may omit.
   - Only include `category: "Hostel"` if the student is explicitly listed
     under a "(Hostellers Only)" section.
   - Otherwise, the `category` key MUST NOT be present in the object.
6. Final output format: your entire response MUST be only the JSON array
   `[...]`. Do not include any text or markdown before or after it.

Now, process the following input data according to these exact rules:

{raw_text}"#;
