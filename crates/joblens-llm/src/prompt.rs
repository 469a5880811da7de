//! Extraction prompt for scanned job-posting PDFs

/// The instructions sent with every PDF.
///
/// The field names here are the canonical names the evaluation core
/// consolidates on; changing one side means changing the other.
const EXTRACTION_INSTRUCTIONS: &str = "\
This PDF contains details about job openings. Extract the following information in a \
structured JSON format. If the document lists multiple job openings, treat each one \
separately. Do NOT combine or mix information across different jobs. Display each job \
as a separate object in a list, in the order they appear in the PDF.

Do NOT separate job postings based on caste, category, or reservation type \
(e.g., SC/ST/OBC/EWS/UR). If a job includes reservation breakdowns, include those \
details under 'Reservation details' within the same job object.

For each job, extract:
- Company name
- Job title
- Number of openings (if mentioned)
- Reservation details (if applicable)
- Location
- Qualifications required
- Skills required
- Age limit (if mentioned)
- Salary or compensation details
- Application deadline
- Mode of application (online/offline, email, etc.)
- Contact details (if any)

If any section is missing, use \"not mentioned\".

Return only a clean JSON array of job objects. Each object must represent a single \
job posting. Do not include any additional explanation, summary, or text outside of \
the JSON output.";

/// The complete extraction prompt.
pub fn extraction_prompt() -> &'static str {
    EXTRACTION_INSTRUCTIONS
}
