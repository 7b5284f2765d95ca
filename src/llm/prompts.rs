use crate::models::Statistics;

/// System instruction for the summarization call
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Build the user message embedding the statistics in human-readable form
pub fn build_summary_prompt(stats: &Statistics) -> String {
    let mut prompt = String::new();

    prompt.push_str("Summarize the following data insights:\n\n");
    prompt.push_str(&format!("Average Salary: {:.2}\n", stats.average_salary));
    prompt.push_str("Department Distribution:\n");

    for (department, count) in &stats.department_distribution {
        prompt.push_str(&format!("- {}: {}\n", department, count));
    }

    prompt
}
