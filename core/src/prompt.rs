//! Prompt assets and payload assembly.
//!
//! The schema, query, explain plan and report template are compiled into the
//! binary from `core/assets/`. The template is reproduced byte-for-byte,
//! wording quirks included, since it is what the model is instructed with.

/// System-role message sent alongside every payload
pub const SYSTEM_PROMPT: &str = "You are a PostgreSQL query tuning expert.";

const SCHEMA_TEXT: &str = include_str!("../assets/schema.sql");
const QUERY_TEXT: &str = include_str!("../assets/query.sql");
const PLAN_TEXT: &str = include_str!("../assets/explain_plan.txt");
const REPORT_TEMPLATE: &str = include_str!("../assets/report_template.md");

/// The four text blocks a payload is assembled from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptInputs<'a> {
    pub schema: &'a str,
    pub query: &'a str,
    pub plan: &'a str,
    pub instructions: &'a str,
}

impl PromptInputs<'static> {
    /// Texts compiled into the binary
    pub fn bundled() -> Self {
        Self {
            schema: SCHEMA_TEXT,
            query: QUERY_TEXT,
            plan: PLAN_TEXT,
            instructions: REPORT_TEMPLATE,
        }
    }
}

/// Assemble the user-role payload.
///
/// Pure and deterministic: inputs are embedded verbatim, nothing is trimmed
/// or escaped.
pub fn build_request(inputs: &PromptInputs<'_>) -> String {
    format!(
        "\n\
         \n\
         You are a postgres performance expert. Here you will be analyzing a postgres comaptibale database Yugabyte.\n\
         \n\
         Please review and optimize the following PostgreSQL sql query based on the schema definition and explain plan.\n\
         \n\
         Here is the query: \n{query}\n\
         Here is the schema of the table: \n{schema}\n\
         Here is the explain plan for the query were are running:  \n{plan}\n\
         \n\
         \n\
         \n\
         {instructions}\n\
         \n\
         Output the example SQL from customer at the beginning of report\n",
        query = inputs.query,
        schema = inputs.schema,
        plan = inputs.plan,
        instructions = inputs.instructions,
    )
}
