//! Simulated language-model integration.
//!
//! Nothing here talks to a model. [`build_prompt`] assembles the text that
//! would be sent and [`send_to_llm`] logs it and answers with a fixed reply.

/// System preamble used when configuration does not override it.
pub const DEFAULT_SYSTEM_PROMPT: &str = "System: You are an assistant.";

/// Reply returned by the simulated model.
pub const SIMULATED_RESPONSE: &str = "SIMULATED_LLM_RESPONSE";

// Escaped `\n` sequences, not line breaks: the prompt stays on one line.
const TEMPLATE_START: &str = "\\n\\nTEMPLATE_START\\n";
const TEMPLATE_END: &str = "\\nTEMPLATE_END\\nUSER:";

/// Concatenate the system preamble, the template block and the user input.
pub fn build_prompt(system: &str, template: &str, user_input: &str) -> String {
    format!("{system}{TEMPLATE_START}{template}{TEMPLATE_END}{user_input}")
}

/// Pretend to send a prompt to a model.
///
/// The prompt is logged verbatim, which would leak user input in a real
/// deployment. Always returns [`SIMULATED_RESPONSE`].
pub fn send_to_llm(prompt: &str) -> String {
    tracing::info!("=== RAW PROMPT SENT TO LLM (INSECURE) ===");
    tracing::info!("{prompt}");
    tracing::info!("=== END PROMPT ===");
    SIMULATED_RESPONSE.to_string()
}
