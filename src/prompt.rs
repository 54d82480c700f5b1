//! Prompt text sent to the model on each session path.

/// System turn seeding every normal-mode conversation.
pub const SYSTEM_PROMPT: &str = "Your goal is to collaborate with the user to generate a bash command. \
Only respond with one bash command per reply";

/// First user turn wrapping the natural-language request.
pub fn generate_request(prompt: &str) -> String {
    format!(
        "given the following prompt, generate a bash command. do not use any formatting. \
Do not provide any commentary: {prompt}"
    )
}

/// User turn asking for an explanation of `command`.
pub fn explain_request(command: &str) -> String {
    format!("give a concise explanation of the following bash command: {command}")
}

/// User turn asking the model to confirm or repair a hand-edited command.
pub fn verify_request(command: &str) -> String {
    format!("echo the command if correct, or revise if there are errors: {command}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_embed_the_text_verbatim() {
        assert!(generate_request("list files").ends_with(": list files"));
        assert!(explain_request("ls -la").ends_with("bash command: ls -la"));
        assert!(verify_request("ls -l a").ends_with("errors: ls -l a"));
    }

    #[test]
    fn system_prompt_asks_for_a_single_command() {
        assert!(SYSTEM_PROMPT.contains("one bash command per reply"));
    }
}
