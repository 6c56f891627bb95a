use std::io::Write;
use crate::runner::Outcome;

pub fn render<W: Write>(outcome: &Outcome, out: &mut W) -> std::io::Result<()> {

    match outcome {
        Outcome::Answer { content, usage, .. } => {
            writeln!(out, "Assistant reply:")?;
            writeln!(out, "{}", content)?;
            writeln!(
                out,
                "\nTokens used: {} (prompt: {}, completion: {})",
                usage.total_tokens,
                usage.prompt_tokens,
                usage.completion_tokens
            )?;
        }
        Outcome::NoAnswer { raw_body } => {
            writeln!(out, "No response received from the API.")?;
            writeln!(out, "Response body: {}", raw_body)?;
        }
    }

    out.flush()

}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::models::Usage;

    fn render_to_string(outcome: &Outcome) -> String {

        let mut buf = Vec::new();
        render(outcome, &mut buf).expect("writing to a Vec cannot fail");
        String::from_utf8(buf).unwrap()

    }

    #[test]
    fn test_answer_prints_reply_and_usage() {

        let outcome = Outcome::Answer {
            model: "gpt-3.5-turbo".to_string(),
            content: "Once upon a time, a robot dreamed.".to_string(),
            usage: Usage { prompt_tokens: 27, completion_tokens: 150, total_tokens: 177 }
        };

        assert_eq!(
            render_to_string(&outcome),
            "Assistant reply:\nOnce upon a time, a robot dreamed.\n\nTokens used: 177 (prompt: 27, completion: 150)\n"
        );

    }

    #[test]
    fn test_no_answer_prints_raw_body() {

        let outcome = Outcome::NoAnswer { raw_body: r#"{"choices":[]}"#.to_string() };

        let rendered = render_to_string(&outcome);

        assert!(rendered.starts_with("No response received from the API.\n"));
        assert!(rendered.contains(r#"Response body: {"choices":[]}"#));

    }

}
