use quizgen_domain::{QuizRequest, OPTIONS_PER_QUESTION};

/// Natural-language instruction sent to the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizPrompt {
    pub text: String,
    pub question_count: u32,
}

impl QuizPrompt {
    pub fn for_request(request: &QuizRequest) -> Self {
        let text = format!(
            "Generate exactly {count} multiple-choice questions about \"{topic}\".\n\
             Return the result as a JSON array. Each element must be an object with these fields:\n\
             - \"questionText\": the question, as a string\n\
             - \"options\": an array of exactly {options} distinct answer strings\n\
             - \"correctAnswer\": a string that exactly matches one of the options\n\
             - \"explanation\": a short explanation of why the correct answer is right\n\
             Return only the JSON array. Do not wrap it in markdown and do not add any other text.",
            count = request.question_count,
            topic = request.topic,
            options = OPTIONS_PER_QUESTION,
        );

        Self {
            text,
            question_count: request.question_count,
        }
    }
}
