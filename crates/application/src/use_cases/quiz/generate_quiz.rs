use quizgen_domain::{DomainError, QuizRequest, QuizSet};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::ports::QuizGenerator;
use crate::services::{parse_quiz_set, QuizPrompt};

pub struct GenerateQuizUseCase {
    generator: Arc<dyn QuizGenerator>,
    max_questions: u32,
}

impl GenerateQuizUseCase {
    pub fn new(generator: Arc<dyn QuizGenerator>, max_questions: u32) -> Self {
        Self {
            generator,
            max_questions,
        }
    }

    /// Fails with `MissingApiKey` when the provider credential is absent.
    pub fn ensure_configured(&self) -> Result<(), DomainError> {
        if self.generator.is_configured() {
            Ok(())
        } else {
            error!("Generation API key is not configured");
            Err(DomainError::MissingApiKey)
        }
    }

    /// Runs one request → prompt → upstream → sanitize pass.
    ///
    /// Fields arrive loosely typed from the wire. The credential check runs
    /// first, then input validation, so neither failure costs an outbound
    /// call.
    #[instrument(skip(self), name = "generate_quiz")]
    pub async fn execute(
        &self,
        topic: Option<String>,
        question_count: Option<i64>,
    ) -> Result<QuizSet, DomainError> {
        self.ensure_configured()?;

        let request = QuizRequest::try_new(topic, question_count, self.max_questions)?;
        let prompt = QuizPrompt::for_request(&request);

        let text = match self.generator.generate(&prompt).await {
            Ok(Some(text)) if !text.trim().is_empty() => text,
            Ok(_) => {
                error!(topic = %request.topic, "Generator returned no text");
                return Err(DomainError::EmptyResponse);
            }
            Err(e) => {
                error!(error = %e, "Generation request failed");
                return Err(e);
            }
        };

        let mut quiz = parse_quiz_set(&text).map_err(|e| {
            error!(error = %e, response_len = text.len(), "Failed to parse generated quiz");
            e
        })?;

        let requested = request.question_count as usize;
        if quiz.len() > requested {
            warn!(
                requested,
                received = quiz.len(),
                "Generator returned extra questions, truncating"
            );
            quiz.truncate(requested);
        } else if quiz.len() < requested {
            warn!(
                requested,
                received = quiz.len(),
                "Generator returned fewer questions than requested"
            );
        }

        quiz.validate().map_err(|e| {
            error!(error = %e, "Generated quiz failed validation");
            e
        })?;

        info!(
            topic = %request.topic,
            questions = quiz.len(),
            "Quiz generated successfully"
        );

        Ok(quiz)
    }
}
