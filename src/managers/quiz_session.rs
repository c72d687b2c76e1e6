use crate::types::errors::QuizError;
use crate::types::quiz::QuizQuestion;

/// Trait defining the quiz attempt interface.
pub trait QuizSessionTrait {
    fn select_answer(&mut self, question: usize, option: usize) -> Result<(), QuizError>;
    fn answer(&self, question: usize) -> Option<usize>;
    fn submit(&mut self);
    fn is_submitted(&self) -> bool;
    fn score(&self) -> usize;
    fn toggle_reveal(&mut self, question: usize) -> Result<bool, QuizError>;
    fn is_revealed(&self, question: usize) -> bool;
    fn reset(&mut self);
    fn question_count(&self) -> usize;
    fn questions(&self) -> &[QuizQuestion];
}

/// In-memory state of one quiz attempt.
///
/// Created fresh per article view and discarded on navigation; nothing
/// here is persisted. `revealed` backs the per-question "show answer"
/// toggle, which is independent of the submit/score flow.
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    answers: Vec<Option<usize>>,
    revealed: Vec<bool>,
    submitted: bool,
}

impl QuizSession {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        let count = questions.len();
        Self {
            questions,
            answers: vec![None; count],
            revealed: vec![false; count],
            submitted: false,
        }
    }

    /// Whether the selected answer for a question matches its correct
    /// option. Unanswered questions are never correct.
    fn is_correct(&self, question: usize) -> bool {
        match (self.questions.get(question), self.answers.get(question)) {
            (Some(q), Some(Some(selected))) => *selected == q.correct,
            _ => false,
        }
    }
}

impl QuizSessionTrait for QuizSession {
    /// Record the chosen option for a question, overwriting any prior
    /// selection. Out-of-range indices are rejected without touching any
    /// other question's state.
    fn select_answer(&mut self, question: usize, option: usize) -> Result<(), QuizError> {
        let q = self
            .questions
            .get(question)
            .ok_or(QuizError::QuestionOutOfRange(question))?;
        if option >= q.options.len() {
            return Err(QuizError::OptionOutOfRange(option));
        }
        self.answers[question] = Some(option);
        Ok(())
    }

    fn answer(&self, question: usize) -> Option<usize> {
        self.answers.get(question).copied().flatten()
    }

    /// Unlock score display. Idempotent — answers are untouched.
    fn submit(&mut self) {
        self.submitted = true;
    }

    fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Number of correctly answered questions, always within
    /// `0..=question_count`. Unanswered slots count as wrong.
    fn score(&self) -> usize {
        (0..self.questions.len())
            .filter(|&i| self.is_correct(i))
            .count()
    }

    /// Flip the per-question "show correct answer" toggle. Returns the new
    /// state. Orthogonal to `submit`/`score`.
    fn toggle_reveal(&mut self, question: usize) -> Result<bool, QuizError> {
        let flag = self
            .revealed
            .get_mut(question)
            .ok_or(QuizError::QuestionOutOfRange(question))?;
        *flag = !*flag;
        Ok(*flag)
    }

    fn is_revealed(&self, question: usize) -> bool {
        self.revealed.get(question).copied().unwrap_or(false)
    }

    /// Return the attempt to its fresh state, as on a new page view.
    fn reset(&mut self) {
        self.answers = vec![None; self.questions.len()];
        self.revealed = vec![false; self.questions.len()];
        self.submitted = false;
    }

    fn question_count(&self) -> usize {
        self.questions.len()
    }

    fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }
}
