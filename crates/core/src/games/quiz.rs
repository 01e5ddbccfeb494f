use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("a quiz needs at least one question")]
    NoQuestions,

    #[error("a question needs at least two options, got {0}")]
    TooFewOptions(usize),

    #[error("answer index {answer} is out of range for {options} options")]
    AnswerOutOfRange { answer: usize, options: usize },
}

/// One multiple-choice question with a single correct option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    answer: usize,
}

impl Question {
    /// # Errors
    ///
    /// Returns `QuizError::TooFewOptions` or `QuizError::AnswerOutOfRange`
    /// when the option list and answer index do not line up.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        answer: usize,
    ) -> Result<Self, QuizError> {
        if options.len() < 2 {
            return Err(QuizError::TooFewOptions(options.len()));
        }
        if answer >= options.len() {
            return Err(QuizError::AnswerOutOfRange {
                answer,
                options: options.len(),
            });
        }

        Ok(Self {
            prompt: prompt.into(),
            options,
            answer,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn answer(&self) -> usize {
        self.answer
    }
}

/// Sequential multiple-choice quiz.
///
/// Per question: unanswered → answered (first selection is binding) →
/// advanced. After the last question the game is terminal until
/// `reset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizGame {
    questions: Vec<Question>,
    index: usize,
    selected: Option<usize>,
    tally: Vec<bool>,
    finished: bool,
}

impl QuizGame {
    /// # Errors
    ///
    /// Returns `QuizError::NoQuestions` for an empty question list.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }

        Ok(Self {
            questions,
            index: 0,
            selected: None,
            tally: Vec::new(),
            finished: false,
        })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The question currently awaiting an answer, `None` once terminal.
    #[must_use]
    pub fn current(&self) -> Option<&Question> {
        if self.finished {
            return None;
        }
        self.questions.get(self.index)
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Correctness of every committed answer, in question order.
    #[must_use]
    pub fn tally(&self) -> &[bool] {
        &self.tally
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.tally.iter().filter(|correct| **correct).count() as u32
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.questions.len() as u32
    }

    /// Records the answer for the current question. The first selection
    /// is binding: selecting again, selecting out of range, or selecting
    /// after the game finished is a no-op.
    pub fn select(&mut self, option: usize) {
        if self.finished || self.selected.is_some() {
            return;
        }
        let Some(question) = self.questions.get(self.index) else {
            return;
        };
        if option >= question.options.len() {
            return;
        }
        self.selected = Some(option);
    }

    /// Commits the recorded answer and moves to the next question.
    ///
    /// Does nothing while the current question is unanswered. Returns
    /// the final `(score, total)` pair on the call that reaches the
    /// terminal state, and `None` otherwise.
    pub fn advance(&mut self) -> Option<(u32, u32)> {
        if self.finished {
            return None;
        }
        let selected = self.selected.take()?;
        let correct = self
            .questions
            .get(self.index)
            .is_some_and(|q| q.answer == selected);
        self.tally.push(correct);
        self.index += 1;

        if self.index >= self.questions.len() {
            self.finished = true;
            return Some((self.score(), self.total()));
        }
        None
    }

    /// Clears all play state for a fresh play-through.
    pub fn reset(&mut self) {
        self.index = 0;
        self.selected = None;
        self.tally.clear();
        self.finished = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz(answers: &[usize]) -> QuizGame {
        let questions = answers
            .iter()
            .enumerate()
            .map(|(i, &answer)| {
                Question::new(
                    format!("q{i}"),
                    vec!["a".into(), "b".into(), "c".into(), "d".into()],
                    answer,
                )
                .unwrap()
            })
            .collect();
        QuizGame::new(questions).unwrap()
    }

    #[test]
    fn rejects_empty_question_list() {
        assert_eq!(QuizGame::new(Vec::new()).unwrap_err(), QuizError::NoQuestions);
    }

    #[test]
    fn question_validates_answer_index() {
        let err = Question::new("q", vec!["a".into(), "b".into()], 2).unwrap_err();
        assert!(matches!(err, QuizError::AnswerOutOfRange { .. }));
    }

    #[test]
    fn first_selection_is_binding() {
        let mut game = quiz(&[1, 0]);
        game.select(1);
        game.select(3);
        assert_eq!(game.selected(), Some(1));
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut game = quiz(&[1]);
        game.select(9);
        assert_eq!(game.selected(), None);
    }

    #[test]
    fn advance_without_answer_does_nothing() {
        let mut game = quiz(&[1, 0]);
        assert_eq!(game.advance(), None);
        assert_eq!(game.index(), 0);
        assert!(game.tally().is_empty());
    }

    #[test]
    fn perfect_run_scores_full() {
        let mut game = quiz(&[1, 0, 2]);
        let mut finished = None;
        for pick in [1, 0, 2] {
            game.select(pick);
            finished = game.advance();
        }
        assert_eq!(finished, Some((3, 3)));
        assert!(game.is_finished());
        assert_eq!(game.tally(), &[true, true, true]);
    }

    #[test]
    fn mixed_run_counts_only_correct_answers() {
        let mut game = quiz(&[1, 0, 2]);
        for pick in [0, 0, 0] {
            game.select(pick);
            game.advance();
        }
        assert_eq!(game.score(), 1);
        assert_eq!(game.tally(), &[false, true, false]);
    }

    #[test]
    fn terminal_state_ignores_further_input() {
        let mut game = quiz(&[0]);
        game.select(0);
        assert_eq!(game.advance(), Some((1, 1)));
        game.select(0);
        assert_eq!(game.advance(), None);
        assert_eq!(game.score(), 1);
        assert!(game.current().is_none());
    }

    #[test]
    fn reset_allows_replay() {
        let mut game = quiz(&[0, 1]);
        for pick in [0, 1] {
            game.select(pick);
            game.advance();
        }
        assert!(game.is_finished());

        game.reset();
        assert!(!game.is_finished());
        assert_eq!(game.index(), 0);
        assert!(game.tally().is_empty());
        assert_eq!(game.selected(), None);
    }
}
