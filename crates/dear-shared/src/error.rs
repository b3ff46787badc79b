use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuestionnaireError {
    #[error("Expected {expected} answers, got {actual}")]
    AnswerCount { expected: usize, actual: usize },

    #[error("Answer {value} for question {index} is not one of the offered options")]
    InvalidAnswer { index: usize, value: i32 },
}
