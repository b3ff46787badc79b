//! Self-assessment questionnaires. Everything here is local and synchronous.

use dear_shared::questionnaire::{
    AnswerOption, DassQuestion, DassScore, MbtiQuestion, MbtiResult, DASS_OPTIONS,
    DASS_QUESTIONS, MBTI_OPTIONS, MBTI_QUESTIONS,
};

use crate::error::{Result, ValidationError};

#[derive(Debug, Default, Clone, Copy)]
pub struct GetDassTest;

impl GetDassTest {
    pub fn questions(&self) -> &'static [DassQuestion] {
        DASS_QUESTIONS
    }

    pub fn options(&self) -> &'static [AnswerOption] {
        DASS_OPTIONS
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct GetMbtiTest;

impl GetMbtiTest {
    pub fn questions(&self) -> &'static [MbtiQuestion] {
        MBTI_QUESTIONS
    }

    pub fn options(&self) -> &'static [AnswerOption] {
        MBTI_OPTIONS
    }
}

/// Score one answer per DASS question, in question order.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScoreDass;

impl ScoreDass {
    pub fn execute(&self, answers: &[i32]) -> Result<DassScore> {
        DassScore::score(DASS_QUESTIONS, answers)
            .map_err(|e| ValidationError::from(e).into())
    }
}

/// Score one answer per MBTI question, in question order.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScoreMbti;

impl ScoreMbti {
    pub fn execute(&self, answers: &[i32]) -> Result<MbtiResult> {
        MbtiResult::score(MBTI_QUESTIONS, answers)
            .map_err(|e| ValidationError::from(e).into())
    }
}
