//! Psychological self-assessment questionnaires.
//!
//! The question banks are fixed data shipped with the app. Scoring is
//! deliberately simple: DASS answers are summed per scale, MBTI answers are
//! tallied per pole and the stronger pole of each axis wins.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::QuestionnaireError;

// ---------------------------------------------------------------------------
// Shared
// ---------------------------------------------------------------------------

/// One selectable answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub text: &'static str,
    pub value: i32,
}

const fn option(text: &'static str, value: i32) -> AnswerOption {
    AnswerOption { text, value }
}

fn check_answers(
    options: &[AnswerOption],
    expected: usize,
    answers: &[i32],
) -> Result<(), QuestionnaireError> {
    if answers.len() != expected {
        return Err(QuestionnaireError::AnswerCount {
            expected,
            actual: answers.len(),
        });
    }
    for (index, value) in answers.iter().enumerate() {
        if !options.iter().any(|o| o.value == *value) {
            return Err(QuestionnaireError::InvalidAnswer {
                index,
                value: *value,
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// DASS
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DassScale {
    Depression,
    Anxiety,
    Stress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DassQuestion {
    pub text: &'static str,
    pub scale: DassScale,
}

const fn dass(text: &'static str, scale: DassScale) -> DassQuestion {
    DassQuestion { text, scale }
}

pub const DASS_QUESTIONS: &[DassQuestion] = &[
    dass("Saya merasa kesal bahkan karena hal kecil", DassScale::Stress),
    dass("Saya merasa mulut saya kering", DassScale::Anxiety),
    dass("Saya tidak dapat merasakan perasaan positif sama sekali", DassScale::Depression),
    dass("Saya mengalami kesulitan bernapas", DassScale::Anxiety),
    dass("Saya merasa sulit memulai melakukan sesuatu", DassScale::Depression),
    dass("Saya cenderung bereaksi berlebihan terhadap situasi", DassScale::Stress),
    dass("Saya mengalami gemetar (misalnya di tangan)", DassScale::Anxiety),
    dass("Saya sulit untuk rileks", DassScale::Stress),
    dass("Saya merasa sedih dan murung", DassScale::Depression),
    dass("Saya tidak memiliki harapan untuk masa depan", DassScale::Depression),
    dass("Saya merasa panik tanpa alasan yang jelas", DassScale::Anxiety),
    dass("Saya merasa saya menggunakan banyak energi saraf", DassScale::Stress),
    dass("Saya khawatir akan situasi yang dapat membuat saya panik dan mempermalukan diri", DassScale::Anxiety),
    dass("Saya merasa hidup tidak berarti", DassScale::Depression),
    dass("Saya merasa mudah tersinggung", DassScale::Stress),
    dass("Saya merasa tidak berharga sebagai pribadi", DassScale::Depression),
    dass("Saya sadar detak jantung saya meningkat tanpa sebab", DassScale::Anxiety),
    dass("Saya sulit untuk menenangkan diri", DassScale::Stress),
    dass("Saya merasa takut tanpa alasan yang jelas", DassScale::Anxiety),
    dass("Saya merasa tidak punya apa-apa yang membuat saya menantikan masa depan", DassScale::Depression),
    dass("Saya merasa tangan saya berkeringat tanpa sebab", DassScale::Anxiety),
    dass("Saya merasa dekat dengan kepanikan", DassScale::Anxiety),
    dass("Saya merasa tidak dapat menikmati apapun", DassScale::Depression),
    dass("Saya merasa gugup ketika harus menghadapi situasi baru", DassScale::Anxiety),
    dass("Saya merasa tegang", DassScale::Stress),
    dass("Saya merasa saya tidak berharga", DassScale::Depression),
    dass("Saya sulit untuk beristirahat", DassScale::Stress),
    dass("Saya merasa cemas ketika berpikir tentang masa depan", DassScale::Anxiety),
    dass("Saya merasa lelah dan lesu", DassScale::Depression),
    dass("Saya merasa mudah gelisah", DassScale::Stress),
    dass("Saya merasa nafas saya cepat walaupun tidak sedang beraktivitas", DassScale::Anxiety),
    dass("Saya merasa susah tidur karena memikirkan banyak hal", DassScale::Stress),
    dass("Saya merasa tidak ada semangat", DassScale::Depression),
    dass("Saya merasa mudah marah", DassScale::Stress),
    dass("Saya merasa detak jantung saya tidak beraturan", DassScale::Anxiety),
    dass("Saya merasa sedih secara terus-menerus", DassScale::Depression),
    dass("Saya merasa sangat gugup", DassScale::Anxiety),
    dass("Saya merasa banyak ketegangan di tubuh", DassScale::Stress),
    dass("Saya merasa ingin menangis", DassScale::Depression),
    dass("Saya merasa khawatir berlebihan", DassScale::Anxiety),
    dass("Saya merasa pikiran saya sibuk dengan berbagai masalah", DassScale::Stress),
    dass("Saya merasa tidak ada yang dapat membuat saya bahagia", DassScale::Depression),
    dass("Saya merasa sulit berkonsentrasi pada apa yang saya kerjakan", DassScale::Stress),
    dass("Saya khawatir kehilangan kendali atas pikiran saya", DassScale::Anxiety),
    dass("Saya kehilangan minat pada kegiatan yang biasanya saya nikmati", DassScale::Depression),
    dass("Saya merasa lelah meskipun tidak banyak beraktivitas", DassScale::Depression),
    dass("Saya merasakan ketegangan pada otot-otot tubuh", DassScale::Stress),
    dass("Saya terus-menerus membayangkan kemungkinan terburuk", DassScale::Anxiety),
];

pub const DASS_OPTIONS: &[AnswerOption] = &[
    option("Tidak pernah", 0),
    option("Kadang-kadang", 1),
    option("Sering", 2),
    option("Hampir selalu", 3),
];

/// Raw per-scale sums of a completed DASS questionnaire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DassScore {
    pub depression: u32,
    pub anxiety: u32,
    pub stress: u32,
}

impl DassScore {
    /// Score `answers` (one option value per question, in order).
    pub fn score(questions: &[DassQuestion], answers: &[i32]) -> Result<Self, QuestionnaireError> {
        check_answers(DASS_OPTIONS, questions.len(), answers)?;

        let mut score = Self::default();
        for (question, value) in questions.iter().zip(answers) {
            let value = value.unsigned_abs();
            match question.scale {
                DassScale::Depression => score.depression += value,
                DassScale::Anxiety => score.anxiety += value,
                DassScale::Stress => score.stress += value,
            }
        }
        Ok(score)
    }
}

// ---------------------------------------------------------------------------
// MBTI
// ---------------------------------------------------------------------------

/// A statement whose agreement pushes towards `positive_pole` and away from
/// `negative_pole`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MbtiQuestion {
    pub text: &'static str,
    pub positive_pole: char,
    pub negative_pole: char,
}

const fn mbti(text: &'static str, positive_pole: char, negative_pole: char) -> MbtiQuestion {
    MbtiQuestion {
        text,
        positive_pole,
        negative_pole,
    }
}

pub const MBTI_QUESTIONS: &[MbtiQuestion] = &[
    mbti("Anda merasa nyaman berbicara di depan banyak orang", 'E', 'I'),
    mbti("Anda lebih suka merencanakan secara terperinci daripada spontan", 'J', 'P'),
    mbti("Anda cenderung mengikuti perasaan dalam mengambil keputusan", 'F', 'T'),
    mbti("Anda menikmati kegiatan sosial yang ramai", 'E', 'I'),
    mbti("Anda lebih tertarik pada ide abstrak dibanding fakta konkret", 'N', 'S'),
    mbti("Anda sering menunda pekerjaan hingga mendekati tenggat waktu", 'P', 'J'),
    mbti("Anda lebih percaya pada intuisi dibanding pengalaman langsung", 'N', 'S'),
    mbti("Anda merasa lelah setelah bertemu banyak orang", 'I', 'E'),
    mbti("Anda memilih keputusan yang logis daripada emosional", 'T', 'F'),
    mbti("Anda suka membuat daftar tugas dan menaatinya", 'J', 'P'),
    mbti("Anda mudah bergaul dengan orang baru", 'E', 'I'),
    mbti("Anda lebih fokus pada apa yang terjadi saat ini daripada kemungkinan masa depan", 'S', 'N'),
    mbti("Anda sering mempertimbangkan perasaan orang lain dalam keputusan", 'F', 'T'),
    mbti("Anda menikmati waktu sendirian untuk mengisi energi", 'I', 'E'),
    mbti("Anda spontan dan fleksibel dalam rencana", 'P', 'J'),
    mbti("Anda suka memikirkan ide-ide teoretis", 'N', 'S'),
    mbti("Anda berpendapat aturan dibuat untuk diikuti", 'J', 'P'),
    mbti("Anda sering mengandalkan fakta nyata dibanding intuisi", 'S', 'N'),
    mbti("Anda merasa lebih nyaman mengekspresikan diri melalui tulisan daripada bicara", 'I', 'E'),
    mbti("Anda cenderung menilai situasi secara objektif daripada subjektif", 'T', 'F'),
    mbti("Anda suka berada di pusat perhatian", 'E', 'I'),
    mbti("Anda lebih suka membuat keputusan setelah semua informasi tersedia", 'P', 'J'),
    mbti("Anda merasa sulit memulai percakapan dengan orang asing", 'I', 'E'),
    mbti("Anda lebih mengandalkan fakta dan data daripada intuisi", 'S', 'N'),
    mbti("Anda menikmati menjaga jadwal yang teratur", 'J', 'P'),
    mbti("Anda lebih memilih pekerjaan yang memungkinkan ekspresi kreatif daripada tugas yang terstruktur", 'N', 'S'),
];

pub const MBTI_OPTIONS: &[AnswerOption] = &[
    option("Sangat tidak setuju", -2),
    option("Tidak setuju", -1),
    option("Netral", 0),
    option("Setuju", 1),
    option("Sangat setuju", 2),
];

/// The four axes in the order the type string is spelled.
const MBTI_AXES: [(char, char); 4] = [('E', 'I'), ('S', 'N'), ('T', 'F'), ('J', 'P')];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MbtiResult {
    /// Four-letter type such as `INFJ`.
    pub personality_type: String,
    /// Accumulated weight per pole letter.
    pub tallies: BTreeMap<char, i32>,
}

impl MbtiResult {
    /// Score `answers` (one option value per question, in order).
    ///
    /// Ties on an axis resolve to the first letter of the pair.
    pub fn score(questions: &[MbtiQuestion], answers: &[i32]) -> Result<Self, QuestionnaireError> {
        check_answers(MBTI_OPTIONS, questions.len(), answers)?;

        let mut tallies: BTreeMap<char, i32> = MBTI_AXES
            .iter()
            .flat_map(|(a, b)| [(*a, 0), (*b, 0)])
            .collect();
        for (question, value) in questions.iter().zip(answers) {
            *tallies.entry(question.positive_pole).or_insert(0) += value;
            *tallies.entry(question.negative_pole).or_insert(0) -= value;
        }

        let personality_type = MBTI_AXES
            .iter()
            .map(|(first, second)| {
                if tallies[second] > tallies[first] {
                    *second
                } else {
                    *first
                }
            })
            .collect();

        Ok(Self {
            personality_type,
            tallies,
        })
    }
}
