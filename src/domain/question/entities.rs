//! Question Context - Entities
//!
//! 三种题目共享相同的形态：题面 + 答案。
//! JSON 字段名与前端约定保持一致（`src`、`hint`、`correctAnswerIndex`）。

use serde::{Deserialize, Serialize};

use super::QuestionError;

/// 选择题固定选项数
pub const QUIZ_OPTION_COUNT: usize = 4;

fn require_non_empty(value: &str, field: &'static str) -> Result<(), QuestionError> {
    if value.trim().is_empty() {
        return Err(QuestionError::EmptyField(field));
    }
    Ok(())
}

/// 图片题：看图猜词
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PictureQuestion {
    /// 图片 URL
    pub src: String,
    /// 小写单词答案
    pub answer: String,
}

impl PictureQuestion {
    pub fn new(src: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            answer: answer.into(),
        }
    }

    pub fn validate(&self) -> Result<(), QuestionError> {
        require_non_empty(&self.src, "src")?;
        require_non_empty(&self.answer, "answer")
    }
}

/// 单词题：根据提示猜词
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordQuestion {
    pub hint: String,
    pub answer: String,
}

impl WordQuestion {
    pub fn new(hint: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            hint: hint.into(),
            answer: answer.into(),
        }
    }

    pub fn validate(&self) -> Result<(), QuestionError> {
        require_non_empty(&self.hint, "hint")?;
        require_non_empty(&self.answer, "answer")
    }
}

/// 选择题
///
/// 不变量:
/// - options 恰好 4 个，且均非空
/// - correct_answer_index 必须落在 options 范围内
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer_index: usize,
}

impl QuizQuestion {
    pub fn new(
        question: impl Into<String>,
        options: [&str; QUIZ_OPTION_COUNT],
        correct_answer_index: usize,
    ) -> Self {
        Self {
            question: question.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer_index,
        }
    }

    pub fn validate(&self) -> Result<(), QuestionError> {
        require_non_empty(&self.question, "question")?;

        if self.options.len() != QUIZ_OPTION_COUNT {
            return Err(QuestionError::WrongOptionCount {
                expected: QUIZ_OPTION_COUNT,
                actual: self.options.len(),
            });
        }
        for option in &self.options {
            require_non_empty(option, "options")?;
        }

        if self.correct_answer().is_none() {
            return Err(QuestionError::AnswerIndexOutOfRange {
                index: self.correct_answer_index,
                len: self.options.len(),
            });
        }

        Ok(())
    }

    /// 正确选项文本，索引越界时返回 None
    pub fn correct_answer(&self) -> Option<&str> {
        self.options
            .get(self.correct_answer_index)
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picture_question_serializes_with_src_key() {
        let q = PictureQuestion::new("https://example.com/cat.png", "cat");
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["src"], "https://example.com/cat.png");
        assert_eq!(json["answer"], "cat");
    }

    #[test]
    fn test_picture_question_rejects_blank_answer() {
        let q = PictureQuestion::new("https://example.com/cat.png", "  ");
        assert_eq!(q.validate(), Err(QuestionError::EmptyField("answer")));
    }

    #[test]
    fn test_word_question_rejects_empty_hint() {
        let q = WordQuestion::new("", "dog");
        assert_eq!(q.validate(), Err(QuestionError::EmptyField("hint")));
    }

    #[test]
    fn test_quiz_question_uses_camel_case_index() {
        let q = QuizQuestion::new("What animal says 'moo'?", ["Dog", "Cat", "Cow", "Duck"], 2);
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["correctAnswerIndex"], 2);
        assert_eq!(json["options"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_quiz_question_correct_answer() {
        let q = QuizQuestion::new("What animal says 'moo'?", ["Dog", "Cat", "Cow", "Duck"], 2);
        assert!(q.validate().is_ok());
        assert_eq!(q.correct_answer(), Some("Cow"));
    }

    #[test]
    fn test_quiz_question_index_out_of_range() {
        let q = QuizQuestion::new("Pick one", ["A", "B", "C", "D"], 4);
        assert_eq!(
            q.validate(),
            Err(QuestionError::AnswerIndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(q.correct_answer(), None);
    }

    #[test]
    fn test_quiz_question_wrong_option_count() {
        let json = r#"{"question":"Pick","options":["A","B"],"correctAnswerIndex":0}"#;
        let q: QuizQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(
            q.validate(),
            Err(QuestionError::WrongOptionCount { expected: 4, actual: 2 })
        );
    }

    #[test]
    fn test_quiz_question_rejects_negative_index_on_parse() {
        let json = r#"{"question":"Pick","options":["A","B","C","D"],"correctAnswerIndex":-1}"#;
        assert!(serde_json::from_str::<QuizQuestion>(json).is_err());
    }
}
