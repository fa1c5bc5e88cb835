//! Question Query Handlers

use serde::Serialize;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{QuestionSet, QuestionStorePort};
use crate::application::queries::{GetMathStatus, GetStoreSummary, ShuffleQuestions};
use crate::domain::question::{
    MathStatus, PictureQuestion, QuestionKind, QuizQuestion, WordQuestion,
};
use crate::domain::shuffled;

// ============================================================================
// Response DTOs
// ============================================================================

/// 打乱后的题目列表，序列化为裸 JSON 数组
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ShuffledQuestions {
    Picture(Vec<PictureQuestion>),
    Word(Vec<WordQuestion>),
    Quiz(Vec<QuizQuestion>),
}

impl ShuffledQuestions {
    pub fn len(&self) -> usize {
        match self {
            ShuffledQuestions::Picture(items) => items.len(),
            ShuffledQuestions::Word(items) => items.len(),
            ShuffledQuestions::Quiz(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 题库概况
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreSummary {
    pub picture: usize,
    pub word: usize,
    pub quiz: usize,
}

// ============================================================================
// Handlers
// ============================================================================

/// ShuffleQuestions Handler
pub struct ShuffleQuestionsHandler {
    store: Arc<dyn QuestionStorePort>,
}

impl ShuffleQuestionsHandler {
    pub fn new(store: Arc<dyn QuestionStorePort>) -> Self {
        Self { store }
    }

    pub fn handle(&self, query: ShuffleQuestions) -> Result<ShuffledQuestions, ApplicationError> {
        let result = match self.store.get(query.kind) {
            QuestionSet::Math(_) => return Err(ApplicationError::Unsupported(query.kind)),
            QuestionSet::Picture(items) => ShuffledQuestions::Picture(shuffled(items)),
            QuestionSet::Word(items) => ShuffledQuestions::Word(shuffled(items)),
            QuestionSet::Quiz(items) => ShuffledQuestions::Quiz(shuffled(items)),
        };

        if result.is_empty() {
            return Err(ApplicationError::empty(query.kind));
        }

        tracing::debug!(kind = %query.kind, count = result.len(), "Questions shuffled");

        Ok(result)
    }
}

/// GetMathStatus Handler
pub struct GetMathStatusHandler {
    store: Arc<dyn QuestionStorePort>,
}

impl GetMathStatusHandler {
    pub fn new(store: Arc<dyn QuestionStorePort>) -> Self {
        Self { store }
    }

    pub fn handle(&self, _query: GetMathStatus) -> MathStatus {
        self.store.math().clone()
    }
}

/// GetStoreSummary Handler
pub struct GetStoreSummaryHandler {
    store: Arc<dyn QuestionStorePort>,
}

impl GetStoreSummaryHandler {
    pub fn new(store: Arc<dyn QuestionStorePort>) -> Self {
        Self { store }
    }

    pub fn handle(&self, _query: GetStoreSummary) -> StoreSummary {
        StoreSummary {
            picture: self.store.len(QuestionKind::Picture),
            word: self.store.len(QuestionKind::Word),
            quiz: self.store.len(QuestionKind::Quiz),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::question::catalog;

    struct FixedStore {
        pictures: Vec<PictureQuestion>,
        words: Vec<WordQuestion>,
        quizzes: Vec<QuizQuestion>,
        math: MathStatus,
    }

    impl QuestionStorePort for FixedStore {
        fn pictures(&self) -> &[PictureQuestion] {
            &self.pictures
        }

        fn words(&self) -> &[WordQuestion] {
            &self.words
        }

        fn quizzes(&self) -> &[QuizQuestion] {
            &self.quizzes
        }

        fn math(&self) -> &MathStatus {
            &self.math
        }
    }

    fn catalog_store() -> Arc<dyn QuestionStorePort> {
        Arc::new(FixedStore {
            pictures: catalog::picture_questions(),
            words: catalog::word_questions(),
            quizzes: catalog::quiz_questions(),
            math: MathStatus::ready(),
        })
    }

    fn empty_store() -> Arc<dyn QuestionStorePort> {
        Arc::new(FixedStore {
            pictures: Vec::new(),
            words: Vec::new(),
            quizzes: Vec::new(),
            math: MathStatus::ready(),
        })
    }

    #[test]
    fn test_shuffle_pictures_is_full_permutation() {
        let handler = ShuffleQuestionsHandler::new(catalog_store());
        let result = handler
            .handle(ShuffleQuestions::new(QuestionKind::Picture))
            .unwrap();

        let ShuffledQuestions::Picture(mut items) = result else {
            panic!("expected picture questions");
        };
        let mut expected = catalog::picture_questions();
        items.sort_by(|a, b| a.answer.cmp(&b.answer));
        expected.sort_by(|a, b| a.answer.cmp(&b.answer));
        assert_eq!(items, expected);
    }

    #[test]
    fn test_shuffle_quiz_changes_order_eventually() {
        let handler = ShuffleQuestionsHandler::new(catalog_store());
        let orderings: std::collections::HashSet<Vec<String>> = (0..50)
            .map(|_| match handler.handle(ShuffleQuestions::new(QuestionKind::Quiz)) {
                Ok(ShuffledQuestions::Quiz(items)) => {
                    items.into_iter().map(|q| q.question).collect()
                }
                other => panic!("unexpected result: {:?}", other),
            })
            .collect();
        assert!(orderings.len() >= 2);
    }

    #[test]
    fn test_empty_collection_error() {
        let handler = ShuffleQuestionsHandler::new(empty_store());
        assert_eq!(
            handler.handle(ShuffleQuestions::new(QuestionKind::Word)),
            Err(ApplicationError::empty(QuestionKind::Word))
        );
    }

    #[test]
    fn test_math_is_unsupported_for_shuffle() {
        let handler = ShuffleQuestionsHandler::new(catalog_store());
        assert_eq!(
            handler.handle(ShuffleQuestions::new(QuestionKind::Math)),
            Err(ApplicationError::Unsupported(QuestionKind::Math))
        );
    }

    #[test]
    fn test_math_is_unsupported_even_when_store_is_empty() {
        let handler = ShuffleQuestionsHandler::new(empty_store());
        assert_eq!(
            handler.handle(ShuffleQuestions::new(QuestionKind::Math)),
            Err(ApplicationError::Unsupported(QuestionKind::Math))
        );
    }

    #[test]
    fn test_math_status_ignores_store_contents() {
        let handler = GetMathStatusHandler::new(empty_store());
        assert_eq!(handler.handle(GetMathStatus), MathStatus::ready());
    }

    #[test]
    fn test_store_summary_counts() {
        let handler = GetStoreSummaryHandler::new(catalog_store());
        assert_eq!(
            handler.handle(GetStoreSummary),
            StoreSummary {
                picture: 15,
                word: 15,
                quiz: 5,
            }
        );
    }
}
