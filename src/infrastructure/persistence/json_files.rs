//! JSON File Question Store
//!
//! 实现 QuestionStorePort trait，启动时从数据目录读取三个 JSON 数组文件：
//! - pictures.json
//! - words.json
//! - quizzes.json
//!
//! 文件缺失、不可读或 JSON 格式错误时，对应集合为空并记录警告，不影响进程启动。
//! 单条题目校验失败时仅丢弃该条。

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

use crate::application::ports::QuestionStorePort;
use crate::domain::question::{
    MathStatus, PictureQuestion, QuestionError, QuestionKind, QuizQuestion, WordQuestion,
};

pub const PICTURES_FILE: &str = "pictures.json";
pub const WORDS_FILE: &str = "words.json";
pub const QUIZZES_FILE: &str = "quizzes.json";

/// 数据文件加载错误（仅在内部记录，不向外传播）
#[derive(Debug, Error)]
enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// 单条题目错误：结构不符或校验失败，只丢弃该条
#[derive(Debug, Error)]
enum EntryError {
    #[error("unexpected shape: {0}")]
    Shape(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] QuestionError),
}

/// 可校验的题目
trait Validate {
    fn validate(&self) -> Result<(), QuestionError>;
}

impl Validate for PictureQuestion {
    fn validate(&self) -> Result<(), QuestionError> {
        PictureQuestion::validate(self)
    }
}

impl Validate for WordQuestion {
    fn validate(&self) -> Result<(), QuestionError> {
        WordQuestion::validate(self)
    }
}

impl Validate for QuizQuestion {
    fn validate(&self) -> Result<(), QuestionError> {
        QuizQuestion::validate(self)
    }
}

/// 文件题库
#[derive(Debug, Clone)]
pub struct JsonFileQuestionStore {
    pictures: Vec<PictureQuestion>,
    words: Vec<WordQuestion>,
    quizzes: Vec<QuizQuestion>,
    math: MathStatus,
}

impl JsonFileQuestionStore {
    /// 从数据目录加载全部集合
    pub async fn load(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();

        let pictures = load_collection(&data_dir.join(PICTURES_FILE), QuestionKind::Picture).await;
        let words = load_collection(&data_dir.join(WORDS_FILE), QuestionKind::Word).await;
        let quizzes = load_collection(&data_dir.join(QUIZZES_FILE), QuestionKind::Quiz).await;

        tracing::info!(
            data_dir = %data_dir.display(),
            pictures = pictures.len(),
            words = words.len(),
            quizzes = quizzes.len(),
            "Question files loaded"
        );

        Self {
            pictures,
            words,
            quizzes,
            math: MathStatus::ready(),
        }
    }
}

impl QuestionStorePort for JsonFileQuestionStore {
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

/// 加载单个集合，文件级错误降级为空集合，条目级错误只丢弃该条
async fn load_collection<T>(path: &Path, kind: QuestionKind) -> Vec<T>
where
    T: DeserializeOwned + Validate,
{
    let entries = match read_json_array(path).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(
                kind = %kind,
                error = %e,
                "Question file unavailable, serving empty collection"
            );
            return Vec::new();
        }
    };

    let total = entries.len();
    let valid: Vec<T> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match parse_entry::<T>(entry) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(
                    kind = %kind,
                    path = %path.display(),
                    index,
                    error = %e,
                    "Skipping invalid question"
                );
                None
            }
        })
        .collect();

    if valid.len() < total {
        tracing::warn!(
            kind = %kind,
            kept = valid.len(),
            dropped = total - valid.len(),
            "Some questions were rejected"
        );
    }

    valid
}

fn parse_entry<T>(entry: Value) -> Result<T, EntryError>
where
    T: DeserializeOwned + Validate,
{
    let item: T = serde_json::from_value(entry)?;
    item.validate()?;
    Ok(item)
}

async fn read_json_array(path: &Path) -> Result<Vec<Value>, LoadError> {
    let bytes = fs::read(path).await.map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&bytes).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::question::catalog;
    use tempfile::TempDir;

    async fn write(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).await.unwrap();
    }

    #[tokio::test]
    async fn test_load_all_files() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            PICTURES_FILE,
            r#"[{"src":"https://example.com/cat.png","answer":"cat"}]"#,
        )
        .await;
        write(
            &dir,
            WORDS_FILE,
            r#"[{"hint":"It barks.","answer":"dog"},{"hint":"It meows.","answer":"cat"}]"#,
        )
        .await;
        write(
            &dir,
            QUIZZES_FILE,
            r#"[{"question":"Sky?","options":["Green","Blue","Yellow","Red"],"correctAnswerIndex":1}]"#,
        )
        .await;

        let store = JsonFileQuestionStore::load(dir.path()).await;
        assert_eq!(store.pictures().len(), 1);
        assert_eq!(store.words().len(), 2);
        assert_eq!(store.quizzes().len(), 1);
        assert_eq!(store.quizzes()[0].correct_answer(), Some("Blue"));
    }

    #[tokio::test]
    async fn test_bundled_data_matches_builtin_catalog() {
        let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let store = JsonFileQuestionStore::load(&data_dir).await;
        assert_eq!(store.pictures(), catalog::picture_questions().as_slice());
        assert_eq!(store.words(), catalog::word_questions().as_slice());
        assert_eq!(store.quizzes(), catalog::quiz_questions().as_slice());
    }

    #[tokio::test]
    async fn test_missing_file_yields_empty_collection() {
        let dir = TempDir::new().unwrap();
        write(&dir, WORDS_FILE, r#"[{"hint":"It barks.","answer":"dog"}]"#).await;

        let store = JsonFileQuestionStore::load(dir.path()).await;
        assert!(store.pictures().is_empty());
        assert!(store.quizzes().is_empty());
        assert_eq!(store.words().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_directory_yields_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileQuestionStore::load(dir.path().join("nope")).await;
        assert_eq!(store.len(QuestionKind::Picture), 0);
        assert_eq!(store.len(QuestionKind::Word), 0);
        assert_eq!(store.len(QuestionKind::Quiz), 0);
        assert_eq!(store.math(), &MathStatus::ready());
    }

    #[tokio::test]
    async fn test_malformed_json_yields_empty_collection() {
        let dir = TempDir::new().unwrap();
        write(&dir, PICTURES_FILE, r#"[{"src": "oops""#).await;
        write(&dir, QUIZZES_FILE, r#"{"not":"an array"}"#).await;

        let store = JsonFileQuestionStore::load(dir.path()).await;
        assert!(store.pictures().is_empty());
        assert!(store.quizzes().is_empty());
    }

    #[tokio::test]
    async fn test_wrongly_shaped_entries_do_not_discard_siblings() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            QUIZZES_FILE,
            r#"[
                {"question":"Sky?","options":["Green","Blue","Yellow","Red"],"correctAnswerIndex":1},
                {"question":"Negative","options":["A","B","C","D"],"correctAnswerIndex":-1}
            ]"#,
        )
        .await;
        write(
            &dir,
            PICTURES_FILE,
            r#"[
                {"src":"https://example.com/cat.png","answer":"cat"},
                {"src":"https://example.com/dog.png"}
            ]"#,
        )
        .await;
        write(&dir, WORDS_FILE, r#"[{"hint":"It barks.","answer":"dog"}, 42]"#).await;

        let store = JsonFileQuestionStore::load(dir.path()).await;
        assert_eq!(store.quizzes().len(), 1);
        assert_eq!(store.quizzes()[0].question, "Sky?");
        assert_eq!(store.pictures().len(), 1);
        assert_eq!(store.pictures()[0].answer, "cat");
        assert_eq!(store.words().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_entries_are_skipped() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            QUIZZES_FILE,
            r#"[
                {"question":"Ok","options":["A","B","C","D"],"correctAnswerIndex":3},
                {"question":"Bad index","options":["A","B","C","D"],"correctAnswerIndex":9},
                {"question":"Too few","options":["A","B"],"correctAnswerIndex":0}
            ]"#,
        )
        .await;
        write(
            &dir,
            PICTURES_FILE,
            r#"[{"src":"https://example.com/a.png","answer":""}]"#,
        )
        .await;

        let store = JsonFileQuestionStore::load(dir.path()).await;
        assert_eq!(store.quizzes().len(), 1);
        assert_eq!(store.quizzes()[0].question, "Ok");
        assert!(store.pictures().is_empty());
    }
}
