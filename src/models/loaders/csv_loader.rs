use crate::error::{AppError, FileError};
use crate::models::question::{QuestionRecord, QuestionTable};
use anyhow::Result;
use csv::ReaderBuilder;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

/// 从 CSV 文件加载题目表
///
/// 第一行视为表头；各行列数可以不同。文件不存在时返回 `FileError::NotFound`。
pub async fn load_question_table(csv_path: &Path) -> Result<QuestionTable> {
    let path_str = csv_path.display().to_string();

    let content = match fs::read(csv_path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(AppError::from(FileError::NotFound { path: path_str }).into());
        }
        Err(e) => return Err(AppError::file_read_failed(path_str, e).into()),
    };

    let table = parse_question_table(&content).map_err(|source| {
        AppError::from(FileError::CsvParseFailed {
            path: path_str.clone(),
            source,
        })
    })?;

    tracing::debug!("从 {} 读取到 {} 行题目", path_str, table.len());

    Ok(table)
}

/// 解析 CSV 内容
pub fn parse_question_table(content: &[u8]) -> std::result::Result<QuestionTable, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content);

    let header = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(QuestionRecord::from_record(&record?));
    }

    Ok(QuestionTable::new(header, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::Bookmark;

    #[test]
    fn test_parse_mixed_width_rows() {
        let content = "question,bookmark\n\"What is 2+2?\"\n\"Why, though?\",ERROR\nthird,\n";
        let table = parse_question_table(content.as_bytes()).unwrap();
        assert_eq!(table.header.len(), 2);
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows[0].marker, None);
        assert_eq!(table.rows[1].text, "Why, though?");
        assert_eq!(table.rows[1].bookmark(), Bookmark::Error);
        assert_eq!(table.rows[2].marker.as_deref(), Some(""));
        assert_eq!(table.resume_index(), 1);
    }

    #[test]
    fn test_parse_empty_content() {
        let table = parse_question_table(b"").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.resume_index(), 0);
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_question_table(&dir.path().join("q.csv"))
            .await
            .unwrap_err();
        let app_err = err.downcast_ref::<AppError>().unwrap();
        assert!(app_err.is_not_found());
    }

    #[tokio::test]
    async fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("q.csv");
        std::fs::write(&path, "question\n第一题\n第二题\n").unwrap();

        let table = load_question_table(&path).await.unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1].question(), "第二题");
    }
}
