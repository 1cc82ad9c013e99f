//! 结果写入服务 - 业务能力层
//!
//! 只负责把一条成功结果追加到三个输出文件，不关心流程

use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::models::AnswerRecord;

pub const CSV_FILE_NAME: &str = "output.csv";
pub const TXT_FILE_NAME: &str = "output.txt";
pub const JSON_FILE_NAME: &str = "output.json";

/// 结果写入服务
///
/// 三个文件都只追加、不截断；三者之间不保证原子性。
pub struct OutputWriter {
    output_dir: PathBuf,
}

impl OutputWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// 输出目录不存在时创建
    pub fn prepare(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir)
            .with_context(|| format!("无法创建输出目录: {}", self.output_dir.display()))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join(CSV_FILE_NAME)
    }

    pub fn txt_path(&self) -> PathBuf {
        self.output_dir.join(TXT_FILE_NAME)
    }

    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(JSON_FILE_NAME)
    }

    /// 依次写入 CSV、TXT、JSON-lines
    pub fn write(&self, record: &AnswerRecord) -> Result<()> {
        debug!("写入结果: 题干长度 {} 字符", record.question.chars().count());

        self.append_csv(record)?;
        self.append_txt(record)?;
        self.append_json(record)?;

        Ok(())
    }

    fn append_csv(&self, record: &AnswerRecord) -> Result<()> {
        let path = self.csv_path();
        let file_exists = path.is_file();

        let file = open_append(&path)?;
        let mut writer = WriterBuilder::new()
            .has_headers(!file_exists)
            .from_writer(file);

        writer
            .serialize(record)
            .with_context(|| format!("写入 CSV 失败: {}", path.display()))?;
        writer.flush()?;

        Ok(())
    }

    fn append_txt(&self, record: &AnswerRecord) -> Result<()> {
        let path = self.txt_path();
        let mut file = open_append(&path)?;
        file.write_all(format_text_block(record).as_bytes())
            .with_context(|| format!("写入 TXT 失败: {}", path.display()))?;
        Ok(())
    }

    fn append_json(&self, record: &AnswerRecord) -> Result<()> {
        let path = self.json_path();
        let mut line = serde_json::to_string(&record.to_json_line())?;
        line.push('\n');

        let mut file = open_append(&path)?;
        file.write_all(line.as_bytes())
            .with_context(|| format!("写入 JSON 失败: {}", path.display()))?;
        Ok(())
    }
}

fn open_append(path: &Path) -> Result<fs::File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("无法打开输出文件: {}", path.display()))
}

/// 文本输出的固定格式块
pub fn format_text_block(record: &AnswerRecord) -> String {
    format!(
        "Timestamp: {}\nQuestion: {}\nThought Process: {}\nFinal Answer: {}\n{}\n\n",
        record.timestamp,
        record.question,
        record.thoughts,
        record.final_answer,
        "-".repeat(50)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(question: &str, answer: &str) -> AnswerRecord {
        AnswerRecord {
            timestamp: "2025-02-01 10:00:00".to_string(),
            question: question.to_string(),
            thoughts: "思考, 带逗号".to_string(),
            final_answer: answer.to_string(),
        }
    }

    #[test]
    fn test_creates_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let writer = OutputWriter::new(&nested);
        assert!(!writer.output_dir().exists());
        writer.prepare().unwrap();
        assert!(writer.output_dir().is_dir());
    }

    #[test]
    fn test_csv_header_written_once() {
        let dir = tempfile::tempdir().unwrap();
        let writer = OutputWriter::new(dir.path());

        writer.write(&record("q1", "a1")).unwrap();
        writer.write(&record("q2", "a2")).unwrap();

        let content = fs::read_to_string(writer.csv_path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "timestamp,question,thoughts,final_answer");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "2025-02-01 10:00:00,q1,\"思考, 带逗号\",a1");
    }

    #[test]
    fn test_text_block_layout() {
        let block = format_text_block(&record("q", "a"));
        assert_eq!(
            block,
            format!(
                "Timestamp: 2025-02-01 10:00:00\nQuestion: q\nThought Process: 思考, 带逗号\nFinal Answer: a\n{}\n\n",
                "-".repeat(50)
            )
        );
    }

    #[test]
    fn test_json_lines_append_without_escaping_unicode() {
        let dir = tempfile::tempdir().unwrap();
        let writer = OutputWriter::new(dir.path());

        writer.write(&record("第一题", "a1")).unwrap();
        writer.write(&record("第二题", "a2")).unwrap();

        let content = fs::read_to_string(writer.json_path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("第一题"));

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["metadata"]["question"], "第二题");
        assert_eq!(second["response"]["answer"], "a2");
    }
}
