//! 书签写入服务 - 业务能力层
//!
//! 只负责"把整张题目表写回 CSV"，不判断何时写

use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::models::QuestionTable;

/// 书签写入服务
///
/// 每次书签变化时整表重写（表头 + 全部行），不做增量更新。
pub struct BookmarkWriter {
    csv_path: PathBuf,
}

impl BookmarkWriter {
    pub fn new(csv_path: impl Into<PathBuf>) -> Self {
        Self {
            csv_path: csv_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.csv_path
    }

    pub fn save(&self, table: &QuestionTable) -> Result<()> {
        debug!("重写题目表: {} ({} 行)", self.csv_path.display(), table.len());

        let mut writer = WriterBuilder::new()
            .flexible(true)
            .from_path(&self.csv_path)
            .with_context(|| format!("无法写入题目文件: {}", self.csv_path.display()))?;

        if !table.header.is_empty() {
            writer.write_record(&table.header)?;
        }
        for row in &table.rows {
            writer.write_record(&row.to_record())?;
        }
        writer.flush()?;

        Ok(())
    }
}
