//! 题目表：输入 CSV 的内存表示
//!
//! 第 0 列为题干，第 1 列（可选）为书签标记，其余列原样保留。

use csv::StringRecord;

/// 书签字面值
pub const ERROR_MARKER: &str = "ERROR";

/// 书签状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bookmark {
    /// 无书签（未处理或已处理）
    None,
    /// 上次运行在此题失败，从这里继续
    Error,
}

/// 单行题目
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuestionRecord {
    /// 原始题干（未去空白）
    pub text: String,
    /// 第 1 列原始内容，行里没有这一列时为 None
    pub marker: Option<String>,
    /// 第 2 列之后的内容
    pub extra: Vec<String>,
}

impl QuestionRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn from_record(record: &StringRecord) -> Self {
        let mut fields = record.iter().map(str::to_string);
        Self {
            text: fields.next().unwrap_or_default(),
            marker: fields.next(),
            extra: fields.collect(),
        }
    }

    pub fn to_record(&self) -> StringRecord {
        let mut record = StringRecord::new();
        record.push_field(&self.text);
        if let Some(marker) = &self.marker {
            record.push_field(marker);
        }
        for field in &self.extra {
            record.push_field(field);
        }
        record
    }

    /// 去掉首尾空白后的题干
    pub fn question(&self) -> &str {
        self.text.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.question().is_empty()
    }

    pub fn bookmark(&self) -> Bookmark {
        match self.marker.as_deref() {
            Some(marker) if marker.trim() == ERROR_MARKER => Bookmark::Error,
            _ => Bookmark::None,
        }
    }

    /// 打上 ERROR 书签，返回书签是否发生变化
    pub fn mark_error(&mut self) -> bool {
        if self.bookmark() == Bookmark::Error {
            return false;
        }
        self.marker = Some(ERROR_MARKER.to_string());
        true
    }

    /// 清除 ERROR 书签，返回书签是否发生变化
    pub fn clear_bookmark(&mut self) -> bool {
        if self.bookmark() != Bookmark::Error {
            return false;
        }
        self.marker = Some(String::new());
        true
    }
}

/// 完整题目表（表头 + 所有行，顺序即处理顺序）
#[derive(Debug, Clone, Default)]
pub struct QuestionTable {
    pub header: StringRecord,
    pub rows: Vec<QuestionRecord>,
}

impl QuestionTable {
    pub fn new(header: StringRecord, rows: Vec<QuestionRecord>) -> Self {
        Self { header, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 第一个带 ERROR 书签的行，没有则从 0 开始
    ///
    /// 空题干的行同样参与查找。
    pub fn resume_index(&self) -> usize {
        self.rows
            .iter()
            .position(|row| row.bookmark() == Bookmark::Error)
            .unwrap_or(0)
    }

    /// 本次运行需要处理的题目数
    pub fn remaining_from(&self, start_index: usize) -> usize {
        self.rows.len().saturating_sub(start_index)
    }
}
