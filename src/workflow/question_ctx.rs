//! 题目处理上下文
//!
//! 封装"我正在处理题目表的第几行、本次运行的第几题"这一信息

use std::fmt::Display;

/// 题目处理上下文
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionCtx {
    /// 在题目表中的行索引（从0开始，不含表头）
    pub row_index: usize,

    /// 本次运行的起始行
    pub start_index: usize,

    /// 本次运行需要处理的行数
    pub total: usize,
}

impl QuestionCtx {
    pub fn new(row_index: usize, start_index: usize, total: usize) -> Self {
        Self {
            row_index,
            start_index,
            total,
        }
    }

    /// 本次运行中的序号（从1开始）
    pub fn position(&self) -> usize {
        self.row_index - self.start_index + 1
    }

    /// CSV 文件中的行号（表头为第 1 行）
    pub fn file_line(&self) -> usize {
        self.row_index + 2
    }
}

impl Display for QuestionCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[题目 {}/{}]", self.position(), self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_is_relative_to_resume_point() {
        let ctx = QuestionCtx::new(5, 3, 10);
        assert_eq!(ctx.position(), 3);
        assert_eq!(ctx.file_line(), 7);
        assert_eq!(ctx.to_string(), "[题目 3/10]");
    }
}
