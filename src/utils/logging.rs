/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use std::path::Path;
use tracing::info;

/// 记录程序启动信息
///
/// # 参数
/// - `model`: 模型名称
/// - `question_file`: 题目文件路径
pub fn log_startup(model: &str, question_file: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 推理数据集生成");
    info!("🤖 模型: {}", model);
    info!("📄 题目文件: {}", question_file);
    info!("{}", "=".repeat(60));
}

/// 记录题目加载信息
///
/// # 参数
/// - `total_rows`: 题目表总行数
/// - `start_index`: 续跑起点
pub fn log_questions_loaded(total_rows: usize, start_index: usize) {
    info!("✓ 共读取 {} 道题目", total_rows);
    if start_index > 0 {
        info!(
            "🔖 检测到书签，从第 {} 题继续（CSV 第 {} 行）",
            start_index + 1,
            start_index + 2
        );
    }
    info!("📋 本次待处理: {} 道\n", total_rows.saturating_sub(start_index));
}

/// 记录书签写入信息
///
/// # 参数
/// - `file_line`: CSV 文件中的行号
pub fn log_bookmarked(file_line: usize) {
    info!("\n{}", "─".repeat(60));
    info!("🔖 持续失败，已在第 {} 行打上书签，稍后重新运行即可继续", file_line);
    info!("{}", "─".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `success`: 成功数量
/// - `skipped`: 跳过数量（空题干）
/// - `total`: 本次待处理总数
/// - `output_dir`: 输出目录
pub fn print_final_stats(success: usize, skipped: usize, total: usize, output_dir: &Path) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", success, total);
    info!("⏭️ 跳过: {}", skipped);
    info!("{}", "=".repeat(60));
    info!("\n输出文件位于: {}", output_dir.display());
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_text("短", 50), "短");
        assert_eq!(truncate_text("一二三四五", 3), "一二三...");
        assert_eq!(truncate_text("abc", 3), "abc");
    }
}
