//! 统计概览模型

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::question::QuestionType;
use crate::utils::number::format_percentage;

/// 统计概览数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsOverview {
    /// 题库总数
    pub bank_total: u64,
    /// 题目总数
    pub question_total: u64,
    /// 按题型聚合的统计，键为题型标识
    #[serde(default)]
    pub by_type: HashMap<String, TypeStats>,
}

/// 单个题型的统计项，服务端可能缺字段
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStats {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub completed_count: Option<u64>,
    #[serde(default)]
    pub correct_count: Option<u64>,
}

/// 统计表格行，缺失的计数按 0 处理
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsRow {
    /// 题型展示名，未知题型保留原始键
    pub type_label: String,
    pub count: u64,
    pub completed_count: u64,
    pub correct_count: u64,
    /// 已完成题目中的正确率，如 "66.7%"
    pub accuracy: String,
}

impl StatisticsOverview {
    /// 把按题型聚合的统计摊平为表格行
    ///
    /// 按题型键排序，保证多次调用输出顺序稳定。
    pub fn to_rows(&self) -> Vec<StatisticsRow> {
        let mut keys: Vec<&String> = self.by_type.keys().collect();
        keys.sort();

        keys.into_iter()
            .map(|key| {
                let stats = &self.by_type[key];
                let completed = stats.completed_count.unwrap_or(0);
                let correct = stats.correct_count.unwrap_or(0);
                StatisticsRow {
                    type_label: QuestionType::from_wire(key)
                        .map(|t| t.label().to_string())
                        .unwrap_or_else(|| key.clone()),
                    count: stats.count.unwrap_or(0),
                    completed_count: completed,
                    correct_count: correct,
                    accuracy: format_percentage(correct, completed),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_rows_sorted_and_labeled() {
        let mut by_type = HashMap::new();
        by_type.insert(
            "single".to_string(),
            TypeStats {
                count: Some(10),
                completed_count: Some(6),
                correct_count: Some(4),
            },
        );
        by_type.insert(
            "fill_blank".to_string(),
            TypeStats {
                count: Some(3),
                completed_count: None,
                correct_count: None,
            },
        );

        let overview = StatisticsOverview {
            bank_total: 2,
            question_total: 13,
            by_type,
        };

        let rows = overview.to_rows();
        assert_eq!(rows.len(), 2);
        // fill_blank 排在 single 前面
        assert_eq!(rows[0].type_label, "填空题");
        assert_eq!(rows[0].completed_count, 0);
        assert_eq!(rows[0].accuracy, "0%");
        assert_eq!(rows[1].type_label, "单选题");
        assert_eq!(rows[1].accuracy, "66.7%");
    }

    #[test]
    fn test_to_rows_keeps_unknown_type_key() {
        let mut by_type = HashMap::new();
        by_type.insert("essay".to_string(), TypeStats::default());

        let overview = StatisticsOverview {
            bank_total: 1,
            question_total: 0,
            by_type,
        };

        assert_eq!(overview.to_rows()[0].type_label, "essay");
    }
}
