//! 获取流程的状态机
//!
//! 一次获取只会处于四种状态之一，加载中和结果不会同时存在，
//! 也不会出现"既有数据又有错误"的中间态。

use crate::error::ClassifiedError;
use crate::models::StatisticsOverview;

/// 统计获取状态
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    /// 尚未发起过请求
    Idle,
    /// 请求进行中
    Loading,
    /// 获取成功，携带统计数据
    Success(StatisticsOverview),
    /// 获取失败，携带分类后的错误
    Failed(ClassifiedError),
}

impl FetchState {
    /// 是否在加载中
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// 成功态的数据
    pub fn overview(&self) -> Option<&StatisticsOverview> {
        match self {
            FetchState::Success(overview) => Some(overview),
            _ => None,
        }
    }

    /// 失败态的错误
    pub fn error(&self) -> Option<&ClassifiedError> {
        match self {
            FetchState::Failed(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;

    #[test]
    fn test_accessors_are_exclusive() {
        let idle = FetchState::Idle;
        assert!(!idle.is_loading());
        assert!(idle.overview().is_none());
        assert!(idle.error().is_none());

        let failed = FetchState::Failed(ClassifiedError::new(
            ErrorCategory::ServerError,
            "服务器内部错误",
        ));
        assert!(failed.overview().is_none());
        assert_eq!(failed.error().unwrap().message, "服务器内部错误");
    }
}
