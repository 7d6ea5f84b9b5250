//! 数字展示格式化
//!
//! 统计数字来自服务端，计数字段可能缺失，这里统一把缺失按 0 处理。

/// 格式化数字，千位加分隔符，缺失值显示为 "0"
///
/// # 示例
/// ```
/// use easytiwu_client::utils::number::format_number;
///
/// assert_eq!(format_number(1234567u64), "1,234,567");
/// assert_eq!(format_number(None), "0");
/// ```
pub fn format_number(value: impl Into<Option<u64>>) -> String {
    let n = match value.into() {
        Some(n) => n,
        None => return "0".to_string(),
    };

    let digits = n.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// 格式化百分比，保留一位小数
///
/// 分母为 0 或缺失时直接返回 "0%"，分子缺失按 0 计算。
///
/// # 示例
/// ```
/// use easytiwu_client::utils::number::format_percentage;
///
/// assert_eq!(format_percentage(2u64, 3u64), "66.7%");
/// assert_eq!(format_percentage(5u64, 0u64), "0%");
/// ```
pub fn format_percentage(value: impl Into<Option<u64>>, total: impl Into<Option<u64>>) -> String {
    let total = match total.into() {
        Some(t) if t > 0 => t,
        _ => return "0%".to_string(),
    };
    let value = value.into().unwrap_or(0);

    format!("{:.1}%", value as f64 / total as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0u64), "0");
        assert_eq!(format_number(999u64), "999");
        assert_eq!(format_number(1000u64), "1,000");
        assert_eq!(format_number(1234567u64), "1,234,567");
        assert_eq!(format_number(None), "0");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(2u64, 3u64), "66.7%");
        assert_eq!(format_percentage(1u64, 2u64), "50.0%");
        assert_eq!(format_percentage(3u64, 3u64), "100.0%");
        // 分母为 0 时不带小数位
        assert_eq!(format_percentage(5u64, 0u64), "0%");
        assert_eq!(format_percentage(None, None), "0%");
        // 分子缺失按 0 计算，注意与分母为 0 的输出不同
        assert_eq!(format_percentage(None, 4u64), "0.0%");
    }
}
