//! 文本处理工具
//!
//! 题干和解析在数据库里带富文本标签，终端展示前需要转成纯文本。

use std::sync::OnceLock;

use regex::Regex;

fn break_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<br\s*/?>|</p>|</div>|</li>").expect("正则表达式非法"))
}

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("正则表达式非法"))
}

/// 把富文本题干转成纯文本
///
/// 块级结束标签转换行，其余标签直接去掉，常见 HTML 实体还原。
///
/// # 参数
/// - `input`: 原始富文本
///
/// # 返回
/// 返回适合终端显示的纯文本
pub fn strip_html(input: &str) -> String {
    let with_breaks = break_regex().replace_all(input, "\n");
    let stripped = tag_regex().replace_all(&with_breaks, "");

    let decoded = stripped
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    decoded.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html_plain_passthrough() {
        assert_eq!(strip_html("下列说法正确的是？"), "下列说法正确的是？");
    }

    #[test]
    fn test_strip_html_tags_and_entities() {
        let input = "<p>函数 f(x) 满足 x &lt; 2 时，<b>f(x) &gt; 0</b></p>";
        assert_eq!(strip_html(input), "函数 f(x) 满足 x < 2 时，f(x) > 0");
    }

    #[test]
    fn test_strip_html_breaks_become_newlines() {
        let input = "第一行<br/>第二行<br>第三行";
        assert_eq!(strip_html(input), "第一行\n第二行\n第三行");
    }
}
