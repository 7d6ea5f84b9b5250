//! 后端业务错误码表
//!
//! 错误码规范：成功 200，客户端错误 4xxxx，服务端错误 5xxxx，
//! 业务错误 6xxxx。信封里的 message 偶尔会被网关改写，
//! 展示时优先用本表按 code 还原标准文案。

use phf::phf_map;

/// 业务成功状态码
pub const SUCCESS_CODE: i64 = 200;

/// 错误码到标准文案的映射表
static MESSAGES: phf::Map<i64, &'static str> = phf_map! {
    200i64 => "操作成功",

    // 客户端错误 4xxxx
    40000i64 => "请求参数错误",
    40001i64 => "未授权访问",
    40003i64 => "禁止访问",
    40004i64 => "资源不存在",
    40005i64 => "请求方法不允许",
    40008i64 => "请求超时",

    // 参数校验错误 401xx
    40100i64 => "参数校验失败",
    40101i64 => "缺少必要参数",
    40102i64 => "参数类型错误",
    40103i64 => "参数格式错误",
    40104i64 => "参数长度错误",
    40105i64 => "参数值超出范围",

    // 认证授权错误 402xx
    40200i64 => "Token无效",
    40201i64 => "Token已过期",
    40202i64 => "Token缺失",
    40203i64 => "权限不足",
    40204i64 => "账户已禁用",
    40205i64 => "账户已锁定",

    // 服务端错误 5xxxx
    50000i64 => "服务器内部错误",
    50003i64 => "服务不可用",
    50004i64 => "网关超时",

    // 数据库错误 501xx
    50100i64 => "数据库操作失败",
    50101i64 => "数据库连接失败",
    50102i64 => "数据库操作超时",
    50103i64 => "数据完整性约束违反",
    50104i64 => "数据重复",

    // 外部服务错误 502xx
    50200i64 => "外部服务调用失败",
    50201i64 => "外部服务调用超时",
    50202i64 => "外部服务不可用",

    // 文件操作错误 503xx
    50300i64 => "文件上传失败",
    50301i64 => "文件下载失败",
    50302i64 => "文件不存在",
    50303i64 => "文件大小超出限制",
    50304i64 => "文件类型不支持",

    // 业务错误 6xxxx
    60000i64 => "业务处理失败",
    60100i64 => "用户不存在",
    60101i64 => "用户已存在",
    60102i64 => "密码错误",
    60103i64 => "用户状态异常",
};

/// 按错误码查标准文案
pub fn message_for(code: i64) -> Option<&'static str> {
    MESSAGES.get(&code).copied()
}

/// 生成展示文案，未收录的错误码回退为通用格式
pub fn describe(code: i64) -> String {
    match message_for(code) {
        Some(msg) => msg.to_string(),
        None => format!("未知错误 (code={})", code),
    }
}
