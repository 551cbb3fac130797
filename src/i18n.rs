// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持葡语（默认）和英文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// 语言由调用方显式传入（来自 ServerConfig.locale），不读写 rust-i18n 的全局 locale
// ==========================================

/// 支持的语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["pt-BR", "en"];

/// 默认语言
pub const DEFAULT_LOCALE: &str = "pt-BR";

/// 是否为支持的语言
pub fn is_supported(locale: &str) -> bool {
    SUPPORTED_LOCALES.contains(&locale)
}

/// 按指定语言翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use shift_roster::i18n::t_with_args;
/// let msg = t_with_args("en", "validation.missing_field", &[("field", "dataInicio")]);
/// ```
pub fn t_with_args(locale: &str, key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key, locale = locale).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}
