//! Reply Texts - 回复文案
//!
//! 文本消息最长 4096 字符，图片说明最长 1024 字符；
//! 超长提示词只在展示时截断，推理请求始终使用完整提示词。

use crate::domain::Prompt;

/// 文本消息最大长度（字符）
pub const MAX_TEXT_CHARS: usize = 4096;

/// 图片说明最大长度（字符）
pub const MAX_CAPTION_CHARS: usize = 1024;

/// /start 与 /help 的使用说明
pub const GREETING: &str = "Halo! Saya bot pembuat gambar gratis. Kirim deskripsi gambar, \
misalnya: \"A cat in a spaceship\". Catatan: Generasi gambar bisa memakan waktu.";

/// TransportFault 的通用提示
pub const GENERIC_FAILURE: &str = "Terjadi kesalahan saat menghasilkan gambar. Coba lagi nanti.";

/// 未预期错误的兜底提示
pub const UNEXPECTED_FAILURE: &str = "Terjadi kesalahan. Silakan coba lagi.";

const ACK_PREFIX: &str = "Memproses: ";
const ACK_SUFFIX: &str = "... Harap tunggu (bisa 10-30 detik).";
const CAPTION_PREFIX: &str = "Gambar untuk: ";
const UPSTREAM_PREFIX: &str = "Gagal menghasilkan gambar: ";

/// 收到提示词后的确认消息
pub fn acknowledgement(prompt: &Prompt) -> String {
    let budget = MAX_TEXT_CHARS - ACK_PREFIX.chars().count() - ACK_SUFFIX.chars().count();
    format!("{}{}{}", ACK_PREFIX, truncate_chars(prompt.as_str(), budget), ACK_SUFFIX)
}

/// 图片说明
pub fn caption(prompt: &Prompt) -> String {
    let budget = MAX_CAPTION_CHARS - CAPTION_PREFIX.chars().count();
    format!("{}{}", CAPTION_PREFIX, truncate_chars(prompt.as_str(), budget))
}

/// 上游返回非 200 时的提示，原样带出状态文本
pub fn upstream_failure(status_text: &str) -> String {
    let budget = MAX_TEXT_CHARS - UPSTREAM_PREFIX.chars().count();
    format!("{}{}", UPSTREAM_PREFIX, truncate_chars(status_text, budget))
}

/// 按字符截断，超长时以 `…` 结尾
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_format() {
        let prompt = Prompt::new("A cat in a spaceship");
        assert_eq!(caption(&prompt), "Gambar untuk: A cat in a spaceship");
    }

    #[test]
    fn test_acknowledgement_format() {
        let prompt = Prompt::new("test");
        assert_eq!(
            acknowledgement(&prompt),
            "Memproses: test... Harap tunggu (bisa 10-30 detik)."
        );
    }

    #[test]
    fn test_upstream_failure_format() {
        assert_eq!(
            upstream_failure("Service Unavailable"),
            "Gagal menghasilkan gambar: Service Unavailable"
        );
    }

    #[test]
    fn test_long_prompt_truncated_for_display() {
        let prompt = Prompt::new("ä".repeat(5000));

        let caption = caption(&prompt);
        assert_eq!(caption.chars().count(), MAX_CAPTION_CHARS);
        assert!(caption.ends_with('…'));

        let ack = acknowledgement(&prompt);
        assert_eq!(ack.chars().count(), MAX_TEXT_CHARS);
        assert!(ack.ends_with(ACK_SUFFIX));
    }
}
