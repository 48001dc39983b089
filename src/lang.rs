//! ARIBで使用される言語コード関係の定義。

use std::fmt::{self, Write};

/// ISO 639-2で規定される3文字の言語コード。
///
/// 符号はISO 8859-1として解釈される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LangCode(pub [u8; 3]);

// ARIB TR-B14より。
impl LangCode {
    /// 日本語。
    pub const JPN: LangCode = LangCode(*b"jpn");
    /// 英語。
    pub const ENG: LangCode = LangCode(*b"eng");
    /// 外国語。
    pub const ETC: LangCode = LangCode(*b"etc");

    /// `data`の先頭3バイトから`LangCode`を読み取る。
    ///
    /// # パニック
    ///
    /// `data`の長さが3未満の場合、このメソッドはパニックする。
    #[inline]
    pub fn read(data: &[u8]) -> LangCode {
        LangCode(data[..3].try_into().unwrap())
    }
}

impl fmt::Display for LangCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // ISO 8859-1はUnicodeの先頭256文字と一致する
        for &b in &self.0 {
            f.write_char(b as char)?;
        }
        Ok(())
    }
}

/// `data`をISO 8859-1の文字列として復号する。
pub fn decode_iso8859_1(data: &[u8]) -> String {
    data.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lang_code() {
        assert_eq!(LangCode::read(b"jpn"), LangCode::JPN);
        assert_eq!(LangCode::read(b"engX"), LangCode::ENG);
        assert_eq!(LangCode::JPN.to_string(), "jpn");
    }

    #[test]
    fn test_decode_iso8859_1() {
        assert_eq!(decode_iso8859_1(b"jpn"), "jpn");
        assert_eq!(decode_iso8859_1(&[0xA9, 0x41]), "\u{A9}A");
    }
}
