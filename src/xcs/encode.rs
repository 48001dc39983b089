//! XCSへの符号化（未対応）。

use super::{TransformResult, XcsError};

/// ARIBの外字符号化方式（XCS）の符号器。
///
/// 符号化の方向は未対応であり、[`transform`]は常に失敗する。
///
/// [`transform`]: XcsEncoder::transform
#[derive(Debug, Default, Clone)]
pub struct XcsEncoder;

impl XcsEncoder {
    /// `XcsEncoder`を生成する。
    #[inline]
    pub fn new() -> XcsEncoder {
        XcsEncoder
    }

    /// 常に[`XcsError::EncodingNotSupported`]で失敗する。
    pub fn transform(
        &mut self,
        _dst: &mut [u8],
        _src: &[u8],
        _at_end: bool,
    ) -> (usize, usize, TransformResult) {
        (0, 0, TransformResult::Invalid(XcsError::EncodingNotSupported))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_not_supported() {
        let mut encoder = XcsEncoder::new();
        let (n_dst, n_src, result) = encoder.transform(&mut [0; 16], "あ".as_bytes(), true);
        assert_eq!((n_dst, n_src), (0, 0));

        let TransformResult::Invalid(e) = result else {
            panic!("encode should fail");
        };
        assert_eq!(e.to_string(), "arib: xcs encoding not supported");
    }
}
