//! ARIBの外字符号化方式（XCS）。
//!
//! XCSはISO 2022様式の指示とシフトを使う8ビットの符号拡張方式で、
//! SIの文字フィールドはこの方式で符号化されている。
//! [`XcsDecoder`]が符号列をUTF-8へ変換し、[`decode`]がその呼び出しを
//! 文字列の生成まで面倒見る。符号化の逆方向は未対応であり、
//! [`XcsEncoder`]は常に失敗する。

mod decode;
mod encode;
pub mod graphicset;
mod table;

pub use decode::{TransformResult, XcsDecoder};
pub use encode::XcsEncoder;

use thiserror::Error;

/// XCSの符号列を扱う際のエラー。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XcsError {
    /// 不正な符号列。
    #[error("arib: invalid external character set encoding")]
    InvalidEncoding,

    /// ESCに不正なパラメータが続いている。
    #[error("arib: ESC has invalid parameter 0x{0:02X}")]
    InvalidEscParameter(u8),

    /// 符号化方向は未対応。
    #[error("arib: xcs encoding not supported")]
    EncodingNotSupported,
}

/// NUL、空白。
pub const NUL: u8 = 0x00;
/// BEL、ベル。
pub const BEL: u8 = 0x07;
/// APB、動作位置後退。
pub const APB: u8 = 0x08;
/// APF、動作位置前進。
pub const APF: u8 = 0x09;
/// APD、動作行前進。
pub const APD: u8 = 0x0A;
/// APU、動作行後退。
pub const APU: u8 = 0x0B;
/// CS、画面消去。
pub const CS: u8 = 0x0C;
/// APR、動作位置改行。
pub const APR: u8 = 0x0D;
/// LS1、G1をGLへ呼び出すロッキングシフト。
pub const LS1: u8 = 0x0E;
/// LS0、G0をGLへ呼び出すロッキングシフト。
pub const LS0: u8 = 0x0F;
/// PAPF、指定動作位置前進。
pub const PAPF: u8 = 0x16;
/// CAN、キャンセル。
pub const CAN: u8 = 0x18;
/// SS2、G2のシングルシフト。
pub const SS2: u8 = 0x19;
/// ESC、エスケープ。
pub const ESC: u8 = 0x1B;
/// APS、動作位置指定。
pub const APS: u8 = 0x1C;
/// SS3、G3のシングルシフト。
pub const SS3: u8 = 0x1D;
/// RS、データヘッダ識別符号。
pub const RS: u8 = 0x1E;
/// US、データユニット識別符号。
pub const US: u8 = 0x1F;
/// SP、スペース。
pub const SP: u8 = 0x20;
/// DEL、デリート。
pub const DEL: u8 = 0x7F;
/// BKF、前景色を黒にする。
pub const BKF: u8 = 0x80;
/// RDF、前景色を赤にする。
pub const RDF: u8 = 0x81;
/// GRF、前景色を緑にする。
pub const GRF: u8 = 0x82;
/// YLF、前景色を黄にする。
pub const YLF: u8 = 0x83;
/// BLF、前景色を青にする。
pub const BLF: u8 = 0x84;
/// MGF、前景色をマゼンタにする。
pub const MGF: u8 = 0x85;
/// CNF、前景色をシアンにする。
pub const CNF: u8 = 0x86;
/// WHF、前景色を白にする。
pub const WHF: u8 = 0x87;
/// SSZ、小型サイズ。
pub const SSZ: u8 = 0x88;
/// MSZ、中型サイズ。
pub const MSZ: u8 = 0x89;
/// NSZ、標準サイズ。
pub const NSZ: u8 = 0x8A;
/// SZX、指定サイズ。
pub const SZX: u8 = 0x8B;
/// COL、色指定。
pub const COL: u8 = 0x90;
/// FLC、フラッシング制御。
pub const FLC: u8 = 0x91;
/// CDC、隠蔽制御。
pub const CDC: u8 = 0x92;
/// POL、パターン極性。
pub const POL: u8 = 0x93;
/// WMM、書込みモード変更。
pub const WMM: u8 = 0x94;
/// MACRO、マクロ定義。
pub const MACRO: u8 = 0x95;
/// HLC、囲み制御。
pub const HLC: u8 = 0x97;
/// RPC、文字繰り返し。
pub const RPC: u8 = 0x98;
/// SPL、アンダーライン終了。
pub const SPL: u8 = 0x99;
/// STL、アンダーライン開始。
pub const STL: u8 = 0x9A;
/// CSI、コントロールシーケンスの開始。
pub const CSI: u8 = 0x9B;
/// TIME、時間制御。
pub const TIME: u8 = 0x9D;
/// C1領域の上限（10/0）。
pub const CC1000: u8 = 0xA0;
/// 8ビット符号で使用しない値（15/15）。
pub const CC1515: u8 = 0xFF;

/// `src`をXCSの符号列としてUTF-8の文字列に復号する。
///
/// 入力全体をひとつの符号列として扱うため、符号の途中で入力が
/// 終わっている場合は[`XcsError::InvalidEncoding`]になる。
pub fn decode(src: &[u8]) -> Result<String, XcsError> {
    let mut decoder = XcsDecoder::new();
    let mut dst = vec![0; src.len() * 4 + 8];
    let mut read = 0;
    let mut written = 0;

    loop {
        let (n_dst, n_src, result) = decoder.transform(&mut dst[written..], &src[read..], true);
        written += n_dst;
        read += n_src;
        match result {
            TransformResult::Ok => break,
            TransformResult::ShortDst => {
                let len = dst.len();
                dst.resize(len * 2, 0);
            }
            TransformResult::ShortSrc => return Err(XcsError::InvalidEncoding),
            TransformResult::Invalid(e) => return Err(e),
        }
    }

    dst.truncate(written);
    // Safety: 変換先には図形集合の表にあるUTF-8文字列しか書き込まれない
    Ok(unsafe { String::from_utf8_unchecked(dst) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_grows_dst() {
        // 2バイトの符号が18バイトのUTF-8になるため変換先が伸長される
        let mut src = vec![0x1B, 0x24, 0x3B];
        for _ in 0..4 {
            src.extend_from_slice(&[0x7A, 0x67]);
        }
        assert_eq!(decode(&src), Ok("【年齢制限】".repeat(4)));
    }
}
