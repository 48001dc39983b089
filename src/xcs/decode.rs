//! XCSの符号列の復号。

use super::graphicset::GraphicSet;
use super::{XcsError, APS, CC1000, CC1515, COL, CSI, ESC, FLC, HLC, LS0, LS1, MACRO, MSZ, NSZ,
            PAPF, POL, RPC, SP, SS2, SS3, SSZ, SZX, TIME, WMM};

/// [`XcsDecoder::transform`]の呼び出し結果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformResult {
    /// 入力をすべて処理した。
    Ok,

    /// 出力先に空きがない。
    ///
    /// 呼び出し側は出力先を広げて残りの入力で再度呼び出す。
    ShortDst,

    /// 入力が符号の途中で終わっている。
    ///
    /// 呼び出し側は未消費の入力を次の入力の先頭に連結して再度呼び出す。
    ShortSrc,

    /// 不正な符号列。
    ///
    /// 復号を続けるには[`XcsDecoder::reset`]が必要となる。
    Invalid(XcsError),
}

/// 1符号の読み取り結果。
enum Read {
    /// `&str`を出力して`usize`バイトを消費する。
    Emit(&'static str, usize),
    /// 出力なしで`usize`バイトを消費する。
    Skip(usize),
    /// 入力が符号の途中で終わっている。
    ShortSrc,
    /// 不正な符号列。
    Invalid(XcsError),
}

/// ARIBの外字符号化方式（XCS）の復号器。
///
/// G0～G3への指示、GL・GRへの呼び出し、シングルシフトと文字サイズを
/// 状態として持ち、[`transform`]の呼び出しをまたいで保持する。
/// 復号器の共有は想定しておらず、ひとつの符号列にひとつの復号器を使う。
///
/// [`transform`]: XcsDecoder::transform
#[derive(Debug, Clone)]
pub struct XcsDecoder {
    /// G0～G3に指示されている図形集合。
    g: [GraphicSet; 4],
    /// GLに呼び出されている符号要素（G0～G3のインデックス）。
    gl: usize,
    /// GRに呼び出されている符号要素（G0～G3のインデックス）。
    gr: usize,
    /// シングルシフトで次のGL読み取りにのみ使われる図形集合。
    ss: Option<GraphicSet>,
    /// SPを半角の空白として出力するかどうか。
    small_size: bool,
}

impl XcsDecoder {
    /// 初期状態の`XcsDecoder`を生成する。
    pub fn new() -> XcsDecoder {
        XcsDecoder {
            g: [
                GraphicSet::Kanji,
                GraphicSet::Alnum,
                GraphicSet::Hira,
                GraphicSet::Kata,
            ],
            gl: 0,
            gr: 2,
            ss: None,
            small_size: false,
        }
    }

    /// 状態を初期状態に戻す。
    #[inline]
    pub fn reset(&mut self) {
        *self = XcsDecoder::new();
    }

    /// GLに呼び出されている図形集合を返す。
    #[inline]
    pub fn gl(&self) -> GraphicSet {
        self.g[self.gl]
    }

    /// GRに呼び出されている図形集合を返す。
    #[inline]
    pub fn gr(&self) -> GraphicSet {
        self.g[self.gr]
    }

    /// `src`の符号を復号して`dst`にUTF-8で書き込む。
    ///
    /// 書き込んだバイト数と消費したバイト数、および[`TransformResult`]を
    /// 返す。`at_end`には`src`で入力が終わる場合に`true`を渡す。このとき
    /// 符号の途中で入力が終わっていると`ShortSrc`の代わりに`Invalid`が
    /// 返る。
    ///
    /// `ShortSrc`を返した符号は状態に影響を与えず消費もされないため、
    /// 未消費の入力を続きと連結して呼び出し直せば分割のない入力と
    /// 同じ結果が得られる。
    pub fn transform(
        &mut self,
        dst: &mut [u8],
        src: &[u8],
        at_end: bool,
    ) -> (usize, usize, TransformResult) {
        let mut n_dst = 0;
        let mut n_src = 0;
        let mut result = TransformResult::Ok;

        while n_src < src.len() {
            let b = src[n_src];
            let read = match b {
                // C0（SPを含む）
                _ if b <= SP => self.read_control(src, n_src, at_end),
                // GL
                _ if b <= 0x7E => self.read_gl(src, n_src),
                // C1
                _ if b <= CC1000 => self.read_control(src, n_src, at_end),
                // GR
                _ if b < CC1515 => self.read_gr(src, n_src),
                _ => Read::Invalid(XcsError::InvalidEncoding),
            };

            match read {
                Read::Emit(s, size) => {
                    if n_dst + s.len() > dst.len() {
                        result = TransformResult::ShortDst;
                        break;
                    }
                    dst[n_dst..n_dst + s.len()].copy_from_slice(s.as_bytes());
                    n_dst += s.len();

                    // シングルシフトはGLの読み取りの完了で消費される
                    if matches!(b, 0x21..=0x7E) {
                        self.ss = None;
                    }
                    n_src += size;
                }
                Read::Skip(size) => n_src += size,
                Read::ShortSrc => {
                    result = TransformResult::ShortSrc;
                    break;
                }
                Read::Invalid(e) => {
                    result = TransformResult::Invalid(e);
                    break;
                }
            }
        }

        if at_end && result == TransformResult::ShortSrc {
            result = TransformResult::Invalid(XcsError::InvalidEncoding);
        }
        (n_dst, n_src, result)
    }

    /// GL領域の符号を読み取る。
    ///
    /// シングルシフトが設定されていればその集合を使う。集合の消費は
    /// 出力の書き込みが成功してから`transform`側で行う。
    fn read_gl(&self, buf: &[u8], pos: usize) -> Read {
        let set = self.ss.unwrap_or(self.g[self.gl]);
        if set.width() == 2 && pos + 1 >= buf.len() {
            return Read::ShortSrc;
        }

        let (s, size) = set.get(buf[pos], param_or_nil(buf, pos, 1));
        Read::Emit(s, size)
    }

    /// GR領域の符号を読み取る。シングルシフトの影響は受けない。
    fn read_gr(&self, buf: &[u8], pos: usize) -> Read {
        let set = self.g[self.gr];
        if set.width() == 2 && pos + 1 >= buf.len() {
            return Read::ShortSrc;
        }

        let (s, size) = set.get(buf[pos] & 0x7F, param_or_nil(buf, pos, 1) & 0x7F);
        Read::Emit(s, size)
    }

    /// C0・C1領域の制御符号を読み取る。
    fn read_control(&mut self, buf: &[u8], pos: usize, at_end: bool) -> Read {
        match buf[pos] {
            LS1 => {
                self.gl = 1;
                Read::Skip(1)
            }
            LS0 => {
                self.gl = 0;
                Read::Skip(1)
            }
            PAPF => skip_with_params(buf, pos, 1),
            SS2 => {
                self.ss = Some(self.g[2]);
                Read::Skip(1)
            }
            ESC => self.read_esc(buf, pos),
            APS => skip_with_params(buf, pos, 2),
            SS3 => {
                self.ss = Some(self.g[3]);
                Read::Skip(1)
            }
            SP => Read::Emit(if self.small_size { " " } else { "　" }, 1),
            SSZ | MSZ => {
                self.small_size = true;
                Read::Skip(1)
            }
            NSZ => {
                self.small_size = false;
                Read::Skip(1)
            }
            SZX => match buf.get(pos + 1) {
                Some(&p1) => {
                    self.small_size = p1 == 0x60;
                    Read::Skip(2)
                }
                None => Read::ShortSrc,
            },
            COL => {
                let size = if param_or_nil(buf, pos, 1) == 0x20 { 3 } else { 2 };
                if pos + size > buf.len() {
                    Read::ShortSrc
                } else {
                    Read::Skip(size)
                }
            }
            FLC | POL | WMM | HLC | RPC => skip_with_params(buf, pos, 1),
            MACRO => {
                // 終了の符号まで読み飛ばす
                match buf[pos + 1..].iter().position(|&b| b == 0x4F) {
                    Some(i) => Read::Skip(1 + i + 1),
                    None => Read::ShortSrc,
                }
            }
            // CSIは未実装のため符号自体のみ消費する
            CSI => Read::Skip(1),
            TIME => {
                let Some(&p1) = buf.get(pos + 1) else {
                    return Read::ShortSrc;
                };
                if p1 == 0x20 {
                    skip_with_params(buf, pos, 2)
                } else {
                    // 0x40..=0x43の範囲外のバイトが引数として続く
                    let mut size = 2;
                    while pos + size < buf.len() && !(0x40..=0x43).contains(&buf[pos + size]) {
                        size += 1;
                    }
                    if pos + size == buf.len() && !at_end {
                        Read::ShortSrc
                    } else {
                        Read::Skip(size)
                    }
                }
            }
            b => {
                log::trace!("unhandled control code: {:02X}", b);
                Read::Skip(1)
            }
        }
    }

    /// エスケープシーケンスを読み取る。
    fn read_esc(&mut self, buf: &[u8], pos: usize) -> Read {
        let Some(&p1) = buf.get(pos + 1) else {
            return Read::ShortSrc;
        };

        match p1 {
            // 符号の指示
            0x24 | 0x28..=0x2B => {
                let (size, gi, gs, drcs) = designate_graphic_set(buf, pos);
                if pos + size > buf.len() {
                    return Read::ShortSrc;
                }

                self.g[gi] = if drcs {
                    GraphicSet::from_drcs_designator(gs)
                } else {
                    GraphicSet::from_designator(gs)
                };
                Read::Skip(size)
            }

            // LS2
            0x6E => {
                self.gl = 2;
                Read::Skip(2)
            }
            // LS3
            0x6F => {
                self.gl = 3;
                Read::Skip(2)
            }
            // LS1R
            0x7E => {
                self.gr = 1;
                Read::Skip(2)
            }
            // LS2R
            0x7D => {
                self.gr = 2;
                Read::Skip(2)
            }
            // LS3R
            0x7C => {
                self.gr = 3;
                Read::Skip(2)
            }

            _ => Read::Invalid(XcsError::InvalidEscParameter(p1)),
        }
    }
}

impl Default for XcsDecoder {
    fn default() -> XcsDecoder {
        XcsDecoder::new()
    }
}

/// `pos`の`n`バイト先のパラメータを返す。入力の終わりを越える場合は0x00を返す。
#[inline]
fn param_or_nil(buf: &[u8], pos: usize, n: usize) -> u8 {
    buf.get(pos + n).copied().unwrap_or(0x00)
}

/// `pos`の符号に`n`個のパラメータが続くものとして読み飛ばす。
fn skip_with_params(buf: &[u8], pos: usize, n: usize) -> Read {
    if pos + 1 + n > buf.len() {
        Read::ShortSrc
    } else {
        Read::Skip(1 + n)
    }
}

/// `pos`から始まる符号の指示を解釈する。
///
/// シーケンス全体のバイト数、指示先のG0～G3のインデックス、
/// 集合の終端符号、DRCSの指示かどうかを返す。
///
/// `ESC 0x24 0x28 F`の形式は元実装と互換の動作として終端符号`0x28`・
/// バイト数3を返す（本来は`F`と4バイトになるはずの箇所）。
fn designate_graphic_set(buf: &[u8], pos: usize) -> (usize, usize, u8, bool) {
    let p1 = param_or_nil(buf, pos, 1);
    match p1 {
        // 1バイト符号の集合
        0x28..=0x2B => {
            let gi = (p1 - 0x28) as usize;
            let p2 = param_or_nil(buf, pos, 2);
            if p2 == 0x20 {
                // DRCS
                (4, gi, param_or_nil(buf, pos, 3), true)
            } else {
                (3, gi, p2, false)
            }
        }

        // 2バイト符号の集合
        0x24 => {
            let p2 = param_or_nil(buf, pos, 2);
            match p2 {
                0x28..=0x2B => {
                    let gi = (p2 - 0x28) as usize;
                    let p3 = param_or_nil(buf, pos, 3);
                    if p3 == 0x20 {
                        // DRCS
                        (5, gi, param_or_nil(buf, pos, 4), true)
                    } else if p2 == 0x28 {
                        (3, gi, p2, false)
                    } else {
                        (4, gi, p3, false)
                    }
                }
                _ => (3, 0, p2, false),
            }
        }

        _ => (2, 0, 0, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xcs::decode;

    #[test]
    fn test_decode() {
        for (name, src, dst) in [
            (
                "HiraganaOnly",
                &[0xAA, 0xAB, 0xA2, 0xB5, 0xF3, 0xC8, 0xA4, 0xC3, 0xB7, 0xE7][..],
                "おかあさんといっしょ",
            ),
            (
                "KatakanaOnly",
                &[0x1B, 0x7C, 0xD1, 0xBA, 0xC9, 0xE9, 0xAF, 0xED, 0xB9][..],
                "パズドラクロス",
            ),
            (
                "AdditionalSymbols",
                &[
                    0xAA, 0xAB, 0xA2, 0xB5, 0xF3, 0xC8, 0xA4, 0xC3, 0xB7, 0xE7, 0x1B, 0x24, 0x3B,
                    0x7A, 0x56,
                ][..],
                "おかあさんといっしょ【字】",
            ),
            (
                "AlphanumericAndKatakana",
                &[0x0E, 0x45, 0x1D, 0x46, 0x1D, 0x6C, 0x32, 0x33, 0x35, 0x35][..],
                "Ｅテレ２３５５",
            ),
            (
                "Complex",
                &[
                    0x1B, 0x7C, 0xA2, 0xCB, 0xE1, 0x21, 0x21, 0x1B, 0x7D, 0xAA, 0xB8, 0xE3, 0xEB,
                    0x34, 0x5D, 0xFB, 0x31, 0x73, 0xA4, 0x4C, 0x73, 0x42, 0x2B, 0xFC, 0x1B, 0x24,
                    0x3B, 0x7A, 0x56,
                ][..],
                "アニメ　おじゃる丸「遠い約束」【字】",
            ),
        ] {
            assert_eq!(decode(src).as_deref(), Ok(dst), "{name}");
        }
    }

    #[test]
    fn test_decode_invalid() {
        let err = decode(&[0x1B, 0x00]).unwrap_err();
        assert_eq!(err, XcsError::InvalidEscParameter(0x00));
        assert_eq!(err.to_string(), "arib: ESC has invalid parameter 0x00");

        let err = decode(&[0xAA, 0xFF]).unwrap_err();
        assert_eq!(err, XcsError::InvalidEncoding);
        assert_eq!(
            err.to_string(),
            "arib: invalid external character set encoding",
        );
    }

    #[test]
    fn test_init() {
        let d = XcsDecoder::new();
        assert_eq!(d.g[0], GraphicSet::Kanji);
        assert_eq!(d.g[1], GraphicSet::Alnum);
        assert_eq!(d.g[2], GraphicSet::Hira);
        assert_eq!(d.g[3], GraphicSet::Kata);
        assert_eq!(d.gl(), GraphicSet::Kanji);
        assert_eq!(d.gr(), GraphicSet::Hira);
        assert!(d.ss.is_none());
        assert!(!d.small_size);
    }

    #[test]
    fn test_reset() {
        let src = [0xAA, 0xAB, 0xA2];
        let mut dst = [0u8; 64];

        let mut d = XcsDecoder::new();
        let (n1, _, r1) = d.transform(&mut dst, &src, true);
        assert_eq!(r1, TransformResult::Ok);
        let first = dst[..n1].to_vec();

        // 状態を変えてから初期化すると同じ入力が同じ出力になる
        let (_, _, r) = d.transform(&mut dst, &[0x1B, 0x7C, 0x88], true);
        assert_eq!(r, TransformResult::Ok);
        d.reset();
        assert_eq!(d.gl(), GraphicSet::Kanji);
        assert_eq!(d.gr(), GraphicSet::Hira);

        let (n2, _, r2) = d.transform(&mut dst, &src, true);
        assert_eq!(r2, TransformResult::Ok);
        assert_eq!(dst[..n2], *first);
    }

    #[test]
    fn test_read_esc() {
        struct Case {
            buf: &'static [u8],
            size: usize,
            gl: GraphicSet,
            gr: GraphicSet,
        }
        for (i, tc) in [
            Case {
                buf: &[0x1B, 0x6E],
                size: 2,
                gl: GraphicSet::Hira,
                gr: GraphicSet::Hira,
            },
            Case {
                buf: &[0x1B, 0x6F],
                size: 2,
                gl: GraphicSet::Kata,
                gr: GraphicSet::Hira,
            },
            Case {
                buf: &[0x1B, 0x7E],
                size: 2,
                gl: GraphicSet::Kanji,
                gr: GraphicSet::Alnum,
            },
            Case {
                buf: &[0x1B, 0x7D],
                size: 2,
                gl: GraphicSet::Kanji,
                gr: GraphicSet::Hira,
            },
            Case {
                buf: &[0x1B, 0x7C],
                size: 2,
                gl: GraphicSet::Kanji,
                gr: GraphicSet::Kata,
            },
            Case {
                buf: &[0x1B, 0x28, 0x38],
                size: 3,
                gl: GraphicSet::PropKata,
                gr: GraphicSet::Hira,
            },
        ]
        .into_iter()
        .enumerate()
        {
            let mut d = XcsDecoder::new();
            let Read::Skip(size) = d.read_esc(tc.buf, 0) else {
                panic!("{i}: readESC(0x{:02X?})", tc.buf);
            };
            assert_eq!(size, tc.size, "{i}");
            assert_eq!(d.gl(), tc.gl, "{i}");
            assert_eq!(d.gr(), tc.gr, "{i}");
        }

        let mut d = XcsDecoder::new();
        let Read::Invalid(e) = d.read_esc(&[0x1B, 0x00], 0) else {
            panic!("readESC(0x1B 0x00)");
        };
        assert_eq!(e, XcsError::InvalidEscParameter(0x00));
    }

    #[test]
    fn test_designate_graphic_set() {
        for (i, (buf, pos, size, gi, gs, drcs)) in [
            (&[0xAA, 0x1B, 0x28, 0x42][..], 1, 3, 0, 0x42, false),
            (&[0xAA, 0x1B, 0x29, 0x30][..], 1, 3, 1, 0x30, false),
            (&[0xAA, 0x1B, 0x2A, 0x31][..], 1, 3, 2, 0x31, false),
            (&[0xAA, 0x1B, 0x2B, 0x42][..], 1, 3, 3, 0x42, false),
            (&[0xAA, 0x1B, 0x28, 0x20, 0x41][..], 1, 4, 0, 0x41, true),
            (&[0xAA, 0x1B, 0x29, 0x20, 0x42][..], 1, 4, 1, 0x42, true),
            (&[0xAA, 0x1B, 0x2A, 0x20, 0x43][..], 1, 4, 2, 0x43, true),
            (&[0xAA, 0x1B, 0x2B, 0x20, 0x70][..], 1, 4, 3, 0x70, true),
            // 元実装互換：`ESC 0x24 0x28 F`は終端符号0x28・3バイトになる
            (&[0xAA, 0x1B, 0x24, 0x28, 0x42][..], 1, 3, 0, 0x28, false),
            (&[0xAA, 0x1B, 0x24, 0x29, 0x39][..], 1, 4, 1, 0x39, false),
            (&[0xAA, 0x1B, 0x24, 0x2A, 0x3A][..], 1, 4, 2, 0x3A, false),
            (&[0xAA, 0x1B, 0x24, 0x2B, 0x3B][..], 1, 4, 3, 0x3B, false),
            (&[0xAA, 0x1B, 0x24, 0x28, 0x20, 0x40][..], 1, 5, 0, 0x40, true),
            (&[0xAA, 0x1B, 0x24, 0x29, 0x20, 0x40][..], 1, 5, 1, 0x40, true),
            (&[0xAA, 0x1B, 0x24, 0x2A, 0x20, 0x40][..], 1, 5, 2, 0x40, true),
            (&[0xAA, 0x1B, 0x24, 0x2B, 0x20, 0x40][..], 1, 5, 3, 0x40, true),
        ]
        .into_iter()
        .enumerate()
        {
            assert_eq!(
                designate_graphic_set(buf, pos),
                (size, gi, gs, drcs),
                "{i}: designateGraphicSet(0x{buf:02X?}, {pos})",
            );
        }
    }

    #[test]
    fn test_param_or_nil() {
        for (i, (buf, pos, n, exp)) in [
            (&[0xAA, 0xAB, 0xAC][..], 0, 1, 0xAB),
            (&[0xAA, 0xAB, 0xAC][..], 0, 2, 0xAC),
            (&[0xAA, 0xAB, 0xAC][..], 0, 3, 0x00),
            (&[0xAA, 0xAB, 0xAC][..], 1, 1, 0xAC),
            (&[0xAA, 0xAB, 0xAC][..], 1, 2, 0x00),
            (&[0xAA, 0xAB, 0xAC][..], 1, 3, 0x00),
            (&[0xAA, 0xAB, 0xAC][..], 3, 1, 0x00),
            (&[0xAA, 0xAB, 0xAC][..], 4, 1, 0x00),
        ]
        .into_iter()
        .enumerate()
        {
            assert_eq!(param_or_nil(buf, pos, n), exp, "{i}");
        }
    }

    #[test]
    fn test_short_dst() {
        // 出力先を広げながら呼び出し直すと分割のない出力と一致する
        let src = [0xAA, 0xAB, 0xA2];
        let mut d = XcsDecoder::new();
        let mut dst = [0u8; 4];

        let (n_dst, n_src, result) = d.transform(&mut dst, &src, true);
        assert_eq!(result, TransformResult::ShortDst);
        assert_eq!(n_dst, 3);
        assert_eq!(n_src, 1);
        assert_eq!(&dst[..n_dst], "お".as_bytes());

        let mut dst = [0u8; 16];
        let (n_dst, n_src2, result) = d.transform(&mut dst, &src[n_src..], true);
        assert_eq!(result, TransformResult::Ok);
        assert_eq!(n_src + n_src2, src.len());
        assert_eq!(&dst[..n_dst], "かあ".as_bytes());
    }

    #[test]
    fn test_short_src() {
        let mut dst = [0u8; 64];

        // 2バイト符号の途中で入力が切れている
        let mut d = XcsDecoder::new();
        let (n_dst, n_src, result) = d.transform(&mut dst, &[0xAA, 0x34], false);
        assert_eq!(result, TransformResult::ShortSrc);
        assert_eq!(n_src, 1);
        assert_eq!(&dst[..n_dst], "お".as_bytes());

        // 未消費部分を続きと連結すれば復号が継続する
        let (n_dst, n_src, result) = d.transform(&mut dst, &[0x34, 0x5D], true);
        assert_eq!(result, TransformResult::Ok);
        assert_eq!(n_src, 2);
        assert_eq!(&dst[..n_dst], "丸".as_bytes());

        // エスケープシーケンスの途中で入力が切れている
        let mut d = XcsDecoder::new();
        let (_, n_src, result) = d.transform(&mut dst, &[0x1B, 0x24], false);
        assert_eq!(result, TransformResult::ShortSrc);
        assert_eq!(n_src, 0);
        // 状態は変化していない
        assert_eq!(d.gl(), GraphicSet::Kanji);

        let (n_dst, _, result) = d.transform(&mut dst, &[0x1B, 0x24, 0x3B, 0x7A, 0x56], true);
        assert_eq!(result, TransformResult::Ok);
        assert_eq!(&dst[..n_dst], "【字】".as_bytes());

        // at_endではShortSrcがInvalidになる
        let mut d = XcsDecoder::new();
        let (_, _, result) = d.transform(&mut dst, &[0x34], true);
        assert_eq!(
            result,
            TransformResult::Invalid(XcsError::InvalidEncoding),
        );
    }

    #[test]
    fn test_single_shift() {
        // シングルシフトは次のGL読み取りだけに働く
        assert_eq!(decode(&[0x0E, 0x1D, 0x46, 0x46]).as_deref(), Ok("テＦ"));

        // GRの読み取りはシングルシフトの影響を受けず、消費もしない
        assert_eq!(decode(&[0x19, 0xD1, 0x21]).as_deref(), Ok("ぱぁ"));
    }

    #[test]
    fn test_gr_single_byte_width() {
        // 幅1の集合のGR読み取りは後続があっても1バイトしか消費しない
        let mut d = XcsDecoder::new();
        let mut dst = [0u8; 8];
        let (_, n_src, result) = d.transform(&mut dst, &[0xAA], true);
        assert_eq!(result, TransformResult::Ok);
        assert_eq!(n_src, 1);

        let (n_dst, n_src, result) = d.transform(&mut dst, &[0xAA, 0xAB], true);
        assert_eq!(result, TransformResult::Ok);
        assert_eq!(n_src, 2);
        assert_eq!(&dst[..n_dst], "おか".as_bytes());
    }

    #[test]
    fn test_char_size() {
        // SSZ・MSZで半角の空白、NSZで全角の空白に戻る
        assert_eq!(decode(&[0x20]).as_deref(), Ok("　"));
        assert_eq!(decode(&[0x88, 0x20]).as_deref(), Ok(" "));
        assert_eq!(decode(&[0x89, 0x20]).as_deref(), Ok(" "));
        assert_eq!(decode(&[0x88, 0x8A, 0x20]).as_deref(), Ok("　"));

        // SZXは0x60で小型、それ以外で通常
        assert_eq!(decode(&[0x8B, 0x60, 0x20]).as_deref(), Ok(" "));
        assert_eq!(decode(&[0x88, 0x8B, 0x41, 0x20]).as_deref(), Ok("　"));
    }

    #[test]
    fn test_skip_controls() {
        // PAPF・APS・COL・FLCなどはパラメータごと読み飛ばされる
        assert_eq!(decode(&[0x16, 0x01, 0xAA]).as_deref(), Ok("お"));
        assert_eq!(decode(&[0x1C, 0x01, 0x02, 0xAA]).as_deref(), Ok("お"));
        assert_eq!(decode(&[0x90, 0x48, 0xAA]).as_deref(), Ok("お"));
        assert_eq!(decode(&[0x90, 0x20, 0x01, 0xAA]).as_deref(), Ok("お"));
        assert_eq!(decode(&[0x91, 0x40, 0xAA]).as_deref(), Ok("お"));

        // CSIは符号自体のみ消費する
        assert_eq!(decode(&[0x9B, 0xAA]).as_deref(), Ok("お"));

        // MACROは終了の符号まで読み飛ばす
        assert_eq!(decode(&[0x95, 0x40, 0x21, 0x4F, 0xAA]).as_deref(), Ok("お"));

        // TIMEは0x40..=0x43の直前まで引数を読み飛ばす
        assert_eq!(decode(&[0x9D, 0x20, 0x3F, 0xAA]).as_deref(), Ok("お"));
        assert_eq!(decode(&[0x9D, 0x29, 0x30, 0x31, 0x40, 0x2B]).as_deref(), Ok("姓"));
    }

    #[test]
    fn test_drcs_designation() {
        // DRCSの指示は置き換え文字の空集合になる
        let mut d = XcsDecoder::new();
        let mut dst = [0u8; 16];
        let (n_dst, _, result) = d.transform(&mut dst, &[0x1B, 0x28, 0x20, 0x41, 0x45], true);
        assert_eq!(result, TransformResult::Ok);
        assert_eq!(d.gl(), GraphicSet::SingleByteEmpty);
        assert_eq!(&dst[..n_dst], "\u{FFFD}".as_bytes());
    }
}
