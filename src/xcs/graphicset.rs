//! XCSの図形集合。

use super::table;

/// 未割り当ての符号位置を置き換える文字。
const REPLACEMENT: &str = "\u{FFFD}";

/// 追加記号集合で未割り当ての符号位置を置き換える文字。
const SYMBOL_REPLACEMENT: &str = "・";

/// 文字符号集合。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphicSet {
    /// 漢字、2バイト符号。
    Kanji,
    /// 英数、1バイト符号。
    Alnum,
    /// 平仮名、1バイト符号。
    Hira,
    /// 片仮名、1バイト符号。
    Kata,
    /// モザイクA、1バイト符号。
    MosaicA,
    /// モザイクB、1バイト符号。
    MosaicB,
    /// モザイクC、1バイト符号。
    MosaicC,
    /// モザイクD、1バイト符号。
    MosaicD,
    /// プロポーショナル英数、1バイト符号。
    PropAlnum,
    /// プロポーショナル平仮名、1バイト符号。
    PropHira,
    /// プロポーショナル片仮名、1バイト符号。
    PropKata,
    /// JIS X 0201 片仮名、1バイト符号。
    JisXKata,
    /// JIS互換漢字1面、2バイト符号。
    JisKanjiPlane1,
    /// JIS互換漢字2面、2バイト符号。
    JisKanjiPlane2,
    /// 追加記号、2バイト符号。
    ExtraSymbols,
    /// 1バイトの空集合。1バイトのDRCSやマクロの置き換え先。
    SingleByteEmpty,
    /// 2バイトの空集合。DRCS-0の置き換え先。
    DoubleByteEmpty,
}

impl GraphicSet {
    /// 集合の1符号が占めるバイト数。
    #[inline]
    pub fn width(self) -> usize {
        match self {
            GraphicSet::Kanji
            | GraphicSet::JisKanjiPlane1
            | GraphicSet::JisKanjiPlane2
            | GraphicSet::ExtraSymbols
            | GraphicSet::DoubleByteEmpty => 2,
            _ => 1,
        }
    }

    /// 終端符号`f`に対応する図形集合を返す。
    ///
    /// 未知の終端符号は1バイトの空集合になる。
    pub fn from_designator(f: u8) -> GraphicSet {
        match f {
            0x42 => GraphicSet::Kanji,
            0x4A => GraphicSet::Alnum,
            0x30 => GraphicSet::Hira,
            0x31 => GraphicSet::Kata,
            0x32 => GraphicSet::MosaicA,
            0x33 => GraphicSet::MosaicB,
            0x34 => GraphicSet::MosaicC,
            0x35 => GraphicSet::MosaicD,
            0x36 => GraphicSet::PropAlnum,
            0x37 => GraphicSet::PropHira,
            0x38 => GraphicSet::PropKata,
            0x49 => GraphicSet::JisXKata,
            0x39 => GraphicSet::JisKanjiPlane1,
            0x3A => GraphicSet::JisKanjiPlane2,
            0x3B => GraphicSet::ExtraSymbols,
            _ => GraphicSet::SingleByteEmpty,
        }
    }

    /// DRCSの終端符号`f`に対応する図形集合を返す。
    ///
    /// DRCSのグリフは伝送データで定義されるものでありここでは扱わないため、
    /// 幅だけを合わせた空集合になる。
    pub fn from_drcs_designator(f: u8) -> GraphicSet {
        match f {
            0x40 => GraphicSet::DoubleByteEmpty,
            _ => GraphicSet::SingleByteEmpty,
        }
    }

    /// 符号位置`(b1, b2)`の文字と消費するバイト数を返す。
    ///
    /// 1バイト集合では`b2`を使用しない。未割り当ての符号位置は
    /// 置き換え文字になり、消費するバイト数は集合の幅のままとなる。
    pub fn get(self, b1: u8, b2: u8) -> (&'static str, usize) {
        let s = match self {
            GraphicSet::Kanji | GraphicSet::JisKanjiPlane1 => table::kanji(b1, b2),
            GraphicSet::JisKanjiPlane2 => table::jis_plane2(b1, b2),
            GraphicSet::ExtraSymbols => {
                return (
                    table::extra_symbols(b1, b2).unwrap_or(SYMBOL_REPLACEMENT),
                    2,
                );
            }
            GraphicSet::Alnum | GraphicSet::PropAlnum => table::alnum(b1),
            GraphicSet::Hira | GraphicSet::PropHira => table::hira(b1),
            GraphicSet::Kata | GraphicSet::PropKata => table::kata(b1),
            GraphicSet::JisXKata => table::jis_x_kata(b1),
            GraphicSet::MosaicA
            | GraphicSet::MosaicB
            | GraphicSet::MosaicC
            | GraphicSet::MosaicD
            | GraphicSet::SingleByteEmpty
            | GraphicSet::DoubleByteEmpty => None,
        };
        (s.unwrap_or(REPLACEMENT), self.width())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kanji_get() {
        assert_eq!(GraphicSet::Kanji.get(0x33, 0x5A), ("楽", 2));
        assert_eq!(GraphicSet::Kanji.get(0x21, 0x21), ("　", 2));
    }

    #[test]
    fn test_extra_symbols_get() {
        assert_eq!(GraphicSet::ExtraSymbols.get(0x7D, 0x2C), ("㍻", 2));
        assert_eq!(GraphicSet::ExtraSymbols.get(0x7A, 0x56), ("【字】", 2));
        // 未割り当ての符号位置
        assert_eq!(GraphicSet::ExtraSymbols.get(0xFF, 0xFF), ("・", 2));
    }

    #[test]
    fn test_width() {
        assert_eq!(GraphicSet::Kanji.width(), 2);
        assert_eq!(GraphicSet::ExtraSymbols.width(), 2);
        assert_eq!(GraphicSet::DoubleByteEmpty.width(), 2);
        assert_eq!(GraphicSet::Hira.width(), 1);
        assert_eq!(GraphicSet::JisXKata.width(), 1);
        assert_eq!(GraphicSet::SingleByteEmpty.width(), 1);
    }

    #[test]
    fn test_from_designator() {
        assert_eq!(GraphicSet::from_designator(0x42), GraphicSet::Kanji);
        assert_eq!(GraphicSet::from_designator(0x4A), GraphicSet::Alnum);
        assert_eq!(GraphicSet::from_designator(0x30), GraphicSet::Hira);
        assert_eq!(GraphicSet::from_designator(0x31), GraphicSet::Kata);
        assert_eq!(GraphicSet::from_designator(0x38), GraphicSet::PropKata);
        assert_eq!(GraphicSet::from_designator(0x3B), GraphicSet::ExtraSymbols);
        assert_eq!(
            GraphicSet::from_designator(0x28),
            GraphicSet::SingleByteEmpty,
        );

        assert_eq!(
            GraphicSet::from_drcs_designator(0x40),
            GraphicSet::DoubleByteEmpty,
        );
        assert_eq!(
            GraphicSet::from_drcs_designator(0x41),
            GraphicSet::SingleByteEmpty,
        );
        assert_eq!(
            GraphicSet::from_drcs_designator(0x70),
            GraphicSet::SingleByteEmpty,
        );
    }

    #[test]
    fn test_empty_sets() {
        assert_eq!(GraphicSet::SingleByteEmpty.get(0x21, 0x00), ("\u{FFFD}", 1));
        assert_eq!(GraphicSet::DoubleByteEmpty.get(0x21, 0x21), ("\u{FFFD}", 2));
        assert_eq!(GraphicSet::MosaicA.get(0x40, 0x00), ("\u{FFFD}", 1));
    }
}
