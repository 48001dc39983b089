//! SIの記述子のビュー。
//!
//! 各ビューはタグと記述子長を含む記述子全体のバイト列を保持し、
//! フィールドはアクセサで読み取る。文字を含むフィールドは
//! [`crate::xcs::decode`]でUTF-8の文字列になる。

use thiserror::Error;

use crate::lang::LangCode;
use crate::psi::Descriptor;
use crate::utils::BytesExt;
use crate::xcs::{self, XcsError};

/// 記述子の変換で発生するエラー。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// タグが対象の記述子のものではない。
    #[error("0x{tag:02X} is not a tag for {name}")]
    WrongTag {
        /// 実際のタグ。
        tag: u8,
        /// 変換しようとした記述子の名前。
        name: &'static str,
    },
}

/// タグを検査する記述子の変換と`TAG`定数を実装する。
macro_rules! impl_from_descriptor {
    ($type:ident, $tag:expr, $name:literal) => {
        impl<'a> $type<'a> {
            #[doc = concat!("`", $name, "`のタグ。")]
            pub const TAG: u8 = $tag;

            #[doc = concat!("`descriptor`を`", $name, "`として解釈する。")]
            ///
            /// タグが一致しない場合は[`DescriptorError::WrongTag`]を返す。
            pub fn from_descriptor(
                descriptor: Descriptor<'a>,
            ) -> Result<$type<'a>, DescriptorError> {
                if descriptor.tag() != Self::TAG {
                    return Err(DescriptorError::WrongTag {
                        tag: descriptor.tag(),
                        name: $name,
                    });
                }
                Ok($type(descriptor.as_bytes()))
            }
        }
    };
}

/// サービスリスト記述子（service_list_descriptor）のビュー。
#[derive(Debug, Clone, Copy)]
pub struct ServiceListDescriptor<'a>(&'a [u8]);

impl_from_descriptor!(ServiceListDescriptor, 0x41, "service_list_descriptor");

impl<'a> ServiceListDescriptor<'a> {
    /// サービスを列挙する。
    pub fn services(&self) -> impl Iterator<Item = ServiceListService<'a>> + 'a {
        self.0[2..].chunks_exact(3).map(ServiceListService)
    }
}

/// サービスリスト記述子に含まれるサービス（ビュー）。
#[derive(Debug, Clone, Copy)]
pub struct ServiceListService<'a>(&'a [u8]);

impl<'a> ServiceListService<'a> {
    /// サービス識別。
    #[inline]
    pub fn service_id(&self) -> u16 {
        self.0[0..=1].read_be_16()
    }

    /// サービス形式種別。
    #[inline]
    pub fn service_type(&self) -> u8 {
        self.0[2]
    }
}

/// 衛星分配システム記述子（satellite_delivery_system_descriptor）のビュー。
#[derive(Debug, Clone, Copy)]
pub struct SatelliteDeliverySystemDescriptor<'a>(&'a [u8]);

impl_from_descriptor!(
    SatelliteDeliverySystemDescriptor,
    0x43,
    "satellite_delivery_system_descriptor"
);

impl<'a> SatelliteDeliverySystemDescriptor<'a> {
    /// 周波数。BCD8桁で、5桁目以降が小数点以下となるGHz単位
    /// （例：012.73300GHz＝1273300）。
    #[inline]
    pub fn frequency(&self) -> u32 {
        self.0[2..].read_bcd(8)
    }

    /// 軌道位置。BCD4桁で、4桁目が小数点以下となる度単位
    /// （例：144.0度＝1440）。
    #[inline]
    pub fn orbital_position(&self) -> u16 {
        self.0[6..].read_bcd(4) as u16
    }

    /// 東経か西経かを示すフラグ。
    #[inline]
    pub fn west_east_flag(&self) -> bool {
        self.0[8] & 0b1000_0000 != 0
    }

    /// 偏波（2ビット）。
    #[inline]
    pub fn polarisation(&self) -> u8 {
        (self.0[8] & 0b0110_0000) >> 5
    }

    /// 変調方式（5ビット）。
    #[inline]
    pub fn modulation(&self) -> u8 {
        self.0[8] & 0b0001_1111
    }

    /// シンボルレート。BCD7桁で、5桁目以降が小数点以下となる
    /// Msymbol/s単位（例：021.0960＝210960）。
    #[inline]
    pub fn symbol_rate(&self) -> u32 {
        self.0[9..].read_bcd(7)
    }

    /// 内符号のFEC（4ビット）。
    #[inline]
    pub fn fec_inner(&self) -> u8 {
        self.0[12] & 0b0000_1111
    }
}

/// サービス記述子（service_descriptor）のビュー。
#[derive(Debug, Clone, Copy)]
pub struct ServiceDescriptor<'a>(&'a [u8]);

impl_from_descriptor!(ServiceDescriptor, 0x48, "service_descriptor");

impl<'a> ServiceDescriptor<'a> {
    /// サービス形式種別。
    #[inline]
    pub fn service_type(&self) -> u8 {
        self.0[2]
    }

    /// 事業者名の長さ。
    #[inline]
    pub fn provider_name_length(&self) -> usize {
        self.0[3] as usize
    }

    /// 事業者名。
    pub fn provider_name(&self) -> Result<String, XcsError> {
        xcs::decode(&self.0[4..4 + self.provider_name_length()])
    }

    /// サービス名の長さ。
    #[inline]
    pub fn name_length(&self) -> usize {
        self.0[4 + self.provider_name_length()] as usize
    }

    /// サービス名。
    pub fn name(&self) -> Result<String, XcsError> {
        let pos = 4 + self.provider_name_length() + 1;
        xcs::decode(&self.0[pos..pos + self.name_length()])
    }
}

/// 短形式イベント記述子（short_event_descriptor）のビュー。
#[derive(Debug, Clone, Copy)]
pub struct ShortEventDescriptor<'a>(&'a [u8]);

impl_from_descriptor!(ShortEventDescriptor, 0x4D, "short_event_descriptor");

impl<'a> ShortEventDescriptor<'a> {
    /// ISO 639言語コード。
    #[inline]
    pub fn iso_639_language_code(&self) -> LangCode {
        LangCode::read(&self.0[2..])
    }

    /// イベント名の長さ。
    #[inline]
    pub fn event_name_length(&self) -> usize {
        self.0[5] as usize
    }

    /// イベント名。
    pub fn event_name(&self) -> Result<String, XcsError> {
        xcs::decode(&self.0[6..6 + self.event_name_length()])
    }

    /// 短形式イベントの説明の長さ。
    #[inline]
    pub fn text_length(&self) -> usize {
        self.0[6 + self.event_name_length()] as usize
    }

    /// 短形式イベントの説明。
    pub fn text(&self) -> Result<String, XcsError> {
        let pos = 6 + self.event_name_length() + 1;
        xcs::decode(&self.0[pos..pos + self.text_length()])
    }
}

/// コンポーネント記述子（component_descriptor）のビュー。
#[derive(Debug, Clone, Copy)]
pub struct ComponentDescriptor<'a>(&'a [u8]);

impl_from_descriptor!(ComponentDescriptor, 0x50, "component_descriptor");

impl<'a> ComponentDescriptor<'a> {
    /// コンポーネント内容（4ビット）。
    #[inline]
    pub fn stream_content(&self) -> u8 {
        self.0[2] & 0b0000_1111
    }

    /// コンポーネント種別。
    #[inline]
    pub fn component_type(&self) -> u8 {
        self.0[3]
    }

    /// コンポーネントタグ。
    #[inline]
    pub fn component_tag(&self) -> u8 {
        self.0[4]
    }

    /// ISO 639言語コード。
    #[inline]
    pub fn iso_639_language_code(&self) -> LangCode {
        LangCode::read(&self.0[5..])
    }

    /// コンポーネント記述。記述子の末尾まで続く。
    pub fn text(&self) -> Result<String, XcsError> {
        xcs::decode(&self.0[8..])
    }
}

/// コンテント記述子（content_descriptor）のビュー。
#[derive(Debug, Clone, Copy)]
pub struct ContentDescriptor<'a>(&'a [u8]);

impl_from_descriptor!(ContentDescriptor, 0x54, "content_descriptor");

impl<'a> ContentDescriptor<'a> {
    /// ジャンルを列挙する。
    pub fn nibbles(&self) -> impl Iterator<Item = Nibble<'a>> + 'a {
        self.0[2..].chunks_exact(2).map(Nibble)
    }
}

/// イベントのジャンル（ビュー）。
#[derive(Debug, Clone, Copy)]
pub struct Nibble<'a>(&'a [u8]);

impl<'a> Nibble<'a> {
    /// ジャンル1（大分類）。
    #[inline]
    pub fn content_nibble_level_1(&self) -> u8 {
        (self.0[0] & 0b1111_0000) >> 4
    }

    /// ジャンル2（中分類）。
    #[inline]
    pub fn content_nibble_level_2(&self) -> u8 {
        self.0[0] & 0b0000_1111
    }

    /// 事業者定義のジャンル1。
    #[inline]
    pub fn user_nibble_1(&self) -> u8 {
        (self.0[1] & 0b1111_0000) >> 4
    }

    /// 事業者定義のジャンル2。
    #[inline]
    pub fn user_nibble_2(&self) -> u8 {
        self.0[1] & 0b0000_1111
    }
}

/// イベントグループ記述子（event_group_descriptor）のビュー。
#[derive(Debug, Clone, Copy)]
pub struct EventGroupDescriptor<'a>(&'a [u8]);

impl_from_descriptor!(EventGroupDescriptor, 0xD6, "event_group_descriptor");

impl<'a> EventGroupDescriptor<'a> {
    /// グループ種別（4ビット）。
    #[inline]
    pub fn group_type(&self) -> u8 {
        (self.0[2] & 0b1111_0000) >> 4
    }

    /// イベントの数（4ビット）。
    #[inline]
    pub fn event_count(&self) -> usize {
        (self.0[2] & 0b0000_1111) as usize
    }

    /// イベントを列挙する。記述子の残りをイベントの数で均等に分ける。
    pub fn events(&self) -> impl Iterator<Item = EventGroupEvent<'a>> + 'a {
        let rest = &self.0[3..];
        let size = match self.event_count() {
            0 => rest.len().max(1),
            n => rest.len() / n,
        };
        let group_type = self.group_type();
        rest.chunks_exact(size.max(1))
            .map(move |data| EventGroupEvent { data, group_type })
    }
}

/// イベントグループ記述子に含まれるイベント（ビュー）。
#[derive(Debug, Clone, Copy)]
pub struct EventGroupEvent<'a> {
    data: &'a [u8],
    group_type: u8,
}

impl<'a> EventGroupEvent<'a> {
    /// サービス識別。
    #[inline]
    pub fn service_id(&self) -> u16 {
        self.data[0..=1].read_be_16()
    }

    /// イベント識別。
    #[inline]
    pub fn event_id(&self) -> u16 {
        self.data[2..=3].read_be_16()
    }

    /// 他ネットワークの関連イベントを列挙する。
    ///
    /// グループ種別が4または5（イベントリレー）以外では空になる。
    pub fn related_events(&self) -> impl Iterator<Item = RelatedEvent<'a>> + 'a {
        let rest = if matches!(self.group_type, 4 | 5) {
            &self.data[4..]
        } else {
            &[]
        };
        rest.chunks_exact(8).map(RelatedEvent)
    }

    /// プライベートデータ。
    ///
    /// グループ種別が4または5（イベントリレー）の場合は`None`になる。
    pub fn private_data_bytes(&self) -> Option<&'a [u8]> {
        if matches!(self.group_type, 4 | 5) {
            None
        } else {
            Some(&self.data[4..])
        }
    }
}

/// イベントグループ記述子に含まれる他ネットワークの関連イベント（ビュー）。
#[derive(Debug, Clone, Copy)]
pub struct RelatedEvent<'a>(&'a [u8]);

impl<'a> RelatedEvent<'a> {
    /// オリジナルネットワーク識別。
    #[inline]
    pub fn original_network_id(&self) -> u16 {
        self.0[0..=1].read_be_16()
    }

    /// トランスポートストリーム識別。
    #[inline]
    pub fn transport_stream_id(&self) -> u16 {
        self.0[2..=3].read_be_16()
    }

    /// サービス識別。
    #[inline]
    pub fn service_id(&self) -> u16 {
        self.0[4..=5].read_be_16()
    }

    /// イベント識別。
    #[inline]
    pub fn event_id(&self) -> u16 {
        self.0[6..=7].read_be_16()
    }
}

/// デジタルコピー制御記述子（digital_copy_control_descriptor）のビュー。
#[derive(Debug, Clone, Copy)]
pub struct DigitalCopyControlDescriptor<'a>(&'a [u8]);

impl_from_descriptor!(
    DigitalCopyControlDescriptor,
    0xC1,
    "digital_copy_control_descriptor"
);

impl<'a> DigitalCopyControlDescriptor<'a> {
    /// デジタルコピー制御情報（2ビット）。
    #[inline]
    pub fn digital_recording_control_data(&self) -> u8 {
        (self.0[2] & 0b1100_0000) >> 6
    }

    /// 最大伝送レートの有無。
    #[inline]
    pub fn maximum_bitrate_flag(&self) -> bool {
        self.0[2] & 0b0010_0000 != 0
    }

    /// コンポーネントごとの制御の有無。
    #[inline]
    pub fn component_control_flag(&self) -> bool {
        self.0[2] & 0b0001_0000 != 0
    }

    /// 事業者定義の領域（4ビット）。
    #[inline]
    pub fn user_defined(&self) -> u8 {
        self.0[2] & 0b0000_1111
    }

    /// 最大伝送レート。
    pub fn maximum_bitrate(&self) -> Option<u8> {
        self.maximum_bitrate_flag().then(|| self.0[3])
    }

    /// コンポーネント制御の長さ。最大伝送レートの後に置かれる。
    pub fn component_control_length(&self) -> Option<u8> {
        let pos = 3 + usize::from(self.maximum_bitrate_flag());
        self.component_control_flag().then(|| self.0[pos])
    }

    /// コンポーネントごとの制御を列挙する。
    pub fn components(&self) -> DigitalCopyControlComponentIter<'a> {
        let pos = 3
            + usize::from(self.maximum_bitrate_flag())
            + usize::from(self.component_control_flag());
        DigitalCopyControlComponentIter(self.0.get(pos..).unwrap_or(&[]))
    }
}

/// デジタルコピー制御記述子のコンポーネントを列挙するイテレーター。
#[derive(Debug, Clone)]
pub struct DigitalCopyControlComponentIter<'a>(&'a [u8]);

impl<'a> Iterator for DigitalCopyControlComponentIter<'a> {
    type Item = DigitalCopyControlComponent<'a>;

    fn next(&mut self) -> Option<DigitalCopyControlComponent<'a>> {
        if self.0.is_empty() {
            return None;
        }
        if self.0.len() < 2 {
            log::debug!("invalid DigitalCopyControlComponent");
            self.0 = &[];
            return None;
        }

        let size = if self.0[1] & 0b0010_0000 != 0 { 3 } else { 2 };
        let Some((data, rem)) = self.0.split_at_checked(size) else {
            log::debug!("invalid DigitalCopyControlComponent length");
            self.0 = &[];
            return None;
        };

        self.0 = rem;
        Some(DigitalCopyControlComponent(data))
    }
}

impl std::iter::FusedIterator for DigitalCopyControlComponentIter<'_> {}

/// デジタルコピー制御記述子のコンポーネント（ビュー）。
#[derive(Debug, Clone, Copy)]
pub struct DigitalCopyControlComponent<'a>(&'a [u8]);

impl<'a> DigitalCopyControlComponent<'a> {
    /// コンポーネントタグ。
    #[inline]
    pub fn component_tag(&self) -> u8 {
        self.0[0]
    }

    /// デジタルコピー制御情報（2ビット）。
    #[inline]
    pub fn digital_recording_control_data(&self) -> u8 {
        (self.0[1] & 0b1100_0000) >> 6
    }

    /// 最大伝送レートの有無。
    #[inline]
    pub fn maximum_bitrate_flag(&self) -> bool {
        self.0[1] & 0b0010_0000 != 0
    }

    /// 最大伝送レート。
    pub fn maximum_bitrate(&self) -> Option<u8> {
        self.maximum_bitrate_flag().then(|| self.0[2])
    }
}

/// 音声コンポーネント記述子（audio_component_descriptor）のビュー。
#[derive(Debug, Clone, Copy)]
pub struct AudioComponentDescriptor<'a>(&'a [u8]);

impl_from_descriptor!(
    AudioComponentDescriptor,
    0xC4,
    "audio_component_descriptor"
);

impl<'a> AudioComponentDescriptor<'a> {
    /// コンポーネント内容（4ビット）。
    #[inline]
    pub fn stream_content(&self) -> u8 {
        self.0[2] & 0b0000_1111
    }

    /// コンポーネント種別。
    #[inline]
    pub fn component_type(&self) -> u8 {
        self.0[3]
    }

    /// コンポーネントタグ。
    #[inline]
    pub fn component_tag(&self) -> u8 {
        self.0[4]
    }

    /// ストリーム形式種別。
    #[inline]
    pub fn stream_type(&self) -> u8 {
        self.0[5]
    }

    /// サイマルキャストグループ識別。
    #[inline]
    pub fn simulcast_group_tag(&self) -> u8 {
        self.0[6]
    }

    /// 2言語多重の有無。
    #[inline]
    pub fn es_multi_lingual_flag(&self) -> bool {
        self.0[7] & 0b1000_0000 != 0
    }

    /// 主コンポーネントかどうか。
    #[inline]
    pub fn main_component_flag(&self) -> bool {
        self.0[7] & 0b0100_0000 != 0
    }

    /// 音質表示（2ビット）。
    #[inline]
    pub fn quality_indicator(&self) -> u8 {
        (self.0[7] & 0b0011_0000) >> 4
    }

    /// サンプリング周波数（3ビット）。
    #[inline]
    pub fn sampling_rate(&self) -> u8 {
        (self.0[7] & 0b0000_1110) >> 1
    }

    /// ISO 639言語コード。
    #[inline]
    pub fn iso_639_language_code(&self) -> LangCode {
        LangCode::read(&self.0[8..])
    }

    /// 2言語多重の場合の第2言語のISO 639言語コード。
    pub fn iso_639_language_code_2(&self) -> Option<LangCode> {
        self.es_multi_lingual_flag()
            .then(|| LangCode::read(&self.0[11..]))
    }

    /// 音声コンポーネント記述。記述子の末尾まで続く。
    pub fn text(&self) -> Result<String, XcsError> {
        let pos = if self.es_multi_lingual_flag() { 14 } else { 11 };
        xcs::decode(&self.0[pos..])
    }
}

/// データコンテント記述子（data_content_descriptor）のビュー。
#[derive(Debug, Clone, Copy)]
pub struct DataContentDescriptor<'a>(&'a [u8]);

impl_from_descriptor!(DataContentDescriptor, 0xC7, "data_content_descriptor");

impl<'a> DataContentDescriptor<'a> {
    /// データ符号化方式識別。
    #[inline]
    pub fn data_component_id(&self) -> u16 {
        self.0[2..=3].read_be_16()
    }

    /// エントリーコンポーネント。
    #[inline]
    pub fn entry_component(&self) -> u8 {
        self.0[4]
    }

    /// セレクタ領域の長さ。
    #[inline]
    pub fn selector_length(&self) -> usize {
        self.0[5] as usize
    }

    /// セレクタ領域。
    #[inline]
    pub fn selector_bytes(&self) -> &'a [u8] {
        &self.0[6..6 + self.selector_length()]
    }

    /// 参照するコンポーネントの数。
    #[inline]
    pub fn num_of_component_ref(&self) -> usize {
        self.0[6 + self.selector_length()] as usize
    }

    fn offset_component_refs(&self) -> usize {
        6 + self.selector_length() + 1
    }

    /// 参照するコンポーネントのタグ。
    #[inline]
    pub fn component_refs(&self) -> &'a [u8] {
        let pos = self.offset_component_refs();
        &self.0[pos..pos + self.num_of_component_ref()]
    }

    /// ISO 639言語コード。
    #[inline]
    pub fn iso_639_language_code(&self) -> LangCode {
        LangCode::read(&self.0[self.offset_component_refs() + self.num_of_component_ref()..])
    }

    /// データコンテント記述の長さ。
    #[inline]
    pub fn text_length(&self) -> usize {
        self.0[self.offset_component_refs() + self.num_of_component_ref() + 3] as usize
    }

    /// データコンテント記述。
    pub fn text(&self) -> Result<String, XcsError> {
        let pos = self.offset_component_refs() + self.num_of_component_ref() + 3 + 1;
        xcs::decode(&self.0[pos..pos + self.text_length()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::psi::descriptors;

    fn first(data: &[u8]) -> Descriptor<'_> {
        descriptors(data).next().unwrap()
    }

    #[test]
    fn test_wrong_tag() {
        let data = [0x54, 0x02, 0x30, 0xFF];
        let err = ShortEventDescriptor::from_descriptor(first(&data)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "0x54 is not a tag for short_event_descriptor",
        );

        let err = ServiceDescriptor::from_descriptor(first(&data)).unwrap_err();
        assert_eq!(err.to_string(), "0x54 is not a tag for service_descriptor");
    }

    #[test]
    fn test_service_list_descriptor() {
        let data = [0x41, 0x06, 0x04, 0x08, 0x01, 0x04, 0x09, 0xA1];
        let d = ServiceListDescriptor::from_descriptor(first(&data)).unwrap();

        let services: Vec<_> = d.services().collect();
        assert_eq!(services.len(), 2);
        assert_eq!(services[0].service_id(), 1032);
        assert_eq!(services[0].service_type(), 0x01);
        assert_eq!(services[1].service_id(), 1033);
        assert_eq!(services[1].service_type(), 0xA1);
    }

    #[test]
    fn test_short_event_descriptor() {
        #[rustfmt::skip]
        let data = [
            0x4D, 0x13,
            0x6A, 0x70, 0x6E,
            0x09, 0xAA, 0xAB, 0xA2, 0xB5, 0xF3, 0xC8, 0xA4, 0xC3, 0xB7,
            0x05, 0x1B, 0x7C, 0xD1, 0xBA, 0xC9,
        ];
        let d = ShortEventDescriptor::from_descriptor(first(&data)).unwrap();
        assert_eq!(d.iso_639_language_code(), LangCode::JPN);
        assert_eq!(d.event_name_length(), 9);
        assert_eq!(d.event_name().unwrap(), "おかあさんといっし");
        assert_eq!(d.text_length(), 5);
        assert_eq!(d.text().unwrap(), "パズド");
    }

    #[test]
    fn test_component_descriptor() {
        let data = [0x50, 0x07, 0x01, 0xB3, 0x00, 0x6A, 0x70, 0x6E, 0xAA];
        let d = ComponentDescriptor::from_descriptor(first(&data)).unwrap();
        assert_eq!(d.stream_content(), 0x01);
        assert_eq!(d.component_type(), 0xB3);
        assert_eq!(d.component_tag(), 0x00);
        assert_eq!(d.iso_639_language_code(), LangCode::JPN);
        assert_eq!(d.text().unwrap(), "お");
    }

    #[test]
    fn test_content_descriptor() {
        let data = [0x54, 0x04, 0x30, 0xFF, 0x71, 0x23];
        let d = ContentDescriptor::from_descriptor(first(&data)).unwrap();

        let nibbles: Vec<_> = d.nibbles().collect();
        assert_eq!(nibbles.len(), 2);
        assert_eq!(nibbles[0].content_nibble_level_1(), 0x3);
        assert_eq!(nibbles[0].content_nibble_level_2(), 0x0);
        assert_eq!(nibbles[0].user_nibble_1(), 0xF);
        assert_eq!(nibbles[0].user_nibble_2(), 0xF);
        assert_eq!(nibbles[1].content_nibble_level_1(), 0x7);
        assert_eq!(nibbles[1].content_nibble_level_2(), 0x1);
        assert_eq!(nibbles[1].user_nibble_1(), 0x2);
        assert_eq!(nibbles[1].user_nibble_2(), 0x3);
    }

    #[test]
    fn test_event_group_descriptor() {
        // グループ種別1（イベント共有）はプライベートデータを持つ
        let data = [0xD6, 0x09, 0x11, 0x04, 0x08, 0x00, 0x01, 0xDE, 0xAD, 0xBE, 0xEF];
        let d = EventGroupDescriptor::from_descriptor(first(&data)).unwrap();
        assert_eq!(d.group_type(), 1);
        assert_eq!(d.event_count(), 1);

        let events: Vec<_> = d.events().collect();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].service_id(), 1032);
        assert_eq!(events[0].event_id(), 1);
        assert_eq!(events[0].related_events().count(), 0);
        assert_eq!(
            events[0].private_data_bytes(),
            Some(&[0xDE, 0xAD, 0xBE, 0xEF][..]),
        );

        // グループ種別4（イベントリレー）は関連イベントを持つ
        #[rustfmt::skip]
        let data = [
            0xD6, 0x0D, 0x41,
            0x04, 0x08, 0x00, 0x01,
            0x7F, 0xE1, 0x7F, 0xE2, 0x04, 0x18, 0x00, 0x02,
        ];
        let d = EventGroupDescriptor::from_descriptor(first(&data)).unwrap();
        assert_eq!(d.group_type(), 4);

        let events: Vec<_> = d.events().collect();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].private_data_bytes(), None);

        let related: Vec<_> = events[0].related_events().collect();
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].original_network_id(), 32737);
        assert_eq!(related[0].transport_stream_id(), 32738);
        assert_eq!(related[0].service_id(), 1048);
        assert_eq!(related[0].event_id(), 2);
    }

    #[test]
    fn test_digital_copy_control_descriptor() {
        #[rustfmt::skip]
        let data = [
            0xC1, 0x08,
            0x70, 0x5C, 0x05,
            0x10, 0x00,
            0x11, 0x20, 0x40,
        ];
        let d = DigitalCopyControlDescriptor::from_descriptor(first(&data)).unwrap();
        assert_eq!(d.digital_recording_control_data(), 1);
        assert!(d.maximum_bitrate_flag());
        assert!(d.component_control_flag());
        assert_eq!(d.user_defined(), 0);
        assert_eq!(d.maximum_bitrate(), Some(0x5C));
        assert_eq!(d.component_control_length(), Some(0x05));

        let components: Vec<_> = d.components().collect();
        assert_eq!(components.len(), 2);
        assert_eq!(components[0].component_tag(), 0x10);
        assert_eq!(components[0].digital_recording_control_data(), 0);
        assert_eq!(components[0].maximum_bitrate(), None);
        assert_eq!(components[1].component_tag(), 0x11);
        assert_eq!(components[1].maximum_bitrate(), Some(0x40));
    }

    #[test]
    fn test_audio_component_descriptor() {
        #[rustfmt::skip]
        let data = [
            0xC4, 0x0D,
            0x02, 0x01, 0x10, 0x0F, 0x00, 0xCE,
            0x6A, 0x70, 0x6E,
            0x65, 0x6E, 0x67,
            0xAA,
        ];
        let d = AudioComponentDescriptor::from_descriptor(first(&data)).unwrap();
        assert_eq!(d.stream_content(), 0x02);
        assert_eq!(d.component_type(), 0x01);
        assert_eq!(d.component_tag(), 0x10);
        assert_eq!(d.stream_type(), 0x0F);
        assert_eq!(d.simulcast_group_tag(), 0x00);
        assert!(d.es_multi_lingual_flag());
        assert!(d.main_component_flag());
        assert_eq!(d.quality_indicator(), 0);
        assert_eq!(d.sampling_rate(), 7);
        assert_eq!(d.iso_639_language_code(), LangCode::JPN);
        assert_eq!(d.iso_639_language_code_2(), Some(LangCode::ENG));
        assert_eq!(d.text().unwrap(), "お");

        // 2言語多重でなければ第2言語はなく、記述もその分だけ前に来る
        #[rustfmt::skip]
        let data = [
            0xC4, 0x0A,
            0x02, 0x01, 0x10, 0x0F, 0x00, 0x4E,
            0x6A, 0x70, 0x6E,
            0xAA,
        ];
        let d = AudioComponentDescriptor::from_descriptor(first(&data)).unwrap();
        assert!(!d.es_multi_lingual_flag());
        assert_eq!(d.iso_639_language_code_2(), None);
        assert_eq!(d.text().unwrap(), "お");
    }

    #[test]
    fn test_data_content_descriptor() {
        #[rustfmt::skip]
        let data = [
            0xC7, 0x0D,
            0x00, 0x08,
            0x40,
            0x02, 0x01, 0x02,
            0x01, 0x50,
            0x6A, 0x70, 0x6E,
            0x01, 0xAA,
        ];
        let d = DataContentDescriptor::from_descriptor(first(&data)).unwrap();
        assert_eq!(d.data_component_id(), 0x0008);
        assert_eq!(d.entry_component(), 0x40);
        assert_eq!(d.selector_length(), 2);
        assert_eq!(d.selector_bytes(), &[0x01, 0x02]);
        assert_eq!(d.num_of_component_ref(), 1);
        assert_eq!(d.component_refs(), &[0x50]);
        assert_eq!(d.iso_639_language_code(), LangCode::JPN);
        assert_eq!(d.text_length(), 1);
        assert_eq!(d.text().unwrap(), "お");
    }
}
