//! SIテーブル（NIT・SDT・EIT）のビュー。

use std::ops::RangeInclusive;

use crate::psi::{descriptors, DescriptorIter, Section};
use crate::time::DateTime;
use crate::utils::BytesExt;

/// セクション末尾のCRC32のバイト数。
const CRC32_SIZE: usize = 4;

/// 進行状態。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunningStatus {
    /// 未定義。
    Undefined,
    /// 非実行中。
    NotRunning,
    /// 数秒以内に開始。
    StartsSoon,
    /// 停止中。
    Pausing,
    /// 実行中。
    Running,
    /// 予約。
    Reserved,
}

impl From<u8> for RunningStatus {
    #[inline]
    fn from(value: u8) -> RunningStatus {
        match value {
            0 => RunningStatus::Undefined,
            1 => RunningStatus::NotRunning,
            2 => RunningStatus::StartsSoon,
            3 => RunningStatus::Pausing,
            4 => RunningStatus::Running,
            _ => RunningStatus::Reserved,
        }
    }
}

/// NIT（Network Information Table）のビュー。
#[derive(Debug, Clone, Copy)]
pub struct Nit<'a>(&'a [u8]);

impl<'a> Nit<'a> {
    /// 自ネットワークのNITのテーブル識別。
    pub const TABLE_ID_ACTUAL: u8 = 0x40;
    /// 他ネットワークのNITのテーブル識別。
    pub const TABLE_ID_OTHER: u8 = 0x41;

    /// `data`をNITとして解釈する`Nit`を生成する。
    #[inline]
    pub fn new(data: &'a [u8]) -> Nit<'a> {
        Nit(data)
    }

    /// セクションとしてのビューを返す。
    #[inline]
    pub fn section(&self) -> Section<'a> {
        Section::new(self.0)
    }

    /// ネットワーク識別。
    #[inline]
    pub fn network_id(&self) -> u16 {
        self.0[3..=4].read_be_16()
    }

    /// ネットワーク記述子ループの長さ（12ビット）。
    #[inline]
    pub fn network_descriptors_length(&self) -> u16 {
        self.0[8..=9].read_be_16() & 0x0FFF
    }

    /// ネットワーク記述子を列挙する。
    pub fn network_descriptors(&self) -> DescriptorIter<'a> {
        let end = 10 + self.network_descriptors_length() as usize;
        descriptors(self.0.get(10..end).unwrap_or(&[]))
    }

    /// トランスポートストリームループの長さ（12ビット）。
    pub fn transport_stream_loop_length(&self) -> u16 {
        let pos = 10 + self.network_descriptors_length() as usize;
        self.0[pos..pos + 2].read_be_16() & 0x0FFF
    }

    /// ネットワークに含まれるTSを列挙する。
    pub fn transport_streams(&self) -> NetworkTransportStreamIter<'a> {
        let pos = 12 + self.network_descriptors_length() as usize;
        let end = self.0.len().saturating_sub(CRC32_SIZE);
        NetworkTransportStreamIter(self.0.get(pos..end).unwrap_or(&[]))
    }
}

/// NITのTSループを列挙するイテレーター。
#[derive(Debug, Clone)]
pub struct NetworkTransportStreamIter<'a>(&'a [u8]);

impl<'a> Iterator for NetworkTransportStreamIter<'a> {
    type Item = NetworkTransportStream<'a>;

    fn next(&mut self) -> Option<NetworkTransportStream<'a>> {
        if self.0.is_empty() {
            return None;
        }
        if self.0.len() < 6 {
            log::debug!("invalid NetworkTransportStream");
            self.0 = &[];
            return None;
        }

        let size = 6 + (self.0[4..=5].read_be_16() & 0x0FFF) as usize;
        let Some((data, rem)) = self.0.split_at_checked(size) else {
            log::debug!("invalid NetworkTransportStream length");
            self.0 = &[];
            return None;
        };

        self.0 = rem;
        Some(NetworkTransportStream(data))
    }
}

impl std::iter::FusedIterator for NetworkTransportStreamIter<'_> {}

/// ネットワークで伝送されるTSの物理的構成（ビュー）。
#[derive(Debug, Clone, Copy)]
pub struct NetworkTransportStream<'a>(&'a [u8]);

impl<'a> NetworkTransportStream<'a> {
    /// トランスポートストリーム識別。
    #[inline]
    pub fn transport_stream_id(&self) -> u16 {
        self.0[0..=1].read_be_16()
    }

    /// オリジナルネットワーク識別。
    #[inline]
    pub fn original_network_id(&self) -> u16 {
        self.0[2..=3].read_be_16()
    }

    /// TS記述子ループの長さ（12ビット）。
    #[inline]
    pub fn transport_descriptors_length(&self) -> u16 {
        self.0[4..=5].read_be_16() & 0x0FFF
    }

    /// TS記述子を列挙する。
    #[inline]
    pub fn descriptors(&self) -> DescriptorIter<'a> {
        descriptors(&self.0[6..])
    }
}

/// SDT（Service Description Table）のビュー。
#[derive(Debug, Clone, Copy)]
pub struct Sdt<'a>(&'a [u8]);

impl<'a> Sdt<'a> {
    /// 現在のTSにおけるSDTのテーブル識別。
    pub const TABLE_ID_ACTUAL: u8 = 0x42;
    /// 他のTSにおけるSDTのテーブル識別。
    pub const TABLE_ID_OTHER: u8 = 0x46;

    /// `data`をSDTとして解釈する`Sdt`を生成する。
    #[inline]
    pub fn new(data: &'a [u8]) -> Sdt<'a> {
        Sdt(data)
    }

    /// セクションとしてのビューを返す。
    #[inline]
    pub fn section(&self) -> Section<'a> {
        Section::new(self.0)
    }

    /// トランスポートストリーム識別。
    #[inline]
    pub fn transport_stream_id(&self) -> u16 {
        self.0[3..=4].read_be_16()
    }

    /// オリジナルネットワーク識別。
    #[inline]
    pub fn original_network_id(&self) -> u16 {
        self.0[8..=9].read_be_16()
    }

    /// TSに含まれるサービスを列挙する。
    pub fn services(&self) -> SdtServiceIter<'a> {
        let end = self.0.len().saturating_sub(CRC32_SIZE);
        SdtServiceIter(self.0.get(11..end).unwrap_or(&[]))
    }
}

/// SDTのサービスを列挙するイテレーター。
#[derive(Debug, Clone)]
pub struct SdtServiceIter<'a>(&'a [u8]);

impl<'a> Iterator for SdtServiceIter<'a> {
    type Item = SdtService<'a>;

    fn next(&mut self) -> Option<SdtService<'a>> {
        if self.0.is_empty() {
            return None;
        }
        if self.0.len() < 5 {
            log::debug!("invalid SdtService");
            self.0 = &[];
            return None;
        }

        let size = 5 + (self.0[3..=4].read_be_16() & 0x0FFF) as usize;
        let Some((data, rem)) = self.0.split_at_checked(size) else {
            log::debug!("invalid SdtService length");
            self.0 = &[];
            return None;
        };

        self.0 = rem;
        Some(SdtService(data))
    }
}

impl std::iter::FusedIterator for SdtServiceIter<'_> {}

/// SDTに記載されるサービス（ビュー）。
#[derive(Debug, Clone, Copy)]
pub struct SdtService<'a>(&'a [u8]);

impl<'a> SdtService<'a> {
    /// サービス識別。
    #[inline]
    pub fn service_id(&self) -> u16 {
        self.0[0..=1].read_be_16()
    }

    /// EIT事業者定義フラグ（3ビット）。
    #[inline]
    pub fn eit_user_defined_flags(&self) -> u8 {
        (self.0[2] & 0b0001_1100) >> 2
    }

    /// EIT［スケジュール］フラグ。
    #[inline]
    pub fn eit_schedule_flag(&self) -> bool {
        self.0[2] & 0b0000_0010 != 0
    }

    /// EIT［現在／次］フラグ。
    #[inline]
    pub fn eit_present_following_flag(&self) -> bool {
        self.0[2] & 0b0000_0001 != 0
    }

    /// 進行状態。
    #[inline]
    pub fn running_status(&self) -> RunningStatus {
        ((self.0[3] & 0b1110_0000) >> 5).into()
    }

    /// スクランブルの有無。
    #[inline]
    pub fn free_ca_mode(&self) -> bool {
        self.0[3] & 0b0001_0000 != 0
    }

    /// 記述子ループの長さ（12ビット）。
    #[inline]
    pub fn descriptors_loop_length(&self) -> u16 {
        self.0[3..=4].read_be_16() & 0x0FFF
    }

    /// 記述子を列挙する。
    #[inline]
    pub fn descriptors(&self) -> DescriptorIter<'a> {
        descriptors(&self.0[5..])
    }
}

/// EIT（Event Information Table）のビュー。
#[derive(Debug, Clone, Copy)]
pub struct Eit<'a>(&'a [u8]);

impl<'a> Eit<'a> {
    /// EITに割り当てられているテーブル識別の範囲。
    pub const TABLE_IDS: RangeInclusive<u8> = 0x4E..=0x6F;

    /// `table_id`がEITのものかどうかを返す。
    #[inline]
    pub fn is_eit(table_id: u8) -> bool {
        Self::TABLE_IDS.contains(&table_id)
    }

    /// `data`をEITとして解釈する`Eit`を生成する。
    #[inline]
    pub fn new(data: &'a [u8]) -> Eit<'a> {
        Eit(data)
    }

    /// セクションとしてのビューを返す。
    #[inline]
    pub fn section(&self) -> Section<'a> {
        Section::new(self.0)
    }

    /// サービス識別。
    #[inline]
    pub fn service_id(&self) -> u16 {
        self.0[3..=4].read_be_16()
    }

    /// トランスポートストリーム識別。
    #[inline]
    pub fn transport_stream_id(&self) -> u16 {
        self.0[8..=9].read_be_16()
    }

    /// オリジナルネットワーク識別。
    #[inline]
    pub fn original_network_id(&self) -> u16 {
        self.0[10..=11].read_be_16()
    }

    /// セグメント最終セクション番号。
    #[inline]
    pub fn segment_last_section_number(&self) -> u8 {
        self.0[12]
    }

    /// 最終テーブル識別。
    #[inline]
    pub fn last_table_id(&self) -> u8 {
        self.0[13]
    }

    /// サービスのイベントを列挙する。
    pub fn events(&self) -> EitEventIter<'a> {
        let end = self.0.len().saturating_sub(CRC32_SIZE);
        EitEventIter(self.0.get(14..end).unwrap_or(&[]))
    }
}

/// EITのイベントを列挙するイテレーター。
#[derive(Debug, Clone)]
pub struct EitEventIter<'a>(&'a [u8]);

impl<'a> Iterator for EitEventIter<'a> {
    type Item = EitEvent<'a>;

    fn next(&mut self) -> Option<EitEvent<'a>> {
        if self.0.is_empty() {
            return None;
        }
        if self.0.len() < 12 {
            log::debug!("invalid EitEvent");
            self.0 = &[];
            return None;
        }

        let size = 12 + (self.0[10..=11].read_be_16() & 0x0FFF) as usize;
        let Some((data, rem)) = self.0.split_at_checked(size) else {
            log::debug!("invalid EitEvent length");
            self.0 = &[];
            return None;
        };

        self.0 = rem;
        Some(EitEvent(data))
    }
}

impl std::iter::FusedIterator for EitEventIter<'_> {}

/// EITに記載されるイベント（ビュー）。
#[derive(Debug, Clone, Copy)]
pub struct EitEvent<'a>(&'a [u8]);

impl<'a> EitEvent<'a> {
    /// イベント識別。
    #[inline]
    pub fn event_id(&self) -> u16 {
        self.0[0..=1].read_be_16()
    }

    /// 開始時間（日本標準時）。
    #[inline]
    pub fn start_time(&self) -> DateTime {
        DateTime::read(self.0[2..=6].try_into().unwrap())
    }

    /// 継続時間（単位は秒）。
    #[inline]
    pub fn duration(&self) -> u32 {
        self.0[7..=9].read_bcd_second()
    }

    /// 進行状態。
    #[inline]
    pub fn running_status(&self) -> RunningStatus {
        ((self.0[10] & 0b1110_0000) >> 5).into()
    }

    /// スクランブルの有無。
    #[inline]
    pub fn free_ca_mode(&self) -> bool {
        self.0[10] & 0b0001_0000 != 0
    }

    /// 記述子ループの長さ（12ビット）。
    #[inline]
    pub fn descriptors_loop_length(&self) -> u16 {
        self.0[10..=11].read_be_16() & 0x0FFF
    }

    /// 記述子を列挙する。
    #[inline]
    pub fn descriptors(&self) -> DescriptorIter<'a> {
        descriptors(&self.0[12..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::psi::desc::{SatelliteDeliverySystemDescriptor, ServiceDescriptor,
                           ShortEventDescriptor};

    #[test]
    fn test_eit() {
        #[rustfmt::skip]
        let b = [
            // table_id, section_length
            0x4E, 0xB0, 0x23,
            // service_id
            0x04, 0x08,
            // version_number 15, current_next_indicator 0
            0xDE,
            // section_number, last_section_number
            0x00, 0x0F,
            // transport_stream_id, original_network_id
            0x7F, 0xE1, 0x7F, 0xE1,
            // segment_last_section_number, last_table_id
            0x0F, 0x01,
            // イベント（event_id, start_time, duration, running_status他）
            0x00, 0x01,
            0xB0, 0xA2, 0x12, 0x34, 0x56,
            0x01, 0x30, 0x00,
            0x80, 0x08,
            // short_event_descriptor
            0x4D, 0x06, 0x6A, 0x70, 0x6E, 0x01, 0xAA, 0x00,
            // CRC32
            0x00, 0x00, 0x00, 0x00,
        ];
        assert!(Eit::is_eit(b[0]));
        assert!(!Eit::is_eit(0x42));

        let eit = Eit::new(&b);
        assert_eq!(eit.section().table_id(), 0x4E);
        assert_eq!(eit.section().section_length(), 0x23);
        assert_eq!(eit.section().version_number(), 15);
        assert_eq!(eit.service_id(), 1032);
        assert_eq!(eit.transport_stream_id(), 32737);
        assert_eq!(eit.original_network_id(), 32737);
        assert_eq!(eit.segment_last_section_number(), 0x0F);
        assert_eq!(eit.last_table_id(), 0x01);

        let events: Vec<_> = eit.events().collect();
        assert_eq!(events.len(), 1);

        let event = &events[0];
        assert_eq!(event.event_id(), 1);
        assert_eq!(event.start_time().to_string(), "1982-09-06 12:34:56");
        assert_eq!(event.duration(), 5400);
        assert_eq!(event.running_status(), RunningStatus::Running);
        assert!(!event.free_ca_mode());
        assert_eq!(event.descriptors_loop_length(), 8);

        let d = event.descriptors().next().unwrap();
        let short_event = ShortEventDescriptor::from_descriptor(d).unwrap();
        assert_eq!(short_event.iso_639_language_code().to_string(), "jpn");
        assert_eq!(short_event.event_name().unwrap(), "お");
        assert_eq!(short_event.text().unwrap(), "");
    }

    #[test]
    fn test_sdt() {
        #[rustfmt::skip]
        let b = [
            // table_id, section_length
            0x42, 0xB0, 0x17,
            // transport_stream_id
            0x7F, 0xE1,
            // version_number 1, current_next_indicator 1
            0xC3,
            // section_number, last_section_number
            0x00, 0x00,
            // original_network_id
            0x7F, 0xE1,
            0x00,
            // サービス（service_id, EITフラグ, running_status他）
            0x04, 0x08,
            0x03,
            0x80, 0x06,
            // service_descriptor
            0x48, 0x04, 0x01, 0x00, 0x01, 0xD1,
            // CRC32
            0x00, 0x00, 0x00, 0x00,
        ];
        let sdt = Sdt::new(&b);
        assert_eq!(sdt.section().table_id(), Sdt::TABLE_ID_ACTUAL);
        assert_eq!(sdt.transport_stream_id(), 32737);
        assert_eq!(sdt.original_network_id(), 32737);

        let services: Vec<_> = sdt.services().collect();
        assert_eq!(services.len(), 1);

        let service = &services[0];
        assert_eq!(service.service_id(), 1032);
        assert_eq!(service.eit_user_defined_flags(), 0);
        assert!(service.eit_schedule_flag());
        assert!(service.eit_present_following_flag());
        assert_eq!(service.running_status(), RunningStatus::Running);
        assert!(!service.free_ca_mode());
        assert_eq!(service.descriptors_loop_length(), 6);

        let d = service.descriptors().next().unwrap();
        let sd = ServiceDescriptor::from_descriptor(d).unwrap();
        assert_eq!(sd.service_type(), 0x01);
        assert_eq!(sd.provider_name().unwrap(), "");
        assert_eq!(sd.name().unwrap(), "ぱ");
    }

    #[test]
    fn test_nit() {
        #[rustfmt::skip]
        let b = [
            // table_id, section_length
            0x40, 0xB0, 0x25,
            // network_id
            0x00, 0x04,
            // version_number 1, current_next_indicator 1
            0xC3,
            // section_number, last_section_number
            0x00, 0x00,
            // network_descriptors_length
            0xF0, 0x05,
            // service_list_descriptor
            0x41, 0x03, 0x04, 0x08, 0x01,
            // transport_stream_loop_length
            0xF0, 0x13,
            // TSループ（transport_stream_id, original_network_id他）
            0x7F, 0xE1, 0x7F, 0xE1, 0xF0, 0x0D,
            // satellite_delivery_system_descriptor
            0x43, 0x0B,
            0x01, 0x27, 0x33, 0x00,
            0x14, 0x40,
            0xE9,
            0x02, 0x16, 0x09, 0x60,
            // CRC32
            0x00, 0x00, 0x00, 0x00,
        ];
        let nit = Nit::new(&b);
        assert_eq!(nit.section().table_id(), Nit::TABLE_ID_ACTUAL);
        assert_eq!(nit.network_id(), 4);
        assert_eq!(nit.network_descriptors_length(), 5);
        assert_eq!(nit.transport_stream_loop_length(), 19);

        let d = nit.network_descriptors().next().unwrap();
        assert_eq!(d.tag(), 0x41);

        let streams: Vec<_> = nit.transport_streams().collect();
        assert_eq!(streams.len(), 1);

        let stream = &streams[0];
        assert_eq!(stream.transport_stream_id(), 32737);
        assert_eq!(stream.original_network_id(), 32737);
        assert_eq!(stream.transport_descriptors_length(), 13);

        let d = stream.descriptors().next().unwrap();
        let sat = SatelliteDeliverySystemDescriptor::from_descriptor(d).unwrap();
        assert_eq!(sat.frequency(), 1273300);
        assert_eq!(sat.orbital_position(), 1440);
        assert!(sat.west_east_flag());
        assert_eq!(sat.polarisation(), 3);
        assert_eq!(sat.modulation(), 0x09);
        assert_eq!(sat.symbol_rate(), 216096);
        assert_eq!(sat.fec_inner(), 0);
    }

    #[test]
    fn test_truncated_loops() {
        // イベントの記述子ループがセクションの残りを超えている
        #[rustfmt::skip]
        let b = [
            0x4E, 0xB0, 0x17,
            0x04, 0x08, 0xDE, 0x00, 0x0F, 0x7F, 0xE1, 0x7F, 0xE1, 0x0F, 0x01,
            0x00, 0x01, 0xB0, 0xA2, 0x12, 0x34, 0x56, 0x01, 0x30, 0x00, 0x8F, 0xFF,
            0x00, 0x00, 0x00, 0x00,
        ];
        assert_eq!(Eit::new(&b).events().count(), 0);
    }
}
