//! PID関連。

use std::fmt;

/// MPEG2-TSのPID（13ビット）。
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Pid(u16);

impl Pid {
    /// PIDの最大値。
    pub const MAX: u16 = 0x1FFF;

    /// Network Information Table
    pub const NIT: Pid = Pid::new(0x0010);
    /// Service Description Table
    pub const SDT: Pid = Pid::new(0x0011);
    /// Bouquet Association Table
    pub const BAT: Pid = Pid::new(0x0011);
    /// Event Information Table
    pub const EIT1: Pid = Pid::new(0x0012);
    /// Event Information Table（地上デジタル）
    pub const EIT2: Pid = Pid::new(0x0026);
    /// Event Information Table（地上デジタル）
    pub const EIT3: Pid = Pid::new(0x0027);
    /// Running Status Table
    pub const RST: Pid = Pid::new(0x0013);
    /// Time and Date Table
    pub const TDT: Pid = Pid::new(0x0014);
    /// Time Offset Table
    pub const TOT: Pid = Pid::new(0x0014);
    /// Download Control Table
    pub const DCT: Pid = Pid::new(0x0017);
    /// Discontinuity Information Table
    pub const DIT: Pid = Pid::new(0x001E);
    /// Selection Information Table
    pub const SIT: Pid = Pid::new(0x001F);
    /// Local event Information Table
    pub const LIT: Pid = Pid::new(0x0020);
    /// Event Relation Table
    pub const ERT: Pid = Pid::new(0x0021);
    /// Partial Content Announcement Table
    pub const PCAT: Pid = Pid::new(0x0022);
    /// Software Download Trigger Table
    pub const SDTT1: Pid = Pid::new(0x0023);
    /// Software Download Trigger Table（地上デジタル）
    pub const SDTT2: Pid = Pid::new(0x0028);
    /// Broadcaster Information Table
    pub const BIT: Pid = Pid::new(0x0024);
    /// Network Board Information Table
    pub const NBIT: Pid = Pid::new(0x0025);
    /// Linked Description Table
    pub const LDT: Pid = Pid::new(0x0025);
    /// Common Data Table
    pub const CDT: Pid = Pid::new(0x0029);
    /// TLV分割伝送
    pub const TLV: Pid = Pid::new(0x002D);
    /// Address Map Table
    pub const AMT: Pid = Pid::new(0x002E);
    /// 複数フレームヘッダ情報
    pub const MFH: Pid = Pid::new(0x002F);
    /// ヌルパケット
    pub const NULL: Pid = Pid::new(0x1FFF);

    /// `Pid`を生成する。
    ///
    /// # パニック
    ///
    /// `pid`の値が範囲外の場合、この関数はパニックする。
    #[inline]
    pub const fn new(pid: u16) -> Pid {
        assert!(pid <= Pid::MAX);
        Pid(pid)
    }

    /// `pid`がPIDとして範囲内であれば`Pid`を生成する。
    #[inline]
    pub const fn new_checked(pid: u16) -> Option<Pid> {
        if pid > Pid::MAX {
            None
        } else {
            Some(Pid(pid))
        }
    }

    /// `data`からPIDを読み出す。
    ///
    /// # パニック
    ///
    /// `data`の長さが2未満の場合、このメソッドはパニックする。
    #[inline]
    pub fn read(data: &[u8]) -> Pid {
        Pid(u16::from_be_bytes(data[..2].try_into().unwrap()) & Pid::MAX)
    }

    /// PIDを`u16`で返す。
    #[inline]
    pub const fn get(&self) -> u16 {
        self.0
    }
}

impl Default for Pid {
    fn default() -> Pid {
        Pid::NULL
    }
}

impl From<Pid> for u16 {
    fn from(value: Pid) -> u16 {
        value.get()
    }
}

impl fmt::Debug for Pid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Pid(0x{:04X})", self.0)
    }
}

macro_rules! pid_delegate_fmt {
    ($($trait:path,)*) => {
        $(
            impl $trait for Pid {
                fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    self.0.fmt(f)
                }
            }
        )*
    };
}

pid_delegate_fmt!(fmt::Display, fmt::LowerHex, fmt::UpperHex,);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pid() {
        assert_eq!(Pid::new(0x1FFF), Pid::NULL);
        assert_eq!(Pid::new_checked(0x1FFF), Some(Pid::NULL));
        assert_eq!(Pid::new_checked(0x2000), None);

        assert_eq!(Pid::read(&u16::to_be_bytes(0x0012)), Pid::EIT1);
        assert_eq!(Pid::read(&u16::to_be_bytes(0x2010)), Pid::NIT);

        assert_eq!(Pid::default(), Pid::NULL);
        assert_eq!(Pid::SDT, Pid::BAT);
        assert_eq!(u16::from(Pid::NIT), 0x0010);

        assert_eq!(format!("{}", Pid::NULL), "8191");
        assert_eq!(format!("{:04X}", Pid::EIT2), "0026");
        assert_eq!(format!("{:?}", Pid::NIT), "Pid(0x0010)");
    }
}
