//! ARIBに基づいた放送ストリームのSI（NIT・SDT・EIT）を読み取り、
//! 外字符号化方式（XCS）の文字列を復号するためのクレート。
//!
//! セクションの再構成とCRC32の検証は行わない。完結したセクションの
//! バイト列を受け取り、ゼロコピーのビューを通して各フィールドへ
//! アクセスする。文字を含むフィールドは[`xcs`]の復号器を通して
//! UTF-8の文字列になる。

#![deny(missing_docs)]

pub mod lang;
pub mod pid;
pub mod psi;
pub mod time;
mod utils;
pub mod xcs;

pub use pid::Pid;
