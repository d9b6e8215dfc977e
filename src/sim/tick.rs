//! 仿真时间类型
//!
//! 定义仿真 tick 及其与人类可读时间单位的换算。
//! 一个 tick 名义上等于 1 纳秒，因此 "1GHz" 时钟的周期是 1 tick，
//! "5ns" 的链路时延是 5 tick。

use crate::error::ConfigError;

/// 仿真时间（tick，名义上为纳秒）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    pub fn from_nanos(ns: u64) -> Tick {
        Tick(ns)
    }

    pub fn from_micros(us: u64) -> Tick {
        Tick(us.saturating_mul(1_000))
    }

    pub fn from_millis(ms: u64) -> Tick {
        Tick(ms.saturating_mul(1_000_000))
    }

    pub fn saturating_add(self, other: Tick) -> Tick {
        Tick(self.0.saturating_add(other.0))
    }

    /// 解析时钟频率字符串（"1GHz"、"500MHz"、"1KHz"），返回周期 tick 数。
    ///
    /// 周期 = 1GHz 基准频率 / 给定频率。零频率或高于 1GHz 基准的
    /// 频率视为配置错误。
    pub fn parse_rate(s: &str) -> Result<u64, ConfigError> {
        let t = s.trim();
        let bad = || ConfigError::BadRate(s.to_string());

        let (num, unit) = split_unit(t).ok_or_else(bad)?;
        let hz: u64 = match unit.to_ascii_lowercase().as_str() {
            "ghz" => num.checked_mul(1_000_000_000),
            "mhz" => num.checked_mul(1_000_000),
            "khz" => num.checked_mul(1_000),
            "hz" => Some(num),
            _ => None,
        }
        .ok_or_else(bad)?;

        if hz == 0 || hz > 1_000_000_000 {
            return Err(bad());
        }
        Ok(1_000_000_000 / hz)
    }

    /// 解析时延字符串（"5ns"、"2us"、"1ms"），返回 tick 数。
    pub fn parse_latency(s: &str) -> Result<Tick, ConfigError> {
        let t = s.trim();
        let bad = || ConfigError::BadLatency(s.to_string());

        let (num, unit) = split_unit(t).ok_or_else(bad)?;
        match unit.to_ascii_lowercase().as_str() {
            "ns" => Ok(Tick::from_nanos(num)),
            "us" => Ok(Tick::from_micros(num)),
            "ms" => Ok(Tick::from_millis(num)),
            _ => Err(bad()),
        }
    }
}

/// 把 "123unit" 拆成数字和单位两部分。
fn split_unit(s: &str) -> Option<(u64, &str)> {
    let digits_end = s.find(|c: char| !c.is_ascii_digit())?;
    if digits_end == 0 {
        return None;
    }
    let num: u64 = s[..digits_end].parse().ok()?;
    Some((num, &s[digits_end..]))
}
