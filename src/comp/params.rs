//! 组件参数
//!
//! 字符串键到类型化值的映射。带默认值的查找永不失败；声明为必需的
//! 键缺失时返回致命配置错误。

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 组件参数包。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params {
    map: HashMap<String, String>,
}

impl Params {
    pub fn new() -> Params {
        Params::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.map.insert(key.into(), value.into());
    }

    /// 带默认值的字符串查找。
    pub fn find_str(&self, key: &str, default: &str) -> String {
        self.map
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    /// 带默认值的整数查找。键存在但无法解析是配置错误。
    pub fn find_u64(&self, key: &str, default: u64) -> Result<u64, ConfigError> {
        match self.map.get(key) {
            None => Ok(default),
            Some(v) => v.parse().map_err(|_| ConfigError::BadParam {
                key: key.to_string(),
                value: v.clone(),
            }),
        }
    }

    /// 必需的字符串键。缺失即致命配置错误。
    pub fn find_mandatory_str(&self, key: &str) -> Result<String, ConfigError> {
        self.map
            .get(key)
            .cloned()
            .ok_or_else(|| ConfigError::MissingParam(key.to_string()))
    }

    /// 必需的整数键。
    pub fn find_mandatory_u64(&self, key: &str) -> Result<u64, ConfigError> {
        let v = self.find_mandatory_str(key)?;
        v.parse().map_err(|_| ConfigError::BadParam {
            key: key.to_string(),
            value: v,
        })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Params {
        Params {
            map: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, String>> for Params {
    fn from(map: HashMap<String, String>) -> Params {
        Params { map }
    }
}
