use crate::error::{Error, Result};
use chardetng::EncodingDetector;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_yaml::{Deserializer, Value as YamlValue};

/// 源配置中需要用到的两个字段，其余字段忽略
#[derive(Deserialize, Debug, Default, Clone)]
pub struct SourceConfig {
    #[serde(rename = "rule-providers", default, deserialize_with = "null_as_default")]
    pub rule_providers: IndexMap<String, YamlValue>,

    #[serde(rename = "proxy-groups", default, deserialize_with = "null_as_default")]
    pub proxy_groups: Vec<YamlValue>,
}

// 字段存在但值为空（`rule-providers:`）时按缺省处理
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 自动识别编码（包括 UTF-8、GBK、Big5 等）并解码为 UTF-8，同时移除 BOM
pub fn decode_text(raw_bytes: &[u8]) -> String {
    let mut detector = EncodingDetector::new();
    detector.feed(raw_bytes, true);
    let encoding = detector.guess(None, true);

    let (cow, _, _) = encoding.decode(raw_bytes);

    const BOM: &str = "\u{FEFF}";
    if let Some(stripped) = cow.strip_prefix(BOM) {
        return stripped.to_string();
    }
    cow.into_owned()
}

/// 解析 YAML 文本，只取第一个文档
pub fn parse_source(content: &str) -> Result<SourceConfig> {
    let doc = match Deserializer::from_str(content).next() {
        Some(doc) => YamlValue::deserialize(doc)?,
        None => return Err(Error::NoData),
    };

    let has_data = doc.as_mapping().is_some_and(|map| !map.is_empty());
    if !has_data {
        return Err(Error::NoData);
    }
    Ok(serde_yaml::from_value(doc)?)
}
