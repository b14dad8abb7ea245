//! 설정 조회 결과와 최종 보고서 모델.
//!
//! 보고서는 선언된 파라미터 순서를 그대로 유지해야 하므로 맵 대신
//! `(이름, 항목)` 목록으로 들고, JSON 직렬화/역직렬화 시에도 순서를 보존한다.

use std::fmt;
use std::path::PathBuf;

use anyhow::Result;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 단일 값 조회 결과. `NotAvailable`은 빈 문자열 값과 구분된다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Setting {
    Value(String),
    NotAvailable,
}

impl Setting {
    pub fn value(value: impl Into<String>) -> Self {
        Setting::Value(value.into())
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Setting::Value(_))
    }
}

impl From<Option<String>> for Setting {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(v) => Setting::Value(v),
            None => Setting::NotAvailable,
        }
    }
}

impl From<Setting> for Option<String> {
    fn from(value: Setting) -> Self {
        match value {
            Setting::Value(v) => Some(v),
            Setting::NotAvailable => None,
        }
    }
}

/// 값을 찾지 못한 이유. 보고서에는 모두 `NotAvailable`로 기록되고 로그에만 남는다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupMiss {
    SourceAbsent(PathBuf),
    SourceUnreadable { path: PathBuf, reason: String },
    NoMatch { key: String },
    DependencyAbsent(String),
}

impl fmt::Display for LookupMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupMiss::SourceAbsent(path) => write!(f, "source {} does not exist", path.display()),
            LookupMiss::SourceUnreadable { path, reason } => {
                write!(f, "source {} is unreadable: {reason}", path.display())
            }
            LookupMiss::NoMatch { key } => write!(f, "no line matches '{key}'"),
            LookupMiss::DependencyAbsent(reason) => write!(f, "dependency unavailable: {reason}"),
        }
    }
}

/// JVM 시작 인자에서 분리한 힙 설정.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JavaArgsRecord {
    #[serde(rename = "Xms")]
    pub xms: Setting,
    #[serde(rename = "Xmx")]
    pub xmx: Setting,
    #[serde(rename = "Misc")]
    pub misc: Setting,
}

/// 보고서 한 항목. Java 인자 파라미터만 중첩 레코드를 가진다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportEntry {
    JavaArgs(JavaArgsRecord),
    Scalar(Setting),
}

impl ReportEntry {
    pub fn not_available() -> Self {
        ReportEntry::Scalar(Setting::NotAvailable)
    }

    pub fn is_available(&self) -> bool {
        match self {
            ReportEntry::JavaArgs(_) => true,
            ReportEntry::Scalar(setting) => setting.is_available(),
        }
    }
}

/// 선언 순서를 보존하는 파라미터 → 항목 보고서.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsReport {
    entries: Vec<(String, ReportEntry)>,
}

impl SettingsReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// 같은 이름이 이미 있으면 값을 교체한다(순서는 최초 위치 유지).
    pub fn insert(&mut self, name: impl Into<String>, entry: ReportEntry) {
        let name = name.into();
        if let Some(slot) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = entry;
        } else {
            self.entries.push((name, entry));
        }
    }

    pub fn get(&self, name: &str) -> Option<&ReportEntry> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, e)| e)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn available_count(&self) -> usize {
        self.entries.iter().filter(|(_, e)| e.is_available()).count()
    }

    /// 사람이 읽기 쉬운 JSON 문자열로 직렬화한다.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

impl Serialize for SettingsReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, entry) in &self.entries {
            map.serialize_entry(name, entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SettingsReport {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ReportVisitor;

        impl<'de> Visitor<'de> for ReportVisitor {
            type Value = SettingsReport;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a settings report object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut report = SettingsReport::new();
                while let Some((name, entry)) = access.next_entry::<String, ReportEntry>()? {
                    report.insert(name, entry);
                }
                Ok(report)
            }
        }

        deserializer.deserialize_map(ReportVisitor)
    }
}
