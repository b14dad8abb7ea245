//! 설정 파일 종류별 경로 결정.

use std::io;
use std::path::{Component, Path, PathBuf};

use super::io_miss;
use crate::application::config::ProbeConfig;
use crate::application::ports::FileSystem;
use crate::domain::parameter::{Dialect, SourceKind};
use crate::domain::policy::natural_cmp;
use crate::domain::settings::LookupMiss;

/// 한 번 결정되면 바뀌지 않는 설정 파일(경로는 존재하지 않을 수 있음).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub path: PathBuf,
    pub dialect: Dialect,
}

pub struct ConfigFileLocator<'a> {
    pub fs: &'a dyn FileSystem,
    pub config: &'a ProbeConfig,
}

impl<'a> ConfigFileLocator<'a> {
    /// 고정 경로는 그대로, 데이터베이스 설정은 glob 후보 중 가장 최신 버전을 고른다.
    /// 후보가 없으면 `SourceAbsent`, 디렉터리를 나열할 수 없으면 `SourceUnreadable`이다.
    pub fn locate(&self, kind: SourceKind) -> Result<ConfigSource, LookupMiss> {
        let path = match kind {
            SourceKind::ServiceConf => self.config.host_path(&self.config.service_conf),
            SourceKind::DataServiceConf => self.config.host_path(&self.config.data_service_conf),
            SourceKind::DatabaseConf => self.newest_match(&self.config.database_conf_pattern())?,
        };

        Ok(ConfigSource {
            path,
            dialect: kind.dialect(),
        })
    }

    fn newest_match(&self, pattern: &Path) -> Result<PathBuf, LookupMiss> {
        expand_glob(self.fs, pattern)?
            .into_iter()
            .max_by(|a, b| natural_cmp(&a.to_string_lossy(), &b.to_string_lossy()))
            .ok_or_else(|| LookupMiss::SourceAbsent(pattern.to_path_buf()))
    }
}

/// 와일드카드 구성요소를 디렉터리 한 단계씩 펼쳐 실제 파일 경로 목록을 만든다.
/// 존재 여부를 확인할 수 없는 후보는 남겨 두어 읽기 단계에서 분류되게 한다.
fn expand_glob(fs: &dyn FileSystem, pattern: &Path) -> Result<Vec<PathBuf>, LookupMiss> {
    let mut candidates = vec![PathBuf::new()];

    for component in pattern.components() {
        let part = component.as_os_str().to_string_lossy();
        if !matches!(component, Component::Normal(_)) || !has_wildcard(&part) {
            for candidate in &mut candidates {
                candidate.push(component);
            }
            continue;
        }

        let mut next = Vec::new();
        for base in &candidates {
            let mut names = match fs.read_dir(base) {
                Ok(names) => names,
                Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
                Err(err) => return Err(io_miss(base, &err)),
            };
            names.sort();
            for name in names {
                if wildcard_match(&part, &name) {
                    next.push(base.join(name));
                }
            }
        }
        candidates = next;
    }

    candidates.retain(|path| fs.exists(path).unwrap_or(true));
    Ok(candidates)
}

fn has_wildcard(part: &str) -> bool {
    part.contains(['*', '?'])
}

/// `*`(0개 이상)와 `?`(정확히 1개)만 지원하는 단순 매칭.
fn wildcard_match(pattern: &str, name: &str) -> bool {
    let p: Vec<char> = pattern.chars().collect();
    let n: Vec<char> = name.chars().collect();
    let (mut pi, mut ni) = (0, 0);
    let mut star: Option<(usize, usize)> = None;

    while ni < n.len() {
        if pi < p.len() && (p[pi] == '?' || p[pi] == n[ni]) {
            pi += 1;
            ni += 1;
        } else if pi < p.len() && p[pi] == '*' {
            star = Some((pi, ni));
            pi += 1;
        } else if let Some((sp, sn)) = star {
            pi = sp + 1;
            ni = sn + 1;
            star = Some((sp, sn + 1));
        } else {
            return false;
        }
    }

    p[pi..].iter().all(|&c| c == '*')
}
