//! 줄 단위 `key<sep>value` 패턴 추출.

use regex::Regex;

use super::parameter::Dialect;

/// 파일 전체에서 `key`에 해당하는 값을 찾는다. 여러 줄이 일치하면 마지막 줄이 이긴다.
///
/// 키는 줄 시작(앞쪽 공백 허용)에 고정되므로 `work_mem` 검색이
/// `autovacuum_work_mem` 줄과 일치하지 않는다.
pub fn extract_last(contents: &str, key: &str, dialect: Dialect) -> Option<String> {
    let re = line_pattern(key, dialect)?;
    re.captures_iter(contents)
        .filter_map(|caps| caps.get(1))
        .last()
        .map(|m| m.as_str().to_string())
}

fn line_pattern(key: &str, dialect: Dialect) -> Option<Regex> {
    let sep = regex::escape(&dialect.separator().to_string());
    Regex::new(&format!(
        r"(?m)^[ \t]*{}[ \t]*{}[ \t]*(\S+)",
        regex::escape(key),
        sep
    ))
    .ok()
}
