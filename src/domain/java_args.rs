//! JVM 시작 인자 문자열 해석.

use super::settings::{JavaArgsRecord, Setting};

/// 최대 힙 플래그. 서비스 기본값 파일에서 인자 줄을 찾는 표식으로도 쓴다.
pub const MAX_HEAP_FLAG: &str = "-Xmx";
pub const MIN_HEAP_FLAG: &str = "-Xms";

/// 파일 내용에서 최대 힙 표식이 있는 첫 줄을 찾아 첫 번째 큰따옴표 쌍 안의 문자열을 반환한다.
pub fn find_quoted_args(contents: &str) -> Option<String> {
    let line = contents.lines().find(|line| line.contains(MAX_HEAP_FLAG))?;
    let start = line.find('"')? + 1;
    let len = line[start..].find('"')?;
    Some(line[start..start + len].to_string())
}

/// 인자 문자열을 최대 힙/최소 힙/나머지로 나눈다.
///
/// 나머지는 `<flag><value> ` 문자열을 그대로 지운 결과다. 같은 모양의 문자열이
/// 다른 위치에 있으면 함께 지워진다.
pub fn parse(raw: &str) -> JavaArgsRecord {
    let xmx = flag_value(raw, MAX_HEAP_FLAG);
    let xms = flag_value(raw, MIN_HEAP_FLAG);

    let mut misc = raw.to_string();
    for (flag, value) in [(MIN_HEAP_FLAG, xms), (MAX_HEAP_FLAG, xmx)] {
        if let Some(value) = value {
            misc = strip_flag(&misc, flag, value);
        }
    }

    JavaArgsRecord {
        xms: xms.map(str::to_string).into(),
        xmx: xmx.map(str::to_string).into(),
        misc: Setting::value(misc.trim()),
    }
}

/// 플래그 바로 뒤(공백 없이)의 토큰을 반환한다. 플래그는 토큰 시작 위치에 있어야 한다.
fn flag_value<'a>(raw: &'a str, flag: &str) -> Option<&'a str> {
    let mut from = 0;
    while let Some(pos) = raw[from..].find(flag) {
        let idx = from + pos;
        let at_boundary = raw[..idx]
            .chars()
            .next_back()
            .is_none_or(char::is_whitespace);
        if at_boundary {
            let rest = &raw[idx + flag.len()..];
            let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            return Some(&rest[..end]).filter(|v| !v.is_empty());
        }
        from = idx + flag.len();
    }
    None
}

fn strip_flag(residual: &str, flag: &str, value: &str) -> String {
    let token = format!("{flag}{value}");
    let mut out = residual.replace(&format!("{token} "), "");

    // 마지막 토큰이면 뒤에 공백이 없으므로 별도로 제거한다.
    if let Some(head) = out.strip_suffix(token.as_str())
        && head.chars().next_back().is_none_or(char::is_whitespace)
    {
        out = head.to_string();
    }
    out
}
