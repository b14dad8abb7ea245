//! 도메인 정책(기본값 계산, 버전 디렉터리 정렬).

use std::cmp::Ordering;

/// JRuby 최대 활성 인스턴스 기본값: `min(max(cores - 1, lower), upper)`.
/// 비정상적으로 작은 값도 넘치지 않고 하한으로 고정된다.
pub fn jruby_instances_for(cores: i64, lower: i64, upper: i64) -> i64 {
    cores.saturating_sub(1).max(lower).min(upper)
}

/// 숫자 구간은 수치로, 나머지는 문자로 비교한다(`9.6` < `14`).
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = Chunks::new(a);
    let mut right = Chunks::new(b);

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                let ord = match (l, r) {
                    (Chunk::Digits(x), Chunk::Digits(y)) => cmp_digits(x, y),
                    (l, r) => l.text().cmp(r.text()),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

fn cmp_digits(x: &str, y: &str) -> Ordering {
    let x = x.trim_start_matches('0');
    let y = y.trim_start_matches('0');
    x.len().cmp(&y.len()).then_with(|| x.cmp(y))
}

#[derive(Clone, Copy)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

impl<'a> Chunk<'a> {
    fn text(self) -> &'a str {
        match self {
            Chunk::Digits(s) | Chunk::Text(s) => s,
        }
    }
}

struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Chunks<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .find(|c: char| c.is_ascii_digit() != digits)
            .unwrap_or(self.rest.len());
        let (head, tail) = self.rest.split_at(end);
        self.rest = tail;
        Some(if digits {
            Chunk::Digits(head)
        } else {
            Chunk::Text(head)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jruby_instances_are_clamped() {
        assert_eq!(jruby_instances_for(1, 1, 4), 1);
        assert_eq!(jruby_instances_for(3, 1, 4), 2);
        assert_eq!(jruby_instances_for(5, 1, 4), 4);
        assert_eq!(jruby_instances_for(64, 1, 4), 4);
        assert_eq!(jruby_instances_for(0, 1, 4), 1);
        assert_eq!(jruby_instances_for(-3, 1, 4), 1);
        assert_eq!(jruby_instances_for(i64::MIN, 1, 4), 1);
        assert_eq!(jruby_instances_for(i64::MAX, 1, 4), 4);
    }

    #[test]
    fn natural_order_compares_versions_numerically() {
        assert_eq!(natural_cmp("9.6", "14"), Ordering::Less);
        assert_eq!(natural_cmp("/data/11/x", "/data/9.6/x"), Ordering::Greater);
        assert_eq!(natural_cmp("14", "014"), Ordering::Equal);
        assert_eq!(natural_cmp("14", "14.1"), Ordering::Less);
    }

    #[test]
    fn natural_order_falls_back_to_text() {
        assert_eq!(natural_cmp("alpha", "beta"), Ordering::Less);
        assert_eq!(natural_cmp("v2", "v10"), Ordering::Less);
    }
}
