//! Spacing fixup between CJK ideographs and Latin text

/// CJK Unified Ideographs Extension A through the end of the basic block
fn is_chinese(c: char) -> bool {
    ('\u{3400}'..='\u{9FBF}').contains(&c)
}

fn is_latin(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '@' | '/' | '*' | '&' | '%' | '#')
}

/// Insert a space between each Chinese character and an adjacent Latin one.
///
/// Works on `char`s, so surrogate pairs and multi-byte sequences are never split.
pub fn fix_chinese_space(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + chars.len());

    for (i, &c) in chars.iter().enumerate() {
        let chinese = is_chinese(c);
        if chinese && i > 0 && is_latin(chars[i - 1]) {
            out.push(' ');
        }
        out.push(c);
        if chinese && i + 1 < chars.len() && is_latin(chars[i + 1]) {
            out.push(' ');
        }
    }

    out
}

/// Wrap a string-producing function so its output goes through [`fix_chinese_space`].
///
/// Functions taking several arguments can be adapted by taking a tuple.
pub fn fix_chinese_space_for_function<A, F>(f: F) -> impl Fn(A) -> String
where
    F: Fn(A) -> String,
{
    move |args| fix_chinese_space(&f(args))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_after_chinese() {
        assert_eq!(fix_chinese_space("我a"), "我 a");
    }

    #[test]
    fn test_space_before_chinese() {
        assert_eq!(fix_chinese_space("a我"), "a 我");
        assert_eq!(fix_chinese_space("共3条评论"), "共 3 条评论");
    }

    #[test]
    fn test_latin_only_unchanged() {
        assert_eq!(fix_chinese_space("aa"), "aa");
        assert_eq!(fix_chinese_space(""), "");
    }

    #[test]
    fn test_existing_space_and_punctuation() {
        assert_eq!(fix_chinese_space("我 a"), "我 a");
        assert_eq!(fix_chinese_space("我!"), "我!");
    }

    #[test]
    fn test_symbols_count_as_latin() {
        assert_eq!(fix_chinese_space("@用户"), "@ 用户");
        assert_eq!(fix_chinese_space("用户#1"), "用户 #1");
    }

    #[test]
    fn test_non_bmp_neighbours() {
        assert_eq!(fix_chinese_space("😀我a"), "😀我 a");
    }

    #[test]
    fn test_wrapped_function() {
        let count = fix_chinese_space_for_function(|n: u32| format!("{}条评论", n));
        assert_eq!(count(12), "12 条评论");

        let reply = fix_chinese_space_for_function(|(user, n): (String, u32)| {
            format!("{}回复了{}次", user, n)
        });
        assert_eq!(reply(("octo".to_string(), 2)), "octo 回复了 2 次");
    }
}
