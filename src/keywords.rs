//! Keyword extraction over free text

use indexmap::IndexMap;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Number of keywords returned when the caller has no preference
pub const DEFAULT_KEYWORD_LIMIT: usize = 5;

static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // Chinese function words
        "的", "了", "在", "是", "我", "有", "和", "就", "不", "人", "都", "一",
        "一个", "上", "也", "很", "到", "说", "要", "去", "你", "会", "着",
        "没有", "看", "好", "自己", "这", "那", "他", "她", "它", "们", "我们",
        "你们", "他们", "吗", "呢", "吧", "啊", "把", "被", "与", "及", "或",
        "但", "而", "等", "对", "从", "给", "让", "用", "为", "以", "之", "于",
        "中", "么", "什么", "怎么", "如何", "可以", "请", "这个", "那个",
        // English function words
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with",
        "by", "from", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
        "do", "does", "did", "will", "would", "could", "should", "can", "may", "might",
        "must", "this", "that", "these", "those", "it", "its", "i", "you", "he", "she", "we",
        "they", "me", "him", "her", "us", "them", "my", "your", "our", "their", "what",
        "which", "who", "how", "when", "where", "why", "not", "no", "so", "if", "then",
        "than", "as", "about", "into", "there", "here", "all", "any", "some", "just",
    ]
    .into_iter()
    .collect()
});

fn is_separator(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            ',' | '.' | '!' | '?' | ';' | ':' | '"' | '\'' | '(' | ')' | '[' | ']' | '{' | '}'
                | '<' | '>' | '/' | '\\' | '|'
                | '，' | '。' | '！' | '？' | '；' | '：' | '、' | '“' | '”' | '‘' | '’'
                | '（' | '）' | '【' | '】' | '《' | '》' | '…' | '—'
        )
}

/// Returns true for words that carry no meaning on their own
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

/// Extract up to `limit` keywords from `text`, most frequent first.
///
/// The text is lowercased and split on whitespace and common Latin and CJK
/// punctuation. Single-character tokens and stopwords are discarded. Ties in
/// frequency keep the order in which the words first appeared.
pub fn extract_keywords(text: &str, limit: usize) -> Vec<String> {
    let lowered = text.to_lowercase();

    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for token in lowered.split(is_separator) {
        if token.chars().count() <= 1 || is_stopword(token) {
            continue;
        }
        *counts.entry(token).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    // sort_by is stable, so equal counts stay in first-seen order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(limit)
        .map(|(word, _)| word.to_string())
        .collect()
}
