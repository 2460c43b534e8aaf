// 検索語を to_tsquery 用の前方一致式に変換する。例: "Al  smi" -> "al:* & smi:*"
// 英数字とドットだけを語として残すため、利用者の入力した演算子はクエリに渡らない。
// "St.John" のようなドット区切りの語は PostgreSQL のパーサーと同様に 1 語として扱う
pub fn prefix_tsquery(term: &str) -> Option<String> {
    let lexemes: Vec<String> = term
        .split(|c: char| !(c.is_alphanumeric() || c == '.'))
        .map(|token| token.trim_matches('.'))
        .filter(|token| !token.is_empty())
        .map(|token| format!("{}:*", token.to_lowercase()))
        .collect();

    if lexemes.is_empty() {
        None
    } else {
        Some(lexemes.join(" & "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_word_becomes_a_prefix_lexeme() {
        assert_eq!(prefix_tsquery("ali").as_deref(), Some("ali:*"));
        assert_eq!(prefix_tsquery("  Al  Smi ").as_deref(), Some("al:* & smi:*"));
        assert_eq!(prefix_tsquery("42").as_deref(), Some("42:*"));
    }

    #[test]
    fn dotted_words_stay_whole() {
        assert_eq!(prefix_tsquery("St.John").as_deref(), Some("st.john:*"));
        assert_eq!(prefix_tsquery("Mary St.").as_deref(), Some("mary:* & st:*"));
        assert_eq!(prefix_tsquery("...").as_deref(), None);
    }

    #[test]
    fn tsquery_operators_are_stripped() {
        assert_eq!(prefix_tsquery("o'brien").as_deref(), Some("o:* & brien:*"));
        assert_eq!(prefix_tsquery("a & !b | c:*").as_deref(), Some("a:* & b:* & c:*"));
    }

    #[test]
    fn nothing_searchable_yields_none() {
        assert_eq!(prefix_tsquery(""), None);
        assert_eq!(prefix_tsquery("   "), None);
        assert_eq!(prefix_tsquery("!&|():*"), None);
    }
}
