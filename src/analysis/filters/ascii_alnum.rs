use crate::analysis::filter::TokenFilter;
use crate::analysis::token::Token;

/// Keeps only tokens whose every byte is ASCII `a`-`z`/`0`-`9`, rejecting
/// length-1 tokens other than "a" and "i".
pub struct AsciiAlnumFilter;

impl AsciiAlnumFilter {
    fn is_admissible(text: &str) -> bool {
        if !text.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()) {
            return false;
        }
        text.len() > 1 || text == "a" || text == "i"
    }
}

impl TokenFilter for AsciiAlnumFilter {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .into_iter()
            .filter(|token| Self::is_admissible(&token.text))
            .collect()
    }

    fn name(&self) -> &str {
        "ascii_alnum"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> bool {
        AsciiAlnumFilter::is_admissible(text)
    }

    #[test]
    fn rejects_non_ascii_alnum() {
        assert!(!run("café"));
        assert!(!run("hello-world"));
        assert!(!run(""));
    }

    #[test]
    fn single_char_admissible_only_for_a_and_i() {
        assert!(run("a"));
        assert!(run("i"));
        assert!(!run("x"));
        assert!(!run("1"));
    }

    #[test]
    fn keeps_ordinary_words_and_numbers() {
        assert!(run("computer"));
        assert!(run("42"));
        assert!(run("ab"));
    }

    #[test]
    fn filter_drops_inadmissible_tokens_in_place() {
        let tokens = vec![
            Token::new("computer".to_string(), 0),
            Token::new("x".to_string(), 1),
            Token::new("a".to_string(), 2),
        ];
        let kept: Vec<String> = AsciiAlnumFilter
            .filter(tokens)
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(kept, vec!["computer".to_string(), "a".to_string()]);
    }
}
