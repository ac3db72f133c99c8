use chat_memory::keywords::is_stopword;
use chat_memory::search::relevance_score;
use chat_memory::{
    ChatMessage, MemoryConfig, MemoryManager, MessageRole, estimate_tokens, extract_keywords,
    generate_summary, search_relevant_memories,
};
use proptest::prelude::*;

fn history_strategy() -> impl Strategy<Value = Vec<ChatMessage>> {
    let turn = (any::<bool>(), "[a-z你好]{1,6}( [a-z]{1,6}){0,8}");
    prop::collection::vec(turn, 0..30).prop_map(|turns| {
        turns
            .into_iter()
            .enumerate()
            .map(|(i, (is_user, content))| {
                let role = if is_user {
                    MessageRole::User
                } else {
                    MessageRole::Assistant
                };
                ChatMessage::new(role, content).with_id(i.to_string())
            })
            .collect()
    })
}

fn config_strategy() -> impl Strategy<Value = MemoryConfig> {
    (0usize..30, 0usize..60).prop_map(|(max_messages, max_tokens)| {
        MemoryConfig::default()
            .with_max_messages(max_messages)
            .with_max_tokens(max_tokens)
    })
}

fn positions(messages: &[ChatMessage]) -> Vec<usize> {
    messages.iter().map(|m| m.id.parse().unwrap()).collect()
}

fn total_tokens(messages: &[ChatMessage]) -> usize {
    messages.iter().map(|m| estimate_tokens(&m.content)).sum()
}

proptest! {
    #[test]
    fn optimized_context_respects_message_budget(
        history in history_strategy(),
        config in config_strategy(),
    ) {
        let max_messages = config.max_messages;
        let optimized = MemoryManager::with_config(config).optimize_context(&history);
        prop_assert!(optimized.len() <= history.len().min(max_messages));
    }

    #[test]
    fn optimized_context_respects_token_budget(
        history in history_strategy(),
        config in config_strategy(),
    ) {
        let max_tokens = config.max_tokens;
        let optimized = MemoryManager::with_config(config).optimize_context(&history);
        prop_assert!(total_tokens(&optimized) <= max_tokens);
    }

    #[test]
    fn optimized_context_preserves_order(
        history in history_strategy(),
        config in config_strategy(),
    ) {
        let optimized = MemoryManager::with_config(config).optimize_context(&history);
        let kept = positions(&optimized);
        prop_assert!(kept.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn optimized_context_is_idempotent(
        history in history_strategy(),
        config in config_strategy(),
    ) {
        let manager = MemoryManager::with_config(config);
        let once = manager.optimize_context(&history);
        let twice = manager.optimize_context(&once);
        prop_assert_eq!(positions(&once), positions(&twice));
    }

    #[test]
    fn keywords_are_bounded_and_meaningful(text in "\\PC{0,120}", limit in 0usize..8) {
        let keywords = extract_keywords(&text, limit);
        prop_assert!(keywords.len() <= limit);
        for keyword in &keywords {
            prop_assert!(keyword.chars().count() > 1);
            prop_assert!(!is_stopword(keyword));
        }
    }

    #[test]
    fn search_results_are_ranked_and_positive(
        history in history_strategy(),
        keywords in prop::collection::vec("[a-z]{1,3}", 0..4),
        limit in 0usize..8,
    ) {
        let results = search_relevant_memories(&history, &keywords, limit);
        prop_assert!(results.len() <= limit);

        let scores: Vec<usize> = results
            .iter()
            .map(|m| relevance_score(&m.content, &keywords))
            .collect();
        prop_assert!(scores.iter().all(|&s| s > 0));
        prop_assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
    }
}

#[test]
fn summary_of_empty_history_is_empty() {
    assert_eq!(generate_summary(&[]), "");
}
